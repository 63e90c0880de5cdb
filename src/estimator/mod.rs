//! Direction estimation: the phase model and its exhaustive-search inverse.

pub mod direction_finder;
pub mod phase_model;

pub use direction_finder::{AngleDomain, DirectionFinder};
pub use phase_model::phase_differences;
