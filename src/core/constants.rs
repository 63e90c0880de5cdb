//! Physical constants shared across the crate.

/// Propagation speed of the incident wave in vacuum (m/s).
///
/// Converts a projected baseline length into a phase delay:
/// `phase = 2π · f / SPEED_OF_LIGHT · projection`.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;
