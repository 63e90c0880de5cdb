//! Exhaustive-search direction estimator.
//!
//! Inverts the phase model: given a measured phase-difference vector, find
//! the candidate arrival angle whose theoretical vector best matches it.
//! The match score wraps each per-pair discrepancy into (-π, π] before
//! squaring, so angles whose raw phases straddle a period boundary are not
//! falsely penalized.

use std::f64::consts::PI;

use crate::array::AntennaArray;
use crate::core::math::{linspace, normalize_angle};
use crate::error::{DfError, Result};
use crate::estimator::phase_model::phase_differences;

/// Finite ordered set of candidate arrival angles, in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleDomain {
    angles: Vec<f64>,
}

impl AngleDomain {
    /// Uniform sampling of [min, max], endpoints included.
    ///
    /// Rejects empty or inverted ranges; range validation belongs to the
    /// configuration surface, before candidates reach the search.
    pub fn linspace(min: f64, max: f64, points: usize) -> Result<Self> {
        if points == 0 {
            return Err(DfError::Config(
                "angle domain needs at least 1 point".to_string(),
            ));
        }
        if !(min < max) {
            return Err(DfError::Config(format!(
                "angle domain range must satisfy min < max, got [{}, {}]",
                min, max
            )));
        }
        Ok(Self {
            angles: linspace(min, max, points),
        })
    }

    /// Dense uniform sampling of the full circle [-π, π].
    ///
    /// `points` is clamped to at least 1, so the domain is never empty.
    pub fn full_circle(points: usize) -> Self {
        Self {
            angles: linspace(-PI, PI, points.max(1)),
        }
    }

    /// Candidate angles in ascending search order.
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false: the constructors guarantee at least one candidate.
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Spacing between adjacent candidates, or the full span for a
    /// single-candidate domain.
    pub fn grid_spacing(&self) -> f64 {
        if self.angles.len() < 2 {
            return 0.0;
        }
        self.angles[1] - self.angles[0]
    }
}

/// Direction estimator bound to one array and one operating frequency.
///
/// Stateless beyond the binding: `estimate` only reads, so one instance can
/// serve many measurements at the same frequency, concurrently.
#[derive(Debug, Clone)]
pub struct DirectionFinder {
    array: AntennaArray,
    frequency: f64,
    domain: AngleDomain,
}

impl DirectionFinder {
    /// Default candidate count for the full-circle search domain.
    pub const DEFAULT_SEARCH_POINTS: usize = 360;

    /// Create an estimator searching the given candidate domain.
    pub fn new(array: AntennaArray, frequency: f64, domain: AngleDomain) -> Self {
        Self {
            array,
            frequency,
            domain,
        }
    }

    /// Create an estimator searching the full circle at the default
    /// resolution.
    pub fn with_full_search(array: AntennaArray, frequency: f64) -> Self {
        Self::new(
            array,
            frequency,
            AngleDomain::full_circle(Self::DEFAULT_SEARCH_POINTS),
        )
    }

    /// Bound array.
    pub fn array(&self) -> &AntennaArray {
        &self.array
    }

    /// Bound operating frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Candidate domain.
    pub fn domain(&self) -> &AngleDomain {
        &self.domain
    }

    /// Estimate the arrival angle for a measured phase vector.
    ///
    /// Scores every candidate angle by the sum of squared wrapped per-pair
    /// discrepancies against the theoretical vector, and returns the
    /// minimum-scoring candidate. Ties break to the first occurrence in
    /// domain order, so the result is deterministic.
    pub fn estimate(&self, measured: &[f64]) -> Result<f64> {
        let expected = self.array.pair_count();
        if measured.len() != expected {
            return Err(DfError::DimensionMismatch {
                expected,
                actual: measured.len(),
            });
        }

        let mut best_angle = self.domain.angles()[0];
        let mut best_score = f64::INFINITY;
        for &candidate in self.domain.angles() {
            let theoretical = phase_differences(&self.array, candidate, self.frequency);
            let mut score = 0.0;
            for (m, t) in measured.iter().zip(&theoretical) {
                let discrepancy = normalize_angle(m - t);
                score += discrepancy * discrepancy;
            }
            // Strict comparison keeps the earliest candidate on ties, and a
            // NaN score never displaces the incumbent.
            if score < best_score {
                best_score = score;
                best_angle = candidate;
            }
        }
        Ok(best_angle)
    }
}
