//! Antenna array geometry and canonical pair enumeration.
//!
//! An [`AntennaArray`] is an ordered, immutable set of element positions,
//! optionally with one element designated as a phase reference. The element
//! ordering fixes a canonical enumeration of element pairs, and every phase
//! vector produced or consumed elsewhere in the crate is indexed by that
//! enumeration. Construct once, read forever.

mod config;

pub use config::ArrayDescription;

use std::f64::consts::PI;
use std::path::Path;

use crate::core::types::Point2D;
use crate::error::{DfError, Result};

/// Immutable antenna array layout.
///
/// Pairing mode is fixed at construction:
/// - without a reference element, pairs are all unordered `{i, j}` with
///   `i < j`, ordered by `i` then `j`;
/// - with a reference element, pairs are `(i, reference)` for every other
///   element `i`, in element order.
#[derive(Debug, Clone, PartialEq)]
pub struct AntennaArray {
    positions: Vec<Point2D>,
    reference: Option<usize>,
}

impl AntennaArray {
    /// Place `count` elements uniformly on a circle of `radius` meters.
    ///
    /// Element `k` sits at angle `2π·k/count`, starting at angle 0 and
    /// proceeding counter-clockwise.
    pub fn circular(radius: f64, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(DfError::InvalidGeometry(format!(
                "need at least 2 elements, got {}",
                count
            )));
        }
        if radius <= 0.0 {
            return Err(DfError::InvalidGeometry(format!(
                "radius must be positive, got {}",
                radius
            )));
        }
        let positions = (0..count)
            .map(|k| {
                let angle = 2.0 * PI * k as f64 / count as f64;
                Point2D::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Ok(Self {
            positions,
            reference: None,
        })
    }

    /// Circular layout plus a reference element at the origin.
    ///
    /// The reference is appended after the ring elements and every ring
    /// element is paired against it.
    pub fn circular_with_reference(radius: f64, count: usize) -> Result<Self> {
        let mut array = Self::circular(radius, count)?;
        array.positions.push(Point2D::new(0.0, 0.0));
        array.reference = Some(array.positions.len() - 1);
        Ok(array)
    }

    /// Build an array from explicit positions and an optional reference index.
    ///
    /// This is the constructor the description loader feeds into; it applies
    /// the same invariants as the canonical layouts.
    pub fn from_positions(positions: Vec<Point2D>, reference: Option<usize>) -> Result<Self> {
        if positions.len() < 2 {
            return Err(DfError::InvalidGeometry(format!(
                "need at least 2 elements, got {}",
                positions.len()
            )));
        }
        if let Some(r) = reference {
            if r >= positions.len() {
                return Err(DfError::InvalidGeometry(format!(
                    "reference index {} out of range for {} elements",
                    r,
                    positions.len()
                )));
            }
        }
        Ok(Self {
            positions,
            reference,
        })
    }

    /// Load an array from a TOML description file.
    ///
    /// See [`ArrayDescription`] for the expected format. Malformed or
    /// under-specified descriptions fail with a configuration error.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_config_str(&text)
    }

    /// Load an array from TOML description text.
    pub fn from_config_str(text: &str) -> Result<Self> {
        let description: ArrayDescription = toml::from_str(text)?;
        description.into_array()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the array holds no elements. Unreachable through the
    /// constructors, which require at least two.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Element positions in canonical order.
    pub fn positions(&self) -> &[Point2D] {
        &self.positions
    }

    /// Index of the reference element, if one is designated.
    pub fn reference(&self) -> Option<usize> {
        self.reference
    }

    /// Canonical pair enumeration.
    ///
    /// The order returned here is the index contract for every phase vector
    /// associated with this array.
    pub fn pairs(&self) -> Vec<(usize, usize)> {
        match self.reference {
            Some(r) => (0..self.positions.len())
                .filter(|&i| i != r)
                .map(|i| (i, r))
                .collect(),
            None => {
                let n = self.positions.len();
                let mut pairs = Vec::with_capacity(n * (n - 1) / 2);
                for i in 0..n {
                    for j in (i + 1)..n {
                        pairs.push((i, j));
                    }
                }
                pairs
            }
        }
    }

    /// Number of canonical pairs; the length of every phase vector for this
    /// array.
    pub fn pair_count(&self) -> usize {
        match self.reference {
            Some(_) => self.positions.len() - 1,
            None => self.positions.len() * (self.positions.len() - 1) / 2,
        }
    }

    /// Baseline vector `position(a) - position(b)` for each canonical pair,
    /// in canonical order.
    pub fn baselines(&self) -> Vec<Point2D> {
        self.pairs()
            .iter()
            .map(|&(a, b)| self.positions[a].sub(&self.positions[b]))
            .collect()
    }
}
