//! TOML description loader for antenna array layouts.
//!
//! Expected format:
//!
//! ```toml
//! # optional index of the reference element
//! reference = 2
//!
//! [[elements]]
//! x = 0.5
//! y = 0.0
//!
//! [[elements]]
//! x = -0.5
//! y = 0.0
//!
//! [[elements]]
//! x = 0.0
//! y = 0.0
//! ```

use serde::Deserialize;

use super::AntennaArray;
use crate::core::types::Point2D;
use crate::error::{DfError, Result};

/// One element entry in the description file.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ElementEntry {
    pub x: f64,
    pub y: f64,
}

/// Deserialized array description.
///
/// Element order in the file is the canonical element order of the
/// resulting array.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrayDescription {
    #[serde(default)]
    elements: Vec<ElementEntry>,
    reference: Option<usize>,
}

impl ArrayDescription {
    /// Validate the description and build the array.
    pub fn into_array(self) -> Result<AntennaArray> {
        if self.elements.len() < 2 {
            return Err(DfError::Config(format!(
                "array description needs at least 2 elements, got {}",
                self.elements.len()
            )));
        }
        if let Some(r) = self.reference {
            if r >= self.elements.len() {
                return Err(DfError::Config(format!(
                    "reference index {} out of range for {} elements",
                    r,
                    self.elements.len()
                )));
            }
        }
        let positions = self
            .elements
            .iter()
            .map(|e| Point2D::new(e.x, e.y))
            .collect();
        AntennaArray::from_positions(positions, self.reference)
    }
}
