//! Error types for disha-df.

use thiserror::Error;

/// disha-df error type
#[derive(Error, Debug)]
pub enum DfError {
    /// Degenerate array construction (too few elements, non-positive radius).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Malformed geometry description or out-of-range sweep parameters.
    #[error("configuration error: {0}")]
    Config(String),

    /// Measured phase vector length does not match the array's pair count.
    #[error("phase vector has {actual} entries, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Sweep stopped early through a cancellation token.
    #[error("sweep cancelled")]
    Cancelled,
}

impl From<std::io::Error> for DfError {
    fn from(e: std::io::Error) -> Self {
        DfError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for DfError {
    fn from(e: toml::de::Error) -> Self {
        DfError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DfError>;
