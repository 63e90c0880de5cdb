//! Monte-Carlo error characterization of the direction estimator.

pub mod error_sweep;
pub mod noise;
pub mod progress;

pub use error_sweep::{CurvePoint, ErrorSweep, NoiseCurve, SweepConfig};
pub use noise::NoiseGenerator;
pub use progress::{LogProgress, NullProgress, SweepProgress};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag for long sweeps.
///
/// Cloneable and shareable across threads; the sweep checks it between
/// frequency iterations and returns [`crate::DfError::Cancelled`] once set.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// True once cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
