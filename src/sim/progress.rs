//! Injectable progress reporting for the error sweep.
//!
//! The sweep invokes these callbacks at well-defined checkpoints (per noise
//! level, per frequency). Implementations must never be relied on for
//! control flow; cancellation goes through [`super::CancelToken`].

/// Checkpoint observer for a running sweep.
///
/// Implementations must be thread-safe: with parallel workers enabled the
/// per-frequency callback fires from worker threads.
pub trait SweepProgress: Send + Sync {
    /// A noise magnitude is about to be evaluated.
    fn on_noise_level(&self, _sigma: f64) {}

    /// One (noise magnitude, frequency) condition finished.
    fn on_frequency(&self, _sigma: f64, _frequency: f64) {}
}

/// Progress reporting through the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl SweepProgress for LogProgress {
    fn on_noise_level(&self, sigma: f64) {
        log::info!("evaluating visibility noise sigma {}", sigma);
    }

    fn on_frequency(&self, sigma: f64, frequency: f64) {
        log::debug!("sigma {}: finished frequency {:.3} MHz", sigma, frequency / 1e6);
    }
}

/// Silent observer for tests and library embedding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProgress;

impl SweepProgress for NullProgress {}
