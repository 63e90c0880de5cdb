//! RMS angular-error characterization across frequency and noise level.
//!
//! For every configured noise magnitude the sweep draws a single Gaussian
//! visibility-error vector, then walks the frequency grid. At each frequency
//! it binds a fresh [`DirectionFinder`] and measures the wrapped angular
//! estimation error over a sweep of true arrival angles, reducing them to one
//! RMS value per (noise magnitude, frequency) condition.
//!
//! The noise vector is drawn once per magnitude and reused, unchanged, across
//! every frequency and every true angle under that magnitude. This mirrors a
//! fixed calibration-style visibility error rather than independent per-trial
//! measurement noise.
//!
//! The (noise magnitude, frequency) conditions are independent, so the sweep
//! optionally fans them out over worker threads; each condition owns an
//! isolated accumulator and the output is identical to a sequential run at
//! the same seed.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::array::AntennaArray;
use crate::core::math::{angle_diff, linspace};
use crate::error::{DfError, Result};
use crate::estimator::{phase_differences, AngleDomain, DirectionFinder};
use crate::sim::noise::NoiseGenerator;
use crate::sim::progress::SweepProgress;
use crate::sim::CancelToken;

/// Sweep configuration.
///
/// Defaults carry the standard operating point: 240-260 MHz over 100
/// frequency samples, true angles covering the full circle over 100 samples,
/// and visibility noise magnitudes {0.1, 0.3, 0.6, 1.0, 1.5} rad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// First frequency of the sweep (Hz).
    pub freq_start: f64,

    /// Last frequency of the sweep (Hz). Must exceed `freq_start`.
    pub freq_stop: f64,

    /// Number of frequency samples, endpoints included.
    pub freq_points: usize,

    /// Lowest true arrival angle evaluated (radians).
    pub phi_min: f64,

    /// Highest true arrival angle evaluated (radians). Must exceed `phi_min`.
    pub phi_max: f64,

    /// Number of true-angle samples, endpoints included.
    pub phi_points: usize,

    /// Visibility-error standard deviations to evaluate (radians).
    pub noise_sigmas: Vec<f64>,

    /// Candidate count of the estimator's full-circle search domain.
    pub search_points: usize,

    /// Noise seed. 0 draws from OS entropy; any other value reproduces.
    pub seed: u64,

    /// Worker threads for the (sigma, frequency) conditions. Values <= 1 run
    /// sequentially.
    pub workers: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            freq_start: 240e6,
            freq_stop: 260e6,
            freq_points: 100,
            phi_min: -PI,
            phi_max: PI,
            phi_points: 100,
            noise_sigmas: vec![0.1, 0.3, 0.6, 1.0, 1.5],
            search_points: DirectionFinder::DEFAULT_SEARCH_POINTS,
            seed: 0,
            workers: 1,
        }
    }
}

impl SweepConfig {
    /// Reject out-of-range parameters before they reach the sweep core.
    pub fn validate(&self) -> Result<()> {
        if !(self.freq_start < self.freq_stop) {
            return Err(DfError::Config(format!(
                "frequency range must satisfy start < stop, got [{}, {}]",
                self.freq_start, self.freq_stop
            )));
        }
        if self.freq_points == 0 {
            return Err(DfError::Config("freq_points must be at least 1".to_string()));
        }
        if !(self.phi_min < self.phi_max) {
            return Err(DfError::Config(format!(
                "angle range must satisfy min < max, got [{}, {}]",
                self.phi_min, self.phi_max
            )));
        }
        if self.phi_points == 0 {
            return Err(DfError::Config("phi_points must be at least 1".to_string()));
        }
        if self.search_points == 0 {
            return Err(DfError::Config(
                "search_points must be at least 1".to_string(),
            ));
        }
        if self.noise_sigmas.is_empty() {
            return Err(DfError::Config(
                "at least one noise magnitude is required".to_string(),
            ));
        }
        for &sigma in &self.noise_sigmas {
            if !sigma.is_finite() || sigma < 0.0 {
                return Err(DfError::Config(format!(
                    "noise magnitudes must be finite and non-negative, got {}",
                    sigma
                )));
            }
        }
        Ok(())
    }
}

/// One (frequency, RMS error) sample of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Operating frequency (Hz).
    pub frequency: f64,
    /// RMS of wrapped angular estimation errors (radians).
    pub rms_error: f64,
}

/// RMS-error-vs-frequency curve for one noise magnitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseCurve {
    /// Visibility-error standard deviation (radians).
    pub sigma: f64,
    /// Curve samples in ascending frequency order.
    pub points: Vec<CurvePoint>,
}

/// Estimator accuracy sweep.
#[derive(Debug, Clone)]
pub struct ErrorSweep {
    config: SweepConfig,
}

impl ErrorSweep {
    /// Create a sweep from a validated configuration.
    pub fn new(config: SweepConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Sweep configuration.
    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run the sweep, producing one curve per configured noise magnitude.
    ///
    /// NaN values arising from degenerate numeric conditions propagate into
    /// the returned curves; the sweep never masks them.
    pub fn run(
        &self,
        array: &AntennaArray,
        progress: &dyn SweepProgress,
        cancel: &CancelToken,
    ) -> Result<Vec<NoiseCurve>> {
        let cfg = &self.config;
        let freqs = linspace(cfg.freq_start, cfg.freq_stop, cfg.freq_points);
        let phis = linspace(cfg.phi_min, cfg.phi_max, cfg.phi_points);

        // One draw per magnitude, taken up front in sigma order from a single
        // seeded source. This keeps results identical between sequential and
        // parallel execution at the same seed.
        let mut generator = NoiseGenerator::new(cfg.seed);
        let noise_vectors: Vec<Vec<f64>> = cfg
            .noise_sigmas
            .iter()
            .map(|&sigma| generator.gaussian_vector(array.pair_count(), sigma))
            .collect();

        if cfg.workers > 1 {
            self.run_parallel(array, &freqs, &phis, &noise_vectors, progress, cancel)
        } else {
            self.run_sequential(array, &freqs, &phis, &noise_vectors, progress, cancel)
        }
    }

    fn run_sequential(
        &self,
        array: &AntennaArray,
        freqs: &[f64],
        phis: &[f64],
        noise_vectors: &[Vec<f64>],
        progress: &dyn SweepProgress,
        cancel: &CancelToken,
    ) -> Result<Vec<NoiseCurve>> {
        let cfg = &self.config;
        let mut curves = Vec::with_capacity(cfg.noise_sigmas.len());
        for (si, &sigma) in cfg.noise_sigmas.iter().enumerate() {
            progress.on_noise_level(sigma);
            let mut points = Vec::with_capacity(freqs.len());
            for &frequency in freqs {
                if cancel.is_cancelled() {
                    return Err(DfError::Cancelled);
                }
                let rms_error =
                    condition_rms(array, frequency, cfg.search_points, phis, &noise_vectors[si])?;
                progress.on_frequency(sigma, frequency);
                points.push(CurvePoint {
                    frequency,
                    rms_error,
                });
            }
            curves.push(NoiseCurve { sigma, points });
        }
        Ok(curves)
    }

    fn run_parallel(
        &self,
        array: &AntennaArray,
        freqs: &[f64],
        phis: &[f64],
        noise_vectors: &[Vec<f64>],
        progress: &dyn SweepProgress,
        cancel: &CancelToken,
    ) -> Result<Vec<NoiseCurve>> {
        let cfg = &self.config;
        for &sigma in &cfg.noise_sigmas {
            progress.on_noise_level(sigma);
        }

        let (task_tx, task_rx) = crossbeam_channel::unbounded::<(usize, usize)>();
        let (result_tx, result_rx) = crossbeam_channel::unbounded::<(usize, usize, Result<f64>)>();
        for si in 0..cfg.noise_sigmas.len() {
            for fi in 0..freqs.len() {
                let _ = task_tx.send((si, fi));
            }
        }
        drop(task_tx);

        let mut grid: Vec<Vec<Option<f64>>> =
            vec![vec![None; freqs.len()]; cfg.noise_sigmas.len()];
        let mut first_error: Option<DfError> = None;

        std::thread::scope(|scope| {
            for _ in 0..cfg.workers {
                let task_rx = task_rx.clone();
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    while let Ok((si, fi)) = task_rx.recv() {
                        if cancel.is_cancelled() {
                            return;
                        }
                        let frequency = freqs[fi];
                        let rms =
                            condition_rms(array, frequency, cfg.search_points, phis, &noise_vectors[si]);
                        if rms.is_ok() {
                            progress.on_frequency(cfg.noise_sigmas[si], frequency);
                        }
                        if result_tx.send((si, fi, rms)).is_err() {
                            return;
                        }
                    }
                });
            }
            drop(task_rx);
            drop(result_tx);

            for (si, fi, rms) in result_rx.iter() {
                match rms {
                    Ok(value) => grid[si][fi] = Some(value),
                    Err(e) => {
                        if first_error.is_none() {
                            first_error = Some(e);
                        }
                    }
                }
            }
        });

        if let Some(e) = first_error {
            return Err(e);
        }
        if cancel.is_cancelled() {
            return Err(DfError::Cancelled);
        }

        let mut curves = Vec::with_capacity(cfg.noise_sigmas.len());
        for (si, &sigma) in cfg.noise_sigmas.iter().enumerate() {
            let mut points = Vec::with_capacity(freqs.len());
            for (fi, &frequency) in freqs.iter().enumerate() {
                match grid[si][fi] {
                    Some(rms_error) => points.push(CurvePoint {
                        frequency,
                        rms_error,
                    }),
                    None => return Err(DfError::Cancelled),
                }
            }
            curves.push(NoiseCurve { sigma, points });
        }
        Ok(curves)
    }
}

/// RMS wrapped angular error for one (noise vector, frequency) condition.
fn condition_rms(
    array: &AntennaArray,
    frequency: f64,
    search_points: usize,
    phis: &[f64],
    noise: &[f64],
) -> Result<f64> {
    let finder = DirectionFinder::new(
        array.clone(),
        frequency,
        AngleDomain::full_circle(search_points),
    );
    let mut measured = vec![0.0; noise.len()];
    let mut sum_sq = 0.0;
    for &phi in phis {
        let theoretical = phase_differences(array, phi, frequency);
        for ((m, t), n) in measured.iter_mut().zip(&theoretical).zip(noise) {
            *m = t + n;
        }
        let estimate = finder.estimate(&measured)?;
        let error = angle_diff(estimate, phi);
        sum_sq += error * error;
    }
    Ok((sum_sq / phis.len() as f64).sqrt())
}
