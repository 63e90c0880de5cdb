//! RMS direction-finding error simulation driver.
//!
//! Sweeps operating frequency and visibility noise level for a chosen array
//! layout and reports one RMS-error-vs-frequency curve per noise magnitude.
//!
//! # Usage
//!
//! ```bash
//! # Default 4-element circular array, 240-260 MHz
//! cargo run --release --bin df-error-sim
//!
//! # Circular array with a reference element, curves exported for plotting
//! cargo run --release --bin df-error-sim -- --with-ref-element \
//!     --output-csv curves.csv
//!
//! # Reproducible run from a geometry description file
//! cargo run --release --bin df-error-sim -- \
//!     --array-geometry-file array.toml --seed 42 --workers 4 \
//!     --output-json curves.json
//! ```

use std::fs::File;
use std::io::Write as IoWrite;
use std::time::Instant;

use clap::Parser;
use serde::{Deserialize, Serialize};

use disha_df::{
    AntennaArray, CancelToken, DirectionFinder, ErrorSweep, LogProgress, NoiseCurve, SweepConfig,
};

#[derive(Parser)]
#[command(name = "df-error-sim")]
#[command(about = "Run RMS direction-finding error simulations across frequency and noise level")]
struct Args {
    /// First frequency of the sweep (Hz)
    #[arg(long, default_value_t = 240e6)]
    freq_start: f64,

    /// Last frequency of the sweep (Hz)
    #[arg(long, default_value_t = 260e6)]
    freq_stop: f64,

    /// Number of frequency samples
    #[arg(long, default_value_t = 100)]
    freq_points: usize,

    /// Lowest true arrival angle (radians)
    #[arg(long, default_value_t = -std::f64::consts::PI, allow_negative_numbers = true)]
    phi_min: f64,

    /// Highest true arrival angle (radians)
    #[arg(long, default_value_t = std::f64::consts::PI, allow_negative_numbers = true)]
    phi_max: f64,

    /// Number of true-angle samples
    #[arg(long, default_value_t = 100)]
    phi_points: usize,

    /// Element count for the generated circular array
    #[arg(long, default_value_t = 4)]
    elements: usize,

    /// Radius of the generated circular array (meters)
    #[arg(long, default_value_t = 0.5)]
    radius: f64,

    /// Add a reference element at the origin and pair every element with it
    #[arg(long)]
    with_ref_element: bool,

    /// Load the array from a TOML description instead of generating it
    #[arg(long, value_name = "FILE")]
    array_geometry_file: Option<String>,

    /// Visibility noise magnitudes to evaluate (radians)
    #[arg(
        long = "noise-sigma",
        value_delimiter = ',',
        default_values_t = [0.1, 0.3, 0.6, 1.0, 1.5]
    )]
    noise_sigmas: Vec<f64>,

    /// Candidate count of the estimator's full-circle search domain
    #[arg(long, default_value_t = DirectionFinder::DEFAULT_SEARCH_POINTS)]
    search_points: usize,

    /// Noise seed for reproducible runs (0 = OS entropy)
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads for the sweep (1 = sequential)
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Export curves to a JSON file
    #[arg(long, value_name = "FILE")]
    output_json: Option<String>,

    /// Export curves to a CSV file
    #[arg(long, value_name = "FILE")]
    output_csv: Option<String>,

    /// Suppress the stdout summary table
    #[arg(long)]
    quiet: bool,
}

// ============================================================================
// Serializable Report Structures
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SweepMetadata {
    freq_start_hz: f64,
    freq_stop_hz: f64,
    freq_points: usize,
    phi_points: usize,
    elements: usize,
    pair_count: usize,
    with_reference: bool,
    search_points: usize,
    seed: u64,
    elapsed_seconds: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SweepReport {
    metadata: SweepMetadata,
    curves: Vec<NoiseCurve>,
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let array = build_array(&args)?;

    let config = SweepConfig {
        freq_start: args.freq_start,
        freq_stop: args.freq_stop,
        freq_points: args.freq_points,
        phi_min: args.phi_min,
        phi_max: args.phi_max,
        phi_points: args.phi_points,
        noise_sigmas: args.noise_sigmas.clone(),
        search_points: args.search_points,
        seed: args.seed,
        workers: args.workers,
    };
    let sweep = ErrorSweep::new(config)?;

    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())?;

    log::info!(
        "sweeping {} frequencies x {} noise levels over a {}-element array ({} pairs)",
        args.freq_points,
        args.noise_sigmas.len(),
        array.len(),
        array.pair_count()
    );

    let start = Instant::now();
    let curves = sweep.run(&array, &LogProgress, &cancel)?;
    let elapsed = start.elapsed();

    if !args.quiet {
        print_summary(&curves, elapsed.as_secs_f64());
    }

    if args.output_json.is_some() || args.output_csv.is_some() {
        let report = SweepReport {
            metadata: SweepMetadata {
                freq_start_hz: args.freq_start,
                freq_stop_hz: args.freq_stop,
                freq_points: args.freq_points,
                phi_points: args.phi_points,
                elements: array.len(),
                pair_count: array.pair_count(),
                with_reference: array.reference().is_some(),
                search_points: args.search_points,
                seed: args.seed,
                elapsed_seconds: elapsed.as_secs_f64(),
            },
            curves,
        };

        if let Some(ref path) = args.output_json {
            if let Err(e) = export_json(&report, path) {
                eprintln!("Failed to write JSON: {}", e);
            }
        }
        if let Some(ref path) = args.output_csv {
            if let Err(e) = export_csv(&report, path) {
                eprintln!("Failed to write CSV: {}", e);
            }
        }
    }

    Ok(())
}

fn build_array(args: &Args) -> Result<AntennaArray, disha_df::DfError> {
    if let Some(ref path) = args.array_geometry_file {
        AntennaArray::from_config_file(path)
    } else if args.with_ref_element {
        AntennaArray::circular_with_reference(args.radius, args.elements)
    } else {
        AntennaArray::circular(args.radius, args.elements)
    }
}

// ============================================================================
// Output Functions
// ============================================================================

fn print_summary(curves: &[NoiseCurve], elapsed_seconds: f64) {
    println!("RMS angular error by noise magnitude ({:.1}s):", elapsed_seconds);
    println!("┌────────┬────────────┬────────────┬────────────┐");
    println!("│  sigma │   mean rad │    min rad │    max rad │");
    println!("├────────┼────────────┼────────────┼────────────┤");
    for curve in curves {
        let values: Vec<f64> = curve.points.iter().map(|p| p.rms_error).collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        println!(
            "│ {:>6.2} │ {:>10.4} │ {:>10.4} │ {:>10.4} │",
            curve.sigma, mean, min, max
        );
    }
    println!("└────────┴────────────┴────────────┴────────────┘");
}

fn export_json(report: &SweepReport, path: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    println!("JSON curves written to: {}", path);
    Ok(())
}

fn export_csv(report: &SweepReport, path: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "sigma,frequency_hz,rms_error_rad")?;
    for curve in &report.curves {
        for point in &curve.points {
            writeln!(
                file,
                "{},{},{:.6}",
                curve.sigma, point.frequency, point.rms_error
            )?;
        }
    }

    println!("CSV curves written to: {}", path);
    Ok(())
}
