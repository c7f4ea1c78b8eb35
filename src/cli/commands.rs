//! CLI command implementations
//!
//! One function per tool. Each is a single linear pipeline: validate
//! arguments, load, transform, then render or write. Parameter errors
//! fire before any output file is created.

use std::path::Path;

use log::info;

use crate::audio::{load_wav, save_wav};
use crate::dsp::{compute_spectrum, FilterSpec, NoiseGate};
use crate::error::{HamwaveError, Result};
use crate::plot;

/// Render amplitude vs time for an input file
pub fn run_display(input: &Path) -> Result<()> {
    let buffer = load_wav(input)?;

    let title = format!("Waveform - {}", input.display());
    plot::show_waveform(&buffer, &title)
}

/// Render the magnitude spectrum of an input file
pub fn run_spectrum(input: &Path, min_hz: Option<f32>, max_hz: Option<f32>) -> Result<()> {
    let buffer = load_wav(input)?;
    let min_hz = min_hz.unwrap_or(0.0);

    let view = compute_spectrum(&buffer, min_hz, max_hz)?;
    info!(
        "Spectrum: {} bins in {:.0}..{:.0} Hz",
        view.len(),
        view.frequencies.first().copied().unwrap_or(0.0),
        view.frequencies.last().copied().unwrap_or(0.0)
    );

    let title = format!("Spectrum - {}", input.display());
    plot::show_spectrum(&view, &title)
}

/// Filter an input file and write the result to a new file
pub fn run_filter(input: &Path, output: &Path, spec: FilterSpec, no_plot: bool) -> Result<()> {
    // Reject bad arguments before touching the filesystem
    spec.validate_args()?;

    let buffer = load_wav(input)?;
    let filtered = spec.apply(&buffer)?;
    save_wav(&filtered, output)?;
    println!("Saved filtered audio to: {}", output.display());

    if no_plot {
        return Ok(());
    }
    let title = format!("Filtered waveform - {}", output.display());
    plot::show_waveform(&filtered, &title)
}

/// Gate an input file below an amplitude threshold and write the result
pub fn run_noise_limit(input: &Path, output: &Path, threshold: f32, no_plot: bool) -> Result<()> {
    // The gate treats threshold 0 as a pass-through, but a negative
    // amplitude bound from the command line is a mistake, not a request.
    if threshold < 0.0 {
        return Err(HamwaveError::InvalidParameter {
            param: "threshold".to_string(),
            value: threshold.to_string(),
            expected: "threshold >= 0".to_string(),
        });
    }

    let buffer = load_wav(input)?;
    let gate = NoiseGate::new(threshold);
    let limited = gate.apply(&buffer);
    save_wav(&limited, output)?;
    println!("Saved noise-limited audio to: {}", output.display());

    if no_plot {
        return Ok(());
    }
    let title = format!("Noise-limited waveform - {}", output.display());
    plot::show_waveform(&limited, &title)
}
