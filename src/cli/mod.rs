//! Command-line interface definitions

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::dsp::{FilterClass, DEFAULT_ORDER};

/// Offline audio utilities for amateur radio
#[derive(Parser)]
#[command(name = "hamwave", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display the waveform of an audio file
    Display {
        /// Input WAV file
        input: PathBuf,
    },

    /// Plot the FFT magnitude spectrum of an audio file
    Spectrum {
        /// Input WAV file
        input: PathBuf,
        /// Lower bound of the displayed range in Hz (default: 0)
        min_hz: Option<f32>,
        /// Upper bound of the displayed range in Hz (default: Nyquist)
        max_hz: Option<f32>,
    },

    /// Apply a Butterworth filter and write the result to a new file
    Filter {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Filter response type
        #[arg(value_enum)]
        filter_type: FilterType,
        /// Cutoff frequency in Hz (lower cutoff for band filters)
        cutoff: f32,
        /// Upper cutoff frequency in Hz (band filters only)
        cutoff_high: Option<f32>,
        /// Filter order
        #[arg(long, default_value_t = DEFAULT_ORDER)]
        order: usize,
        /// Skip the waveform window after writing
        #[arg(long)]
        no_plot: bool,
    },

    /// Zero samples below an amplitude threshold and write the result
    NoiseLimit {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Amplitude threshold (normalized, 0.0..1.0); samples below it are zeroed
        #[arg(allow_hyphen_values = true)]
        threshold: f32,
        /// Skip the waveform window after writing
        #[arg(long)]
        no_plot: bool,
    },
}

/// Filter response type as spelled on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterType {
    Low,
    High,
    Band,
}

impl From<FilterType> for FilterClass {
    fn from(ft: FilterType) -> Self {
        match ft {
            FilterType::Low => FilterClass::LowPass,
            FilterType::High => FilterClass::HighPass,
            FilterType::Band => FilterClass::BandPass,
        }
    }
}
