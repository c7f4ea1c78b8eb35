//! hamwave - offline audio utilities for amateur radio
//!
//! Four small batch tools behind one CLI: waveform display, FFT spectrum
//! plotting, Butterworth filtering, and amplitude-threshold noise
//! limiting. Each tool loads one WAV file, performs one transformation
//! or visualization, and either opens a plot window or writes a new file.
//! Transformations are pure: they consume a buffer and return a new one.

pub mod audio;
pub mod cli;
pub mod dsp;
pub mod error;
pub mod plot;

// Re-export commonly used types
pub use audio::AudioBuffer;
pub use error::{HamwaveError, Result};
