//! Signal processing: Butterworth filtering, noise gating, spectrum analysis

pub mod filter;
pub mod noise_gate;
pub mod spectrum;

pub use filter::{FilterClass, FilterSpec, DEFAULT_ORDER};
pub use noise_gate::NoiseGate;
pub use spectrum::{compute_spectrum, SpectrumView};
