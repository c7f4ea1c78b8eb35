//! Windowed FFT spectrum computation
//!
//! Produces a single-sided magnitude spectrum of channel 0, restricted
//! to a [min_hz, max_hz) range. Magnitudes are |X[k]| / N with interior
//! bins doubled so a full-scale sine reads near its amplitude.

use crate::audio::AudioBuffer;
use crate::error::{HamwaveError, Result};
use rustfft::{num_complex::Complex, FftPlanner};

/// Ascending frequency bins and their magnitudes, ready for rendering
#[derive(Debug, Clone)]
pub struct SpectrumView {
    pub frequencies: Vec<f32>,
    pub magnitudes: Vec<f32>,
}

impl SpectrumView {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Frequency of the largest-magnitude bin, if any bins exist
    pub fn peak_frequency(&self) -> Option<f32> {
        self.magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| self.frequencies[i])
    }
}

/// Compute the windowed magnitude spectrum of channel 0
///
/// `max_hz` defaults to the Nyquist frequency and is clamped to it; the
/// range must satisfy min_hz < max_hz after clamping. Buffers shorter
/// than 2 samples cannot be transformed.
pub fn compute_spectrum(
    buffer: &AudioBuffer,
    min_hz: f32,
    max_hz: Option<f32>,
) -> Result<SpectrumView> {
    let samples = buffer.channel_samples(0);
    let n = samples.len();
    if n < 2 {
        return Err(HamwaveError::InsufficientData {
            needed: 2,
            actual: n,
        });
    }

    if min_hz < 0.0 {
        return Err(HamwaveError::InvalidParameter {
            param: "min-hz".to_string(),
            value: min_hz.to_string(),
            expected: "min-hz >= 0".to_string(),
        });
    }
    let nyquist = buffer.nyquist();
    let max_hz = max_hz.unwrap_or(nyquist).min(nyquist);
    if min_hz >= max_hz {
        return Err(HamwaveError::InvalidParameter {
            param: "min-hz".to_string(),
            value: min_hz.to_string(),
            expected: format!("less than max-hz ({} Hz)", max_hz),
        });
    }

    // Hann window to reduce spectral leakage
    let mut bins: Vec<Complex<f32>> = samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let phase = 2.0 * std::f32::consts::PI * i as f32 / (n - 1) as f32;
            let w = 0.5 * (1.0 - phase.cos());
            Complex::new(s * w, 0.0)
        })
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut bins);

    let bin_width = buffer.sample_rate() as f32 / n as f32;
    let half = n / 2 + 1;
    let scale = 1.0 / n as f32;

    let mut frequencies = Vec::new();
    let mut magnitudes = Vec::new();
    for (k, bin) in bins.iter().take(half).enumerate() {
        let freq = k as f32 * bin_width;
        if freq < min_hz || freq >= max_hz {
            continue;
        }
        // Single-sided spectrum: double everything except DC and Nyquist
        let single_sided = if k == 0 || (n % 2 == 0 && k == n / 2) {
            1.0
        } else {
            2.0
        };
        frequencies.push(freq);
        magnitudes.push(bin.norm() * scale * single_sided);
    }

    Ok(SpectrumView {
        frequencies,
        magnitudes,
    })
}
