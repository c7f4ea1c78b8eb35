//! Amplitude-threshold noise gate
//!
//! A stateless hard gate: samples whose absolute amplitude falls below
//! the threshold are zeroed, everything else passes through untouched.
//! There is no attack/hold/release smoothing; applying the gate twice
//! is the same as applying it once.

use crate::audio::AudioBuffer;

/// Hard gate with a fixed amplitude threshold (normalized, 0.0..1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseGate {
    threshold: f32,
}

impl NoiseGate {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Gate a buffer, producing a new buffer of identical shape
    ///
    /// A threshold at or below zero is a degenerate no-op: the input is
    /// returned unchanged (as a copy), not treated as an error.
    pub fn apply(&self, buffer: &AudioBuffer) -> AudioBuffer {
        if self.threshold <= 0.0 {
            return buffer.clone();
        }
        let threshold = self.threshold;
        buffer.map_samples(|s| if s.abs() < threshold { 0.0 } else { s })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_zeroes_below_threshold() {
        let buffer = AudioBuffer::new(vec![0.01, 0.5, -0.2, 0.02], 1, 44100).unwrap();
        let gate = NoiseGate::new(0.1);

        let out = gate.apply(&buffer);
        assert_eq!(out.samples(), &[0.0, 0.5, -0.2, 0.0]);
    }

    #[test]
    fn test_sample_exactly_at_threshold_passes() {
        let buffer = AudioBuffer::new(vec![0.1, -0.1, 0.099], 1, 44100).unwrap();
        let gate = NoiseGate::new(0.1);

        let out = gate.apply(&buffer);
        assert_eq!(out.samples(), &[0.1, -0.1, 0.0]);
    }

    #[test]
    fn test_zero_threshold_is_passthrough() {
        let buffer = AudioBuffer::sine_wave(440.0, 0.1, 44100);
        let gate = NoiseGate::new(0.0);

        let out = gate.apply(&buffer);
        assert_eq!(out.samples(), buffer.samples());
    }

    #[test]
    fn test_gate_is_idempotent() {
        let buffer = AudioBuffer::new(vec![0.05, 0.3, -0.07, -0.9, 0.12], 1, 8000).unwrap();
        let gate = NoiseGate::new(0.1);

        let once = gate.apply(&buffer);
        let twice = gate.apply(&once);
        assert_eq!(once.samples(), twice.samples());
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = AudioBuffer::new(vec![], 2, 44100).unwrap();
        let gate = NoiseGate::new(0.1);

        let out = gate.apply(&buffer);
        assert!(out.is_empty());
        assert_eq!(out.channels(), 2);
    }

    #[test]
    fn test_shape_preserved_for_stereo() {
        let buffer = AudioBuffer::new(vec![0.01, 0.5, 0.5, 0.01], 2, 48000).unwrap();
        let gate = NoiseGate::new(0.1);

        let out = gate.apply(&buffer);
        assert_eq!(out.channels(), 2);
        assert_eq!(out.num_frames(), 2);
        assert_eq!(out.samples(), &[0.0, 0.5, 0.5, 0.0]);
    }
}
