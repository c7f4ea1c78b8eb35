//! Audio buffer implementation
//!
//! AudioBuffer is the core data structure for holding audio samples.
//! Transformations never mutate a buffer in place; they return new buffers.

use crate::error::{HamwaveError, Result};

/// Audio sample data with metadata
///
/// Samples are stored interleaved ([L0, R0, L1, R1, ...]) and normalized
/// to -1.0..1.0. An empty buffer is valid: the tools pass it through and
/// produce empty output rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Interleaved audio samples normalized to -1.0..1.0
    samples: Vec<f32>,
    /// Number of audio channels (1 = mono, 2 = stereo)
    channels: u16,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a new audio buffer with the given parameters
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(HamwaveError::UnsupportedFormat {
                details: "Channel count must be at least 1".to_string(),
            });
        }
        if sample_rate == 0 {
            return Err(HamwaveError::UnsupportedFormat {
                details: "Sample rate must be positive".to_string(),
            });
        }
        if samples.len() % channels as usize != 0 {
            return Err(HamwaveError::UnsupportedFormat {
                details: format!(
                    "Sample count {} is not divisible by channel count {}",
                    samples.len(),
                    channels
                ),
            });
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Create a silent buffer with the given duration
    pub fn silence(duration_secs: f32, channels: u16, sample_rate: u32) -> Self {
        let num_samples = (duration_secs * sample_rate as f32) as usize * channels as usize;
        Self {
            samples: vec![0.0; num_samples],
            channels,
            sample_rate,
        }
    }

    /// Create a mono sine wave test tone
    pub fn sine_wave(frequency: f32, duration_secs: f32, sample_rate: u32) -> Self {
        let num_samples = (duration_secs * sample_rate as f32) as usize;
        let mut samples = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let t = i as f32 / sample_rate as f32;
            samples.push((2.0 * std::f32::consts::PI * frequency * t).sin());
        }

        Self {
            samples,
            channels: 1,
            sample_rate,
        }
    }

    /// Get a reference to the interleaved samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Get the number of channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Nyquist frequency (half the sample rate)
    pub fn nyquist(&self) -> f32 {
        self.sample_rate as f32 / 2.0
    }

    /// Get the number of frames (samples per channel)
    pub fn num_frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    /// True if the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f32 {
        self.num_frames() as f32 / self.sample_rate as f32
    }

    /// Get samples for a specific channel (0-indexed)
    pub fn channel_samples(&self, channel: u16) -> Vec<f32> {
        if channel >= self.channels {
            return Vec::new();
        }
        self.samples
            .iter()
            .skip(channel as usize)
            .step_by(self.channels as usize)
            .copied()
            .collect()
    }

    /// Build a buffer with the same shape from per-channel sample vectors
    ///
    /// All channel vectors must have equal length.
    pub fn from_channels(channels: &[Vec<f32>], sample_rate: u32) -> Result<Self> {
        if channels.is_empty() {
            return Err(HamwaveError::UnsupportedFormat {
                details: "Channel count must be at least 1".to_string(),
            });
        }
        let num_frames = channels[0].len();
        if channels.iter().any(|ch| ch.len() != num_frames) {
            return Err(HamwaveError::UnsupportedFormat {
                details: "All channels must have equal length".to_string(),
            });
        }

        let mut samples = Vec::with_capacity(num_frames * channels.len());
        for frame in 0..num_frames {
            for ch in channels {
                samples.push(ch[frame]);
            }
        }
        Self::new(samples, channels.len() as u16, sample_rate)
    }

    /// Build a new buffer of identical shape by mapping each sample
    pub fn map_samples<F>(&self, f: F) -> AudioBuffer
    where
        F: Fn(f32) -> f32,
    {
        Self {
            samples: self.samples.iter().map(|&s| f(s)).collect(),
            channels: self.channels,
            sample_rate: self.sample_rate,
        }
    }

    /// Check if buffers are approximately equal within tolerance
    pub fn is_approx_equal(&self, other: &AudioBuffer, tolerance: f32) -> bool {
        if self.channels != other.channels || self.sample_rate != other.sample_rate {
            return false;
        }
        if self.samples.len() != other.samples.len() {
            return false;
        }
        self.samples
            .iter()
            .zip(other.samples.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_wave_generation() {
        let buffer = AudioBuffer::sine_wave(440.0, 1.0, 44100);
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.sample_rate(), 44100);
        assert_eq!(buffer.num_frames(), 44100);
        assert!((buffer.duration() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_silence_generation() {
        let buffer = AudioBuffer::silence(2.0, 2, 48000);
        assert_eq!(buffer.channels(), 2);
        assert_eq!(buffer.num_frames(), 96000);
        assert!(buffer.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_empty_buffer_is_valid() {
        let buffer = AudioBuffer::new(vec![], 1, 44100).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.num_frames(), 0);
    }

    #[test]
    fn test_zero_channels_rejected() {
        assert!(AudioBuffer::new(vec![0.0], 0, 44100).is_err());
    }

    #[test]
    fn test_ragged_interleave_rejected() {
        // 3 samples cannot be 2 channels
        assert!(AudioBuffer::new(vec![0.0, 0.0, 0.0], 2, 44100).is_err());
    }

    #[test]
    fn test_channel_extraction() {
        let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]; // L, R, L, R, L, R
        let buffer = AudioBuffer::new(samples, 2, 44100).unwrap();

        assert_eq!(buffer.channel_samples(0), vec![1.0, 3.0, 5.0]);
        assert_eq!(buffer.channel_samples(1), vec![2.0, 4.0, 6.0]);
        assert!(buffer.channel_samples(2).is_empty());
    }

    #[test]
    fn test_from_channels_round_trip() {
        let original = AudioBuffer::new(vec![1.0, 2.0, 3.0, 4.0], 2, 44100).unwrap();
        let left = original.channel_samples(0);
        let right = original.channel_samples(1);

        let rebuilt = AudioBuffer::from_channels(&[left, right], 44100).unwrap();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_from_channels_unequal_lengths() {
        let result = AudioBuffer::from_channels(&[vec![1.0, 2.0], vec![1.0]], 44100);
        assert!(result.is_err());
    }
}
