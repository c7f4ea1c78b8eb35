//! Audio file I/O operations
//!
//! Handles loading and saving WAV files using the hound crate. These are
//! the Loader/Writer collaborators every tool shares.

use crate::audio::AudioBuffer;
use crate::error::{HamwaveError, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::info;
use std::path::Path;

/// Load a WAV file into an AudioBuffer
///
/// Integer formats are normalized to -1.0..1.0 by 2^(bits-1).
pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<AudioBuffer> {
    let path = path.as_ref();
    let reader = WavReader::open(path).map_err(|e| HamwaveError::AudioReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let spec = reader.spec();
    let channels = spec.channels;
    let sample_rate = spec.sample_rate;

    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| {
                s.map_err(|e| HamwaveError::AudioReadError {
                    path: path.display().to_string(),
                    source: e,
                })
            })
            .collect::<Result<Vec<f32>>>()?,
        SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            let max_val = (1u32 << (bits - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| {
                    s.map(|v| v as f32 / max_val)
                        .map_err(|e| HamwaveError::AudioReadError {
                            path: path.display().to_string(),
                            source: e,
                        })
                })
                .collect::<Result<Vec<f32>>>()?
        }
    };

    let buffer = AudioBuffer::new(samples, channels, sample_rate)?;
    info!(
        "Loaded {}: {} frames, {} channel(s), {} Hz",
        path.display(),
        buffer.num_frames(),
        buffer.channels(),
        buffer.sample_rate()
    );
    Ok(buffer)
}

/// Save an AudioBuffer to a WAV file (32-bit float)
pub fn save_wav<P: AsRef<Path>>(buffer: &AudioBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let spec = WavSpec {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| HamwaveError::AudioWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    for &sample in buffer.samples() {
        writer
            .write_sample(sample)
            .map_err(|e| HamwaveError::AudioWriteError {
                path: path.display().to_string(),
                source: e,
            })?;
    }

    writer.finalize().map_err(|e| HamwaveError::AudioWriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    info!("Wrote {}: {} frames", path.display(), buffer.num_frames());
    Ok(())
}
