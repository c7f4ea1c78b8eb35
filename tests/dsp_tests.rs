//! Behavior tests for the DSP pipeline through the public API

use hamwave::audio::AudioBuffer;
use hamwave::dsp::{compute_spectrum, FilterSpec, NoiseGate};
use hamwave::HamwaveError;

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    (samples.iter().map(|&s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
}

#[test]
fn filter_preserves_buffer_shape() {
    let input = AudioBuffer::sine_wave(440.0, 0.5, 48000);
    let spec = FilterSpec::lowpass(1000.0, 5);

    let output = spec.apply(&input).unwrap();
    assert_eq!(output.num_frames(), input.num_frames());
    assert_eq!(output.channels(), input.channels());
    assert_eq!(output.sample_rate(), input.sample_rate());
}

#[test]
fn filter_on_silence_yields_silence() {
    // 1000 zero samples at 44100 Hz, low-pass at 1000 Hz, order 2
    let silence = AudioBuffer::new(vec![0.0; 1000], 1, 44100).unwrap();
    let spec = FilterSpec::lowpass(1000.0, 2);

    let output = spec.apply(&silence).unwrap();
    assert_eq!(output.num_frames(), 1000);
    assert!(output.samples().iter().all(|&s| s == 0.0));
}

#[test]
fn filter_rejects_cutoff_at_or_above_nyquist() {
    let input = AudioBuffer::sine_wave(440.0, 0.1, 44100);

    for cutoff in [22050.0, 30000.0] {
        let spec = FilterSpec::lowpass(cutoff, 2);
        assert!(matches!(
            spec.apply(&input),
            Err(HamwaveError::InvalidParameter { .. })
        ));
    }
}

#[test]
fn highpass_removes_low_frequency_content() {
    let rumble = AudioBuffer::sine_wave(60.0, 1.0, 44100);
    let speech_band = AudioBuffer::sine_wave(1500.0, 1.0, 44100);
    let spec = FilterSpec::highpass(300.0, 4);

    assert!(rms(spec.apply(&rumble).unwrap().samples()) < 0.01);
    assert!(rms(spec.apply(&speech_band).unwrap().samples()) > 0.5);
}

#[test]
fn gate_zeroes_below_and_passes_above() {
    let input = AudioBuffer::new(vec![0.01, 0.5, -0.2, 0.02], 1, 44100).unwrap();
    let gate = NoiseGate::new(0.1);

    let output = gate.apply(&input);
    assert_eq!(output.samples(), &[0.0, 0.5, -0.2, 0.0]);
}

#[test]
fn gate_applied_twice_equals_once() {
    let input = AudioBuffer::sine_wave(440.0, 0.25, 44100);
    let gate = NoiseGate::new(0.3);

    let once = gate.apply(&input);
    let twice = gate.apply(&once);
    assert_eq!(once.samples(), twice.samples());
}

#[test]
fn gate_nonpositive_threshold_is_passthrough() {
    let input = AudioBuffer::sine_wave(440.0, 0.1, 44100);

    let output = NoiseGate::new(0.0).apply(&input);
    assert_eq!(output.samples(), input.samples());
}

#[test]
fn spectrum_bins_ascend_and_stay_in_range() {
    let input = AudioBuffer::sine_wave(700.0, 0.5, 44100);
    let view = compute_spectrum(&input, 100.0, Some(5000.0)).unwrap();

    assert!(!view.is_empty());
    assert!(view.frequencies.windows(2).all(|w| w[0] < w[1]));
    assert!(view.frequencies.iter().all(|&f| (100.0..5000.0).contains(&f)));
}

#[test]
fn spectrum_default_range_covers_up_to_nyquist() {
    let input = AudioBuffer::sine_wave(700.0, 0.5, 8000);
    let view = compute_spectrum(&input, 0.0, None).unwrap();

    assert!(view.frequencies.iter().all(|&f| (0.0..4000.0).contains(&f)));
}

#[test]
fn spectrum_inverted_range_is_rejected() {
    // min 2000 Hz, max 1000 Hz
    let input = AudioBuffer::sine_wave(440.0, 0.5, 44100);
    let result = compute_spectrum(&input, 2000.0, Some(1000.0));
    assert!(matches!(result, Err(HamwaveError::InvalidParameter { .. })));
}

#[test]
fn spectrum_finds_the_dominant_tone() {
    let input = AudioBuffer::sine_wave(2500.0, 1.0, 44100);
    let view = compute_spectrum(&input, 0.0, None).unwrap();

    let peak = view.peak_frequency().unwrap();
    assert!((peak - 2500.0).abs() < 3.0, "peak at {} Hz", peak);
}

#[test]
fn empty_buffer_flows_through_transformations() {
    let empty = AudioBuffer::new(vec![], 1, 44100).unwrap();

    let filtered = FilterSpec::lowpass(1000.0, 2).apply(&empty).unwrap();
    assert!(filtered.is_empty());

    let gated = NoiseGate::new(0.1).apply(&empty);
    assert!(gated.is_empty());
}
