//! Butterworth filter design and application
//!
//! Filters are realized as a cascade of second-order sections (biquads)
//! rather than a single high-order transfer function; the cascade form
//! stays numerically stable at the orders and cutoffs ham-band audio
//! needs. Coefficients use the Audio EQ Cookbook low/high-pass formulas
//! with per-section Q taken from the Butterworth analog prototype poles.
//!
//! Reference: https://www.w3.org/2011/audio/audio-eq-cookbook.html

use crate::audio::AudioBuffer;
use crate::error::{HamwaveError, Result};
use std::f64::consts::PI;

/// Default filter order when the user does not request one
pub const DEFAULT_ORDER: usize = 5;

/// Filter response class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterClass {
    /// Pass frequencies below the cutoff
    LowPass,
    /// Pass frequencies above the cutoff
    HighPass,
    /// Pass frequencies between the two cutoffs
    BandPass,
}

impl FilterClass {
    fn name(&self) -> &'static str {
        match self {
            Self::LowPass => "low-pass",
            Self::HighPass => "high-pass",
            Self::BandPass => "band-pass",
        }
    }
}

/// A complete filter description: class, cutoff(s), and order
///
/// Constructed once per run and immutable thereafter. `cutoff_high` is
/// only meaningful for band filters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSpec {
    pub class: FilterClass,
    /// Cutoff frequency in Hz (the lower cutoff for band filters)
    pub cutoff: f32,
    /// Upper cutoff frequency in Hz (band filters only)
    pub cutoff_high: Option<f32>,
    /// Filter order (number of poles per designed response)
    pub order: usize,
}

impl FilterSpec {
    pub fn lowpass(cutoff: f32, order: usize) -> Self {
        Self {
            class: FilterClass::LowPass,
            cutoff,
            cutoff_high: None,
            order,
        }
    }

    pub fn highpass(cutoff: f32, order: usize) -> Self {
        Self {
            class: FilterClass::HighPass,
            cutoff,
            cutoff_high: None,
            order,
        }
    }

    pub fn bandpass(cutoff_low: f32, cutoff_high: f32, order: usize) -> Self {
        Self {
            class: FilterClass::BandPass,
            cutoff: cutoff_low,
            cutoff_high: Some(cutoff_high),
            order,
        }
    }

    /// Validate everything that does not depend on the sample rate
    ///
    /// Called before the input file is loaded so bad arguments fail fast.
    pub fn validate_args(&self) -> Result<()> {
        if self.order == 0 {
            return Err(HamwaveError::InvalidParameter {
                param: "order".to_string(),
                value: self.order.to_string(),
                expected: "order >= 1".to_string(),
            });
        }
        if self.cutoff <= 0.0 {
            return Err(HamwaveError::InvalidParameter {
                param: "cutoff".to_string(),
                value: self.cutoff.to_string(),
                expected: "cutoff > 0 Hz".to_string(),
            });
        }
        match (self.class, self.cutoff_high) {
            (FilterClass::BandPass, None) => Err(HamwaveError::InvalidParameter {
                param: "cutoff-high".to_string(),
                value: "missing".to_string(),
                expected: "an upper cutoff for band-pass filters".to_string(),
            }),
            (FilterClass::BandPass, Some(high)) if high <= self.cutoff => {
                Err(HamwaveError::InvalidParameter {
                    param: "cutoff-high".to_string(),
                    value: high.to_string(),
                    expected: format!("greater than lower cutoff {} Hz", self.cutoff),
                })
            }
            (FilterClass::BandPass, Some(_)) => Ok(()),
            (_, Some(high)) => Err(HamwaveError::InvalidParameter {
                param: "cutoff-high".to_string(),
                value: high.to_string(),
                expected: format!("no upper cutoff for {} filters", self.class.name()),
            }),
            (_, None) => Ok(()),
        }
    }

    /// Validate the full spec against a sample rate (cutoffs vs Nyquist)
    pub fn validate(&self, sample_rate: u32) -> Result<()> {
        self.validate_args()?;

        let nyquist = sample_rate as f32 / 2.0;
        let highest = self.cutoff_high.unwrap_or(self.cutoff);
        if highest >= nyquist {
            return Err(HamwaveError::InvalidParameter {
                param: "cutoff".to_string(),
                value: highest.to_string(),
                expected: format!("below the Nyquist frequency ({} Hz)", nyquist),
            });
        }
        Ok(())
    }

    /// Filter a buffer, producing a new buffer of identical shape
    ///
    /// Each channel is processed independently with fresh filter state,
    /// causally, one output sample per input sample. An empty buffer
    /// produces an empty output.
    pub fn apply(&self, buffer: &AudioBuffer) -> Result<AudioBuffer> {
        self.validate(buffer.sample_rate())?;

        if buffer.is_empty() {
            return Ok(buffer.clone());
        }

        let template = self.design(buffer.sample_rate() as f64);
        let mut filtered_channels = Vec::with_capacity(buffer.channels() as usize);

        for ch in 0..buffer.channels() {
            let mut sections = template.clone();
            let out: Vec<f32> = buffer
                .channel_samples(ch)
                .iter()
                .map(|&x| {
                    let mut acc = x as f64;
                    for section in &mut sections {
                        acc = section.process(acc);
                    }
                    acc as f32
                })
                .collect();
            filtered_channels.push(out);
        }

        AudioBuffer::from_channels(&filtered_channels, buffer.sample_rate())
    }

    /// Build the section cascade for this spec at the given sample rate
    ///
    /// Band filters cascade a high-pass at the low cutoff with a low-pass
    /// at the high cutoff, each of the requested order.
    fn design(&self, sample_rate: f64) -> Vec<Biquad> {
        match self.class {
            FilterClass::LowPass => {
                butterworth_cascade(Response::LowPass, self.cutoff as f64, self.order, sample_rate)
            }
            FilterClass::HighPass => {
                butterworth_cascade(Response::HighPass, self.cutoff as f64, self.order, sample_rate)
            }
            FilterClass::BandPass => {
                let high = self.cutoff_high.unwrap_or(self.cutoff) as f64;
                let mut sections = butterworth_cascade(
                    Response::HighPass,
                    self.cutoff as f64,
                    self.order,
                    sample_rate,
                );
                sections.extend(butterworth_cascade(
                    Response::LowPass,
                    high,
                    self.order,
                    sample_rate,
                ));
                sections
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Response {
    LowPass,
    HighPass,
}

/// Butterworth cascade of biquads for a one-sided response
///
/// Section k of an order-n Butterworth uses Q = 1 / (2 cos(pi(2k+1)/2n)),
/// the angle of the k-th analog prototype pole pair. Odd orders get one
/// extra first-order section for the real pole.
fn butterworth_cascade(
    response: Response,
    cutoff: f64,
    order: usize,
    sample_rate: f64,
) -> Vec<Biquad> {
    let mut sections = Vec::with_capacity(order / 2 + 1);

    for k in 0..order / 2 {
        let pole_angle = PI * (2 * k + 1) as f64 / (2 * order) as f64;
        let q = 1.0 / (2.0 * pole_angle.cos());
        sections.push(match response {
            Response::LowPass => Biquad::lowpass(sample_rate, cutoff, q),
            Response::HighPass => Biquad::highpass(sample_rate, cutoff, q),
        });
    }

    if order % 2 == 1 {
        sections.push(match response {
            Response::LowPass => Biquad::first_order_lowpass(sample_rate, cutoff),
            Response::HighPass => Biquad::first_order_highpass(sample_rate, cutoff),
        });
    }

    sections
}

/// One second-order section in transposed direct form II
///
/// Transfer function: H(z) = (b0 + b1 z^-1 + b2 z^-2) / (1 + a1 z^-1 + a2 z^-2)
#[derive(Debug, Clone, Copy, Default)]
struct Biquad {
    b0: f64,
    b1: f64,
    b2: f64,
    a1: f64,
    a2: f64,
    // state
    z1: f64,
    z2: f64,
}

impl Biquad {
    fn lowpass(sample_rate: f64, cutoff: f64, q: f64) -> Self {
        let w0 = 2.0 * PI * cutoff / sample_rate;
        let cos_w0 = w0.cos();
        let alpha = w0.sin() / (2.0 * q);
        let a0 = 1.0 + alpha;

        Self {
            b0: ((1.0 - cos_w0) / 2.0) / a0,
            b1: (1.0 - cos_w0) / a0,
            b2: ((1.0 - cos_w0) / 2.0) / a0,
            a1: (-2.0 * cos_w0) / a0,
            a2: (1.0 - alpha) / a0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    fn highpass(sample_rate: f64, cutoff: f64, q: f64) -> Self {
        let w0 = 2.0 * PI * cutoff / sample_rate;
        let cos_w0 = w0.cos();
        let alpha = w0.sin() / (2.0 * q);
        let a0 = 1.0 + alpha;

        Self {
            b0: ((1.0 + cos_w0) / 2.0) / a0,
            b1: (-(1.0 + cos_w0)) / a0,
            b2: ((1.0 + cos_w0) / 2.0) / a0,
            a1: (-2.0 * cos_w0) / a0,
            a2: (1.0 - alpha) / a0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Bilinear transform of H(s) = 1 / (s + 1)
    fn first_order_lowpass(sample_rate: f64, cutoff: f64) -> Self {
        let k = (PI * cutoff / sample_rate).tan();
        Self {
            b0: k / (k + 1.0),
            b1: k / (k + 1.0),
            b2: 0.0,
            a1: (k - 1.0) / (k + 1.0),
            a2: 0.0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Bilinear transform of H(s) = s / (s + 1)
    fn first_order_highpass(sample_rate: f64, cutoff: f64) -> Self {
        let k = (PI * cutoff / sample_rate).tan();
        Self {
            b0: 1.0 / (k + 1.0),
            b1: -1.0 / (k + 1.0),
            b2: 0.0,
            a1: (k - 1.0) / (k + 1.0),
            a2: 0.0,
            z1: 0.0,
            z2: 0.0,
        }
    }

    #[inline]
    fn process(&mut self, x: f64) -> f64 {
        let y = self.b0 * x + self.z1;
        self.z1 = self.b1 * x - self.a1 * y + self.z2;
        self.z2 = self.b2 * x - self.a2 * y;
        y
    }
}
