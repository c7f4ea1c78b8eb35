//! Error types for hamwave
//!
//! Every fallible operation in the crate returns [`Result`]; parameter
//! errors are surfaced before any output file is written.

use thiserror::Error;

/// Result type alias using HamwaveError
pub type Result<T> = std::result::Result<T, HamwaveError>;

/// All possible errors in hamwave
#[derive(Error, Debug)]
pub enum HamwaveError {
    // Audio I/O errors
    #[error("Failed to read audio file: {path}")]
    AudioReadError {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to write audio file: {path}")]
    AudioWriteError {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Unsupported audio format: {details}")]
    UnsupportedFormat { details: String },

    // Parameter validation errors
    #[error("Invalid parameter: {param} = {value} (expected {expected})")]
    InvalidParameter {
        param: String,
        value: String,
        expected: String,
    },

    // Processing errors
    #[error("Not enough audio data: need at least {needed} samples, got {actual}")]
    InsufficientData { needed: usize, actual: usize },

    // Rendering errors
    #[error("Failed to open plot window: {details}")]
    PlotError { details: String },

    // Generic I/O
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl HamwaveError {
    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::AudioReadError { .. } => "Check that the file exists and is a valid WAV file",
            Self::AudioWriteError { .. } => "Check that the output path is writable",
            Self::UnsupportedFormat { .. } => "Convert to WAV format (16/24/32-bit PCM or float)",
            Self::InvalidParameter { .. } => "Adjust the parameter to be within valid range",
            Self::InsufficientData { .. } => "Provide a longer recording",
            Self::PlotError { .. } => "A display is required; re-run with --no-plot where supported",
            Self::IoError(_) => "Check the error details and try again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = HamwaveError::InvalidParameter {
            param: "cutoff".to_string(),
            value: "30000".to_string(),
            expected: "0 < cutoff < 22050 (Nyquist)".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cutoff"));
        assert!(msg.contains("30000"));
    }

    #[test]
    fn test_recovery_hint() {
        let err = HamwaveError::InsufficientData {
            needed: 2,
            actual: 1,
        };
        assert!(!err.recovery_hint().is_empty());
    }
}
