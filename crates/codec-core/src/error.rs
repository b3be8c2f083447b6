//! Error handling for the codec library
//!
//! Every codec operation in this crate is total over its input domain, so the
//! only failures that reach a caller are configuration failures: asking for a
//! codec variant, sample rate or channel layout that does not exist. Truncated
//! input and numeric overflow are recovered locally and never surface here.

#![allow(missing_docs)]

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Error type for codec construction and configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Invalid codec configuration
    #[error("Invalid codec configuration: {details}")]
    InvalidConfig { details: String },

    /// Unsupported codec type
    #[error("Unsupported codec type: {codec_type}")]
    UnsupportedCodec { codec_type: String },

    /// Unrecognized IMA ADPCM variant tag
    #[error("Unsupported IMA ADPCM variant tag: {tag} (expected 0 for DVI4 or 1 for VDVI)")]
    UnsupportedVariant { tag: u8 },

    /// Invalid sample rate
    #[error("Invalid sample rate: {rate}Hz (supported: {supported:?})")]
    InvalidSampleRate { rate: u32, supported: Vec<u32> },

    /// Invalid channel count
    #[error("Invalid channel count: {channels} (supported: {supported:?})")]
    InvalidChannelCount { channels: u8, supported: Vec<u8> },

    /// Feature not enabled
    #[error("Feature not enabled: {feature} (enable with --features {feature})")]
    FeatureNotEnabled { feature: String },
}

impl CodecError {
    /// Create a new invalid configuration error
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig {
            details: details.into(),
        }
    }

    /// Create a new unsupported codec error
    pub fn unsupported_codec(codec_type: impl Into<String>) -> Self {
        Self::UnsupportedCodec {
            codec_type: codec_type.into(),
        }
    }

    /// Create a new feature not enabled error
    pub fn feature_not_enabled(feature: impl Into<String>) -> Self {
        Self::FeatureNotEnabled {
            feature: feature.into(),
        }
    }

    /// Whether the error was caused by the caller's configuration
    ///
    /// Configuration errors are fatal to the call that produced them only;
    /// retrying with the same arguments fails the same way.
    pub fn is_configuration(&self) -> bool {
        match self {
            Self::InvalidConfig { .. }
            | Self::UnsupportedCodec { .. }
            | Self::UnsupportedVariant { .. }
            | Self::InvalidSampleRate { .. }
            | Self::InvalidChannelCount { .. } => true,

            // A missing cargo feature is a build problem, not a bad argument
            Self::FeatureNotEnabled { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CodecError::invalid_config("test message");
        assert!(matches!(err, CodecError::InvalidConfig { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_feature_error_is_not_configuration() {
        let err = CodecError::feature_not_enabled("g711");
        assert!(!err.is_configuration());
        assert!(err.to_string().contains("--features g711"));
    }

    #[test]
    fn test_error_display() {
        let err = CodecError::UnsupportedVariant { tag: 7 };
        let display = format!("{}", err);
        assert!(display.contains("tag: 7"));

        let err = CodecError::InvalidSampleRate {
            rate: 44100,
            supported: vec![8000],
        };
        assert!(err.to_string().contains("44100Hz"));
    }
}
