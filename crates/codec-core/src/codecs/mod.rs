//! Codec implementations and factory

use crate::error::{CodecError, Result};
use crate::types::{AudioCodec, CodecConfig, CodecType};

// Codec implementations
#[cfg(feature = "g711")]
pub mod g711;

#[cfg(feature = "ima-adpcm")]
pub mod ima_adpcm;

/// Codec factory for creating codec instances
pub struct CodecFactory;

impl CodecFactory {
    /// Create a codec instance from configuration
    pub fn create(config: CodecConfig) -> Result<Box<dyn AudioCodec>> {
        // Validate configuration first
        config.validate()?;

        match config.codec_type {
            #[cfg(feature = "g711")]
            CodecType::G711Pcmu => {
                let codec = g711::G711Codec::new_pcmu(config)?;
                Ok(Box::new(codec))
            }

            #[cfg(feature = "g711")]
            CodecType::G711Pcma => {
                let codec = g711::G711Codec::new_pcma(config)?;
                Ok(Box::new(codec))
            }

            #[cfg(feature = "ima-adpcm")]
            CodecType::Dvi4 | CodecType::Vdvi => {
                let codec = ima_adpcm::ImaAdpcmCodec::new(config)?;
                Ok(Box::new(codec))
            }

            #[allow(unreachable_patterns)]
            codec_type => Err(CodecError::feature_not_enabled(match codec_type {
                CodecType::G711Pcmu | CodecType::G711Pcma => "g711",
                CodecType::Dvi4 | CodecType::Vdvi => "ima-adpcm",
            })),
        }
    }

    /// Create a codec by RTP encoding name
    ///
    /// The name overrides the codec type in `config`; every other setting is
    /// kept.
    pub fn create_by_name(name: &str, config: CodecConfig) -> Result<Box<dyn AudioCodec>> {
        let codec_type: CodecType = name.parse()?;

        let config = CodecConfig {
            codec_type,
            ..config
        };

        Self::create(config)
    }

    /// Get all supported codec names
    pub fn supported_codecs() -> Vec<&'static str> {
        vec![
            #[cfg(feature = "g711")]
            "PCMU",
            #[cfg(feature = "g711")]
            "PCMA",
            #[cfg(feature = "ima-adpcm")]
            "DVI4",
            #[cfg(feature = "ima-adpcm")]
            "VDVI",
        ]
    }

    /// Check if a codec is supported
    pub fn is_supported(name: &str) -> bool {
        Self::supported_codecs().contains(&name.to_uppercase().as_str())
    }
}
