//! IMA ADPCM Codec Implementation
//!
//! This module provides the [`AudioCodec`] interface for DVI4 and VDVI.

use crate::codecs::ima_adpcm::state::{ImaAdpcmState, ImaAdpcmVariant};
use crate::error::{CodecError, Result};
use crate::types::{AudioCodec, CodecConfig, CodecInfo, CodecType};

/// IMA ADPCM codec with independent encode and decode streams
///
/// # Example
/// ```
/// use telephony_codec_core::codecs::ima_adpcm::ImaAdpcmCodec;
/// use telephony_codec_core::{AudioCodec, CodecConfig};
///
/// let mut codec = ImaAdpcmCodec::new(CodecConfig::dvi4()).unwrap();
///
/// let input_frame = vec![0i16; 160];
/// let encoded = codec.encode(&input_frame).unwrap();
/// assert_eq!(encoded.len(), 80);
///
/// let decoded = codec.decode(&encoded).unwrap();
/// assert_eq!(decoded.len(), 160);
/// ```
#[derive(Debug, Clone)]
pub struct ImaAdpcmCodec {
    config: CodecConfig,

    /// Encoder state (public for stream inspection in tests and tools)
    pub encoder_state: ImaAdpcmState,

    /// Decoder state (public for stream inspection in tests and tools)
    pub decoder_state: ImaAdpcmState,
}

impl ImaAdpcmCodec {
    /// Create a codec from a DVI4 or VDVI configuration
    pub fn new(config: CodecConfig) -> Result<Self> {
        let variant = match config.codec_type {
            CodecType::Dvi4 => ImaAdpcmVariant::FixedNibble,
            CodecType::Vdvi => ImaAdpcmVariant::VariableLength,
            other => return Err(CodecError::unsupported_codec(format!("{} is not IMA ADPCM", other))),
        };
        config.validate()?;

        tracing::debug!(
            variant = %variant,
            sample_rate = config.sample_rate.hz(),
            frame_size = config.frame_size(),
            "Created IMA ADPCM codec"
        );

        Ok(Self {
            config,
            encoder_state: ImaAdpcmState::new(variant),
            decoder_state: ImaAdpcmState::new(variant),
        })
    }

    /// Packing variant
    pub fn variant(&self) -> ImaAdpcmVariant {
        self.encoder_state.variant()
    }
}

impl AudioCodec for ImaAdpcmCodec {
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>> {
        Ok(self.encoder_state.encode(samples))
    }

    fn decode(&mut self, data: &[u8]) -> Result<Vec<i16>> {
        Ok(self.decoder_state.decode(data))
    }

    fn info(&self) -> CodecInfo {
        let codec_type = self.config.codec_type;
        let sample_rate = self.config.sample_rate.hz();
        CodecInfo {
            name: codec_type.name(),
            sample_rate,
            channels: 1,
            bitrate: sample_rate * codec_type.bits_per_sample(),
            frame_size: self.config.frame_size(),
            payload_type: codec_type.payload_type(sample_rate),
        }
    }

    fn reset(&mut self) -> Result<()> {
        self.encoder_state.reset();
        self.decoder_state.reset();
        tracing::debug!(variant = %self.variant(), "IMA ADPCM codec reset");
        Ok(())
    }

    fn frame_size(&self) -> usize {
        self.config.frame_size()
    }

    fn supports_variable_frame_size(&self) -> bool {
        true
    }
}
