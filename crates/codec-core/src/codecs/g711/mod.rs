//! G.711 Companding Codec
//!
//! Stateless conversion between 16-bit linear PCM and 8-bit A-law or μ-law
//! codes, plus direct law-to-law transcoding.
//!
//! # Architecture
//!
//! - `reference`: the companding laws as `const fn` definitions
//! - `tables`: lookup tables generated from the laws, per-sample and slice API
//! - `transcode`: fused A-law ⇄ μ-law conversion
//!
//! A G.711 stream is a flat byte sequence, one code per sample, with the law
//! agreed out of band.
//!
//! # Example
//! ```
//! use telephony_codec_core::codecs::g711::{alaw_to_ulaw, ulaw_decode, ulaw_encode};
//!
//! let code = ulaw_encode(1000);
//! assert!((ulaw_decode(code) - 1000).abs() < 64);
//! assert_eq!(ulaw_decode(alaw_to_ulaw(0xd5)), 8);
//! ```

pub mod reference;
pub mod tables;
pub mod transcode;

#[cfg(test)]
mod tests;

pub use reference::{alaw_to_linear, linear_to_alaw, linear_to_ulaw, ulaw_to_linear};
pub use tables::{
    alaw_decode, alaw_decode_slice, alaw_encode, alaw_encode_slice, init_tables, ulaw_decode,
    ulaw_decode_slice, ulaw_encode, ulaw_encode_slice,
};
pub use transcode::{alaw_to_ulaw, alaw_to_ulaw_slice, ulaw_to_alaw, ulaw_to_alaw_slice};

use crate::error::{CodecError, Result};
use crate::types::{AudioCodec, CodecConfig, CodecInfo, CodecType};

/// Companding law of a G.711 stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum G711Law {
    /// A-law (PCMA)
    ALaw,
    /// μ-law (PCMU)
    ULaw,
}

impl G711Law {
    /// Encode one linear sample under this law
    #[inline]
    pub fn encode(self, sample: i16) -> u8 {
        match self {
            Self::ALaw => alaw_encode(sample),
            Self::ULaw => ulaw_encode(sample),
        }
    }

    /// Decode one code under this law
    #[inline]
    pub fn decode(self, code: u8) -> i16 {
        match self {
            Self::ALaw => alaw_decode(code),
            Self::ULaw => ulaw_decode(code),
        }
    }

    /// Transcode one code from this law to `target`
    #[inline]
    pub fn transcode(self, code: u8, target: G711Law) -> u8 {
        match (self, target) {
            (Self::ALaw, Self::ULaw) => alaw_to_ulaw(code),
            (Self::ULaw, Self::ALaw) => ulaw_to_alaw(code),
            _ => code,
        }
    }

    fn codec_type(self) -> CodecType {
        match self {
            Self::ALaw => CodecType::G711Pcma,
            Self::ULaw => CodecType::G711Pcmu,
        }
    }
}

/// G.711 stream codec
///
/// Holds no adaptive state, so a single instance may encode and decode
/// concurrently-fed streams as long as each call gets its own buffers.
#[derive(Debug, Clone)]
pub struct G711Codec {
    law: G711Law,
    config: CodecConfig,
}

impl G711Codec {
    /// Create a μ-law (PCMU) codec
    pub fn new_pcmu(config: CodecConfig) -> Result<Self> {
        Self::new(G711Law::ULaw, config)
    }

    /// Create an A-law (PCMA) codec
    pub fn new_pcma(config: CodecConfig) -> Result<Self> {
        Self::new(G711Law::ALaw, config)
    }

    fn new(law: G711Law, config: CodecConfig) -> Result<Self> {
        if config.codec_type != law.codec_type() {
            return Err(CodecError::invalid_config(format!(
                "{} configuration passed to {:?} codec",
                config.codec_type, law
            )));
        }
        config.validate()?;
        tracing::debug!(law = ?law, frame_size = config.frame_size(), "Created G.711 codec");
        Ok(Self { law, config })
    }

    /// Companding law of this codec
    pub fn law(&self) -> G711Law {
        self.law
    }

    /// Transcode an encoded buffer from this codec's law to `target`
    pub fn transcode_to(&self, data: &[u8], target: G711Law) -> Vec<u8> {
        data.iter().map(|&code| self.law.transcode(code, target)).collect()
    }
}

impl AudioCodec for G711Codec {
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>> {
        let mut encoded = vec![0u8; samples.len()];
        match self.law {
            G711Law::ALaw => alaw_encode_slice(samples, &mut encoded),
            G711Law::ULaw => ulaw_encode_slice(samples, &mut encoded),
        }
        Ok(encoded)
    }

    fn decode(&mut self, data: &[u8]) -> Result<Vec<i16>> {
        let mut decoded = vec![0i16; data.len()];
        match self.law {
            G711Law::ALaw => alaw_decode_slice(data, &mut decoded),
            G711Law::ULaw => ulaw_decode_slice(data, &mut decoded),
        }
        Ok(decoded)
    }

    fn info(&self) -> CodecInfo {
        let codec_type = self.law.codec_type();
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
        // Nothing adapts between samples
        Ok(())
    }

    fn frame_size(&self) -> usize {
        self.config.frame_size()
    }
}
