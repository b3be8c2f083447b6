//! Core types and traits for the codec library
//!
//! This module defines the codec-facing configuration layer and the stream
//! trait shared by the G.711 and IMA ADPCM facades.

use crate::error::{CodecError, Result};
use std::fmt;
use std::str::FromStr;

/// Primary trait for audio codecs
///
/// A codec value owns whatever per-direction state its algorithm needs.
/// Implementations are not internally synchronized: a codec instance serves a
/// single encode stream and a single decode stream.
pub trait AudioCodec: Send {
    /// Encode audio samples to compressed data
    ///
    /// # Errors
    ///
    /// The codecs in this crate are total over their input and never fail
    /// here; the `Result` lets callers treat all codecs uniformly.
    fn encode(&mut self, samples: &[i16]) -> Result<Vec<u8>>;

    /// Decode compressed data to audio samples
    ///
    /// # Errors
    ///
    /// Truncated input is decoded best-effort rather than rejected.
    fn decode(&mut self, data: &[u8]) -> Result<Vec<i16>>;

    /// Get codec information
    fn info(&self) -> CodecInfo;

    /// Reset codec state
    ///
    /// Clears all adaptive state so the next call starts a fresh stream.
    fn reset(&mut self) -> Result<()>;

    /// Get the expected frame size in samples
    fn frame_size(&self) -> usize;

    /// Check if the codec supports variable frame sizes
    fn supports_variable_frame_size(&self) -> bool {
        false
    }
}

/// Audio codec information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecInfo {
    /// Codec name as used in RTP/SDP ("PCMU", "PCMA", "DVI4", "VDVI")
    pub name: &'static str,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels
    pub channels: u8,
    /// Bitrate in bits per second (nominal upper bound for variable-rate codecs)
    pub bitrate: u32,
    /// Frame size in samples
    pub frame_size: usize,
    /// RTP payload type (if static)
    pub payload_type: Option<u8>,
}

/// Audio codec types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecType {
    /// G.711 μ-law (PCMU)
    G711Pcmu,
    /// G.711 A-law (PCMA)
    G711Pcma,
    /// IMA ADPCM, 4 bits per sample
    Dvi4,
    /// IMA ADPCM with variable-length codewords
    Vdvi,
}

impl CodecType {
    /// Get the codec name
    pub fn name(self) -> &'static str {
        match self {
            Self::G711Pcmu => "PCMU",
            Self::G711Pcma => "PCMA",
            Self::Dvi4 => "DVI4",
            Self::Vdvi => "VDVI",
        }
    }

    /// Get the default sample rate
    pub fn default_sample_rate(self) -> u32 {
        8000
    }

    /// Bits per sample on the wire (upper bound for VDVI)
    pub fn bits_per_sample(self) -> u32 {
        match self {
            Self::G711Pcmu | Self::G711Pcma => 8,
            Self::Dvi4 | Self::Vdvi => 4,
        }
    }

    /// Get the standard RTP payload type for a sample rate
    pub fn payload_type(self, sample_rate: u32) -> Option<u8> {
        match (self, sample_rate) {
            (Self::G711Pcmu, 8000) => Some(0),
            (Self::G711Pcma, 8000) => Some(8),
            (Self::Dvi4, 8000) => Some(5),
            (Self::Dvi4, 16000) => Some(6),
            (Self::Dvi4, 11025) => Some(16),
            (Self::Dvi4, 22050) => Some(17),
            _ => None,
        }
    }

    /// Get supported sample rates
    pub fn supported_sample_rates(self) -> &'static [u32] {
        match self {
            Self::G711Pcmu | Self::G711Pcma => &[8000],
            Self::Dvi4 => &[8000, 11025, 16000, 22050],
            Self::Vdvi => &[8000, 16000],
        }
    }

    /// Get supported channel counts
    pub fn supported_channels(self) -> &'static [u8] {
        &[1]
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CodecType {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_uppercase().as_str() {
            "PCMU" => Ok(Self::G711Pcmu),
            "PCMA" => Ok(Self::G711Pcma),
            "DVI4" => Ok(Self::Dvi4),
            "VDVI" => Ok(Self::Vdvi),
            _ => Err(CodecError::unsupported_codec(name)),
        }
    }
}

/// Sample rate enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleRate {
    /// 8 kHz (narrowband)
    Rate8000,
    /// 11.025 kHz
    Rate11025,
    /// 16 kHz (wideband)
    Rate16000,
    /// 22.05 kHz
    Rate22050,
    /// Custom sample rate
    Custom(u32),
}

impl SampleRate {
    /// Get the sample rate value in Hz
    pub fn hz(self) -> u32 {
        match self {
            Self::Rate8000 => 8000,
            Self::Rate11025 => 11025,
            Self::Rate16000 => 16000,
            Self::Rate22050 => 22050,
            Self::Custom(rate) => rate,
        }
    }

    /// Create from Hz value
    pub fn from_hz(hz: u32) -> Self {
        match hz {
            8000 => Self::Rate8000,
            11025 => Self::Rate11025,
            16000 => Self::Rate16000,
            22050 => Self::Rate22050,
            rate => Self::Custom(rate),
        }
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz", self.hz())
    }
}

/// Codec configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CodecConfig {
    /// Codec type
    pub codec_type: CodecType,
    /// Sample rate; fixed for the lifetime of the codec
    pub sample_rate: SampleRate,
    /// Number of channels
    pub channels: u8,
    /// Frame duration in milliseconds
    pub frame_size_ms: f32,
}

impl CodecConfig {
    /// Default packetization interval
    pub const DEFAULT_FRAME_MS: f32 = 20.0;

    /// Create a new codec configuration
    pub fn new(codec_type: CodecType) -> Self {
        Self {
            codec_type,
            sample_rate: SampleRate::from_hz(codec_type.default_sample_rate()),
            channels: 1,
            frame_size_ms: Self::DEFAULT_FRAME_MS,
        }
    }

    /// Create G.711 PCMU configuration
    pub fn g711_pcmu() -> Self {
        Self::new(CodecType::G711Pcmu)
    }

    /// Create G.711 PCMA configuration
    pub fn g711_pcma() -> Self {
        Self::new(CodecType::G711Pcma)
    }

    /// Create DVI4 configuration
    pub fn dvi4() -> Self {
        Self::new(CodecType::Dvi4)
    }

    /// Create VDVI configuration
    pub fn vdvi() -> Self {
        Self::new(CodecType::Vdvi)
    }

    /// Set sample rate
    pub fn with_sample_rate(mut self, sample_rate: SampleRate) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set channel count
    pub fn with_channels(mut self, channels: u8) -> Self {
        self.channels = channels;
        self
    }

    /// Set frame size in milliseconds
    pub fn with_frame_size_ms(mut self, frame_size_ms: f32) -> Self {
        self.frame_size_ms = frame_size_ms;
        self
    }

    /// Samples per frame at the configured rate
    pub fn frame_size(&self) -> usize {
        (self.sample_rate.hz() as f32 * self.frame_size_ms / 1000.0) as usize
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let supported_rates = self.codec_type.supported_sample_rates();
        if !supported_rates.contains(&self.sample_rate.hz()) {
            return Err(CodecError::InvalidSampleRate {
                rate: self.sample_rate.hz(),
                supported: supported_rates.to_vec(),
            });
        }

        let supported_channels = self.codec_type.supported_channels();
        if !supported_channels.contains(&self.channels) {
            return Err(CodecError::InvalidChannelCount {
                channels: self.channels,
                supported: supported_channels.to_vec(),
            });
        }

        if !(self.frame_size_ms > 0.0) || self.frame_size() == 0 {
            return Err(CodecError::invalid_config(format!(
                "Frame duration {}ms yields no samples at {}",
                self.frame_size_ms, self.sample_rate
            )));
        }

        Ok(())
    }
}
