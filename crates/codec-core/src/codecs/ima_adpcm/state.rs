//! IMA ADPCM Stream State
//!
//! One [`ImaAdpcmState`] serves one stream direction. Encoding and decoding
//! the same conversation needs two instances.

use crate::codecs::ima_adpcm::adpcm::{decode_nibbles, encode_nibbles, AdaptiveQuantizer};
use crate::codecs::ima_adpcm::vdvi::{decode_vdvi, encode_vdvi, BitBuffer};
use crate::error::{CodecError, Result};
use std::fmt;
use std::str::FromStr;

/// Packing of the 4-bit quantizer codes on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImaAdpcmVariant {
    /// Two 4-bit codes per byte ("DVI4")
    FixedNibble,
    /// Self-delimiting codewords of 2 to 8 bits ("VDVI")
    VariableLength,
}

impl ImaAdpcmVariant {
    /// Numeric tag used by configuration surfaces
    pub fn tag(self) -> u8 {
        match self {
            Self::FixedNibble => 0,
            Self::VariableLength => 1,
        }
    }

    /// Variant for a numeric tag
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(Self::FixedNibble),
            1 => Ok(Self::VariableLength),
            tag => Err(CodecError::UnsupportedVariant { tag }),
        }
    }

    /// RTP encoding name
    pub fn name(self) -> &'static str {
        match self {
            Self::FixedNibble => "DVI4",
            Self::VariableLength => "VDVI",
        }
    }
}

impl TryFrom<u8> for ImaAdpcmVariant {
    type Error = CodecError;

    fn try_from(tag: u8) -> Result<Self> {
        Self::from_tag(tag)
    }
}

impl FromStr for ImaAdpcmVariant {
    type Err = CodecError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_uppercase().as_str() {
            "DVI4" => Ok(Self::FixedNibble),
            "VDVI" => Ok(Self::VariableLength),
            _ => Err(CodecError::unsupported_codec(name)),
        }
    }
}

impl fmt::Display for ImaAdpcmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Packing {
    FixedNibble,
    VariableLength { residual: BitBuffer },
}

impl Packing {
    fn new(variant: ImaAdpcmVariant) -> Self {
        match variant {
            ImaAdpcmVariant::FixedNibble => Self::FixedNibble,
            ImaAdpcmVariant::VariableLength => Self::VariableLength {
                residual: BitBuffer::new(),
            },
        }
    }
}

/// Adaptive codec state for one stream direction
///
/// The predictor and step index carry over from one call to the next, so
/// consecutive calls continue the same stream. Each encode call is a closed
/// segment on the wire: VDVI output is byte-padded at the end of every call.
///
/// Not `Copy`: duplicate a live stream state with `clone()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImaAdpcmState {
    quantizer: AdaptiveQuantizer,
    packing: Packing,
}

impl ImaAdpcmState {
    /// Fresh state for `variant`: predictor 0, step index 0, no pending bits
    pub fn new(variant: ImaAdpcmVariant) -> Self {
        Self {
            quantizer: AdaptiveQuantizer::new(),
            packing: Packing::new(variant),
        }
    }

    /// Fresh state for a numeric variant tag (0 = DVI4, 1 = VDVI)
    pub fn from_tag(tag: u8) -> Result<Self> {
        ImaAdpcmVariant::from_tag(tag).map(Self::new)
    }

    /// Packing variant
    pub fn variant(&self) -> ImaAdpcmVariant {
        match self.packing {
            Packing::FixedNibble => ImaAdpcmVariant::FixedNibble,
            Packing::VariableLength { .. } => ImaAdpcmVariant::VariableLength,
        }
    }

    /// Last reconstructed sample
    pub fn predictor(&self) -> i16 {
        self.quantizer.predictor()
    }

    /// Current step index
    pub fn step_index(&self) -> usize {
        self.quantizer.step_index()
    }

    /// Return to the start-of-stream state, keeping the variant
    pub fn reset(&mut self) {
        let variant = self.variant();
        *self = Self::new(variant);
    }

    /// Encode samples into a new buffer
    pub fn encode(&mut self, samples: &[i16]) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(samples, &mut out);
        out
    }

    /// Encode samples, appending to `out`
    ///
    /// Returns the number of bytes written: `samples.len().div_ceil(2)` for
    /// DVI4, data-dependent for VDVI.
    pub fn encode_into(&mut self, samples: &[i16], out: &mut Vec<u8>) -> usize {
        match &mut self.packing {
            Packing::FixedNibble => encode_nibbles(&mut self.quantizer, samples, out),
            Packing::VariableLength { residual } => {
                encode_vdvi(&mut self.quantizer, residual, samples, out)
            }
        }
    }

    /// Decode a buffer into a new sample vector
    pub fn decode(&mut self, data: &[u8]) -> Vec<i16> {
        let mut out = Vec::new();
        self.decode_into(data, &mut out);
        out
    }

    /// Decode a buffer, appending samples to `out`
    ///
    /// Returns the number of samples written: `2 * data.len()` for DVI4,
    /// data-dependent for VDVI. A VDVI buffer must hold exactly one encoded
    /// segment; an incomplete final codeword is dropped.
    pub fn decode_into(&mut self, data: &[u8], out: &mut Vec<i16>) -> usize {
        match self.packing {
            Packing::FixedNibble => decode_nibbles(&mut self.quantizer, data, out),
            Packing::VariableLength { .. } => decode_vdvi(&mut self.quantizer, data, out),
        }
    }
}
