//! IMA ADPCM Quantizer and Nibble Packing
//!
//! The quantizer is shared by both packings: it turns one linear sample into
//! a 4-bit code (encode) or one code back into a sample (decode), adapting
//! its step size after every sample. The encoder reconstructs each sample
//! through the decoder's own routine, so both ends track the same predictor
//! bit for bit.

use crate::codecs::ima_adpcm::tables::{
    INDEX_ADJUST_TABLE, MAGNITUDE_MASK, MAX_STEP_INDEX, SIGN_BIT, STEP_SIZE_TABLE,
};
use crate::utils::saturate;

/// Adaptive quantizer state: predictor plus step index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdaptiveQuantizer {
    /// Last reconstructed sample
    predictor: i16,
    /// Index into [`STEP_SIZE_TABLE`], always within `0..=MAX_STEP_INDEX`
    step_index: usize,
}

impl AdaptiveQuantizer {
    /// Quantizer at the start of a stream
    pub const fn new() -> Self {
        Self {
            predictor: 0,
            step_index: 0,
        }
    }

    /// Last reconstructed sample
    pub fn predictor(&self) -> i16 {
        self.predictor
    }

    /// Current step index
    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// Current quantizer step in linear units
    pub fn step_size(&self) -> i32 {
        i32::from(STEP_SIZE_TABLE[self.step_index])
    }

    /// Return to the start-of-stream state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Quantize one sample to a 4-bit code
    pub fn encode(&mut self, sample: i16) -> u8 {
        let mut step = self.step_size();
        let mut diff = i32::from(sample) - i32::from(self.predictor);

        let mut code = 0u8;
        if diff < 0 {
            code = SIGN_BIT;
            diff = -diff;
        }
        if diff >= step {
            code |= 0x04;
            diff -= step;
        }
        step >>= 1;
        if diff >= step {
            code |= 0x02;
            diff -= step;
        }
        step >>= 1;
        if diff >= step {
            code |= 0x01;
        }

        self.decode(code);
        code
    }

    /// Reconstruct one sample from a 4-bit code
    ///
    /// Only the low nibble of `code` is used.
    pub fn decode(&mut self, code: u8) -> i16 {
        let code = code & 0x0F;
        let magnitude = code_magnitude(code);
        let step = self.step_size();

        let mut delta = step >> 3;
        if magnitude & 0x04 != 0 {
            delta += step;
        }
        if magnitude & 0x02 != 0 {
            delta += step >> 1;
        }
        if magnitude & 0x01 != 0 {
            delta += step >> 2;
        }
        if code & SIGN_BIT != 0 {
            delta = -delta;
        }

        self.predictor = saturate(i32::from(self.predictor) + delta);
        self.adapt(code);
        self.predictor
    }

    fn adapt(&mut self, code: u8) {
        let adjust = INDEX_ADJUST_TABLE[usize::from(code_magnitude(code))];
        let adjusted = self.step_index as isize + isize::from(adjust);
        self.step_index = adjusted.clamp(0, MAX_STEP_INDEX as isize) as usize;
    }
}

/// Magnitude part of a 4-bit code
#[inline]
pub fn code_magnitude(code: u8) -> u8 {
    code & MAGNITUDE_MASK
}

/// Encode samples as packed nibbles, two per byte, earlier sample in the
/// low nibble
///
/// An odd trailing sample leaves the high nibble of the last byte zero.
/// Returns the number of bytes appended.
pub fn encode_nibbles(quantizer: &mut AdaptiveQuantizer, samples: &[i16], out: &mut Vec<u8>) -> usize {
    let start = out.len();
    out.reserve(samples.len().div_ceil(2));

    let mut pairs = samples.chunks_exact(2);
    for pair in &mut pairs {
        let low = quantizer.encode(pair[0]);
        let high = quantizer.encode(pair[1]);
        out.push(low | (high << 4));
    }
    if let [last] = pairs.remainder() {
        out.push(quantizer.encode(*last));
    }

    out.len() - start
}

/// Decode packed nibbles, low nibble first
///
/// Always yields two samples per byte. Returns the number of samples appended.
pub fn decode_nibbles(quantizer: &mut AdaptiveQuantizer, data: &[u8], out: &mut Vec<i16>) -> usize {
    let start = out.len();
    out.reserve(data.len() * 2);

    for &byte in data {
        out.push(quantizer.decode(byte & 0x0F));
        out.push(quantizer.decode(byte >> 4));
    }

    out.len() - start
}
