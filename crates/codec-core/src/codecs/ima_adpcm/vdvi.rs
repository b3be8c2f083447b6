//! Variable-length (VDVI) bit packing
//!
//! Each 4-bit quantizer code is replaced by its VDVI codeword and the words
//! are written back to back, most significant bit first. Every encode call
//! closes its segment: a partial final byte is filled with one-bits, which
//! never complete a codeword, so the decoder stops cleanly at the padding.
//!
//! A segment must be decoded in one call. Two segments concatenated into one
//! buffer do not decode correctly, because the padding of the first would be
//! read as the start of a codeword.

use crate::codecs::ima_adpcm::adpcm::AdaptiveQuantizer;
use crate::codecs::ima_adpcm::tables::{VDVI_CODEBOOK, VDVI_DECODE_TABLE, VDVI_MAX_BITS, VDVI_PAD};

/// Bits written but not yet forming a whole output byte
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitBuffer {
    bits: u32,
    count: u32,
}

impl BitBuffer {
    /// Empty buffer
    pub const fn new() -> Self {
        Self { bits: 0, count: 0 }
    }

    /// Number of pending bits (always below 8 between calls)
    pub fn pending_bits(&self) -> u32 {
        self.count
    }

    /// Append the codeword for `code`, moving whole bytes to `out`
    pub fn push_code(&mut self, code: u8, out: &mut Vec<u8>) {
        let word = VDVI_CODEBOOK[(code & 0x0F) as usize];
        self.bits = (self.bits << word.len) | u32::from(word.bits);
        self.count += u32::from(word.len);
        while self.count >= 8 {
            self.count -= 8;
            out.push((self.bits >> self.count) as u8);
        }
        self.bits &= (1 << self.count) - 1;
    }

    /// Pad any partial byte with one-bits and move it to `out`
    ///
    /// Returns whether a byte was written.
    pub fn flush(&mut self, out: &mut Vec<u8>) -> bool {
        if self.count == 0 {
            return false;
        }
        let byte = (self.bits << (8 - self.count)) | (u32::from(VDVI_PAD) >> self.count);
        out.push(byte as u8);
        self.clear();
        true
    }

    /// Drop pending bits
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

/// Encode samples as one VDVI segment
///
/// Returns the number of bytes appended.
pub fn encode_vdvi(
    quantizer: &mut AdaptiveQuantizer,
    residual: &mut BitBuffer,
    samples: &[i16],
    out: &mut Vec<u8>,
) -> usize {
    let start = out.len();
    out.reserve(samples.len() / 2 + 1);

    for &sample in samples {
        let code = quantizer.encode(sample);
        residual.push_code(code, out);
    }
    residual.flush(out);

    out.len() - start
}

/// Decode one VDVI segment
///
/// An incomplete trailing codeword (padding or truncation) is discarded.
/// Returns the number of samples appended.
pub fn decode_vdvi(quantizer: &mut AdaptiveQuantizer, data: &[u8], out: &mut Vec<i16>) -> usize {
    let start = out.len();
    out.reserve(data.len() * 4);

    let mut bits = 0u32;
    let mut count = 0u32;
    for &byte in data {
        bits = (bits << 8) | u32::from(byte);
        count += 8;
        while count >= VDVI_MAX_BITS {
            let window = (bits >> (count - VDVI_MAX_BITS)) as u8;
            let (code, len) = VDVI_DECODE_TABLE[window as usize];
            out.push(quantizer.decode(code));
            count -= u32::from(len);
        }
        bits &= (1 << count) - 1;
    }

    // Fewer than 8 bits left: fill the window with pad bits and accept only
    // codewords made entirely of real bits
    while count > 0 {
        let window = (bits << (VDVI_MAX_BITS - count)) | (u32::from(VDVI_PAD) >> count);
        let (code, len) = VDVI_DECODE_TABLE[(window & 0xFF) as usize];
        let len = u32::from(len);
        if len > count {
            tracing::trace!(bits = count, "Discarding incomplete trailing VDVI codeword");
            break;
        }
        out.push(quantizer.decode(code));
        count -= len;
        bits &= (1 << count) - 1;
    }

    out.len() - start
}
