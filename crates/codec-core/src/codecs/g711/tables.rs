//! G.711 Lookup Tables
//!
//! Pre-computed A-law and μ-law tables in both directions.
//!
//! ## Memory Usage
//!
//! - μ-law / A-law decode tables: 512 bytes each, evaluated at compile time
//! - μ-law / A-law encode tables: 64KB each, built on first use
//!
//! All tables are immutable after construction and safe to share between
//! threads.

use crate::codecs::g711::reference::{alaw_to_linear, linear_to_alaw, linear_to_ulaw, ulaw_to_linear};
use once_cell::sync::Lazy;

/// A-law code → linear sample
pub static ALAW_DECODE_TABLE: [i16; 256] = build_alaw_decode_table();

/// μ-law code → linear sample
pub static ULAW_DECODE_TABLE: [i16; 256] = build_ulaw_decode_table();

/// Linear sample (offset by 32768) → A-law code
static ALAW_ENCODE_TABLE: Lazy<Box<[u8; 65536]>> = Lazy::new(|| build_encode_table(linear_to_alaw));

/// Linear sample (offset by 32768) → μ-law code
static ULAW_ENCODE_TABLE: Lazy<Box<[u8; 65536]>> = Lazy::new(|| build_encode_table(linear_to_ulaw));

const fn build_alaw_decode_table() -> [i16; 256] {
    let mut table = [0i16; 256];
    let mut code = 0;
    while code < 256 {
        table[code] = alaw_to_linear(code as u8);
        code += 1;
    }
    table
}

const fn build_ulaw_decode_table() -> [i16; 256] {
    let mut table = [0i16; 256];
    let mut code = 0;
    while code < 256 {
        table[code] = ulaw_to_linear(code as u8);
        code += 1;
    }
    table
}

fn build_encode_table(compress: fn(i16) -> u8) -> Box<[u8; 65536]> {
    let mut table = Box::new([0u8; 65536]);
    for (index, entry) in table.iter_mut().enumerate() {
        *entry = compress(table_sample(index));
    }
    table
}

#[inline]
fn table_index(sample: i16) -> usize {
    (sample as u16).wrapping_add(32768) as usize
}

#[inline]
fn table_sample(index: usize) -> i16 {
    (index as u16).wrapping_sub(32768) as i16
}

/// Force construction of the encode tables
///
/// Lookups build the tables on first use anyway; calling this up front moves
/// that cost out of the audio path.
pub fn init_tables() {
    Lazy::force(&ALAW_ENCODE_TABLE);
    Lazy::force(&ULAW_ENCODE_TABLE);
    tracing::debug!("G.711 lookup tables initialized (~129KB)");
}

/// Encode a linear sample as an A-law code
#[inline]
pub fn alaw_encode(sample: i16) -> u8 {
    ALAW_ENCODE_TABLE[table_index(sample)]
}

/// Decode an A-law code to a linear sample
#[inline]
pub fn alaw_decode(code: u8) -> i16 {
    ALAW_DECODE_TABLE[code as usize]
}

/// Encode a linear sample as a μ-law code
#[inline]
pub fn ulaw_encode(sample: i16) -> u8 {
    ULAW_ENCODE_TABLE[table_index(sample)]
}

/// Decode a μ-law code to a linear sample
#[inline]
pub fn ulaw_decode(code: u8) -> i16 {
    ULAW_DECODE_TABLE[code as usize]
}

/// Batch A-law encoding
///
/// # Panics
///
/// Panics if the input and output slices have different lengths.
pub fn alaw_encode_slice(samples: &[i16], output: &mut [u8]) {
    assert_eq!(samples.len(), output.len(), "Input and output slices must have the same length");
    for (out, &sample) in output.iter_mut().zip(samples) {
        *out = alaw_encode(sample);
    }
}

/// Batch A-law decoding
///
/// # Panics
///
/// Panics if the input and output slices have different lengths.
pub fn alaw_decode_slice(encoded: &[u8], output: &mut [i16]) {
    assert_eq!(encoded.len(), output.len(), "Input and output slices must have the same length");
    for (out, &code) in output.iter_mut().zip(encoded) {
        *out = alaw_decode(code);
    }
}

/// Batch μ-law encoding
///
/// # Panics
///
/// Panics if the input and output slices have different lengths.
pub fn ulaw_encode_slice(samples: &[i16], output: &mut [u8]) {
    assert_eq!(samples.len(), output.len(), "Input and output slices must have the same length");
    for (out, &sample) in output.iter_mut().zip(samples) {
        *out = ulaw_encode(sample);
    }
}

/// Batch μ-law decoding
///
/// # Panics
///
/// Panics if the input and output slices have different lengths.
pub fn ulaw_decode_slice(encoded: &[u8], output: &mut [i16]) {
    assert_eq!(encoded.len(), output.len(), "Input and output slices must have the same length");
    for (out, &code) in output.iter_mut().zip(encoded) {
        *out = ulaw_decode(code);
    }
}
