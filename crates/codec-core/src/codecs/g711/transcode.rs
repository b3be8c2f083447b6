//! Direct A-law ⇄ μ-law transcoding
//!
//! Each direction is a single table lookup. The tables are generated at
//! compile time by expanding the source code to linear and compressing the
//! result under the target law, so a transcoded stream is exactly what a
//! decode-then-encode pipeline would produce, without an intermediate buffer.
//!
//! The two laws place their segment boundaries differently, so a round trip
//! through the other law returns the original code for most values and lands
//! one quantization step away at the crossover points.

use crate::codecs::g711::reference::{
    alaw_to_linear, linear_to_alaw, linear_to_ulaw, ulaw_to_linear, G711_SIGN_BIT,
};

/// A-law code → μ-law code
pub static ALAW_TO_ULAW_TABLE: [u8; 256] = build_alaw_to_ulaw_table();

/// μ-law code → A-law code
pub static ULAW_TO_ALAW_TABLE: [u8; 256] = build_ulaw_to_alaw_table();

const fn fused_alaw_to_ulaw(code: u8) -> u8 {
    // A-law has no zero level, so the sign always survives expansion
    linear_to_ulaw(alaw_to_linear(code))
}

const fn fused_ulaw_to_alaw(code: u8) -> u8 {
    let mut linear = ulaw_to_linear(code);
    // μ-law negative zero expands to 0; keep it on the negative side
    if linear == 0 && code & G711_SIGN_BIT == 0 {
        linear = -1;
    }
    linear_to_alaw(linear)
}

const fn build_alaw_to_ulaw_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut code = 0;
    while code < 256 {
        table[code] = fused_alaw_to_ulaw(code as u8);
        code += 1;
    }
    table
}

const fn build_ulaw_to_alaw_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut code = 0;
    while code < 256 {
        table[code] = fused_ulaw_to_alaw(code as u8);
        code += 1;
    }
    table
}

/// Transcode one A-law code to μ-law
#[inline]
pub fn alaw_to_ulaw(code: u8) -> u8 {
    ALAW_TO_ULAW_TABLE[code as usize]
}

/// Transcode one μ-law code to A-law
#[inline]
pub fn ulaw_to_alaw(code: u8) -> u8 {
    ULAW_TO_ALAW_TABLE[code as usize]
}

/// Transcode an A-law buffer to μ-law
///
/// # Panics
///
/// Panics if the input and output slices have different lengths.
pub fn alaw_to_ulaw_slice(alaw: &[u8], output: &mut [u8]) {
    assert_eq!(alaw.len(), output.len(), "Input and output slices must have the same length");
    for (out, &code) in output.iter_mut().zip(alaw) {
        *out = alaw_to_ulaw(code);
    }
}

/// Transcode a μ-law buffer to A-law
///
/// # Panics
///
/// Panics if the input and output slices have different lengths.
pub fn ulaw_to_alaw_slice(ulaw: &[u8], output: &mut [u8]) {
    assert_eq!(ulaw.len(), output.len(), "Input and output slices must have the same length");
    for (out, &code) in output.iter_mut().zip(ulaw) {
        *out = ulaw_to_alaw(code);
    }
}
