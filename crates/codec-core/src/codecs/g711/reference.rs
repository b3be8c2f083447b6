//! G.711 Companding Law Definitions
//!
//! Algorithmic A-law and μ-law conversion between 16-bit linear PCM and 8-bit
//! logarithmic codes. These functions define the laws; the lookup tables in
//! [`super::tables`] are generated from them and must agree bit for bit.
//!
//! ## A-law
//! - 13-bit magnitude split into a 3-bit segment and a 4-bit mantissa
//! - Negative inputs use the one's-complement magnitude
//! - Sign bit set means positive
//! - Even bits are inverted on the wire (XOR with 0x55)
//!
//! ## μ-law
//! - Magnitude biased by 0x84 before segmentation
//! - Negative inputs use the one's-complement magnitude
//! - All bits inverted on the wire, so sign bit set means positive
//!
//! All functions are `const` so the small decode and transcoding tables can
//! be evaluated at compile time.

use crate::utils::numeric::top_bit;

/// Alternate-mark-inversion mask applied to every A-law code
pub const ALAW_AMI_MASK: u8 = 0x55;

/// Bias added to the μ-law magnitude before segmentation
pub const ULAW_BIAS: i32 = 0x84;

/// Sign bit shared by both laws (set for non-negative samples)
pub const G711_SIGN_BIT: u8 = 0x80;

/// Encode a linear sample as an A-law code
pub const fn linear_to_alaw(sample: i16) -> u8 {
    let (mask, magnitude) = if sample >= 0 {
        (ALAW_AMI_MASK | G711_SIGN_BIT, sample as i32)
    } else {
        (ALAW_AMI_MASK, -(sample as i32) - 1)
    };

    // The largest 16-bit magnitude (32767) tops out in segment 7
    let seg = top_bit((magnitude | 0xFF) as u32) - 7;
    let shift = if seg == 0 { 4 } else { seg + 3 };
    let code = (seg << 4) | ((magnitude >> shift) & 0x0F);
    (code as u8) ^ mask
}

/// Decode an A-law code to a linear sample
pub const fn alaw_to_linear(code: u8) -> i16 {
    let alaw = code ^ ALAW_AMI_MASK;
    let seg = ((alaw & 0x70) >> 4) as i32;
    let mut magnitude = ((alaw & 0x0F) as i32) << 4;
    if seg > 0 {
        magnitude = (magnitude + 0x108) << (seg - 1);
    } else {
        magnitude += 8;
    }

    if alaw & G711_SIGN_BIT != 0 {
        magnitude as i16
    } else {
        -magnitude as i16
    }
}

/// Encode a linear sample as a μ-law code
pub const fn linear_to_ulaw(sample: i16) -> u8 {
    let (mask, biased) = if sample < 0 {
        (0x7F, ULAW_BIAS - (sample as i32) - 1)
    } else {
        (0xFF, ULAW_BIAS + sample as i32)
    };

    let seg = top_bit((biased | 0xFF) as u32) - 7;
    if seg >= 8 {
        // Past the last segment: saturate to the end code of this sign
        return 0x7F ^ mask;
    }
    let code = (seg << 4) | ((biased >> (seg + 3)) & 0x0F);
    (code as u8) ^ mask
}

/// Decode a μ-law code to a linear sample
pub const fn ulaw_to_linear(code: u8) -> i16 {
    let ulaw = !code;
    let seg = ((ulaw & 0x70) >> 4) as i32;
    let biased = ((((ulaw & 0x0F) as i32) << 3) + ULAW_BIAS) << seg;

    if ulaw & G711_SIGN_BIT != 0 {
        (ULAW_BIAS - biased) as i16
    } else {
        (biased - ULAW_BIAS) as i16
    }
}
