//! Fixed-point helpers shared by the codecs and the power meter

/// Clamp a widened intermediate back into the 16-bit linear sample range
#[inline]
pub const fn saturate(amp: i32) -> i16 {
    if amp > i16::MAX as i32 {
        i16::MAX
    } else if amp < i16::MIN as i32 {
        i16::MIN
    } else {
        amp as i16
    }
}

/// Index of the most significant set bit, or -1 when no bit is set
#[inline]
pub const fn top_bit(bits: u32) -> i32 {
    if bits == 0 {
        -1
    } else {
        31 - bits.leading_zeros() as i32
    }
}
