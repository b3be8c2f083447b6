//! IMA ADPCM Tables and Constants
//!
//! The step-size and index-adjust tables are the ones published by the IMA
//! Digital Audio Focus and Technical Working Groups; every DVI4/VDVI
//! implementation must use them unchanged to interoperate.

/// Quantizer step sizes, indexed by `step_index`
pub const STEP_SIZE_TABLE: [i16; 89] = [
    7, 8, 9, 10, 11, 12, 13, 14, 16, 17,
    19, 21, 23, 25, 28, 31, 34, 37, 41, 45,
    50, 55, 60, 66, 73, 80, 88, 97, 107, 118,
    130, 143, 157, 173, 190, 209, 230, 253, 279, 307,
    337, 371, 408, 449, 494, 544, 598, 658, 724, 796,
    876, 963, 1060, 1166, 1282, 1411, 1552, 1707, 1878, 2066,
    2272, 2499, 2749, 3024, 3327, 3660, 4026, 4428, 4871, 5358,
    5894, 6484, 7132, 7845, 8630, 9493, 10442, 11487, 12635, 13899,
    15289, 16818, 18500, 20350, 22385, 24623, 27086, 29794, 32767,
];

/// Largest valid `step_index`
pub const MAX_STEP_INDEX: usize = STEP_SIZE_TABLE.len() - 1;

/// Step index adjustment per 4-bit code (the sign bit does not matter)
pub const INDEX_ADJUST_TABLE: [i8; 16] = [
    -1, -1, -1, -1, 2, 4, 6, 8,
    -1, -1, -1, -1, 2, 4, 6, 8,
];

/// Sign bit of a 4-bit code
pub const SIGN_BIT: u8 = 0x08;

/// Magnitude bits of a 4-bit code
pub const MAGNITUDE_MASK: u8 = 0x07;

/// A VDVI codeword: right-aligned bit pattern and its length in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VdviCodeword {
    /// Bit pattern, transmitted most significant bit first
    pub bits: u8,
    /// Number of significant bits in `bits` (2..=8)
    pub len: u8,
}

const fn cw(bits: u8, len: u8) -> VdviCodeword {
    VdviCodeword { bits, len }
}

/// VDVI codebook, indexed by 4-bit DVI4 code (RFC 3551 §4.5.7)
///
/// Small magnitudes get the short words: a run of silence costs 2 bits per
/// sample instead of 4.
pub const VDVI_CODEBOOK: [VdviCodeword; 16] = [
    cw(0b00, 2),
    cw(0b010, 3),
    cw(0b1100, 4),
    cw(0b11100, 5),
    cw(0b111100, 6),
    cw(0b1111100, 7),
    cw(0b11111100, 8),
    cw(0b11111110, 8),
    cw(0b10, 2),
    cw(0b011, 3),
    cw(0b1101, 4),
    cw(0b11101, 5),
    cw(0b111101, 6),
    cw(0b1111101, 7),
    cw(0b11111101, 8),
    cw(0b11111111, 8),
];

/// Longest VDVI codeword in bits
pub const VDVI_MAX_BITS: u32 = 8;

/// Fill value for the unused low bits of the last VDVI byte
pub const VDVI_PAD: u8 = 0xFF;

/// Decode table indexed by the next 8 stream bits: `(code, len)`
///
/// The codebook is prefix-free and complete, so every window starts with
/// exactly one codeword.
pub static VDVI_DECODE_TABLE: [(u8, u8); 256] = build_vdvi_decode_table();

const fn build_vdvi_decode_table() -> [(u8, u8); 256] {
    let mut table = [(0u8, 0u8); 256];
    let mut code = 0;
    while code < 16 {
        let word = VDVI_CODEBOOK[code];
        let free_bits = VDVI_MAX_BITS - word.len as u32;
        let first = (word.bits as usize) << free_bits;
        let mut suffix = 0;
        while suffix < (1 << free_bits) {
            table[first | suffix] = (code as u8, word.len);
            suffix += 1;
        }
        code += 1;
    }
    table
}
