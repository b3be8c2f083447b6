//! IMA ADPCM (DVI4 / VDVI) Codec Implementation
//!
//! Backward-adaptive differential PCM at 4 bits per sample, in the two RTP
//! packings of RFC 3551: DVI4 (fixed nibbles) and VDVI (variable-length
//! codewords, 2 to 8 bits).
//!
//! # Architecture
//!
//! - `tables`: step sizes, index adjustments and the VDVI codebook
//! - `adpcm`: the adaptive quantizer and nibble packing
//! - `vdvi`: variable-length bit packing
//! - `state`: per-direction stream state
//! - `codec`: [`AudioCodec`](crate::types::AudioCodec) implementation
//!
//! # Reference
//!
//! IMA Recommended Practices for Enhancing Digital Audio Compatibility in
//! Multimedia Systems (1992); RFC 3551 §4.5.1 and §4.5.7.

pub mod adpcm;
pub mod codec;
pub mod state;
pub mod tables;
pub mod vdvi;

#[cfg(test)]
mod tests;

pub use codec::ImaAdpcmCodec;
pub use state::{ImaAdpcmState, ImaAdpcmVariant};
