//! # Telephony Codec Core
//!
//! Narrowband telephony audio codecs and a calibrated level meter: the
//! conversions a media path needs between 16-bit linear PCM and the
//! compressed payloads carried in RTP.
//!
//! ## Features
//!
//! - **G.711 (PCMU/PCMA)**: table-driven μ-law and A-law companding, plus
//!   direct law-to-law transcoding
//! - **IMA ADPCM (DVI4/VDVI)**: 4-bit adaptive differential PCM in fixed
//!   nibble and variable-length packings
//! - **Power meter**: running signal power in dBm0/dBov, calibrated against
//!   the G.711 reference tone
//!
//! ## Usage
//!
//! ```rust
//! use telephony_codec_core::{CodecFactory, CodecConfig};
//!
//! // Create a DVI4 codec
//! let config = CodecConfig::dvi4();
//! let mut codec = CodecFactory::create(config)?;
//!
//! // Encode audio samples
//! let samples = vec![0i16; 160]; // 20ms at 8kHz
//! let encoded = codec.encode(&samples)?;
//!
//! // Decode back to samples
//! let decoded = codec.decode(&encoded)?;
//! assert_eq!(decoded.len(), samples.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `g711`: G.711 μ-law/A-law codecs (enabled by default)
//! - `ima-adpcm`: DVI4 and VDVI codecs (enabled by default)

#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codecs;
pub mod error;
pub mod power_meter;
pub mod types;
pub mod utils;

#[cfg(all(test, feature = "g711", feature = "ima-adpcm"))]
mod tests;

// Re-export commonly used types and traits
pub use codecs::CodecFactory;
pub use error::{CodecError, Result};
pub use power_meter::PowerMeter;
pub use types::{AudioCodec, CodecConfig, CodecInfo, CodecType, SampleRate};

/// Version information for the codec library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported codec types
pub const SUPPORTED_CODECS: &[&str] = &[
    #[cfg(feature = "g711")]
    "PCMU",
    #[cfg(feature = "g711")]
    "PCMA",
    #[cfg(feature = "ima-adpcm")]
    "DVI4",
    #[cfg(feature = "ima-adpcm")]
    "VDVI",
];

/// Initialize the codec library
///
/// Installs a `tracing` subscriber if none is set and builds the G.711
/// encode tables up front. Safe to call more than once.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for initialization steps
/// that can fail.
pub fn init() -> Result<()> {
    // Initialize logging if not already done
    let _ = tracing_subscriber::fmt::try_init();

    // Initialize lookup tables
    #[cfg(feature = "g711")]
    codecs::g711::init_tables();

    tracing::info!("Telephony codec core v{} initialized", VERSION);
    tracing::info!("Supported codecs: {:?}", SUPPORTED_CODECS);

    Ok(())
}

/// Get library information
pub fn info() -> LibraryInfo {
    LibraryInfo {
        version: VERSION,
        supported_codecs: SUPPORTED_CODECS.to_vec(),
    }
}

/// Library information structure
#[derive(Debug, Clone)]
pub struct LibraryInfo {
    /// Library version
    pub version: &'static str,
    /// List of supported codec names
    pub supported_codecs: Vec<&'static str>,
}
