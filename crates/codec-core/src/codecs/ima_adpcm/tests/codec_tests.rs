//! IMA ADPCM Codec Tests

use super::utils::*;
use crate::codecs::ima_adpcm::*;
use crate::error::CodecError;
use crate::types::{AudioCodec, CodecConfig, SampleRate};

#[test]
fn test_codec_creation() {
    let dvi4 = ImaAdpcmCodec::new(CodecConfig::dvi4()).unwrap();
    assert_eq!(dvi4.variant(), ImaAdpcmVariant::FixedNibble);

    let vdvi = ImaAdpcmCodec::new(CodecConfig::vdvi()).unwrap();
    assert_eq!(vdvi.variant(), ImaAdpcmVariant::VariableLength);

    assert!(matches!(
        ImaAdpcmCodec::new(CodecConfig::g711_pcmu()),
        Err(CodecError::UnsupportedCodec { .. })
    ));
    assert!(matches!(
        ImaAdpcmCodec::new(CodecConfig::vdvi().with_sample_rate(SampleRate::Rate22050)),
        Err(CodecError::InvalidSampleRate { rate: 22050, .. })
    ));
}

#[test]
fn test_codec_info() {
    let codec = ImaAdpcmCodec::new(CodecConfig::dvi4()).unwrap();
    let info = codec.info();
    assert_eq!(info.name, "DVI4");
    assert_eq!(info.bitrate, 32000);
    assert_eq!(info.payload_type, Some(5));
    assert_eq!(info.frame_size, 160);
    assert!(codec.supports_variable_frame_size());

    let wideband = ImaAdpcmCodec::new(CodecConfig::dvi4().with_sample_rate(SampleRate::Rate16000)).unwrap();
    assert_eq!(wideband.info().payload_type, Some(6));
    assert_eq!(wideband.info().bitrate, 64000);

    let vdvi = ImaAdpcmCodec::new(CodecConfig::vdvi()).unwrap();
    assert_eq!(vdvi.info().name, "VDVI");
    assert_eq!(vdvi.info().payload_type, None);
}

#[test]
fn test_directions_are_independent() {
    let mut codec = ImaAdpcmCodec::new(CodecConfig::dvi4()).unwrap();
    let samples = sine(160, 440.0, 10000.0);

    let encoded = codec.encode(&samples).unwrap();
    assert_ne!(codec.encoder_state.step_index(), 0);
    assert_eq!(codec.decoder_state.step_index(), 0);

    let decoded = codec.decode(&encoded).unwrap();
    assert_eq!(codec.decoder_state, codec.encoder_state);

    // Skip the cold-start samples while the step size grows
    let snr = snr_db(&samples[40..], &decoded[40..]);
    assert!(snr > 20.0, "SNR too low after adaptation: {:.2} dB", snr);
}

#[test]
fn test_codec_reset() {
    for config in [CodecConfig::dvi4(), CodecConfig::vdvi()] {
        let mut codec = ImaAdpcmCodec::new(config).unwrap();
        let samples = sine(160, 1000.0, 16000.0);

        let first = codec.encode(&samples).unwrap();
        codec.decode(&first).unwrap();
        codec.reset().unwrap();
        assert_eq!(codec.encoder_state.predictor(), 0);
        assert_eq!(codec.decoder_state.step_index(), 0);

        // A reset codec produces the same stream again
        assert_eq!(codec.encode(&samples).unwrap(), first);
    }
}

#[test]
fn test_variable_frame_lengths() {
    let mut codec = ImaAdpcmCodec::new(CodecConfig::vdvi()).unwrap();
    for len in [1usize, 17, 80, 240] {
        let samples = sine(len, 300.0, 5000.0);
        let encoded = codec.encode(&samples).unwrap();
        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded.len(), len);
    }
}
