//! Cross-component test suite for the codec library
//!
//! Exercises the codecs together with the power meter: calibrated reference
//! tones, transcoded and re-encoded signal paths, and factory-built codecs
//! on speech-like input.

use crate::codecs::g711::*;
use crate::codecs::ima_adpcm::{ImaAdpcmState, ImaAdpcmVariant};
use crate::power_meter::PowerMeter;
use crate::types::CodecConfig;
use crate::CodecFactory;

/// μ-law 1 kHz reference tone at 0 dBm0, one period
const ULAW_REFERENCE_TONE: [u8; 8] = [0x1E, 0x0B, 0x0B, 0x1E, 0x9E, 0x8B, 0x8B, 0x9E];

/// A-law 1 kHz reference tone at 0 dBm0, one period
const ALAW_REFERENCE_TONE: [u8; 8] = [0x34, 0x21, 0x21, 0x34, 0xB4, 0xA1, 0xA1, 0xB4];

/// Common test utilities
pub mod utils {
    use super::{CodecConfig, PowerMeter};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    /// Repeat an encoded pattern to `len` codes
    pub fn repeat_pattern(pattern: &[u8], len: usize) -> Vec<u8> {
        pattern.iter().copied().cycle().take(len).collect()
    }

    /// Level in dBm0 of a signal measured from a fresh meter
    pub fn measure_dbm0(samples: &[i16]) -> f64 {
        let mut meter = PowerMeter::new(7);
        meter.update_samples(samples);
        meter.dbm0()
    }

    /// Generate speech-like signal: three formants under a syllable envelope
    pub fn generate_speech_signal(length: usize, sample_rate: u32, seed: u64) -> Vec<i16> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let formants = [500.0, 1500.0, 2500.0];
        let gains = [0.8, 0.6, 0.4];

        (0..length)
            .map(|i| {
                let t = i as f64 / f64::from(sample_rate);
                let mut sample: f64 = formants
                    .iter()
                    .zip(gains.iter())
                    .map(|(freq, gain)| (2.0 * std::f64::consts::PI * freq * t).sin() * gain)
                    .sum();

                // Add some noise for realism
                sample += (rng.r#gen::<f64>() - 0.5) * 0.1;

                let envelope = (2.0 * std::f64::consts::PI * 5.0 * t).sin().abs();
                (sample * envelope * 8000.0).clamp(-32768.0, 32767.0) as i16
            })
            .collect()
    }

    /// Calculate signal-to-noise ratio
    pub fn calculate_snr(original: &[i16], processed: &[i16]) -> f64 {
        let signal_power: f64 = original.iter().map(|&x| f64::from(x).powi(2)).sum();
        let noise_power: f64 = original
            .iter()
            .zip(processed.iter())
            .map(|(&orig, &proc)| (f64::from(orig) - f64::from(proc)).powi(2))
            .sum();

        if noise_power == 0.0 {
            return f64::INFINITY;
        }

        10.0 * (signal_power / noise_power).log10()
    }

    /// Create test configurations for every codec
    pub fn create_all_test_configs() -> Vec<(&'static str, CodecConfig)> {
        vec![
            ("G.711 μ-law", CodecConfig::g711_pcmu()),
            ("G.711 A-law", CodecConfig::g711_pcma()),
            ("DVI4", CodecConfig::dvi4()),
            ("VDVI", CodecConfig::vdvi()),
        ]
    }
}

/// Reference tone calibration
#[cfg(test)]
mod calibration_tests {
    use super::*;

    #[test]
    fn test_ulaw_reference_tone_is_zero_dbm0() {
        let codes = utils::repeat_pattern(&ULAW_REFERENCE_TONE, 8000);
        let mut samples = vec![0i16; codes.len()];
        ulaw_decode_slice(&codes, &mut samples);

        let level = utils::measure_dbm0(&samples);
        assert!(level.abs() <= 0.1, "μ-law reference tone at {:.3} dBm0", level);
    }

    #[test]
    fn test_alaw_reference_tone_is_zero_dbm0() {
        let codes = utils::repeat_pattern(&ALAW_REFERENCE_TONE, 8000);
        let mut samples = vec![0i16; codes.len()];
        alaw_decode_slice(&codes, &mut samples);

        let level = utils::measure_dbm0(&samples);
        assert!(level.abs() <= 0.1, "A-law reference tone at {:.3} dBm0", level);
    }

    #[test]
    fn test_reference_tones_are_1khz() {
        use rustfft::FftPlanner;
        use rustfft::num_complex::Complex;

        for (law, pattern) in [(G711Law::ULaw, ULAW_REFERENCE_TONE), (G711Law::ALaw, ALAW_REFERENCE_TONE)] {
            // One second at 8 kHz: bin k is k Hz
            let mut buffer: Vec<Complex<f64>> = utils::repeat_pattern(&pattern, 8000)
                .into_iter()
                .map(|code| Complex::new(f64::from(law.decode(code)), 0.0))
                .collect();
            FftPlanner::<f64>::new().plan_fft_forward(buffer.len()).process(&mut buffer);

            let peak = (1..4000)
                .max_by(|&a, &b| buffer[a].norm().total_cmp(&buffer[b].norm()))
                .unwrap();
            assert_eq!(peak, 1000, "{:?} reference tone peaks at {} Hz", law, peak);
        }
    }

    #[test]
    fn test_transcoded_reference_tones_keep_level() {
        let alaw = utils::repeat_pattern(&ALAW_REFERENCE_TONE, 8000);
        let mut ulaw = vec![0u8; alaw.len()];
        alaw_to_ulaw_slice(&alaw, &mut ulaw);
        let mut samples = vec![0i16; ulaw.len()];
        ulaw_decode_slice(&ulaw, &mut samples);
        assert!(utils::measure_dbm0(&samples).abs() <= 0.1);

        let ulaw = utils::repeat_pattern(&ULAW_REFERENCE_TONE, 8000);
        let mut alaw = vec![0u8; ulaw.len()];
        ulaw_to_alaw_slice(&ulaw, &mut alaw);
        alaw_decode_slice(&alaw, &mut samples);
        assert!(utils::measure_dbm0(&samples).abs() <= 0.1);
    }

    #[test]
    fn test_adpcm_preserves_reference_level() {
        let codes = utils::repeat_pattern(&ULAW_REFERENCE_TONE, 8000);
        let mut linear = vec![0i16; codes.len()];
        ulaw_decode_slice(&codes, &mut linear);

        for variant in [ImaAdpcmVariant::FixedNibble, ImaAdpcmVariant::VariableLength] {
            let mut encoder = ImaAdpcmState::new(variant);
            let mut decoder = ImaAdpcmState::new(variant);
            let decoded = decoder.decode(&encoder.encode(&linear));

            let level = utils::measure_dbm0(&decoded);
            assert!(level.abs() <= 0.2, "{} reference tone at {:.3} dBm0", variant, level);
        }
    }
}

/// Factory-built codecs on speech-like input
#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_all_codecs_roundtrip() {
        for (name, config) in utils::create_all_test_configs() {
            let mut codec = CodecFactory::create(config).unwrap();
            let info = codec.info();

            let samples = utils::generate_speech_signal(info.frame_size * 10, info.sample_rate, 7);
            let encoded = codec.encode(&samples).unwrap();
            let decoded = codec.decode(&encoded).unwrap();

            assert_eq!(decoded.len(), samples.len(), "{}", name);
            assert!(!encoded.is_empty());

            let snr = utils::calculate_snr(&samples, &decoded);
            match info.name {
                "PCMU" | "PCMA" => assert!(snr > 30.0, "{} SNR too low: {:.2} dB", name, snr),
                _ => assert!(snr > 15.0, "{} SNR too low: {:.2} dB", name, snr),
            }
        }
    }

    #[test]
    fn test_codec_reset() {
        for (name, config) in utils::create_all_test_configs() {
            let mut codec = CodecFactory::create(config).unwrap();
            let samples = vec![1000i16; codec.frame_size()];

            let first = codec.encode(&samples).unwrap();
            assert!(codec.reset().is_ok(), "Reset failed for {}", name);
            assert_eq!(codec.encode(&samples).unwrap(), first, "{}", name);
        }
    }

    #[test]
    fn test_level_survives_every_codec() {
        let samples = utils::generate_speech_signal(8000, 8000, 11);
        let reference = utils::measure_dbm0(&samples);

        for (name, config) in utils::create_all_test_configs() {
            let mut codec = CodecFactory::create(config).unwrap();
            let encoded = codec.encode(&samples).unwrap();
            let decoded = codec.decode(&encoded).unwrap();
            let level = utils::measure_dbm0(&decoded);
            assert!((level - reference).abs() < 0.5, "{}: {:.2} vs {:.2} dBm0", name, level, reference);
        }
    }
}

/// Library entry points
#[cfg(test)]
mod library_tests {
    use crate::{info, init, SUPPORTED_CODECS, VERSION};

    #[test]
    fn test_init() {
        assert!(init().is_ok());
        assert!(init().is_ok());
    }

    #[test]
    fn test_info() {
        let info = info();
        assert_eq!(info.version, VERSION);
        assert_eq!(info.supported_codecs, SUPPORTED_CODECS);
    }

    #[test]
    fn test_supported_codecs() {
        assert_eq!(SUPPORTED_CODECS, crate::CodecFactory::supported_codecs().as_slice());
        for name in SUPPORTED_CODECS {
            assert!(crate::CodecFactory::is_supported(name));
        }
    }
}
