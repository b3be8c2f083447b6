//! Test utilities for IMA ADPCM

use std::f64::consts::PI;

/// Sine wave at `frequency` Hz, 8 kHz sampling
pub fn sine(len: usize, frequency: f64, amplitude: f64) -> Vec<i16> {
    (0..len)
        .map(|i| (amplitude * (2.0 * PI * frequency * i as f64 / 8000.0).sin()).round() as i16)
        .collect()
}

/// Largest absolute difference between two sample sequences
pub fn max_error(original: &[i16], decoded: &[i16]) -> i32 {
    original
        .iter()
        .zip(decoded)
        .map(|(&a, &b)| (i32::from(a) - i32::from(b)).abs())
        .max()
        .unwrap_or(0)
}

/// Signal-to-noise ratio in dB
pub fn snr_db(original: &[i16], decoded: &[i16]) -> f64 {
    let signal: f64 = original.iter().map(|&x| f64::from(x).powi(2)).sum();
    let noise: f64 = original
        .iter()
        .zip(decoded)
        .map(|(&a, &b)| (f64::from(a) - f64::from(b)).powi(2))
        .sum();
    if noise == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (signal / noise).log10()
}
