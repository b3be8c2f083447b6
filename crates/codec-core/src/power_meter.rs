//! Power Meter
//!
//! A running estimate of signal power, reported in dBm0 or dBov. The
//! estimate is a single-pole integer filter over squared amplitude:
//!
//! ```text
//! reading += (sample² - reading) >> time_constant
//! ```
//!
//! so a time constant of `n` gives a smoothing window of roughly `2ⁿ`
//! samples. Calibration follows G.711: 0 dBm0 is 3.14 dB below the largest
//! μ-law sine, which puts a full-scale square wave at +6.16 dBm0 and a
//! full-scale sine at +3.14 dBm0 (0 dBov).
//!
//! # Example
//! ```
//! use telephony_codec_core::power_meter::PowerMeter;
//!
//! let mut meter = PowerMeter::new(7);
//! assert_eq!(meter.dbm0(), telephony_codec_core::power_meter::SILENCE_DBM0);
//!
//! for _ in 0..2000 {
//!     meter.update(i16::MIN);
//! }
//! assert!((meter.dbm0() - 6.16).abs() < 0.01);
//! ```

/// dBm0 of a full-scale square wave
pub const DBM0_MAX_POWER: f64 = 3.14 + 3.02;

/// dBov of a full-scale square wave (a full-scale sine is 0 dBov)
pub const DBOV_MAX_POWER: f64 = 3.02;

/// Level reported for a zero reading
///
/// Below the quietest non-zero reading (about -84.1 dBm0), so it never
/// collides with a real measurement.
pub const SILENCE_DBM0: f64 = -100.0;

/// Largest accepted time constant
pub const MAX_TIME_CONSTANT: u32 = 30;

/// Power of a full-scale square wave in squared linear units
const FULL_SCALE_POWER: f64 = 32768.0 * 32768.0;

/// Largest reachable reading, `(-32768)²`
const MAX_READING: i32 = 1 << 30;

/// Running power estimator for one signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerMeter {
    time_constant: u32,
    reading: i32,
}

impl PowerMeter {
    /// Create a meter with a zero reading
    ///
    /// Time constants above [`MAX_TIME_CONSTANT`] are clamped: the integer
    /// filter could never move from zero.
    pub fn new(time_constant: u32) -> Self {
        let clamped = time_constant.min(MAX_TIME_CONSTANT);
        if clamped != time_constant {
            tracing::warn!(
                requested = time_constant,
                used = clamped,
                "Power meter time constant clamped"
            );
        }
        Self {
            time_constant: clamped,
            reading: 0,
        }
    }

    /// Smoothing shift in use
    pub fn time_constant(&self) -> u32 {
        self.time_constant
    }

    /// Current reading in squared linear units
    pub fn reading(&self) -> i32 {
        self.reading
    }

    /// Clear the reading, keeping the time constant
    pub fn reset(&mut self) {
        self.reading = 0;
    }

    /// Feed one sample, returning the new reading
    pub fn update(&mut self, sample: i16) -> i32 {
        let power = i32::from(sample) * i32::from(sample);
        // Both terms are within 0..=2^30, so the difference cannot overflow
        self.reading += (power - self.reading) >> self.time_constant;
        self.reading
    }

    /// Feed a block of samples, returning the final reading
    pub fn update_samples(&mut self, samples: &[i16]) -> i32 {
        for &sample in samples {
            self.update(sample);
        }
        self.reading
    }

    /// Current level in dBm0, or [`SILENCE_DBM0`] for a zero reading
    pub fn dbm0(&self) -> f64 {
        self.level(DBM0_MAX_POWER)
    }

    /// Current level in dBov, or [`SILENCE_DBM0`] shifted to the dBov scale
    /// for a zero reading
    pub fn dbov(&self) -> f64 {
        self.level(DBOV_MAX_POWER)
    }

    /// Reading a steady signal at `dbm0` settles to
    pub fn level_dbm0(dbm0: f64) -> i32 {
        Self::level_to_reading(dbm0 - DBM0_MAX_POWER)
    }

    /// Reading a steady signal at `dbov` settles to
    pub fn level_dbov(dbov: f64) -> i32 {
        Self::level_to_reading(dbov - DBOV_MAX_POWER)
    }

    fn level(&self, max_power: f64) -> f64 {
        if self.reading <= 0 {
            return SILENCE_DBM0 - DBM0_MAX_POWER + max_power;
        }
        10.0 * (f64::from(self.reading) / FULL_SCALE_POWER).log10() + max_power
    }

    fn level_to_reading(relative_db: f64) -> i32 {
        let reading = FULL_SCALE_POWER * 10f64.powf(relative_db / 10.0);
        reading.round().clamp(0.0, f64::from(MAX_READING)) as i32
    }
}
