//! Equal-tempered tuning parameters.

use crate::error::ToneError;

/// Highest valid MIDI key.
pub const MAX_KEY: u8 = 127;

/// Semitones per octave.
pub const OCTAVE: u8 = 12;

/// Equal-tempered tuning and the degree used for the octave fits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningConfig {
    /// Key whose pitch is `reference_hz` (69 = A4).
    pub reference_key: u8,
    /// Pitch of `reference_key` in Hz.
    pub reference_hz: f64,
    /// Chebyshev degree for each octave table (1..=11).
    pub degree: usize,
}

impl TuningConfig {
    /// A4 = 440 Hz, cubic fit.
    pub fn standard() -> Self {
        Self {
            reference_key: 69,
            reference_hz: 440.0,
            degree: 3,
        }
    }

    /// Standard reference with a different fit degree.
    pub fn with_degree(degree: usize) -> Self {
        Self {
            degree,
            ..Self::standard()
        }
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        self.validate_reference()?;
        if self.degree == 0 || self.degree >= OCTAVE as usize {
            return Err("degree must be in 1..=11");
        }
        Ok(())
    }

    /// Validate only the pitch reference; the fit degree does not affect exact pitches.
    fn validate_reference(&self) -> Result<(), &'static str> {
        if self.reference_key > MAX_KEY {
            return Err("reference_key must be <= 127");
        }
        if !self.reference_hz.is_finite() || self.reference_hz <= 0.0 {
            return Err("reference_hz must be positive");
        }
        Ok(())
    }

    /// Exact pitch of `key` in Hz: `reference_hz * 2^((key - reference_key) / 12)`.
    pub fn frequency(&self, key: u8) -> Result<f64, ToneError> {
        check_key(key)?;
        self.validate_reference().map_err(ToneError::InvalidConfig)?;
        let semitones = f64::from(key) - f64::from(self.reference_key);
        Ok(self.reference_hz * (semitones / f64::from(OCTAVE)).exp2())
    }

    /// Exact period of `key` in seconds per cycle.
    pub fn period(&self, key: u8) -> Result<f64, ToneError> {
        Ok(self.frequency(key)?.recip())
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) fn check_key(key: u8) -> Result<(), ToneError> {
    if key > MAX_KEY {
        return Err(ToneError::KeyOutOfRange(key));
    }
    Ok(())
}
