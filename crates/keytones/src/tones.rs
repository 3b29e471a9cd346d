//! Approximate key → frequency / period from fitted octave tables.

use cheb_kernel::{ChebyshevSeries, Domain};

use crate::error::ToneError;
use crate::octave::{
    BOTTOM_OCTAVE_START, TOP_OCTAVE_START, bottom_octave_params, octave_scale, top_octave_params,
};
use crate::tuning::{MAX_KEY, OCTAVE, TuningConfig};

/// Fitted octave tables for one tuning.
///
/// The frequency table covers the top octave (keys 116..=127) and the period
/// table the bottom octave (keys 0..=11), each as a Chebyshev series in the
/// semitone index `m` over the domain `[0, 11]`. Every other key is answered
/// by folding onto those octaves and halving.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyTones {
    config: TuningConfig,
    frequency_series: ChebyshevSeries,
    period_series: ChebyshevSeries,
}

impl KeyTones {
    /// Validate `config` and fit both octave tables.
    pub fn new(config: TuningConfig) -> Result<Self, ToneError> {
        config.validate().map_err(ToneError::InvalidConfig)?;

        let domain = Domain::new(0.0, f64::from(OCTAVE - 1))?;
        let semitones: Vec<f64> = (0..OCTAVE).map(f64::from).collect();

        let top = (0..OCTAVE)
            .map(|m| config.frequency(TOP_OCTAVE_START + m))
            .collect::<Result<Vec<_>, _>>()?;
        let bottom = (0..OCTAVE)
            .map(|m| config.period(BOTTOM_OCTAVE_START + m))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            config,
            frequency_series: ChebyshevSeries::fit_in(domain, &semitones, &top, config.degree)?,
            period_series: ChebyshevSeries::fit_in(domain, &semitones, &bottom, config.degree)?,
        })
    }

    /// Tables for A4 = 440 Hz with a cubic fit.
    pub fn standard() -> Result<Self, ToneError> {
        Self::new(TuningConfig::standard())
    }

    pub fn config(&self) -> &TuningConfig {
        &self.config
    }

    /// Top-octave frequency table, in Hz against semitone index.
    pub fn frequency_series(&self) -> &ChebyshevSeries {
        &self.frequency_series
    }

    /// Bottom-octave period table, in seconds against semitone index.
    pub fn period_series(&self) -> &ChebyshevSeries {
        &self.period_series
    }

    /// Exact frequency in Hz.
    pub fn frequency(&self, key: u8) -> Result<f64, ToneError> {
        self.config.frequency(key)
    }

    /// Exact period in seconds per cycle.
    pub fn period(&self, key: u8) -> Result<f64, ToneError> {
        self.config.period(key)
    }

    /// Frequency from the top-octave table, within 0.1% for a cubic fit.
    pub fn frequency_approx(&self, key: u8) -> Result<f64, ToneError> {
        let (m, o) = top_octave_params(key)?;
        Ok(self.frequency_series.eval(f64::from(m)) * octave_scale(o))
    }

    /// Period from the bottom-octave table, within 0.1% for a cubic fit.
    ///
    /// Multiply by a sample rate to get a cycle length in samples.
    pub fn period_approx(&self, key: u8) -> Result<f64, ToneError> {
        let (m, o) = bottom_octave_params(key)?;
        Ok(self.period_series.eval(f64::from(m)) * octave_scale(o))
    }

    /// Both approximations for every key, indexed by key.
    pub fn table(&self) -> Result<Vec<(f64, f64)>, ToneError> {
        (0..=MAX_KEY)
            .map(|key| {
                let f = self.frequency_approx(key)?;
                let p = self.period_approx(key)?;
                Ok::<_, ToneError>((f, p))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_rounds_to_440() {
        let tones = KeyTones::standard().unwrap();
        assert_eq!(tones.frequency_approx(69).unwrap().round(), 440.0);
        assert_eq!((1.0 / tones.period_approx(69).unwrap()).round(), 440.0);
        assert_eq!((tones.period(69).unwrap() * 440.0).round(), 1.0);
    }

    #[test]
    fn tables_span_one_octave() {
        let tones = KeyTones::standard().unwrap();
        let f = tones.frequency_series();
        assert_eq!(f.degree(), 3);
        assert_eq!((f.domain().start(), f.domain().end()), (0.0, 11.0));
        assert_eq!(tones.period_series().degree(), 3);
    }

    #[test]
    fn octave_keys_halve() {
        let tones = KeyTones::standard().unwrap();
        for key in 0..=115u8 {
            let lo = tones.frequency_approx(key).unwrap();
            let hi = tones.frequency_approx(key + 12).unwrap();
            assert!((hi - 2.0 * lo).abs() <= 1e-12 * hi);
        }
    }

    #[test]
    fn degree_follows_config() {
        let tones = KeyTones::new(TuningConfig::with_degree(5)).unwrap();
        assert_eq!(tones.frequency_series().degree(), 5);
        assert_eq!(tones.config().degree, 5);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert_eq!(
            KeyTones::new(TuningConfig::with_degree(0)),
            Err(ToneError::InvalidConfig("degree must be in 1..=11"))
        );
    }

    #[test]
    fn out_of_range_keys() {
        let tones = KeyTones::standard().unwrap();
        assert_eq!(tones.frequency_approx(128), Err(ToneError::KeyOutOfRange(128)));
        assert_eq!(tones.period_approx(255), Err(ToneError::KeyOutOfRange(255)));
    }

    #[test]
    fn table_covers_all_keys() {
        let tones = KeyTones::standard().unwrap();
        let table = tones.table().unwrap();
        assert_eq!(table.len(), 128);
        let (f, p) = table[69];
        assert_eq!(f, tones.frequency_approx(69).unwrap());
        assert_eq!(p, tones.period_approx(69).unwrap());
    }
}
