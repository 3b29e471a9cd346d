//! MIDI key numbers to note frequencies and periods.
//!
//! Two flavours are provided:
//! - exact: [`key_to_frequency`] and [`key_to_period`] evaluate
//!   `440 * 2^((k - 69) / 12)` directly;
//! - approximate: [`KeyTones`] fits a low-degree Chebyshev series to one
//!   octave of frequencies (and one of periods) and answers every other key
//!   by octave folding. A cubic fit is accurate to better than 0.1%.
//!
//! [`KeyTones::compare_keys`] evaluates the fitted table by three methods
//! (power form, explicit basis sum, Clenshaw) next to the exact value.
//!
//! ```
//! use keytones::{KeyTones, key_to_frequency};
//!
//! assert_eq!(key_to_frequency(69).unwrap(), 440.0);
//!
//! let tones = KeyTones::standard().unwrap();
//! assert_eq!(tones.frequency_approx(69).unwrap().round(), 440.0);
//! ```

pub mod compare;
pub mod error;
pub mod octave;
pub mod tones;
pub mod tuning;

pub use compare::MethodComparison;
pub use error::ToneError;
pub use octave::{BOTTOM_OCTAVE_START, TOP_OCTAVE_START, bottom_octave_params, top_octave_params};
pub use tones::KeyTones;
pub use tuning::{MAX_KEY, OCTAVE, TuningConfig};

/// Exact frequency of `key` in Hz under standard A4 = 440 Hz tuning.
pub fn key_to_frequency(key: u8) -> Result<f64, ToneError> {
    TuningConfig::standard().frequency(key)
}

/// Exact "unit period" of `key`, the inverse of its frequency.
///
/// This is in seconds per cycle; multiply by a sample rate in samples per
/// second to get a cycle length in samples.
///
/// ```
/// # use keytones::key_to_period;
/// assert_eq!((key_to_period(69).unwrap() * 440.0).round(), 1.0);
/// ```
pub fn key_to_period(key: u8) -> Result<f64, ToneError> {
    TuningConfig::standard().period(key)
}
