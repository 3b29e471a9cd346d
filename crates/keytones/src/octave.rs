//! Folding any MIDI key onto a single reference octave.
//!
//! A key is described as `(m, o)`: semitone `m` within the reference octave
//! and a number of octaves `o` to halve by. Frequencies fold onto the top
//! octave (keys 116..=127) and periods onto the bottom octave (keys 0..=11),
//! so both only ever scale down by `2^-o`.

use crate::error::ToneError;
use crate::tuning::{OCTAVE, check_key};

/// First key of the top reference octave.
pub const TOP_OCTAVE_START: u8 = 116;

/// First key of the bottom reference octave.
pub const BOTTOM_OCTAVE_START: u8 = 0;

/// `(m, o)` with `key == 116 + m - 12 * o`.
pub fn top_octave_params(key: u8) -> Result<(u8, u8), ToneError> {
    check_key(key)?;
    // key + 120 stays below 256 for every valid key.
    let m = (key + 120 - TOP_OCTAVE_START) % OCTAVE;
    let o = 10 - (key + OCTAVE - m) / OCTAVE;
    Ok((m, o))
}

/// `(m, o)` with `key == m + 12 * o`.
pub fn bottom_octave_params(key: u8) -> Result<(u8, u8), ToneError> {
    check_key(key)?;
    Ok((key % OCTAVE, key / OCTAVE))
}

/// `2^-o`.
pub(crate) fn octave_scale(o: u8) -> f64 {
    2.0f64.powi(-i32::from(o))
}
