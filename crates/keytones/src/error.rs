//! Error types for key lookups and octave table construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

use cheb_kernel::ChebError;

/// Errors from key conversion or [`KeyTones`](crate::KeyTones) setup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ToneError {
    /// MIDI key above 127.
    KeyOutOfRange(u8),
    /// Tuning configuration failed validation.
    InvalidConfig(&'static str),
    /// Fitting an octave table failed.
    Fit(ChebError),
}

impl Display for ToneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeyOutOfRange(key) => write!(f, "MIDI key {key} outside 0..=127"),
            Self::InvalidConfig(msg) => write!(f, "invalid tuning config: {msg}"),
            Self::Fit(e) => write!(f, "octave fit failed: {e}"),
        }
    }
}

impl Error for ToneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fit(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChebError> for ToneError {
    fn from(e: ChebError) -> Self {
        Self::Fit(e)
    }
}
