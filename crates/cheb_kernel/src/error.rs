//! Error types for Chebyshev fitting and domain construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from least-squares fitting or domain validation.
///
/// Evaluation itself is total and never produces one of these.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChebError {
    /// Sample abscissae and ordinates differ in length.
    LengthMismatch { xs: usize, ys: usize },
    /// Not enough samples to determine `degree + 1` coefficients.
    TooFewSamples { samples: usize, degree: usize },
    /// The sample at this index has a non-finite coordinate or value.
    NonFiniteSample(usize),
    /// Domain ends are not finite or not increasing.
    InvalidDomain { start: f64, end: f64 },
    /// The design matrix does not have full column rank.
    RankDeficient { rank: usize, expected: usize },
    /// The linear solver rejected the system.
    Solve(&'static str),
}

impl Display for ChebError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { xs, ys } => {
                write!(f, "sample length mismatch: {xs} abscissae, {ys} values")
            }
            Self::TooFewSamples { samples, degree } => {
                write!(f, "{samples} samples cannot determine a degree-{degree} fit")
            }
            Self::NonFiniteSample(i) => write!(f, "sample {i} is not finite"),
            Self::InvalidDomain { start, end } => {
                write!(f, "invalid domain [{start}, {end}]")
            }
            Self::RankDeficient { rank, expected } => {
                write!(f, "design matrix has rank {rank}, expected {expected}")
            }
            Self::Solve(msg) => write!(f, "least-squares solve failed: {msg}"),
        }
    }
}

impl Error for ChebError {}
