//! Affine mapping between a sample interval and the Chebyshev interval `[-1, 1]`.

use crate::error::ChebError;

/// A closed interval `[start, end]` mapped onto `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    start: f64,
    end: f64,
}

impl Domain {
    /// The identity domain `[-1, 1]`.
    pub const UNIT: Self = Self {
        start: -1.0,
        end: 1.0,
    };

    /// Create a domain. Both ends must be finite and `start < end`.
    pub fn new(start: f64, end: f64) -> Result<Self, ChebError> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(ChebError::InvalidDomain { start, end });
        }
        Ok(Self { start, end })
    }

    /// Smallest domain covering all sample abscissae.
    pub fn from_samples(xs: &[f64]) -> Result<Self, ChebError> {
        let (start, end) = xs
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        Self::new(start, end)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Half-length of the interval.
    pub fn radius(&self) -> f64 {
        0.5 * (self.end - self.start)
    }

    /// Map `x` from this domain into the unit variable.
    pub fn to_unit(&self, x: f64) -> f64 {
        (2.0 * x - (self.start + self.end)) / (self.end - self.start)
    }

    /// Map a unit-variable value back into this domain.
    pub fn from_unit(&self, u: f64) -> f64 {
        0.5 * (self.start + self.end) + u * self.radius()
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semitone_domain_maps_to_unit_interval() {
        let d = Domain::new(0.0, 11.0).unwrap();
        assert_eq!(d.to_unit(0.0), -1.0);
        assert_eq!(d.to_unit(11.0), 1.0);
        for m in 0..12 {
            let expected = 2.0 * m as f64 / 11.0 - 1.0;
            assert!((d.to_unit(m as f64) - expected).abs() < 1e-15);
        }
    }

    #[test]
    fn unit_mapping_inverts() {
        let d = Domain::new(-3.5, 40.0).unwrap();
        for &x in &[-3.5, 0.0, 12.25, 40.0] {
            assert!((d.from_unit(d.to_unit(x)) - x).abs() < 1e-12);
        }
    }

    #[test]
    fn rejects_degenerate_intervals() {
        assert!(matches!(
            Domain::new(1.0, 1.0),
            Err(ChebError::InvalidDomain { .. })
        ));
        assert!(Domain::new(2.0, 1.0).is_err());
        assert!(Domain::new(f64::NAN, 1.0).is_err());
        assert!(Domain::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn from_samples_spans_extremes() {
        let d = Domain::from_samples(&[3.0, -1.0, 7.0, 2.0]).unwrap();
        assert_eq!((d.start(), d.end()), (-1.0, 7.0));
        assert!(Domain::from_samples(&[]).is_err());
        assert!(Domain::from_samples(&[4.0, 4.0]).is_err());
    }
}
