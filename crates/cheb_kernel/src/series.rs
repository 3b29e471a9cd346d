//! A Chebyshev series bound to the domain it was fitted on.

use crate::basis::{basis_sum, horner, to_power_basis};
use crate::chebyshev::{clenshaw, derivative_coefficients};
use crate::domain::Domain;
use crate::error::ChebError;
use crate::fit::fit_coefficients;

/// Chebyshev series `sum(c_k * T_k(u))` where `u` is `x` mapped from
/// [`Domain`] into `[-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevSeries {
    coefficients: Vec<f64>,
    domain: Domain,
}

impl ChebyshevSeries {
    /// Wrap existing coefficients.
    pub fn new(coefficients: Vec<f64>, domain: Domain) -> Self {
        Self {
            coefficients,
            domain,
        }
    }

    /// Least-squares fit over the domain spanned by `xs`.
    pub fn fit(xs: &[f64], ys: &[f64], degree: usize) -> Result<Self, ChebError> {
        let domain = Domain::from_samples(xs)?;
        Self::fit_in(domain, xs, ys, degree)
    }

    /// Least-squares fit with a caller-chosen domain.
    pub fn fit_in(
        domain: Domain,
        xs: &[f64],
        ys: &[f64],
        degree: usize,
    ) -> Result<Self, ChebError> {
        let unit: Vec<f64> = xs.iter().map(|&x| domain.to_unit(x)).collect();
        let coefficients = fit_coefficients(&unit, ys, degree)?;
        Ok(Self {
            coefficients,
            domain,
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Degree of the series (0 for constant or empty series).
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate with the Clenshaw recurrence.
    pub fn eval(&self, x: f64) -> f64 {
        clenshaw(&self.coefficients, self.domain.to_unit(x))
    }

    /// Evaluate by summing explicit basis values.
    pub fn eval_basis_sum(&self, x: f64) -> f64 {
        basis_sum(&self.coefficients, self.domain.to_unit(x))
    }

    /// Evaluate the expanded power form with Horner's scheme.
    pub fn eval_power(&self, x: f64) -> f64 {
        horner(&self.power_coefficients(), self.domain.to_unit(x))
    }

    /// Monomial coefficients in the unit variable `u`, lowest power first.
    pub fn power_coefficients(&self) -> Vec<f64> {
        to_power_basis(&self.coefficients)
    }

    /// The series of `d/dx` over the same domain.
    pub fn derivative(&self) -> Self {
        // du/dx = 1 / radius
        let scale = self.domain.radius().recip();
        let coefficients = derivative_coefficients(&self.coefficients)
            .into_iter()
            .map(|c| c * scale)
            .collect();
        Self {
            coefficients,
            domain: self.domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluation_maps_through_domain() {
        // T_1 on [0, 10] is the line (x - 5) / 5.
        let s = ChebyshevSeries::new(vec![0.0, 1.0], Domain::new(0.0, 10.0).unwrap());
        assert_eq!(s.eval(0.0), -1.0);
        assert_eq!(s.eval(5.0), 0.0);
        assert_eq!(s.eval(10.0), 1.0);
        assert_eq!(s.degree(), 1);
    }

    #[test]
    fn fit_takes_domain_from_samples() {
        let xs = [2.0, 4.0, 6.0, 8.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let s = ChebyshevSeries::fit(&xs, &ys, 1).unwrap();
        assert_eq!(s.domain(), Domain::new(2.0, 8.0).unwrap());
        assert!((s.eval(5.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn fit_rejects_single_abscissa() {
        assert!(matches!(
            ChebyshevSeries::fit(&[3.0, 3.0], &[1.0, 1.0], 0),
            Err(ChebError::InvalidDomain { .. })
        ));
    }

    #[test]
    fn three_methods_agree() {
        let s = ChebyshevSeries::new(
            vec![1.5, -0.25, 0.125, 0.0625],
            Domain::new(0.0, 11.0).unwrap(),
        );
        for m in 0..12 {
            let x = m as f64;
            let c = s.eval(x);
            assert!((s.eval_basis_sum(x) - c).abs() < 1e-13);
            assert!((s.eval_power(x) - c).abs() < 1e-13);
        }
    }

    #[test]
    fn derivative_is_scaled_to_domain() {
        // x^2 on [0, 2]: u = x - 1, x^2 = u^2 + 2u + 1 = 1.5 T_0 + 2 T_1 + 0.5 T_2
        let s = ChebyshevSeries::new(vec![1.5, 2.0, 0.5], Domain::new(0.0, 2.0).unwrap());
        assert!((s.eval(1.5) - 2.25).abs() < 1e-12);
        let d = s.derivative();
        assert_eq!(d.degree(), 1);
        assert!((d.eval(1.5) - 3.0).abs() < 1e-12);
        assert!(d.eval(0.0).abs() < 1e-12);
    }
}
