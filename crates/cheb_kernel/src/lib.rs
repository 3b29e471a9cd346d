//! Chebyshev series evaluation and least-squares fitting.
//!
//! The centre of this crate is [`clenshaw`], which evaluates
//! `sum(a_k * T_k(x))` with a backward recurrence. Around it sit:
//! - an explicit basis oracle ([`chebyshev_t`], [`BasisCache`], [`basis_sum`])
//! - power-form conversion ([`to_power_basis`], [`horner`])
//! - least-squares fitting ([`fit_coefficients`]) and [`ChebyshevSeries`],
//!   a fitted series bound to its sample [`Domain`]

pub mod basis;
pub mod chebyshev;
pub mod domain;
pub mod error;
pub mod fit;
pub mod series;

pub use basis::{BasisCache, basis_sum, chebyshev_t, horner, to_power_basis};
pub use chebyshev::{clenshaw, derivative_coefficients};
pub use domain::Domain;
pub use error::ChebError;
pub use fit::fit_coefficients;
pub use series::ChebyshevSeries;
