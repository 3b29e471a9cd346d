//! Side-by-side evaluation of the frequency table by three methods.

use crate::error::ToneError;
use crate::octave::{TOP_OCTAVE_START, octave_scale, top_octave_params};
use crate::tones::KeyTones;
use crate::tuning::MAX_KEY;

/// One key evaluated against the exact formula and by every evaluation path.
///
/// All values are in Hz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MethodComparison {
    pub key: u8,
    /// Exact equal-tempered frequency.
    pub exact: f64,
    /// Expanded power form, Horner evaluation.
    pub direct: f64,
    /// Explicit `sum(c_k * T_k)`.
    pub basis_sum: f64,
    /// Clenshaw recurrence.
    pub clenshaw: f64,
}

impl MethodComparison {
    /// Largest disagreement between the three approximations.
    ///
    /// NaN if any method produced NaN.
    pub fn spread(&self) -> f64 {
        let values = [self.direct, self.basis_sum, self.clenshaw];
        if values.iter().any(|v| v.is_nan()) {
            return f64::NAN;
        }
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        hi - lo
    }

    /// Relative error of the Clenshaw value against the exact frequency.
    pub fn relative_error(&self) -> f64 {
        (self.clenshaw - self.exact).abs() / self.exact
    }
}

impl KeyTones {
    /// Evaluate the frequency approximation for each key three ways.
    ///
    /// Rows come back in input order.
    pub fn compare_keys<I>(&self, keys: I) -> Result<Vec<MethodComparison>, ToneError>
    where
        I: IntoIterator<Item = u8>,
    {
        let series = self.frequency_series();
        keys.into_iter()
            .map(|key| {
                let (m, o) = top_octave_params(key)?;
                let x = f64::from(m);
                let scale = octave_scale(o);
                Ok::<_, ToneError>(MethodComparison {
                    key,
                    exact: self.frequency(key)?,
                    direct: series.eval_power(x) * scale,
                    basis_sum: series.eval_basis_sum(x) * scale,
                    clenshaw: series.eval(x) * scale,
                })
            })
            .collect()
    }

    /// [`compare_keys`](Self::compare_keys) over the fitted octave, keys 116..=127.
    pub fn compare_top_octave(&self) -> Result<Vec<MethodComparison>, ToneError> {
        self.compare_keys(TOP_OCTAVE_START..=MAX_KEY)
    }
}
