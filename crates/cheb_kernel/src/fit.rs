//! Least-squares Chebyshev fitting.

use nalgebra::{DMatrix, DVector};

use crate::basis::chebyshev_t;
use crate::error::ChebError;

/// Fit Chebyshev coefficients to samples already mapped into `[-1, 1]`.
///
/// Minimises `||V c - y||_2` where `V[i][j] = T_j(x_i)`, returning
/// `degree + 1` coefficients. Columns of `V` are scaled to unit norm before
/// the SVD solve.
pub fn fit_coefficients(xs: &[f64], ys: &[f64], degree: usize) -> Result<Vec<f64>, ChebError> {
    if xs.len() != ys.len() {
        return Err(ChebError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    let rows = xs.len();
    let cols = degree
        .checked_add(1)
        .filter(|&c| c <= rows)
        .ok_or(ChebError::TooFewSamples {
            samples: rows,
            degree,
        })?;
    if let Some(i) = xs
        .iter()
        .zip(ys)
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(ChebError::NonFiniteSample(i));
    }

    let design = DMatrix::from_fn(rows, cols, |i, j| chebyshev_t(j, xs[i]));
    let scales: Vec<f64> = (0..cols)
        .map(|j| match design.column(j).norm() {
            s if s > 0.0 => s,
            _ => 1.0,
        })
        .collect();
    let scaled = DMatrix::from_fn(rows, cols, |i, j| design[(i, j)] / scales[j]);
    let rhs = DVector::from_column_slice(ys);

    let svd = scaled.svd(true, true);
    // Singular values below this relative cutoff count as zero.
    let eps = rows as f64 * f64::EPSILON * svd.singular_values.max();
    let rank = svd.rank(eps);
    if rank < cols {
        return Err(ChebError::RankDeficient {
            rank,
            expected: cols,
        });
    }
    let solution = svd.solve(&rhs, eps).map_err(ChebError::Solve)?;

    Ok(solution
        .iter()
        .zip(&scales)
        .map(|(c, s)| c / s)
        .collect())
}
