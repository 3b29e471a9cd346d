//! Chebyshev series evaluation via the Clenshaw recurrence.

/// Evaluate a Chebyshev series using the Clenshaw recurrence.
///
/// Given coefficients `[a_0, a_1, ..., a_N]` and a point `x` (normally in
/// `[-1, 1]`, though any real `x` is accepted), computes `sum(a_k * T_k(x))`
/// in O(N) time with two running accumulators.
///
/// Series with fewer than three terms are answered directly; the recurrence
/// closes with `b_0 - x * b_1` and needs at least two steps of history.
/// Non-finite inputs propagate through the arithmetic.
pub fn clenshaw(coeffs: &[f64], x: f64) -> f64 {
    match *coeffs {
        [] => 0.0,
        [a0] => a0,
        [a0, a1] => a0 + a1 * x,
        [.., a_n] => {
            let n = coeffs.len() - 1;
            let two_x = 2.0 * x;

            let mut b_k2 = 0.0; // b_{k+2}, seeded with b_{N+1}
            let mut b_k1 = a_n; // b_{k+1}, seeded with b_N

            for &a_k in coeffs[..n].iter().rev() {
                let b_k = a_k + two_x * b_k1 - b_k2;
                b_k2 = b_k1;
                b_k1 = b_k;
            }

            // b_k1 now holds b_0, b_k2 holds b_1.
            b_k1 - x * b_k2
        }
    }
}

/// Coefficients of the derivative series `d/dx sum(a_k * T_k(x))`.
///
/// The result has one fewer term than the input (empty for constant or empty
/// series) and is expressed in the same Chebyshev basis, with respect to the
/// unit variable `x`.
pub fn derivative_coefficients(coeffs: &[f64]) -> Vec<f64> {
    let n = coeffs.len();
    if n <= 1 {
        return Vec::new();
    }

    let degree = n - 1;
    let mut work = coeffs.to_vec();
    let mut der = vec![0.0; degree];

    // Backward recurrence: d_{j-1} = 2j * c_j, folding c_j into c_{j-2}.
    for j in (3..=degree).rev() {
        der[j - 1] = 2.0 * j as f64 * work[j];
        work[j - 2] += j as f64 * work[j] / (j - 2) as f64;
    }
    if degree > 1 {
        der[1] = 4.0 * work[2];
    }
    der[0] = work[1];

    der
}
