//! Explicit Chebyshev basis values and power-form conversion.
//!
//! These are the slow, obvious counterparts of [`clenshaw`](crate::clenshaw):
//! [`basis_sum`] materialises every `T_k(x)`, and [`to_power_basis`] expands
//! the series into ordinary monomials so it can be evaluated with [`horner`].

/// Compute `T_n(x)` by forward iteration of
/// `T_0 = 1, T_1 = x, T_n = 2x * T_{n-1} - T_{n-2}`.
pub fn chebyshev_t(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let two_x = 2.0 * x;
            let mut t_prev2 = 1.0;
            let mut t_prev1 = x;
            for _ in 2..=n {
                let t_k = two_x * t_prev1 - t_prev2;
                t_prev2 = t_prev1;
                t_prev1 = t_k;
            }
            t_prev1
        }
    }
}

/// By-index cache of `T_n(x)` for one fixed `x`.
///
/// Values are filled bottom-up on demand, so asking for `T_n` costs at most
/// `n` recurrence steps over the lifetime of the cache.
#[derive(Debug, Clone)]
pub struct BasisCache {
    x: f64,
    values: Vec<f64>,
}

impl BasisCache {
    /// Create an empty cache for the point `x`.
    pub fn new(x: f64) -> Self {
        Self {
            x,
            values: Vec::new(),
        }
    }

    /// The point this cache evaluates at.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Number of basis values computed so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no basis value has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return `T_n(x)`, extending the cache up to index `n` if needed.
    pub fn get(&mut self, n: usize) -> f64 {
        while self.values.len() <= n {
            let k = self.values.len();
            let t_k = match k {
                0 => 1.0,
                1 => self.x,
                _ => 2.0 * self.x * self.values[k - 1] - self.values[k - 2],
            };
            self.values.push(t_k);
        }
        self.values[n]
    }
}

/// Evaluate `sum(a_i * T_i(x))` by materialising each basis value.
///
/// Used as a cross-check for [`clenshaw`](crate::clenshaw).
pub fn basis_sum(coeffs: &[f64], x: f64) -> f64 {
    let mut cache = BasisCache::new(x);
    coeffs
        .iter()
        .enumerate()
        .map(|(i, &a_i)| a_i * cache.get(i))
        .sum()
}

/// Convert Chebyshev coefficients into monomial coefficients.
///
/// Returns `p` such that `sum(a_k * T_k(x)) == sum(p_j * x^j)`, lowest
/// power first. The output has the same length as the input.
pub fn to_power_basis(coeffs: &[f64]) -> Vec<f64> {
    let n = coeffs.len();
    let mut power = vec![0.0; n];
    if n == 0 {
        return power;
    }

    // Monomial coefficients of T_{k-2} and T_{k-1}.
    let mut t_prev2 = vec![0.0; n];
    let mut t_prev1 = vec![0.0; n];
    t_prev2[0] = 1.0;
    power[0] += coeffs[0];
    if n > 1 {
        t_prev1[1] = 1.0;
        power[1] += coeffs[1];
    }

    for &a_k in &coeffs[2.min(n)..] {
        // T_k = 2x * T_{k-1} - T_{k-2}
        let mut t_k = vec![0.0; n];
        for j in 0..n {
            let shifted = if j > 0 { 2.0 * t_prev1[j - 1] } else { 0.0 };
            t_k[j] = shifted - t_prev2[j];
        }
        for (p, t) in power.iter_mut().zip(&t_k) {
            *p += a_k * t;
        }
        t_prev2 = std::mem::replace(&mut t_prev1, t_k);
    }

    power
}

/// Evaluate `sum(p_j * x^j)` with Horner's scheme. Empty input gives 0.
pub fn horner(power_coeffs: &[f64], x: f64) -> f64 {
    power_coeffs.iter().rev().fold(0.0, |acc, &p| acc * x + p)
}
