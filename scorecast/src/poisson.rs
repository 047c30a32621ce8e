//! The Poisson probability mass function.

use crate::factorial::Factorial;

/// Probability of exactly `k` events given the rate `lambda`. A non-positive rate places all
/// of its mass on `k = 0`; a non-finite rate has no mass anywhere.
#[inline]
pub fn univariate(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    if !lambda.is_finite() {
        return 0.0;
    }
    if lambda <= 0.0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial.get(k)
}

/// Mass function for every `k` in `0..=max_k`.
pub fn distribution(lambda: f64, max_k: u8, factorial: &impl Factorial) -> Vec<f64> {
    (0..=max_k)
        .map(|k| univariate(k, lambda, factorial))
        .collect()
}
