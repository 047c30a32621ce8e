//! Utilities for working with probabilities.

pub trait SliceExt {
    fn sum(&self) -> f64;
    fn normalise(&mut self, target: f64) -> f64;
    fn scale(&mut self, factor: f64);
    fn top_two(&self) -> (f64, f64);
}
impl SliceExt for [f64] {
    fn sum(&self) -> f64 {
        self.iter().sum()
    }

    /// Scales the slice so that it sums to `target`, returning the original sum. A slice
    /// that sums to zero (or less) is zeroed rather than divided through.
    fn normalise(&mut self, target: f64) -> f64 {
        let sum = self.sum();
        if sum > 0.0 {
            self.scale(target / sum);
        } else {
            self.scale(0.0);
        }
        sum
    }

    fn scale(&mut self, factor: f64) {
        for element in self {
            *element *= factor;
        }
    }

    /// The largest and second-largest elements. Missing elements are reported as zero.
    fn top_two(&self) -> (f64, f64) {
        let (mut first, mut second) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for &element in self {
            if element > first {
                second = first;
                first = element;
            } else if element > second {
                second = element;
            }
        }
        (
            if first.is_finite() { first } else { 0.0 },
            if second.is_finite() { second } else { 0.0 },
        )
    }
}

/// Rounds `value` to the given number of decimal places.
#[inline]
pub fn round(value: f64, decimals: u8) -> f64 {
    let multiplier = 10f64.powi(decimals as i32);
    (value * multiplier).round() / multiplier
}
