//! Testing helpers.

use assert_float_eq::*;

pub fn assert_slice_f64_near(expected: &[f64], actual: &[f64], distance: u32) {
    assert_lengths(expected, actual);
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_f64_near!(expected, actual, distance);
        }
    }
}

pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_lengths(expected, actual);
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that a set of percentages lies within `0..=100` and sums to 100 within `tolerance`,
/// unless every element is zero.
pub fn assert_percentages(values: &[f64], tolerance: f64) {
    for (index, &value) in values.iter().enumerate() {
        assert!(
            (0.0..=100.0).contains(&value),
            "percentage {value} at index {index} is out of bounds"
        );
    }
    if values.iter().all(|&value| value == 0.0) {
        return;
    }
    let sum = values.iter().sum::<f64>();
    assert!(
        (sum - 100.0).abs() <= tolerance + SUM_SLACK,
        "percentages {values:?} sum to {sum}, expected 100 ± {tolerance}"
    );
}

/// Absorbs representation error when summing values that were rounded to a decimal place.
const SUM_SLACK: f64 = 1e-9;

fn assert_lengths(expected: &[f64], actual: &[f64]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
}
