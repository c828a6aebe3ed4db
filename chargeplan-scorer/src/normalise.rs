//! Divide-by-maximum scaling into `0.0..=1.0`.
#![forbid(unsafe_code)]

/// Largest value in `values`, or `0.0` when empty.
///
/// NaN entries are ignored.
#[must_use]
pub fn column_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0_f64, f64::max)
}

/// Scale `value` by `max`, clamping into `0.0..=1.0`.
///
/// A non-positive `max` yields `0.0` instead of dividing by zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "normalising divides by the column maximum"
)]
pub fn scale_to_max(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 0.0;
    }
    (value / max).clamp(0.0, 1.0)
}

/// Normalise a column by its maximum.
///
/// The maximum maps to exactly `1.0`. When the maximum is zero every entry
/// becomes `0.0`.
///
/// # Examples
/// ```
/// use chargeplan_scorer::normalise_by_max;
///
/// assert_eq!(normalise_by_max(&[2.0, 4.0, 1.0]), vec![0.5, 1.0, 0.25]);
/// assert_eq!(normalise_by_max(&[0.0, 0.0]), vec![0.0, 0.0]);
/// ```
#[must_use]
pub fn normalise_by_max(values: &[f64]) -> Vec<f64> {
    let max = column_max(values);
    values.iter().map(|&value| scale_to_max(value, max)).collect()
}
