// Descriptive sums and Student's t tail probabilities used by the estimator
//
// The t distribution comes from statrs; everything else is a single pass over
// the slices.

use crate::regression::error::{RegressionError, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Arithmetic mean; NaN for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from `center`
pub fn sum_of_squares(values: &[f64], center: f64) -> f64 {
    values.iter().map(|v| (v - center).powi(2)).sum()
}

/// Sum of cross deviations `Σ (xi - x_center)(yi - y_center)`
pub fn sum_of_cross_products(x: &[f64], x_center: f64, y: &[f64], y_center: f64) -> f64 {
    x.iter()
        .zip(y)
        .map(|(xi, yi)| (xi - x_center) * (yi - y_center))
        .sum()
}

/// Residual sum of squares `Σ (yi - ŷi)²`
pub fn residual_sum_of_squares(observed: &[f64], predicted: &[f64]) -> f64 {
    observed
        .iter()
        .zip(predicted)
        .map(|(y, y_hat)| (y - y_hat).powi(2))
        .sum()
}

/// Round to `precision` decimals, half away from zero
///
/// Non-finite values pass through unchanged, as do values too large to
/// scale by `10^precision`.
pub fn round_to(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Two-sided p-value `2 * (1 - CDF_t(|t|))` for `df` degrees of freedom
///
/// An infinite statistic yields 0 and a NaN statistic yields NaN, so the
/// distribution is only evaluated at finite points.
///
/// # Example
/// ```
/// use simple_linreg::regression::two_sided_p_value;
///
/// // Cauchy (df = 1): P(|T| > 1) = 0.5
/// let p = two_sided_p_value(1.0, 1.0).unwrap();
/// assert!((p - 0.5).abs() < 1e-9);
/// ```
pub fn two_sided_p_value(t_statistic: f64, df: f64) -> Result<f64> {
    let dist =
        StudentsT::new(0.0, 1.0, df).map_err(|e| RegressionError::Distribution(e.to_string()))?;

    if t_statistic.is_nan() {
        return Ok(f64::NAN);
    }
    if t_statistic.is_infinite() {
        return Ok(0.0);
    }

    Ok(2.0 * dist.sf(t_statistic.abs()))
}
