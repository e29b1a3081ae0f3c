//! Measures of dispersion
//!
//! Sample statistics divide the sum of squared deviations by `n - 1`
//! (Bessel's correction) and need at least two values. Population
//! statistics divide by `n` and accept a single value.

use crate::central::mean;

/// Sum of squared deviations from the mean, `None` for an empty sample.
fn sum_of_squares(data: &[f64]) -> Option<f64> {
    let center = mean(data)?;
    Some(data.iter().map(|x| (x - center).powi(2)).sum())
}

/// Sample variance (denominator `n - 1`).
///
/// ```
/// let v = im_stats::variance(&[2.75, 1.75, 1.25, 0.25, 0.5, 1.25, 3.5]).unwrap();
/// assert!((v - 1.3720238095238095).abs() < 1e-12);
/// assert_eq!(im_stats::variance(&[2.0]), None);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let ss = sum_of_squares(data)?;
    Some(ss / (data.len() - 1) as f64)
}

/// Population variance (denominator `n`).
pub fn population_variance(data: &[f64]) -> Option<f64> {
    let ss = sum_of_squares(data)?;
    Some(ss / data.len() as f64)
}

/// Sample standard deviation, the square root of [`variance`].
pub fn standard_deviation(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Population standard deviation, the square root of [`population_variance`].
pub fn population_standard_deviation(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}
