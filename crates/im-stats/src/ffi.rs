//! UniFFI exports
//!
//! Foreign callers pass owned vectors; each function forwards to the slice
//! API and keeps the `Option` result, which maps to a nullable value.

use crate::central::{mean, median, median_high, median_low, mode};
use crate::dispersion::{
    population_standard_deviation, population_variance, standard_deviation, variance,
};
use crate::measure::Measure;
use crate::order::Total;

#[uniffi::export]
pub fn stats_mean(values: Vec<f64>) -> Option<f64> {
    mean(&values)
}

#[uniffi::export]
pub fn stats_median(values: Vec<f64>) -> Option<f64> {
    median(&values)
}

#[uniffi::export]
pub fn stats_median_low(values: Vec<f64>) -> Option<f64> {
    median_low(&values)
}

#[uniffi::export]
pub fn stats_median_high(values: Vec<f64>) -> Option<f64> {
    median_high(&values)
}

#[uniffi::export]
pub fn stats_mode(values: Vec<f64>) -> Option<f64> {
    mode(&Total::wrap(&values)).map(f64::from)
}

/// Mode over strings, compared by byte order.
#[uniffi::export]
pub fn stats_mode_text(values: Vec<String>) -> Option<String> {
    mode(&values)
}

#[uniffi::export]
pub fn stats_variance(values: Vec<f64>) -> Option<f64> {
    variance(&values)
}

#[uniffi::export]
pub fn stats_population_variance(values: Vec<f64>) -> Option<f64> {
    population_variance(&values)
}

#[uniffi::export]
pub fn stats_standard_deviation(values: Vec<f64>) -> Option<f64> {
    standard_deviation(&values)
}

#[uniffi::export]
pub fn stats_population_standard_deviation(values: Vec<f64>) -> Option<f64> {
    population_standard_deviation(&values)
}

/// Compute a measure chosen at runtime.
#[uniffi::export]
pub fn stats_compute(measure: Measure, values: Vec<f64>) -> Option<f64> {
    measure.compute(&values)
}
