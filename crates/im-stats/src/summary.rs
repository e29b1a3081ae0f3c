//! Summary statistics for a sample
//!
//! Computes every measure at once:
//! - Count, min, max
//! - Mean, median family, mode
//! - Sample and population variance / standard deviation

use serde::{Deserialize, Serialize};

use crate::measure::Measure;

/// Summary statistics for a numeric sample
///
/// Statistics that are undefined for the sample are `None` and serialize as
/// `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values
    pub count: usize,
    /// Minimum value
    pub min: Option<f64>,
    /// Maximum value
    pub max: Option<f64>,
    /// Arithmetic mean
    pub mean: Option<f64>,
    /// Median (mean of the middle two for even counts)
    pub median: Option<f64>,
    /// Low median
    pub median_low: Option<f64>,
    /// High median
    pub median_high: Option<f64>,
    /// Most frequent value, smallest on ties
    pub mode: Option<f64>,
    /// Sample variance
    pub variance: Option<f64>,
    /// Population variance
    pub population_variance: Option<f64>,
    /// Sample standard deviation
    pub standard_deviation: Option<f64>,
    /// Population standard deviation
    pub population_standard_deviation: Option<f64>,
}

impl Summary {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> Self {
        let min = data.iter().copied().reduce(f64::min);
        let max = data.iter().copied().reduce(f64::max);

        Self {
            count: data.len(),
            min,
            max,
            mean: Measure::Mean.compute(data),
            median: Measure::Median.compute(data),
            median_low: Measure::MedianLow.compute(data),
            median_high: Measure::MedianHigh.compute(data),
            mode: Measure::Mode.compute(data),
            variance: Measure::Variance.compute(data),
            population_variance: Measure::PopulationVariance.compute(data),
            standard_deviation: Measure::StandardDeviation.compute(data),
            population_standard_deviation: Measure::PopulationStandardDeviation.compute(data),
        }
    }

    /// Look up a single measure
    pub fn get(&self, measure: Measure) -> Option<f64> {
        match measure {
            Measure::Mean => self.mean,
            Measure::Median => self.median,
            Measure::MedianLow => self.median_low,
            Measure::MedianHigh => self.median_high,
            Measure::Mode => self.mode,
            Measure::Variance => self.variance,
            Measure::PopulationVariance => self.population_variance,
            Measure::StandardDeviation => self.standard_deviation,
            Measure::PopulationStandardDeviation => self.population_standard_deviation,
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> Option<f64> {
        Some(self.max? - self.min?)
    }

    /// Check if the sample was empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_basic() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let stats = Summary::from_data(&data);

        assert_eq!(stats.count, 10);
        assert_eq!(stats.min, Some(1.0));
        assert_eq!(stats.max, Some(10.0));
        assert_eq!(stats.range(), Some(9.0));
        assert!((stats.mean.unwrap() - 5.5).abs() < 1e-10);
        assert_eq!(stats.median, Some(5.5));
        assert_eq!(stats.median_low, Some(5.0));
        assert_eq!(stats.median_high, Some(6.0));
        assert_eq!(stats.mode, Some(1.0));
    }

    #[test]
    fn test_summary_empty() {
        let stats = Summary::from_data(&[]);

        assert!(stats.is_empty());
        assert_eq!(stats.range(), None);
        for measure in Measure::ALL {
            assert_eq!(stats.get(measure), None);
        }
    }

    #[test]
    fn test_summary_single_value() {
        let stats = Summary::from_data(&[4.0]);

        assert_eq!(stats.mean, Some(4.0));
        assert_eq!(stats.variance, None);
        assert_eq!(stats.standard_deviation, None);
        assert_eq!(stats.population_variance, Some(0.0));
        assert_eq!(stats.population_standard_deviation, Some(0.0));
    }

    #[test]
    fn test_summary_mode_signed_zeros() {
        let stats = Summary::from_data(&[0.0, -0.0, 5.0, 5.0]);
        assert_eq!(stats.mode, Some(0.0));
    }

    #[test]
    fn test_get_matches_compute() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = Summary::from_data(&data);
        for measure in Measure::ALL {
            assert_eq!(stats.get(measure), measure.compute(&data));
        }
    }

    #[test]
    fn test_serialize_absent_as_null() {
        let stats = Summary::from_data(&[1.0]);
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["count"], 1);
        assert!(json["variance"].is_null());
        assert_eq!(json["population_variance"], 0.0);
    }
}
