//! Named statistics
//!
//! [`Measure`] names every statistic the crate computes so that callers can
//! select them at runtime (from configuration or the command line) and ask
//! why a result is undefined.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::central::{mean, median, median_high, median_low, mode};
use crate::dispersion::{
    population_standard_deviation, population_variance, standard_deviation, variance,
};
use crate::error::{Result, StatsError};
use crate::order::Total;

/// A single descriptive statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Measure {
    Mean,
    Median,
    MedianLow,
    MedianHigh,
    Mode,
    Variance,
    PopulationVariance,
    StandardDeviation,
    PopulationStandardDeviation,
}

impl Measure {
    /// Every measure, in declaration order.
    pub const ALL: [Measure; 9] = [
        Self::Mean,
        Self::Median,
        Self::MedianLow,
        Self::MedianHigh,
        Self::Mode,
        Self::Variance,
        Self::PopulationVariance,
        Self::StandardDeviation,
        Self::PopulationStandardDeviation,
    ];

    /// Snake-case name used in configuration, reports and on the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::MedianLow => "median_low",
            Self::MedianHigh => "median_high",
            Self::Mode => "mode",
            Self::Variance => "variance",
            Self::PopulationVariance => "population_variance",
            Self::StandardDeviation => "standard_deviation",
            Self::PopulationStandardDeviation => "population_standard_deviation",
        }
    }

    /// Smallest sample size for which the measure is defined.
    pub fn min_len(&self) -> usize {
        match self {
            Self::Variance | Self::StandardDeviation => 2,
            _ => 1,
        }
    }

    /// Compute the measure, `None` when undefined for `data`.
    pub fn compute(&self, data: &[f64]) -> Option<f64> {
        match self {
            Self::Mean => mean(data),
            Self::Median => median(data),
            Self::MedianLow => median_low(data),
            Self::MedianHigh => median_high(data),
            Self::Mode => mode(&Total::wrap(data)).map(f64::from),
            Self::Variance => variance(data),
            Self::PopulationVariance => population_variance(data),
            Self::StandardDeviation => standard_deviation(data),
            Self::PopulationStandardDeviation => population_standard_deviation(data),
        }
    }

    /// Compute the measure, reporting why it is undefined.
    pub fn evaluate(&self, data: &[f64]) -> Result<f64> {
        if data.is_empty() {
            return Err(StatsError::EmptySample);
        }
        if data.len() < self.min_len() {
            return Err(StatsError::InsufficientData {
                required: self.min_len(),
                actual: data.len(),
            });
        }
        self.compute(data).ok_or(StatsError::InsufficientData {
            required: self.min_len(),
            actual: data.len(),
        })
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Measure {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| StatsError::Config(format!("unknown measure: {s}")))
    }
}
