//! im-stats - Descriptive statistics over immutable samples
//!
//! This crate provides the classic measures of a single sample:
//!
//! - **Central tendency**: mean, median, low/high median, mode
//! - **Dispersion**: sample and population variance, standard deviation
//!
//! # Undefined Results
//!
//! Every statistic returns an `Option`. `None` means the statistic is not
//! defined for the given sample (an empty sample, or fewer than two values
//! for the sample variance). No sentinel value such as `0.0` or `NaN` is ever
//! used in its place, so a genuine zero stays distinguishable from "no
//! answer".
//!
//! ```
//! use im_stats::{mean, median_high, mode, variance};
//!
//! assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
//! assert_eq!(median_high(&[1.0, 3.0, 5.0, 7.0]), Some(5.0));
//! assert_eq!(mode(&["red", "blue", "green", "red"]), Some("red"));
//! assert_eq!(variance(&[2.0]), None);
//! ```

pub mod central;
pub mod config;
pub mod dispersion;
pub mod error;
pub mod frequency;
pub mod measure;
pub mod order;
pub mod report;
pub mod summary;

#[cfg(feature = "uniffi")]
pub mod ffi;

pub use central::*;
pub use config::*;
pub use dispersion::*;
pub use error::*;
pub use frequency::*;
pub use measure::*;
pub use order::*;
pub use report::*;
pub use summary::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
