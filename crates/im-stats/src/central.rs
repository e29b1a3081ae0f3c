//! Measures of central tendency
//!
//! Provides:
//! - Arithmetic mean
//! - Median, low median, high median
//! - Mode (and all tied modes)
//!
//! Each function returns `None` for an empty sample.

use crate::frequency::ranked;
use crate::order::sorted;

/// Arithmetic mean: sum divided by count.
///
/// ```
/// assert_eq!(im_stats::mean(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
/// assert_eq!(im_stats::mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let sum: f64 = data.iter().sum();
    Some(sum / data.len() as f64)
}

/// Median, taking the mean of the two middle values when the count is even.
///
/// ```
/// assert_eq!(im_stats::median(&[1.0, 3.0, 5.0]), Some(3.0));
/// assert_eq!(im_stats::median(&[1.0, 3.0, 5.0, 7.0]), Some(4.0));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let values = sorted(data);
    let n = values.len();
    if n % 2 == 0 {
        Some((values[n / 2 - 1] + values[n / 2]) / 2.0)
    } else {
        Some(values[n / 2])
    }
}

/// Low median: the smaller middle value for an even count.
///
/// Always a member of the sample.
pub fn median_low(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let values = sorted(data);
    let n = values.len();
    if n % 2 == 0 {
        Some(values[n / 2 - 1])
    } else {
        Some(values[n / 2])
    }
}

/// High median: the larger middle value for an even count.
///
/// Always a member of the sample.
pub fn median_high(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let values = sorted(data);
    Some(values[values.len() / 2])
}

/// Most frequent value.
///
/// When several values share the highest count, the smallest of them wins.
/// Floating-point samples can be passed through [`crate::Total`].
///
/// ```
/// assert_eq!(im_stats::mode(&[1, 1, 2, 3, 3, 3, 3, 4]), Some(3));
/// assert_eq!(im_stats::mode(&["b", "a", "b", "a"]), Some("a"));
/// ```
pub fn mode<T: Ord + Clone>(data: &[T]) -> Option<T> {
    ranked(data).into_iter().next().map(|(value, _)| value)
}

/// Every value tied for the highest count, ascending.
///
/// Empty for an empty sample. The first element, if any, equals [`mode`].
pub fn modes<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let pairs = ranked(data);
    let Some(&(_, top)) = pairs.first() else {
        return Vec::new();
    };
    pairs
        .into_iter()
        .take_while(|(_, count)| *count == top)
        .map(|(value, _)| value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Total;

    #[test]
    fn test_mean_basic() {
        let data: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        assert!((mean(&data).unwrap() - 5.5).abs() < 1e-10);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_zero_is_present() {
        assert_eq!(mean(&[-1.0, 1.0]), Some(0.0));
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[5.0, 1.0, 3.0]), Some(3.0));
        assert_eq!(median(&[7.0, 1.0, 5.0, 3.0]), Some(4.0));
        assert_eq!(median(&[42.0]), Some(42.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_low_high() {
        assert_eq!(median_low(&[1.0, 3.0, 5.0, 7.0]), Some(3.0));
        assert_eq!(median_high(&[1.0, 3.0, 5.0, 7.0]), Some(5.0));
        assert_eq!(median_low(&[1.0, 3.0, 5.0]), Some(3.0));
        assert_eq!(median_high(&[1.0, 3.0, 5.0]), Some(3.0));
        assert_eq!(median_low(&[]), None);
        assert_eq!(median_high(&[]), None);
    }

    #[test]
    fn test_median_does_not_mutate() {
        let data = vec![9.0, 2.0, 4.0, 1.0];
        let _ = median(&data);
        let _ = median_low(&data);
        let _ = median_high(&data);
        assert_eq!(data, vec![9.0, 2.0, 4.0, 1.0]);
    }

    #[test]
    fn test_mode_basic() {
        assert_eq!(mode(&[1, 1, 2, 3, 3, 3, 3, 4]), Some(3));
        assert_eq!(mode(&["red", "blue", "green", "red"]), Some("red"));
        assert_eq!(mode::<i32>(&[]), None);
    }

    #[test]
    fn test_mode_tie_picks_smallest() {
        assert_eq!(mode(&[4, 4, 2, 2, 9]), Some(2));
        assert_eq!(mode(&["pear", "apple", "pear", "apple"]), Some("apple"));
    }

    #[test]
    fn test_mode_all_distinct() {
        assert_eq!(mode(&[8, 3, 5]), Some(3));
    }

    #[test]
    fn test_mode_floats() {
        let data = Total::wrap(&[2.5, 1.5, 2.5, 0.5]);
        assert_eq!(mode(&data).map(f64::from), Some(2.5));
    }

    #[test]
    fn test_mode_counts_signed_zeros_together() {
        let data = Total::wrap(&[0.0, -0.0, 5.0, 5.0]);
        assert_eq!(mode(&data).map(f64::from), Some(0.0));

        let data = Total::wrap(&[-0.0, 5.0, 0.0, 5.0]);
        let zero = mode(&data).map(f64::from).unwrap();
        assert!(zero == 0.0 && zero.is_sign_positive());
    }

    #[test]
    fn test_modes() {
        assert_eq!(modes(&[3, 1, 3, 1, 2]), vec![1, 3]);
        assert_eq!(modes(&[7, 7, 1]), vec![7]);
        assert!(modes::<u8>(&[]).is_empty());
    }
}
