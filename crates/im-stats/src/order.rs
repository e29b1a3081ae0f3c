//! Ordering helpers shared by the median family and mode.

use std::cmp::Ordering;

/// Return an ascending copy of `data`.
///
/// The sort is stable and uses `f64::total_cmp`, so it never panics. The
/// caller's slice is left untouched.
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut values = data.to_vec();
    values.sort_by(f64::total_cmp);
    values
}

/// An `f64` with a total order, for use as a map key or with [`crate::mode`].
///
/// Ordering and equality follow `f64::total_cmp` after folding `-0.0` into
/// `0.0`, so signed zeros count as one value. NaNs compare equal only to
/// bit-identical NaNs.
#[derive(Debug, Clone, Copy)]
pub struct Total(pub f64);

impl Total {
    /// Wrap a value, folding `-0.0` into `0.0`.
    pub fn new(value: f64) -> Self {
        Self(unsigned_zero(value))
    }

    /// Wrap every value of a sample.
    pub fn wrap(data: &[f64]) -> Vec<Total> {
        data.iter().copied().map(Total::new).collect()
    }
}

fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl PartialEq for Total {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Total {}

impl PartialOrd for Total {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Total {
    fn cmp(&self, other: &Self) -> Ordering {
        unsigned_zero(self.0).total_cmp(&unsigned_zero(other.0))
    }
}

impl From<Total> for f64 {
    fn from(value: Total) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_leaves_input_alone() {
        let data = vec![3.0, 1.0, 2.0];
        let out = sorted(&data);

        assert_eq!(out, vec![1.0, 2.0, 3.0]);
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sorted_empty() {
        assert!(sorted(&[]).is_empty());
    }

    #[test]
    fn test_sorted_with_nan_does_not_panic() {
        let out = sorted(&[2.0, f64::NAN, 1.0]);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], 1.0);
    }

    #[test]
    fn test_total_order() {
        assert!(Total(-1.0) < Total(-0.0));
        assert!(Total(1.0) < Total(2.5));
        assert_eq!(Total(4.0), Total(4.0));
        assert_eq!(f64::from(Total(7.5)), 7.5);
    }

    #[test]
    fn test_signed_zeros_are_one_value() {
        assert_eq!(Total(-0.0), Total(0.0));
        assert!(Total(-0.0) < Total(f64::MIN_POSITIVE));
        assert!(Total::new(-0.0).0.is_sign_positive());

        let wrapped = Total::wrap(&[-0.0, 3.0]);
        assert!(wrapped[0].0.is_sign_positive());
    }
}
