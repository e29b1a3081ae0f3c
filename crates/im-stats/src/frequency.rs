//! Frequency tables
//!
//! A frequency table maps each distinct value of a sample to the number of
//! times it occurs. Tables are ordered by value, which gives [`ranked`] (and
//! therefore `mode`) a reproducible tie-break.

use std::collections::BTreeMap;

/// Count the occurrences of each distinct value in a single pass.
pub fn frequencies<T: Ord + Clone>(data: &[T]) -> BTreeMap<T, usize> {
    let mut table = BTreeMap::new();
    for value in data {
        *table.entry(value.clone()).or_insert(0) += 1;
    }
    table
}

/// Frequency pairs ordered by count descending.
///
/// Pairs with equal counts keep ascending value order: the table is already
/// ascending by key and the sort is stable.
pub fn ranked<T: Ord + Clone>(data: &[T]) -> Vec<(T, usize)> {
    let mut pairs: Vec<(T, usize)> = frequencies(data).into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs
}
