//! Intersection of sorted vertex sequences
//!
//! Both operations scan `a` in order and probe `b` with a binary search, so
//! they run in O(|a| log |b|). Callers pick the operand order. Repeated
//! entries in `a` are counted once.

use itertools::Itertools;
use std::cmp::Ordering;
use crate::graph::Vertex;

/// Closed-interval binary search over a sorted slice.
///
/// Elements are read through `get`, so an inconsistent slice ends the search
/// as "not found" instead of indexing out of range.
pub fn binary_search(key: Vertex, sorted: &[Vertex]) -> bool {
    let mut low: isize = 0;
    let mut high: isize = sorted.len() as isize - 1;

    while high >= low {
        let middle = low + (high - low) / 2;
        let value = match sorted.get(middle as usize) {
            Some(&value) => value,
            None => return false,
        };

        match value.cmp(&key) {
            Ordering::Equal => return true,
            Ordering::Less => low = middle + 1,
            Ordering::Greater => high = middle - 1,
        }
    }

    false
}

/// Number of distinct members of `a` that also occur in `b`
pub fn count_intersection(a: &[Vertex], b: &[Vertex]) -> usize {
    a.iter()
        .dedup()
        .filter(|&&x| binary_search(x, b))
        .count()
}

/// Distinct members of `a` that also occur in `b`, ascending
pub fn intersect(a: &[Vertex], b: &[Vertex]) -> Vec<Vertex> {
    a.iter()
        .dedup()
        .filter(|&&x| binary_search(x, b))
        .copied()
        .collect()
}
