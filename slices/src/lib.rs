//! Slice helpers.
//!
//! # Example
//!
//! ```rust
//! use kitbag_slices::{filter_by, merge_unique};
//!
//! let merged = merge_unique(&[1, 2, 3], &[&[3, 4], &[1, 5]]);
//! assert_eq!(merged, vec![1, 2, 3, 4, 5]);
//!
//! let mut v = vec![1, 8, 3, 9];
//! assert_eq!(filter_by(&mut v, &5, |x, limit| x < limit), 2);
//! assert_eq!(v, vec![1, 3]);
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// Concatenates `first` and every slice in `rest`, keeping only the first
/// occurrence of each value.
pub fn merge_unique<T: Eq + Hash + Clone>(first: &[T], rest: &[&[T]]) -> Vec<T> {
    merge_unique_by(first, T::clone, rest)
}

/// Like [`merge_unique`], but two elements count as duplicates when `key`
/// maps them to the same value.
pub fn merge_unique_by<T, K, F>(first: &[T], mut key: F, rest: &[&[T]]) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    let mut res = Vec::with_capacity(first.len());
    for e in first.iter().chain(rest.iter().flat_map(|s| s.iter())) {
        if seen.insert(key(e)) {
            res.push(e.clone());
        }
    }
    res
}

/// Keeps the elements of `v` for which `cmp(element, target)` holds, in
/// order, and returns how many were kept.
pub fn filter_by<T, U, F>(v: &mut Vec<T>, target: &U, mut cmp: F) -> usize
where
    U: ?Sized,
    F: FnMut(&T, &U) -> bool,
{
    v.retain(|e| cmp(e, target));
    v.len()
}
