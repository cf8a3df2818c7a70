//! Set utility functions.
//!
//! Two set kinds are supported: `HashSet` (unordered) and `BTreeSet`
//! (ordered, iterating in the element type's total order). The caller picks
//! the kind by calling the matching function.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;

/// Deduplicate a sequence into an unordered set
pub fn to_set<T>(items: &[T]) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    items.iter().cloned().collect()
}

/// Deduplicate a sequence into an ordered set
pub fn to_ordered_set<T>(items: &[T]) -> BTreeSet<T>
where
    T: Ord + Clone,
{
    items.iter().cloned().collect()
}

/// Elements present in both unordered sets.
///
/// Scans the smaller set and probes the larger, so the expected number of
/// lookups is `O(min(|a|, |b|))`.
pub fn intersection<T>(a: &HashSet<T>, b: &HashSet<T>) -> HashSet<T>
where
    T: Eq + Hash + Clone,
{
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    smaller
        .iter()
        .filter(|item| larger.contains(*item))
        .cloned()
        .collect()
}

/// Elements present in both ordered sets.
///
/// Merge-style walk over the two sorted iterators, linear in `|a| + |b|`.
pub fn intersection_ordered<T>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> BTreeSet<T>
where
    T: Ord + Clone,
{
    let mut result = BTreeSet::new();
    let mut iter_a = a.iter();
    let mut iter_b = b.iter();

    let mut next_a = iter_a.next();
    let mut next_b = iter_b.next();
    while let (Some(x), Some(y)) = (next_a, next_b) {
        match x.cmp(y) {
            Ordering::Less => next_a = iter_a.next(),
            Ordering::Greater => next_b = iter_b.next(),
            Ordering::Equal => {
                result.insert(x.clone());
                next_a = iter_a.next();
                next_b = iter_b.next();
            }
        }
    }
    result
}
