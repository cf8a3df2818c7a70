//! Sequence utility functions.
//!
//! Sequences are ordered and permit duplicates. Inputs taken by shared
//! reference are never mutated; results are newly allocated. The one
//! exception is [`for_each_mut`], which visits the caller's elements in
//! place.

use crate::truthy::Truthy;

/// Concatenate two sequences: all of `a` in order, then all of `b`
pub fn join<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(a.len() + b.len());
    result.extend_from_slice(a);
    result.extend_from_slice(b);
    result
}

/// Concatenate an ordered collection of sequences into one
pub fn join_all<T: Clone>(seqs: &[Vec<T>]) -> Vec<T> {
    let total: usize = seqs.iter().map(Vec::len).sum();

    let mut result = Vec::with_capacity(total);
    for seq in seqs {
        result.extend_from_slice(seq);
    }
    result
}

/// Map a function over a sequence, producing a new sequence of equal length
pub fn map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Apply a function to each element for side effects, in order
pub fn for_each<T, F>(items: &[T], mut f: F)
where
    F: FnMut(&T),
{
    for item in items {
        f(item);
    }
}

/// Apply a function to each element in place, in order
pub fn for_each_mut<T, F>(items: &mut [T], mut f: F)
where
    F: FnMut(&mut T),
{
    for item in items {
        f(item);
    }
}

/// Filter a sequence, keeping survivors in their original relative order
pub fn filter<T, F>(items: Vec<T>, f: F) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    items.into_iter().filter(f).collect()
}

/// Check whether `value` equals some element, by first-match linear scan
pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.iter().any(|item| item == value)
}

/// True iff at least one element is truthy; short-circuits on first match.
///
/// An empty sequence yields `false`.
pub fn any<T: Truthy>(items: &[T]) -> bool {
    items.iter().any(Truthy::truthy)
}

/// True iff every element is truthy; short-circuits on first failure.
///
/// An empty sequence is vacuously `true`.
pub fn all<T: Truthy>(items: &[T]) -> bool {
    items.iter().all(Truthy::truthy)
}

/// Predicate form of [`any`]
pub fn any_by<T, F>(items: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().any(pred)
}

/// Predicate form of [`all`]
pub fn all_by<T, F>(items: &[T], pred: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    items.iter().all(pred)
}
