//! Map utility functions.
//!
//! Maps are `HashMap`s: unique keys, unspecified iteration order. Every
//! function here reads its inputs and returns a newly allocated map or
//! sequence; callers must not rely on output ordering matching insertion
//! order.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{CollectoolsError, Result};

/// Replace every value with `f(value)`, keeping the same keys
pub fn map_values<K, V, U, F>(map: &HashMap<K, V>, f: F) -> HashMap<K, U>
where
    K: Eq + Hash + Clone,
    F: Fn(&V) -> U,
{
    map.iter().map(|(k, v)| (k.clone(), f(v))).collect()
}

/// Retain the entries for which `pred(key, value)` holds
pub fn filter<K, V, F>(map: &HashMap<K, V>, pred: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K, &V) -> bool,
{
    map.iter()
        .filter(|&(k, v)| pred(k, v))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Retain the entries whose key satisfies `pred`
pub fn filter_by_key<K, V, F>(map: &HashMap<K, V>, pred: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> bool,
{
    filter(map, |k, _| pred(k))
}

/// Retain the entries whose value satisfies `pred`
pub fn filter_by_value<K, V, F>(map: &HashMap<K, V>, pred: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&V) -> bool,
{
    filter(map, |_, v| pred(v))
}

/// Retain the entries whose key is a member of `keys`
pub fn filter_by_key_set<K, V>(map: &HashMap<K, V>, keys: &HashSet<K>) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    filter(map, |k, _| keys.contains(k))
}

/// Build a map from a sequence, keyed by `key_fn(element)`.
///
/// Elements are inserted in sequence order and the first occurrence of a key
/// wins: a later element that computes an already-present key is silently
/// dropped.
pub fn index_by<T, K, F>(items: &[T], key_fn: F) -> HashMap<K, T>
where
    T: Clone,
    K: Eq + Hash + Debug,
    F: Fn(&T) -> K,
{
    let mut result = HashMap::with_capacity(items.len());
    for item in items {
        let key = key_fn(item);
        if result.contains_key(&key) {
            trace!(?key, "duplicate key, keeping first occurrence");
            continue;
        }
        result.insert(key, item.clone());
    }
    result
}

/// Combine two maps entrywise: for every key of `map1`, the result holds
/// `f(map1[key], map2[key])`.
///
/// # Errors
///
/// Returns [`CollectoolsError::InvalidArgument`] when the maps differ in
/// size, or when a key of `map1` is absent from `map2`. Both checks run:
/// equal sizes do not prove equal keysets, so every key is looked up in
/// `map2` individually.
pub fn combine<K, V1, V2, V3, F>(
    map1: &HashMap<K, V1>,
    map2: &HashMap<K, V2>,
    f: F,
) -> Result<HashMap<K, V3>>
where
    K: Eq + Hash + Clone + Debug,
    F: Fn(&V1, &V2) -> V3,
{
    if map1.len() != map2.len() {
        debug!(
            len1 = map1.len(),
            len2 = map2.len(),
            "combine rejected: size mismatch"
        );
        return Err(CollectoolsError::invalid_argument(format!(
            "cannot combine maps of different sizes ({} vs {})",
            map1.len(),
            map2.len()
        )));
    }

    let mut result = HashMap::with_capacity(map1.len());
    for (key, v1) in map1 {
        let Some(v2) = map2.get(key) else {
            debug!(?key, "combine rejected: key missing from second map");
            return Err(CollectoolsError::invalid_argument(format!(
                "key {key:?} present in first map but missing from second"
            )));
        };
        result.insert(key.clone(), f(v1, v2));
    }
    Ok(result)
}

/// Merge two maps; on key collision the extension's entry wins
pub fn merge<K, V>(base: HashMap<K, V>, extension: HashMap<K, V>) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    let mut result = base;
    for (k, v) in extension {
        result.insert(k, v);
    }
    result
}

/// Extract all keys into a new sequence, in the map's native order
pub fn keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

/// Extract all values into a new sequence, in the map's native order
pub fn values<K, V: Clone>(map: &HashMap<K, V>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Apply a function to each entry for side effects
pub fn for_each_entry<K, V, F>(map: &HashMap<K, V>, mut f: F)
where
    F: FnMut(&K, &V),
{
    for (k, v) in map {
        f(k, v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<&'static str, i32> {
        HashMap::from([("a", 1), ("b", 2), ("c", 3)])
    }

    #[test]
    fn test_map_values() {
        let doubled = map_values(&sample(), |v| v * 2);
        assert_eq!(doubled, HashMap::from([("a", 2), ("b", 4), ("c", 6)]));
    }

    #[test]
    fn test_map_values_changes_type() {
        let rendered = map_values(&sample(), |v| v.to_string());
        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_filter() {
        let odd = filter(&sample(), |_, v| v % 2 == 1);
        assert_eq!(odd, HashMap::from([("a", 1), ("c", 3)]));
    }

    #[test]
    fn test_filter_by_key() {
        let only_b = filter_by_key(&sample(), |k| *k == "b");
        assert_eq!(only_b, HashMap::from([("b", 2)]));
    }

    #[test]
    fn test_filter_by_value() {
        let big = filter_by_value(&sample(), |v| *v >= 2);
        assert_eq!(big, HashMap::from([("b", 2), ("c", 3)]));
    }

    #[test]
    fn test_filter_by_key_set() {
        let keys = HashSet::from(["a", "c", "zz"]);
        let kept = filter_by_key_set(&sample(), &keys);
        assert_eq!(kept, HashMap::from([("a", 1), ("c", 3)]));
    }

    #[test]
    fn test_index_by_first_occurrence_wins() {
        let items = vec![(1, "a"), (1, "b"), (2, "c")];
        let indexed = index_by(&items, |pair| pair.0);

        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed.get(&1), Some(&(1, "a")));
        assert_eq!(indexed.get(&2), Some(&(2, "c")));
    }

    #[test]
    fn test_index_by_empty() {
        let items: Vec<i32> = vec![];
        let indexed = index_by(&items, |x| *x);
        assert!(indexed.is_empty());
    }

    #[test]
    fn test_combine() {
        let map1 = HashMap::from([("a", 1), ("b", 2)]);
        let map2 = HashMap::from([("a", 10), ("b", 20)]);

        let sum = combine(&map1, &map2, |x, y| x + y).unwrap();
        assert_eq!(sum, HashMap::from([("a", 11), ("b", 22)]));
    }

    #[test]
    fn test_combine_size_mismatch() {
        let map1 = HashMap::from([("a", 1), ("b", 2)]);
        let map2 = HashMap::from([("a", 10)]);

        let err = combine(&map1, &map2, |x, y| x + y).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_combine_keyset_mismatch_equal_sizes() {
        // A size check alone cannot catch this case.
        let map1 = HashMap::from([("a", 1), ("b", 2)]);
        let map2 = HashMap::from([("a", 10), ("c", 20)]);

        let err = combine(&map1, &map2, |x, y| x + y).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_combine_empty() {
        let map1: HashMap<&str, i32> = HashMap::new();
        let map2: HashMap<&str, i32> = HashMap::new();
        let out = combine(&map1, &map2, |x, y| x + y).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_combine_value_types_may_differ() {
        let counts = HashMap::from([("a", 2usize)]);
        let labels = HashMap::from([("a", "x".to_string())]);
        let out = combine(&counts, &labels, |n, s| s.repeat(*n)).unwrap();
        assert_eq!(out.get("a"), Some(&"xx".to_string()));
    }

    #[test]
    fn test_merge_extension_wins() {
        let base = HashMap::from([("a", 1), ("b", 2)]);
        let ext = HashMap::from([("b", 3), ("c", 4)]);

        let result = merge(base, ext);
        assert_eq!(result, HashMap::from([("a", 1), ("b", 3), ("c", 4)]));
    }

    #[test]
    fn test_keys_values() {
        let map = sample();
        let mut ks = keys(&map);
        let mut vs = values(&map);
        ks.sort_unstable();
        vs.sort_unstable();
        assert_eq!(ks, vec!["a", "b", "c"]);
        assert_eq!(vs, vec![1, 2, 3]);
    }

    #[test]
    fn test_for_each_entry() {
        let mut total = 0;
        for_each_entry(&sample(), |_, v| total += v);
        assert_eq!(total, 6);
    }
}
