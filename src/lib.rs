//! # collectools
//!
//! Generic container-manipulation utilities for sequences, maps, and sets.
//!
//! Every function is free, stateless, and pure: inputs taken by shared
//! reference are never mutated, and every returned container is newly
//! allocated and owned by the caller. The single in-place operation is
//! [`seq::for_each_mut`], which visits the caller's elements through an
//! exclusive borrow.
//!
//! ## Features
//!
//! - Sequence concatenation, mapping, visiting, and filtering
//! - `any`/`all` aggregates over a [`Truthy`] capability trait, with
//!   predicate variants
//! - Map value transformation, filtering by key/value/predicate/key set,
//!   first-occurrence-wins indexing, and fail-fast entrywise combination
//! - Set conversion (ordered and unordered) and intersection
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use collectools::{map, seq};
//!
//! let lengths = seq::map(&["alpha", "beta"], |s| s.len());
//! assert_eq!(lengths, vec![5, 4]);
//!
//! let first = HashMap::from([("a", 1), ("b", 2)]);
//! let second = HashMap::from([("a", 10), ("b", 20)]);
//! let sums = map::combine(&first, &second, |x, y| x + y)?;
//! assert_eq!(sums, HashMap::from([("a", 11), ("b", 22)]));
//! # Ok::<(), collectools::CollectoolsError>(())
//! ```
//!
//! Only [`map::combine`] can fail; it rejects maps whose sizes or keysets
//! differ. Everything else is total, and empty containers are valid inputs
//! everywhere.

// Module declarations
pub mod map;
pub mod seq;
pub mod set;
pub mod truthy;

mod error;

// Re-exports
pub use error::{CollectoolsError, Result};
pub use truthy::Truthy;
