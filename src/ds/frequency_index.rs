//! Occurrence counter keyed by item identity.
//!
//! Tracks how many live entries each distinct item has so that membership
//! and count queries run in O(1) instead of scanning the ordered sequence.
//!
//! ## Architecture
//!
//! ```text
//!   counts: FxHashMap<K, usize>
//!   ┌─────────┬───────┐
//!   │  "job"  │   3   │   three entries of "job" in the sequence
//!   │  "io"   │   1   │
//!   └─────────┴───────┘
//!
//!   increment("io")  → 2
//!   decrement("io")  → 1
//!   decrement("io")  → key dropped (never stored as 0)
//! ```
//!
//! ## Behavior
//! - `increment(&k)`: bumps an existing key in place; only a new key is
//!   cloned into the map
//! - `decrement(k)`: lowers the count, removing the key once it hits zero
//! - `count(k)`: stored count or 0
//!
//! `debug_validate_invariants()` is available in debug/test builds.
use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Map from item key to its number of live occurrences.
#[derive(Debug, Clone)]
pub struct FrequencyIndex<K> {
    counts: FxHashMap<K, usize>,
    total: usize,
}

impl<K> Default for FrequencyIndex<K> {
    fn default() -> Self {
        Self {
            counts: FxHashMap::default(),
            total: 0,
        }
    }
}

impl<K> FrequencyIndex<K>
where
    K: Eq + Hash,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with room for `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            total: 0,
        }
    }

    /// Rebuilds an index from an existing count map.
    ///
    /// Zero counts are dropped so the result never stores a zero-valued key.
    pub fn from_counts(counts: FxHashMap<K, usize>) -> Self {
        let mut counts = counts;
        counts.retain(|_, count| *count > 0);
        let total = counts.values().sum();
        Self { counts, total }
    }

    /// Returns the number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if no key is tracked.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the number of occurrences of `key` (0 if absent).
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns `true` if `key` has at least one occurrence.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Records one more occurrence of `key`; returns the new count.
    ///
    /// The key is cloned only when it is not tracked yet.
    pub fn increment<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ToOwned<Owned = K> + ?Sized,
    {
        self.total += 1;
        if let Some(count) = self.counts.get_mut(key) {
            *count += 1;
            return *count;
        }
        self.counts.insert(key.to_owned(), 1);
        1
    }

    /// Records one fewer occurrence of `key`; returns the remaining count.
    ///
    /// The key is dropped once its count reaches zero. Decrementing an absent
    /// key is a no-op returning 0.
    pub fn decrement<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let remaining = match self.counts.get_mut(key) {
            Some(count) => {
                *count -= 1;
                self.total -= 1;
                *count
            },
            None => return 0,
        };
        if remaining == 0 {
            self.counts.remove(key);
        }
        remaining
    }

    /// Drops every key.
    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }

    /// Iterates `(key, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }

    /// Returns the underlying count map.
    pub fn as_map(&self) -> &FxHashMap<K, usize> {
        &self.counts
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.counts.values().all(|&count| count > 0));
        assert_eq!(self.counts.values().sum::<usize>(), self.total);
    }
}
