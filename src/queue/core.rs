//! Single-threaded DEPQ core.
//!
//! [`DepqCore`] owns the ordered sequence, the frequency index and the
//! configuration. Every algorithm lives here as a `&mut self` method; the
//! thread-safe [`Depq`](crate::Depq) runs them inside its critical section,
//! so helpers such as bounded-length eviction never take a lock themselves.
//!
//! ## Insertion Flow
//!
//! ```text
//!   insert(item, p)
//!        │
//!        ▼
//!   ┌────────────────────────────────────────────────────────────────┐
//!   │ empty?            → push_back                                  │
//!   │ p >  high         → push_front                                 │
//!   │ p <= low          → push_back (stable among equals)            │
//!   │ low < p <= high   → rotating search                            │
//!   └────────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//!   rotating search (shift = net left rotation, step = len / 2):
//!
//!     view front >= p  → rotate_left(step),  shift += step
//!     view front <  p  → rotate_right(step), shift -= step
//!     step = max(step / 2, 1)
//!     until  back >= p > front
//!
//!   push_front(entry)                 view: [x, a[shift..], a[..shift]]
//!   restore: rotate_right(shift)      view: [a[..shift], x, a[shift..]]
//!            (or rotate_left(len + 1 - shift) when that is shorter)
//! ```
//!
//! The search stops exactly when `shift` equals the number of entries whose
//! priority is `>= p`, so the new entry lands after every existing entry of
//! equal priority.
//!
//! ## Operations
//!
//! | Operation                  | Time              | Notes                              |
//! |----------------------------|-------------------|------------------------------------|
//! | `insert`                   | O(1) .. O(n)      | O(1) at either end                 |
//! | `addfirst` / `addlast`     | O(1)              | Explicit priority must keep order  |
//! | `popfirst` / `poplast`     | O(1)              |                                    |
//! | `first`/`last`/`high`/`low`| O(1)              |                                    |
//! | `get`                      | O(1)              |                                    |
//! | `count` / `contains`       | O(1)              | Frequency index lookup             |
//! | `remove` / `elim`          | O(n)              | Lowest-priority occurrences first  |
//! | `clear`                    | O(n)              |                                    |
//!
//! ## Example Usage
//!
//! ```
//! use depq::DepqCore;
//!
//! let mut depq = DepqCore::new();
//! depq.insert("A", 4);
//! depq.insert("A", 6);
//! depq.insert("A", 5);
//!
//! let entries: Vec<_> = depq.iter().map(|(item, p)| (*item, *p)).collect();
//! assert_eq!(entries, vec![("A", 6), ("A", 5), ("A", 4)]);
//! assert_eq!(depq.count(&"A"), 3);
//! ```
//!
//! ## Thread Safety
//!
//! `DepqCore` is not thread-safe; use [`Depq`](crate::Depq) for shared access.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::{FrequencyIndex, RotatingRing, rotating_ring};
use crate::error::{DepqError, End, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::DepqMetrics;
use crate::queue::snapshot::DepqState;

/// Double-ended priority queue without internal locking.
///
/// Entries are kept from highest priority (index 0) to lowest priority
/// (index `len - 1`); entries of equal priority keep their insertion order.
///
/// # Type Parameters
///
/// - `T`: Item type, must be `Eq + Hash + Clone` (wrap other types in
///   [`Repr`](crate::Repr))
/// - `P`: Priority type, must be `PartialOrd + Clone` and totally ordered
///   over the values actually stored
pub struct DepqCore<T, P> {
    data: RotatingRing<(T, P)>,
    items: FrequencyIndex<T>,
    start: P,
    max_length: Option<usize>,
    #[cfg(feature = "metrics")]
    metrics: DepqMetrics,
}

impl<T, P> DepqCore<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone,
{
    /// Creates an empty queue whose baseline priority is `P::default()`.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::with_start(P::default())
    }

    /// Creates an empty queue with `start` as the baseline priority used by
    /// `addfirst`/`addlast` when the queue is empty.
    pub fn with_start(start: P) -> Self {
        Self::with_config(start, None, 0)
    }

    /// Creates an empty, bounded queue with baseline `P::default()`.
    pub fn with_max_length(max_length: usize) -> Self
    where
        P: Default,
    {
        Self::with_config(P::default(), Some(max_length), 0)
    }

    pub(crate) fn with_config(start: P, max_length: Option<usize>, capacity: usize) -> Self {
        Self {
            data: RotatingRing::with_capacity(capacity),
            items: FrequencyIndex::with_capacity(capacity),
            start,
            max_length,
            #[cfg(feature = "metrics")]
            metrics: DepqMetrics::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the queue holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the baseline priority.
    #[inline]
    pub fn start(&self) -> &P {
        &self.start
    }

    /// Returns the configured bound, if any.
    #[inline]
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Returns the item with the highest priority.
    pub fn first(&self) -> Result<&T, DepqError> {
        self.data
            .front()
            .map(|(item, _)| item)
            .ok_or(DepqError::EmptyContainer)
    }

    /// Returns the item with the lowest priority.
    pub fn last(&self) -> Result<&T, DepqError> {
        self.data
            .back()
            .map(|(item, _)| item)
            .ok_or(DepqError::EmptyContainer)
    }

    /// Returns the highest priority.
    pub fn high(&self) -> Result<&P, DepqError> {
        self.data
            .front()
            .map(|(_, priority)| priority)
            .ok_or(DepqError::EmptyContainer)
    }

    /// Returns the lowest priority.
    pub fn low(&self) -> Result<&P, DepqError> {
        self.data
            .back()
            .map(|(_, priority)| priority)
            .ok_or(DepqError::EmptyContainer)
    }

    /// Returns the entry at `index` (0 = highest priority).
    pub fn get(&self, index: usize) -> Result<(&T, &P), DepqError> {
        self.data
            .get(index)
            .map(|(item, priority)| (item, priority))
            .ok_or(DepqError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Returns how many entries hold `item`.
    ///
    /// Accepts any borrowed form of the item, e.g. `&str` for `String`.
    #[inline]
    pub fn count<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.items.count(item)
    }

    /// Returns `true` if at least one entry holds `item`.
    #[inline]
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.items.contains(item)
    }

    /// Returns the most frequent priority, preferring the higher one on ties.
    pub fn mode(&self) -> Option<&P> {
        let mut best: Option<(&P, usize)> = None;
        let mut run: Option<(&P, usize)> = None;
        for (_, priority) in self.data.iter() {
            run = match run {
                Some((current, n)) if current == priority => Some((current, n + 1)),
                _ => Some((priority, 1)),
            };
            if let Some((current, n)) = run
                && best.is_none_or(|(_, top)| n > top)
            {
                best = Some((current, n));
            }
        }
        best.map(|(priority, _)| priority)
    }

    /// Returns the arithmetic mean of all priorities, or `None` when empty.
    pub fn mean(&self) -> Option<f64>
    where
        P: Into<f64>,
    {
        if self.data.is_empty() {
            return None;
        }
        let sum: f64 = self
            .data
            .iter()
            .map(|(_, priority)| priority.clone().into())
            .sum();
        Some(sum / self.data.len() as f64)
    }

    /// Returns the median priority, or `None` when empty.
    ///
    /// With an even number of entries this is the average of the two middle
    /// priorities. O(1): the middle entries are read by index.
    pub fn median(&self) -> Option<f64>
    where
        P: Into<f64>,
    {
        let len = self.data.len();
        let at = |index: usize| -> Option<f64> {
            self.data.get(index).map(|(_, priority)| priority.clone().into())
        };
        match len {
            0 => None,
            n if n % 2 == 1 => at(n / 2),
            n => Some((at(n / 2 - 1)? + at(n / 2)?) / 2.0),
        }
    }

    /// Iterates entries from highest to lowest priority.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            inner: self.data.iter(),
        }
    }

    /// Copies the entries into a vector, highest priority first.
    pub fn to_vec(&self) -> Vec<(T, P)> {
        self.data.iter().cloned().collect()
    }

    /// Returns the frequency index.
    pub fn frequencies(&self) -> &FrequencyIndex<T> {
        &self.items
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Inserts `item` with `priority`, keeping the queue sorted.
    ///
    /// Entries of equal priority keep insertion order. If a `max_length` is
    /// set and now exceeded, the lowest-priority entry is evicted (which may
    /// be the one just inserted).
    pub fn insert(&mut self, item: T, priority: P) {
        enum Place {
            Front,
            Back,
            Search,
        }

        let place = match (self.data.front(), self.data.back()) {
            (Some((_, high)), Some((_, low))) => {
                if priority > *high {
                    Place::Front
                } else if priority <= *low {
                    Place::Back
                } else if priority <= *high && priority > *low {
                    Place::Search
                } else {
                    // incomparable priority; no sorted slot exists
                    Place::Back
                }
            },
            _ => Place::Back,
        };

        self.items.increment(&item);
        match place {
            Place::Front => {
                self.data.push_front((item, priority));
                #[cfg(feature = "metrics")]
                {
                    self.metrics.front_pushes += 1;
                }
            },
            Place::Back => {
                self.data.push_back((item, priority));
                #[cfg(feature = "metrics")]
                {
                    self.metrics.back_pushes += 1;
                }
            },
            Place::Search => self.rotate_insert(item, priority),
        }

        #[cfg(feature = "metrics")]
        {
            self.metrics.inserts += 1;
        }

        self.evict_overflow();
    }

    /// Places an entry strictly inside `(low, high]` by rotating the ring
    /// until the view's back/front straddle `priority`, pushing at the front
    /// and rotating back.
    fn rotate_insert(&mut self, item: T, priority: P) {
        let len = self.data.len();
        let mut step = (len / 2).max(1);
        // net left rotation applied so far, kept in 0..len
        let mut shift = 0usize;
        #[cfg(feature = "metrics")]
        let mut steps = 0u64;

        // For totally ordered priorities the search settles within
        // log2(len) halving steps plus at most `len` unit steps.
        for _ in 0..len + usize::BITS as usize {
            let front_at_least = self
                .data
                .front()
                .is_some_and(|(_, front)| priority <= *front);
            if front_at_least {
                self.data.rotate_left(step);
                shift = (shift + step) % len;
            } else {
                self.data.rotate_right(step);
                shift = (shift + len - step % len) % len;
            }
            #[cfg(feature = "metrics")]
            {
                steps += step as u64;
            }
            step = (step / 2).max(1);

            if self.straddles(&priority) {
                break;
            }
        }

        self.data.push_front((item, priority));

        // a[0] now sits at index len + 1 - shift; bring it back to the front
        // along the shorter way round
        let new_len = len + 1;
        let forward = new_len - shift;
        if shift <= forward {
            self.data.rotate_right(shift);
        } else {
            self.data.rotate_left(forward);
        }

        #[cfg(feature = "metrics")]
        {
            self.metrics.rotations += 1;
            self.metrics.rotate_steps += steps + shift.min(forward) as u64;
        }
    }

    /// `back >= priority > front` in the current rotated view.
    fn straddles(&self, priority: &P) -> bool {
        match (self.data.front(), self.data.back()) {
            (Some((_, front)), Some((_, back))) => *back >= *priority && *priority > *front,
            _ => false,
        }
    }

    /// Pushes `item` at the front (highest priority) in O(1).
    ///
    /// With `priority` given it must be `>=` the current highest priority,
    /// otherwise [`DepqError::OrderViolation`] is returned and nothing
    /// changes. Without it, the entry takes the current highest priority, or
    /// `start` when the queue is empty.
    ///
    /// Unlike [`insert`](Self::insert), the entry goes ahead of existing
    /// entries of equal priority (stack discipline).
    pub fn addfirst(&mut self, item: T, priority: Option<P>) -> Result<(), DepqError> {
        let priority = match (priority, self.data.front()) {
            (Some(p), Some((_, high))) => {
                if !(p >= *high) {
                    return Err(DepqError::OrderViolation { end: End::Front });
                }
                p
            },
            (Some(p), None) => p,
            (None, Some((_, high))) => high.clone(),
            (None, None) => self.start.clone(),
        };

        self.items.increment(&item);
        self.data.push_front((item, priority));

        #[cfg(feature = "metrics")]
        {
            self.metrics.inserts += 1;
            self.metrics.front_pushes += 1;
        }

        self.evict_overflow();
        Ok(())
    }

    /// Pushes `item` at the back (lowest priority) in O(1).
    ///
    /// With `priority` given it must be `<=` the current lowest priority,
    /// otherwise [`DepqError::OrderViolation`] is returned. Without it, the
    /// entry takes the current lowest priority, or `start` when empty.
    ///
    /// When the queue already holds `max_length` entries the call is a
    /// silent no-op: the new entry would be evicted immediately.
    pub fn addlast(&mut self, item: T, priority: Option<P>) -> Result<(), DepqError> {
        if self.is_full() {
            #[cfg(feature = "metrics")]
            {
                self.metrics.rejected += 1;
            }
            return Ok(());
        }

        let priority = match (priority, self.data.back()) {
            (Some(p), Some((_, low))) => {
                if !(p <= *low) {
                    return Err(DepqError::OrderViolation { end: End::Back });
                }
                p
            },
            (Some(p), None) => p,
            (None, Some((_, low))) => low.clone(),
            (None, None) => self.start.clone(),
        };

        self.items.increment(&item);
        self.data.push_back((item, priority));

        #[cfg(feature = "metrics")]
        {
            self.metrics.inserts += 1;
            self.metrics.back_pushes += 1;
        }

        Ok(())
    }

    /// Inserts every `(item, priority)` pair in order.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (T, P)>,
    {
        let entries = entries.into_iter();
        let (lower, _) = entries.size_hint();
        self.data.reserve(lower);
        for (item, priority) in entries {
            self.insert(item, priority);
        }
    }

    // -----------------------------------------------------------------------
    // Removal
    // -----------------------------------------------------------------------

    /// Removes and returns the highest-priority entry.
    pub fn popfirst(&mut self) -> Result<(T, P), DepqError> {
        let entry = self.data.pop_front().ok_or(DepqError::EmptyContainer)?;
        self.items.decrement(&entry.0);
        #[cfg(feature = "metrics")]
        {
            self.metrics.pops += 1;
        }
        Ok(entry)
    }

    /// Removes and returns the lowest-priority entry.
    pub fn poplast(&mut self) -> Result<(T, P), DepqError> {
        let entry = self.pop_back_entry().ok_or(DepqError::EmptyContainer)?;
        #[cfg(feature = "metrics")]
        {
            self.metrics.pops += 1;
        }
        Ok(entry)
    }

    /// Removes up to `count` occurrences of `item`, lowest priority first.
    ///
    /// `count == -1` removes every occurrence, `count == 0` removes nothing.
    /// Any other negative count is rejected with
    /// [`DepqError::InvalidArgument`]. Removed entries are returned in the
    /// order they were removed (ascending priority). An absent item yields
    /// an empty vector.
    pub fn remove<Q>(&mut self, item: &Q, count: isize) -> Result<Vec<(T, P)>, DepqError>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let limit = match count {
            -1 => usize::MAX,
            n if n < 0 => {
                return Err(DepqError::InvalidArgument(format!(
                    "remove count must be -1 or non-negative, got {n}"
                )));
            },
            n => n as usize,
        };
        Ok(self.remove_lowest(item, limit))
    }

    /// Removes every occurrence of `item`, lowest priority first.
    pub fn elim<Q>(&mut self, item: &Q) -> Vec<(T, P)>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.remove_lowest(item, usize::MAX)
    }

    /// Changes the priority of the lowest-priority occurrence of `item`.
    ///
    /// The old entry (if any) is removed and `item` is inserted with
    /// `priority`; if `item` was absent it is simply inserted. Returns the
    /// previous priority.
    pub fn set_priority(&mut self, item: T, priority: P) -> Option<P> {
        let previous = self
            .remove_lowest(&item, 1)
            .pop()
            .map(|(_, priority)| priority);
        self.insert(item, priority);
        previous
    }

    /// Replaces the lowest-priority occurrence of `old` with `new` at the
    /// same priority. Returns that priority, or `None` (and does nothing)
    /// when `old` is absent.
    pub fn substitute<Q>(&mut self, old: &Q, new: T) -> Option<P>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let (_, priority) = self.remove_lowest(old, 1).pop()?;
        self.insert(new, priority.clone());
        Some(priority)
    }

    /// Deleting by position is not supported; entries leave only through
    /// identity-based removal or popping an end.
    pub fn delete_index(&mut self, _index: usize) -> Result<(), DepqError> {
        Err(DepqError::UnsupportedOperation(
            "entries cannot be deleted by index; use remove, elim, popfirst or poplast",
        ))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        let dropped = self.data.len();
        self.data.clear();
        self.items.clear();
        debug!(dropped, "cleared DEPQ");
    }

    /// Sets or lifts the bound on the number of entries.
    ///
    /// Shrinking below the current length evicts lowest-priority entries
    /// immediately; they are returned lowest priority first.
    pub fn set_max_length(&mut self, max_length: Option<usize>) -> Vec<(T, P)> {
        self.max_length = max_length;
        let evicted = self.evict_overflow();
        if !evicted.is_empty() {
            debug!(
                evicted = evicted.len(),
                max_length = ?max_length,
                "trimmed DEPQ to new max length"
            );
        }

        #[cfg(debug_assertions)]
        self.debug_validate();

        evicted
    }

    /// Like [`set_max_length`](Self::set_max_length) with a signed length;
    /// negative lengths are rejected with [`DepqError::InvalidArgument`].
    pub fn try_set_max_length(&mut self, max_length: i64) -> Result<Vec<(T, P)>, DepqError> {
        let bound = usize::try_from(max_length).map_err(|_| {
            DepqError::InvalidArgument(format!(
                "max length must be a non-negative integer, got {max_length}"
            ))
        })?;
        Ok(self.set_max_length(Some(bound)))
    }

    fn is_full(&self) -> bool {
        self.max_length.is_some_and(|max| self.data.len() >= max)
    }

    fn pop_back_entry(&mut self) -> Option<(T, P)> {
        let entry = self.data.pop_back()?;
        self.items.decrement(&entry.0);
        Some(entry)
    }

    /// Drops lowest-priority entries until the bound holds.
    fn evict_overflow(&mut self) -> Vec<(T, P)> {
        let Some(max) = self.max_length else {
            return Vec::new();
        };
        let mut evicted = Vec::new();
        while self.data.len() > max {
            let Some(entry) = self.pop_back_entry() else {
                break;
            };
            trace!(len = self.data.len(), max_length = max, "evicted lowest-priority entry");
            #[cfg(feature = "metrics")]
            {
                self.metrics.evictions += 1;
            }
            evicted.push(entry);
        }
        evicted
    }

    /// Removes up to `limit` occurrences of `item`, scanning from the back.
    fn remove_lowest<Q>(&mut self, item: &Q, limit: usize) -> Vec<(T, P)>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let wanted = self.items.count(item).min(limit);
        if wanted == 0 {
            return Vec::new();
        }

        // positions of matches, highest index first
        let mut targets = Vec::with_capacity(wanted);
        for (index, (candidate, _)) in self.data.iter().enumerate().rev() {
            if Borrow::<Q>::borrow(candidate) == item {
                targets.push(index);
                if targets.len() == wanted {
                    break;
                }
            }
        }

        let removed = if let [index] = targets[..] {
            self.data.remove(index).into_iter().collect()
        } else {
            let mut kept = RotatingRing::with_capacity(self.data.capacity());
            let mut taken = Vec::with_capacity(targets.len());
            let mut next = targets.iter().rev().copied().peekable();
            let mut index = 0;
            while let Some(entry) = self.data.pop_front() {
                if next.next_if_eq(&index).is_some() {
                    taken.push(entry);
                } else {
                    kept.push_back(entry);
                }
                index += 1;
            }
            self.data = kept;
            taken.reverse();
            taken
        };

        for (removed_item, _) in &removed {
            self.items.decrement::<T>(removed_item);
        }

        #[cfg(feature = "metrics")]
        {
            self.metrics.removals += removed.len() as u64;
        }

        #[cfg(debug_assertions)]
        self.debug_validate();

        removed
    }

    // -----------------------------------------------------------------------
    // Snapshot
    // -----------------------------------------------------------------------

    /// Captures the full state as plain data.
    pub fn export_state(&self) -> DepqState<T, P> {
        DepqState {
            entries: self.to_vec(),
            frequencies: self.items.as_map().clone(),
            start: self.start.clone(),
            max_length: self.max_length,
        }
    }

    /// Rebuilds a queue from an exported state without re-validating it.
    pub fn import_state(state: DepqState<T, P>) -> Self {
        let DepqState {
            entries,
            frequencies,
            start,
            max_length,
        } = state;
        debug!(
            entries = entries.len(),
            distinct = frequencies.len(),
            "imported DEPQ state"
        );
        Self {
            data: entries.into_iter().collect(),
            items: FrequencyIndex::from_counts(frequencies),
            start,
            max_length,
            #[cfg(feature = "metrics")]
            metrics: DepqMetrics::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Metrics & validation
    // -----------------------------------------------------------------------

    /// Returns the operation counters.
    #[cfg(feature = "metrics")]
    pub fn metrics(&self) -> &DepqMetrics {
        &self.metrics
    }

    /// Resets the operation counters to zero.
    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&mut self) {
        self.metrics = DepqMetrics::default();
    }

    /// Verifies ordering, frequency consistency and the length bound.
    ///
    /// Ordering only fails on a strict rise between neighbours; incomparable
    /// neighbours (a NaN appended at the back) are not a break.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.check_order()?;
        self.check_frequencies()?;
        self.check_bound()
    }

    fn check_order(&self) -> Result<(), InvariantError> {
        let mut previous: Option<&P> = None;
        for (index, (_, priority)) in self.data.iter().enumerate() {
            if let Some(prev) = previous
                && prev < priority
            {
                return Err(InvariantError::new(format!(
                    "entry {index} has a higher priority than entry {}",
                    index - 1
                )));
            }
            previous = Some(priority);
        }
        Ok(())
    }

    fn check_frequencies(&self) -> Result<(), InvariantError> {
        let mut seen: FxHashMap<&T, usize> = FxHashMap::default();
        for (item, _) in self.data.iter() {
            *seen.entry(item).or_insert(0) += 1;
        }
        if seen.len() != self.items.distinct() {
            return Err(InvariantError::new(format!(
                "frequency index tracks {} items, sequence holds {}",
                self.items.distinct(),
                seen.len()
            )));
        }
        for (item, expected) in seen {
            let indexed = self.items.count(item);
            if indexed != expected {
                return Err(InvariantError::new(format!(
                    "frequency index counts {indexed} occurrences, sequence holds {expected}"
                )));
            }
        }
        Ok(())
    }

    fn check_bound(&self) -> Result<(), InvariantError> {
        match self.max_length {
            Some(max) if self.data.len() > max => Err(InvariantError::new(format!(
                "length {} exceeds max length {max}",
                self.data.len()
            ))),
            _ => Ok(()),
        }
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        self.data.debug_validate_invariants();
        self.items.debug_validate_invariants();
        debug_assert!(self.check_frequencies().is_ok(), "{:?}", self.check_frequencies());
        debug_assert!(self.check_bound().is_ok(), "{:?}", self.check_bound());
        // removals never reorder; ordering is left to check_invariants since
        // incomparable priorities (NaN) have no sorted slot
    }
}

impl<T, P> Default for DepqCore<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Clone for DepqCore<T, P>
where
    T: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            items: self.items.clone(),
            start: self.start.clone(),
            max_length: self.max_length,
            #[cfg(feature = "metrics")]
            metrics: self.metrics,
        }
    }
}

impl<T, P> FromIterator<(T, P)> for DepqCore<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut depq = Self::new();
        depq.extend(iter);
        depq
    }
}

impl<T, P> Extend<(T, P)> for DepqCore<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone,
{
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        DepqCore::extend(self, iter);
    }
}

impl<T, P> fmt::Debug for DepqCore<T, P>
where
    T: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepqCore")
            .field("len", &self.data.len())
            .field("start", &self.start)
            .field("max_length", &self.max_length)
            .field("entries", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, P> fmt::Display for DepqCore<T, P>
where
    T: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (item, priority)) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({item:?}, {priority:?})")?;
        }
        f.write_str("]")
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Iterator over `(item, priority)` references, highest priority first.
#[derive(Debug, Clone)]
pub struct Iter<'a, T, P> {
    inner: rotating_ring::Iter<'a, (T, P)>,
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = (&'a T, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(item, priority)| (item, priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, P> DoubleEndedIterator for Iter<'_, T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(item, priority)| (item, priority))
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}

impl<'a, T, P> IntoIterator for &'a DepqCore<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone,
{
    type Item = (&'a T, &'a P);
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`DepqCore`] from the highest priority.
#[derive(Debug)]
pub struct IntoIter<T, P> {
    data: RotatingRing<(T, P)>,
}

impl<T, P> Iterator for IntoIter<T, P> {
    type Item = (T, P);

    fn next(&mut self) -> Option<Self::Item> {
        self.data.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.data.len(), Some(self.data.len()))
    }
}

impl<T, P> DoubleEndedIterator for IntoIter<T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.data.pop_back()
    }
}

impl<T, P> ExactSizeIterator for IntoIter<T, P> {}

impl<T, P> IntoIterator for DepqCore<T, P> {
    type Item = (T, P);
    type IntoIter = IntoIter<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { data: self.data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries<T: Clone, P: Clone>(depq: &DepqCore<T, P>) -> Vec<(T, P)>
    where
        T: Eq + Hash,
        P: PartialOrd,
    {
        depq.to_vec()
    }

    // ==============================================
    // Basic Operations
    // ==============================================

    mod basic_operations {
        use super::*;

        #[test]
        fn new_queue_is_empty() {
            let depq: DepqCore<&str, i32> = DepqCore::new();
            assert!(depq.is_empty());
            assert_eq!(depq.len(), 0);
            assert_eq!(depq.start(), &0);
            assert_eq!(depq.max_length(), None);
        }

        #[test]
        fn insert_keeps_descending_order() {
            let mut depq = DepqCore::new();
            depq.insert("A", 4);
            depq.insert("A", 6);
            depq.insert("A", 5);
            assert_eq!(entries(&depq), vec![("A", 6), ("A", 5), ("A", 4)]);
        }

        #[test]
        fn peeks_report_both_ends() {
            let mut depq = DepqCore::new();
            depq.insert("mid", 5);
            depq.insert("top", 9);
            depq.insert("bottom", 1);

            assert_eq!(depq.first(), Ok(&"top"));
            assert_eq!(depq.last(), Ok(&"bottom"));
            assert_eq!(depq.high(), Ok(&9));
            assert_eq!(depq.low(), Ok(&1));
            assert_eq!(depq.get(1), Ok((&"mid", &5)));
        }

        #[test]
        fn pops_remove_from_both_ends() {
            let mut depq: DepqCore<&str, i32> =
                [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
            assert_eq!(depq.popfirst(), Ok(("c", 3)));
            assert_eq!(depq.poplast(), Ok(("a", 1)));
            assert_eq!(depq.len(), 1);
            assert!(!depq.contains(&"a"));
            assert!(depq.contains(&"b"));
        }

        #[test]
        fn get_out_of_range() {
            let mut depq = DepqCore::new();
            depq.insert("a", 1);
            assert_eq!(
                depq.get(1),
                Err(DepqError::IndexOutOfRange { index: 1, len: 1 })
            );
        }

        #[test]
        fn clear_empties_sequence_and_index() {
            let mut depq = DepqCore::new();
            depq.insert("a", 1);
            depq.insert("a", 2);
            depq.clear();
            assert!(depq.is_empty());
            assert_eq!(depq.count(&"a"), 0);
            assert!(depq.frequencies().is_empty());
        }

        #[test]
        fn display_lists_entries() {
            let depq: DepqCore<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
            assert_eq!(depq.to_string(), r#"[("b", 2), ("a", 1)]"#);
        }

        #[test]
        fn owned_iteration_drains_in_order() {
            let depq: DepqCore<u32, u32> = [(1, 1), (2, 5), (3, 3)].into_iter().collect();
            let items: Vec<u32> = depq.into_iter().map(|(item, _)| item).collect();
            assert_eq!(items, vec![2, 3, 1]);
        }

        #[test]
        fn borrowed_iteration_both_directions() {
            let depq: DepqCore<u32, u32> = [(1, 1), (2, 5), (3, 3)].into_iter().collect();
            let forward: Vec<u32> = depq.iter().map(|(_, p)| *p).collect();
            let backward: Vec<u32> = depq.iter().rev().map(|(_, p)| *p).collect();
            assert_eq!(forward, vec![5, 3, 1]);
            assert_eq!(backward, vec![1, 3, 5]);
            assert_eq!((&depq).into_iter().len(), 3);
        }
    }

    // ==============================================
    // Rotating Search
    // ==============================================

    mod rotating_search {
        use super::*;

        fn naive_insert(entries: &mut Vec<(u32, i32)>, item: u32, priority: i32) {
            let index = entries
                .iter()
                .position(|(_, p)| priority > *p)
                .unwrap_or(entries.len());
            entries.insert(index, (item, priority));
        }

        #[test]
        fn matches_naive_insertion_for_every_gap() {
            for len in 2..24 {
                for target in 0..(2 * len as i32 + 2) {
                    let mut depq = DepqCore::new();
                    let mut model = Vec::new();
                    for i in 0..len {
                        depq.insert(i, 2 * i as i32);
                        naive_insert(&mut model, i, 2 * i as i32);
                    }
                    depq.insert(99, target);
                    naive_insert(&mut model, 99, target);
                    assert_eq!(entries(&depq), model, "len {len}, priority {target}");
                    depq.check_invariants().unwrap();
                }
            }
        }

        #[test]
        fn equal_priorities_keep_insertion_order() {
            let mut depq = DepqCore::new();
            depq.insert("high", 10);
            depq.insert("low", 0);
            depq.insert("first", 5);
            depq.insert("second", 5);
            depq.insert("third", 5);
            depq.insert("top-tie", 10);
            let items: Vec<&str> = depq.iter().map(|(item, _)| *item).collect();
            assert_eq!(
                items,
                vec!["high", "top-tie", "first", "second", "third", "low"]
            );
        }

        #[test]
        fn equal_to_lowest_goes_to_back() {
            let mut depq = DepqCore::new();
            depq.insert("a", 3);
            depq.insert("b", 1);
            depq.insert("c", 1);
            assert_eq!(depq.last(), Ok(&"c"));
        }

        #[test]
        fn rotation_survives_wrapped_storage() {
            let mut depq = DepqCore::new();
            for i in 0..8 {
                depq.addfirst(i, Some(i as i32 * 10)).unwrap();
            }
            for i in 0..40 {
                depq.insert(100 + i, (i as i32 * 7) % 70);
                depq.check_invariants().unwrap();
            }
            assert_eq!(depq.len(), 48);
        }

        #[test]
        fn float_priorities() {
            let mut depq = DepqCore::with_start(0.0_f64);
            depq.insert("a", 0.5);
            depq.insert("b", -1.25);
            depq.insert("c", 0.125);
            depq.insert("d", 3.0);
            let priorities: Vec<f64> = depq.iter().map(|(_, p)| *p).collect();
            assert_eq!(priorities, vec![3.0, 0.5, 0.125, -1.25]);
        }

        #[test]
        fn incomparable_priority_goes_to_back() {
            let mut depq = DepqCore::with_start(0.0_f64);
            depq.insert("a", 2.0);
            depq.insert("b", 1.0);
            depq.insert("nan", f64::NAN);
            assert_eq!(depq.last(), Ok(&"nan"));
            assert_eq!(depq.len(), 3);
        }

        #[test]
        fn trailing_nan_keeps_removal_and_eviction_working() {
            let mut depq = DepqCore::with_start(0.0_f64);
            depq.insert("a", 2.0);
            depq.insert("b", 1.0);
            depq.insert("nan", f64::NAN);
            depq.check_invariants().unwrap();

            assert_eq!(depq.remove(&"a", 1).map(|removed| removed.len()), Ok(1));
            let evicted = depq.set_max_length(Some(1));
            assert_eq!(evicted.len(), 1);
            assert!(evicted[0].1.is_nan());
            assert_eq!(entries(&depq), vec![("b", 1.0)]);
            depq.check_invariants().unwrap();
        }

        #[test]
        fn leading_nan_can_be_removed() {
            let mut depq = DepqCore::with_start(0.0_f64);
            depq.insert("nan", f64::NAN);
            depq.insert("a", 1.0);
            depq.insert("b", 2.0);
            assert_eq!(depq.len(), 3);

            let removed = depq.elim(&"nan");
            assert_eq!(removed.len(), 1);
            assert_eq!(depq.len(), 2);
            assert_eq!(depq.count(&"nan"), 0);
        }
    }

    // ==============================================
    // Ordered Pushes
    // ==============================================

    mod ordered_pushes {
        use super::*;

        #[test]
        fn addfirst_rejects_lower_priority() {
            let mut depq = DepqCore::new();
            depq.addfirst("x", Some(7)).unwrap();
            assert_eq!(
                depq.addfirst("y", Some(6)),
                Err(DepqError::OrderViolation { end: End::Front })
            );
            assert_eq!(depq.len(), 1);
            assert_eq!(depq.count(&"y"), 0);
        }

        #[test]
        fn addlast_rejects_higher_priority() {
            let mut depq = DepqCore::new();
            depq.addlast("x", Some(3)).unwrap();
            assert_eq!(
                depq.addlast("y", Some(4)),
                Err(DepqError::OrderViolation { end: End::Back })
            );
            assert!(!depq.contains(&"y"));
        }

        #[test]
        fn default_priorities_follow_extremes() {
            let mut depq = DepqCore::with_start(10);
            depq.addfirst("start", None).unwrap();
            assert_eq!(depq.high(), Ok(&10));

            depq.addfirst("top", Some(12)).unwrap();
            depq.addfirst("top-again", None).unwrap();
            depq.addlast("bottom", None).unwrap();

            assert_eq!(
                entries(&depq),
                vec![("top-again", 12), ("top", 12), ("start", 10), ("bottom", 10)]
            );
        }

        #[test]
        fn addlast_on_empty_uses_start() {
            let mut depq: DepqCore<&str, i32> = DepqCore::with_start(-3);
            depq.addlast("a", None).unwrap();
            assert_eq!(depq.low(), Ok(&-3));
        }

        #[test]
        fn fifo_and_lifo_disciplines() {
            let mut fifo: DepqCore<i32, i32> = DepqCore::new();
            let mut lifo: DepqCore<i32, i32> = DepqCore::new();
            for i in 0..5 {
                fifo.addlast(i, None).unwrap();
                lifo.addfirst(i, None).unwrap();
            }
            let fifo_order: Vec<i32> = (0..5).map(|_| fifo.popfirst().unwrap().0).collect();
            let lifo_order: Vec<i32> = (0..5).map(|_| lifo.popfirst().unwrap().0).collect();
            assert_eq!(fifo_order, vec![0, 1, 2, 3, 4]);
            assert_eq!(lifo_order, vec![4, 3, 2, 1, 0]);
        }
    }

    // ==============================================
    // Removal
    // ==============================================

    mod removal {
        use super::*;

        #[test]
        fn remove_takes_lowest_priority_first() {
            let mut depq = DepqCore::new();
            depq.insert("t", 7);
            depq.insert("t", 5);
            assert_eq!(depq.count(&"t"), 2);

            assert_eq!(depq.remove(&"t", 1), Ok(vec![("t", 5)]));
            assert_eq!(depq.count(&"t"), 1);
            assert_eq!(entries(&depq), vec![("t", 7)]);
        }

        #[test]
        fn remove_all_returns_ascending_priorities() {
            let mut depq = DepqCore::new();
            depq.insert("t", 3);
            depq.insert("x", 4);
            depq.insert("t", 9);
            depq.insert("t", 1);

            let removed = depq.remove(&"t", -1).unwrap();
            assert_eq!(removed, vec![("t", 1), ("t", 3), ("t", 9)]);
            assert!(!depq.contains(&"t"));
            assert_eq!(entries(&depq), vec![("x", 4)]);
        }

        #[test]
        fn remove_zero_and_missing_are_noops() {
            let mut depq = DepqCore::new();
            depq.insert("a", 1);
            assert_eq!(depq.remove(&"a", 0), Ok(vec![]));
            assert_eq!(depq.remove(&"missing", 3), Ok(vec![]));
            assert_eq!(depq.len(), 1);
        }

        #[test]
        fn remove_more_than_present() {
            let mut depq = DepqCore::new();
            depq.insert("a", 1);
            depq.insert("a", 2);
            assert_eq!(depq.remove(&"a", 10).unwrap().len(), 2);
            assert!(depq.is_empty());
        }

        #[test]
        fn remove_rejects_negative_count() {
            let mut depq = DepqCore::new();
            depq.insert("a", 1);
            assert!(matches!(
                depq.remove(&"a", -2),
                Err(DepqError::InvalidArgument(_))
            ));
            assert_eq!(depq.count(&"a"), 1);
        }

        #[test]
        fn remove_preserves_order_of_others() {
            let mut depq = DepqCore::new();
            for (item, priority) in [("a", 5), ("t", 5), ("b", 5), ("t", 2), ("c", 1)] {
                depq.insert(item, priority);
            }
            depq.remove(&"t", 2).unwrap();
            assert_eq!(entries(&depq), vec![("a", 5), ("b", 5), ("c", 1)]);
        }

        #[test]
        fn elim_removes_everything() {
            let mut depq = DepqCore::new();
            for p in 0..3 {
                depq.insert("t", p);
            }
            depq.insert("keep", 1);
            assert_eq!(depq.elim(&"t").len(), 3);
            assert_eq!(depq.len(), 1);
            assert_eq!(depq.count(&"t"), 0);
        }

        #[test]
        fn delete_index_is_unsupported() {
            let mut depq = DepqCore::new();
            depq.insert("a", 1);
            assert!(matches!(
                depq.delete_index(0),
                Err(DepqError::UnsupportedOperation(_))
            ));
            assert_eq!(depq.len(), 1);
        }

        #[test]
        fn pop_on_empty_fails() {
            let mut depq: DepqCore<&str, i32> = DepqCore::new();
            assert_eq!(depq.popfirst(), Err(DepqError::EmptyContainer));
            assert_eq!(depq.poplast(), Err(DepqError::EmptyContainer));
            assert_eq!(depq.first(), Err(DepqError::EmptyContainer));
            assert_eq!(depq.low(), Err(DepqError::EmptyContainer));
        }
    }

    // ==============================================
    // Bounded Length
    // ==============================================

    mod bounded_length {
        use super::*;

        #[test]
        fn insert_evicts_lowest() {
            let mut depq = DepqCore::with_max_length(2);
            depq.insert("A", 1);
            depq.insert("B", 2);
            depq.insert("C", 3);
            assert_eq!(entries(&depq), vec![("C", 3), ("B", 2)]);
            assert!(!depq.contains(&"A"));
        }

        #[test]
        fn low_priority_insert_evicts_itself() {
            let mut depq = DepqCore::with_max_length(2);
            depq.insert("A", 5);
            depq.insert("B", 4);
            depq.insert("C", 1);
            assert_eq!(entries(&depq), vec![("A", 5), ("B", 4)]);
            assert_eq!(depq.count(&"C"), 0);
        }

        #[test]
        fn addlast_when_full_is_noop() {
            let mut depq = DepqCore::with_max_length(1);
            depq.addlast("a", Some(3)).unwrap();
            assert_eq!(depq.addlast("b", Some(99)), Ok(()));
            assert_eq!(entries(&depq), vec![("a", 3)]);
        }

        #[test]
        fn addfirst_when_full_evicts_back() {
            let mut depq = DepqCore::with_max_length(2);
            depq.insert("a", 2);
            depq.insert("b", 1);
            depq.addfirst("c", None).unwrap();
            assert_eq!(entries(&depq), vec![("c", 2), ("a", 2)]);
        }

        #[test]
        fn shrinking_max_length_evicts_immediately() {
            let mut depq: DepqCore<u32, u32> = (0..6).map(|i| (i, i)).collect();
            let evicted = depq.set_max_length(Some(3));
            assert_eq!(evicted, vec![(0, 0), (1, 1), (2, 2)]);
            assert_eq!(depq.len(), 3);
            assert_eq!(depq.low(), Ok(&3));

            assert!(depq.set_max_length(None).is_empty());
            depq.insert(9, 0);
            assert_eq!(depq.len(), 4);
        }

        #[test]
        fn zero_max_length_holds_nothing() {
            let mut depq = DepqCore::with_max_length(0);
            depq.insert("a", 1);
            depq.addfirst("b", None).unwrap();
            depq.addlast("c", None).unwrap();
            assert!(depq.is_empty());
            assert!(depq.frequencies().is_empty());
        }

        #[test]
        fn try_set_max_length_rejects_negative() {
            let mut depq: DepqCore<&str, i32> = DepqCore::new();
            assert!(matches!(
                depq.try_set_max_length(-1),
                Err(DepqError::InvalidArgument(_))
            ));
            assert_eq!(depq.max_length(), None);
            assert_eq!(depq.try_set_max_length(4), Ok(vec![]));
            assert_eq!(depq.max_length(), Some(4));
        }
    }

    // ==============================================
    // Supplementary Operations
    // ==============================================

    mod supplementary {
        use super::*;

        #[test]
        fn set_priority_moves_lowest_occurrence() {
            let mut depq = DepqCore::new();
            depq.insert("job", 2);
            depq.insert("job", 8);
            depq.insert("other", 5);

            assert_eq!(depq.set_priority("job", 10), Some(2));
            assert_eq!(entries(&depq), vec![("job", 10), ("job", 8), ("other", 5)]);
            assert_eq!(depq.count(&"job"), 2);

            assert_eq!(depq.set_priority("new", 1), None);
            assert_eq!(depq.last(), Ok(&"new"));
        }

        #[test]
        fn substitute_keeps_priority() {
            let mut depq = DepqCore::new();
            depq.insert("old", 4);
            depq.insert("x", 9);
            assert_eq!(depq.substitute(&"old", "new"), Some(4));
            assert_eq!(entries(&depq), vec![("x", 9), ("new", 4)]);
            assert_eq!(depq.substitute(&"missing", "other"), None);
            assert!(!depq.contains(&"other"));
        }

        #[test]
        fn mean_and_median_of_odd_length() {
            let mut depq = DepqCore::new();
            for (item, priority) in [("a", 3_u32), ("b", 8), ("c", 1)] {
                depq.insert(item, priority);
            }
            assert_eq!(depq.mean(), Some(4.0));
            assert_eq!(depq.median(), Some(3.0));
        }

        #[test]
        fn median_of_even_length_averages_middle_pair() {
            let mut depq = DepqCore::new();
            for (item, priority) in [("a", 1_u32), ("b", 8), ("c", 3), ("d", 5)] {
                depq.insert(item, priority);
            }
            assert_eq!(depq.median(), Some(4.0));
            assert_eq!(depq.mean(), Some(4.25));
        }

        #[test]
        fn mean_and_median_of_empty_queue() {
            let depq: DepqCore<&str, f32> = DepqCore::new();
            assert_eq!(depq.mean(), None);
            assert_eq!(depq.median(), None);
        }

        #[test]
        fn mode_prefers_higher_priority_on_tie() {
            let mut depq = DepqCore::new();
            assert_eq!(depq.mode(), None);
            for (item, priority) in [("a", 1), ("b", 1), ("c", 5), ("d", 5), ("e", 3)] {
                depq.insert(item, priority);
            }
            assert_eq!(depq.mode(), Some(&5));
            depq.insert("f", 1);
            assert_eq!(depq.mode(), Some(&1));
        }
    }

    // ==============================================
    // Snapshot
    // ==============================================

    mod snapshot {
        use super::*;

        #[test]
        fn export_import_round_trip() {
            let mut depq = DepqCore::with_start(2);
            depq.set_max_length(Some(10));
            for (item, priority) in [("a", 3), ("b", 1), ("a", 2)] {
                depq.insert(item, priority);
            }
            let state = depq.export_state();
            assert_eq!(state.entries, vec![("a", 3), ("a", 2), ("b", 1)]);
            assert_eq!(state.frequencies.get(&"a"), Some(&2));
            assert_eq!(state.start, 2);
            assert_eq!(state.max_length, Some(10));

            let restored = DepqCore::import_state(state.clone());
            assert_eq!(restored.export_state(), state);
            restored.check_invariants().unwrap();
        }

        #[test]
        fn check_invariants_flags_bad_import() {
            let state = DepqState {
                entries: vec![("a", 1), ("b", 2)],
                frequencies: [("a", 1), ("b", 1)].into_iter().collect(),
                start: 0,
                max_length: None,
            };
            let depq = DepqCore::import_state(state);
            assert_eq!(
                depq.check_invariants().map_err(|err| err.message().to_string()),
                Err("entry 1 has a higher priority than entry 0".to_string())
            );
        }

        #[test]
        fn clone_is_independent() {
            let mut depq = DepqCore::new();
            depq.insert("a", 1);
            let mut copy = depq.clone();
            copy.insert("b", 2);
            assert_eq!(depq.len(), 1);
            assert_eq!(copy.len(), 2);
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn counters_track_paths() {
            let mut depq = DepqCore::with_max_length(3);
            depq.insert("a", 5);
            depq.insert("b", 1);
            depq.insert("c", 3);
            depq.insert("d", 9);
            depq.popfirst().unwrap();
            depq.addlast("e", None).unwrap();
            depq.remove(&"c", 1).unwrap();

            let m = *depq.metrics();
            assert_eq!(m.inserts, 5);
            assert_eq!(m.rotations, 1);
            assert_eq!(m.front_pushes, 1);
            assert_eq!(m.evictions, 1);
            assert_eq!(m.pops, 1);
            assert_eq!(m.removals, 1);

            depq.reset_metrics();
            assert_eq!(*depq.metrics(), DepqMetrics::default());
        }
    }
}
