//! Thread-safe DEPQ.
//!
//! [`Depq`] owns one [`parking_lot::Mutex`] around a [`DepqCore`]. Every
//! public method is a single critical section: lock, run the core
//! algorithm, unlock. The guard is dropped on every exit path, including
//! early error returns. Helpers that run while the lock is held (eviction,
//! identity removal) are plain `&mut DepqCore` methods, so the mutex is
//! never re-acquired by the thread holding it.
//!
//! Peeks and pops return owned clones; no reference into the locked state
//! escapes a method.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use depq::Depq;
//!
//! let depq = Arc::new(Depq::new());
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let depq = Arc::clone(&depq);
//!         thread::spawn(move || {
//!             for i in 0..25 {
//!                 depq.insert(t * 100 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(depq.len(), 100);
//! assert_eq!(depq.high(), Ok(24));
//! assert_eq!(depq.low(), Ok(0));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::error::{DepqError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::DepqMetrics;
use crate::queue::builder::DepqBuilder;
use crate::queue::core::DepqCore;
use crate::queue::snapshot::DepqState;

/// Double-ended priority queue safe to share across threads.
///
/// `Depq` is `Send + Sync` whenever `T` and `P` are `Send`; share it with
/// `Arc<Depq<T, P>>`.
pub struct Depq<T, P> {
    inner: Mutex<DepqCore<T, P>>,
}

impl<T, P> Depq<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone,
{
    /// Creates an empty queue whose baseline priority is `P::default()`.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::from_core(DepqCore::new())
    }

    /// Creates an empty queue with the given baseline priority.
    pub fn with_start(start: P) -> Self {
        Self::from_core(DepqCore::with_start(start))
    }

    /// Creates an empty queue holding at most `max_length` entries.
    pub fn with_max_length(max_length: usize) -> Self
    where
        P: Default,
    {
        Self::from_core(DepqCore::with_max_length(max_length))
    }

    /// Returns a builder for a customised queue.
    pub fn builder() -> DepqBuilder<P>
    where
        P: Default,
    {
        DepqBuilder::new()
    }

    /// Wraps an existing core in a fresh lock.
    pub fn from_core(core: DepqCore<T, P>) -> Self {
        Self {
            inner: Mutex::new(core),
        }
    }

    /// Unwraps the queue into its core.
    pub fn into_core(self) -> DepqCore<T, P> {
        self.inner.into_inner()
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the baseline priority.
    pub fn start(&self) -> P {
        self.inner.lock().start().clone()
    }

    /// Returns the configured bound, if any.
    pub fn max_length(&self) -> Option<usize> {
        self.inner.lock().max_length()
    }

    /// Returns the item with the highest priority.
    pub fn first(&self) -> Result<T, DepqError> {
        self.inner.lock().first().cloned()
    }

    /// Returns the item with the lowest priority.
    pub fn last(&self) -> Result<T, DepqError> {
        self.inner.lock().last().cloned()
    }

    /// Returns the highest priority.
    pub fn high(&self) -> Result<P, DepqError> {
        self.inner.lock().high().cloned()
    }

    /// Returns the lowest priority.
    pub fn low(&self) -> Result<P, DepqError> {
        self.inner.lock().low().cloned()
    }

    /// Returns the entry at `index` (0 = highest priority).
    pub fn get(&self, index: usize) -> Result<(T, P), DepqError> {
        let guard = self.inner.lock();
        guard
            .get(index)
            .map(|(item, priority)| (item.clone(), priority.clone()))
    }

    /// Returns how many entries hold `item`.
    pub fn count<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.lock().count(item)
    }

    /// Returns `true` if at least one entry holds `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.lock().contains(item)
    }

    /// Returns the most frequent priority, preferring the higher one on ties.
    pub fn mode(&self) -> Option<P> {
        self.inner.lock().mode().cloned()
    }

    /// Returns the arithmetic mean of all priorities, or `None` when empty.
    pub fn mean(&self) -> Option<f64>
    where
        P: Into<f64>,
    {
        self.inner.lock().mean()
    }

    /// Returns the median priority, or `None` when empty.
    pub fn median(&self) -> Option<f64>
    where
        P: Into<f64>,
    {
        self.inner.lock().median()
    }

    /// Returns a point-in-time copy of the entries as an owning iterator.
    ///
    /// The copy is taken under the lock, so later mutations by other
    /// threads do not affect an iteration in progress.
    pub fn iter(&self) -> std::vec::IntoIter<(T, P)> {
        self.to_vec().into_iter()
    }

    /// Copies the entries into a vector, highest priority first.
    pub fn to_vec(&self) -> Vec<(T, P)> {
        self.inner.lock().to_vec()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Inserts `item` with `priority`, keeping the queue sorted.
    ///
    /// See [`DepqCore::insert`].
    pub fn insert(&self, item: T, priority: P) {
        self.inner.lock().insert(item, priority);
    }

    /// Pushes at the highest-priority end. See [`DepqCore::addfirst`].
    pub fn addfirst(&self, item: T, priority: Option<P>) -> Result<(), DepqError> {
        self.inner.lock().addfirst(item, priority)
    }

    /// Pushes at the lowest-priority end. See [`DepqCore::addlast`].
    pub fn addlast(&self, item: T, priority: Option<P>) -> Result<(), DepqError> {
        self.inner.lock().addlast(item, priority)
    }

    /// Inserts every `(item, priority)` pair in one critical section.
    pub fn extend<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (T, P)>,
    {
        self.inner.lock().extend(entries);
    }

    /// Removes and returns the highest-priority entry.
    pub fn popfirst(&self) -> Result<(T, P), DepqError> {
        self.inner.lock().popfirst()
    }

    /// Removes and returns the lowest-priority entry.
    pub fn poplast(&self) -> Result<(T, P), DepqError> {
        self.inner.lock().poplast()
    }

    /// Removes up to `count` occurrences of `item`, lowest priority first.
    ///
    /// See [`DepqCore::remove`].
    pub fn remove<Q>(&self, item: &Q, count: isize) -> Result<Vec<(T, P)>, DepqError>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.lock().remove(item, count)
    }

    /// Removes every occurrence of `item`.
    pub fn elim<Q>(&self, item: &Q) -> Vec<(T, P)>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.lock().elim(item)
    }

    /// Re-inserts the lowest-priority occurrence of `item` at `priority`.
    pub fn set_priority(&self, item: T, priority: P) -> Option<P> {
        self.inner.lock().set_priority(item, priority)
    }

    /// Replaces the lowest-priority occurrence of `old` with `new`.
    pub fn substitute<Q>(&self, old: &Q, new: T) -> Option<P>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.lock().substitute(old, new)
    }

    /// Always fails with [`DepqError::UnsupportedOperation`].
    pub fn delete_index(&self, index: usize) -> Result<(), DepqError> {
        self.inner.lock().delete_index(index)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Sets or lifts the bound, evicting immediately when shrinking.
    pub fn set_max_length(&self, max_length: Option<usize>) -> Vec<(T, P)> {
        self.inner.lock().set_max_length(max_length)
    }

    /// Signed variant of [`set_max_length`](Self::set_max_length).
    pub fn try_set_max_length(&self, max_length: i64) -> Result<Vec<(T, P)>, DepqError> {
        self.inner.lock().try_set_max_length(max_length)
    }

    // -----------------------------------------------------------------------
    // Snapshot
    // -----------------------------------------------------------------------

    /// Captures the full state as plain data.
    pub fn export_state(&self) -> DepqState<T, P> {
        self.inner.lock().export_state()
    }

    /// Rebuilds a queue behind a fresh lock; the state is not re-validated.
    pub fn import_state(state: DepqState<T, P>) -> Self {
        Self::from_core(DepqCore::import_state(state))
    }

    // -----------------------------------------------------------------------
    // Metrics & validation
    // -----------------------------------------------------------------------

    /// Returns a copy of the operation counters.
    #[cfg(feature = "metrics")]
    pub fn metrics(&self) -> DepqMetrics {
        *self.inner.lock().metrics()
    }

    /// Resets the operation counters to zero.
    #[cfg(feature = "metrics")]
    pub fn reset_metrics(&self) {
        self.inner.lock().reset_metrics();
    }

    /// Verifies ordering, frequency consistency and the length bound.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.lock().check_invariants()
    }
}

impl<T, P> Default for Depq<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Clone for Depq<T, P>
where
    T: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        let core = self.inner.lock().clone();
        Self {
            inner: Mutex::new(core),
        }
    }
}

impl<T, P> From<DepqCore<T, P>> for Depq<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone,
{
    fn from(core: DepqCore<T, P>) -> Self {
        Self::from_core(core)
    }
}

impl<T, P> FromIterator<(T, P)> for Depq<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        Self::from_core(iter.into_iter().collect())
    }
}

impl<T, P> fmt::Debug for Depq<T, P>
where
    T: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let core = self.inner.lock();
        f.debug_struct("Depq").field("inner", &*core).finish()
    }
}

impl<T, P> fmt::Display for Depq<T, P>
where
    T: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner.lock(), f)
    }
}
