//! Configuration builder for DEPQ containers.
//!
//! ## Example
//!
//! ```rust
//! use depq::DepqBuilder;
//!
//! let depq = DepqBuilder::new()
//!     .start(10)
//!     .max_length(3)
//!     .capacity(16)
//!     .build::<&str>();
//!
//! depq.addfirst("boot", None).unwrap();
//! assert_eq!(depq.high(), Ok(10));
//! assert_eq!(depq.max_length(), Some(3));
//! ```

use std::hash::Hash;

use crate::queue::concurrent::Depq;
use crate::queue::core::DepqCore;

/// Builder for [`Depq`] and [`DepqCore`].
///
/// Defaults: `start = P::default()`, no length bound, no preallocation.
#[derive(Debug, Clone)]
pub struct DepqBuilder<P> {
    start: P,
    max_length: Option<usize>,
    capacity: usize,
}

impl<P: Default> DepqBuilder<P> {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self {
            start: P::default(),
            max_length: None,
            capacity: 0,
        }
    }
}

impl<P: Default> Default for DepqBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> DepqBuilder<P> {
    /// Baseline priority for `addfirst`/`addlast` on an empty queue.
    pub fn start(mut self, start: P) -> Self {
        self.start = start;
        self
    }

    /// Upper bound on the number of entries.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Number of entries to preallocate room for.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builds a single-threaded [`DepqCore`].
    pub fn build_core<T>(self) -> DepqCore<T, P>
    where
        T: Eq + Hash + Clone,
        P: PartialOrd + Clone,
    {
        let capacity = match self.max_length {
            Some(max) => self.capacity.min(max),
            None => self.capacity,
        };
        DepqCore::with_config(self.start, self.max_length, capacity)
    }

    /// Builds a thread-safe [`Depq`].
    pub fn build<T>(self) -> Depq<T, P>
    where
        T: Eq + Hash + Clone,
        P: PartialOrd + Clone,
    {
        Depq::from_core(self.build_core())
    }
}
