//! depq: a thread-safe double-ended priority queue.
//!
//! Entries are `(item, priority)` pairs kept sorted from highest to lowest
//! priority. Both ends are reachable in O(1), arbitrary insertion uses a
//! rotation-based search over a ring buffer, and an item frequency index
//! answers membership and count queries in O(1). Depending on how it is
//! fed, the same container acts as a max-priority queue, a min-priority
//! queue, a FIFO or a LIFO.
//!
//! ```
//! use depq::Depq;
//!
//! let depq = Depq::new();
//! depq.insert("write", 2);
//! depq.insert("read", 5);
//! depq.insert("flush", 1);
//!
//! assert_eq!(depq.popfirst(), Ok(("read", 5)));
//! assert_eq!(depq.poplast(), Ok(("flush", 1)));
//! assert_eq!(depq.len(), 1);
//! ```
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod ds;
pub mod error;
pub mod key;
pub mod queue;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;

pub use error::{DepqError, End, InvariantError};
pub use key::Repr;
pub use queue::{Depq, DepqBuilder, DepqCore, DepqState};
