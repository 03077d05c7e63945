//! Error types for the depq library.
//!
//! ## Key Components
//!
//! - [`DepqError`]: Returned by container operations that violate their
//!   contract (popping an empty queue, out-of-order `addfirst`, ...).
//! - [`End`]: Which end of the queue an [`DepqError::OrderViolation`] refers to.
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods).
//!
//! Failed operations never leave partial mutations behind: the queue is in
//! the same state as before the call.
//!
//! ## Example Usage
//!
//! ```
//! use depq::{Depq, DepqError};
//!
//! let depq: Depq<&str, i32> = Depq::new();
//! assert_eq!(depq.popfirst(), Err(DepqError::EmptyContainer));
//!
//! depq.addfirst("x", Some(7)).unwrap();
//! assert!(matches!(
//!     depq.addfirst("y", Some(6)),
//!     Err(DepqError::OrderViolation { .. })
//! ));
//! ```

use std::fmt;

use thiserror::Error;

// ---------------------------------------------------------------------------
// DepqError
// ---------------------------------------------------------------------------

/// End of the queue an ordered push targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {
    /// Highest-priority end (index 0).
    Front,
    /// Lowest-priority end (index `len - 1`).
    Back,
}

impl fmt::Display for End {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            End::Front => f.write_str("front"),
            End::Back => f.write_str("back"),
        }
    }
}

/// Error returned by DEPQ operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepqError {
    /// Peek or pop on a queue with no entries.
    #[error("DEPQ is empty")]
    EmptyContainer,

    /// Indexed access outside `[0, len)`.
    #[error("DEPQ has no index {index} (length {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Queue length at the time of the request.
        len: usize,
    },

    /// An explicit priority would break the ordering at `end`.
    #[error("priority would break ordering at the {end} of the DEPQ")]
    OrderViolation {
        /// End the entry was pushed to.
        end: End,
    },

    /// A count or length argument that cannot be used as one.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation the container refuses to perform.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal DEPQ invariants are violated.
///
/// Produced by `check_invariants` on
/// [`DepqCore`](crate::DepqCore::check_invariants) and
/// [`Depq`](crate::Depq::check_invariants). The message names the broken
/// property and where it broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvariantError(String);

impl InvariantError {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
