//! Value-level export/import of a DEPQ.
//!
//! [`DepqState`] captures everything a container owns except its lock: the
//! ordered entries, the frequency map and the configuration scalars. It is
//! the only way to move a DEPQ across process boundaries; with the `serde`
//! feature it can be written to any serde format.
//!
//! Importing trusts the state: ordering and frequency consistency are not
//! re-validated. Use [`DepqCore::check_invariants`](crate::DepqCore::check_invariants)
//! on the result if the source is untrusted.
//!
//! ## Example Usage
//!
//! ```
//! use depq::Depq;
//!
//! let depq = Depq::new();
//! depq.insert("a", 3);
//! depq.insert("b", 1);
//!
//! let state = depq.export_state();
//! assert_eq!(state.entries, vec![("a", 3), ("b", 1)]);
//!
//! let copy = Depq::import_state(state);
//! assert_eq!(copy.to_vec(), depq.to_vec());
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Plain-data snapshot of a DEPQ.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepqState<T, P>
where
    T: Eq + Hash,
{
    /// Entries from highest to lowest priority.
    pub entries: Vec<(T, P)>,
    /// Occurrence count per distinct item.
    pub frequencies: FxHashMap<T, usize>,
    /// Priority used by `addfirst`/`addlast` on an empty queue.
    pub start: P,
    /// Optional bound on the number of entries.
    pub max_length: Option<usize>,
}

impl<T, P> DepqState<T, P>
where
    T: Eq + Hash,
{
    /// Returns the number of entries captured.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries were captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
