//! DEPQ containers.
//!
//! - [`DepqCore`]: single-threaded container; every algorithm lives here.
//! - [`Depq`]: thread-safe wrapper, one `parking_lot::Mutex` per instance.
//! - [`DepqBuilder`]: configuration for both.
//! - [`DepqState`]: plain-data export/import form.

pub mod builder;
pub mod concurrent;
pub mod core;
pub mod snapshot;

pub use builder::DepqBuilder;
pub use concurrent::Depq;
pub use self::core::{DepqCore, IntoIter, Iter};
pub use snapshot::DepqState;
