//! Canonical-string keys for items that cannot be hashed.
//!
//! A DEPQ indexes its items by identity, which requires `Eq + Hash`. Types
//! such as `f64` or structs holding floats do not provide that, so they are
//! wrapped in [`Repr`], which hashes and compares by the value's `Debug`
//! rendering instead.
//!
//! Two distinct values with the same `Debug` output are treated as the same
//! item, e.g. two structs whose `Debug` impls skip a distinguishing field.
//! This is a known limitation of keying by representation.
//!
//! ```
//! use depq::{Depq, Repr};
//!
//! let depq = Depq::new();
//! depq.insert(Repr::new(1.5_f64), 3);
//! depq.insert(Repr::new(1.5_f64), 1);
//!
//! assert_eq!(depq.count(&Repr::new(1.5_f64)), 2);
//! assert_eq!(depq.first().unwrap().into_inner(), 1.5);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// Wraps a value so it is keyed by its canonical `Debug` string.
#[derive(Clone)]
pub struct Repr<T> {
    value: T,
    repr: String,
}

impl<T: fmt::Debug> Repr<T> {
    /// Wraps `value`, computing its canonical form once.
    pub fn new(value: T) -> Self {
        let repr = format!("{:?}", value);
        Self { value, repr }
    }
}

impl<T> Repr<T> {
    /// Returns the wrapped value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the canonical string the value is keyed by.
    pub fn repr(&self) -> &str {
        &self.repr
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> PartialEq for Repr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl<T> Eq for Repr<T> {}

impl<T> Hash for Repr<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.repr.hash(state);
    }
}

impl<T> fmt::Debug for Repr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl<T> fmt::Display for Repr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

impl<T: fmt::Debug> From<T> for Repr<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Repr<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Repr<T>
where
    T: serde::Deserialize<'de> + fmt::Debug,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Repr::new)
    }
}
