pub use crate::ds::{FrequencyIndex, RotatingRing};
pub use crate::error::{DepqError, End, InvariantError};
pub use crate::key::Repr;
#[cfg(feature = "metrics")]
pub use crate::metrics::DepqMetrics;
pub use crate::queue::{Depq, DepqBuilder, DepqCore, DepqState};
