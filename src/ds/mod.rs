pub mod frequency_index;
pub mod rotating_ring;

pub use frequency_index::FrequencyIndex;
pub use rotating_ring::RotatingRing;
