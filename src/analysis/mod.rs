#[cfg(feature = "desktop")]
pub mod commands;
pub mod sampler;
pub mod weights;

pub use sampler::{sample, EmotionSampler, FALLBACK_EMOTION};
pub use weights::WeightTable;
