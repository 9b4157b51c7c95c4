pub mod emotion;
pub mod sample;
pub mod user;

pub use emotion::{emotion_catalog, Emotion, EmotionInfo};
pub use sample::{EmotionSample, MAX_CONFIDENCE};
pub use user::{Account, PublicUser};
