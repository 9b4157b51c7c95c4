pub mod catalog;
#[cfg(feature = "desktop")]
pub mod commands;

pub use catalog::{
    suggestions_for, suggestions_for_label, Suggestion, SuggestionCategory, SuggestionSet,
    DEFAULT_SUGGESTIONS,
};
