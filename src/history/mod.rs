#[cfg(feature = "desktop")]
pub mod commands;
pub mod store;
pub mod stats;
pub mod trend;

pub use store::{HistoryLog, HISTORY_CAPACITY};
pub use stats::{
    compute_stats, export_file_name, export_json, export_records, label_counts, query_history,
    EmotionCount, ExportRecord, HistoryQuery, HistoryStats, SortKey,
};
pub use trend::{classify_trend, mood_pattern, positive_streak, Trend};
