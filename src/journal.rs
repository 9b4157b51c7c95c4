use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tokio::{sync::Mutex, time};

use crate::{
    analysis::EmotionSampler,
    history::{
        classify_trend, compute_stats, mood_pattern, positive_streak, HistoryLog, HistoryStats,
        Trend,
    },
    log_info,
    models::{Emotion, EmotionSample},
    storage::{load_json, save_json, KeyValueStore, HISTORY_KEY},
};

const ENABLE_LOGS: bool = true;
const RECENT_ACTIVITY: usize = 5;

#[derive(Debug, Default)]
struct JournalState {
    history: HistoryLog,
    /// Result of the latest analysis in this process; not persisted.
    current: Option<EmotionSample>,
}

/// Everything the dashboard renders in one round trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub stats: HistoryStats,
    pub trend: Trend,
    pub current: Option<EmotionSample>,
    pub recent: Vec<EmotionSample>,
    pub mood_pattern: Vec<Emotion>,
    pub positive_streak: bool,
}

/// Owns the history log and writes it back to the store after every change.
pub struct MoodJournal<S> {
    store: S,
    sampler: EmotionSampler,
    state: Mutex<JournalState>,
}

impl<S: KeyValueStore> MoodJournal<S> {
    pub async fn load(store: S, sampler: EmotionSampler) -> Result<Self> {
        let history = load_json::<Vec<EmotionSample>, _>(&store, HISTORY_KEY)
            .await?
            .map(HistoryLog::from_entries)
            .unwrap_or_default();

        log_info!("Journal restored with {} entries", history.len());

        Ok(Self {
            store,
            sampler,
            state: Mutex::new(JournalState {
                history,
                current: None,
            }),
        })
    }

    /// Prepend `sample` and persist. On a failed write nothing changes.
    pub async fn record(&self, sample: EmotionSample) -> Result<EmotionSample> {
        let mut state = self.state.lock().await;
        let next = state.history.append(sample.clone());
        save_json(&self.store, HISTORY_KEY, &next).await?;

        state.history = next;
        state.current = Some(sample.clone());
        Ok(sample)
    }

    /// Wait out the simulated analysis latency, then draw and record a sample.
    pub async fn analyze(&self, delay: Duration) -> Result<EmotionSample> {
        if !delay.is_zero() {
            time::sleep(delay).await;
        }
        let sample = self.sampler.sample();
        log_info!(
            "Analysis produced {} ({}%)",
            sample.label,
            sample.confidence
        );
        self.record(sample).await
    }

    pub async fn clear(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        self.store.remove(HISTORY_KEY).await?;
        state.history = state.history.clear();
        log_info!("Emotion history cleared");
        Ok(())
    }

    pub async fn history(&self) -> HistoryLog {
        self.state.lock().await.history.clone()
    }

    pub async fn current(&self) -> Option<EmotionSample> {
        self.state.lock().await.current.clone()
    }

    pub async fn trend(&self) -> Trend {
        classify_trend(self.state.lock().await.history.entries())
    }

    /// `today` is the local calendar date used for the "today" counter.
    pub async fn overview(&self, today: NaiveDate) -> DashboardOverview {
        let state = self.state.lock().await;
        let entries = state.history.entries();
        DashboardOverview {
            stats: compute_stats(entries, today),
            trend: classify_trend(entries),
            current: state.current.clone(),
            recent: state.history.recent(RECENT_ACTIVITY).to_vec(),
            mood_pattern: mood_pattern(entries),
            positive_streak: positive_streak(entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use chrono::{Local, Utc};

    use super::*;
    use crate::{history::HISTORY_CAPACITY, storage::MemoryStore};

    async fn journal(store: &MemoryStore) -> MoodJournal<MemoryStore> {
        MoodJournal::load(store.clone(), EmotionSampler::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn starts_empty_without_state() {
        let store = MemoryStore::new();
        let journal = journal(&store).await;
        assert!(journal.history().await.is_empty());
        assert_eq!(journal.current().await, None);
        assert_eq!(journal.trend().await, Trend::Stable);
    }

    #[tokio::test]
    async fn malformed_state_loads_empty() {
        let store = MemoryStore::new();
        store.set(HISTORY_KEY, "[{\"broken\":".into()).await.unwrap();
        let journal = journal(&store).await;
        assert!(journal.history().await.is_empty());
    }

    #[tokio::test]
    async fn every_mutation_is_persisted() {
        let store = MemoryStore::new();
        let journal = journal(&store).await;

        let first = journal.analyze(Duration::ZERO).await.unwrap();
        let second = journal
            .record(EmotionSample::new(Emotion::Sad, 70, Utc::now()))
            .await
            .unwrap();
        assert_eq!(journal.current().await, Some(second.clone()));

        let reloaded = MoodJournal::load(store.clone(), EmotionSampler::default())
            .await
            .unwrap();
        let history = reloaded.history().await;
        assert_eq!(history.entries(), &[second, first]);
        assert_eq!(reloaded.current().await, None);

        journal.clear().await.unwrap();
        assert!(journal.history().await.is_empty());
        assert_eq!(store.raw(HISTORY_KEY), None);
    }

    #[tokio::test]
    async fn persisted_history_stays_capped() {
        let store = MemoryStore::new();
        let journal = journal(&store).await;
        for _ in 0..(HISTORY_CAPACITY + 5) {
            journal.analyze(Duration::ZERO).await.unwrap();
        }
        let persisted: Vec<EmotionSample> =
            serde_json::from_str(&store.raw(HISTORY_KEY).unwrap()).unwrap();
        assert_eq!(persisted.len(), HISTORY_CAPACITY);
        assert_eq!(journal.history().await.len(), HISTORY_CAPACITY);
    }

    #[tokio::test]
    async fn overview_summarizes_recent_activity() {
        let store = MemoryStore::new();
        let journal = journal(&store).await;
        for label in [
            Emotion::Sad,
            Emotion::Neutral,
            Emotion::Angry,
            Emotion::Excited,
            Emotion::Relaxed,
            Emotion::Happy,
        ] {
            journal
                .record(EmotionSample::new(label, 80, Utc::now()))
                .await
                .unwrap();
        }

        let overview = journal.overview(Local::now().date_naive()).await;
        assert_eq!(overview.stats.total, 6);
        assert_eq!(overview.trend, Trend::Improving);
        assert_eq!(overview.recent.len(), 5);
        assert_eq!(overview.recent[0].label, Emotion::Happy);
        assert_eq!(overview.mood_pattern[4], Emotion::Neutral);
        assert!(overview.positive_streak);
        assert_eq!(overview.current.map(|s| s.label), Some(Emotion::Happy));
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        async fn set(&self, key: &str, _value: String) -> Result<()> {
            Err(anyhow!("store is read-only, cannot write '{key}'"))
        }

        async fn remove(&self, key: &str) -> Result<()> {
            Err(anyhow!("store is read-only, cannot remove '{key}'"))
        }
    }

    #[tokio::test]
    async fn failed_write_leaves_state_untouched() {
        let journal = MoodJournal::load(ReadOnlyStore, EmotionSampler::default())
            .await
            .unwrap();
        assert!(journal.analyze(Duration::ZERO).await.is_err());
        assert!(journal.history().await.is_empty());
        assert_eq!(journal.current().await, None);
    }
}
