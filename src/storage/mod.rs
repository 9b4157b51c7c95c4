//! Key/value persistence capability shared by the journal and accounts.
//!
//! Callers never reach for a global store; they are handed something that
//! implements [`KeyValueStore`]. [`MemoryStore`] backs tests and throwaway
//! sessions, [`crate::db::Database`] backs the desktop app.

use std::{
    collections::HashMap,
    future::Future,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};

use crate::{log_warn, utils::lock_or_recover};

const ENABLE_LOGS: bool = true;

pub const USERS_KEY: &str = "users";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const HISTORY_KEY: &str = "emotionHistory";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<()>> + Send;

    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the raw stored value, bypassing async plumbing.
    pub fn raw(&self, key: &str) -> Option<String> {
        lock_or_recover(&self.entries).get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(lock_or_recover(&self.entries).get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        lock_or_recover(&self.entries).insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        lock_or_recover(&self.entries).remove(key);
        Ok(())
    }
}

/// Read and decode `key`. Values that fail to decode are discarded and
/// reported as absent.
pub async fn load_json<T, S>(store: &S, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            log_warn!("Discarding malformed value under '{key}': {err}");
            store.remove(key).await?;
            Ok(None)
        }
    }
}

pub async fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore,
{
    let serialized = serde_json::to_string(value)
        .with_context(|| format!("failed to serialize value for '{key}'"))?;
    store.set(key, serialized).await
}
