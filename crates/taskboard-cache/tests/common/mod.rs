//! Common test infrastructure for cache integration tests.
//!
//! [`MemoryStore`] is an in-process [`CacheStore`] with a manually
//! advanced clock, so TTL and rate-limit-window behavior can be tested
//! without a Redis server or real sleeps. `go_offline` simulates the
//! backend becoming unreachable mid-test.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use taskboard_cache::CacheStore;
use taskboard_core::{BoardError, BoardResult};

struct Entry {
    value: String,
    expires_at_ms: Option<u64>,
}

/// In-memory cache store with an injectable clock.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<HashMap<String, Entry>>,
    now_ms: AtomicU64,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the store's clock; entries whose TTL has passed read as
    /// absent afterwards.
    pub fn advance(&self, duration: Duration) {
        self.now_ms
            .fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
    }

    /// Makes every subsequent operation fail as if the backend were
    /// unreachable.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn go_online(&self) {
        self.offline.store(false, Ordering::SeqCst);
    }

    fn guard(&self) -> BoardResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(BoardError::cache("connection refused"))
        } else {
            Ok(())
        }
    }

    fn now(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }

    fn is_live(&self, entry: &Entry) -> bool {
        entry.expires_at_ms.map_or(true, |at| at > self.now())
    }

    fn matches(pattern: &str, key: &str) -> bool {
        match pattern.split_once('*') {
            Some((prefix, suffix)) => {
                key.len() >= prefix.len() + suffix.len()
                    && key.starts_with(prefix)
                    && key.ends_with(suffix)
            }
            None => pattern == key,
        }
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn ensure_connection(&self) -> bool {
        self.guard().is_ok()
    }

    async fn get_raw(&self, key: &str) -> BoardResult<Option<String>> {
        self.guard()?;
        let mut state = self.state.lock().unwrap();
        match state.get(key) {
            Some(entry) if self.is_live(entry) => Ok(Some(entry.value.clone())),
            Some(_) => {
                state.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> BoardResult<()> {
        self.guard()?;
        let expires_at_ms = Some(self.now() + ttl.as_millis() as u64);
        self.state.lock().unwrap().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at_ms,
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> BoardResult<bool> {
        self.guard()?;
        let mut state = self.state.lock().unwrap();
        let existed = state
            .remove(key)
            .is_some_and(|entry| self.is_live(&entry));
        Ok(existed)
    }

    async fn delete_many(&self, keys: &[String]) -> BoardResult<u64> {
        self.guard()?;
        let mut state = self.state.lock().unwrap();
        let mut deleted = 0;
        for key in keys {
            if state.remove(key).is_some_and(|entry| self.is_live(&entry)) {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    async fn scan_keys(&self, pattern: &str) -> BoardResult<Vec<String>> {
        self.guard()?;
        let state = self.state.lock().unwrap();
        Ok(state
            .iter()
            .filter(|(key, entry)| self.is_live(entry) && Self::matches(pattern, key))
            .map(|(key, _)| key.clone())
            .collect())
    }

    async fn exists(&self, key: &str) -> BoardResult<bool> {
        Ok(self.get_raw(key).await?.is_some())
    }

    async fn incr(&self, key: &str) -> BoardResult<i64> {
        self.guard()?;
        let mut state = self.state.lock().unwrap();
        let (current, expires_at_ms) = match state.get(key) {
            Some(entry) if self.is_live(entry) => (
                entry.value.parse::<i64>().map_err(|_| {
                    BoardError::cache(format!("key '{}' holds a non-integer value", key))
                })?,
                entry.expires_at_ms,
            ),
            _ => (0, None),
        };
        let next = current + 1;
        state.insert(
            key.to_string(),
            Entry {
                value: next.to_string(),
                expires_at_ms,
            },
        );
        Ok(next)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> BoardResult<bool> {
        self.guard()?;
        let now = self.now();
        let mut state = self.state.lock().unwrap();
        match state.get_mut(key) {
            Some(entry) if entry.expires_at_ms.map_or(true, |at| at > now) => {
                entry.expires_at_ms = Some(now + ttl.as_millis() as u64);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn db_size(&self) -> BoardResult<u64> {
        self.guard()?;
        let state = self.state.lock().unwrap();
        Ok(state.values().filter(|entry| self.is_live(entry)).count() as u64)
    }

    async fn server_info(&self) -> BoardResult<String> {
        self.guard()?;
        Ok("store:memory".to_string())
    }
}
