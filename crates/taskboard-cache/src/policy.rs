//! Per-entity cache policies.
//!
//! Writes never update the cache in place; they invalidate and let the
//! next read repopulate (cache-aside). Reads populate on miss via the
//! `*_or_populate` helpers (read-through). Writes are rare relative to
//! reads, so one cache-miss per invalidation is cheaper than keeping
//! cache and store in lockstep.

use crate::keys;
use crate::store::CacheStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use taskboard_config::CacheTtlConfig;
use taskboard_core::{BoardResult, TaskId, TaskProjection, UserId, UserProjection};
use tracing::{debug, warn};

/// Version tag carried by every cached payload. Bump when a projection's
/// shape changes so stale entries from the previous deploy read as misses
/// instead of misdecoding.
pub(crate) const SCHEMA_VERSION: u32 = 1;

/// Envelope wrapping every cached projection.
#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    v: u32,
    data: T,
}

/// Cache policy layer for user and task projections.
///
/// Every operation is infallible: a backend failure degrades a read to a
/// miss and a write to a logged no-op. Callers treat the cache as an
/// optional accelerator, never a source of errors.
pub struct ProjectionCache {
    store: Arc<dyn CacheStore>,
    ttls: CacheTtlConfig,
}

impl ProjectionCache {
    /// Creates a cache over the given store with the given TTL tuning.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>, ttls: CacheTtlConfig) -> Self {
        Self { store, ttls }
    }

    // ============ User projections ============

    /// Looks up a cached user. Backend failure and undecodable payloads
    /// both read as a miss.
    pub async fn get_user(&self, id: UserId) -> Option<UserProjection> {
        self.read(&keys::user(id)).await
    }

    /// Caches a user projection under its id.
    pub async fn set_user(&self, user: &UserProjection) {
        self.write(&keys::user(user.id), user, self.ttls.user_ttl())
            .await;
    }

    /// Drops the cached projection for a user.
    pub async fn invalidate_user(&self, id: UserId) {
        self.remove(&keys::user(id)).await;
    }

    /// Read-through lookup: returns the cached user, or runs `load`
    /// against the primary store and caches the result.
    ///
    /// Errors from `load` are data-store errors and propagate; cache
    /// failures on either side do not.
    pub async fn user_or_populate<F, Fut>(&self, id: UserId, load: F) -> BoardResult<UserProjection>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = BoardResult<UserProjection>> + Send,
    {
        self.read_or_populate(&keys::user(id), self.ttls.user_ttl(), load)
            .await
    }

    // ============ Task projections ============

    /// Looks up an individually cached task.
    pub async fn get_task(&self, id: TaskId) -> Option<TaskProjection> {
        self.read(&keys::task(id)).await
    }

    /// Caches a task projection under its id.
    pub async fn set_task(&self, task: &TaskProjection) {
        self.write(&keys::task(task.id), task, self.ttls.task_ttl())
            .await;
    }

    /// Read-through lookup for a single task.
    pub async fn task_or_populate<F, Fut>(&self, id: TaskId, load: F) -> BoardResult<TaskProjection>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = BoardResult<TaskProjection>> + Send,
    {
        self.read_or_populate(&keys::task(id), self.ttls.task_ttl(), load)
            .await
    }

    /// Drops both the task's own entry and its owner's list entry.
    ///
    /// The two deletes are issued concurrently and are not atomic across
    /// keys: if one fails, the other still takes effect and the stale
    /// entry self-corrects at TTL expiry.
    pub async fn invalidate_task(&self, task_id: TaskId, user_id: UserId) {
        let task_key = keys::task(task_id);
        let list_key = keys::task_list(user_id);
        tokio::join!(self.remove(&task_key), self.remove(&list_key));
    }

    // ============ Per-user task lists ============

    /// Looks up a user's cached task list.
    pub async fn get_task_list(&self, user_id: UserId) -> Option<Vec<TaskProjection>> {
        self.read(&keys::task_list(user_id)).await
    }

    /// Caches a user's ordered task list.
    pub async fn set_task_list(&self, user_id: UserId, tasks: &[TaskProjection]) {
        self.write(&keys::task_list(user_id), &tasks, self.ttls.task_list_ttl())
            .await;
    }

    /// Drops a user's cached task list.
    pub async fn invalidate_task_list(&self, user_id: UserId) {
        self.remove(&keys::task_list(user_id)).await;
    }

    /// Read-through lookup for a user's task list.
    pub async fn task_list_or_populate<F, Fut>(
        &self,
        user_id: UserId,
        load: F,
    ) -> BoardResult<Vec<TaskProjection>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = BoardResult<Vec<TaskProjection>>> + Send,
    {
        self.read_or_populate(&keys::task_list(user_id), self.ttls.task_list_ttl(), load)
            .await
    }

    // ============ Shared plumbing ============

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.store.get_raw(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Cache read for '{}' degraded to miss: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str::<Envelope<T>>(&raw) {
            Ok(envelope) if envelope.v == SCHEMA_VERSION => Some(envelope.data),
            Ok(envelope) => {
                debug!(
                    "Cached payload for '{}' has schema v{}, expected v{}; treating as miss",
                    key, envelope.v, SCHEMA_VERSION
                );
                None
            }
            Err(e) => {
                debug!("Undecodable cached payload for '{}': {}; treating as miss", key, e);
                None
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T, ttl: Duration) {
        let envelope = Envelope {
            v: SCHEMA_VERSION,
            data: value,
        };
        let json = match serde_json::to_string(&envelope) {
            Ok(json) => json,
            Err(e) => {
                warn!("Skipping cache write for '{}': {}", key, e);
                return;
            }
        };

        if let Err(e) = self.store.set_raw(key, &json, ttl).await {
            warn!("Cache write for '{}' dropped: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        if let Err(e) = self.store.delete(key).await {
            warn!("Cache invalidation for '{}' dropped; entry expires by TTL: {}", key, e);
        }
    }

    async fn read_or_populate<T, F, Fut>(&self, key: &str, ttl: Duration, load: F) -> BoardResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = BoardResult<T>> + Send,
    {
        if let Some(cached) = self.read::<T>(key).await {
            return Ok(cached);
        }

        let value = load().await?;
        self.write(key, &value, ttl).await;
        Ok(value)
    }
}
