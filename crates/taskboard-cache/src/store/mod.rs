//! Key-value store adapter.
//!
//! [`CacheStore`] abstracts the cache backend so the policy layers can be
//! exercised against an in-memory fake in tests and against Redis in
//! production.

mod redis_store;

use async_trait::async_trait;
use shaku::Interface;
use std::time::Duration;
use taskboard_core::BoardResult;

pub use redis_store::{RedisStore, RedisStoreParameters};

/// Low-level contract against the cache backend.
///
/// Methods return `BoardResult` so callers can distinguish "key absent"
/// from "backend unreachable"; all callers in this crate absorb the error
/// case into a degraded result rather than propagating it.
///
/// Uses string payloads for type-erased storage to maintain
/// dyn-compatibility.
#[async_trait]
pub trait CacheStore: Interface + Send + Sync {
    /// Reports whether a live connection exists or could just be
    /// established. Idempotent; never errors past this boundary.
    async fn ensure_connection(&self) -> bool;

    /// Get a raw payload. Returns `None` if the key doesn't exist or has
    /// expired.
    async fn get_raw(&self, key: &str) -> BoardResult<Option<String>>;

    /// Set a raw payload with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> BoardResult<()>;

    /// Delete a key. Returns `true` if the key existed.
    async fn delete(&self, key: &str) -> BoardResult<bool>;

    /// Delete a batch of keys. Returns the number deleted.
    async fn delete_many(&self, keys: &[String]) -> BoardResult<u64>;

    /// Enumerate keys matching a glob pattern.
    async fn scan_keys(&self, pattern: &str) -> BoardResult<Vec<String>>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> BoardResult<bool>;

    /// Atomically increment an integer key, creating it at 1 if absent.
    /// Returns the post-increment value.
    async fn incr(&self, key: &str) -> BoardResult<i64>;

    /// Set the TTL of an existing key. Returns `false` if the key does
    /// not exist.
    async fn expire(&self, key: &str, ttl: Duration) -> BoardResult<bool>;

    /// Number of keys in the backing store.
    async fn db_size(&self) -> BoardResult<u64>;

    /// Backend server information, opaque to this layer.
    async fn server_info(&self) -> BoardResult<String>;

    /// Check if the store is enabled at all.
    fn is_enabled(&self) -> bool;
}
