//! Redis-backed store adapter.

use super::CacheStore;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use taskboard_core::{BoardError, BoardResult};
use tracing::debug;

/// Redis-backed implementation of [`CacheStore`].
///
/// The deadpool pool is the process-wide, lazily-initialized connection
/// handle: nothing connects until the first checkout, checkouts are
/// idempotent, and a closed connection is replaced by the pool on the
/// next checkout. The pool is injected at construction so tests can run
/// against a fake store instead.
#[derive(Component)]
#[shaku(interface = CacheStore)]
pub struct RedisStore {
    /// Redis connection pool; `None` when Redis is disabled.
    pool: Option<Arc<Pool>>,
}

impl RedisStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a store from Redis settings, or a disabled store if Redis
    /// is turned off in configuration.
    pub fn from_config(config: &taskboard_config::RedisConfig) -> BoardResult<Self> {
        if !config.enabled {
            return Ok(Self::disabled());
        }

        let redis_cfg = deadpool_redis::Config::from_url(&config.url);
        let pool = redis_cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| BoardError::Cache(format!("Failed to create Redis pool: {}", e)))?;

        Ok(Self::new(Arc::new(pool)))
    }

    /// Create a no-op store (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> BoardResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| BoardError::Cache(format!("Failed to get Redis connection: {}", e))),
            None => Err(BoardError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn ensure_connection(&self) -> bool {
        let Ok(mut conn) = self.get_conn().await else {
            return false;
        };

        let pong: Result<String, _> = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await;
        pong.is_ok()
    }

    async fn get_raw(&self, key: &str) -> BoardResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> BoardResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> BoardResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn delete_many(&self, keys: &[String]) -> BoardResult<u64> {
        if !self.is_enabled() || keys.is_empty() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(keys)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to delete keys: {}", e)))?;

        debug!("Deleted {} of {} keys", deleted, keys.len());
        Ok(deleted as u64)
    }

    async fn scan_keys(&self, pattern: &str) -> BoardResult<Vec<String>> {
        if !self.is_enabled() {
            return Ok(Vec::new());
        }

        let mut conn = self.get_conn().await?;

        // Use KEYS to find matching keys (SCAN would be better for production)
        let keys: Vec<String> = deadpool_redis::redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut conn)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to scan keys: {}", e)))?;

        Ok(keys)
    }

    async fn exists(&self, key: &str) -> BoardResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to check key '{}': {}", key, e)))?;

        Ok(exists)
    }

    async fn incr(&self, key: &str) -> BoardResult<i64> {
        if !self.is_enabled() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;
        let count: i64 = conn
            .incr(key, 1)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to increment key '{}': {}", key, e)))?;

        Ok(count)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> BoardResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let set: bool = conn
            .expire(key, ttl.as_secs().max(1) as i64)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to expire key '{}': {}", key, e)))?;

        Ok(set)
    }

    async fn db_size(&self) -> BoardResult<u64> {
        let mut conn = self.get_conn().await?;
        let size: i64 = deadpool_redis::redis::cmd("DBSIZE")
            .query_async(&mut conn)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to read DBSIZE: {}", e)))?;

        Ok(size as u64)
    }

    async fn server_info(&self) -> BoardResult<String> {
        let mut conn = self.get_conn().await?;
        let info: String = deadpool_redis::redis::cmd("INFO")
            .arg("server")
            .query_async(&mut conn)
            .await
            .map_err(|e| BoardError::Cache(format!("Failed to read INFO: {}", e)))?;

        Ok(info)
    }
}
