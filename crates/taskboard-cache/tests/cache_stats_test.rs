//! Integration tests for cache introspection.

mod common;

use common::MemoryStore;
use std::sync::Arc;
use taskboard_cache::{CacheMonitor, ProjectionCache, StoreHealth};
use taskboard_config::CacheTtlConfig;
use taskboard_core::{Role, UserId, UserProjection};

#[tokio::test]
async fn stats_report_connectivity_and_size() {
    let store = Arc::new(MemoryStore::new());
    let cache = ProjectionCache::new(store.clone(), CacheTtlConfig::default());
    let monitor = CacheMonitor::new(store.clone());

    let user = UserProjection::new(UserId::new(), "a@example.com", "Alice", Role::Regular);
    cache.set_user(&user).await;

    let stats = monitor.stats().await;
    assert!(stats.connected);
    assert_eq!(stats.db_size, Some(1));
    assert!(stats.error.is_none());
}

#[tokio::test]
async fn stats_report_unreachable_backend_without_erroring() {
    let store = Arc::new(MemoryStore::new());
    let monitor = CacheMonitor::new(store.clone());

    store.go_offline();
    let stats = monitor.stats().await;
    assert!(!stats.connected);
    assert!(stats.error.is_some());
    assert!(stats.db_size.is_none());
}

#[tokio::test]
async fn health_tracks_reachability() {
    let store = Arc::new(MemoryStore::new());
    let monitor = CacheMonitor::new(store.clone());

    assert_eq!(monitor.health().await, StoreHealth::Healthy);
    store.go_offline();
    assert_eq!(monitor.health().await, StoreHealth::Unhealthy);
    store.go_online();
    assert_eq!(monitor.health().await, StoreHealth::Healthy);
}
