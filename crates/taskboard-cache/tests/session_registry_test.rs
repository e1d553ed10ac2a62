//! Integration tests for the session registry.

mod common;

use common::MemoryStore;
use std::sync::Arc;
use std::time::Duration;
use taskboard_cache::SessionRegistry;
use taskboard_core::{TokenId, UserId};

const HORIZON: Duration = Duration::from_secs(7 * 86_400);

fn registry_over(store: &Arc<MemoryStore>) -> SessionRegistry {
    SessionRegistry::new(store.clone(), HORIZON)
}

#[tokio::test]
async fn stored_session_validates_until_revoked() {
    let store = Arc::new(MemoryStore::new());
    let registry = registry_over(&store);
    let user_id = UserId::new();
    let token_id = TokenId::new();

    registry.store_session(user_id, token_id, "jwt-opaque").await;
    assert!(registry.validate_session(user_id, token_id).await);

    registry.revoke_session(user_id, token_id).await;
    assert!(!registry.validate_session(user_id, token_id).await);
}

#[tokio::test]
async fn unknown_session_is_invalid() {
    let store = Arc::new(MemoryStore::new());
    let registry = registry_over(&store);
    assert!(!registry.validate_session(UserId::new(), TokenId::new()).await);
}

#[tokio::test]
async fn re_login_with_same_token_id_is_idempotent() {
    let store = Arc::new(MemoryStore::new());
    let registry = registry_over(&store);
    let user_id = UserId::new();
    let token_id = TokenId::new();

    registry.store_session(user_id, token_id, "first").await;
    registry.store_session(user_id, token_id, "second").await;
    assert!(registry.validate_session(user_id, token_id).await);
}

#[tokio::test]
async fn sessions_self_expire_at_the_horizon() {
    let store = Arc::new(MemoryStore::new());
    let registry = registry_over(&store);
    let user_id = UserId::new();
    let token_id = TokenId::new();

    registry.store_session(user_id, token_id, "jwt-opaque").await;
    store.advance(HORIZON + Duration::from_secs(1));
    assert!(!registry.validate_session(user_id, token_id).await);
}

#[tokio::test]
async fn revoke_all_clears_one_user_only() {
    let store = Arc::new(MemoryStore::new());
    let registry = registry_over(&store);
    let alice = UserId::new();
    let bob = UserId::new();
    let alice_tokens = [TokenId::new(), TokenId::new(), TokenId::new()];
    let bob_token = TokenId::new();

    for token_id in alice_tokens {
        registry.store_session(alice, token_id, "jwt-opaque").await;
    }
    registry.store_session(bob, bob_token, "jwt-opaque").await;

    registry.revoke_all_sessions(alice).await;

    for token_id in alice_tokens {
        assert!(!registry.validate_session(alice, token_id).await);
    }
    assert!(registry.validate_session(bob, bob_token).await);
}

#[tokio::test]
async fn validation_fails_open_when_store_is_unreachable() {
    let store = Arc::new(MemoryStore::new());
    let registry = registry_over(&store);
    let user_id = UserId::new();
    let token_id = TokenId::new();

    store.go_offline();
    assert!(registry.validate_session(user_id, token_id).await);

    // Stores and revocations while offline are silent no-ops.
    registry.store_session(user_id, token_id, "jwt-opaque").await;
    registry.revoke_all_sessions(user_id).await;

    store.go_online();
    assert!(!registry.validate_session(user_id, token_id).await);
}
