//! Issued-session registry.
//!
//! Tracks which (user, token id) pairs currently hold a live session so
//! that password resets, role changes, logouts, and account deletions can
//! revoke tokens before they expire on their own.

use crate::keys;
use crate::store::CacheStore;
use std::sync::Arc;
use std::time::Duration;
use taskboard_core::{TokenId, UserId};
use tracing::{debug, warn};

/// Session membership store keyed by `session:{userId}:{tokenId}`.
///
/// Validation is **fail-open**: when the cache backend is unreachable a
/// session is treated as valid rather than locking every user out for the
/// duration of the outage. Revocation guarantees are weakened during an
/// outage, bounded by the session TTL. Do not "fix" this into fail-closed
/// behavior; it changes the availability characteristics of the whole
/// service.
pub struct SessionRegistry {
    store: Arc<dyn CacheStore>,
    horizon: Duration,
}

impl SessionRegistry {
    /// Creates a registry whose sessions expire after `horizon`, which
    /// must equal token validity.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>, horizon: Duration) -> Self {
        Self { store, horizon }
    }

    /// Records an issued session. Re-login with the same token id
    /// overwrites the existing marker and refreshes its TTL.
    pub async fn store_session(&self, user_id: UserId, token_id: TokenId, token: &str) {
        let key = keys::session(user_id, token_id);
        if let Err(e) = self.store.set_raw(&key, token, self.horizon).await {
            warn!("Failed to record session '{}': {}", key, e);
        }
    }

    /// Checks whether a session is still live. Fail-open on backend
    /// failure.
    pub async fn validate_session(&self, user_id: UserId, token_id: TokenId) -> bool {
        if !self.store.is_enabled() {
            debug!("Session store disabled; treating session as valid");
            return true;
        }

        let key = keys::session(user_id, token_id);
        match self.store.exists(&key).await {
            Ok(live) => live,
            Err(e) => {
                warn!("Session check for '{}' failed open: {}", key, e);
                true
            }
        }
    }

    /// Revokes a single session, as on logout.
    pub async fn revoke_session(&self, user_id: UserId, token_id: TokenId) {
        let key = keys::session(user_id, token_id);
        if let Err(e) = self.store.delete(&key).await {
            warn!("Failed to revoke session '{}'; it expires by TTL: {}", key, e);
        }
    }

    /// Revokes every session of one user, forcing re-authentication after
    /// a password reset, role change, or account deletion.
    ///
    /// Enumeration and deletion are two steps; a session created between
    /// them survives. The race is narrow and bounded by the session TTL.
    pub async fn revoke_all_sessions(&self, user_id: UserId) {
        let pattern = keys::session_pattern(user_id);
        let session_keys = match self.store.scan_keys(&pattern).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Failed to enumerate sessions for user {}: {}", user_id, e);
                return;
            }
        };

        if session_keys.is_empty() {
            return;
        }

        match self.store.delete_many(&session_keys).await {
            Ok(revoked) => debug!("Revoked {} sessions for user {}", revoked, user_id),
            Err(e) => warn!(
                "Failed to revoke {} sessions for user {}; they expire by TTL: {}",
                session_keys.len(),
                user_id,
                e
            ),
        }
    }
}
