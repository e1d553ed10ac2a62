//! User projection.

use crate::{Role, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The cacheable shape of a user row.
///
/// Carries only the fields the read path serves; the password hash and
/// other sensitive columns never leave the relational store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProjection {
    /// Unique identifier for the user.
    pub id: UserId,

    /// User's email address.
    pub email: String,

    /// Display name shown in the UI.
    pub display_name: String,

    /// User's role.
    pub role: Role,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl UserProjection {
    /// Creates a projection with the given details.
    #[must_use]
    pub fn new(id: UserId, email: impl Into<String>, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: display_name.into(),
            role,
            created_at: Utc::now(),
        }
    }
}
