//! Task projection.

use crate::{TaskId, TaskStatus, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The cacheable shape of a task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProjection {
    /// Unique identifier for the task.
    pub id: TaskId,

    /// Task title.
    pub title: String,

    /// Optional free-form description.
    pub description: Option<String>,

    /// Lifecycle status.
    pub status: TaskStatus,

    /// Identifier of the owning user.
    pub user_id: UserId,

    /// Task creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl TaskProjection {
    /// Creates a projection for a newly created task.
    #[must_use]
    pub fn new(id: TaskId, user_id: UserId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            status: TaskStatus::Open,
            user_id,
            created_at: Utc::now(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}
