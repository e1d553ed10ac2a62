//! Task status value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Task has been created but not started.
    #[default]
    Open,
    /// Task is actively being worked on.
    InProgress,
    /// Task is complete.
    Done,
}

impl TaskStatus {
    /// Checks if the task still requires work.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }

    /// Returns all statuses.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Open, Self::InProgress, Self::Done]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        let parsed: TaskStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(parsed, TaskStatus::Done);
    }

    #[test]
    fn test_is_pending() {
        assert!(TaskStatus::Open.is_pending());
        assert!(TaskStatus::InProgress.is_pending());
        assert!(!TaskStatus::Done.is_pending());
    }
}
