//! Task entity.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Workflow status of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Waiting to be worked on.
    Todo,
    /// The single task currently being worked on.
    Doing,
    /// Finished and moved to the done book.
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Doing => "doing",
            TaskStatus::Done => "done",
        };
        f.write_str(s)
    }
}

/// A tracked task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier.
    pub id: String,
    /// Display title, also the handle users type in commands.
    pub title: String,
    /// Day key of creation (`YYYY-MM-DD`).
    pub created_at: String,
    /// Current workflow status.
    pub status: TaskStatus,
    /// Accumulated focus time in whole seconds.
    pub time_spent: u64,
}

impl Task {
    /// Create a new todo task for the given day.
    pub fn new(title: &str, day: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            created_at: day.to_string(),
            status: TaskStatus::Todo,
            time_spent: 0,
        }
    }
}

/// Day key for the current local date (`YYYY-MM-DD`).
pub fn today_key() -> String {
    Local::now().date_naive().to_string()
}
