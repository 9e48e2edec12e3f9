//! Day-keyed task ledger.
//!
//! Tasks live in two persisted books: the open book (`tasks.json`) and the
//! finished book (`donetasks.json`). At most one open task is `doing` at a
//! time; activating a task demotes the previous one.

use crate::error::{Result, TempoError};
use crate::storage::{self, DataDir};

use super::task::{Task, TaskStatus};

/// Open tasks file name.
pub const OPEN_FILE: &str = "tasks.json";
/// Finished tasks file name.
pub const DONE_FILE: &str = "donetasks.json";

/// The two task books plus the single-active invariant.
#[derive(Debug)]
pub struct TaskLedger {
    open: Vec<Task>,
    finished: Vec<Task>,
}

impl TaskLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            open: Vec::new(),
            finished: Vec::new(),
        }
    }

    /// Load both books from the data directory. Missing files yield empty
    /// books.
    pub fn load(dir: &DataDir) -> Result<Self> {
        let open = storage::load_json(&dir.file(OPEN_FILE))?.unwrap_or_default();
        let finished = storage::load_json(&dir.file(DONE_FILE))?.unwrap_or_default();
        Ok(Self { open, finished })
    }

    /// Save both books to the data directory.
    pub fn save(&self, dir: &DataDir) -> Result<()> {
        storage::save_json(&dir.file(OPEN_FILE), &self.open)?;
        storage::save_json(&dir.file(DONE_FILE), &self.finished)
    }

    /// Demote any task left `doing` by a previous run back to `todo`.
    ///
    /// Returns `true` when something changed and the ledger needs saving.
    pub fn recover_startup(&mut self) -> bool {
        let mut changed = false;
        for task in self.open.iter_mut() {
            if task.status == TaskStatus::Doing {
                task.status = TaskStatus::Todo;
                changed = true;
            }
        }
        changed
    }

    /// Add a new todo task for the given day.
    pub fn add(&mut self, title: &str, day: &str) -> &Task {
        let task = Task::new(title, day);
        self.open.push(task);
        self.open.last().expect("just pushed")
    }

    /// Mark the named task `doing`, demoting the previous active task.
    ///
    /// # Errors
    ///
    /// `TaskAlreadyActive` when the task is already `doing`, `TaskNotFound`
    /// when no open task carries the title.
    pub fn activate(&mut self, title: &str) -> Result<&Task> {
        let index = self
            .open
            .iter()
            .position(|t| t.title == title)
            .ok_or_else(|| TempoError::TaskNotFound {
                title: title.to_string(),
            })?;

        if self.open[index].status == TaskStatus::Doing {
            return Err(TempoError::TaskAlreadyActive {
                title: title.to_string(),
            });
        }

        for task in self.open.iter_mut() {
            if task.status == TaskStatus::Doing {
                task.status = TaskStatus::Todo;
            }
        }
        self.open[index].status = TaskStatus::Doing;
        Ok(&self.open[index])
    }

    /// Demote the named task from `doing` back to `todo`.
    pub fn pause(&mut self, title: &str) -> Result<()> {
        for task in self.open.iter_mut() {
            if task.title == title && task.status == TaskStatus::Doing {
                task.status = TaskStatus::Todo;
                return Ok(());
            }
        }
        Err(TempoError::TaskNotActive {
            title: title.to_string(),
        })
    }

    /// Move the named task from the open book to the finished book.
    pub fn finish(&mut self, title: &str) -> Result<&Task> {
        let index = self
            .open
            .iter()
            .position(|t| t.title == title)
            .ok_or_else(|| TempoError::TaskNotFound {
                title: title.to_string(),
            })?;

        let mut task = self.open.remove(index);
        task.status = TaskStatus::Done;
        self.finished.push(task);
        Ok(self.finished.last().expect("just pushed"))
    }

    /// Delete the named task from the open book.
    pub fn remove(&mut self, title: &str) -> Result<()> {
        let before = self.open.len();
        self.open.retain(|t| t.title != title);
        if self.open.len() == before {
            return Err(TempoError::TaskNotFound {
                title: title.to_string(),
            });
        }
        Ok(())
    }

    /// Tasks created on the given day, from the open or finished book.
    pub fn for_day(&self, day: &str, finished: bool) -> Vec<&Task> {
        let book = if finished { &self.finished } else { &self.open };
        book.iter()
            .filter(|t| t.created_at.starts_with(day))
            .collect()
    }

    /// The task currently `doing`, if any.
    pub fn active(&self) -> Option<&Task> {
        self.open.iter().find(|t| t.status == TaskStatus::Doing)
    }

    /// Accrue focus seconds into the active task.
    ///
    /// Returns `true` when a task was accruing and the ledger needs saving.
    pub fn tick(&mut self, secs: u64) -> bool {
        for task in self.open.iter_mut() {
            if task.status == TaskStatus::Doing {
                task.time_spent += secs;
                return true;
            }
        }
        false
    }

    /// All open tasks.
    pub fn open_tasks(&self) -> &[Task] {
        &self.open
    }

    /// All finished tasks.
    pub fn finished_tasks(&self) -> &[Task] {
        &self.finished
    }
}

impl Default for TaskLedger {
    fn default() -> Self {
        Self::new()
    }
}
