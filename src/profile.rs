//! Lifetime usage counters.
//!
//! The profile records how much the user has accomplished across all
//! sessions. Loaded with defaults when absent, saved on every increment.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{self, DataDir};

/// Profile file name inside the data directory.
pub const PROFILE_FILE: &str = "profile.json";

/// Lifetime counters for the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Tasks moved to the finished book.
    #[serde(default)]
    pub tasks_done: u64,

    /// Completed pomodoro work sessions.
    #[serde(default)]
    pub pomodoros_done: u64,

    /// Total focus seconds accrued while a task was active.
    #[serde(default)]
    pub seconds_tracked: u64,
}

impl Profile {
    /// Load the profile, defaulting all counters when the file is absent.
    pub fn load(dir: &DataDir) -> Result<Self> {
        Ok(storage::load_json(&dir.file(PROFILE_FILE))?.unwrap_or_default())
    }

    /// Save the profile.
    pub fn save(&self, dir: &DataDir) -> Result<()> {
        storage::save_json(&dir.file(PROFILE_FILE), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_missing_file_yields_zero_counters() {
        let temp = TempDir::new().unwrap();
        let profile = Profile::load(&DataDir::at(temp.path())).unwrap();
        assert_eq!(profile.tasks_done, 0);
        assert_eq!(profile.pomodoros_done, 0);
        assert_eq!(profile.seconds_tracked, 0);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let dir = DataDir::at(temp.path());

        let profile = Profile {
            tasks_done: 3,
            pomodoros_done: 7,
            seconds_tracked: 1500,
        };
        profile.save(&dir).unwrap();

        let loaded = Profile::load(&dir).unwrap();
        assert_eq!(loaded.tasks_done, 3);
        assert_eq!(loaded.pomodoros_done, 7);
        assert_eq!(loaded.seconds_tracked, 1500);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let temp = TempDir::new().unwrap();
        let dir = DataDir::at(temp.path());
        std::fs::write(dir.file(PROFILE_FILE), "{\"tasks_done\": 2}").unwrap();

        let loaded = Profile::load(&dir).unwrap();
        assert_eq!(loaded.tasks_done, 2);
        assert_eq!(loaded.pomodoros_done, 0);
    }
}
