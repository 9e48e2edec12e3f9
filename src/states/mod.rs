//! Work-state registry.
//!
//! A work state is a named context ("deep work", "meetings") that accumulates
//! focus time. States are persisted in `states.json` in creation order.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::error::{Result, TempoError};
use crate::storage::{self, DataDir};

/// States file name inside the data directory.
pub const STATES_FILE: &str = "states.json";

/// A named work context with accumulated focus time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkState {
    pub id: Uuid,
    pub name: String,
    /// Total accumulated time. Persisted as whole seconds.
    #[serde(with = "seconds")]
    pub total_time: Duration,
}

impl WorkState {
    /// Create a state with a fresh id and zero accumulated time.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            total_time: Duration::from_secs(0),
        }
    }
}

/// Duration codec: whole seconds on the wire, sub-second remainder dropped.
mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// The persisted collection of work states.
#[derive(Debug, Default)]
pub struct StateRegistry {
    states: Vec<WorkState>,
}

impl StateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry. A missing file yields an empty registry and
    /// creates the file.
    pub fn load(dir: &DataDir) -> Result<Self> {
        match storage::load_json(&dir.file(STATES_FILE))? {
            Some(states) => Ok(Self { states }),
            None => {
                let registry = Self::new();
                registry.save(dir)?;
                Ok(registry)
            }
        }
    }

    /// Save the registry.
    pub fn save(&self, dir: &DataDir) -> Result<()> {
        storage::save_json(&dir.file(STATES_FILE), &self.states)
    }

    /// Create a new state.
    pub fn create(&mut self, name: &str) -> &WorkState {
        self.states.push(WorkState::new(name));
        self.states.last().expect("just pushed")
    }

    /// Rename a state.
    pub fn rename(&mut self, id: Uuid, name: &str) -> Result<()> {
        let state = self
            .states
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| TempoError::StateNotFound {
                name: id.to_string(),
            })?;
        state.name = name.to_string();
        Ok(())
    }

    /// Delete a state.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let before = self.states.len();
        self.states.retain(|s| s.id != id);
        if self.states.len() == before {
            return Err(TempoError::StateNotFound {
                name: id.to_string(),
            });
        }
        Ok(())
    }

    /// All states, in creation order.
    pub fn list(&self) -> &[WorkState] {
        &self.states
    }

    /// Look up a state by id.
    pub fn get(&self, id: Uuid) -> Option<&WorkState> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Look up a state by name (first match).
    pub fn find_by_name(&self, name: &str) -> Option<&WorkState> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Accrue focus seconds into a state. Missing ids are ignored.
    pub fn add_time(&mut self, id: Uuid, secs: u64) {
        if let Some(state) = self.states.iter_mut().find(|s| s.id == id) {
            state.total_time += Duration::from_secs(secs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_starts_with_zero_time() {
        let mut registry = StateRegistry::new();
        let state = registry.create("deep work");
        assert_eq!(state.total_time, Duration::from_secs(0));
        assert_eq!(state.name, "deep work");
    }

    #[test]
    fn list_preserves_creation_order() {
        let mut registry = StateRegistry::new();
        registry.create("first");
        registry.create("second");
        registry.create("third");

        let names: Vec<_> = registry.list().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn rename_changes_name_in_place() {
        let mut registry = StateRegistry::new();
        let id = registry.create("old").id;

        registry.rename(id, "new").unwrap();

        assert_eq!(registry.get(id).unwrap().name, "new");
    }

    #[test]
    fn rename_unknown_id_is_an_error() {
        let mut registry = StateRegistry::new();
        let err = registry.rename(Uuid::new_v4(), "new").unwrap_err();
        assert!(matches!(err, TempoError::StateNotFound { .. }));
    }

    #[test]
    fn delete_removes_state() {
        let mut registry = StateRegistry::new();
        let id = registry.create("gone").id;

        registry.delete(id).unwrap();

        assert!(registry.list().is_empty());
        assert!(registry.delete(id).is_err());
    }

    #[test]
    fn add_time_accrues_seconds() {
        let mut registry = StateRegistry::new();
        let id = registry.create("deep work").id;

        registry.add_time(id, 90);
        registry.add_time(id, 30);

        assert_eq!(
            registry.get(id).unwrap().total_time,
            Duration::from_secs(120)
        );
    }

    #[test]
    fn add_time_ignores_unknown_id() {
        let mut registry = StateRegistry::new();
        registry.add_time(Uuid::new_v4(), 10);
        assert!(registry.list().is_empty());
    }

    #[test]
    fn total_time_serializes_as_whole_seconds() {
        let mut state = WorkState::new("codec");
        state.total_time = Duration::new(61, 500_000_000);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["total_time"], 61);

        let back: WorkState = serde_json::from_value(json).unwrap();
        assert_eq!(back.total_time, Duration::from_secs(61));
    }

    #[test]
    fn load_missing_file_creates_empty_registry() {
        let temp = TempDir::new().unwrap();
        let dir = DataDir::at(temp.path());

        let registry = StateRegistry::load(&dir).unwrap();

        assert!(registry.list().is_empty());
        assert!(dir.file(STATES_FILE).exists());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let dir = DataDir::at(temp.path());

        let mut registry = StateRegistry::new();
        let id = registry.create("persisted").id;
        registry.add_time(id, 42);
        registry.save(&dir).unwrap();

        let loaded = StateRegistry::load(&dir).unwrap();
        assert_eq!(loaded.list().len(), 1);
        assert_eq!(loaded.get(id).unwrap().total_time, Duration::from_secs(42));
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let mut registry = StateRegistry::new();
        let id = registry.create("focus").id;
        registry.create("focus");

        assert_eq!(registry.find_by_name("focus").unwrap().id, id);
        assert!(registry.find_by_name("missing").is_none());
    }
}
