//! Data directory resolution and JSON persistence.
//!
//! All persisted tempo data lives as JSON files in a single data directory.
//! Writes use the write-to-temp-then-rename pattern to prevent corruption.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TempoError};

/// Environment variable that overrides the data directory location.
pub const DATA_DIR_ENV: &str = "TEMPO_DATA_DIR";

/// The directory holding all persisted tempo data.
#[derive(Debug, Clone)]
pub struct DataDir {
    path: PathBuf,
}

impl DataDir {
    /// Resolve the data directory.
    ///
    /// Resolution order:
    /// 1. An explicit override (from `--data-dir` / `TEMPO_DATA_DIR`)
    /// 2. The platform-local data dir (e.g. `~/.local/share/tempo`)
    /// 3. The current directory as a last resort
    pub fn resolve(override_path: Option<PathBuf>) -> Self {
        let path = override_path
            .or_else(|| dirs::data_local_dir().map(|d| d.join("tempo")))
            .unwrap_or_else(|| PathBuf::from("."));

        Self { path }
    }

    /// Use an explicit directory (tests and overrides).
    pub fn at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Get the directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the path of a named file inside the data directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

/// Load a JSON file, returning `None` when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let value = serde_json::from_str(&content).map_err(|e| TempoError::DataParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(Some(value))
}

/// Save a value as pretty-printed JSON using atomic write.
///
/// Creates parent directories as needed, writes to a temp file, then renames.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(value).map_err(|e| TempoError::DataParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
