//! Persisted application settings.
//!
//! Settings live in `settings.json` in the data directory. Today that is the
//! theme preference; the file is read back once at startup and rewritten on
//! every change. An unreadable file resets to defaults rather than failing
//! startup.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::{self, DataDir};
use crate::store::ThemePreference;

/// Settings file name inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Persisted user settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// The saved theme preference. Defaults to dark.
    #[serde(rename = "current_theme", default)]
    pub theme: ThemePreference,
}

impl Settings {
    /// Load settings from the data directory.
    ///
    /// A missing file yields defaults and writes them out. An unreadable or
    /// invalid file is reset to defaults with a warning.
    pub fn load(dir: &DataDir) -> Result<Self> {
        let path = dir.file(SETTINGS_FILE);

        match storage::load_json::<Settings>(&path) {
            Ok(Some(settings)) => Ok(settings),
            Ok(None) => {
                tracing::debug!("no settings found, initializing with defaults");
                let settings = Settings::default();
                settings.save(dir)?;
                Ok(settings)
            }
            Err(e) => {
                tracing::warn!("invalid settings file, resetting to defaults: {}", e);
                let settings = Settings::default();
                settings.save(dir)?;
                Ok(settings)
            }
        }
    }

    /// Save settings to the data directory.
    pub fn save(&self, dir: &DataDir) -> Result<()> {
        storage::save_json(&dir.file(SETTINGS_FILE), self)
    }
}
