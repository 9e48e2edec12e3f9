//! Quick note files.
//!
//! Scratch files give palette users a place to jot text without leaving the
//! app. Bare names resolve under `~/tempo/`; `~`-prefixed paths expand
//! against the home directory. Opening a missing file creates it empty.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TempoError};

/// Directory under the home dir that holds bare-named scratch files.
pub const SCRATCH_DIR: &str = "tempo";

/// Expand a `~`-prefixed path against the given home directory.
fn expand_tilde(home: &Path, path: &str) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Resolve user input to a scratch file path under the given home directory.
fn resolve_in(home: &Path, input: &str) -> Result<PathBuf> {
    if input.is_empty() {
        return Err(TempoError::MissingArgument {
            usage: "<file>".into(),
        });
    }
    if input.starts_with('~') {
        Ok(expand_tilde(home, input))
    } else {
        Ok(home.join(SCRATCH_DIR).join(input))
    }
}

/// Resolve user input to a scratch file path.
pub fn resolve(input: &str) -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(TempoError::NoHomeDir)?;
    resolve_in(&home, input)
}

fn read_creating(path: &Path) -> Result<String> {
    if !path.exists() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, "")?;
    }
    Ok(fs::read_to_string(path)?)
}

fn write_creating(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Read a scratch file, creating it empty (with parents) when missing.
pub fn open(input: &str) -> Result<String> {
    read_creating(&resolve(input)?)
}

/// Write a scratch file, creating parents as needed. Returns the path.
pub fn save(input: &str, contents: &str) -> Result<PathBuf> {
    let path = resolve(input)?;
    write_creating(&path, contents)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bare_name_resolves_under_scratch_dir() {
        let home = TempDir::new().unwrap();
        let path = resolve_in(home.path(), "notes.md").unwrap();
        assert_eq!(path, home.path().join(SCRATCH_DIR).join("notes.md"));
    }

    #[test]
    fn tilde_path_expands_against_home() {
        let home = TempDir::new().unwrap();
        let path = resolve_in(home.path(), "~/elsewhere/notes.md").unwrap();
        assert_eq!(path, home.path().join("elsewhere/notes.md"));
    }

    #[test]
    fn bare_tilde_is_home() {
        let home = TempDir::new().unwrap();
        let path = resolve_in(home.path(), "~").unwrap();
        assert_eq!(path, home.path());
    }

    #[test]
    fn empty_input_is_an_error() {
        let home = TempDir::new().unwrap();
        assert!(resolve_in(home.path(), "").is_err());
    }

    #[test]
    fn read_creating_makes_missing_file() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("deep").join("note.txt");

        let contents = read_creating(&path).unwrap();

        assert_eq!(contents, "");
        assert!(path.exists());
    }

    #[test]
    fn write_then_read_roundtrip() {
        let home = TempDir::new().unwrap();
        let path = home.path().join("note.txt");

        write_creating(&path, "remember the milk").unwrap();

        assert_eq!(read_creating(&path).unwrap(), "remember the milk");
    }
}
