//! Error types for tempo operations.
//!
//! This module defines [`TempoError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `TempoError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `TempoError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tempo operations.
#[derive(Debug, Error)]
pub enum TempoError {
    /// A persisted data file exists but cannot be parsed.
    #[error("Failed to parse data file at {path}: {message}")]
    DataParseError { path: PathBuf, message: String },

    /// No task with the given title exists in the open book.
    #[error("Task not found: {title}")]
    TaskNotFound { title: String },

    /// The task is already the active one.
    #[error("Task is already active: {title}")]
    TaskAlreadyActive { title: String },

    /// The task is not currently active.
    #[error("Task is not active: {title}")]
    TaskNotActive { title: String },

    /// No work state with the given name or id exists.
    #[error("Work state not found: {name}")]
    StateNotFound { name: String },

    /// Palette line named a command that does not exist.
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    /// Palette line was empty.
    #[error("Empty command received")]
    EmptyCommand,

    /// Palette command is missing a required argument.
    #[error("Missing argument. Usage: {usage}")]
    MissingArgument { usage: String },

    /// Home directory could not be located for scratch files.
    #[error("No home directory located")]
    NoHomeDir,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tempo operations.
pub type Result<T> = std::result::Result<T, TempoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_parse_error_displays_path_and_message() {
        let err = TempoError::DataParseError {
            path: PathBuf::from("/data/tasks.json"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/tasks.json"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn task_not_found_displays_title() {
        let err = TempoError::TaskNotFound {
            title: "write report".into(),
        };
        assert!(err.to_string().contains("write report"));
    }

    #[test]
    fn task_already_active_displays_title() {
        let err = TempoError::TaskAlreadyActive {
            title: "deep work".into(),
        };
        assert!(err.to_string().contains("deep work"));
    }

    #[test]
    fn unknown_command_displays_name() {
        let err = TempoError::UnknownCommand {
            name: "/frobnicate".into(),
        };
        assert!(err.to_string().contains("/frobnicate"));
    }

    #[test]
    fn missing_argument_displays_usage() {
        let err = TempoError::MissingArgument {
            usage: "/todo <title>".into(),
        };
        assert!(err.to_string().contains("/todo <title>"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TempoError = io_err.into();
        assert!(matches!(err, TempoError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TempoError::EmptyCommand)
        }
        assert!(returns_error().is_err());
    }
}
