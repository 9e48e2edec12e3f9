//! tempo - Task and focus-time tracking with a reactive state core.
//!
//! tempo keeps a day-keyed task list, named work states with accumulated
//! focus time, a pomodoro timer, and a persisted light/dark theme
//! preference, behind both a CLI and an interactive command palette.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`palette`] - Slash-command line parsing
//! - [`pomodoro`] - Tick-driven focus timer
//! - [`profile`] - Lifetime usage counters
//! - [`scratch`] - Quick note files
//! - [`session`] - Session wiring between stores and persistence
//! - [`settings`] - Persisted application settings
//! - [`states`] - Work-state registry
//! - [`storage`] - Data directory and JSON persistence
//! - [`store`] - Observable state containers
//! - [`tasks`] - Task books and the single-active invariant
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use tempo::store::{Observable, ThemePreference, ThemeStore};
//!
//! // Containers notify subscribers synchronously on every change.
//! let mut tasks = Observable::new(Vec::<String>::new());
//! tasks.subscribe(|list| println!("{} task(s)", list.len()));
//! tasks.update(|list| {
//!     let mut next = list.clone();
//!     next.push("write report".to_string());
//!     next
//! });
//!
//! // The theme store starts dark.
//! let theme = ThemeStore::headless();
//! assert_eq!(theme.get(), ThemePreference::Dark);
//! ```

pub mod cli;
pub mod error;
pub mod palette;
pub mod pomodoro;
pub mod profile;
pub mod scratch;
pub mod session;
pub mod settings;
pub mod states;
pub mod storage;
pub mod store;
pub mod tasks;
pub mod ui;

pub use error::{Result, TempoError};
