//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`MockUI`] for tests
//! - Console theme and output modes

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ConsoleTheme};

use crate::error::Result;
use crate::store::ThemePreference;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Restyle output to match a theme preference. Default: no-op.
    fn apply_theme(&mut self, _preference: ThemePreference) {}

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Read one line of input with a prompt.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// Create the appropriate UI for the environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive, mode))
}

/// Format whole seconds as `1h 02m 03s` / `2m 03s` / `3s`.
pub fn format_seconds(total: u64) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_seconds_covers_all_ranges() {
        assert_eq!(format_seconds(3), "3s");
        assert_eq!(format_seconds(123), "2m 03s");
        assert_eq!(format_seconds(3723), "1h 02m 03s");
        assert_eq!(format_seconds(0), "0s");
    }
}
