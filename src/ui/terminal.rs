//! Interactive terminal UI.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::Write;

use crate::error::{Result, TempoError};
use crate::store::ThemePreference;

use super::{should_use_colors, ConsoleTheme, OutputMode, UserInterface};

/// Convert dialoguer errors to TempoError.
fn map_dialoguer_err(e: dialoguer::Error) -> TempoError {
    TempoError::Io(e.into())
}

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: ConsoleTheme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ConsoleTheme::new()
        } else {
            ConsoleTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
            interactive,
        }
    }

    /// Swap in styles matching a theme preference.
    pub fn set_theme(&mut self, theme: ConsoleTheme) {
        if should_use_colors() {
            self.theme = theme;
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn apply_theme(&mut self, preference: ThemePreference) {
        self.set_theme(ConsoleTheme::for_preference(preference));
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let theme = ColorfulTheme::default();
        Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(map_dialoguer_err)
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
