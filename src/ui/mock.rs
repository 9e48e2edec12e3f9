//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output for
//! later assertion. Input lines can be queued ahead of time.

use std::collections::VecDeque;

use crate::error::Result;
use crate::store::ThemePreference;

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    applied_themes: Vec<ThemePreference>,
    input_queue: VecDeque<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            interactive: true,
            ..Default::default()
        }
    }

    /// Queue a line to be returned by the next `read_line` call.
    pub fn queue_line(&mut self, line: &str) {
        self.input_queue.push_back(line.to_string());
    }

    /// All captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// All captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Theme preferences applied to the UI, in order.
    pub fn applied_themes(&self) -> &[ThemePreference] {
        &self.applied_themes
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn apply_theme(&mut self, preference: ThemePreference) {
        self.applied_themes.push(preference);
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        // Exhausted input behaves like a user typing "exit".
        Ok(self.input_queue.pop_front().unwrap_or_else(|| "exit".into()))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
