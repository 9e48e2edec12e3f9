//! Stats command implementation.
//!
//! The `tempo stats` command shows the lifetime counters.

use crate::error::Result;
use crate::session::Session;
use crate::storage::DataDir;
use crate::store::NullThemeSink;
use crate::ui::{format_seconds, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The stats command implementation.
pub struct StatsCommand {
    data_dir: DataDir,
}

impl StatsCommand {
    /// Create a new stats command.
    pub fn new(data_dir: DataDir) -> Self {
        Self { data_dir }
    }
}

impl Command for StatsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = Session::open(self.data_dir.clone(), Box::new(NullThemeSink))?;
        let profile = session.profile();

        ui.show_header("tempo — stats");
        ui.message(&format!("Tasks done:      {}", profile.tasks_done));
        ui.message(&format!("Pomodoros done:  {}", profile.pomodoros_done));
        ui.message(&format!(
            "Time tracked:    {}",
            format_seconds(profile.seconds_tracked)
        ));

        Ok(CommandResult::success())
    }
}
