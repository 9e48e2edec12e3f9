//! Theme command implementation.
//!
//! The `tempo theme` subcommands read and change the persisted theme
//! preference.

use crate::cli::args::{ThemeArgs, ThemeCommands};
use crate::error::Result;
use crate::session::Session;
use crate::storage::DataDir;
use crate::store::{NullThemeSink, ThemePreference};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The theme command implementation.
pub struct ThemeCommand {
    data_dir: DataDir,
    args: ThemeArgs,
}

impl ThemeCommand {
    /// Create a new theme command.
    pub fn new(data_dir: DataDir, args: ThemeArgs) -> Self {
        Self { data_dir, args }
    }
}

impl Command for ThemeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = Session::open(self.data_dir.clone(), Box::new(NullThemeSink))?;

        match &self.args.command {
            ThemeCommands::Get => {
                ui.message(&session.theme().to_string());
            }
            ThemeCommands::Set { value } => match value.parse::<ThemePreference>() {
                Ok(preference) => {
                    session.set_theme(preference)?;
                    ui.success(&format!("Theme set to {}", preference));
                }
                Err(e) => {
                    ui.error(&e);
                    return Ok(CommandResult::failure(1));
                }
            },
            ThemeCommands::Toggle => {
                let next = session.toggle_theme()?;
                ui.success(&format!("Theme toggled to {}", next));
            }
        }

        Ok(CommandResult::success())
    }
}
