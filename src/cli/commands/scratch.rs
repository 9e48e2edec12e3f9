//! Scratch command implementation.
//!
//! The `tempo scratch` subcommands read and write quick note files.

use crate::cli::args::{ScratchArgs, ScratchCommands};
use crate::error::Result;
use crate::scratch;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The scratch command implementation.
pub struct ScratchCommand {
    args: ScratchArgs,
}

impl ScratchCommand {
    /// Create a new scratch command.
    pub fn new(args: ScratchArgs) -> Self {
        Self { args }
    }
}

impl Command for ScratchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.command {
            ScratchCommands::Show { file } => {
                let contents = scratch::open(file)?;
                if contents.is_empty() {
                    ui.message("(empty)");
                } else {
                    for line in contents.lines() {
                        ui.message(line);
                    }
                }
            }
            ScratchCommands::Write { file, text } => {
                let path = scratch::save(file, &text.join(" "))?;
                ui.success(&format!("Saved {}", path.display()));
            }
        }

        Ok(CommandResult::success())
    }
}
