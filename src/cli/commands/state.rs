//! Work-state command implementation.

use crate::cli::args::{StateArgs, StateCommands};
use crate::error::Result;
use crate::session::Session;
use crate::storage::DataDir;
use crate::store::NullThemeSink;
use crate::ui::{format_seconds, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The state command implementation.
pub struct StateCommand {
    data_dir: DataDir,
    args: StateArgs,
}

impl StateCommand {
    /// Create a new state command.
    pub fn new(data_dir: DataDir, args: StateArgs) -> Self {
        Self { data_dir, args }
    }
}

impl Command for StateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = Session::open(self.data_dir.clone(), Box::new(NullThemeSink))?;

        match &self.args.command {
            StateCommands::Add { name } => {
                let state = session.create_state(&name.join(" "))?;
                ui.success(&format!("Created state: {}", state.name));
            }
            StateCommands::Rename { name, new_name } => {
                match session.rename_state(name, new_name) {
                    Ok(()) => ui.success(&format!("Renamed {} to {}", name, new_name)),
                    Err(e) => {
                        ui.error(&e.to_string());
                        return Ok(CommandResult::failure(1));
                    }
                }
            }
            StateCommands::Rm { name } => {
                let name = name.join(" ");
                match session.delete_state(&name) {
                    Ok(()) => ui.success(&format!("Deleted state: {}", name)),
                    Err(e) => {
                        ui.error(&e.to_string());
                        return Ok(CommandResult::failure(1));
                    }
                }
            }
            StateCommands::List => {
                let states = session.states();
                if states.is_empty() {
                    ui.message("No work states yet.");
                } else {
                    ui.message("Work states:");
                    for state in states {
                        ui.message(&format!(
                            "  {} — {}",
                            state.name,
                            format_seconds(state.total_time.as_secs())
                        ));
                    }
                }
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(dir: &DataDir, command: StateCommands) -> (MockUI, CommandResult) {
        let mut ui = MockUI::new();
        let cmd = StateCommand::new(dir.clone(), StateArgs { command });
        let result = cmd.execute(&mut ui).unwrap();
        (ui, result)
    }

    #[test]
    fn add_then_list_shows_the_state() {
        let temp = TempDir::new().unwrap();
        let dir = DataDir::at(temp.path());

        let (ui, _) = run(
            &dir,
            StateCommands::Add {
                name: vec!["deep".into(), "work".into()],
            },
        );
        assert!(ui.successes()[0].contains("deep work"));

        let (ui, _) = run(&dir, StateCommands::List);
        assert!(ui.messages().iter().any(|m| m.contains("deep work — 0s")));
    }

    #[test]
    fn rm_unknown_state_fails() {
        let temp = TempDir::new().unwrap();
        let dir = DataDir::at(temp.path());

        let (ui, result) = run(
            &dir,
            StateCommands::Rm {
                name: vec!["ghost".into()],
            },
        );

        assert!(!result.success);
        assert!(ui.errors()[0].contains("ghost"));
    }
}
