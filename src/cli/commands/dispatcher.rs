//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, TaskArgs, TaskCommands};
use crate::error::Result;
use crate::storage::DataDir;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and reading input
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    data_dir: DataDir,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given data directory.
    pub fn new(data_dir: DataDir) -> Self {
        Self { data_dir }
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &DataDir {
        &self.data_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. With no subcommand, an interactive terminal gets the
    /// palette and anything else gets today's task list.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Task(args)) => {
                let cmd = super::task::TaskCommand::new(self.data_dir.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::State(args)) => {
                let cmd = super::state::StateCommand::new(self.data_dir.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Theme(args)) => {
                let cmd = super::theme::ThemeCommand::new(self.data_dir.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Pomodoro(args)) => {
                let cmd =
                    super::pomodoro::PomodoroCommand::new(self.data_dir.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Stats) => {
                let cmd = super::stats::StatsCommand::new(self.data_dir.clone());
                cmd.execute(ui)
            }
            Some(Commands::Scratch(args)) => {
                let cmd = super::scratch::ScratchCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Palette) => {
                let cmd = super::palette::PaletteCommand::new(self.data_dir.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                if ui.is_interactive() {
                    let cmd = super::palette::PaletteCommand::new(self.data_dir.clone());
                    cmd.execute(ui)
                } else {
                    let cmd = super::task::TaskCommand::new(
                        self.data_dir.clone(),
                        TaskArgs {
                            command: TaskCommands::List {
                                day: None,
                                done: false,
                            },
                        },
                    );
                    cmd.execute(ui)
                }
            }
        }
    }
}
