//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::storage::DATA_DIR_ENV;

/// tempo - Task and focus-time tracking.
#[derive(Debug, Parser)]
#[command(name = "tempo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory (overrides the platform default)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage tasks (default: list today's tasks)
    Task(TaskArgs),

    /// Manage work states
    State(StateArgs),

    /// Show or change the theme preference
    Theme(ThemeArgs),

    /// Run a pomodoro countdown
    Pomodoro(PomodoroArgs),

    /// Show lifetime counters
    Stats,

    /// Quick note files
    Scratch(ScratchArgs),

    /// Interactive command palette
    Palette,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `task` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

/// Task subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum TaskCommands {
    /// Add a new task for today
    Add {
        /// Task title
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// Mark a task as the one being worked on
    Start {
        /// Task title
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// Demote the active task back to todo
    Pause {
        /// Task title
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// Move a task to the finished book
    Done {
        /// Task title
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// Delete a task from the open book
    Rm {
        /// Task title
        #[arg(required = true)]
        title: Vec<String>,
    },

    /// List tasks for a day
    List {
        /// Day key (YYYY-MM-DD), defaults to today
        #[arg(long)]
        day: Option<String>,

        /// Show finished tasks instead of open ones
        #[arg(long)]
        done: bool,
    },
}

/// Arguments for the `state` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StateArgs {
    #[command(subcommand)]
    pub command: StateCommands,
}

/// Work-state subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum StateCommands {
    /// Create a new work state
    Add {
        /// State name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Rename a work state
    Rename {
        /// Current name
        name: String,
        /// New name
        new_name: String,
    },

    /// Delete a work state
    Rm {
        /// State name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// List work states with accumulated time
    List,
}

/// Arguments for the `theme` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommands,
}

/// Theme subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ThemeCommands {
    /// Print the current preference
    Get,

    /// Set the preference (light or dark)
    Set {
        /// Theme name
        value: String,
    },

    /// Flip between light and dark
    Toggle,
}

/// Arguments for the `pomodoro` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PomodoroArgs {
    /// Work session length in minutes
    #[arg(long, default_value_t = 25)]
    pub work: u64,

    /// Short break length in minutes
    #[arg(long, default_value_t = 5)]
    pub short_break: u64,

    /// Long break length in minutes
    #[arg(long, default_value_t = 15)]
    pub long_break: u64,

    /// Take a long break after every Nth work session
    #[arg(long, default_value_t = 4)]
    pub long_every: u32,

    /// Number of work sessions to run
    #[arg(long, default_value_t = 1)]
    pub sessions: u32,
}

/// Arguments for the `scratch` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScratchArgs {
    #[command(subcommand)]
    pub command: ScratchCommands,
}

/// Scratch subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ScratchCommands {
    /// Print a scratch file, creating it when missing
    Show {
        /// File name or ~-path
        file: String,
    },

    /// Write text into a scratch file
    Write {
        /// File name or ~-path
        file: String,
        /// Text to write
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_task_add_with_multiword_title() {
        let cli = Cli::parse_from(["tempo", "task", "add", "write", "the", "report"]);
        match cli.command {
            Some(Commands::Task(args)) => match args.command {
                TaskCommands::Add { title } => {
                    assert_eq!(title.join(" "), "write the report");
                }
                other => panic!("unexpected subcommand: {:?}", other),
            },
            _ => panic!("expected task command"),
        }
    }

    #[test]
    fn parses_global_data_dir() {
        let cli = Cli::parse_from(["tempo", "--data-dir", "/tmp/t", "stats"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/t")));
    }

    #[test]
    fn pomodoro_defaults_match_classic_cadence() {
        let cli = Cli::parse_from(["tempo", "pomodoro"]);
        match cli.command {
            Some(Commands::Pomodoro(args)) => {
                assert_eq!(args.work, 25);
                assert_eq!(args.short_break, 5);
                assert_eq!(args.long_break, 15);
                assert_eq!(args.long_every, 4);
                assert_eq!(args.sessions, 1);
            }
            _ => panic!("expected pomodoro command"),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["tempo"]);
        assert!(cli.command.is_none());
    }
}
