//! Palette command parsing.
//!
//! The palette accepts one-line commands (`/todo write report`,
//! `/theme toggle`, `ping`). Parsing is separate from execution: this module
//! turns a line into a [`PaletteCommand`]; the session dispatches it.

use chrono::Local;

use crate::error::{Result, TempoError};
use crate::store::ThemePreference;

/// Theme palette actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Set(ThemePreference),
    Toggle,
}

/// A parsed palette line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteCommand {
    Ping,
    Date,
    Theme(ThemeAction),
    Todo(String),
    Doing(String),
    Done(String),
    Break(String),
    Delete(String),
    UseState(String),
    StartPomodoro,
    PausePomodoro,
    ResumePomodoro,
    StopPomodoro,
    OpenScratch(String),
    SaveAck,
}

/// Join the rest of a line into one argument, requiring it to be non-empty.
fn rest_arg(parts: &[&str], usage: &str) -> Result<String> {
    if parts.len() < 2 {
        return Err(TempoError::MissingArgument {
            usage: usage.to_string(),
        });
    }
    Ok(parts[1..].join(" "))
}

/// Parse a palette line.
pub fn parse(line: &str) -> Result<PaletteCommand> {
    let parts: Vec<&str> = line.trim().split_whitespace().collect();

    match parts.first() {
        Some(&"ping") => Ok(PaletteCommand::Ping),
        Some(&"date") => Ok(PaletteCommand::Date),
        Some(&"/theme") => match parts.get(1) {
            Some(&"dark") => Ok(PaletteCommand::Theme(ThemeAction::Set(
                ThemePreference::Dark,
            ))),
            Some(&"light") => Ok(PaletteCommand::Theme(ThemeAction::Set(
                ThemePreference::Light,
            ))),
            Some(&"toggle") => Ok(PaletteCommand::Theme(ThemeAction::Toggle)),
            _ => Err(TempoError::MissingArgument {
                usage: "/theme [dark|light|toggle]".into(),
            }),
        },
        Some(&"/todo") => Ok(PaletteCommand::Todo(rest_arg(&parts, "/todo <title>")?)),
        Some(&"/doing") => Ok(PaletteCommand::Doing(rest_arg(&parts, "/doing <title>")?)),
        Some(&"/done") => Ok(PaletteCommand::Done(rest_arg(&parts, "/done <title>")?)),
        Some(&"/break") => Ok(PaletteCommand::Break(rest_arg(&parts, "/break <title>")?)),
        Some(&"/delete") => Ok(PaletteCommand::Delete(rest_arg(
            &parts,
            "/delete <title>",
        )?)),
        Some(&"/use") => Ok(PaletteCommand::UseState(rest_arg(&parts, "/use <state>")?)),
        Some(&"/start") => Ok(PaletteCommand::StartPomodoro),
        Some(&"/pause") => Ok(PaletteCommand::PausePomodoro),
        Some(&"/resume") => Ok(PaletteCommand::ResumePomodoro),
        Some(&"/stop") => Ok(PaletteCommand::StopPomodoro),
        Some(&"/code") | Some(&"/write") => {
            Ok(PaletteCommand::OpenScratch(rest_arg(&parts, "/code <file>")?))
        }
        Some(&"/wq") => Ok(PaletteCommand::SaveAck),
        Some(unknown) => Err(TempoError::UnknownCommand {
            name: unknown.to_string(),
        }),
        None => Err(TempoError::EmptyCommand),
    }
}

/// The current local date and time, as the `date` command prints it.
pub fn date_line() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_words_parse() {
        assert_eq!(parse("ping").unwrap(), PaletteCommand::Ping);
        assert_eq!(parse("date").unwrap(), PaletteCommand::Date);
    }

    #[test]
    fn theme_variants_parse() {
        assert_eq!(
            parse("/theme dark").unwrap(),
            PaletteCommand::Theme(ThemeAction::Set(ThemePreference::Dark))
        );
        assert_eq!(
            parse("/theme light").unwrap(),
            PaletteCommand::Theme(ThemeAction::Set(ThemePreference::Light))
        );
        assert_eq!(
            parse("/theme toggle").unwrap(),
            PaletteCommand::Theme(ThemeAction::Toggle)
        );
    }

    #[test]
    fn theme_without_argument_shows_usage() {
        let err = parse("/theme").unwrap_err();
        assert!(err.to_string().contains("/theme [dark|light|toggle]"));
    }

    #[test]
    fn task_commands_join_multiword_titles() {
        assert_eq!(
            parse("/todo write the report").unwrap(),
            PaletteCommand::Todo("write the report".into())
        );
        assert_eq!(
            parse("/doing write the report").unwrap(),
            PaletteCommand::Doing("write the report".into())
        );
    }

    #[test]
    fn task_commands_require_a_title() {
        assert!(matches!(
            parse("/todo").unwrap_err(),
            TempoError::MissingArgument { .. }
        ));
        assert!(matches!(
            parse("/done   ").unwrap_err(),
            TempoError::MissingArgument { .. }
        ));
    }

    #[test]
    fn pomodoro_controls_parse() {
        assert_eq!(parse("/start").unwrap(), PaletteCommand::StartPomodoro);
        assert_eq!(parse("/pause").unwrap(), PaletteCommand::PausePomodoro);
        assert_eq!(parse("/resume").unwrap(), PaletteCommand::ResumePomodoro);
        assert_eq!(parse("/stop").unwrap(), PaletteCommand::StopPomodoro);
    }

    #[test]
    fn scratch_commands_parse() {
        assert_eq!(
            parse("/code notes.md").unwrap(),
            PaletteCommand::OpenScratch("notes.md".into())
        );
        assert_eq!(
            parse("/write notes.md").unwrap(),
            PaletteCommand::OpenScratch("notes.md".into())
        );
        assert_eq!(parse("/wq").unwrap(), PaletteCommand::SaveAck);
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = parse("/frobnicate now").unwrap_err();
        assert!(matches!(err, TempoError::UnknownCommand { .. }));
        assert!(err.to_string().contains("/frobnicate"));
    }

    #[test]
    fn empty_line_is_an_error() {
        assert!(matches!(parse("   ").unwrap_err(), TempoError::EmptyCommand));
    }

    #[test]
    fn leading_whitespace_is_trimmed() {
        assert_eq!(parse("  ping  ").unwrap(), PaletteCommand::Ping);
    }
}
