//! Pomodoro command implementation.
//!
//! The `tempo pomodoro` command drives the tick-based timer in a foreground
//! countdown loop. Focus seconds accrue into the active task while the
//! countdown runs.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::PomodoroArgs;
use crate::error::Result;
use crate::pomodoro::{Phase, PomodoroConfig};
use crate::session::Session;
use crate::storage::DataDir;
use crate::store::NullThemeSink;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The pomodoro command implementation.
pub struct PomodoroCommand {
    data_dir: DataDir,
    args: PomodoroArgs,
}

impl PomodoroCommand {
    /// Create a new pomodoro command.
    pub fn new(data_dir: DataDir, args: PomodoroArgs) -> Self {
        Self { data_dir, args }
    }

    fn config(&self) -> PomodoroConfig {
        PomodoroConfig {
            work: Duration::from_secs(self.args.work * 60),
            short_break: Duration::from_secs(self.args.short_break * 60),
            long_break: Duration::from_secs(self.args.long_break * 60),
            sessions_before_long_break: self.args.long_every,
        }
    }
}

/// Display label for a countdown phase.
fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Running => "Focus",
        Phase::ShortBreak => "Short break",
        Phase::LongBreak => "Long break",
        Phase::Paused => "Paused",
        Phase::Idle => "Idle",
    }
}

/// Full length in seconds of a countdown phase.
fn phase_length(config: &PomodoroConfig, phase: Phase) -> u64 {
    match phase {
        Phase::ShortBreak => config.short_break.as_secs(),
        Phase::LongBreak => config.long_break.as_secs(),
        _ => config.work.as_secs(),
    }
}

fn countdown_bar(total: u64, label: &str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:30.cyan/blue}] {pos}/{len}s")
            .unwrap()
            .progress_chars("=> "),
    );
    bar.set_message(label.to_string());
    bar
}

impl Command for PomodoroCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = Session::open(self.data_dir.clone(), Box::new(NullThemeSink))?;
        let config = self.config();
        session.configure_pomodoro(config.clone());
        session.start_pomodoro();

        ui.show_header("Pomodoro");
        if let Some(task) = session.context().tasks.get().iter().find(|t| {
            t.status == crate::tasks::TaskStatus::Doing
        }) {
            ui.message(&format!("Tracking time into: {}", task.title));
        }

        let show_bar = ui.output_mode().shows_progress();
        let mut completed = 0u32;
        let mut prev_phase = Phase::Running;
        let mut bar = show_bar.then(|| {
            countdown_bar(phase_length(&config, prev_phase), phase_label(prev_phase))
        });

        loop {
            std::thread::sleep(Duration::from_secs(1));
            session.advance_clock(1)?;
            let snap = session.pomodoro();

            if snap.phase != prev_phase {
                if let Some(b) = bar.take() {
                    b.finish_and_clear();
                }

                if prev_phase == Phase::Running {
                    completed += 1;
                    ui.success("Work session complete");
                    if completed >= self.args.sessions {
                        break;
                    }
                    ui.message(&format!("{} started", phase_label(snap.phase)));
                } else {
                    ui.message("Back to work");
                }

                prev_phase = snap.phase;
                bar = show_bar.then(|| {
                    countdown_bar(phase_length(&config, snap.phase), phase_label(snap.phase))
                });
            } else if let Some(b) = &bar {
                let total = phase_length(&config, snap.phase);
                b.set_position(total.saturating_sub(snap.remaining_secs));
            }
        }

        session.stop_pomodoro();
        ui.success(&format!(
            "Completed {} work session{}",
            completed,
            if completed == 1 { "" } else { "s" }
        ));
        Ok(CommandResult::success())
    }
}
