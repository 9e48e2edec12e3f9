//! Interactive palette command.
//!
//! The `tempo palette` command opens an interactive session: one prompt per
//! line, each line dispatched as a palette command. The session carries the
//! UI-root class set, so theme commands visibly retarget it, and wall-clock
//! time elapsed between prompts accrues into the active task.

use crate::error::Result;
use crate::session::Session;
use crate::storage::DataDir;
use crate::store::{ClassListSink, RootClasses};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The palette command implementation.
pub struct PaletteCommand {
    data_dir: DataDir,
}

impl PaletteCommand {
    /// Create a new palette command.
    pub fn new(data_dir: DataDir) -> Self {
        Self { data_dir }
    }
}

impl Command for PaletteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = RootClasses::new();
        let mut session = Session::open(
            self.data_dir.clone(),
            Box::new(ClassListSink::new(root.clone())),
        )?;
        session.recover_interrupted()?;
        ui.apply_theme(session.theme());

        session
            .context_mut()
            .theme
            .subscribe(|theme| tracing::debug!("theme is now {}", theme));
        session
            .context_mut()
            .tasks
            .subscribe(|tasks| tracing::debug!("{} open task(s) today", tasks.len()));

        ui.show_header("tempo palette");
        ui.message("Commands: /todo /doing /done /break /delete /use /theme /start /pause /resume /stop /code ping date");
        ui.message("Type \"exit\" to leave.");

        loop {
            let line = ui.read_line("tempo")?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }
            if trimmed == "exit" || trimmed == "quit" {
                break;
            }

            let before = session.theme();
            match session.dispatch(trimmed) {
                Ok(reply) => ui.message(&reply),
                Err(e) => ui.error(&e.to_string()),
            }
            if session.theme() != before {
                ui.apply_theme(session.theme());
            }
        }

        Ok(CommandResult::success())
    }
}
