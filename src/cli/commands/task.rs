//! Task command implementation.
//!
//! The `tempo task` subcommands manage the open and finished task books.

use std::cell::RefCell;
use std::rc::Rc;

use crate::cli::args::{TaskArgs, TaskCommands};
use crate::error::Result;
use crate::session::Session;
use crate::storage::DataDir;
use crate::store::NullThemeSink;
use crate::tasks::{today_key, Task};
use crate::ui::{format_seconds, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The task command implementation.
pub struct TaskCommand {
    data_dir: DataDir,
    args: TaskArgs,
}

impl TaskCommand {
    /// Create a new task command.
    pub fn new(data_dir: DataDir, args: TaskArgs) -> Self {
        Self { data_dir, args }
    }
}

/// One display line for a task.
fn format_task_line(task: &Task) -> String {
    if task.time_spent > 0 {
        format!(
            "[{}] {} ({})",
            task.status,
            task.title,
            format_seconds(task.time_spent)
        )
    } else {
        format!("[{}] {}", task.status, task.title)
    }
}

impl Command for TaskCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut session = Session::open(self.data_dir.clone(), Box::new(NullThemeSink))?;

        match &self.args.command {
            TaskCommands::Add { title } => {
                let task = session.add_task(&title.join(" "))?;
                ui.success(&format!("Added task: {}", task.title));
            }
            TaskCommands::Start { title } => {
                let title = title.join(" ");
                match session.activate_task(&title) {
                    Ok(()) => ui.success(&format!("Now doing: {}", title)),
                    Err(e) => {
                        ui.error(&e.to_string());
                        return Ok(CommandResult::failure(1));
                    }
                }
            }
            TaskCommands::Pause { title } => {
                let title = title.join(" ");
                match session.pause_task(&title) {
                    Ok(()) => ui.success(&format!("Paused: {}", title)),
                    Err(e) => {
                        ui.error(&e.to_string());
                        return Ok(CommandResult::failure(1));
                    }
                }
            }
            TaskCommands::Done { title } => {
                let title = title.join(" ");
                match session.finish_task(&title) {
                    Ok(task) => {
                        let spent = if task.time_spent > 0 {
                            format!(" ({})", format_seconds(task.time_spent))
                        } else {
                            String::new()
                        };
                        ui.success(&format!("Done: {}{}", task.title, spent));
                    }
                    Err(e) => {
                        ui.error(&e.to_string());
                        return Ok(CommandResult::failure(1));
                    }
                }
            }
            TaskCommands::Rm { title } => {
                let title = title.join(" ");
                match session.remove_task(&title) {
                    Ok(()) => ui.success(&format!("Deleted: {}", title)),
                    Err(e) => {
                        ui.error(&e.to_string());
                        return Ok(CommandResult::failure(1));
                    }
                }
            }
            TaskCommands::List { day, done } => {
                let day = day.clone().unwrap_or_else(today_key);

                if *done || day != today_key() {
                    let tasks = session.tasks_for_day(&day, *done);
                    show_task_lines(ui, &day, tasks.iter());
                } else {
                    // Today's open tasks come straight from the observable
                    // container: the subscription replays the current value.
                    let lines = Rc::new(RefCell::new(Vec::new()));
                    {
                        let lines = Rc::clone(&lines);
                        session
                            .context_mut()
                            .tasks
                            .subscribe(move |tasks: &Vec<Task>| {
                                *lines.borrow_mut() =
                                    tasks.iter().map(format_task_line).collect();
                            });
                    }

                    let lines = lines.borrow();
                    if lines.is_empty() {
                        ui.message(&format!("No tasks for {}.", day));
                    } else {
                        ui.message(&format!("Tasks for {}:", day));
                        for line in lines.iter() {
                            ui.message(&format!("  {}", line));
                        }
                    }
                }
            }
        }

        Ok(CommandResult::success())
    }
}

fn show_task_lines<'a>(
    ui: &mut dyn UserInterface,
    day: &str,
    tasks: impl Iterator<Item = &'a Task>,
) {
    let lines: Vec<String> = tasks.map(format_task_line).collect();
    if lines.is_empty() {
        ui.message(&format!("No tasks for {}.", day));
    } else {
        ui.message(&format!("Tasks for {}:", day));
        for line in lines {
            ui.message(&format!("  {}", line));
        }
    }
}
