//! Interactive session wiring.
//!
//! A [`Session`] owns the [`AppContext`] together with the persisted ledgers
//! and keeps them in sync: every mutation goes through the session, which
//! saves the affected store and pushes fresh values into the observable
//! containers so subscribed renderers see the change immediately.
//!
//! Time advances through [`advance_clock`](Session::advance_clock); the
//! session feeds it from wall-clock elapsed seconds between palette prompts
//! and from the one-second countdown loop.

use std::time::{Duration, Instant};

use crate::error::Result;
use crate::palette::{self, PaletteCommand, ThemeAction};
use crate::pomodoro::{Pomodoro, PomodoroConfig, Snapshot};
use crate::profile::Profile;
use crate::scratch;
use crate::settings::Settings;
use crate::states::{StateRegistry, WorkState};
use crate::storage::DataDir;
use crate::store::{AppContext, ThemePreference, ThemeSink};
use crate::tasks::{today_key, Task, TaskLedger};

/// One running instance of the application state.
pub struct Session {
    dir: DataDir,
    context: AppContext,
    ledger: TaskLedger,
    registry: StateRegistry,
    timer: Pomodoro,
    profile: Profile,
    settings: Settings,
    last_clock: Instant,
}

impl Session {
    /// Open a session against the data directory.
    ///
    /// Loads every persisted store, applies the saved theme through the
    /// sink, and fills the observable containers.
    pub fn open(dir: DataDir, sink: Box<dyn ThemeSink>) -> Result<Self> {
        let settings = Settings::load(&dir)?;

        let ledger = TaskLedger::load(&dir)?;
        let registry = StateRegistry::load(&dir)?;
        let profile = Profile::load(&dir)?;

        let mut context = AppContext::new(sink);
        context.theme.set(settings.theme);

        let mut session = Self {
            dir,
            context,
            ledger,
            registry,
            timer: Pomodoro::default(),
            profile,
            settings,
            last_clock: Instant::now(),
        };
        session.refresh_tasks();
        session.refresh_states();
        Ok(session)
    }

    /// The observable state containers.
    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Mutable access for subscribing renderers.
    pub fn context_mut(&mut self) -> &mut AppContext {
        &mut self.context
    }

    /// The lifetime counters.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Demote any task left active by an interrupted interactive run.
    ///
    /// One-shot invocations keep the active marker so `task start` carries
    /// over to the next command; an interactive session starting fresh
    /// cannot vouch for time that passed while nothing ran, so it demotes
    /// the stale task first.
    pub fn recover_interrupted(&mut self) -> Result<bool> {
        let changed = self.ledger.recover_startup();
        if changed {
            tracing::debug!("recovered task left active by a previous run");
            self.ledger.save(&self.dir)?;
            self.refresh_tasks();
        }
        Ok(changed)
    }

    // ---- tasks ----

    /// Add a new todo task for today.
    pub fn add_task(&mut self, title: &str) -> Result<Task> {
        let task = self.ledger.add(title, &today_key()).clone();
        self.ledger.save(&self.dir)?;
        self.refresh_tasks();
        Ok(task)
    }

    /// Mark the named task as the one being worked on.
    pub fn activate_task(&mut self, title: &str) -> Result<()> {
        self.ledger.activate(title)?;
        self.ledger.save(&self.dir)?;
        self.refresh_tasks();
        Ok(())
    }

    /// Demote the named task from active back to todo.
    pub fn pause_task(&mut self, title: &str) -> Result<()> {
        self.ledger.pause(title)?;
        self.ledger.save(&self.dir)?;
        self.refresh_tasks();
        Ok(())
    }

    /// Move the named task to the finished book and bump the counter.
    pub fn finish_task(&mut self, title: &str) -> Result<Task> {
        let task = self.ledger.finish(title)?.clone();
        self.profile.tasks_done += 1;
        self.ledger.save(&self.dir)?;
        self.profile.save(&self.dir)?;
        self.refresh_tasks();
        Ok(task)
    }

    /// Delete the named task from the open book.
    pub fn remove_task(&mut self, title: &str) -> Result<()> {
        self.ledger.remove(title)?;
        self.ledger.save(&self.dir)?;
        self.refresh_tasks();
        Ok(())
    }

    /// Tasks created on the given day.
    pub fn tasks_for_day(&self, day: &str, finished: bool) -> Vec<Task> {
        self.ledger
            .for_day(day, finished)
            .into_iter()
            .cloned()
            .collect()
    }

    // ---- work states ----

    /// Create a new work state.
    pub fn create_state(&mut self, name: &str) -> Result<WorkState> {
        let state = self.registry.create(name).clone();
        self.registry.save(&self.dir)?;
        self.refresh_states();
        Ok(state)
    }

    /// Rename a work state, keeping an active selection copy in sync.
    pub fn rename_state(&mut self, name: &str, new_name: &str) -> Result<()> {
        let id = self.resolve_state(name)?.id;
        self.registry.rename(id, new_name)?;
        self.registry.save(&self.dir)?;

        if self.context.active_state.get().as_ref().map(|s| s.id) == Some(id) {
            self.context
                .active_state
                .set(self.registry.get(id).cloned());
        }
        self.refresh_states();
        Ok(())
    }

    /// Delete a work state, dropping a matching active selection.
    pub fn delete_state(&mut self, name: &str) -> Result<()> {
        let id = self.resolve_state(name)?.id;
        self.registry.delete(id)?;
        self.registry.save(&self.dir)?;
        self.context.reconcile_removed_state(id);
        self.refresh_states();
        Ok(())
    }

    /// Select a work state as the active one.
    pub fn select_state(&mut self, name: &str) -> Result<WorkState> {
        let state = self.resolve_state(name)?;
        self.context.active_state.set(Some(state.clone()));
        Ok(state)
    }

    /// Clear the active work-state selection.
    pub fn clear_selection(&mut self) {
        self.context.active_state.set(None);
    }

    /// All work states, in creation order.
    pub fn states(&self) -> Vec<WorkState> {
        self.registry.list().to_vec()
    }

    fn resolve_state(&self, name: &str) -> Result<WorkState> {
        self.registry
            .find_by_name(name)
            .cloned()
            .ok_or_else(|| crate::error::TempoError::StateNotFound {
                name: name.to_string(),
            })
    }

    // ---- theme ----

    /// The current theme preference.
    pub fn theme(&self) -> ThemePreference {
        self.context.theme.get()
    }

    /// Set and persist the theme preference.
    pub fn set_theme(&mut self, value: ThemePreference) -> Result<()> {
        self.context.theme.set(value);
        self.settings.theme = value;
        self.settings.save(&self.dir)
    }

    /// Flip and persist the theme preference.
    pub fn toggle_theme(&mut self) -> Result<ThemePreference> {
        let next = self.theme().toggled();
        self.set_theme(next)?;
        Ok(next)
    }

    // ---- pomodoro ----

    /// Replace the timer configuration (resets the machine).
    pub fn configure_pomodoro(&mut self, config: PomodoroConfig) {
        self.timer = Pomodoro::new(config);
    }

    /// Begin or resume a pomodoro work session.
    pub fn start_pomodoro(&mut self) {
        self.timer.start();
    }

    /// Freeze the pomodoro countdown.
    pub fn pause_pomodoro(&mut self) {
        self.timer.pause();
    }

    /// Reset the pomodoro timer.
    pub fn stop_pomodoro(&mut self) {
        self.timer.stop();
    }

    /// Current pomodoro view.
    pub fn pomodoro(&self) -> Snapshot {
        self.timer.snapshot()
    }

    // ---- clock ----

    /// Feed elapsed seconds into the timer and the accrual paths.
    ///
    /// Focus seconds accrue into the active task, the lifetime counter, and
    /// the selected work state. Completed pomodoro work sessions bump the
    /// profile counter.
    pub fn advance_clock(&mut self, secs: u64) -> Result<()> {
        if secs == 0 {
            return Ok(());
        }

        let mut profile_dirty = false;

        for _ in 0..secs {
            if let Some(transition) = self.timer.tick() {
                tracing::debug!("pomodoro moved to {}", transition.to);
                if transition.completed_work_session() {
                    self.profile.pomodoros_done += 1;
                    profile_dirty = true;
                }
            }
        }

        if self.ledger.tick(secs) {
            self.profile.seconds_tracked += secs;
            profile_dirty = true;
            self.ledger.save(&self.dir)?;
            self.refresh_tasks();

            let selected = self.context.active_state.get().as_ref().map(|s| s.id);
            if let Some(id) = selected {
                self.registry.add_time(id, secs);
                self.registry.save(&self.dir)?;
                self.context
                    .active_state
                    .set(self.registry.get(id).cloned());
                self.refresh_states();
            }
        }

        if profile_dirty {
            self.profile.save(&self.dir)?;
        }
        Ok(())
    }

    /// Advance by the wall-clock seconds elapsed since the last sync.
    pub fn sync_clock(&mut self) -> Result<()> {
        let elapsed = self.last_clock.elapsed().as_secs();
        if elapsed > 0 {
            // Keep the sub-second remainder for the next sync.
            self.last_clock += Duration::from_secs(elapsed);
            self.advance_clock(elapsed)?;
        }
        Ok(())
    }

    // ---- palette ----

    /// Execute one palette line and return its reply.
    pub fn dispatch(&mut self, line: &str) -> Result<String> {
        self.sync_clock()?;

        match palette::parse(line)? {
            PaletteCommand::Ping => Ok("pong!".into()),
            PaletteCommand::Date => Ok(palette::date_line()),
            PaletteCommand::Theme(ThemeAction::Set(value)) => {
                self.set_theme(value)?;
                Ok(format!("theme set to {}", value))
            }
            PaletteCommand::Theme(ThemeAction::Toggle) => {
                let next = self.toggle_theme()?;
                Ok(format!("theme toggled to {}", next))
            }
            PaletteCommand::Todo(title) => {
                let task = self.add_task(&title)?;
                Ok(format!("added task: {}", task.title))
            }
            PaletteCommand::Doing(title) => {
                self.activate_task(&title)?;
                Ok("task active".into())
            }
            PaletteCommand::Done(title) => {
                self.finish_task(&title)?;
                Ok("task moved to done".into())
            }
            PaletteCommand::Break(title) => {
                self.pause_task(&title)?;
                Ok("task paused".into())
            }
            PaletteCommand::Delete(title) => {
                self.remove_task(&title)?;
                Ok("task deleted".into())
            }
            PaletteCommand::UseState(name) => {
                let state = self.select_state(&name)?;
                Ok(format!("state active: {}", state.name))
            }
            PaletteCommand::StartPomodoro | PaletteCommand::ResumePomodoro => {
                self.start_pomodoro();
                Ok("pomodoro started".into())
            }
            PaletteCommand::PausePomodoro => {
                self.pause_pomodoro();
                Ok("pomodoro paused".into())
            }
            PaletteCommand::StopPomodoro => {
                self.stop_pomodoro();
                Ok("pomodoro stopped".into())
            }
            PaletteCommand::OpenScratch(path) => scratch::open(&path),
            PaletteCommand::SaveAck => Ok("file saved!".into()),
        }
    }

    // ---- container refresh ----

    fn refresh_tasks(&mut self) {
        let today: Vec<Task> = self
            .ledger
            .for_day(&today_key(), false)
            .into_iter()
            .cloned()
            .collect();
        self.context.tasks.set(today);
    }

    fn refresh_states(&mut self) {
        self.context.states.set(self.registry.list().to_vec());
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("dir", &self.dir.path())
            .field("context", &self.context)
            .finish()
    }
}
