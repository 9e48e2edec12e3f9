//! Application context.
//!
//! [`AppContext`] gathers the observable containers into one struct,
//! constructed once at startup and passed by reference to consumers. There
//! is no hidden global state; single-instance semantics come from the
//! session owning exactly one context.

use crate::states::WorkState;
use crate::tasks::Task;

use super::observable::Observable;
use super::theme::{ThemeSink, ThemeStore};

/// The observable state shared by all UI consumers.
pub struct AppContext {
    /// Open tasks for the current day.
    pub tasks: Observable<Vec<Task>>,

    /// All work states, in creation order.
    pub states: Observable<Vec<WorkState>>,

    /// The currently selected work state, if any.
    ///
    /// A value-copy selection into `states`; callers reconcile it manually
    /// when the referenced state is removed or replaced.
    pub active_state: Observable<Option<WorkState>>,

    /// The theme preference, mirrored through the injected sink.
    pub theme: ThemeStore,
}

impl AppContext {
    /// Create a context with empty collections and the given theme sink.
    pub fn new(sink: Box<dyn ThemeSink>) -> Self {
        Self {
            tasks: Observable::new(Vec::new()),
            states: Observable::new(Vec::new()),
            active_state: Observable::new(None),
            theme: ThemeStore::new(sink),
        }
    }

    /// Create a context for a headless run.
    pub fn headless() -> Self {
        Self {
            tasks: Observable::new(Vec::new()),
            states: Observable::new(Vec::new()),
            active_state: Observable::new(None),
            theme: ThemeStore::headless(),
        }
    }

    /// Drop the active selection if it references the given state id.
    pub fn reconcile_removed_state(&mut self, id: uuid::Uuid) {
        if self.active_state.get().as_ref().map(|s| s.id) == Some(id) {
            self.active_state.set(None);
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("tasks", &self.tasks.get().len())
            .field("states", &self.states.get().len())
            .field("active_state", &self.active_state.get().is_some())
            .field("theme", &self.theme.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::theme::ThemePreference;

    #[test]
    fn fresh_context_has_empty_collections() {
        let ctx = AppContext::headless();
        assert!(ctx.tasks.get().is_empty());
        assert!(ctx.states.get().is_empty());
        assert!(ctx.active_state.get().is_none());
        assert_eq!(ctx.theme.get(), ThemePreference::Dark);
    }

    #[test]
    fn reconcile_clears_matching_selection() {
        let mut ctx = AppContext::headless();
        let state = WorkState::new("deep work");
        let id = state.id;

        ctx.active_state.set(Some(state));
        ctx.reconcile_removed_state(id);

        assert!(ctx.active_state.get().is_none());
    }

    #[test]
    fn reconcile_keeps_unrelated_selection() {
        let mut ctx = AppContext::headless();
        let state = WorkState::new("deep work");

        ctx.active_state.set(Some(state.clone()));
        ctx.reconcile_removed_state(uuid::Uuid::new_v4());

        assert_eq!(ctx.active_state.get().as_ref().map(|s| s.id), Some(state.id));
    }
}
