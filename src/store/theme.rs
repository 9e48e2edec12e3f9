//! Theme preference store.
//!
//! [`ThemeStore`] is an observable container specialized to the two-valued
//! [`ThemePreference`], with one side effect layered onto `set`: an injected
//! [`ThemeSink`] mirrors the preference onto the UI root before subscribers
//! are notified. Headless contexts inject [`NullThemeSink`] and skip the
//! mirroring entirely.
//!
//! `update` forwards to the inner container without touching the sink. Only
//! direct `set` calls synchronize the root; callers using `update` bypass it.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use super::observable::{Observable, SubscriberId};

/// Class tokens mirrored onto the UI root, one per preference.
const THEME_TOKENS: [&str; 2] = ["light", "dark"];

/// The user's visual theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
}

impl ThemePreference {
    /// The class token mirrored onto the UI root for this preference.
    pub fn class_token(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// The other preference.
    pub fn toggled(&self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_token())
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            _ => Err(format!("unknown theme: {}", s)),
        }
    }
}

/// The class set on the UI root element.
///
/// Shared between the session that owns the root and the [`ClassListSink`]
/// that mutates it. Cloning shares the same underlying set.
#[derive(Debug, Clone, Default)]
pub struct RootClasses {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl RootClasses {
    /// Create an empty class set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a class token is present.
    pub fn contains(&self, token: &str) -> bool {
        self.classes.borrow().contains(token)
    }

    fn remove(&self, token: &str) {
        self.classes.borrow_mut().remove(token);
    }

    fn insert(&self, token: &str) {
        self.classes.borrow_mut().insert(token.to_string());
    }
}

/// Applies a theme preference to the surrounding environment.
///
/// Selected at construction time: interactive sessions mirror the preference
/// onto the UI root, headless contexts use [`NullThemeSink`].
pub trait ThemeSink {
    /// Apply the preference.
    fn apply(&mut self, theme: ThemePreference);
}

/// Sink that mirrors the preference onto a [`RootClasses`] set.
///
/// Removes both theme tokens, then inserts the one matching the new value.
#[derive(Debug)]
pub struct ClassListSink {
    root: RootClasses,
}

impl ClassListSink {
    /// Create a sink writing to the given root class set.
    pub fn new(root: RootClasses) -> Self {
        Self { root }
    }
}

impl ThemeSink for ClassListSink {
    fn apply(&mut self, theme: ThemePreference) {
        for token in THEME_TOKENS {
            self.root.remove(token);
        }
        self.root.insert(theme.class_token());
    }
}

/// Sink for headless contexts: applying a theme does nothing.
#[derive(Debug, Default)]
pub struct NullThemeSink;

impl ThemeSink for NullThemeSink {
    fn apply(&mut self, _theme: ThemePreference) {}
}

/// Observable theme preference with an injected sink.
pub struct ThemeStore {
    inner: Observable<ThemePreference>,
    sink: Box<dyn ThemeSink>,
}

impl ThemeStore {
    /// Create a store with the given sink. The initial value is dark.
    pub fn new(sink: Box<dyn ThemeSink>) -> Self {
        Self {
            inner: Observable::new(ThemePreference::default()),
            sink,
        }
    }

    /// Create a store for a headless context.
    pub fn headless() -> Self {
        Self::new(Box::new(NullThemeSink))
    }

    /// Read the current preference.
    pub fn get(&self) -> ThemePreference {
        *self.inner.get()
    }

    /// Register a subscriber; it receives the current value immediately.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ThemePreference) + 'static,
    ) -> SubscriberId {
        self.inner.subscribe(callback)
    }

    /// Remove a subscriber.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.inner.unsubscribe(id);
    }

    /// Apply the preference to the sink, then propagate to subscribers.
    pub fn set(&mut self, value: ThemePreference) {
        self.sink.apply(value);
        self.inner.set(value);
    }

    /// Pass-through to the inner container. Does not touch the sink.
    pub fn update(&mut self, f: impl FnOnce(&ThemePreference) -> ThemePreference) {
        self.inner.update(f);
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("value", self.inner.get())
            .finish()
    }
}
