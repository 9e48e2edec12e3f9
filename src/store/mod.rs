//! Observable state containers.
//!
//! This module provides:
//! - [`Observable`] - a generic value container with synchronous subscribers
//! - [`ThemeStore`] - the theme preference container with an injected sink
//! - [`AppContext`] - the containers gathered into one explicit struct
//!
//! # Example
//!
//! ```
//! use tempo::store::Observable;
//!
//! let mut counter = Observable::new(0);
//! counter.subscribe(|value| println!("counter is {}", value));
//! counter.update(|current| current + 1);
//! assert_eq!(*counter.get(), 1);
//! ```

pub mod context;
pub mod observable;
pub mod theme;

pub use context::AppContext;
pub use observable::{Observable, SubscriberId};
pub use theme::{
    ClassListSink, NullThemeSink, RootClasses, ThemePreference, ThemeSink, ThemeStore,
};
