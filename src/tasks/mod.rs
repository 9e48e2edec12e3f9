//! Task tracking.
//!
//! This module provides the [`Task`] entity and the [`TaskLedger`], the
//! persisted pair of open/finished task books with a single-active invariant.

pub mod ledger;
pub mod task;

pub use ledger::{TaskLedger, DONE_FILE, OPEN_FILE};
pub use task::{today_key, Task, TaskStatus};
