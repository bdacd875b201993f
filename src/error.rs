//! Error type for scheduling runs.
//!
//! Only malformed configuration is a hard error. Anything that merely
//! prevents one task from being placed (missing executor, unresolved
//! dependency, effort overflowing the sprint) is a soft failure: the task
//! stays pending and the run continues.

use chrono::{DateTime, FixedOffset};
use thiserror::Error;

/// A configuration error that aborts a scheduling run before any task is
/// attempted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The sprint window is empty or inverted.
    #[error("sprint '{name}' window is empty: end {end} is not after start {start}")]
    EmptySprintWindow {
        /// Sprint name.
        name: String,
        /// Window start.
        start: DateTime<FixedOffset>,
        /// Window end.
        end: DateTime<FixedOffset>,
    },
    /// A task lists itself among its dependencies.
    #[error("task '{task_id}' declares a dependency on itself")]
    SelfDependency {
        /// Offending task id.
        task_id: String,
    },
}
