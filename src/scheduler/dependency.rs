//! Dependency resolution across the sprint's task graph.
//!
//! A task may depend on tasks in its own story or anywhere else in the
//! sprint. A dependency resolves once its task has a committed end
//! instant; a missing or still-unscheduled dependency defers the owning
//! task (left pending) rather than failing the run.

use chrono::{DateTime, FixedOffset};

use crate::models::{Sprint, Task};

/// Outcome of resolving one task's dependency set.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// No dependencies declared: no start constraint.
    Unconstrained,
    /// All dependencies scheduled: start no earlier than this instant.
    ReadyAfter(DateTime<FixedOffset>),
    /// These dependency ids are missing or not yet scheduled.
    Unresolved(Vec<String>),
}

/// Resolves a task's dependencies against the full sprint graph.
///
/// Returns the latest end instant among the dependencies, or
/// [`Resolution::Unresolved`] listing every id that could not be found
/// or has no committed end yet.
pub fn resolve_dependencies(sprint: &Sprint, task: &Task) -> Resolution {
    if task.dependencies.is_empty() {
        return Resolution::Unconstrained;
    }

    let mut latest: Option<DateTime<FixedOffset>> = None;
    let mut unresolved = Vec::new();

    for dep_id in &task.dependencies {
        match sprint.find_task(dep_id).and_then(|dep| dep.end) {
            Some(end) => latest = Some(latest.map_or(end, |l| l.max(end))),
            None => unresolved.push(dep_id.clone()),
        }
    }

    if !unresolved.is_empty() {
        return Resolution::Unresolved(unresolved);
    }

    match latest {
        Some(end) => Resolution::ReadyAfter(end),
        // Unreachable: a non-empty, fully resolved set always has a max
        None => Resolution::Unconstrained,
    }
}
