//! Task model.
//!
//! A task is the atomic schedulable unit: it carries an effort estimate,
//! a work-front tag, optional dependencies on other tasks, and the dates
//! the engine computes for it.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Work-front tag partitioning the executor roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkFront {
    /// Server-side work.
    Backend,
    /// Client-side work.
    Frontend,
    /// Test execution work.
    Qa,
    /// Infrastructure work.
    Devops,
    /// Test-plan elaboration; staffed from the qa pool.
    QaPlan,
}

/// Scheduling state of a task.
///
/// `Blocked` is reserved for permanently unresolvable dependencies; the
/// engine currently leaves such tasks `Pending` and never sets it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Not yet scheduled (initial state).
    #[default]
    Pending,
    /// Dates committed (terminal success).
    Scheduled,
    /// Permanently unschedulable (reserved, terminal failure).
    Blocked,
}

/// A schedulable unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Roster pool this task draws its executor from.
    pub work_front: WorkFront,
    /// Estimated effort in hours. Zero is tolerated and completes instantly.
    pub estimated_hours: f64,
    /// Executor identifier (email). Preset values are validated against the roster.
    pub assignee: Option<String>,
    /// IDs of tasks that must be scheduled before this one starts.
    pub dependencies: Vec<String>,
    /// Computed start instant.
    pub start: Option<DateTime<FixedOffset>>,
    /// Computed end instant.
    pub end: Option<DateTime<FixedOffset>>,
    /// End instant rounded to the external tracker's display buckets.
    pub external_end: Option<DateTime<FixedOffset>>,
    /// Scheduling state.
    pub status: TaskStatus,
    /// Identifier of the owning user story.
    pub parent_story_id: String,
}

impl Task {
    /// Creates a new pending task.
    pub fn new(id: impl Into<String>, parent_story_id: impl Into<String>, front: WorkFront) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: None,
            work_front: front,
            estimated_hours: 0.0,
            assignee: None,
            dependencies: Vec::new(),
            start: None,
            end: None,
            external_end: None,
            status: TaskStatus::Pending,
            parent_story_id: parent_story_id.into(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the effort estimate in hours.
    pub fn with_estimate(mut self, hours: f64) -> Self {
        self.estimated_hours = hours;
        self
    }

    /// Presets the assignee.
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Adds a dependency on another task.
    pub fn with_dependency(mut self, task_id: impl Into<String>) -> Self {
        self.dependencies.push(task_id.into());
        self
    }

    /// Whether the task reached its terminal scheduled state.
    pub fn is_scheduled(&self) -> bool {
        self.status == TaskStatus::Scheduled
    }
}
