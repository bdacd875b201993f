//! User story model.
//!
//! A user story groups tasks under one unit of business value. Its
//! assignee, span, and size estimate are derived from its scheduled
//! tasks by the roll-up pass — never set by callers.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Task, WorkFront};

/// A unit of business value decomposed into tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStory {
    /// Unique story identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Rolled-up assignee (executor with the most scheduled tasks).
    pub assignee: Option<String>,
    /// Earliest start among scheduled tasks.
    pub start: Option<DateTime<FixedOffset>>,
    /// Latest end among scheduled tasks.
    pub end: Option<DateTime<FixedOffset>>,
    /// Size estimate derived from total scheduled effort.
    pub story_points: f64,
    /// Tasks in declared scheduling order.
    pub tasks: Vec<Task>,
}

impl UserStory {
    /// Creates a new story with no tasks.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            description: None,
            assignee: None,
            start: None,
            end: None,
            story_points: 0.0,
            tasks: Vec::new(),
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

    /// Appends a task, preserving declared order.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Tasks belonging to a given work-front.
    pub fn tasks_by_work_front(&self, front: WorkFront) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.work_front == front).collect()
    }

    /// Tasks that reached the scheduled state.
    pub fn scheduled_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_scheduled()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_builder() {
        let story = UserStory::new("US-1")
            .with_title("Order placement")
            .with_task(Task::new("T1", "US-1", WorkFront::Backend))
            .with_task(Task::new("T2", "US-1", WorkFront::Frontend));

        assert_eq!(story.id, "US-1");
        assert_eq!(story.tasks.len(), 2);
        assert!(story.assignee.is_none());
        assert_eq!(story.story_points, 0.0);
    }

    #[test]
    fn test_tasks_by_work_front() {
        let story = UserStory::new("US-1")
            .with_task(Task::new("T1", "US-1", WorkFront::Backend))
            .with_task(Task::new("T2", "US-1", WorkFront::Qa))
            .with_task(Task::new("T3", "US-1", WorkFront::Backend));

        assert_eq!(story.tasks_by_work_front(WorkFront::Backend).len(), 2);
        assert_eq!(story.tasks_by_work_front(WorkFront::Qa).len(), 1);
        assert!(story.tasks_by_work_front(WorkFront::Devops).is_empty());
    }

    #[test]
    fn test_scheduled_tasks_empty_before_run() {
        let story = UserStory::new("US-1").with_task(Task::new("T1", "US-1", WorkFront::Qa));
        assert!(story.scheduled_tasks().is_empty());
    }
}
