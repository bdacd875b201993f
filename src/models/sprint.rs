//! Sprint model.
//!
//! A sprint is the fixed planning window the engine schedules into. It
//! owns the user-story/task graph; the engine mutates tasks and stories
//! in place and never reparents them.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Task, UserStory};

/// A fixed-duration planning window containing user stories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    /// Sprint name (e.g. `2024_S12_Mar18-Mar29`).
    pub name: String,
    /// Team label.
    pub team: String,
    /// Window start (inclusive). Its offset defines the engine's wall clock.
    pub start: DateTime<FixedOffset>,
    /// Window end (inclusive). Must be after `start`.
    pub end: DateTime<FixedOffset>,
    /// User stories in declared order.
    pub user_stories: Vec<UserStory>,
}

impl Sprint {
    /// Creates a new sprint with no stories.
    pub fn new(
        name: impl Into<String>,
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            name: name.into(),
            team: String::new(),
            start,
            end,
            user_stories: Vec::new(),
        }
    }

    /// Sets the team label.
    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = team.into();
        self
    }

    /// Appends a user story.
    pub fn with_story(mut self, story: UserStory) -> Self {
        self.user_stories.push(story);
        self
    }

    /// All tasks across all stories, in declared order.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.user_stories.iter().flat_map(|us| us.tasks.iter())
    }

    /// Finds a task anywhere in the sprint by its id.
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.all_tasks().find(|t| t.id == task_id)
    }

    /// All tasks currently assigned to an executor.
    pub fn tasks_by_assignee<'a>(&'a self, assignee: &'a str) -> impl Iterator<Item = &'a Task> {
        self.all_tasks()
            .filter(move |t| t.assignee.as_deref() == Some(assignee))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkFront;
    use chrono::{FixedOffset, TimeZone};

    fn sample_sprint() -> Sprint {
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let start = tz.with_ymd_and_hms(2024, 3, 18, 9, 0, 0).single().unwrap();
        let end = tz.with_ymd_and_hms(2024, 3, 29, 17, 0, 0).single().unwrap();
        Sprint::new("2024_S12_Mar18-Mar29", start, end)
            .with_team("Team A")
            .with_story(
                UserStory::new("US-1")
                    .with_task(
                        Task::new("T1", "US-1", WorkFront::Backend)
                            .with_assignee("backend1@example.com"),
                    )
                    .with_task(Task::new("T2", "US-1", WorkFront::Frontend)),
            )
            .with_story(
                UserStory::new("US-2").with_task(
                    Task::new("T3", "US-2", WorkFront::Backend)
                        .with_assignee("backend1@example.com"),
                ),
            )
    }

    #[test]
    fn test_all_tasks_spans_stories() {
        let sprint = sample_sprint();
        let ids: Vec<_> = sprint.all_tasks().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_find_task() {
        let sprint = sample_sprint();
        assert_eq!(sprint.find_task("T3").unwrap().parent_story_id, "US-2");
        assert!(sprint.find_task("T99").is_none());
    }

    #[test]
    fn test_tasks_by_assignee() {
        let sprint = sample_sprint();
        let assigned: Vec<_> = sprint
            .tasks_by_assignee("backend1@example.com")
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(assigned, vec!["T1", "T3"]);
    }
}
