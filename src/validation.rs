//! Fail-fast configuration checks.
//!
//! Run before any task is attempted. Only two conditions are hard errors:
//! an empty sprint window and a length-1 dependency cycle (a task
//! depending on itself). Longer cycles are a known limitation — they are
//! not detected and manifest as permanently pending tasks, observable in
//! the run report.

use crate::error::ScheduleError;
use crate::models::Sprint;

/// Validates a sprint before scheduling.
///
/// Returns the first violation found:
/// 1. `sprint.start < sprint.end`
/// 2. no task depends on itself
pub fn validate_sprint(sprint: &Sprint) -> Result<(), ScheduleError> {
    if sprint.end <= sprint.start {
        return Err(ScheduleError::EmptySprintWindow {
            name: sprint.name.clone(),
            start: sprint.start,
            end: sprint.end,
        });
    }

    for task in sprint.all_tasks() {
        if task.dependencies.iter().any(|dep| dep == &task.id) {
            return Err(ScheduleError::SelfDependency {
                task_id: task.id.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, UserStory, WorkFront};
    use chrono::{DateTime, FixedOffset, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
        FixedOffset::west_opt(3 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .unwrap()
    }

    #[test]
    fn test_valid_sprint() {
        let sprint = Sprint::new("S12", at(2024, 3, 18, 9), at(2024, 3, 29, 17)).with_story(
            UserStory::new("US-1")
                .with_task(Task::new("T1", "US-1", WorkFront::Backend))
                .with_task(Task::new("T2", "US-1", WorkFront::Qa).with_dependency("T1")),
        );
        assert!(validate_sprint(&sprint).is_ok());
    }

    #[test]
    fn test_inverted_window() {
        let sprint = Sprint::new("S12", at(2024, 3, 29, 17), at(2024, 3, 18, 9));
        let err = validate_sprint(&sprint).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptySprintWindow { .. }));
    }

    #[test]
    fn test_zero_length_window() {
        let sprint = Sprint::new("S12", at(2024, 3, 18, 9), at(2024, 3, 18, 9));
        assert!(validate_sprint(&sprint).is_err());
    }

    #[test]
    fn test_self_dependency() {
        let sprint = Sprint::new("S12", at(2024, 3, 18, 9), at(2024, 3, 29, 17)).with_story(
            UserStory::new("US-1")
                .with_task(Task::new("T1", "US-1", WorkFront::Backend).with_dependency("T1")),
        );
        let err = validate_sprint(&sprint).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::SelfDependency {
                task_id: "T1".into()
            }
        );
    }

    #[test]
    fn test_longer_cycles_not_detected() {
        // T1 → T2 → T1 starves at scheduling time, but is not a
        // configuration error.
        let sprint = Sprint::new("S12", at(2024, 3, 18, 9), at(2024, 3, 29, 17)).with_story(
            UserStory::new("US-1")
                .with_task(Task::new("T1", "US-1", WorkFront::Backend).with_dependency("T2"))
                .with_task(Task::new("T2", "US-1", WorkFront::Backend).with_dependency("T1")),
        );
        assert!(validate_sprint(&sprint).is_ok());
    }
}
