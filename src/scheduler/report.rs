//! Scheduling run summary.
//!
//! A `ScheduleReport` is the observational output of one run: how many
//! tasks were committed, which were left pending and why, and what each
//! executor's capacity looked like before and after. It never feeds back
//! into scheduling decisions.

use serde::{Deserialize, Serialize};

/// Why a task was left pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingReason {
    /// The preset assignee appears in no roster pool.
    UnknownAssignee,
    /// The work-front pool is empty.
    NoExecutorAvailable,
    /// These dependency ids are missing or not yet scheduled.
    UnresolvedDependency(Vec<String>),
    /// The effort walk ran past the sprint's end instant.
    ExceedsSprintWindow,
}

/// A task left pending, with its reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTask {
    /// Task identifier.
    pub task_id: String,
    /// Owning story identifier.
    pub story_id: String,
    /// Why scheduling failed.
    pub reason: PendingReason,
}

/// One executor's capacity before and after the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitySnapshot {
    /// Executor identifier.
    pub executor_id: String,
    /// Ledger balance at construction.
    pub initial_hours: f64,
    /// Ledger balance after all commits (negative = over-committed).
    pub remaining_hours: f64,
}

/// Summary of one scheduling run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Number of tasks committed during this run.
    pub scheduled_count: usize,
    /// Tasks left pending, in attempt order.
    pub pending: Vec<PendingTask>,
    /// Per-executor capacity, sorted by executor id.
    pub capacity: Vec<CapacitySnapshot>,
}

impl ScheduleReport {
    /// Records a committed task.
    pub(crate) fn record_scheduled(&mut self) {
        self.scheduled_count += 1;
    }

    /// Records a pending task with its reason.
    pub(crate) fn record_pending(
        &mut self,
        task_id: impl Into<String>,
        story_id: impl Into<String>,
        reason: PendingReason,
    ) {
        self.pending.push(PendingTask {
            task_id: task_id.into(),
            story_id: story_id.into(),
            reason,
        });
    }

    /// Whether every attempted task was committed.
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending entry for a task, if any.
    pub fn pending_for(&self, task_id: &str) -> Option<&PendingTask> {
        self.pending.iter().find(|p| p.task_id == task_id)
    }

    /// Capacity snapshot for an executor, if tracked.
    pub fn capacity_for(&self, executor_id: &str) -> Option<&CapacitySnapshot> {
        self.capacity.iter().find(|c| c.executor_id == executor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_accumulates() {
        let mut report = ScheduleReport::default();
        report.record_scheduled();
        report.record_scheduled();
        report.record_pending("T3", "US-1", PendingReason::NoExecutorAvailable);

        assert_eq!(report.scheduled_count, 2);
        assert!(!report.is_complete());
        assert_eq!(
            report.pending_for("T3").unwrap().reason,
            PendingReason::NoExecutorAvailable
        );
        assert!(report.pending_for("T1").is_none());
    }

    #[test]
    fn test_empty_report_is_complete() {
        assert!(ScheduleReport::default().is_complete());
    }

    #[test]
    fn test_reason_serde_tags() {
        let json = serde_json::to_string(&PendingReason::ExceedsSprintWindow).unwrap();
        assert_eq!(json, "\"exceeds_sprint_window\"");

        let json =
            serde_json::to_string(&PendingReason::UnresolvedDependency(vec!["T1".into()]))
                .unwrap();
        assert!(json.contains("unresolved_dependency"));
    }
}
