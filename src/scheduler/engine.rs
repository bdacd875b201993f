//! Sprint scheduling engine.
//!
//! # Algorithm
//!
//! One linear sweep over the sprint's stories in declared order, and over
//! each story's tasks in declared order. Per task:
//!
//! 1. Resolve the executor: a preset assignee is validated against the
//!    roster; otherwise the selector picks from the work-front pool.
//! 2. Earliest start = max(sprint start, executor's latest committed end,
//!    latest dependency end).
//! 3. Snap forward to the executor's next working instant.
//! 4. Walk the calendar forward consuming the effort estimate period by
//!    period, skipping the executor's non-working spans.
//! 5. Reject the commit if the end would run past the sprint window.
//! 6. Commit: set dates, status, external display end; debit the ledger.
//!
//! Every failure mode is soft: the task stays pending (with a reason in
//! the run report) and the sweep continues. Tasks must be declared in a
//! dependency-compatible order; there is no retry pass and no reordering.
//!
//! # Complexity
//! O(n²) in task count (dependency and executor lookups scan the graph),
//! linear in calendar days walked.

use chrono::{DateTime, FixedOffset};
use tracing::{info, warn};

use crate::error::ScheduleError;
use crate::models::{
    hours_between, next_working_instant, period_end, to_external_display, Absence,
    AbsenceCalendar, ExecutorRoster, Sprint, Task, TaskStatus,
};
use crate::scheduler::dependency::{resolve_dependencies, Resolution};
use crate::scheduler::ledger::CapacityLedger;
use crate::scheduler::report::{CapacitySnapshot, PendingReason, ScheduleReport};
use crate::scheduler::rollup::roll_up_story;
use crate::scheduler::selector::select_executor;
use crate::validation::validate_sprint;

/// Tolerance for effort-hour comparisons.
const HOURS_EPSILON: f64 = 1e-9;

/// A successful scheduling attempt, ready to be committed.
struct Commitment {
    assignee: String,
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    external_end: DateTime<FixedOffset>,
}

/// Schedules one sprint's tasks onto calendar time.
///
/// The roster and absence calendar are read-only for the duration of a
/// run; the capacity ledger is rebuilt per run. Not safe for concurrent
/// scheduling of the same sprint — partition by sprint or serialize.
///
/// # Example
///
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use sprint_scheduler::models::{
///     AbsenceCalendar, Executor, ExecutorRoster, Sprint, Task, UserStory, WorkFront,
/// };
/// use sprint_scheduler::scheduler::SprintScheduler;
///
/// let tz = FixedOffset::west_opt(3 * 3600).unwrap();
/// let mut sprint = Sprint::new(
///     "2024_S12",
///     tz.with_ymd_and_hms(2024, 3, 18, 9, 0, 0).single().unwrap(),
///     tz.with_ymd_and_hms(2024, 3, 29, 17, 0, 0).single().unwrap(),
/// )
/// .with_story(UserStory::new("US-1").with_task(
///     Task::new("T1", "US-1", WorkFront::Backend).with_estimate(6.0),
/// ));
///
/// let roster = ExecutorRoster::new(
///     vec![Executor::new("backend1@example.com")],
///     vec![],
///     vec![],
///     vec![],
/// );
/// let absences = AbsenceCalendar::new();
/// let scheduler = SprintScheduler::new(&roster, &absences);
/// let report = scheduler.schedule(&mut sprint).unwrap();
///
/// assert_eq!(report.scheduled_count, 1);
/// assert!(sprint.user_stories[0].tasks[0].is_scheduled());
/// ```
pub struct SprintScheduler<'a> {
    roster: &'a ExecutorRoster,
    absences: &'a AbsenceCalendar,
}

impl<'a> SprintScheduler<'a> {
    /// Creates a scheduler over a roster and absence calendar.
    pub fn new(roster: &'a ExecutorRoster, absences: &'a AbsenceCalendar) -> Self {
        Self { roster, absences }
    }

    /// Runs one scheduling sweep over the sprint, mutating tasks and
    /// stories in place.
    ///
    /// Fails fast only on configuration errors (empty window,
    /// self-dependency); every per-task failure is recorded in the
    /// returned report instead.
    pub fn schedule(&self, sprint: &mut Sprint) -> Result<ScheduleReport, ScheduleError> {
        validate_sprint(sprint)?;
        info!(sprint = %sprint.name, "scheduling sprint");

        let mut ledger =
            CapacityLedger::new(self.roster, self.absences, sprint.start, sprint.end);
        let mut report = ScheduleReport::default();

        for story_idx in 0..sprint.user_stories.len() {
            let story_id = sprint.user_stories[story_idx].id.clone();
            info!(story = %story_id, "scheduling story");

            for task_idx in 0..sprint.user_stories[story_idx].tasks.len() {
                let task = &sprint.user_stories[story_idx].tasks[task_idx];
                if task.status != TaskStatus::Pending {
                    continue;
                }

                match self.attempt(sprint, task, &ledger) {
                    Ok(commitment) => {
                        ledger.debit(&commitment.assignee, task.estimated_hours);
                        report.record_scheduled();
                        info!(
                            task = %task.id,
                            assignee = %commitment.assignee,
                            start = %commitment.start,
                            end = %commitment.end,
                            "task scheduled"
                        );

                        let task = &mut sprint.user_stories[story_idx].tasks[task_idx];
                        task.assignee = Some(commitment.assignee);
                        task.start = Some(commitment.start);
                        task.end = Some(commitment.end);
                        task.external_end = Some(commitment.external_end);
                        task.status = TaskStatus::Scheduled;
                    }
                    Err(reason) => {
                        warn!(task = %task.id, ?reason, "task left pending");
                        report.record_pending(task.id.clone(), story_id.clone(), reason);
                    }
                }
            }

            roll_up_story(&mut sprint.user_stories[story_idx]);
        }

        report.capacity = ledger
            .balances()
            .map(|(id, initial, remaining)| CapacitySnapshot {
                executor_id: id.to_string(),
                initial_hours: initial,
                remaining_hours: remaining,
            })
            .collect();
        report.capacity.sort_by(|a, b| a.executor_id.cmp(&b.executor_id));

        info!(
            scheduled = report.scheduled_count,
            pending = report.pending.len(),
            "sprint scheduling finished"
        );
        Ok(report)
    }

    /// One atomic scheduling attempt. Mutates nothing; the caller commits.
    fn attempt(
        &self,
        sprint: &Sprint,
        task: &Task,
        ledger: &CapacityLedger,
    ) -> Result<Commitment, PendingReason> {
        let assignee = self.resolve_assignee(task, ledger)?;
        let absences = self.absences_of(&assignee);
        let offset = *sprint.start.offset();

        let dependency_floor = match resolve_dependencies(sprint, task) {
            Resolution::Unconstrained => None,
            Resolution::ReadyAfter(end) => Some(end),
            Resolution::Unresolved(ids) => {
                return Err(PendingReason::UnresolvedDependency(ids))
            }
        };

        let executor_free = sprint
            .tasks_by_assignee(&assignee)
            .filter(|t| t.is_scheduled() && t.id != task.id)
            .filter_map(|t| t.end)
            .max()
            .unwrap_or(sprint.start);

        let mut earliest = sprint.start.max(executor_free);
        if let Some(floor) = dependency_floor {
            earliest = earliest.max(floor);
        }

        let start = next_working_instant(earliest.with_timezone(&offset), absences);
        let end = walk_effort(start, task.estimated_hours, absences);

        if end > sprint.end {
            return Err(PendingReason::ExceedsSprintWindow);
        }

        Ok(Commitment {
            assignee,
            start,
            end,
            external_end: to_external_display(end),
        })
    }

    /// Validates a preset assignee against the roster, or selects one.
    fn resolve_assignee(
        &self,
        task: &Task,
        ledger: &CapacityLedger,
    ) -> Result<String, PendingReason> {
        match &task.assignee {
            Some(preset) => {
                if self.roster.contains(preset) {
                    Ok(preset.clone())
                } else {
                    Err(PendingReason::UnknownAssignee)
                }
            }
            None => select_executor(self.roster, ledger, task.work_front)
                .map(|e| e.id.clone())
                .ok_or(PendingReason::NoExecutorAvailable),
        }
    }

    fn absences_of(&self, executor_id: &str) -> &[Absence] {
        self.absences
            .get(executor_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Walks the calendar forward from a working instant, consuming effort.
///
/// Each step consumes up to the hours left in the current period and
/// terminates on the period boundary where the estimate runs out, so
/// ends always land on 12:00 or 17:00. Non-working spans contribute
/// nothing and are skipped whole. A zero estimate completes immediately
/// at the start instant.
fn walk_effort(
    start: DateTime<FixedOffset>,
    estimated_hours: f64,
    absences: &[Absence],
) -> DateTime<FixedOffset> {
    if estimated_hours <= 0.0 {
        return start;
    }

    let mut current = start;
    let mut remaining = estimated_hours;
    loop {
        let boundary = period_end(current);
        let available = hours_between(current, boundary);
        if remaining <= available + HOURS_EPSILON {
            return boundary;
        }
        remaining -= available;
        current = next_working_instant(boundary, absences);
    }
}
