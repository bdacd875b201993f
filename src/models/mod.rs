//! Sprint scheduling domain models.
//!
//! Core data types for the planning problem and its solution: the sprint
//! window and its story/task graph, the executor roster with absence
//! calendars, and the business-calendar arithmetic the engine's clock
//! runs on.
//!
//! # Domain Mapping
//!
//! | Type | Project tracker |
//! |------|----------------|
//! | [`Sprint`] | Iteration |
//! | [`UserStory`] | User Story work item |
//! | [`Task`] | Task work item |
//! | [`Executor`] | Team member |
//! | [`Absence`] | Day off / capacity reduction |

mod calendar;
mod executor;
mod sprint;
mod story;
mod task;

pub use calendar::{
    hours_between, is_weekend, is_working_instant, next_working_instant, period_end,
    to_external_display, Absence, AbsencePeriod, PERIOD_SPLIT_HOUR, WORKDAY_END_HOUR,
    WORKDAY_START_HOUR,
};
pub use executor::{AbsenceCalendar, Executor, ExecutorRoster, DEFAULT_DAILY_CAPACITY};
pub use sprint::Sprint;
pub use story::UserStory;
pub use task::{Task, TaskStatus, WorkFront};
