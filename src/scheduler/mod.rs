//! Sprint scheduling pipeline.
//!
//! Provides the deterministic greedy scheduler and its supporting parts.
//!
//! # Pipeline
//!
//! - **`ledger`**: per-executor capacity accounting over the sprint window
//! - **`dependency`**: finish-to-start dependency resolution
//! - **`selector`**: capacity-greedy executor selection with roster-order ties
//! - **`engine`**: the single-sweep [`SprintScheduler`]
//! - **`rollup`**: user-story date and story-point aggregation
//! - **`report`**: run outcome summary with per-task pending reasons
//!
//! # Algorithm
//!
//! `SprintScheduler` is a greedy, declaration-ordered, earliest-fit
//! heuristic. It is deterministic: the same sprint, roster, and absence
//! calendar always produce the same schedule. It does not backtrack or
//! optimize; tasks that cannot fit are reported, not reshuffled.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3
//! - Brucker (2007), "Scheduling Algorithms"

mod dependency;
mod engine;
mod ledger;
mod report;
mod rollup;
mod selector;

pub use dependency::{resolve_dependencies, Resolution};
pub use engine::SprintScheduler;
pub use ledger::CapacityLedger;
pub use report::{CapacitySnapshot, PendingReason, PendingTask, ScheduleReport};
pub use rollup::{roll_up_story, story_points_for_hours};
pub use selector::select_executor;
