//! Deterministic sprint scheduler for agile delivery teams.
//!
//! Turns a sprint backlog (user stories broken into effort-estimated
//! tasks) into a concrete calendar plan: each task gets an executor, a
//! start instant, and an end instant on a half-day grid, honoring
//! working hours, weekends, personal absences, finish-to-start
//! dependencies, and per-executor capacity.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Sprint`, `UserStory`, `Task`,
//!   `Executor`, `ExecutorRoster`, `Absence`, plus the working-calendar
//!   arithmetic
//! - **`scheduler`**: The scheduling pipeline — capacity ledger,
//!   dependency resolution, executor selection, the single-sweep
//!   `SprintScheduler`, story roll-up, and the run report
//! - **`validation`**: Sprint configuration checks (window sanity,
//!   self-dependencies)
//! - **`error`**: The `ScheduleError` type for configuration failures
//!
//! # Design
//!
//! Scheduling is a pure in-memory transformation: `SprintScheduler`
//! mutates a `Sprint` and returns a `ScheduleReport`. There is no I/O,
//! no clock access, and no randomness; determinism is a contract, not
//! an accident. Work-item boards, issue trackers, and persistence live
//! in callers.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Cohn (2005), "Agile Estimating and Planning"

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::ScheduleError;
