//! Executor and roster models.
//!
//! Executors are the people tasks are assigned to. The roster partitions
//! them into ordered per-work-front pools; a person belongs to exactly
//! one pool. `qa-plan` tasks are staffed from the qa pool — the alias is
//! wired when the roster is built, not inside selection logic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Absence, WorkFront};

/// Default daily capacity in hours.
pub const DEFAULT_DAILY_CAPACITY: f64 = 6.0;

/// Absences per executor identifier.
pub type AbsenceCalendar = HashMap<String, Vec<Absence>>;

/// A scheduling participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Executor {
    /// Email-like identifier (primary key).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Hours of effort available per working day.
    pub daily_capacity: f64,
}

impl Executor {
    /// Creates an executor with the default daily capacity.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            daily_capacity: DEFAULT_DAILY_CAPACITY,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the daily capacity in hours.
    pub fn with_capacity(mut self, hours: f64) -> Self {
        self.daily_capacity = hours;
        self
    }
}

/// Ordered executor pools keyed by work-front.
///
/// Pool order matters: the selector breaks capacity ties by taking the
/// first-listed executor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutorRoster {
    pools: HashMap<WorkFront, Vec<Executor>>,
}

impl ExecutorRoster {
    /// Builds a roster from the four base pools.
    ///
    /// The qa pool is registered under both `Qa` and `QaPlan`, so lookups
    /// never need to know about the alias.
    pub fn new(
        backend: Vec<Executor>,
        frontend: Vec<Executor>,
        qa: Vec<Executor>,
        devops: Vec<Executor>,
    ) -> Self {
        let mut pools = HashMap::new();
        pools.insert(WorkFront::QaPlan, qa.clone());
        pools.insert(WorkFront::Backend, backend);
        pools.insert(WorkFront::Frontend, frontend);
        pools.insert(WorkFront::Qa, qa);
        pools.insert(WorkFront::Devops, devops);
        Self { pools }
    }

    /// Ordered pool for a work-front. Empty if the front has no one.
    pub fn pool(&self, front: WorkFront) -> &[Executor] {
        self.pools.get(&front).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether an identifier appears in any pool.
    pub fn contains(&self, executor_id: &str) -> bool {
        self.find(executor_id).is_some()
    }

    /// Looks up an executor by identifier across pools.
    pub fn find(&self, executor_id: &str) -> Option<&Executor> {
        self.pools
            .values()
            .flat_map(|pool| pool.iter())
            .find(|e| e.id == executor_id)
    }

    /// Every distinct executor, base pools only (no qa-plan duplicates).
    pub fn members(&self) -> impl Iterator<Item = &Executor> {
        [
            WorkFront::Backend,
            WorkFront::Frontend,
            WorkFront::Qa,
            WorkFront::Devops,
        ]
        .into_iter()
        .flat_map(|front| self.pool(front).iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> ExecutorRoster {
        ExecutorRoster::new(
            vec![
                Executor::new("backend1@example.com").with_name("Backend 1"),
                Executor::new("backend2@example.com").with_name("Backend 2"),
            ],
            vec![Executor::new("frontend1@example.com")],
            vec![
                Executor::new("qa1@example.com"),
                Executor::new("qa2@example.com"),
            ],
            vec![Executor::new("devops1@example.com")],
        )
    }

    #[test]
    fn test_pool_lookup_preserves_order() {
        let roster = sample_roster();
        let backend = roster.pool(WorkFront::Backend);
        assert_eq!(backend.len(), 2);
        assert_eq!(backend[0].id, "backend1@example.com");
        assert_eq!(backend[1].id, "backend2@example.com");
    }

    #[test]
    fn test_qa_plan_aliases_qa_pool() {
        let roster = sample_roster();
        let qa: Vec<_> = roster.pool(WorkFront::Qa).iter().map(|e| &e.id).collect();
        let qa_plan: Vec<_> = roster
            .pool(WorkFront::QaPlan)
            .iter()
            .map(|e| &e.id)
            .collect();
        assert_eq!(qa, qa_plan);
    }

    #[test]
    fn test_contains_and_find() {
        let roster = sample_roster();
        assert!(roster.contains("devops1@example.com"));
        assert!(!roster.contains("ghost@example.com"));
        assert_eq!(
            roster.find("backend1@example.com").unwrap().name,
            "Backend 1"
        );
    }

    #[test]
    fn test_members_has_no_alias_duplicates() {
        let roster = sample_roster();
        assert_eq!(roster.members().count(), 6);
    }

    #[test]
    fn test_default_capacity() {
        let e = Executor::new("x@example.com");
        assert_eq!(e.daily_capacity, DEFAULT_DAILY_CAPACITY);
        let e = e.with_capacity(8.0);
        assert_eq!(e.daily_capacity, 8.0);
    }
}
