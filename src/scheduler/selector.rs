//! Executor selection heuristic.
//!
//! Greedy max-remaining-capacity choice within the task's work-front
//! pool. Deliberately simple: no load balancing or deadline awareness —
//! callers wanting a different ranking policy swap this function without
//! touching the scheduling loop.

use crate::models::{Executor, ExecutorRoster, WorkFront};
use crate::scheduler::ledger::CapacityLedger;

/// Picks the executor with the most remaining capacity in a work-front's
/// pool.
///
/// Ties go to the first-listed executor (roster order). Returns `None`
/// when the pool is empty.
pub fn select_executor<'r>(
    roster: &'r ExecutorRoster,
    ledger: &CapacityLedger,
    front: WorkFront,
) -> Option<&'r Executor> {
    let mut best: Option<(&Executor, f64)> = None;

    for executor in roster.pool(front) {
        let remaining = ledger.remaining(&executor.id);
        match best {
            // Strict comparison keeps the first-listed executor on ties
            Some((_, best_remaining)) if remaining <= best_remaining => {}
            _ => best = Some((executor, remaining)),
        }
    }

    best.map(|(executor, _)| executor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AbsenceCalendar;
    use chrono::{FixedOffset, TimeZone};

    fn ledger_for(roster: &ExecutorRoster) -> CapacityLedger {
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let start = tz.with_ymd_and_hms(2024, 3, 18, 9, 0, 0).single().unwrap();
        let end = tz.with_ymd_and_hms(2024, 3, 29, 17, 0, 0).single().unwrap();
        CapacityLedger::new(roster, &AbsenceCalendar::new(), start, end)
    }

    fn sample_roster() -> ExecutorRoster {
        ExecutorRoster::new(
            vec![
                Executor::new("backend1@example.com"),
                Executor::new("backend2@example.com"),
            ],
            vec![],
            vec![Executor::new("qa1@example.com")],
            vec![],
        )
    }

    #[test]
    fn test_picks_most_remaining_capacity() {
        let roster = sample_roster();
        let mut ledger = ledger_for(&roster);
        ledger.debit("backend1@example.com", 12.0);

        let picked = select_executor(&roster, &ledger, WorkFront::Backend).unwrap();
        assert_eq!(picked.id, "backend2@example.com");
    }

    #[test]
    fn test_tie_breaks_by_roster_order() {
        let roster = sample_roster();
        let ledger = ledger_for(&roster);

        let picked = select_executor(&roster, &ledger, WorkFront::Backend).unwrap();
        assert_eq!(picked.id, "backend1@example.com");
    }

    #[test]
    fn test_empty_pool_selects_nobody() {
        let roster = sample_roster();
        let ledger = ledger_for(&roster);
        assert!(select_executor(&roster, &ledger, WorkFront::Frontend).is_none());
    }

    #[test]
    fn test_qa_plan_draws_from_qa_pool() {
        let roster = sample_roster();
        let ledger = ledger_for(&roster);
        let picked = select_executor(&roster, &ledger, WorkFront::QaPlan).unwrap();
        assert_eq!(picked.id, "qa1@example.com");
    }

    #[test]
    fn test_overcommitted_pool_still_selects() {
        // Negative balances rank below positive ones, but a fully
        // over-committed pool still yields its least-negative member.
        let roster = sample_roster();
        let mut ledger = ledger_for(&roster);
        ledger.debit("backend1@example.com", 100.0);
        ledger.debit("backend2@example.com", 120.0);

        let picked = select_executor(&roster, &ledger, WorkFront::Backend).unwrap();
        assert_eq!(picked.id, "backend1@example.com");
    }
}
