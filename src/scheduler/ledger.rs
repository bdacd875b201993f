//! Per-executor capacity ledger.
//!
//! Built once per scheduling run from the roster and absence calendar,
//! debited as tasks are committed, never rolled back. Balances may go
//! negative under over-commitment — that is a visible signal, not a hard
//! stop, consistent with the engine's best-effort greedy policy.
//!
//! # Initial Balance
//!
//! For each roster member:
//!
//! ```text
//! balance = working_days × daily_capacity − half_days × daily_capacity / 2
//! ```
//!
//! where `working_days` are the weekdays in the sprint window without a
//! full-day absence (full absences are excluded from the count, never
//! subtracted a second time), and `half_days` counts morning-only and
//! afternoon-only absences falling on those weekdays.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Weekday};
use std::collections::HashMap;

use crate::models::{Absence, AbsenceCalendar, AbsencePeriod, ExecutorRoster};

/// Remaining-hours tally per executor for one scheduling run.
#[derive(Debug, Clone)]
pub struct CapacityLedger {
    initial: HashMap<String, f64>,
    remaining: HashMap<String, f64>,
}

impl CapacityLedger {
    /// Builds the ledger for a sprint window.
    pub fn new(
        roster: &ExecutorRoster,
        absences: &AbsenceCalendar,
        window_start: DateTime<FixedOffset>,
        window_end: DateTime<FixedOffset>,
    ) -> Self {
        let mut initial = HashMap::new();

        for executor in roster.members() {
            let personal = absences
                .get(&executor.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let hours = available_hours(
                window_start.date_naive(),
                window_end.date_naive(),
                executor.daily_capacity,
                personal,
            );
            initial.insert(executor.id.clone(), hours);
        }

        let remaining = initial.clone();
        Self { initial, remaining }
    }

    /// Remaining hours for an executor. Zero for unknown identifiers.
    pub fn remaining(&self, executor_id: &str) -> f64 {
        self.remaining.get(executor_id).copied().unwrap_or(0.0)
    }

    /// Initial balance for an executor. Zero for unknown identifiers.
    pub fn initial(&self, executor_id: &str) -> f64 {
        self.initial.get(executor_id).copied().unwrap_or(0.0)
    }

    /// Whether the ledger tracks an executor.
    pub fn tracks(&self, executor_id: &str) -> bool {
        self.remaining.contains_key(executor_id)
    }

    /// Debits committed effort. The balance may go negative.
    pub fn debit(&mut self, executor_id: &str, hours: f64) {
        *self
            .remaining
            .entry(executor_id.to_string())
            .or_insert(0.0) -= hours;
    }

    /// Iterates `(executor_id, initial, remaining)` in arbitrary order.
    pub fn balances(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.initial
            .iter()
            .map(|(id, &init)| (id.as_str(), init, self.remaining(id)))
    }
}

/// Total available hours for one person inside a date window.
fn available_hours(
    first_day: NaiveDate,
    last_day: NaiveDate,
    daily_capacity: f64,
    absences: &[Absence],
) -> f64 {
    let mut hours = 0.0;
    let mut day = first_day;
    while day <= last_day {
        if is_counted_working_day(day, absences) {
            hours += daily_capacity;
            if has_half_absence(day, absences) {
                hours -= daily_capacity / 2.0;
            }
        }
        day = day + Duration::days(1);
    }
    hours
}

fn is_counted_working_day(day: NaiveDate, absences: &[Absence]) -> bool {
    !matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
        && !absences
            .iter()
            .any(|a| a.date == day && a.period == AbsencePeriod::Full)
}

fn has_half_absence(day: NaiveDate, absences: &[Absence]) -> bool {
    absences.iter().any(|a| {
        a.date == day
            && matches!(
                a.period,
                AbsencePeriod::Morning | AbsencePeriod::Afternoon
            )
    })
}
