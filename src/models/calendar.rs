//! Business calendar model.
//!
//! Pure functions over a point in time and a person's absence list.
//! The engine's clock advances in working periods, never in raw hours.
//!
//! # Working Day
//!
//! | Period    | Wall clock    | Effort |
//! |-----------|---------------|--------|
//! | Morning   | 09:00 – 12:00 | 3h     |
//! | Afternoon | 12:00 – 17:00 | 5h     |
//!
//! Saturdays and Sundays are never working time. Absences exclude a full
//! day or a single period of it.
//!
//! # Time Model
//! All instants are `chrono::DateTime<FixedOffset>`. Calendar arithmetic is
//! done on the instant's own wall clock; callers are expected to convert
//! inputs to the sprint's offset before scheduling.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// First working hour of the day.
pub const WORKDAY_START_HOUR: u32 = 9;
/// Morning/afternoon boundary.
pub const PERIOD_SPLIT_HOUR: u32 = 12;
/// Last working hour of the day (exclusive).
pub const WORKDAY_END_HOUR: u32 = 17;

/// Which part of a day an absence covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbsencePeriod {
    /// The whole working day.
    Full,
    /// 09:00 – 12:00 only.
    Morning,
    /// 12:00 – 17:00 only.
    Afternoon,
}

/// A day off for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    /// Calendar date of the absence.
    pub date: NaiveDate,
    /// Covered part of the day.
    pub period: AbsencePeriod,
}

impl Absence {
    /// Creates a new absence record.
    pub fn new(date: NaiveDate, period: AbsencePeriod) -> Self {
        Self { date, period }
    }

    /// Full-day absence.
    pub fn full(date: NaiveDate) -> Self {
        Self::new(date, AbsencePeriod::Full)
    }

    /// Morning-only absence.
    pub fn morning(date: NaiveDate) -> Self {
        Self::new(date, AbsencePeriod::Morning)
    }

    /// Afternoon-only absence.
    pub fn afternoon(date: NaiveDate) -> Self {
        Self::new(date, AbsencePeriod::Afternoon)
    }
}

/// Rebuilds an instant at `hour:00` on the same date, same offset.
fn at_hour(instant: DateTime<FixedOffset>, hour: u32) -> DateTime<FixedOffset> {
    let naive = instant
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .expect("hour is within 0..24");
    instant
        .offset()
        .from_local_datetime(&naive)
        .single()
        .expect("fixed offsets are unambiguous")
}

/// Whether the instant falls on a Saturday or Sunday.
pub fn is_weekend(instant: DateTime<FixedOffset>) -> bool {
    matches!(instant.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether a date carries a full-day absence.
pub fn has_full_absence(date: NaiveDate, absences: &[Absence]) -> bool {
    absences
        .iter()
        .any(|a| a.date == date && a.period == AbsencePeriod::Full)
}

/// Whether an instant is working time for a person.
///
/// True iff the instant falls on a weekday, the date carries no full-day
/// absence, and the instant's period (morning before 12:00, afternoon
/// from 12:00) is not excluded by a matching half-day absence.
pub fn is_working_instant(instant: DateTime<FixedOffset>, absences: &[Absence]) -> bool {
    if is_weekend(instant) {
        return false;
    }

    let date = instant.date_naive();
    let morning = instant.hour() < PERIOD_SPLIT_HOUR;

    !absences.iter().any(|a| {
        a.date == date
            && match a.period {
                AbsencePeriod::Full => true,
                AbsencePeriod::Morning => morning,
                AbsencePeriod::Afternoon => !morning,
            }
    })
}

/// End of the working period containing (or next following) an instant.
///
/// - before 12:00 → 12:00 the same day
/// - 12:00 – 16:59 → 17:00 the same day
/// - at/after 17:00 → 12:00 the next calendar day
///
/// This is the step unit for the effort walk: task ends always land on a
/// period boundary.
pub fn period_end(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    if instant.hour() < PERIOD_SPLIT_HOUR {
        at_hour(instant, PERIOD_SPLIT_HOUR)
    } else if instant.hour() < WORKDAY_END_HOUR {
        at_hour(instant, WORKDAY_END_HOUR)
    } else {
        at_hour(instant + Duration::days(1), PERIOD_SPLIT_HOUR)
    }
}

/// Maps an instant into the external tracker's coarse display buckets.
///
/// The tracker renders 10:00–12:00 and 14:00–17:00 visible slots; anything
/// before 14:00 collapses to 12:00 of the same day (the lunch span folds
/// back onto the morning boundary), everything from 14:00 on to 17:00 of
/// the same day.
///
/// Display transform only — never used by the scheduling clock.
pub fn to_external_display(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    if instant.hour() < 14 {
        at_hour(instant, PERIOD_SPLIT_HOUR)
    } else {
        at_hour(instant, WORKDAY_END_HOUR)
    }
}

/// Snaps an instant forward to the next working instant for a person.
///
/// Non-working spans are skipped whole: before-hours clamp to 09:00,
/// after-hours roll to 09:00 the next day, weekends and full absences
/// advance a day at a time, and an absent morning jumps to 12:00 of the
/// same day. The returned instant satisfies [`is_working_instant`].
pub fn next_working_instant(
    instant: DateTime<FixedOffset>,
    absences: &[Absence],
) -> DateTime<FixedOffset> {
    let mut current = instant;
    loop {
        if current.hour() < WORKDAY_START_HOUR {
            current = at_hour(current, WORKDAY_START_HOUR);
        } else if current.hour() >= WORKDAY_END_HOUR {
            current = at_hour(current + Duration::days(1), WORKDAY_START_HOUR);
            continue;
        }

        if is_working_instant(current, absences) {
            return current;
        }

        let morning = current.hour() < PERIOD_SPLIT_HOUR;
        if morning && !is_weekend(current) && !has_full_absence(current.date_naive(), absences) {
            // Only the morning is excluded; the afternoon may still be free.
            current = at_hour(current, PERIOD_SPLIT_HOUR);
        } else {
            current = at_hour(current + Duration::days(1), WORKDAY_START_HOUR);
        }
    }
}

/// Wall-clock hours between two instants.
pub fn hours_between(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> f64 {
    (to - from).num_minutes() as f64 / 60.0
}
