//! Lock-in urgency: a 1-10 score from days remaining until the exam.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::state::coerce::is_iso_date;

/// Returned when no exam date is set (and for unparseable dates).
pub const NEUTRAL_LOCK_IN: u8 = 5;

/// Beyond this many days out, the exam does not drive urgency.
pub const FAR_HORIZON_DAYS: i64 = 180;

const FAR_HORIZON_LOCK_IN: u8 = 3;
const MIN_LOCK_IN: f64 = 1.0;
const MAX_LOCK_IN: f64 = 10.0;

/// Calendar days remaining until `exam`, counted from `now` with fractional
/// days rounding up: an exam later today is 0 days away only once its
/// midnight has passed.
fn days_until(exam: NaiveDate, now: DateTime<Utc>) -> i64 {
    let exam_midnight = exam.and_time(NaiveTime::MIN).and_utc();
    let secs = (exam_midnight - now).num_seconds();
    (secs as f64 / 86_400.0).ceil() as i64
}

/// Map an exam date to a lock-in urgency score in `[1, 10]`.
///
/// Empty or invalid input yields the neutral default; an exam today or in
/// the past is maximum urgency; past the far horizon urgency floors at 3;
/// in between the score interpolates linearly and rounds to the nearest
/// integer. Pure and deterministic given `now`.
pub fn compute_lock_in(exam_date: &str, now: DateTime<Utc>) -> u8 {
    if !is_iso_date(exam_date) {
        return NEUTRAL_LOCK_IN;
    }
    let Ok(exam) = NaiveDate::parse_from_str(exam_date, "%Y-%m-%d") else {
        return NEUTRAL_LOCK_IN;
    };
    let days = days_until(exam, now);
    if days <= 0 {
        return MAX_LOCK_IN as u8;
    }
    if days > FAR_HORIZON_DAYS {
        return FAR_HORIZON_LOCK_IN;
    }
    let score = MAX_LOCK_IN - (days as f64 / FAR_HORIZON_DAYS as f64) * 7.0;
    score.round().clamp(MIN_LOCK_IN, MAX_LOCK_IN) as u8
}
