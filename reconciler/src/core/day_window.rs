//! Inclusive bounds of the local calendar day
//!
//! Bootstrap and the matches-of-the-day query both scope persisted
//! records to "today" in the system's local timezone.

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, TimeZone};

/// Inclusive epoch-millisecond range covering one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DayWindow {
    /// Whether `timestamp_ms` falls inside the window, bounds included.
    pub fn contains(&self, timestamp_ms: i64) -> bool {
        timestamp_ms >= self.start_ms && timestamp_ms <= self.end_ms
    }
}

/// Bounds of the local calendar day containing `instant`:
/// `00:00:00.000` through `23:59:59.999`.
pub fn day_window(instant: DateTime<Local>) -> DayWindow {
    let day = instant.date_naive();
    let end_of_day =
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid wall-clock time");

    DayWindow {
        start_ms: local_millis(day.and_time(NaiveTime::MIN)),
        end_ms: local_millis(day.and_time(end_of_day)),
    }
}

/// Resolve a naive local time to epoch milliseconds. Ambiguous times
/// (DST fold) take the earlier instant; nonexistent times (DST gap) fall
/// back to the UTC reading of the same wall clock.
fn local_millis(naive: NaiveDateTime) -> i64 {
    match Local.from_local_datetime(&naive).earliest() {
        Some(resolved) => resolved.timestamp_millis(),
        None => naive.and_utc().timestamp_millis(),
    }
}
