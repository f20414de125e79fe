//! Whole-day and whole-hour differences between two date/time endpoints.
//!
//! An endpoint is a calendar date plus a time-of-day, interpreted in an IANA
//! timezone. Days are counted on the wall clock (a day is complete once the
//! same local time-of-day comes round again) and hours on the absolute
//! timeline, so a span crossing a DST transition can be one day but 23 or 25
//! hours. Both counts truncate toward zero and are negative when the end
//! precedes the start.
//!
//! # Functions
//!
//! - [`difference_between`] — the string-level entry point used by the form
//! - [`compute_difference`] — the arithmetic over two resolved endpoints
//! - [`whole_days_between`] / [`whole_hours_between`] — the individual counts

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{DateSpanError, Result};

/// Time-of-day used when a time field is left blank.
pub const DEFAULT_TIME: &str = "12:00";

/// Timezone used when the caller does not name one.
pub const DEFAULT_TIMEZONE: &str = "UTC";

// ── Endpoints ───────────────────────────────────────────────────────────────

/// A calendar date combined with a time-of-day in a specific timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalInstant {
    datetime: DateTime<Tz>,
}

impl LocalInstant {
    /// Combine `date` and `time` in `tz`.
    ///
    /// # Errors
    ///
    /// Returns [`DateSpanError::InvalidDatetime`] when the wall-clock time does
    /// not exist in `tz` (a DST spring-forward gap). Ambiguous times during a
    /// fall-back resolve to the earlier instant.
    pub fn new(date: NaiveDate, time: NaiveTime, tz: Tz) -> Result<Self> {
        let naive = date.and_time(time);
        tz.from_local_datetime(&naive)
            .earliest()
            .map(|datetime| Self { datetime })
            .ok_or_else(|| {
                DateSpanError::InvalidDatetime(format!("'{naive}' does not exist in {tz}"))
            })
    }

    /// Parse a date field (`YYYY-MM-DD`) and a time field (`HH:MM[:SS]`).
    /// A blank time field means [`DEFAULT_TIME`].
    pub fn from_fields(date: &str, time: &str, tz: Tz) -> Result<Self> {
        Self::new(parse_date(date)?, parse_time(time)?, tz)
    }

    /// The calendar date of this endpoint.
    pub fn date(&self) -> NaiveDate {
        self.datetime.date_naive()
    }

    /// The endpoint as a zoned datetime.
    pub fn datetime(&self) -> DateTime<Tz> {
        self.datetime
    }
}

// ── Differences ─────────────────────────────────────────────────────────────

/// The computed (days, hours) pair shown in the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateDifference {
    /// Whole days elapsed, plus one when the end day is included.
    pub days: i64,
    /// Whole hours elapsed. Never affected by end-day inclusion.
    pub hours: i64,
}

/// Number of complete days from `start` to `end`, truncated toward zero.
pub fn whole_days_between(start: &LocalInstant, end: &LocalInstant) -> i64 {
    (end.datetime.naive_local() - start.datetime.naive_local()).num_days()
}

/// Number of complete hours from `start` to `end`, truncated toward zero.
pub fn whole_hours_between(start: &LocalInstant, end: &LocalInstant) -> i64 {
    (end.datetime - start.datetime).num_hours()
}

/// Compute the difference between two endpoints.
///
/// `include_end_day` adds one to the day count so both endpoints are counted.
pub fn compute_difference(
    start: &LocalInstant,
    end: &LocalInstant,
    include_end_day: bool,
) -> DateDifference {
    let mut days = whole_days_between(start, end);
    if include_end_day {
        days += 1;
    }
    let hours = whole_hours_between(start, end);

    tracing::debug!(
        start = %start.datetime.to_rfc3339(),
        end = %end.datetime.to_rfc3339(),
        include_end_day,
        days,
        hours,
        "computed date difference"
    );

    DateDifference { days, hours }
}

/// Compute the difference between two date/time field pairs.
///
/// Returns `Ok(None)` when either date field is empty: there is nothing to
/// calculate yet and that is not an error.
///
/// # Errors
///
/// Returns [`DateSpanError::InvalidDate`], [`DateSpanError::InvalidTime`] or
/// [`DateSpanError::InvalidDatetime`] if a field cannot be turned into an
/// endpoint.
///
/// # Examples
///
/// ```
/// use date_span_engine::calculator::difference_between;
///
/// let diff = difference_between("2024-01-01", "12:00", "2024-01-03", "12:00", false, chrono_tz::UTC)
///     .unwrap()
///     .unwrap();
/// assert_eq!(diff.days, 2);
/// assert_eq!(diff.hours, 48);
/// ```
pub fn difference_between(
    start_date: &str,
    start_time: &str,
    end_date: &str,
    end_time: &str,
    include_end_day: bool,
    tz: Tz,
) -> Result<Option<DateDifference>> {
    if start_date.trim().is_empty() || end_date.trim().is_empty() {
        tracing::debug!("start or end date missing; skipping calculation");
        return Ok(None);
    }

    let start = LocalInstant::from_fields(start_date, start_time, tz)?;
    let end = LocalInstant::from_fields(end_date, end_time, tz)?;
    Ok(Some(compute_difference(&start, &end, include_end_day)))
}

// ── Field parsing ───────────────────────────────────────────────────────────

/// Parse a `YYYY-MM-DD` date field.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DateSpanError::InvalidDate(format!("'{s}': {e}")))
}

/// Parse an `HH:MM` or `HH:MM:SS` time field. Blank means [`DEFAULT_TIME`].
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = match s.trim() {
        "" => DEFAULT_TIME,
        trimmed => trimmed,
    };
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| DateSpanError::InvalidTime(format!("'{s}': {e}")))
}

/// Parse an IANA timezone name into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| DateSpanError::InvalidTimezone(format!("'{s}'")))
}
