//! Time-to-fraction conversion.
//!
//! Converts a wall-clock instant into six progress values, one per ring. The
//! year and century denominators use a fixed 365-day year, so the year value
//! passes 1.0 during Dec 31 of a leap year and the century value drifts by the
//! accumulated leap days. Nothing is clamped here.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, TimeZone};

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;

pub const DAYS_PER_YEAR: i64 = 365;
pub const YEARS_PER_CENTURY: i32 = 100;

const MICROS_PER_YEAR: i64 = DAYS_PER_YEAR * MICROS_PER_DAY;
const MICROS_PER_CENTURY: i64 = YEARS_PER_CENTURY as i64 * MICROS_PER_YEAR;

/// Progress through each time unit at one instant; `0.0` means the unit just began.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TimeFractions {
    pub second: f64,
    pub minute: f64,
    pub hour: f64,
    pub day: f64,
    pub year: f64,
    pub century: f64,
}

impl TimeFractions {
    /// Computes the fractions for `now` in its own timezone.
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let year = now.year();
        let day_us = micros_since_local_midnight(now, now.date_naive());
        let year_us = micros_since_local_midnight(now, january_first(year));
        let century_start = january_first(year - year.rem_euclid(YEARS_PER_CENTURY));
        let century_us = micros_since_local_midnight(now, century_start);

        Self {
            second: ratio(day_us % MICROS_PER_SECOND, MICROS_PER_SECOND),
            minute: ratio(day_us % MICROS_PER_MINUTE, MICROS_PER_MINUTE),
            hour: ratio(day_us % MICROS_PER_HOUR, MICROS_PER_HOUR),
            day: ratio(day_us, MICROS_PER_DAY),
            year: ratio(year_us, MICROS_PER_YEAR),
            century: ratio(century_us, MICROS_PER_CENTURY),
        }
    }
}

#[inline]
fn ratio(part: i64, whole: i64) -> f64 {
    part as f64 / whole as f64
}

fn january_first(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Microseconds elapsed between local midnight at the start of `date` and `now`.
///
/// Elapsed time is absolute, so it differs from the wall-clock reading on days
/// with a DST transition. When midnight itself falls into a DST gap, the
/// wall-clock difference is used instead.
fn micros_since_local_midnight<Tz: TimeZone>(now: &DateTime<Tz>, date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    let elapsed = match now.timezone().from_local_datetime(&midnight).earliest() {
        Some(start) => now.clone().signed_duration_since(start),
        None => now.naive_local() - midnight,
    };
    micros(elapsed)
}

fn micros(delta: TimeDelta) -> i64 {
    delta
        .num_microseconds()
        .unwrap_or_else(|| delta.num_milliseconds().saturating_mul(1000))
}
