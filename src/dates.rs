//! The flat function surface of `calendar_utils`.
//!
//! Each function is a thin wrapper over the typed API: date strings are
//! parsed into an [`Instant`] and month-level operations go through
//! [`PlainYearMonth`]. Strings are parsed with a UTC local offset; use
//! [`Instant::from_str_with_offset`] to read them at another offset.

use alloc::{string::String, vec::Vec};
use core::str::FromStr;

use writeable::Writeable;

use crate::{parsers::FormattableUsDateTime, CalendarResult, DatePeriod, Instant, PlainYearMonth};

/// Returns the milliseconds since 1970-01-01T00:00:00Z for a date string.
///
/// ```rust
/// use calendar_utils::dates::date_to_timestamp;
///
/// assert_eq!(date_to_timestamp("04 Dec 1995 00:12:00 UTC").unwrap(), 818_035_920_000);
/// assert!(date_to_timestamp("not a date").is_err());
/// ```
pub fn date_to_timestamp(date: &str) -> CalendarResult<i64> {
    Ok(Instant::from_str(date)?.epoch_milliseconds())
}

/// Returns the local time of day of `date` as `HH:MM:SS`.
pub fn get_time(date: &Instant) -> String {
    date.to_time_string()
}

/// Returns the English name of the UTC day of the week of a date string.
pub fn get_day_name(date: &str) -> CalendarResult<&'static str> {
    Ok(Instant::from_str(date)?.utc_weekday().name())
}

/// Returns the next Friday after `date`. A Friday is followed by the Friday
/// one week later.
pub fn get_next_friday(date: &Instant) -> CalendarResult<Instant> {
    date.next_friday()
}

/// Returns the number of days in `month` of `year`, treating every year
/// divisible by 4 as a leap year.
pub fn get_count_days_in_month(month: u8, year: i32) -> CalendarResult<u8> {
    Ok(PlainYearMonth::try_new(year, month)?.days_in_month())
}

/// Returns the number of days from `start` to `end`, both included.
pub fn get_count_days_on_period(start: &str, end: &str) -> CalendarResult<i64> {
    DatePeriod::new(start, end).day_count()
}

/// Returns whether `date` lies within `period`, both ends included.
pub fn is_date_in_period(date: &str, period: &DatePeriod<'_>) -> CalendarResult<bool> {
    period.contains(date)
}

/// Formats the UTC fields of a date string as `M/D/YYYY, h:mm:ss AM`.
///
/// ```rust
/// use calendar_utils::dates::format_date;
///
/// assert_eq!(format_date("2010-12-15T22:59:00.000Z").unwrap(), "12/15/2010, 10:59:00 PM");
/// assert_eq!(format_date("2010-12-15T00:05:00.000Z").unwrap(), "12/15/2010, 12:05:00 AM");
/// ```
pub fn format_date(date: &str) -> CalendarResult<String> {
    let fields = Instant::from_str(date)?.to_utc();
    Ok(FormattableUsDateTime(fields).write_to_string().into_owned())
}

/// Returns the number of Saturdays and Sundays in `month` of `year`.
pub fn get_count_weekends_in_month(month: u8, year: i32) -> CalendarResult<u8> {
    Ok(PlainYearMonth::try_new(year, month)?.weekend_count())
}

/// Returns the week of the year of `date`, where weeks start on Monday and
/// week 1 contains January 1.
pub fn get_week_number_by_date(date: &Instant) -> CalendarResult<u32> {
    date.week_of_year()
}

/// Returns local midnight of the next Friday the 13th on or after `date`'s
/// month.
pub fn get_next_friday_the_13th(date: &Instant) -> CalendarResult<Instant> {
    date.next_friday_the_13th()
}

/// Returns the quarter of the year of `date`, 1 through 4.
pub fn get_quarter(date: &Instant) -> u8 {
    date.quarter()
}

/// Returns the working days of a `DD-MM-YYYY` period for a cycle of
/// `count_work_days` working days followed by `count_off_days` days off.
///
/// ```rust
/// use calendar_utils::{dates::get_work_schedule, DatePeriod};
///
/// let period = DatePeriod::new("01-01-2024", "15-01-2024");
/// assert_eq!(
///     get_work_schedule(&period, 1, 3).unwrap(),
///     ["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]
/// );
/// ```
pub fn get_work_schedule(
    period: &DatePeriod<'_>,
    count_work_days: u32,
    count_off_days: u32,
) -> CalendarResult<Vec<String>> {
    period.work_schedule(count_work_days, count_off_days)
}

/// Returns whether the local year of `date` is divisible by 4.
pub fn is_leap_year(date: &Instant) -> bool {
    date.is_in_leap_year()
}

#[cfg(test)]
mod tests;
