//! This module implements `DatePeriod`, an inclusive range of two date
//! strings.

use alloc::{string::String, vec::Vec};
use core::str::FromStr;

use writeable::Writeable;

use crate::{
    builtins::core::Instant,
    error::ErrorMessage,
    iso::IsoDate,
    parsers::{self, FormattableDayMonthYear},
    utils, CalendarError, CalendarResult,
};

/// An inclusive period between two date strings.
///
/// The strings are parsed by the operation that uses them: membership and
/// day counts read any supported date string, while work schedules expect
/// `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePeriod<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> DatePeriod<'a> {
    /// Creates a new `DatePeriod`.
    #[inline]
    #[must_use]
    pub const fn new(start: &'a str, end: &'a str) -> Self {
        Self { start, end }
    }

    fn instants(&self) -> CalendarResult<(Instant, Instant)> {
        Ok((Instant::from_str(self.start)?, Instant::from_str(self.end)?))
    }

    /// Returns whether `date` lies within this period, both ends included.
    ///
    /// A period whose start comes after its end contains nothing.
    pub fn contains(&self, date: &str) -> CalendarResult<bool> {
        let date = Instant::from_str(date)?.epoch_milliseconds();
        let (start, end) = self.instants()?;
        Ok((start.epoch_milliseconds()..=end.epoch_milliseconds()).contains(&date))
    }

    /// Returns the length of this period in milliseconds, which is
    /// negative for a reversed period.
    pub fn milliseconds(&self) -> CalendarResult<i64> {
        let (start, end) = self.instants()?;
        Ok(start.milliseconds_until(&end))
    }

    /// Returns the number of days in this period, both ends included.
    ///
    /// The difference is rounded to whole days with halves rounding up.
    pub fn day_count(&self) -> CalendarResult<i64> {
        let difference = self.milliseconds()?;
        if difference < 0 {
            return Err(
                CalendarError::invalid_period().with_enum(ErrorMessage::PeriodStartAfterEnd)
            );
        }
        Ok(utils::round_to_whole_days(difference) + 1)
    }

    /// Returns the working days of this period as `DD-MM-YYYY` strings.
    ///
    /// Starting from `start`, the days cycle through `work_days` working
    /// days followed by `off_days` days off until `end`.
    pub fn work_schedule(&self, work_days: u32, off_days: u32) -> CalendarResult<Vec<String>> {
        let start = parsers::parse_day_month_year(self.start)?.to_epoch_days();
        let end = parsers::parse_day_month_year(self.end)?.to_epoch_days();
        if start > end {
            return Err(
                CalendarError::invalid_period().with_enum(ErrorMessage::PeriodStartAfterEnd)
            );
        }

        #[cfg(feature = "log")]
        log::trace!(
            "work schedule from {} to {}: {work_days} on, {off_days} off",
            self.start,
            self.end
        );

        if work_days == 0 {
            return Ok(Vec::new());
        }
        let cycle = i64::from(work_days) + i64::from(off_days);
        let schedule = (start..=end)
            .filter(|day| (day - start) % cycle < i64::from(work_days))
            .map(|day| {
                FormattableDayMonthYear::from(IsoDate::from_epoch_days(day))
                    .write_to_string()
                    .into_owned()
            })
            .collect();
        Ok(schedule)
    }
}
