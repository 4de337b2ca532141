//! This module implements the calendar field records.
//!
//! The three main types of records are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` represents a proleptic Gregorian year, month, and day.
//!
//! An `IsoTime` represents an hour, minute, second, and millisecond.
//!
//! An `IsoDateTime` has the fields of both an `IsoDate` and `IsoTime`.
//!
//! Records are plain values; whether they are read in UTC or in a local
//! offset is decided by the `Instant` that produced them.

use date_equations::gregorian;
use icu_calendar::Date as IcuDate;

use crate::{
    builtins::core::Weekday,
    error::ErrorMessage,
    utils::{self, balance_year_month},
    CalendarError, CalendarResult,
};

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Splits epoch milliseconds into their calendar fields.
    pub(crate) fn from_epoch_milliseconds(t: i64) -> Self {
        let date = IsoDate::from_epoch_days(utils::epoch_time_to_day_number(t));
        let time = IsoTime::from_time_within_day(utils::time_within_day(t));
        Self::new_unchecked(date, time)
    }

    /// Returns this `IsoDateTime` as milliseconds since the epoch, treating
    /// the fields as UTC.
    pub fn as_epoch_milliseconds(&self) -> i64 {
        utils::epoch_days_to_epoch_ms(self.date.to_epoch_days(), self.time.to_milliseconds())
    }
}

// ==== `IsoDate` section ====

/// A proleptic Gregorian date record.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self::new_unchecked(1970, 1, 1)
    }
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new `IsoDate`, rejecting any field outside of its range.
    pub fn try_new(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        let _ = IcuDate::try_new_iso(year, month, day)?;
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a balanced `IsoDate` from fields that may overflow, the way
    /// `new Date(year, month, day)` rolls them over.
    pub(crate) fn balance(year: i32, month: i32, day: i64) -> Self {
        let (year, month) = balance_year_month(year, month);
        Self::from_epoch_days(gregorian::epoch_days_from_ymd(year, month, day))
    }

    pub(crate) fn from_epoch_days(epoch_days: i64) -> Self {
        let (year, month, day) = gregorian::ymd_from_epoch_days(epoch_days);
        Self::new_unchecked(year, month, day)
    }

    /// Returns the number of days since 1970-01-01.
    pub fn to_epoch_days(&self) -> i64 {
        gregorian::epoch_days_from_ymd(self.year, self.month, i64::from(self.day))
    }

    /// Returns the day of the week for this date.
    pub fn day_of_week(&self) -> Weekday {
        Weekday::from_epoch_days(self.to_epoch_days())
    }

    /// Returns the quarter of the year, 1 through 4.
    pub fn quarter(&self) -> u8 {
        (self.month - 1) / 3 + 1
    }
}

// ==== `IsoTime` section ====

/// A time of day record with millisecond precision.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl IsoTime {
    /// Creates a new `IsoTime` without any validation.
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Creates a new validated `IsoTime`.
    pub fn try_new(hour: u8, minute: u8, second: u8, millisecond: u16) -> CalendarResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || millisecond > 999 {
            return Err(CalendarError::invalid_date()
                .with_enum(ErrorMessage::String("Time fields are out of range.")));
        }
        Ok(Self::new_unchecked(hour, minute, second, millisecond))
    }

    /// Splits milliseconds within a day, `0..86_400_000`, into time fields.
    pub(crate) fn from_time_within_day(t: i64) -> Self {
        Self::new_unchecked(
            (t / crate::MS_PER_HOUR) as u8,
            (t / crate::MS_PER_MINUTE % 60) as u8,
            (t / 1000 % 60) as u8,
            (t % 1000) as u16,
        )
    }

    /// Returns the milliseconds elapsed since midnight.
    pub fn to_milliseconds(&self) -> i64 {
        utils::make_time(
            i64::from(self.hour),
            i64::from(self.minute),
            i64::from(self.second),
            i64::from(self.millisecond),
        )
    }
}

// ==== Tests =====
