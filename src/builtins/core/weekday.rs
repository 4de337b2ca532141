//! This module implements `Weekday` and its lookup tables.

use core::fmt;

use date_equations::gregorian;
use icu_calendar::types::Weekday as IcuWeekday;

/// A day of the week, indexed from Sunday (0) through Saturday (6).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

const NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Days to add to reach the next Friday, never zero.
const DAYS_UNTIL_NEXT_FRIDAY: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

/// Days between the start of a Monday-first week and this day.
const DAYS_SINCE_MONDAY: [u8; 7] = [6, 0, 1, 2, 3, 4, 5];

impl Weekday {
    /// Returns the `Weekday` for an index where 0 is Sunday.
    #[inline]
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            return Some(WEEKDAYS[index as usize]);
        }
        None
    }

    #[inline]
    pub(crate) const fn from_epoch_days(epoch_days: i64) -> Self {
        WEEKDAYS[gregorian::weekday(epoch_days) as usize]
    }

    /// Returns the index of this day, 0 for Sunday through 6 for Saturday.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name of this day.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Returns whether this day is a Saturday or a Sunday.
    #[inline]
    #[must_use]
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }

    /// Returns the number of days until the next Friday. A Friday is
    /// followed by the Friday a week later.
    #[inline]
    #[must_use]
    pub const fn days_until_next_friday(self) -> u8 {
        DAYS_UNTIL_NEXT_FRIDAY[self as usize]
    }

    /// Returns the position of this day in a week that starts on Monday.
    #[inline]
    #[must_use]
    pub const fn days_since_monday(self) -> u8 {
        DAYS_SINCE_MONDAY[self as usize]
    }
}

impl From<IcuWeekday> for Weekday {
    fn from(value: IcuWeekday) -> Self {
        match value {
            IcuWeekday::Monday => Self::Monday,
            IcuWeekday::Tuesday => Self::Tuesday,
            IcuWeekday::Wednesday => Self::Wednesday,
            IcuWeekday::Thursday => Self::Thursday,
            IcuWeekday::Friday => Self::Friday,
            IcuWeekday::Saturday => Self::Saturday,
            IcuWeekday::Sunday => Self::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
