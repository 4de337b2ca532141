//! This module implements `PlainYearMonth`.

use crate::{
    builtins::core::Weekday, error::ErrorMessage, iso::IsoDate, options::LeapYearRule,
    CalendarError, CalendarResult,
};

/// A validated proleptic Gregorian year and month.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainYearMonth {
    pub year: i32,
    pub month: u8,
}

impl PlainYearMonth {
    /// Creates a new `PlainYearMonth`, rejecting a month outside of `1..=12`.
    pub fn try_new(year: i32, month: u8) -> CalendarResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::invalid_date().with_enum(ErrorMessage::MonthOutOfRange));
        }
        Ok(Self { year, month })
    }

    /// Returns the number of days in this month, with February's length
    /// decided by `year % 4`.
    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        self.days_in_month_with_rule(LeapYearRule::default())
    }

    /// Returns the number of days in this month under `rule`.
    #[inline]
    #[must_use]
    pub fn days_in_month_with_rule(&self, rule: LeapYearRule) -> u8 {
        rule.days_in_month(self.year, self.month)
    }

    /// Returns the number of Saturdays and Sundays in this month.
    #[must_use]
    pub fn weekend_count(&self) -> u8 {
        let first = IsoDate::new_unchecked(self.year, self.month, 1).to_epoch_days();
        (0..i64::from(self.days_in_month()))
            .filter(|day| Weekday::from_epoch_days(first + day).is_weekend())
            .count() as u8
    }
}
