//! Native implementation of the `calendar_utils` options.
//!
//! Operations that depend on a configurable rule take it as an argument on
//! their `_with_rule` variant and use the rule's default otherwise.

use core::{fmt, str::FromStr};

use date_equations::gregorian;

/// The rule used to decide whether a year is a leap year.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeapYearRule {
    /// Every year divisible by 4 is a leap year.
    #[default]
    Quadrennial,
    /// Years divisible by 4 are leap years, except centuries that are not
    /// divisible by 400.
    Gregorian,
}

impl LeapYearRule {
    /// Returns whether `year` is a leap year under this rule.
    #[inline]
    #[must_use]
    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            Self::Quadrennial => year.rem_euclid(4) == 0,
            Self::Gregorian => gregorian::is_leap_year(year),
        }
    }

    /// Returns the length of `month` in `year`, or 0 when `month` is not
    /// within `1..=12`.
    #[must_use]
    pub const fn days_in_month(self, year: i32, month: u8) -> u8 {
        match (self, month) {
            (Self::Quadrennial, 2) if self.is_leap_year(year) => 29,
            _ => gregorian::days_in_month(year, month),
        }
    }
}

/// A parsing error for `LeapYearRule`.
#[derive(Debug, Clone, Copy)]
pub struct ParseLeapYearRuleError;

impl fmt::Display for ParseLeapYearRuleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("provided string was not a valid leap year rule")
    }
}

impl FromStr for LeapYearRule {
    type Err = ParseLeapYearRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quadrennial" => Ok(Self::Quadrennial),
            "gregorian" => Ok(Self::Gregorian),
            _ => Err(ParseLeapYearRuleError),
        }
    }
}

impl fmt::Display for LeapYearRule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Quadrennial => "quadrennial",
            Self::Gregorian => "gregorian",
        }
        .fmt(f)
    }
}
