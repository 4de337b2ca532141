//! Utility millisecond and day equations

use crate::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE};

// ==== Begin Date Equations ====

/// `EpochTimeToDayNumber`
///
/// Equivalent to `ECMAScript`'s `Day(t)`.
pub(crate) const fn epoch_time_to_day_number(t: i64) -> i64 {
    t.div_euclid(MS_PER_DAY)
}

/// Equivalent to `ECMAScript`'s `TimeWithinDay(t)`.
pub(crate) const fn time_within_day(t: i64) -> i64 {
    t.rem_euclid(MS_PER_DAY)
}

/// `EpochDaysToEpochMS`
///
/// Functionally the same as Date's abstract operation `MakeDate`
pub(crate) const fn epoch_days_to_epoch_ms(day: i64, time: i64) -> i64 {
    day * MS_PER_DAY + time
}

/// Equivalent to `ECMAScript`'s `MakeTime` for whole millisecond fields.
pub(crate) const fn make_time(hour: i64, minute: i64, second: i64, millisecond: i64) -> i64 {
    hour * MS_PER_HOUR + minute * MS_PER_MINUTE + second * 1000 + millisecond
}

/// Returns the whole days in `t` rounded the way `Math.round` rounds,
/// with halves going toward positive infinity.
pub(crate) const fn round_to_whole_days(t: i64) -> i64 {
    (t + MS_PER_DAY / 2).div_euclid(MS_PER_DAY)
}

/// Balances a year and a possibly overflowing one-based month into a
/// valid year and month.
pub(crate) const fn balance_year_month(year: i32, month: i32) -> (i32, u8) {
    let zero_based = month - 1;
    let year = year + zero_based.div_euclid(12);
    (year, (zero_based.rem_euclid(12) + 1) as u8)
}

// ==== End Date Equations ====
