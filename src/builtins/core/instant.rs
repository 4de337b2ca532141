//! An implementation of `Instant`, a point on the time line with a fixed
//! local offset.

use alloc::string::String;
use core::str::FromStr;

use num_traits::ToPrimitive;
use writeable::Writeable;

use crate::{
    builtins::core::{UtcOffset, Weekday},
    calendar_assert,
    error::ErrorMessage,
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::LeapYearRule,
    parsers::{self, FormattableDateTime, FormattableTime},
    time::EpochMilliseconds,
    utils, CalendarError, CalendarResult, CalendarUnwrap, MS_PER_DAY,
};

/// The maximum number of months between two Friday the 13ths.
const FRIDAY_THE_13TH_SEARCH_MONTHS: i32 = 14;

/// An `Instant` is an exact point in time paired with the fixed
/// [`UtcOffset`] that defines its local calendar fields.
///
/// The offset never changes which point in time an `Instant` refers to.
/// Two instants with the same epoch milliseconds compare equal through
/// [`Instant::epoch_milliseconds`] regardless of their offsets.
///
/// ```rust
/// use calendar_utils::{Instant, UtcOffset};
/// use core::str::FromStr;
///
/// let instant = Instant::from_str("2024-02-01T15:00:00Z").unwrap();
/// assert_eq!(instant.to_utc_string(), "2024-02-01T15:00:00.000Z");
///
/// let tokyo = instant.with_offset(UtcOffset::from_minutes(540).unwrap());
/// assert_eq!(tokyo.to_string(), "2024-02-02T00:00:00.000+09:00");
/// assert_eq!(tokyo.epoch_milliseconds(), instant.epoch_milliseconds());
/// ```
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant {
    epoch: EpochMilliseconds,
    offset: UtcOffset,
}

// ==== Private API ====

impl Instant {
    #[inline]
    pub(crate) const fn new_unchecked(epoch: EpochMilliseconds, offset: UtcOffset) -> Self {
        Self { epoch, offset }
    }

    /// Creates an `Instant` at the given local date and time.
    pub(crate) fn from_local_iso(
        date_time: IsoDateTime,
        offset: UtcOffset,
    ) -> CalendarResult<Self> {
        let epoch = EpochMilliseconds::try_from(
            date_time.as_epoch_milliseconds() - offset.milliseconds(),
        )?;
        Ok(Self::new_unchecked(epoch, offset))
    }

    /// Creates an `Instant` at local midnight of `date`.
    pub(crate) fn from_local_date(date: IsoDate, offset: UtcOffset) -> CalendarResult<Self> {
        Self::from_local_iso(IsoDateTime::new_unchecked(date, IsoTime::default()), offset)
    }

    #[inline]
    fn local_epoch_milliseconds(&self) -> i64 {
        self.epoch.as_i64() + self.offset.milliseconds()
    }
}

// ==== Public API ====

impl Instant {
    /// Creates an `Instant` from milliseconds since the Unix epoch, read
    /// in UTC.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> CalendarResult<Self> {
        let epoch = EpochMilliseconds::try_from(epoch_milliseconds)?;
        Ok(Self::new_unchecked(epoch, UtcOffset::UTC))
    }

    /// Creates an `Instant` from local calendar fields, rejecting any field
    /// that is out of range.
    pub fn try_new_local(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        offset: UtcOffset,
    ) -> CalendarResult<Self> {
        let date = IsoDate::try_new(year, month, day)?;
        let time = IsoTime::try_new(hour, minute, second, 0)?;
        Self::from_local_iso(IsoDateTime::new_unchecked(date, time), offset)
    }

    /// Parses a date string, interpreting any date-time without an explicit
    /// offset at `local`. The returned `Instant` carries `local`.
    pub fn from_str_with_offset(s: &str, local: UtcOffset) -> CalendarResult<Self> {
        let parsed = parsers::parse_date_string(s)?;
        let offset = match parsed.offset {
            Some(offset) => offset,
            None if parsed.date_only => UtcOffset::UTC,
            None => local,
        };
        let epoch = EpochMilliseconds::try_from(
            parsed.date_time.as_epoch_milliseconds() - offset.milliseconds(),
        )?;
        Ok(Self::new_unchecked(epoch, local))
    }

    /// Returns the same point in time read at `offset`.
    #[inline]
    #[must_use]
    pub const fn with_offset(&self, offset: UtcOffset) -> Self {
        Self::new_unchecked(self.epoch, offset)
    }

    /// Returns the milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn epoch_milliseconds(&self) -> i64 {
        self.epoch.0
    }

    /// Returns the offset that defines the local fields.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the calendar fields in UTC.
    #[must_use]
    pub fn to_utc(&self) -> IsoDateTime {
        IsoDateTime::from_epoch_milliseconds(self.epoch.as_i64())
    }

    /// Returns the calendar fields at this instant's offset.
    #[must_use]
    pub fn to_local(&self) -> IsoDateTime {
        IsoDateTime::from_epoch_milliseconds(self.local_epoch_milliseconds())
    }

    /// Returns the day of the week in UTC.
    #[must_use]
    pub fn utc_weekday(&self) -> Weekday {
        Weekday::from_epoch_days(utils::epoch_time_to_day_number(self.epoch.as_i64()))
    }

    /// Returns the local day of the week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        Weekday::from_epoch_days(utils::epoch_time_to_day_number(
            self.local_epoch_milliseconds(),
        ))
    }

    /// Returns this instant moved by a whole number of days.
    pub fn add_days(&self, days: i64) -> CalendarResult<Self> {
        Ok(Self::new_unchecked(
            self.epoch.checked_add_days(days)?,
            self.offset,
        ))
    }

    /// Returns this instant moved back by a whole number of days.
    pub fn subtract_days(&self, days: i64) -> CalendarResult<Self> {
        let days = days
            .checked_neg()
            .ok_or(CalendarError::invalid_date().with_enum(ErrorMessage::InstantOutOfRange))?;
        self.add_days(days)
    }

    /// Returns the signed milliseconds from this instant to `other`.
    #[inline]
    #[must_use]
    pub const fn milliseconds_until(&self, other: &Self) -> i64 {
        other.epoch.0 - self.epoch.0
    }

    /// Returns the local time of day as `HH:MM:SS`.
    #[must_use]
    pub fn to_time_string(&self) -> String {
        FormattableTime::from(self.to_local().time)
            .write_to_string()
            .into_owned()
    }

    /// Returns the next Friday strictly after this instant's local date,
    /// keeping the time of day.
    pub fn next_friday(&self) -> CalendarResult<Self> {
        self.add_days(i64::from(self.weekday().days_until_next_friday()))
    }

    /// Returns the week of the year with weeks starting on Monday and week 1
    /// containing January 1.
    ///
    /// The year is taken from the UTC fields while January 1 is placed at
    /// local midnight, so an instant west of UTC that falls before that
    /// midnight is in week 0.
    pub fn week_of_year(&self) -> CalendarResult<u32> {
        let jan_first = IsoDate::new_unchecked(self.to_utc().date.year, 1, 1);
        let start = Self::from_local_date(jan_first, self.offset)?;
        let days = start.milliseconds_until(self).div_euclid(MS_PER_DAY) + 1;
        let adjusted = days + i64::from(jan_first.day_of_week().days_since_monday());
        calendar_assert!(adjusted >= 0, "negative week day count: {adjusted}");
        (adjusted + 6).div_euclid(7).to_u32().calendar_unwrap()
    }

    /// Returns local midnight of the next Friday the 13th.
    ///
    /// The current month is searched when the local day is before the 13th,
    /// otherwise the search starts with the following month and continues
    /// into later years.
    pub fn next_friday_the_13th(&self) -> CalendarResult<Self> {
        let local = self.to_local().date;
        let first_month = i32::from(local.month) + i32::from(local.day >= 13);
        for month in first_month..first_month + FRIDAY_THE_13TH_SEARCH_MONTHS {
            let candidate = IsoDate::balance(local.year, month, 13);
            if candidate.day_of_week() == Weekday::Friday {
                return Self::from_local_date(candidate, self.offset);
            }
        }
        #[cfg(feature = "log")]
        log::error!("no Friday the 13th found after {}-{:02}", local.year, local.month);
        Err(CalendarError::assert())
    }

    /// Returns the local quarter of the year, 1 through 4.
    #[must_use]
    pub fn quarter(&self) -> u8 {
        self.to_local().date.quarter()
    }

    /// Returns whether the local year is a leap year by `year % 4 == 0`.
    #[must_use]
    pub fn is_in_leap_year(&self) -> bool {
        self.is_in_leap_year_with_rule(LeapYearRule::default())
    }

    /// Returns whether the local year is a leap year under `rule`.
    #[must_use]
    pub fn is_in_leap_year_with_rule(&self, rule: LeapYearRule) -> bool {
        rule.is_leap_year(self.to_local().date.year)
    }

    /// Returns the UTC fields as `YYYY-MM-DDTHH:MM:SS.sssZ`.
    #[must_use]
    pub fn to_utc_string(&self) -> String {
        FormattableDateTime::utc(self.to_utc())
            .write_to_string()
            .into_owned()
    }
}

// ==== Trait impls ====

impl FromStr for Instant {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_offset(s, UtcOffset::UTC)
    }
}

impl TryFrom<i64> for Instant {
    type Error = CalendarError;

    fn try_from(epoch_milliseconds: i64) -> Result<Self, Self::Error> {
        Self::from_epoch_milliseconds(epoch_milliseconds)
    }
}

impl Writeable for Instant {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableDateTime::with_offset(self.to_local(), self.offset).write_to(sink)
    }
}

writeable::impl_display_with_writeable!(Instant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorKind, MS_MAX_INSTANT};
    use alloc::string::ToString;

    fn offset(minutes: i16) -> UtcOffset {
        UtcOffset::from_minutes(minutes).unwrap()
    }

    #[test]
    fn local_construction() {
        let utc = Instant::try_new_local(1995, 12, 4, 0, 12, 0, UtcOffset::UTC).unwrap();
        assert_eq!(utc.epoch_milliseconds(), 818_035_920_000);

        let east = Instant::try_new_local(1995, 12, 4, 3, 12, 0, offset(180)).unwrap();
        assert_eq!(east.epoch_milliseconds(), 818_035_920_000);
        assert_eq!(east.to_local().date, IsoDate::new_unchecked(1995, 12, 4));

        let err = Instant::try_new_local(2023, 2, 29, 0, 0, 0, UtcOffset::UTC).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert!(Instant::try_new_local(2023, 2, 28, 24, 0, 0, UtcOffset::UTC).is_err());
    }

    #[test]
    fn parsing_respects_offsets() {
        let local = offset(-300);
        // Date-only strings are UTC.
        let date_only = Instant::from_str_with_offset("2024-02-01", local).unwrap();
        assert_eq!(date_only.epoch_milliseconds(), 1_706_745_600_000);
        assert_eq!(date_only.offset(), local);

        // Date-times without an offset are local.
        let floating = Instant::from_str_with_offset("2024-02-01T00:00", local).unwrap();
        assert_eq!(floating.epoch_milliseconds(), 1_706_745_600_000 + 5 * 3_600_000);

        let explicit = Instant::from_str_with_offset("2024-02-01T00:00+01:00", local).unwrap();
        assert_eq!(explicit.epoch_milliseconds(), 1_706_745_600_000 - 3_600_000);
    }

    #[test]
    fn utc_and_local_fields_diverge() {
        let instant = Instant::from_str("2024-02-03T22:30:00Z")
            .unwrap()
            .with_offset(offset(120));
        assert_eq!(instant.utc_weekday(), Weekday::Saturday);
        assert_eq!(instant.weekday(), Weekday::Sunday);
        assert_eq!(instant.to_time_string(), "00:30:00");
    }

    #[test]
    fn day_arithmetic() {
        let instant = Instant::from_epoch_milliseconds(0).unwrap();
        let later = instant.add_days(3).unwrap();
        assert_eq!(instant.milliseconds_until(&later), 3 * MS_PER_DAY);
        assert_eq!(later.subtract_days(3).unwrap(), instant);
        assert!(Instant::from_epoch_milliseconds(MS_MAX_INSTANT)
            .unwrap()
            .add_days(1)
            .is_err());
        assert!(instant.subtract_days(i64::MIN).is_err());
    }

    #[test]
    fn next_friday_keeps_time_of_day() {
        let friday = Instant::from_str("2024-02-16T08:45:00Z").unwrap();
        let next = friday.next_friday().unwrap();
        assert_eq!(friday.milliseconds_until(&next), 7 * MS_PER_DAY);
        assert_eq!(next.to_utc_string(), "2024-02-23T08:45:00.000Z");
    }

    #[test]
    fn week_of_year_with_offsets() {
        for minutes in [-600, 0, 240, 780] {
            let at = |day| Instant::try_new_local(2024, 1, day, 0, 0, 0, offset(minutes)).unwrap();
            assert_eq!(at(3).week_of_year().unwrap(), 1);
            assert_eq!(at(7).week_of_year().unwrap(), 1);
            assert_eq!(at(8).week_of_year().unwrap(), 2);
            assert_eq!(at(31).week_of_year().unwrap(), 5);
        }
        // 2023 starts on a Sunday, which is a week of its own.
        let jan_2 = Instant::try_new_local(2023, 1, 2, 12, 0, 0, UtcOffset::UTC).unwrap();
        assert_eq!(jan_2.week_of_year().unwrap(), 2);
    }

    #[test]
    fn week_of_year_reads_utc_year() {
        // Local midnight of January 1 east of UTC is still in the previous
        // UTC year.
        let east = Instant::try_new_local(2024, 1, 1, 0, 0, 0, offset(780)).unwrap();
        assert_eq!(east.week_of_year().unwrap(), 54);

        let west = Instant::from_str("2024-01-01T05:00:00Z")
            .unwrap()
            .with_offset(offset(-600));
        assert_eq!(west.week_of_year().unwrap(), 0);
    }

    #[test]
    fn friday_the_13th_wraps_years() {
        let december = Instant::try_new_local(2024, 12, 20, 9, 0, 0, offset(60)).unwrap();
        let found = december.next_friday_the_13th().unwrap();
        assert_eq!(found.to_local().date, IsoDate::new_unchecked(2025, 6, 13));
        assert_eq!(found.to_local().time, IsoTime::default());

        let same_month = Instant::try_new_local(2024, 9, 1, 0, 0, 0, UtcOffset::UTC).unwrap();
        let found = same_month.next_friday_the_13th().unwrap();
        assert_eq!(found.to_local().date, IsoDate::new_unchecked(2024, 9, 13));

        let on_the_13th = Instant::try_new_local(2024, 9, 13, 0, 0, 0, UtcOffset::UTC).unwrap();
        let found = on_the_13th.next_friday_the_13th().unwrap();
        assert_eq!(found.to_local().date, IsoDate::new_unchecked(2024, 12, 13));
    }

    #[test]
    fn leap_year_rules() {
        let year_1900 = Instant::try_new_local(1900, 3, 1, 0, 0, 0, UtcOffset::UTC).unwrap();
        assert!(year_1900.is_in_leap_year());
        assert!(!year_1900.is_in_leap_year_with_rule(LeapYearRule::Gregorian));
    }

    #[test]
    fn display_forms() {
        let instant = Instant::from_epoch_milliseconds(-1).unwrap();
        assert_eq!(instant.to_utc_string(), "1969-12-31T23:59:59.999Z");
        assert_eq!(instant.to_string(), "1969-12-31T23:59:59.999+00:00");
        let shifted = instant.with_offset(offset(-90));
        assert_eq!(shifted.to_string(), "1969-12-31T22:29:59.999-01:30");
    }
}
