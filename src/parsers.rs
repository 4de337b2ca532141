//! This module implements date string parsing and formatting.
//!
//! Date strings are first read as ISO 8601 / RFC 9557 with `ixdtf`. Strings
//! that `ixdtf` rejects are retried as RFC 2822 dates, the other format that
//! `Date.parse` is expected to accept.

use crate::{
    builtins::core::UtcOffset,
    error::ErrorMessage,
    iso::{IsoDate, IsoDateTime, IsoTime},
    CalendarError, CalendarResult,
};
use ixdtf::{
    encoding::Utf8,
    parsers::IxdtfParser,
    records::{IxdtfParseRecord, TimeRecord, UtcOffsetRecordOrZ},
};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

mod rfc2822;

/// The result of parsing a date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedDateString {
    /// The calendar fields as written in the string.
    pub(crate) date_time: IsoDateTime,
    /// The offset the fields are written in, if the string has one.
    pub(crate) offset: Option<UtcOffset>,
    /// Whether the string is an ISO 8601 date without a time, which is read
    /// in UTC.
    pub(crate) date_only: bool,
}

/// Parses an ISO 8601 or RFC 2822 date string.
pub(crate) fn parse_date_string(source: &str) -> CalendarResult<ParsedDateString> {
    let source = source.trim();
    let ixdtf_error = match parse_ixdtf(source) {
        Ok(parsed) => return Ok(parsed),
        Err(e) => e,
    };

    #[cfg(feature = "log")]
    log::debug!("retrying \"{source}\" as an RFC 2822 date: {ixdtf_error}");

    rfc2822::parse(source).map_err(|rfc_error| {
        // Report the error of the format the string most resembles.
        let looks_like_rfc2822 = source.starts_with(|ch: char| ch.is_ascii_alphabetic())
            || source.contains(char::is_whitespace);
        if looks_like_rfc2822 {
            rfc_error
        } else {
            ixdtf_error
        }
    })
}

fn parse_ixdtf(source: &str) -> CalendarResult<ParsedDateString> {
    let record: IxdtfParseRecord<'_, Utf8> = IxdtfParser::from_str(source).parse()?;

    if record.tz.is_some() {
        return Err(CalendarError::invalid_date()
            .with_message("Time zone annotations are not supported."));
    }
    if record
        .calendar
        .is_some_and(|calendar| !calendar.eq_ignore_ascii_case(b"iso8601"))
    {
        return Err(CalendarError::invalid_date()
            .with_message("Only the iso8601 calendar is supported."));
    }

    let date = record
        .date
        .ok_or(CalendarError::invalid_date().with_enum(ErrorMessage::ParserNeedsDate))?;
    let date = IsoDate::try_new(date.year, date.month, date.day)?;
    let time = record
        .time
        .map(iso_time_from_record)
        .transpose()?
        .unwrap_or_default();
    let offset = match record.offset {
        None => None,
        Some(UtcOffsetRecordOrZ::Z) => Some(UtcOffset::UTC),
        Some(UtcOffsetRecordOrZ::Offset(offset)) => Some(UtcOffset::from_ixdtf_record(offset)?),
    };

    Ok(ParsedDateString {
        date_time: IsoDateTime::new_unchecked(date, time),
        offset,
        date_only: record.time.is_none(),
    })
}

fn iso_time_from_record(record: TimeRecord) -> CalendarResult<IsoTime> {
    let millisecond = record
        .fraction
        .map_or(0, |fraction| fraction.to_truncated_nanoseconds() / 1_000_000);
    // A leap second is read as the last second of its minute.
    IsoTime::try_new(
        record.hour,
        record.minute,
        record.second.min(59),
        millisecond as u16,
    )
}

/// Parses a strict `DD-MM-YYYY` date.
pub(crate) fn parse_day_month_year(source: &str) -> CalendarResult<IsoDate> {
    let format_error = || CalendarError::invalid_date().with_enum(ErrorMessage::DayMonthYearFormat);
    let bytes = source.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'-' || bytes[5] != b'-' {
        return Err(format_error());
    }
    let day = parse_ascii_digits(&bytes[0..2]).ok_or_else(format_error)?;
    let month = parse_ascii_digits(&bytes[3..5]).ok_or_else(format_error)?;
    let year = parse_ascii_digits(&bytes[6..10]).ok_or_else(format_error)?;
    IsoDate::try_new(year as i32, month as u8, day as u8)
}

/// Reads a run of ASCII digits, returning `None` for any other byte.
pub(crate) fn parse_ascii_digits(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() || digits.len() > 9 {
        return None;
    }
    digits.iter().try_fold(0u32, |value, digit| {
        digit
            .is_ascii_digit()
            .then(|| value * 10 + u32::from(digit - b'0'))
    })
}

// ==== Formatting ====

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precision {
    #[default]
    Second,
    Millisecond,
}

/// `HH:MM:SS`, optionally followed by `.sss`.
#[derive(Debug)]
pub struct FormattableTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
    pub precision: Precision,
}

impl From<IsoTime> for FormattableTime {
    fn from(time: IsoTime) -> Self {
        Self {
            hour: time.hour,
            minute: time.minute,
            second: time.second,
            millisecond: time.millisecond,
            precision: Precision::Second,
        }
    }
}

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.second, sink)?;
        if self.precision == Precision::Second {
            return Ok(());
        }
        sink.write_char('.')?;
        write_millisecond(self.millisecond, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        match self.precision {
            Precision::Second => LengthHint::exact(8),
            Precision::Millisecond => LengthHint::exact(12),
        }
    }
}

/// A UTC offset written as `±HH:MM`, or as `Z` when `utc_designator` is set
/// and the offset is zero.
#[derive(Debug)]
pub struct FormattableOffset {
    pub minutes: i16,
    pub utc_designator: bool,
}

impl Writeable for FormattableOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.utc_designator && self.minutes == 0 {
            return sink.write_char('Z');
        }
        let sign = if self.minutes < 0 { '-' } else { '+' };
        sink.write_char(sign)?;
        let minutes = self.minutes.unsigned_abs();
        write_padded_u8((minutes / 60) as u8, sink)?;
        sink.write_char(':')?;
        write_padded_u8((minutes % 60) as u8, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.utc_designator && self.minutes == 0 {
            return LengthHint::exact(1);
        }
        LengthHint::exact(6)
    }
}

/// `YYYY-MM-DD`, with an extended `±YYYYYY` year outside of `0..=9999`.
#[derive(Debug)]
pub struct FormattableDate(pub i32, pub u8, pub u8);

impl From<IsoDate> for FormattableDate {
    fn from(date: IsoDate) -> Self {
        Self(date.year, date.month, date.day)
    }
}

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(6 + year_length(self.0))
    }
}

/// An RFC 9557 date-time with millisecond precision and an offset.
#[derive(Debug)]
pub struct FormattableDateTime {
    pub date: FormattableDate,
    pub time: FormattableTime,
    pub offset: FormattableOffset,
}

impl FormattableDateTime {
    /// Formats UTC fields with a `Z` designator.
    pub(crate) fn utc(date_time: IsoDateTime) -> Self {
        Self::new(date_time, 0, true)
    }

    /// Formats local fields followed by their offset.
    pub(crate) fn with_offset(date_time: IsoDateTime, offset: UtcOffset) -> Self {
        Self::new(date_time, offset.minutes(), false)
    }

    fn new(date_time: IsoDateTime, minutes: i16, utc_designator: bool) -> Self {
        let mut time = FormattableTime::from(date_time.time);
        time.precision = Precision::Millisecond;
        Self {
            date: date_time.date.into(),
            time,
            offset: FormattableOffset {
                minutes,
                utc_designator,
            },
        }
    }
}

impl Writeable for FormattableDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.date.write_to(sink)?;
        sink.write_char('T')?;
        self.time.write_to(sink)?;
        self.offset.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.date.writeable_length_hint()
            + 1
            + self.time.writeable_length_hint()
            + self.offset.writeable_length_hint()
    }
}

/// `DD-MM-YYYY`
#[derive(Debug)]
pub struct FormattableDayMonthYear(pub IsoDate);

impl From<IsoDate> for FormattableDayMonthYear {
    fn from(date: IsoDate) -> Self {
        Self(date)
    }
}

impl Writeable for FormattableDayMonthYear {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.0.day, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.0.month, sink)?;
        sink.write_char('-')?;
        write_year(self.0.year, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(6 + year_length(self.0.year))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Hours of a 12-hour clock indexed by the hour of a 24-hour clock.
const TWELVE_HOUR_CLOCK: [(u8, Meridiem); 24] = [
    (12, Meridiem::Am),
    (1, Meridiem::Am),
    (2, Meridiem::Am),
    (3, Meridiem::Am),
    (4, Meridiem::Am),
    (5, Meridiem::Am),
    (6, Meridiem::Am),
    (7, Meridiem::Am),
    (8, Meridiem::Am),
    (9, Meridiem::Am),
    (10, Meridiem::Am),
    (11, Meridiem::Am),
    (12, Meridiem::Pm),
    (1, Meridiem::Pm),
    (2, Meridiem::Pm),
    (3, Meridiem::Pm),
    (4, Meridiem::Pm),
    (5, Meridiem::Pm),
    (6, Meridiem::Pm),
    (7, Meridiem::Pm),
    (8, Meridiem::Pm),
    (9, Meridiem::Pm),
    (10, Meridiem::Pm),
    (11, Meridiem::Pm),
];

/// `M/D/YYYY, h:mm:ss AM`
#[derive(Debug)]
pub struct FormattableUsDateTime(pub IsoDateTime);

impl Writeable for FormattableUsDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let IsoDateTime { date, time } = self.0;
        let (hour, meridiem) = TWELVE_HOUR_CLOCK[usize::from(time.hour % 24)];
        date.month.write_to(sink)?;
        sink.write_char('/')?;
        date.day.write_to(sink)?;
        sink.write_char('/')?;
        date.year.write_to(sink)?;
        sink.write_str(", ")?;
        hour.write_to(sink)?;
        sink.write_char(':')?;
        write_padded_u8(time.minute, sink)?;
        sink.write_char(':')?;
        write_padded_u8(time.second, sink)?;
        match meridiem {
            Meridiem::Am => sink.write_str(" AM"),
            Meridiem::Pm => sink.write_str(" PM"),
        }
    }
}

impl_display_with_writeable!(FormattableTime);
impl_display_with_writeable!(FormattableOffset);
impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableDateTime);
impl_display_with_writeable!(FormattableDayMonthYear);
impl_display_with_writeable!(FormattableUsDateTime);

fn write_padded_u8<W: core::fmt::Write + ?Sized>(num: u8, sink: &mut W) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

fn write_millisecond<W: core::fmt::Write + ?Sized>(ms: u16, sink: &mut W) -> core::fmt::Result {
    (ms / 100).write_to(sink)?;
    write_padded_u8((ms % 100) as u8, sink)
}

fn year_length(year: i32) -> usize {
    if (0..=9999).contains(&year) {
        4
    } else {
        7
    }
}

fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if (0..=9999).contains(&year) {
        write_four_digit_year(year, sink)
    } else {
        write_extended_year(year, sink)
    }
}

fn write_four_digit_year<W: core::fmt::Write + ?Sized>(
    mut y: i32,
    sink: &mut W,
) -> core::fmt::Result {
    (y / 1_000).write_to(sink)?;
    y %= 1_000;
    (y / 100).write_to(sink)?;
    y %= 100;
    (y / 10).write_to(sink)?;
    y %= 10;
    y.write_to(sink)
}

fn write_extended_year<W: core::fmt::Write + ?Sized>(y: i32, sink: &mut W) -> core::fmt::Result {
    let sign = if y < 0 { '-' } else { '+' };
    sink.write_char(sign)?;
    let mut y = y.unsigned_abs();
    let mut divisor = 100_000;
    while divisor > 0 {
        (y / divisor).write_to(sink)?;
        y %= divisor;
        divisor /= 10;
    }
    Ok(())
}
