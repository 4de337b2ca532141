//! This module implements `UtcOffset`, the fixed offset used for the local
//! interpretation of an `Instant`.

use alloc::string::String;
use core::str::FromStr;

use ixdtf::{parsers::TimeZoneParser, records::UtcOffsetRecord};
use num_traits::ToPrimitive;
use writeable::Writeable;

use crate::{
    error::ErrorMessage, parsers::FormattableOffset, CalendarError, CalendarResult,
    MS_PER_MINUTE,
};

const MAX_OFFSET_MINUTES: i16 = 23 * 60 + 59;

/// A whole-minute offset from UTC in the range `-23:59..=+23:59`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i16);

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self(0);

    /// Creates a `UtcOffset` from a signed number of minutes.
    pub fn from_minutes(minutes: i16) -> CalendarResult<Self> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(CalendarError::invalid_date().with_enum(ErrorMessage::OffsetOutOfRange));
        }
        Ok(Self(minutes))
    }

    pub(crate) fn from_ixdtf_record(record: UtcOffsetRecord) -> CalendarResult<Self> {
        if record.second().is_some_and(|s| s != 0) || record.fraction().is_some() {
            return Err(CalendarError::invalid_date()
                .with_message("UTC offsets must be minute precision."));
        }
        let minutes = i16::from(record.hour()) * 60 + i16::from(record.minute());
        Self::from_minutes(minutes * record.sign() as i16)
    }

    /// Returns the offset in minutes.
    #[inline]
    #[must_use]
    pub const fn minutes(&self) -> i16 {
        self.0
    }

    /// Returns the offset in milliseconds.
    #[inline]
    #[must_use]
    pub const fn milliseconds(&self) -> i64 {
        self.0 as i64 * MS_PER_MINUTE
    }

    #[inline]
    pub(crate) fn to_formattable(self) -> FormattableOffset {
        FormattableOffset {
            minutes: self.0,
            utc_designator: false,
        }
    }

    /// Returns the offset formatted as `+HH:MM`.
    pub fn to_offset_string(&self) -> String {
        self.to_formattable().write_to_string().into_owned()
    }
}

impl FromStr for UtcOffset {
    type Err = CalendarError;

    /// Parses `Z`, `±HH`, `±HHMM` or `±HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("z") {
            return Ok(Self::UTC);
        }
        let record = TimeZoneParser::from_str(s).parse_offset()?;
        Self::from_ixdtf_record(record)
    }
}

impl TryFrom<i64> for UtcOffset {
    type Error = CalendarError;

    /// Converts a signed number of minutes.
    fn try_from(minutes: i64) -> Result<Self, Self::Error> {
        let minutes = minutes
            .to_i16()
            .ok_or(CalendarError::invalid_date().with_enum(ErrorMessage::OffsetOutOfRange))?;
        Self::from_minutes(minutes)
    }
}

writeable::impl_display_with_writeable!(UtcOffset);

impl Writeable for UtcOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.to_formattable().write_to(sink)
    }

    fn writeable_length_hint(&self) -> writeable::LengthHint {
        writeable::LengthHint::exact(6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use writeable::assert_writeable_eq;

    #[test]
    fn offset_parsing() {
        assert_eq!(UtcOffset::from_str("Z").unwrap(), UtcOffset::UTC);
        assert_eq!(UtcOffset::from_str("+05:30").unwrap().minutes(), 330);
        assert_eq!(UtcOffset::from_str("-0800").unwrap().minutes(), -480);
        assert_eq!(UtcOffset::from_str("+03").unwrap().minutes(), 180);
        assert!(UtcOffset::from_str("+05:30:15").is_err());
        assert!(UtcOffset::from_str("05:30").is_err());
    }

    #[test]
    fn offset_range() {
        assert!(UtcOffset::from_minutes(1439).is_ok());
        assert!(UtcOffset::from_minutes(-1440).is_err());
        assert!(UtcOffset::try_from(100_000i64).is_err());
        assert_eq!(UtcOffset::from_minutes(-90).unwrap().milliseconds(), -5_400_000);
    }

    #[test]
    fn offset_display() {
        assert_writeable_eq!(UtcOffset::from_minutes(330).unwrap(), "+05:30");
        assert_writeable_eq!(UtcOffset::from_minutes(-480).unwrap(), "-08:00");
        assert_writeable_eq!(UtcOffset::UTC, "+00:00");
        assert_eq!(UtcOffset::from_minutes(-15).unwrap().to_offset_string(), "-00:15");
    }
}
