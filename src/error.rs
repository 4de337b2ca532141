//! This module implements `CalendarError`.

use core::fmt;
use icu_calendar::RangeError;
use ixdtf::ParseError;

/// `CalendarError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An unparseable date string or an out of range calendar field.
    #[default]
    InvalidDate,
    /// A period whose start comes after its end.
    InvalidPeriod,
    /// Assert
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate => "InvalidDateInput",
            Self::InvalidPeriod => "InvalidPeriod",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `calendar_utils`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl CalendarError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create an invalid date error.
    #[inline]
    #[must_use]
    pub const fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create an invalid period error.
    #[inline]
    #[must_use]
    pub const fn invalid_period() -> Self {
        Self::new(ErrorKind::InvalidPeriod)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn assert() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Assert)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Assert,
            msg: ErrorMessage::String(core::panic::Location::caller().file()),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessage::String(msg);
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> &'static str {
        self.msg.to_string()
    }
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_string();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for CalendarError {}

impl From<RangeError> for CalendarError {
    fn from(error: RangeError) -> Self {
        CalendarError::invalid_date().with_enum(ErrorMessage::FieldOutOfRange(error.field))
    }
}

impl From<ParseError> for CalendarError {
    fn from(error: ParseError) -> Self {
        CalendarError::invalid_date().with_enum(ErrorMessage::Ixdtf(error))
    }
}

/// The error message
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum ErrorMessage {
    // Range
    InstantOutOfRange,
    MonthOutOfRange,
    OffsetOutOfRange,

    // Parsing
    UnrecognizedDateString,
    ParserNeedsDate,
    DayMonthYearFormat,

    // Period
    PeriodStartAfterEnd,

    // Typed
    None,
    String(&'static str),
    FieldOutOfRange(&'static str),
    Ixdtf(ParseError),
}

impl ErrorMessage {
    pub fn to_string(self) -> &'static str {
        match self {
            Self::InstantOutOfRange => "Epoch milliseconds are not within a valid range.",
            Self::MonthOutOfRange => "Month must be within 1..=12.",
            Self::OffsetOutOfRange => "UTC offset must be within -23:59..=+23:59.",
            Self::UnrecognizedDateString => "Date string is not in a recognized format.",
            Self::ParserNeedsDate => "Date string must contain a date value.",
            Self::DayMonthYearFormat => "Date must be formatted as DD-MM-YYYY.",
            Self::PeriodStartAfterEnd => "Period start must not come after its end.",
            Self::None => "",
            Self::String(s) => s,
            Self::FieldOutOfRange(field) => match field {
                "year" => "Year out of range.",
                "month" => "Month out of range.",
                "day" => "Day out of range.",
                _ => "Field out of range.",
            },
            Self::Ixdtf(e) => ixdtf_error_to_static_string(e),
        }
    }
}

fn ixdtf_error_to_static_string(error: ParseError) -> &'static str {
    match error {
        ParseError::AbruptEnd { .. } => "Parsing ended abruptly.",
        ParseError::InvalidEnd => "Unexpected character found after parsing was completed.",
        ParseError::InvalidMonthRange => "Parsed month value not in a valid range.",
        ParseError::InvalidDayRange => "Parsed day value not in a valid range.",
        ParseError::DateYear => "Invalid character while parsing year value.",
        ParseError::DateMonth => "Invalid character while parsing month value.",
        ParseError::DateDay => "Invalid character while parsing day value.",
        ParseError::TimeHour => "Invalid character while parsing hour value.",
        ParseError::TimeMinuteSecond => {
            "Invalid character while parsing minute/second value in (0, 59] range."
        }
        ParseError::TimeSecond => "Invalid character while parsing second value in (0, 60] range.",
        _ => "General IXDTF parsing error",
    }
}
