//! Parsing for RFC 2822 style date strings such as
//! `Mon, 04 Dec 1995 00:12:00 GMT`.
//!
//! The accepted grammar is:
//!
//! ```text
//! [Weekday[,]] DD Mon YYYY [HH:MM[:SS]] [Zone]
//! ```
//!
//! Names are matched without regard to case. A missing zone leaves the
//! offset undecided so the caller can apply its local offset.

use core::{iter::Peekable, str::FromStr, str::SplitAsciiWhitespace};

use super::{parse_ascii_digits, ParsedDateString};
use crate::{
    builtins::core::UtcOffset,
    error::ErrorMessage,
    iso::{IsoDate, IsoDateTime, IsoTime},
    CalendarError, CalendarResult,
};

const WEEKDAY_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// The named zones of RFC 2822 with their offsets in minutes.
const NAMED_ZONES: [(&str, i16); 12] = [
    ("ut", 0),
    ("utc", 0),
    ("gmt", 0),
    ("z", 0),
    ("est", -300),
    ("edt", -240),
    ("cst", -360),
    ("cdt", -300),
    ("mst", -420),
    ("mdt", -360),
    ("pst", -480),
    ("pdt", -420),
];

type Tokens<'a> = Peekable<SplitAsciiWhitespace<'a>>;

#[inline]
fn unrecognized() -> CalendarError {
    CalendarError::invalid_date().with_enum(ErrorMessage::UnrecognizedDateString)
}

pub(crate) fn parse(source: &str) -> CalendarResult<ParsedDateString> {
    let mut tokens = source.split_ascii_whitespace().peekable();

    skip_weekday(&mut tokens);
    let date = parse_date(&mut tokens)?;
    let time = match tokens.peek() {
        Some(token) if token.contains(':') => {
            let token = tokens.next().ok_or_else(unrecognized)?;
            parse_time(token)?
        }
        _ => IsoTime::default(),
    };
    let offset = tokens.next().map(parse_zone).transpose()?;

    if tokens.next().is_some() {
        return Err(unrecognized());
    }

    Ok(ParsedDateString {
        date_time: IsoDateTime::new_unchecked(date, time),
        offset,
        date_only: false,
    })
}

fn skip_weekday(tokens: &mut Tokens<'_>) {
    let is_weekday = tokens.peek().is_some_and(|token| {
        let name = token.strip_suffix(',').unwrap_or(*token);
        name.len() >= 3
            && name.bytes().all(|b| b.is_ascii_alphabetic())
            && WEEKDAY_NAMES
                .iter()
                .any(|day| name[..3].eq_ignore_ascii_case(day))
    });
    if is_weekday {
        tokens.next();
    }
}

fn parse_date(tokens: &mut Tokens<'_>) -> CalendarResult<IsoDate> {
    let day = tokens
        .next()
        .filter(|token| (1..=2).contains(&token.len()))
        .and_then(|token| parse_ascii_digits(token.as_bytes()))
        .ok_or_else(unrecognized)?;
    let month = tokens
        .next()
        .and_then(month_from_name)
        .ok_or_else(unrecognized)?;
    let year = tokens
        .next()
        .filter(|token| token.len() >= 4)
        .and_then(|token| parse_ascii_digits(token.as_bytes()))
        .and_then(|year| i32::try_from(year).ok())
        .ok_or_else(unrecognized)?;
    IsoDate::try_new(year, month, day as u8)
}

fn month_from_name(name: &str) -> Option<u8> {
    if name.len() != 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|month| name.eq_ignore_ascii_case(month))
        .map(|index| index as u8 + 1)
}

fn parse_time(token: &str) -> CalendarResult<IsoTime> {
    let mut fields = token.split(':').map(|field| {
        if field.len() != 2 {
            return None;
        }
        parse_ascii_digits(field.as_bytes()).map(|value| value as u8)
    });
    let hour = fields.next().flatten().ok_or_else(unrecognized)?;
    let minute = fields.next().flatten().ok_or_else(unrecognized)?;
    let second = match fields.next() {
        Some(second) => second.ok_or_else(unrecognized)?,
        None => 0,
    };
    if fields.next().is_some() {
        return Err(unrecognized());
    }
    IsoTime::try_new(hour, minute, second, 0)
}

fn parse_zone(token: &str) -> CalendarResult<UtcOffset> {
    if token.starts_with(['+', '-']) {
        return UtcOffset::from_str(token);
    }
    NAMED_ZONES
        .iter()
        .find(|(name, _)| token.eq_ignore_ascii_case(name))
        .ok_or_else(unrecognized)
        .and_then(|&(_, minutes)| UtcOffset::from_minutes(minutes))
}
