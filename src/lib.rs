//! The `calendar_utils` crate is a collection of stateless date
//! calculation helpers over the proleptic Gregorian calendar.
//!
//! ```rust
//! use calendar_utils::{dates, Instant, UtcOffset};
//!
//! assert_eq!(dates::date_to_timestamp("01 Jan 1970 00:00:00 UTC").unwrap(), 0);
//! assert_eq!(dates::format_date("2024-02-01T15:00:00.000Z").unwrap(), "2/1/2024, 3:00:00 PM");
//!
//! // 2024-01-03 at local midnight, four hours east of UTC.
//! let offset = UtcOffset::from_minutes(240).unwrap();
//! let date = Instant::try_new_local(2024, 1, 3, 0, 0, 0, offset).unwrap();
//! assert_eq!(dates::get_week_number_by_date(&date).unwrap(), 1);
//! assert_eq!(dates::get_quarter(&date), 1);
//! ```
//!
//! Every value is immutable: arithmetic such as [`Instant::add_days`]
//! returns a new [`Instant`]. The "local" interpretation of an `Instant`
//! is the fixed [`UtcOffset`] it carries, which defaults to UTC.
//!
//! The free functions in [`dates`] mirror a flat helper surface, while
//! the types in the crate root expose the same operations as methods.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;
extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod dates;
pub mod error;
pub mod iso;
pub mod options;
pub mod parsers;

mod builtins;
mod epoch_milliseconds;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::CalendarError;

/// The `calendar_utils` result type
pub type CalendarResult<T> = Result<T, CalendarError>;

pub mod time {
    pub use crate::epoch_milliseconds::EpochMilliseconds;
}

pub use crate::builtins::{DatePeriod, Instant, PlainYearMonth, UtcOffset, Weekday};

/// A library specific trait for unwrapping assertions.
pub(crate) trait CalendarUnwrap {
    type Output;

    /// `calendar_utils` based assertion for unwrapping. This will panic in
    /// debug builds, but returns an error during runtime.
    fn calendar_unwrap(self) -> CalendarResult<Self::Output>;
}

impl<T> CalendarUnwrap for Option<T> {
    type Output = T;

    fn calendar_unwrap(self) -> CalendarResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(CalendarError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! calendar_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CalendarError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CalendarError::assert());
        }
    };
}

// Relevant numeric constants
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
/// Milliseconds per hour constant: 3.6e+6
pub const MS_PER_HOUR: i64 = 60 * 60 * 1000;
/// Milliseconds per minute constant: 6e+4
pub const MS_PER_MINUTE: i64 = 60 * 1000;
/// Max epoch millisecond constant, +/-100,000,000 days around the epoch.
#[doc(hidden)]
pub(crate) const MS_MAX_INSTANT: i64 = MS_PER_DAY * 100_000_000;
/// Min epoch millisecond constant
#[doc(hidden)]
pub(crate) const MS_MIN_INSTANT: i64 = -MS_MAX_INSTANT;
