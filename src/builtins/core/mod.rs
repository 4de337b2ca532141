//! The primary date types of `calendar_utils`.

pub(crate) mod timezone;

mod instant;
mod period;
mod weekday;
mod year_month;

pub use instant::Instant;
pub use period::DatePeriod;
pub use timezone::UtcOffset;
pub use weekday::Weekday;
pub use year_month::PlainYearMonth;
