//! # Date Equations
//!
//! Date Equations is a small library of branch-light calendar
//! calculations on the proleptic Gregorian calendar. Dates are
//! converted to and from a count of days since the Unix epoch
//! (1970-01-01) using the Euclidean affine functions described by
//! Cassio Neri and Lorenz Schneider.
//!
//! ``` rust
//! use date_equations::gregorian;
//!
//! let date = gregorian::ymd_from_epoch_days(0);
//! assert_eq!(date, (1970, 1, 1));
//!
//! let days = gregorian::epoch_days_from_ymd(2024, 2, 29);
//! assert_eq!(gregorian::ymd_from_epoch_days(days), (2024, 2, 29));
//!
//! // 1970-01-01 was a Thursday.
//! assert_eq!(gregorian::weekday(0), 4);
//! ```

#![no_std]

pub mod gregorian;
