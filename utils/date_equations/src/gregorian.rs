/// Gregorian Date Calculations
///
/// This module contains the logic for Gregorian date calculations.
///
/// ## Computational calendar
///
/// The equations work on a "computational" calendar whose year starts
/// on March 1st, so that the leap day is always the last day of the
/// year. Years are split into 400 year eras with Euclidean division,
/// which keeps the equations valid for negative years as well.
///
/// | Significant Date | Epoch Days |
/// | -----------------|------------|
/// | March 1, 0000 | -719,468 |
/// | January 1, 1970 | 0 |
/// | January 1, 2000 | 10,957 |
///
pub mod neri_schneider;

pub use neri_schneider::{
    days_in_month, epoch_days_from_ymd, is_leap_year, weekday, ymd_from_epoch_days,
};
