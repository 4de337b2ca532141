// NOTE: The supported range is bounded by i64 epoch days, far beyond
// the +/-100,000,000 days that callers ever pass in.

/// Days between 0000-03-01 and 1970-01-01.
const EPOCH_COMPUTATIONAL_RATA_DIE: i64 = 719_468;

const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;
const TWO_POWER_SIXTEEN: i64 = 65_536; // 2^16 constant

// Calculate epoch days from a gregorian date

/// Returns the number of days since 1970-01-01 for the provided date.
///
/// `month` must be in `1..=12`. `day` is not bounded by the length of the
/// month: any overflow rolls into the following days, i.e. February 30th
/// resolves to March 1st or 2nd.
pub const fn epoch_days_from_ymd(year: i32, month: u8, day: i64) -> i64 {
    let (comp_year, comp_month) = computational_year_and_month(year, month);
    let era = comp_year.div_euclid(400);
    let year_of_era = comp_year.rem_euclid(400);
    // Days from March 1st of the computational year to the first of the month.
    let m_star = (979 * comp_month - 2919) / 32;
    let day_of_era = 365 * year_of_era + year_of_era / 4 - year_of_era / 100 + m_star + day - 1;
    era * DAYS_IN_A_400Y_CYCLE + day_of_era - EPOCH_COMPUTATIONAL_RATA_DIE
}

// Returns Y, M where M is in 3..=14
const fn computational_year_and_month(year: i32, month: u8) -> (i64, i64) {
    let j = (month <= 2) as i64;
    (year as i64 - j, month as i64 + 12 * j)
}

// Epoch days to gregorian YMD

// Returns the year of era and the day of that year, N_y.
const fn year_and_day_of_era(day_of_era: i64) -> (i64, i64) {
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    (year_of_era, day_of_year)
}

/// Returns the `(year, month, day)` for a count of days since 1970-01-01.
pub const fn ymd_from_epoch_days(epoch_days: i64) -> (i32, u8, u8) {
    let rata_die = epoch_days + EPOCH_COMPUTATIONAL_RATA_DIE;
    let era = rata_die.div_euclid(DAYS_IN_A_400Y_CYCLE);
    let (year_of_era, day_of_year) = year_and_day_of_era(rata_die.rem_euclid(DAYS_IN_A_400Y_CYCLE));

    let n_three = 2141 * day_of_year + 197_913;
    let comp_month = n_three / TWO_POWER_SIXTEEN;
    let comp_day = (n_three % TWO_POWER_SIXTEEN) / 2141;

    // January and February belong to the next gregorian year.
    let j = (day_of_year >= 306) as i64;
    let year = era * 400 + year_of_era + j;
    let month = comp_month - 12 * j;
    (year as i32, month as u8, (comp_day + 1) as u8)
}

/// Returns the day of the week for a count of days since 1970-01-01,
/// where 0 is Sunday and 6 is Saturday.
pub const fn weekday(epoch_days: i64) -> u8 {
    // 1970-01-01 was a Thursday.
    (epoch_days + 4).rem_euclid(7) as u8
}

/// Returns whether the year is a leap year under the full Gregorian rule.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the month, or 0 when `month` is not in `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
