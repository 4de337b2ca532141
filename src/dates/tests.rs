use super::*;
use crate::{error::ErrorKind, iso::IsoDate, UtcOffset, Weekday, MS_PER_DAY};
use alloc::vec;

fn local(year: i32, month: u8, day: u8) -> Instant {
    Instant::try_new_local(year, month, day, 0, 0, 0, UtcOffset::UTC).unwrap()
}

fn local_at(year: i32, month: u8, day: u8, offset: i16) -> Instant {
    let offset = UtcOffset::from_minutes(offset).unwrap();
    Instant::try_new_local(year, month, day, 0, 0, 0, offset).unwrap()
}

fn parse(date: &str) -> Instant {
    Instant::from_str(date).unwrap()
}

#[test]
fn timestamps() {
    assert_eq!(date_to_timestamp("01 Jan 1970 00:00:00 UTC").unwrap(), 0);
    assert_eq!(
        date_to_timestamp("04 Dec 1995 00:12:00 UTC").unwrap(),
        818_035_920_000
    );
    assert_eq!(
        date_to_timestamp("Mon, 04 Dec 1995 00:12:00 GMT").unwrap(),
        818_035_920_000
    );
    assert_eq!(
        date_to_timestamp("04 Dec 1995 03:12:00 +0300").unwrap(),
        818_035_920_000
    );
    assert_eq!(
        date_to_timestamp("1995-12-04T00:12:00.000Z").unwrap(),
        818_035_920_000
    );
    assert_eq!(date_to_timestamp("1969-12-31T23:59:59.999Z").unwrap(), -1);
}

#[test]
fn invalid_timestamps() {
    for date in ["", "yesterday", "2024-02-30", "32 Jan 2024", "2024/02/01"] {
        let err = date_to_timestamp(date).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate, "{date}");
    }
}

#[test]
fn times_of_day() {
    let offset = UtcOffset::from_minutes(120).unwrap();
    let date = Instant::try_new_local(2023, 6, 1, 8, 20, 55, offset).unwrap();
    assert_eq!(get_time(&date), "08:20:55");
    let date = Instant::try_new_local(2015, 11, 20, 23, 15, 1, UtcOffset::UTC).unwrap();
    assert_eq!(get_time(&date), "23:15:01");
}

#[test]
fn day_names() {
    assert_eq!(get_day_name("01 Jan 1970 00:00:00 UTC").unwrap(), "Thursday");
    assert_eq!(get_day_name("03 Dec 1995 00:12:00 UTC").unwrap(), "Sunday");
    assert_eq!(get_day_name("2024-01-30T00:00:00.000Z").unwrap(), "Tuesday");
    // The name is read from the UTC fields.
    assert_eq!(get_day_name("2024-01-30T00:30:00+01:00").unwrap(), "Monday");
    assert!(get_day_name("Funday").is_err());
}

#[test]
fn next_fridays() {
    for (date, expected) in [
        ("2024-02-03T00:00:00Z", "2024-02-09T00:00:00Z"),
        ("2024-02-13T00:00:00Z", "2024-02-16T00:00:00Z"),
        ("2024-02-16T00:00:00Z", "2024-02-23T00:00:00Z"),
    ] {
        let next = get_next_friday(&parse(date)).unwrap();
        assert_eq!(next, parse(expected), "{date}");
        assert_eq!(next.weekday(), Weekday::Friday);
    }
}

#[test]
fn next_friday_is_within_a_week() {
    let mut date = local(2024, 2, 1);
    for _ in 0..14 {
        let next = get_next_friday(&date).unwrap();
        let days = date.milliseconds_until(&next) / MS_PER_DAY;
        assert!((1..=7).contains(&days));
        if date.weekday() == Weekday::Friday {
            assert_eq!(days, 7);
        }
        date = date.add_days(1).unwrap();
    }
}

#[test]
fn days_in_month() {
    assert_eq!(get_count_days_in_month(1, 2024).unwrap(), 31);
    assert_eq!(get_count_days_in_month(2, 2024).unwrap(), 29);
    assert_eq!(get_count_days_in_month(2, 2023).unwrap(), 28);
    assert_eq!(get_count_days_in_month(4, 2023).unwrap(), 30);
    assert_eq!(get_count_days_in_month(12, 2023).unwrap(), 31);
    let err = get_count_days_in_month(13, 2023).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidDate);
    assert!(get_count_days_in_month(0, 2023).is_err());
}

#[test]
fn days_on_period() {
    assert_eq!(
        get_count_days_on_period("2024-02-01T00:00:00.000Z", "2024-02-02T00:00:00.000Z").unwrap(),
        2
    );
    assert_eq!(
        get_count_days_on_period("2024-02-01T00:00:00.000Z", "2024-02-12T00:00:00.000Z").unwrap(),
        12
    );
    assert_eq!(get_count_days_on_period("2024-02-01", "2024-02-01").unwrap(), 1);
    let err = get_count_days_on_period("2024-02-12", "2024-02-01").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPeriod);
}

#[test]
fn dates_in_period() {
    let period = DatePeriod::new("2024-02-02", "2024-03-02");
    assert!(!is_date_in_period("2024-02-01", &period).unwrap());
    assert!(is_date_in_period("2024-02-02", &period).unwrap());
    assert!(is_date_in_period("2024-02-10", &period).unwrap());
    assert!(is_date_in_period(period.start, &period).unwrap());
    assert!(is_date_in_period(period.end, &period).unwrap());
    assert!(is_date_in_period("2024-02-01T12:00:00Z", &period).is_ok_and(|inside| !inside));
}

#[test]
fn formatted_dates() {
    assert_eq!(
        format_date("2024-02-01T15:00:00.000Z").unwrap(),
        "2/1/2024, 3:00:00 PM"
    );
    assert_eq!(
        format_date("1999-01-05T02:20:00.000Z").unwrap(),
        "1/5/1999, 2:20:00 AM"
    );
    assert_eq!(
        format_date("2010-12-15T22:59:00.000Z").unwrap(),
        "12/15/2010, 10:59:00 PM"
    );
    assert_eq!(
        format_date("2010-12-15T12:00:09.000Z").unwrap(),
        "12/15/2010, 12:00:09 PM"
    );
    assert_eq!(
        format_date("2010-12-15T00:00:00.000Z").unwrap(),
        "12/15/2010, 12:00:00 AM"
    );
    // Formatting reads the UTC fields.
    assert_eq!(
        format_date("2010-12-15T01:00:00+02:00").unwrap(),
        "12/14/2010, 11:00:00 PM"
    );
}

#[test]
fn weekends_in_month() {
    assert_eq!(get_count_weekends_in_month(5, 2022).unwrap(), 9);
    assert_eq!(get_count_weekends_in_month(12, 2023).unwrap(), 10);
    assert_eq!(get_count_weekends_in_month(1, 2024).unwrap(), 8);
    assert!(get_count_weekends_in_month(13, 2024).is_err());
}

#[test]
fn weekends_agree_with_day_names() {
    for month in 1..=12u8 {
        let days = get_count_days_in_month(month, 2024).unwrap();
        let counted = (1..=days)
            .filter(|&day| {
                let instant = local(2024, month, day);
                matches!(
                    get_day_name(&instant.to_utc_string()).unwrap(),
                    "Saturday" | "Sunday"
                )
            })
            .count();
        assert_eq!(
            usize::from(get_count_weekends_in_month(month, 2024).unwrap()),
            counted
        );
    }
}

#[test]
fn week_numbers() {
    assert_eq!(get_week_number_by_date(&local(2024, 1, 3)).unwrap(), 1);
    assert_eq!(get_week_number_by_date(&local(2024, 1, 31)).unwrap(), 5);
    assert_eq!(get_week_number_by_date(&local(2024, 2, 23)).unwrap(), 8);
    assert_eq!(get_week_number_by_date(&local_at(2024, 1, 3, 240)).unwrap(), 1);
    assert_eq!(get_week_number_by_date(&local_at(2024, 2, 23, -300)).unwrap(), 8);
    // 2022 starts on a Saturday.
    assert_eq!(get_week_number_by_date(&local(2022, 1, 2)).unwrap(), 1);
    assert_eq!(get_week_number_by_date(&local(2022, 1, 3)).unwrap(), 2);
    assert_eq!(get_week_number_by_date(&local(2022, 12, 31)).unwrap(), 53);
}

#[test]
fn fridays_the_13th() {
    let found = get_next_friday_the_13th(&local(2024, 1, 13)).unwrap();
    assert_eq!(found, local(2024, 9, 13));
    let found = get_next_friday_the_13th(&local(2023, 2, 1)).unwrap();
    assert_eq!(found, local(2023, 10, 13));

    let found = get_next_friday_the_13th(&local_at(2024, 10, 1, -420)).unwrap();
    assert_eq!(found, local_at(2024, 12, 13, -420));
    assert_eq!(found.to_local().date, IsoDate::try_new(2024, 12, 13).unwrap());
    assert_eq!(found.weekday(), Weekday::Friday);
}

#[test]
fn quarters() {
    assert_eq!(get_quarter(&local(2024, 2, 13)), 1);
    assert_eq!(get_quarter(&local(2024, 6, 1)), 2);
    assert_eq!(get_quarter(&local(2024, 11, 10)), 4);
    for month in 1..=3 {
        assert_eq!(get_quarter(&local(2023, month, 1)), 1);
    }
    for month in 10..=12 {
        assert_eq!(get_quarter(&local(2023, month, 28)), 4);
    }
    // The quarter follows the local month.
    let new_year = local_at(2024, 1, 1, 60);
    assert_eq!(get_quarter(&new_year), 1);
    assert_eq!(new_year.to_utc().date.month, 12);
}

#[test]
fn work_schedules() {
    let period = DatePeriod::new("01-01-2024", "15-01-2024");
    assert_eq!(
        get_work_schedule(&period, 1, 3).unwrap(),
        vec!["01-01-2024", "05-01-2024", "09-01-2024", "13-01-2024"]
    );
    let period = DatePeriod::new("01-01-2024", "10-01-2024");
    assert_eq!(
        get_work_schedule(&period, 1, 1).unwrap(),
        vec!["01-01-2024", "03-01-2024", "05-01-2024", "07-01-2024", "09-01-2024"]
    );
    let period = DatePeriod::new("28-12-2023", "03-01-2024");
    assert_eq!(
        get_work_schedule(&period, 2, 2).unwrap(),
        vec!["28-12-2023", "29-12-2023", "01-01-2024", "02-01-2024"]
    );
    let period = DatePeriod::new("01-01-2024", "01-01-2024");
    assert_eq!(get_work_schedule(&period, 1, 1).unwrap(), vec!["01-01-2024"]);
}

#[test]
fn leap_years() {
    assert!(is_leap_year(&local(2024, 3, 1)));
    assert!(!is_leap_year(&local(2022, 3, 1)));
    assert!(is_leap_year(&local(2020, 3, 1)));
    // New Year's Eve in UTC is already the next year at +01:00.
    let instant = parse("2023-12-31T23:30:00Z").with_offset(UtcOffset::from_minutes(60).unwrap());
    assert!(is_leap_year(&instant));
}
