use almanac::calendar::*;
use almanac::CalendarError;
use chrono::{Datelike, Month, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_count_weekend_days_january() {
    // January 2024 starts on a Monday, January 2023 on a Sunday
    assert_eq!(count_weekend_days(1, 2024).unwrap(), 8);
    assert_eq!(count_weekend_days(1, 2023).unwrap(), 9);
}

#[test]
fn test_count_weekend_days_other_months() {
    assert_eq!(count_weekend_days(2, 2024).unwrap(), 8);
    assert_eq!(count_weekend_days(6, 2024).unwrap(), 10);
}

#[test]
fn test_count_weekend_days_invalid_month() {
    assert_eq!(count_weekend_days(0, 2024), Err(CalendarError::InvalidMonth { month: 0 }));
    assert_eq!(count_weekend_days(13, 2024), Err(CalendarError::InvalidMonth { month: 13 }));
}

#[test]
fn test_monthly_calendar_february_lengths() {
    assert_eq!(generate_monthly_calendar(2, 2024).unwrap().days().count(), 29);
    assert_eq!(generate_monthly_calendar(2, 2023).unwrap().days().count(), 28);
}

#[test]
fn test_monthly_calendar_entries_in_order() {
    let calendar = generate_monthly_calendar(1, 2024).unwrap();
    let days: Vec<CalendarDay> = calendar.days().collect();

    assert_eq!(days.len(), 31);
    assert_eq!(days.first().unwrap().date, date(2024, 1, 1));
    assert_eq!(days.last().unwrap().date, date(2024, 1, 31));
    assert!(days.windows(2).all(|pair| pair[0].date < pair[1].date));
    assert!(days.iter().all(|day| day.date.month() == 1));

    for day in &days {
        let expected = matches!(day.date.weekday(), Weekday::Sat | Weekday::Sun);
        assert_eq!(day.is_weekend, expected, "{}", day.date);
    }
}

#[test]
fn test_monthly_calendar_is_restartable() {
    let calendar = generate_monthly_calendar(3, 2024).unwrap();
    let first_pass: Vec<CalendarDay> = calendar.days().collect();
    let second_pass: Vec<CalendarDay> = calendar.days().collect();
    assert_eq!(first_pass, second_pass);

    let iter = calendar.days();
    let cloned = iter.clone();
    assert_eq!(iter.count(), cloned.count());
}

#[test]
fn test_monthly_calendar_metadata() {
    let calendar = generate_monthly_calendar(1, 2024).unwrap();
    assert_eq!(calendar.month(), Month::January);
    assert_eq!(calendar.first_day(), date(2024, 1, 1));
    assert_eq!(calendar.len(), 31);
    assert!(!calendar.is_empty());
    assert_eq!(calendar.weekend_days(), 8);
    assert_eq!(calendar.to_string(), "January 2024");
}

#[test]
fn test_monthly_calendar_invalid_month() {
    assert_eq!(
        generate_monthly_calendar(13, 2024).unwrap_err(),
        CalendarError::InvalidMonth { month: 13 }
    );
}

#[test]
fn test_random_date_stays_in_range() {
    let start = date(2023, 1, 1);
    let end = date(2024, 1, 1);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10_000 {
        let picked = random_date_in_range(start, end, &mut rng).unwrap();
        assert!(start <= picked && picked <= end, "{} outside range", picked);
    }
}

#[test]
fn test_random_date_reaches_both_ends() {
    let start = date(2024, 1, 1);
    let end = date(2024, 1, 3);
    let mut rng = StdRng::seed_from_u64(7);

    let picks: Vec<NaiveDate> = (0..1_000)
        .map(|_| random_date_in_range(start, end, &mut rng).unwrap())
        .collect();
    assert!(picks.contains(&start));
    assert!(picks.contains(&end));
    assert!(picks.contains(&date(2024, 1, 2)));
}

#[test]
fn test_random_date_single_day_range() {
    let day = date(2024, 2, 29);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(random_date_in_range(day, day, &mut rng).unwrap(), day);
}

#[test]
fn test_random_date_inverted_range() {
    let start = date(2024, 1, 2);
    let end = date(2024, 1, 1);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        random_date_in_range(start, end, &mut rng),
        Err(CalendarError::InvalidRange { start, end })
    );
}
