use almanac::utils::date::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_is_leap_year_known_years() {
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(2023));
}

#[test]
fn test_is_leap_year_matches_rule() {
    for year in 1..=9999 {
        let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        assert_eq!(is_leap_year(year), expected, "year {}", year);
    }
}

#[test]
fn test_is_leap_year_agrees_with_chrono() {
    for year in [1600, 1700, 1996, 2100, 2400] {
        let has_feb_29 = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        assert_eq!(is_leap_year(year), has_feb_29);
    }
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(1, 2024), Some(31));
    assert_eq!(days_in_month(2, 2024), Some(29));
    assert_eq!(days_in_month(2, 2023), Some(28));
    assert_eq!(days_in_month(4, 2023), Some(30));
    assert_eq!(days_in_month(0, 2023), None);
    assert_eq!(days_in_month(13, 2023), None);
}

#[test]
fn test_is_weekend() {
    assert!(is_weekend(date(2024, 1, 6))); // Saturday
    assert!(is_weekend(date(2024, 1, 7))); // Sunday
    assert!(!is_weekend(date(2024, 1, 8))); // Monday
}

#[test]
fn test_compare_dates() {
    let a = date(2023, 1, 1);
    let b = date(2024, 1, 1);
    assert_eq!(compare_dates(a, b), DateOrder::Before);
    assert_eq!(compare_dates(b, a), DateOrder::After);
    assert_eq!(compare_dates(a, a), DateOrder::Equal);
    assert_eq!(compare_dates(date(2024, 2, 1), date(2024, 1, 31)), DateOrder::After);
}

#[test]
fn test_days_until_new_year_on_new_years_eve() {
    for year in [1999, 2000, 2023, 2024] {
        assert_eq!(days_until_new_year(date(year, 12, 31)), 1);
    }
}

#[test]
fn test_days_until_new_year_on_new_years_day() {
    // the target is always next year's January 1
    assert_eq!(days_until_new_year(date(2023, 1, 1)), 365);
    assert_eq!(days_until_new_year(date(2024, 1, 1)), 366);
}

#[test]
fn test_days_until_new_year_matches_day_difference() {
    let today = date(2024, 5, 23);
    let new_year = date(2025, 1, 1);
    assert_eq!(days_until_new_year(today), (new_year - today).num_days());
}

#[test]
fn test_plus_days() {
    assert_eq!(plus_days(date(2024, 1, 15), 10), Some(date(2024, 1, 25)));
    assert_eq!(plus_days(date(2024, 2, 28), 1), Some(date(2024, 2, 29)));
    assert_eq!(plus_days(date(2024, 1, 1), -1), Some(date(2023, 12, 31)));
    assert_eq!(plus_days(NaiveDate::MAX, 1), None);
}
