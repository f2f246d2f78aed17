use almanac::config::Config;
use almanac::constants::*;
use almanac::utils::datetime::Countdown;
use almanac::{
    calculate_age, calculate_working_hours, compare_dates, count_weekend_days, current_date_time, day_of_week_name,
    days_until_new_year, format_with_locale, generate_monthly_calendar, is_leap_year, logger, measure_execution_time,
    pattern, random_date_in_range, time_until_event, zone, Clock, DateOrder, DatePattern, SystemClock,
};
use anyhow::{Context, Result};

fn main() -> Result<()> {
    let config = Config::load().context(ERROR_CONFIG_INVALID)?;
    logger::init(&config.logging)?;

    let clock = SystemClock;
    let display = &config.display;
    let demo = &config.demo;
    let input_pattern: DatePattern = display.input_pattern.parse()?;

    // 1. Current date and time
    let (today, now_time) = current_date_time(&clock);
    println!(
        "{} {} {}",
        MSG_CURRENT_DATE_TIME,
        input_pattern.format(today),
        now_time.format(&display.time_format)
    );

    // 2. Date comparison
    let verdict = match compare_dates(demo.first_date, demo.second_date) {
        DateOrder::Before => MSG_FIRST_BEFORE_SECOND,
        DateOrder::After => MSG_FIRST_AFTER_SECOND,
        DateOrder::Equal => MSG_DATES_EQUAL,
    };
    println!("{}", verdict);

    // 3. Days until New Year
    println!("{} {}", MSG_DAYS_UNTIL_NEW_YEAR, days_until_new_year(today));

    // 4. Leap year
    println!("{} {} {}", demo.leap_year, MSG_LEAP_YEAR_SUFFIX, is_leap_year(demo.leap_year));

    // 5. Weekend days in a month
    let calendar = generate_monthly_calendar(demo.calendar_month, demo.calendar_year)?;
    println!(
        "{} {}: {}",
        MSG_WEEKEND_DAYS,
        calendar,
        count_weekend_days(demo.calendar_month, demo.calendar_year)?
    );

    // 6. Execution time
    let iterations = demo.busy_loop_iterations;
    let timed = measure_execution_time(|| {
        for i in 0..iterations {
            std::hint::black_box(i);
        }
    });
    println!("{} {} {}", MSG_EXECUTION_TIME, timed.millis(), MSG_MILLISECONDS);

    // 7. Parsing and formatting
    let advanced = pattern::parse_and_advance(
        &demo.date_text,
        &display.input_pattern,
        demo.advance_days,
        &display.output_pattern,
    )?;
    println!("{} {} {} {}", MSG_ADVANCED_DATE, demo.advance_days, MSG_DAYS, advanced);

    // 8. Time zone conversion
    let source_now = zone::now_in_zone(&clock, &display.source_zone)?;
    let target_now = zone::convert_time_zone(&source_now, &display.target_zone)?;
    println!("{} {}: {}", MSG_TIME_ZONE, display.target_zone, target_now.to_rfc3339());

    // 9. Age
    println!("{} {} {}", MSG_AGE, calculate_age(demo.birth_date, today), MSG_YEARS);

    // 10. Monthly calendar
    println!("{} {}:", MSG_CALENDAR_FOR, calendar);
    for day in calendar.days() {
        let kind = if day.is_weekend { MSG_WEEKEND } else { MSG_WORKING_DAY };
        println!("{} - {}", day.date, kind);
    }

    // 11. Random date
    let mut rng = rand::rng();
    let random = random_date_in_range(demo.first_date, demo.second_date, &mut rng)?;
    println!("{} {}", MSG_RANDOM_DATE, random);

    // 12. Countdown to an event
    let remaining = Countdown::from(time_until_event(clock.now().naive_local(), demo.event));
    println!(
        "{} {} {}, {} {}, {} {}.",
        MSG_UNTIL_EVENT, remaining.hours, MSG_HOURS, remaining.minutes, MSG_MINUTES, remaining.seconds, MSG_SECONDS
    );

    // 13. Working hours
    println!(
        "{} {}",
        MSG_WORKING_HOURS,
        calculate_working_hours(demo.work_start, demo.work_end)
    );

    // 14. Localized date
    println!(
        "{} {}: {}",
        MSG_DATE_WITH_LOCALE,
        display.locale,
        format_with_locale(today, &display.locale)?
    );

    // 15. Day of week
    println!(
        "{} {}",
        MSG_DAY_OF_WEEK,
        day_of_week_name(today, &display.weekday_language)?
    );

    Ok(())
}
