//! Time zone conversion over the IANA database bundled with chrono-tz.

use crate::clock::Clock;
use crate::error::{CalendarError, Result};
use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::Tz;

/// Look up an IANA zone id such as `Europe/Moscow` or `UTC`
pub fn resolve_zone(zone: &str) -> Result<Tz> {
    zone.parse::<Tz>().map_err(|_| {
        log::warn!("unknown time zone '{}'", zone);
        CalendarError::UnknownZone {
            zone: zone.to_string(),
        }
    })
}

/// The same instant as `zoned`, expressed in `target_zone`
pub fn convert_time_zone<Z: TimeZone>(zoned: &DateTime<Z>, target_zone: &str) -> Result<DateTime<Tz>> {
    let target = resolve_zone(target_zone)?;
    Ok(zoned.with_timezone(&target))
}

/// Attach `zone` to a wall-clock date-time.
///
/// A time repeated by a DST fall-back resolves to the earlier offset. A time
/// skipped by a spring-forward gap is moved later by the length of the gap.
pub fn zoned_date_time(local: NaiveDateTime, zone: &str) -> Result<DateTime<Tz>> {
    let tz = resolve_zone(zone)?;
    let zoned = match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => {
            // read the wall time with the offset in force before the gap
            let before_gap = tz.offset_from_utc_datetime(&(local - TimeDelta::days(1))).fix();
            let utc = local - TimeDelta::seconds(i64::from(before_gap.local_minus_utc()));
            log::debug!("{} does not exist in {}, shifting past the gap", local, zone);
            tz.from_utc_datetime(&utc)
        }
    };
    Ok(zoned)
}

/// Current instant of `clock` in `zone`
pub fn now_in_zone(clock: &impl Clock, zone: &str) -> Result<DateTime<Tz>> {
    convert_time_zone(&clock.now(), zone)
}
