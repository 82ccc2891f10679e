//! Wall-clock rendering of fractional hours.
//!
//! Any magnitude of finite input is accepted. NaN or infinite hours render
//! as midnight.

use chrono::NaiveTime;

pub const MINUTES_PER_DAY: i64 = 24 * 60;
pub const SECONDS_PER_DAY: i64 = MINUTES_PER_DAY * 60;

/// Minutes since midnight, with any partial minute rounded up, wrapped to one day.
pub fn rounded_up_minutes(hours: f64) -> i64 {
    let whole = hours.floor();
    let minutes = ((hours - whole) * 60.0).ceil() as i64;
    // wrap before the cast so huge hour counts cannot overflow
    (whole.rem_euclid(24.0) as i64 * 60 + minutes).rem_euclid(MINUTES_PER_DAY)
}

/// Seconds since midnight, rounded half up, wrapped to one day.
pub fn rounded_seconds(hours: f64) -> i64 {
    let whole = hours.floor();
    let seconds = ((hours - whole) * 3600.0 + 0.5).floor() as i64;
    (whole.rem_euclid(24.0) as i64 * 3600 + seconds).rem_euclid(SECONDS_PER_DAY)
}

pub fn minutes_to_time(total_minutes: i64) -> (i64, i64) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn time_to_minutes(time: (i64, i64)) -> i64 {
    time.0 * 60 + time.1
}

/// `"HH:MM"`, always rounding partial minutes up.
pub fn format_hm(hours: f64) -> String {
    let (h, m) = minutes_to_time(rounded_up_minutes(hours));
    format!("{h:02}:{m:02}")
}

/// `"HH:MM:SS"`, rounding to the nearest second.
pub fn format_hms(hours: f64) -> String {
    let total = rounded_seconds(hours);
    let (h, m) = minutes_to_time(total / 60);
    format!("{h:02}:{m:02}:{:02}", total % 60)
}

/// Parses `"HH:MM"` back into `(hour, minute)`.
pub fn parse_hm(s: &str) -> Option<(i64, i64)> {
    let (h, m) = s.split_once(':')?;
    let (h, m) = (h.parse().ok()?, m.parse().ok()?);
    ((0..24).contains(&h) && (0..60).contains(&m)).then_some((h, m))
}

/// The displayed `"HH:MM"` time as a [`NaiveTime`].
pub fn to_naive_time(hours: f64) -> NaiveTime {
    let (h, m) = minutes_to_time(rounded_up_minutes(hours));
    // both components are in range after rem_euclid
    NaiveTime::from_hms_opt(h as u32, m as u32, 0).unwrap_or(NaiveTime::MIN)
}
