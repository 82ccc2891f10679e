//! Input range checks for user-supplied values.
//!
//! The calculation functions do not call these; front ends do.

use crate::error::{PrayerTimeError, Result};
use crate::types::Location;

pub const YEAR_RANGE: (i32, i32) = (1900, 2100);
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);
pub const UTC_OFFSET_RANGE: (f64, f64) = (-12.0, 14.0);

fn check(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<f64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PrayerTimeError::InputOutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

pub fn year(year: i32) -> Result<i32> {
    let (min, max) = YEAR_RANGE;
    check("year", year as f64, (min as f64, max as f64)).map(|_| year)
}

pub fn month(month: u32) -> Result<u32> {
    check("month", month as f64, (1.0, 12.0)).map(|_| month)
}

/// Day of month in `1..=31`, regardless of the month's real length.
pub fn day(day: u32) -> Result<u32> {
    check("day", day as f64, (1.0, 31.0)).map(|_| day)
}

pub fn latitude(latitude: f64) -> Result<f64> {
    check("latitude", latitude, LATITUDE_RANGE)
}

pub fn longitude(longitude: f64) -> Result<f64> {
    check("longitude", longitude, LONGITUDE_RANGE)
}

pub fn utc_offset(utc_offset: f64) -> Result<f64> {
    check("timezone", utc_offset, UTC_OFFSET_RANGE)
}

pub fn location(latitude: f64, longitude: f64, utc_offset: f64) -> Result<Location> {
    Ok(Location::new(
        self::latitude(latitude)?,
        self::longitude(longitude)?,
        self::utc_offset(utc_offset)?,
    ))
}
