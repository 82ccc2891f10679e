//! Daily prayer times from solar noon and hour-angle solves.
//!
//! The pipeline runs in three phases:
//!
//! 1. raw times: solar noon plus or minus the hour angle of each event's sun altitude,
//! 2. adjusted times: each event shifted by its ihtiyat,
//! 3. derived times: Dhuha, a fixed offset after the *adjusted* sunrise.

use chrono::{Datelike, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone};

use crate::angles::{asr_altitude, hour_angle, julian_day, solar_noon, sun_position};
use crate::convention::{Convention, Ihtiyat};
use crate::error::{PrayerTimeError, Result};
use crate::types::{DailySchedule, Location, Prayer, PrayerTimes, SunAltitude};

/// One event time, or the error explaining why it does not occur.
type EventTime = Result<f64>;

#[derive(Debug, Clone, Copy)]
struct RawTimes {
    fajr: EventTime,
    sunrise: EventTime,
    dhuhr: f64,
    asr: EventTime,
    maghrib: EventTime,
    isha: EventTime,
}

#[derive(Debug, Clone, Copy)]
struct EventTimes {
    fajr: EventTime,
    sunrise: EventTime,
    dhuha: EventTime,
    dhuhr: f64,
    asr: EventTime,
    maghrib: EventTime,
    isha: EventTime,
}

fn raw_times(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
    convention: &Convention,
) -> RawTimes {
    let jd = julian_day(year, month, day);
    let sun = sun_position(jd);
    let (lat, decl) = (location.latitude, sun.declination);
    let noon = solar_noon(location.longitude, location.utc_offset, sun.equation_of_time);

    log::debug!(
        "{year:04}-{month:02}-{day:02}: jd={jd} declination={decl:.4} eqt={:.5}h noon={noon:.5}",
        sun.equation_of_time
    );

    let solve = |event: Prayer, altitude: SunAltitude| {
        hour_angle(lat, decl, altitude).ok_or(PrayerTimeError::NoSolarEvent {
            event,
            latitude: lat,
            declination: decl,
        })
    };

    let horizon = SunAltitude::BelowHorizon(convention.refraction);
    let asr_alt = SunAltitude::AboveHorizon(asr_altitude(lat, decl, convention.shadow_factor));

    RawTimes {
        fajr: solve(Prayer::Fajr, SunAltitude::BelowHorizon(convention.fajr_angle))
            .map(|ha| noon - ha),
        sunrise: solve(Prayer::Sunrise, horizon).map(|ha| noon - ha),
        dhuhr: noon,
        asr: solve(Prayer::Asr, asr_alt).map(|ha| noon + ha),
        maghrib: solve(Prayer::Maghrib, horizon).map(|ha| noon + ha),
        isha: solve(Prayer::Isha, SunAltitude::BelowHorizon(convention.isha_angle))
            .map(|ha| noon + ha),
    }
}

fn minutes(m: f64) -> f64 {
    m / 60.0
}

fn apply_ihtiyat(raw: RawTimes, ihtiyat: &Ihtiyat) -> RawTimes {
    RawTimes {
        fajr: raw.fajr.map(|t| t + minutes(ihtiyat.fajr)),
        sunrise: raw.sunrise.map(|t| t + minutes(ihtiyat.sunrise)),
        dhuhr: raw.dhuhr + minutes(ihtiyat.dhuhr),
        asr: raw.asr.map(|t| t + minutes(ihtiyat.asr)),
        maghrib: raw.maghrib.map(|t| t + minutes(ihtiyat.maghrib)),
        isha: raw.isha.map(|t| t + minutes(ihtiyat.isha)),
    }
}

fn derive_dhuha(adjusted: RawTimes, dhuha_offset_minutes: f64) -> EventTimes {
    EventTimes {
        fajr: adjusted.fajr,
        sunrise: adjusted.sunrise,
        dhuha: adjusted.sunrise.map(|t| t + minutes(dhuha_offset_minutes)),
        dhuhr: adjusted.dhuhr,
        asr: adjusted.asr,
        maghrib: adjusted.maghrib,
        isha: adjusted.isha,
    }
}

fn event_times(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
    convention: &Convention,
) -> EventTimes {
    let raw = raw_times(year, month, day, location, convention);
    let adjusted = apply_ihtiyat(raw, &convention.ihtiyat);
    derive_dhuha(adjusted, convention.dhuha_offset_minutes)
}

/// All seven times for one date, failing on the first event the sun never reaches.
///
/// The date is taken as given; `(year, month, day)` is not checked against the calendar.
pub fn calculate_prayer_times(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
    convention: &Convention,
) -> Result<PrayerTimes> {
    let t = event_times(year, month, day, location, convention);
    Ok(PrayerTimes {
        fajr: t.fajr?,
        sunrise: t.sunrise?,
        dhuha: t.dhuha?,
        dhuhr: t.dhuhr,
        asr: t.asr?,
        maghrib: t.maghrib?,
        isha: t.isha?,
    })
}

/// Like [`calculate_prayer_times`], but events that do not occur are `None`.
pub fn daily_schedule(
    year: i32,
    month: u32,
    day: u32,
    location: &Location,
    convention: &Convention,
) -> DailySchedule {
    let t = event_times(year, month, day, location, convention);
    let keep = |time: EventTime| match time {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("{year:04}-{month:02}-{day:02}: {e}");
            None
        }
    };
    DailySchedule {
        fajr: keep(t.fajr),
        sunrise: keep(t.sunrise),
        // dhuha only fails when sunrise does, which was already reported
        dhuha: t.dhuha.ok(),
        dhuhr: t.dhuhr,
        asr: keep(t.asr),
        maghrib: keep(t.maghrib),
        isha: keep(t.isha),
    }
}

pub fn calculate(
    date: NaiveDate,
    location: &Location,
    convention: &Convention,
) -> Result<PrayerTimes> {
    calculate_prayer_times(date.year(), date.month(), date.day(), location, convention)
}

/// UTC offset in hours that `tz` observes at local noon on `date`.
pub fn utc_offset_hours<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> f64 {
    let local_noon = date.and_time(NaiveTime::MIN) + TimeDelta::hours(12);
    let offset = tz.offset_from_local_datetime(&local_noon).earliest().map_or_else(
        || tz.offset_from_utc_datetime(&local_noon).fix(),
        |o| o.fix(),
    );
    offset.local_minus_utc() as f64 / 3600.0
}

/// [`calculate`] with the UTC offset taken from a time zone, so daylight
/// saving is honored per date.
pub fn calculate_in_zone<Tz: TimeZone>(
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
    tz: &Tz,
    convention: &Convention,
) -> Result<PrayerTimes> {
    let location = Location::new(latitude, longitude, utc_offset_hours(tz, date));
    calculate(date, &location, convention)
}
