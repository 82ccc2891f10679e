use crate::types::{SolarPosition, SunAltitude};

pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Reference epoch J2000.0 as a Julian Day.
pub const J2000_EPOCH: f64 = 2_451_545.0;

pub const SUN_MEAN_ANOMALY_OFFSET: f64 = 357.529;
pub const SUN_MEAN_ANOMALY_RATE: f64 = 0.985_600_28;
pub const SUN_MEAN_LONGITUDE_OFFSET: f64 = 280.459;
pub const SUN_MEAN_LONGITUDE_RATE: f64 = 0.985_647_36;
/// Equation-of-center amplitudes for `sin(g)` and `sin(2g)`.
pub const SUN_CENTER_AMPLITUDE_1: f64 = 1.915;
pub const SUN_CENTER_AMPLITUDE_2: f64 = 0.020;
pub const OBLIQUITY_OFFSET: f64 = 23.439;
pub const OBLIQUITY_RATE: f64 = 0.000_000_36;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Maps any angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Maps any angle into `[-180, 180)`.
pub fn signed_angle(angle: f64) -> f64 {
    normalize_angle(angle + 180.0) - 180.0
}

/// Julian Day at 0h UT of a proleptic Gregorian date.
///
/// January and February count as months 13 and 14 of the previous year.
/// The date is not checked: `(2025, 2, 30)` yields the same value as March 2nd.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(day) + b
        - 1524.5
}

/// Declination and equation of time from a two-term solar approximation.
pub fn sun_position(jd: f64) -> SolarPosition {
    let d = jd - J2000_EPOCH;

    let g = normalize_angle(SUN_MEAN_ANOMALY_OFFSET + SUN_MEAN_ANOMALY_RATE * d);
    let q = normalize_angle(SUN_MEAN_LONGITUDE_OFFSET + SUN_MEAN_LONGITUDE_RATE * d);
    let g_rad = deg_to_rad(g);
    let l = normalize_angle(
        q + SUN_CENTER_AMPLITUDE_1 * g_rad.sin() + SUN_CENTER_AMPLITUDE_2 * (2.0 * g_rad).sin(),
    );
    let e = OBLIQUITY_OFFSET - OBLIQUITY_RATE * d;

    let (l_rad, e_rad) = (deg_to_rad(l), deg_to_rad(e));
    let ra = normalize_angle(rad_to_deg((e_rad.cos() * l_rad.sin()).atan2(l_rad.cos())));

    // q and RA are each wrapped to [0, 360), so their difference is wrapped
    // to [-180, 180) before converting to hours
    SolarPosition {
        declination: rad_to_deg((e_rad.sin() * l_rad.sin()).asin()),
        equation_of_time: signed_angle(q - ra) / DEGREES_PER_HOUR,
    }
}

/// Local clock time of solar transit, before any precautionary offset.
pub fn solar_noon(longitude: f64, utc_offset: f64, equation_of_time: f64) -> f64 {
    12.0 + utc_offset - longitude / DEGREES_PER_HOUR - equation_of_time
}

/// Hours between solar noon and the moment the sun is `depression` degrees
/// below the horizon (negative for above).
///
/// Returns NaN when the sun never gets there.
pub fn hour_angle_raw(latitude: f64, declination: f64, depression: f64) -> f64 {
    let (lat, decl, angle) = (
        deg_to_rad(latitude),
        deg_to_rad(declination),
        deg_to_rad(depression),
    );
    let numerator = -angle.sin() - lat.sin() * decl.sin();
    let denominator = lat.cos() * decl.cos();
    rad_to_deg((numerator / denominator).acos()) / DEGREES_PER_HOUR
}

/// Hours from solar noon to the crossing of `altitude`, or `None` if the sun
/// stays entirely above or below it all day.
pub fn hour_angle(latitude: f64, declination: f64, altitude: SunAltitude) -> Option<f64> {
    let ha = hour_angle_raw(latitude, declination, altitude.depression());
    ha.is_finite().then_some(ha)
}

/// Sun altitude at which a shadow is `shadow_factor` object-lengths longer
/// than the noon shadow.
pub fn asr_altitude(latitude: f64, declination: f64, shadow_factor: f64) -> f64 {
    let noon_zenith = deg_to_rad((latitude - declination).abs());
    rad_to_deg((1.0 / (shadow_factor + noon_zenith.tan())).atan())
}
