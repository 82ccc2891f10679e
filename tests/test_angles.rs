use prayer_times::angles::*;
use prayer_times::types::SunAltitude;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── JulianDay ──

#[test]
fn test_julian_day_known_dates() {
    assert_eq!(julian_day(2000, 1, 1), 2_451_544.5);
    assert_eq!(julian_day(2024, 2, 29), 2_460_369.5);
    assert_eq!(julian_day(2025, 11, 21), 2_461_000.5);
    assert_eq!(julian_day(1582, 10, 15), 2_299_160.5);
}

#[test]
fn test_julian_day_advances_one_per_day() {
    let pairs: &[((i32, u32, u32), (i32, u32, u32))] = &[
        ((2026, 3, 20), (2026, 3, 21)),
        ((2026, 1, 31), (2026, 2, 1)),
        ((2026, 2, 28), (2026, 3, 1)),
        ((2024, 2, 28), (2024, 2, 29)),
        ((2024, 2, 29), (2024, 3, 1)),
        ((2023, 12, 31), (2024, 1, 1)),
        ((1999, 12, 31), (2000, 1, 1)),
        ((2100, 2, 28), (2100, 3, 1)),
    ];
    for &((y1, m1, d1), (y2, m2, d2)) in pairs {
        let diff = julian_day(y2, m2, d2) - julian_day(y1, m1, d1);
        assert_approx!(diff, 1.0, 1e-9);
    }
}

#[test]
fn test_julian_day_monotonic_over_a_year() {
    let mut prev = julian_day(2025, 12, 31);
    for month in 1..=12 {
        let days = match month {
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        };
        for day in 1..=days {
            let jd = julian_day(2026, month, day);
            assert_approx!(jd - prev, 1.0, 1e-9);
            prev = jd;
        }
    }
}

#[test]
fn test_julian_day_accepts_impossible_dates() {
    // Feb 30 runs on into March
    assert_eq!(julian_day(2025, 2, 30), julian_day(2025, 3, 2));
}

#[test]
fn test_julian_day_extreme_inputs_are_finite() {
    assert!(julian_day(i32::MAX, 6, 1).is_finite());
    assert!(julian_day(i32::MIN, 1, 1).is_finite());
    assert!(julian_day(2026, u32::MAX, u32::MAX).is_finite());
    // far years keep the one-day step
    let diff = julian_day(i32::MAX, 6, 2) - julian_day(i32::MAX, 6, 1);
    assert_approx!(diff, 1.0, 1e-6);
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-180.0, 180.0),
        (720.0, 0.0),
        (-450.0, 270.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_angle_total_and_idempotent() {
    let mut x = -1.0e6;
    while x < 1.0e6 {
        let n = normalize_angle(x);
        assert!((0.0..360.0).contains(&n), "normalize_angle({}) = {}", x, n);
        assert_eq!(normalize_angle(n), n);
        x += 977.31;
    }
    for &x in &[-1e-15, 1e-15, -359.999_999_999, 359.999_999_999, 1e12, -1e12] {
        let n = normalize_angle(x);
        assert!((0.0..360.0).contains(&n), "normalize_angle({}) = {}", x, n);
        assert_eq!(normalize_angle(n), n);
    }
}

// ── SunPosition ──

#[test]
fn test_sun_position_at_epoch() {
    let sun = sun_position(J2000_EPOCH);
    assert_approx!(sun.declination, -23.0335, 1e-3);
    assert_approx!(sun.equation_of_time * 60.0, -3.30, 0.05);
}

#[test]
fn test_sun_position_solstices() {
    assert_approx!(sun_position(julian_day(2026, 6, 21)).declination, 23.435, 0.01);
    assert_approx!(sun_position(julian_day(2026, 12, 21)).declination, -23.432, 0.01);
}

#[test]
fn test_sun_position_equinoxes() {
    assert_approx!(sun_position(julian_day(2026, 3, 20)).declination, 0.0, 0.5);
    assert_approx!(sun_position(julian_day(2026, 9, 23)).declination, 0.0, 0.5);
}

#[test]
fn test_equation_of_time_bounded() {
    // a few days around the March equinox put q and RA on opposite sides of 0°
    for year in 1990..2040 {
        for month in 1..=12 {
            for day in [1, 10, 20, 28] {
                let eot = sun_position(julian_day(year, month, day)).equation_of_time;
                assert!(
                    eot.abs() < 0.3,
                    "{}-{}-{}: equation of time {} h",
                    year, month, day, eot
                );
            }
        }
    }
}

#[test]
fn test_equation_of_time_near_march_equinox() {
    let eot = sun_position(julian_day(2026, 3, 21)).equation_of_time;
    assert_approx!(eot, -0.121936, 1e-4);
}

// ── SolarNoon ──

#[test]
fn test_solar_noon_on_zone_meridian() {
    assert_approx!(solar_noon(105.0, 7.0, 0.0), 12.0, 1e-12);
    assert_approx!(solar_noon(0.0, 0.0, 0.25), 11.75, 1e-12);
    // one degree east is four minutes earlier
    assert_approx!(solar_noon(106.0, 7.0, 0.0), 12.0 - 4.0 / 60.0, 1e-12);
}

// ── HourAngle ──

#[test]
fn test_hour_angle_equator_equinox() {
    // sun rises 6h before noon when neither refraction nor tilt applies
    assert_approx!(hour_angle(0.0, 0.0, SunAltitude::BelowHorizon(0.0)).unwrap(), 6.0, 1e-9);
    // 15° of depression is one extra hour
    assert_approx!(hour_angle(0.0, 0.0, SunAltitude::BelowHorizon(15.0)).unwrap(), 7.0, 1e-9);
}

#[test]
fn test_hour_angle_sign_convention() {
    let below = hour_angle(30.0, 10.0, SunAltitude::BelowHorizon(18.0)).unwrap();
    let horizon = hour_angle(30.0, 10.0, SunAltitude::BelowHorizon(0.0)).unwrap();
    let above = hour_angle(30.0, 10.0, SunAltitude::AboveHorizon(30.0)).unwrap();
    assert!(below > horizon, "twilight should be farther from noon than sunrise");
    assert!(above < horizon, "an above-horizon event should be closer to noon");
}

#[test]
fn test_hour_angle_matches_raw_formula() {
    let alt = SunAltitude::AboveHorizon(41.0);
    assert_eq!(
        hour_angle(-6.2, -19.9, alt),
        Some(hour_angle_raw(-6.2, -19.9, -41.0))
    );
    assert_eq!(alt.depression(), -41.0);
    assert_eq!(SunAltitude::BelowHorizon(20.0).depression(), 20.0);
}

#[test]
fn test_hour_angle_no_solar_event() {
    let decl = sun_position(julian_day(2026, 6, 21)).declination;
    // midnight sun: never 18° below, never even at the horizon
    assert_eq!(hour_angle(80.0, decl, SunAltitude::BelowHorizon(18.0)), None);
    assert_eq!(hour_angle(80.0, decl, SunAltitude::BelowHorizon(0.833)), None);
    // polar night on the other side
    assert_eq!(hour_angle(-80.0, decl, SunAltitude::BelowHorizon(0.833)), None);
    // the raw formula surfaces the same condition as NaN
    assert!(hour_angle_raw(80.0, decl, 18.0).is_nan());
}

#[test]
fn test_hour_angle_sun_never_high_enough() {
    // at 60°N on the December solstice the noon sun stays below 10°
    let decl = sun_position(julian_day(2026, 12, 21)).declination;
    assert_eq!(hour_angle(60.0, decl, SunAltitude::AboveHorizon(10.0)), None);
    assert!(hour_angle(60.0, decl, SunAltitude::AboveHorizon(5.0)).is_some());
}

// ── AsrAltitude ──

#[test]
fn test_asr_altitude_decreases_with_noon_zenith() {
    let mut prev = asr_altitude(0.0, 0.0, 1.0);
    for lat in [10.0, 20.0, 30.0, 40.0, 50.0] {
        let alt = asr_altitude(lat, 0.0, 1.0);
        assert!(alt < prev, "lat={} alt={} prev={}", lat, alt, prev);
        prev = alt;
    }
}

#[test]
fn test_asr_altitude_symmetric_in_hemisphere() {
    assert_approx!(asr_altitude(30.0, 10.0, 1.0), asr_altitude(-30.0, -10.0, 1.0), 1e-12);
}

// ── DegRad roundtrip ──

#[test]
fn test_deg_rad_roundtrip() {
    for &deg in &[0.0, 45.0, 90.0, 180.0, 270.0, 360.0, -45.0, -180.0, 123.456] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-10);
    }
}
