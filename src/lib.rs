pub mod angles;
pub mod convention;
pub mod error;
pub mod format;
pub mod prayer;
pub mod timetable;
pub mod types;
pub mod validate;

pub use angles::{
    asr_altitude, deg_to_rad, hour_angle, hour_angle_raw, julian_day, normalize_angle,
    rad_to_deg, signed_angle, solar_noon, sun_position, DEGREES_PER_HOUR, J2000_EPOCH,
};

pub use convention::{Convention, Ihtiyat, KEMENAG};

pub use error::{ConfigError, PrayerTimeError};

pub use format::{
    format_hm, format_hms, minutes_to_time, parse_hm, rounded_seconds, rounded_up_minutes,
    time_to_minutes, to_naive_time,
};

pub use prayer::{
    calculate, calculate_in_zone, calculate_prayer_times, daily_schedule, utc_offset_hours,
};

pub use timetable::{days_in_scope, generate_timetable, lookup_day};

pub use types::{
    DailySchedule, Location, Prayer, PrayerTimes, SolarPosition, SunAltitude, TableMetadata,
    Timetable, TimetableConfig, TimetableDay,
};
