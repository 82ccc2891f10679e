use std::fmt;

use chrono::NaiveDate;

/// The seven daily events, in the order they occur on a normal day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuha,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 7] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuha,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuha => "Dhuha",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Observer position and the clock offset used for the output times.
///
/// Latitude is positive north, longitude positive east, `utc_offset` in hours.
/// Range checks live in [`crate::validate`]; the calculation itself accepts
/// any values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset: f64,
}

impl Location {
    pub const fn new(latitude: f64, longitude: f64, utc_offset: f64) -> Self {
        Self {
            latitude,
            longitude,
            utc_offset,
        }
    }
}

/// Sun position for one day, evaluated at 0h of the Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Degrees north of the celestial equator.
    pub declination: f64,
    /// Apparent minus mean solar time, in hours.
    pub equation_of_time: f64,
}

/// Target sun altitude for an hour-angle solve.
///
/// Twilight and horizon events sit below the horizon; Asr sits above it.
/// Both variants carry a non-negative angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunAltitude {
    BelowHorizon(f64),
    AboveHorizon(f64),
}

impl SunAltitude {
    /// Depression of the sun below the horizon: positive below, negative above.
    pub fn depression(self) -> f64 {
        match self {
            SunAltitude::BelowHorizon(angle) => angle,
            SunAltitude::AboveHorizon(angle) => -angle,
        }
    }
}

/// Local clock times in hours since local midnight.
///
/// Values are not wrapped into `[0, 24)`; a far-off `utc_offset` can push them
/// outside that range. Wrapping happens in [`crate::format`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuha: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl PrayerTimes {
    pub fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuha => self.dhuha,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, f64)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// First event at or after `hours` (local clock). `None` once Isha has passed.
    pub fn next_after(&self, hours: f64) -> Option<(Prayer, f64)> {
        self.iter().find(|&(_, t)| t >= hours)
    }
}

/// A day's times where events that never happen are `None`.
///
/// Dhuhr always exists since solar noon needs no hour-angle solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailySchedule {
    pub fajr: Option<f64>,
    pub sunrise: Option<f64>,
    pub dhuha: Option<f64>,
    pub dhuhr: f64,
    pub asr: Option<f64>,
    pub maghrib: Option<f64>,
    pub isha: Option<f64>,
}

impl DailySchedule {
    pub fn get(&self, prayer: Prayer) -> Option<f64> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuha => self.dhuha,
            Prayer::Dhuhr => Some(self.dhuhr),
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, Option<f64>)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    pub fn missing(&self) -> usize {
        self.iter().filter(|(_, t)| t.is_none()).count()
    }

    pub fn complete(&self) -> Option<PrayerTimes> {
        Some(PrayerTimes {
            fajr: self.fajr?,
            sunrise: self.sunrise?,
            dhuha: self.dhuha?,
            dhuhr: self.dhuhr,
            asr: self.asr?,
            maghrib: self.maghrib?,
            isha: self.isha?,
        })
    }
}

impl From<PrayerTimes> for DailySchedule {
    fn from(t: PrayerTimes) -> Self {
        Self {
            fajr: Some(t.fajr),
            sunrise: Some(t.sunrise),
            dhuha: Some(t.dhuha),
            dhuhr: t.dhuhr,
            asr: Some(t.asr),
            maghrib: Some(t.maghrib),
            isha: Some(t.isha),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimetableConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub utc_offset: f64,
    pub year: i32,
    /// `None` builds the whole year.
    pub month: Option<u32>,
}

impl TimetableConfig {
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude, self.utc_offset)
    }
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            latitude: -6.2,
            longitude: 106.8,
            utc_offset: 7.0,
            year: 2026,
            month: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimetableDay {
    pub date: NaiveDate,
    pub schedule: DailySchedule,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableMetadata {
    pub generated_at: String,
    pub total_days: usize,
    /// Events across all days that could not be solved.
    pub missing_events: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timetable {
    pub config: TimetableConfig,
    pub days: Vec<TimetableDay>,
    pub metadata: TableMetadata,
}
