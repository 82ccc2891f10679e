//! Regional calculation constants.
//!
//! The Indonesian Ministry of Religious Affairs (Kemenag) values are the
//! default. Alternative conventions can be described in TOML:
//!
//! ```toml
//! fajr_angle = 18.0
//! isha_angle = 17.0
//!
//! [ihtiyat]
//! sunrise = -1.0
//! ```
//!
//! Keys that are left out keep their Kemenag value.

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Precautionary offsets in minutes, added to each computed time.
///
/// Dhuha has no entry: it follows the adjusted sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Ihtiyat {
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub maghrib: f64,
    pub isha: f64,
}

impl Ihtiyat {
    pub const KEMENAG: Ihtiyat = Ihtiyat {
        fajr: 2.0,
        sunrise: -2.0,
        dhuhr: 2.0,
        asr: 2.0,
        maghrib: 2.0,
        isha: 2.0,
    };

    pub const NONE: Ihtiyat = Ihtiyat {
        fajr: 0.0,
        sunrise: 0.0,
        dhuhr: 0.0,
        asr: 0.0,
        maghrib: 0.0,
        isha: 0.0,
    };
}

impl Default for Ihtiyat {
    fn default() -> Self {
        Self::KEMENAG
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Convention {
    /// Sun depression at Fajr, degrees.
    pub fajr_angle: f64,
    /// Sun depression at Isha, degrees.
    pub isha_angle: f64,
    /// Depression of the sun's center at visible sunrise and sunset
    /// (refraction plus semi-diameter), degrees.
    pub refraction: f64,
    /// Shadow length beyond the noon shadow, in object heights, that starts Asr.
    pub shadow_factor: f64,
    /// Minutes after (adjusted) sunrise at which Dhuha begins.
    pub dhuha_offset_minutes: f64,
    pub ihtiyat: Ihtiyat,
}

pub static KEMENAG: Convention = Convention {
    fajr_angle: 20.0,
    isha_angle: 18.0,
    refraction: 0.833,
    shadow_factor: 1.0,
    dhuha_offset_minutes: 28.0,
    ihtiyat: Ihtiyat::KEMENAG,
};

impl Default for Convention {
    fn default() -> Self {
        KEMENAG
    }
}

impl Convention {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let convention = Self::from_toml_str(&text)?;
        log::info!("loaded convention from {}", path.display());
        Ok(convention)
    }

    pub fn with_ihtiyat(self, ihtiyat: Ihtiyat) -> Self {
        Self { ihtiyat, ..self }
    }
}
