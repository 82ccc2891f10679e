use crate::types::Prayer;

/// Failures of a single prayer-time computation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PrayerTimeError {
    /// The sun never reaches the altitude that defines `event` on this date
    /// (midnight sun, polar night, or twilight that never deepens enough).
    #[error("{event} does not occur at latitude {latitude:.4}° (solar declination {declination:.4}°)")]
    NoSolarEvent {
        event: Prayer,
        latitude: f64,
        declination: f64,
    },

    #[error("{field} {value} is outside [{min}, {max}]")]
    InputOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid convention file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PrayerTimeError>;
