//! Error types for prayer time computation.
//!
//! Only bad input is an error. A time the sun geometry cannot produce (polar day or
//! night) is not an error: it comes back as an undefined slot in
//! [`PrayerTimes`](crate::types::PrayerTimes) and renders as
//! [`INVALID_TIME`](crate::format::INVALID_TIME).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrayerTimeError {
    /// Latitude outside [-90, 90] or not a finite number.
    #[error("Invalid latitude {0}: expected a finite value in [-90, 90] degrees")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] or not a finite number.
    #[error("Invalid longitude {0}: expected a finite value in [-180, 180] degrees")]
    InvalidLongitude(f64),

    /// Time zone offset outside the civil range.
    #[error("Invalid time zone offset {0}: expected a finite value in [-12, 14] hours")]
    InvalidTimeZone(f64),

    /// The year/month/day triple is not a Gregorian calendar date.
    #[error("Invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Configuration text could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, PrayerTimeError>;
