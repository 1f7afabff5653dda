pub mod angles;
pub mod calculator;
pub mod config;
pub mod error;
pub mod format;
pub mod types;

pub use angles::{
    asr_angle, darccos, darccot, darcsin, darctan2, dcos, deg_to_rad, dsin, dtan, fix_angle,
    fix_hour, hour_angle_for_altitude, julian_date, rad_to_deg, sun_position, time_difference,
    DEGREES_PER_HOUR, J2000, SUNRISE_ANGLE,
};

pub use calculator::{validate_location, PrayerTimeCalculator, DEFAULT_TIMES};

pub use config::CalculatorConfig;

pub use error::{PrayerTimeError, Result};

pub use format::{
    float_to_floating, float_to_time12, float_to_time12_no_suffix, float_to_time24, format_time,
    format_times, INVALID_TIME,
};

pub use types::{
    CalculationMethod, CustomOverrides, HighLatitudeAdjustment, JuristicMethod, MethodParams,
    Prayer, PrayerTimes, SunPosition, TimeFormat, Twilight, TIME_NAMES,
};
