use crate::angles::fix_hour;
use crate::types::{PrayerTimes, TimeFormat};

/// Rendered in place of a time that has no solution.
pub const INVALID_TIME: &str = "----";

// Negative values are the undefined marker; NaN is treated the same way.
fn is_invalid(time: f64) -> bool {
    !(time >= 0.0) || time.is_infinite()
}

/// Rounds to the nearest minute and splits into (hours, minutes) of a 24h day.
fn split_minutes(time: f64) -> (u32, u32) {
    let time = fix_hour(time + 0.5 / 60.0);
    let hours = time.floor();
    let minutes = ((time - hours) * 60.0).floor();
    (hours as u32, minutes as u32)
}

pub fn float_to_time24(time: f64) -> String {
    if is_invalid(time) {
        return INVALID_TIME.to_string();
    }
    let (hours, minutes) = split_minutes(time);
    format!("{:02}:{:02}", hours, minutes)
}

pub fn float_to_time12(time: f64, no_suffix: bool) -> String {
    if is_invalid(time) {
        return INVALID_TIME.to_string();
    }
    let (hours, minutes) = split_minutes(time);
    let suffix = if hours >= 12 { " pm" } else { " am" };
    let hours = (hours + 11) % 12 + 1;
    if no_suffix {
        format!("{}:{:02}", hours, minutes)
    } else {
        format!("{}:{:02}{}", hours, minutes, suffix)
    }
}

pub fn float_to_time12_no_suffix(time: f64) -> String {
    float_to_time12(time, true)
}

pub fn float_to_floating(time: f64) -> String {
    if is_invalid(time) {
        return INVALID_TIME.to_string();
    }
    time.to_string()
}

pub fn format_time(time: Option<f64>, format: TimeFormat) -> String {
    let Some(time) = time else {
        return INVALID_TIME.to_string();
    };
    match format {
        TimeFormat::Time24 => float_to_time24(time),
        TimeFormat::Time12 => float_to_time12(time, false),
        TimeFormat::Time12NoSuffix => float_to_time12_no_suffix(time),
        TimeFormat::Floating => float_to_floating(time),
    }
}

pub fn format_times(times: &PrayerTimes, format: TimeFormat) -> [String; 7] {
    times.as_array().map(|t| format_time(t, format))
}
