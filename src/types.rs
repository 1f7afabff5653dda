use std::fmt;
use std::ops::Index;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

pub const TIME_NAMES: [&str; 7] = ["Fajr", "Sunrise", "Dhuhr", "Asr", "Sunset", "Maghrib", "Isha"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub declination: f64,
    pub equation_of_time: f64,
}

/// How Maghrib or Isha is derived: a sun depression angle, or a fixed delay after
/// the preceding event (Sunset for Maghrib, Maghrib for Isha).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Twilight {
    Angle(f64),
    Minutes(f64),
}

impl Twilight {
    pub fn angle_or(self, fallback: f64) -> f64 {
        match self {
            Twilight::Angle(a) => a,
            Twilight::Minutes(_) => fallback,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodParams {
    pub fajr_angle: f64,
    pub maghrib: Twilight,
    pub isha: Twilight,
}

impl MethodParams {
    pub const fn new(fajr_angle: f64, maghrib: Twilight, isha: Twilight) -> Self {
        Self {
            fajr_angle,
            maghrib,
            isha,
        }
    }

    pub fn with_overrides(self, overrides: &CustomOverrides) -> Self {
        Self {
            fajr_angle: overrides.fajr_angle.unwrap_or(self.fajr_angle),
            maghrib: overrides.maghrib.unwrap_or(self.maghrib),
            isha: overrides.isha.unwrap_or(self.isha),
        }
    }

    /// `[fajrAngle, maghribIsMinutes, maghribValue, ishaIsMinutes, ishaValue]`
    pub fn to_legacy_tuple(self) -> [f64; 5] {
        let split = |t: Twilight| match t {
            Twilight::Angle(a) => (0.0, a),
            Twilight::Minutes(m) => (1.0, m),
        };
        let (maghrib_flag, maghrib_value) = split(self.maghrib);
        let (isha_flag, isha_value) = split(self.isha);
        [self.fajr_angle, maghrib_flag, maghrib_value, isha_flag, isha_value]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomOverrides {
    pub fajr_angle: Option<f64>,
    pub maghrib: Option<Twilight>,
    pub isha: Option<Twilight>,
}

impl CustomOverrides {
    pub fn is_empty(&self) -> bool {
        self.fajr_angle.is_none() && self.maghrib.is_none() && self.isha.is_none()
    }

    pub fn merge(self, newer: CustomOverrides) -> Self {
        Self {
            fajr_angle: newer.fajr_angle.or(self.fajr_angle),
            maghrib: newer.maghrib.or(self.maghrib),
            isha: newer.isha.or(self.isha),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMethod {
    /// Ithna Ashari
    Jafari,
    /// University of Islamic Sciences, Karachi
    Karachi,
    /// Islamic Society of North America
    Isna,
    /// Muslim World League
    Mwl,
    /// Umm al-Qura, Makkah
    Makkah,
    /// Egyptian General Authority of Survey
    Egypt,
    /// Institute of Geophysics, University of Tehran
    Tehran,
    Custom,
}

impl CalculationMethod {
    pub const ALL: [CalculationMethod; 8] = [
        CalculationMethod::Jafari,
        CalculationMethod::Karachi,
        CalculationMethod::Isna,
        CalculationMethod::Mwl,
        CalculationMethod::Makkah,
        CalculationMethod::Egypt,
        CalculationMethod::Tehran,
        CalculationMethod::Custom,
    ];

    /// Fixed parameters of the method. For `Custom` this is the baseline that
    /// overrides are layered on when no other base is chosen.
    pub const fn params(self) -> MethodParams {
        use Twilight::{Angle, Minutes};
        match self {
            CalculationMethod::Jafari => MethodParams::new(16.0, Angle(4.0), Angle(14.0)),
            CalculationMethod::Karachi => MethodParams::new(18.0, Minutes(0.0), Angle(18.0)),
            CalculationMethod::Isna => MethodParams::new(15.0, Minutes(0.0), Angle(15.0)),
            CalculationMethod::Mwl => MethodParams::new(18.0, Minutes(0.0), Angle(17.0)),
            CalculationMethod::Makkah => MethodParams::new(18.5, Minutes(0.0), Minutes(90.0)),
            CalculationMethod::Egypt => MethodParams::new(19.5, Minutes(0.0), Angle(17.5)),
            CalculationMethod::Tehran => MethodParams::new(17.7, Angle(4.5), Angle(14.0)),
            CalculationMethod::Custom => MethodParams::new(18.0, Minutes(0.0), Angle(17.0)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JuristicMethod {
    #[default]
    Shafii,
    Hanafi,
}

impl JuristicMethod {
    pub fn shadow_factor(self) -> f64 {
        match self {
            JuristicMethod::Shafii => 1.0,
            JuristicMethod::Hanafi => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighLatitudeAdjustment {
    #[default]
    None,
    MidNight,
    OneSeventh,
    AngleBased,
}

impl HighLatitudeAdjustment {
    pub fn night_portion(self, angle: f64) -> f64 {
        match self {
            HighLatitudeAdjustment::None => 0.0,
            HighLatitudeAdjustment::MidNight => 1.0 / 2.0,
            HighLatitudeAdjustment::OneSeventh => 1.0 / 7.0,
            HighLatitudeAdjustment::AngleBased => angle / 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    #[default]
    Time24,
    Time12,
    Time12NoSuffix,
    Floating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 7] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Sunset,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        TIME_NAMES[self.index()]
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One day's times in hours, in the fixed [`Prayer`] order. `None` marks a time
/// with no solution at the requested date and location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimes {
    times: [Option<f64>; 7],
}

impl PrayerTimes {
    pub fn new(times: [Option<f64>; 7]) -> Self {
        Self { times }
    }

    pub fn get(&self, prayer: Prayer) -> Option<f64> {
        self.times[prayer.index()]
    }

    pub fn set(&mut self, prayer: Prayer, value: Option<f64>) {
        self.times[prayer.index()] = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prayer, Option<f64>)> + '_ {
        Prayer::ALL.iter().map(move |&p| (p, self.get(p)))
    }

    pub fn as_array(&self) -> [Option<f64>; 7] {
        self.times
    }

    pub fn naive_time(&self, prayer: Prayer) -> Option<NaiveTime> {
        let hours = self.get(prayer)?;
        let secs = (crate::angles::fix_hour(hours) * 3600.0).round() as u32 % 86_400;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, 0)
    }
}

impl Index<Prayer> for PrayerTimes {
    type Output = Option<f64>;

    fn index(&self, prayer: Prayer) -> &Self::Output {
        &self.times[prayer.index()]
    }
}
