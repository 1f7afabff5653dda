use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{
    CalculationMethod, CustomOverrides, HighLatitudeAdjustment, JuristicMethod, TimeFormat,
};

/// Everything a [`PrayerTimeCalculator`](crate::calculator::PrayerTimeCalculator)
/// needs besides the date and location. Missing TOML keys take the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub method: CalculationMethod,
    pub juristic: JuristicMethod,
    pub time_format: TimeFormat,
    pub high_latitude: HighLatitudeAdjustment,
    pub dhuhr_minutes: i32,
    pub iterations: NonZeroU32,
    /// When set, the angle/minute setters also make `Custom` the active method.
    pub switch_to_custom: bool,
    pub custom_base: CalculationMethod,
    pub custom: CustomOverrides,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            method: CalculationMethod::Mwl,
            juristic: JuristicMethod::Shafii,
            time_format: TimeFormat::Time24,
            high_latitude: HighLatitudeAdjustment::None,
            dhuhr_minutes: 0,
            iterations: NonZeroU32::MIN,
            switch_to_custom: false,
            custom_base: CalculationMethod::Mwl,
            custom: CustomOverrides::default(),
        }
    }
}

impl CalculatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
