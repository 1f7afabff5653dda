use std::num::NonZeroU32;

use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone};
use tracing::{debug, trace, warn};

use crate::angles::{
    asr_angle, fix_hour, hour_angle_for_altitude, julian_date, sun_position, time_difference,
    DEGREES_PER_HOUR, SUNRISE_ANGLE,
};
use crate::config::CalculatorConfig;
use crate::error::{PrayerTimeError, Result};
use crate::format::format_times;
use crate::types::{
    CalculationMethod, CustomOverrides, HighLatitudeAdjustment, JuristicMethod, MethodParams,
    Prayer, PrayerTimes, TimeFormat, Twilight,
};

pub const DEFAULT_TIMES: [f64; 7] = [5.0, 6.0, 12.0, 13.0, 18.0, 18.0, 18.0];

// depressions assumed by the high-latitude rules for minute-based Isha/Maghrib
const FALLBACK_ISHA_ANGLE: f64 = 18.0;
const FALLBACK_MAGHRIB_ANGLE: f64 = 4.0;

pub fn validate_location(latitude: f64, longitude: f64, time_zone: f64) -> Result<()> {
    if !latitude.is_finite() || latitude.abs() > 90.0 {
        return Err(PrayerTimeError::InvalidLatitude(latitude));
    }
    if !longitude.is_finite() || longitude.abs() > 180.0 {
        return Err(PrayerTimeError::InvalidLongitude(longitude));
    }
    if !time_zone.is_finite() || !(-12.0..=14.0).contains(&time_zone) {
        return Err(PrayerTimeError::InvalidTimeZone(time_zone));
    }
    Ok(())
}

/// Sun geometry for one date at one latitude. `t` arguments are fractions of a day
/// added to the Julian date.
struct SolarDay {
    jd: f64,
    latitude: f64,
}

impl SolarDay {
    fn mid_day(&self, t: f64) -> f64 {
        let eqt = sun_position(self.jd + t).equation_of_time;
        fix_hour(12.0 - eqt)
    }

    fn time_for_angle(&self, angle: f64, t: f64) -> Option<f64> {
        let decl = sun_position(self.jd + t).declination;
        let v = hour_angle_for_altitude(angle, decl, self.latitude)?;
        let noon = self.mid_day(t);
        Some(if angle > 90.0 { noon - v } else { noon + v })
    }

    fn asr(&self, shadow_factor: f64, t: f64) -> Option<f64> {
        let decl = sun_position(self.jd + t).declination;
        self.time_for_angle(asr_angle(shadow_factor, decl, self.latitude), t)
    }
}

#[derive(Debug, Clone)]
pub struct PrayerTimeCalculator {
    method: CalculationMethod,
    juristic: JuristicMethod,
    time_format: TimeFormat,
    high_latitude: HighLatitudeAdjustment,
    dhuhr_minutes: i32,
    iterations: NonZeroU32,
    switch_to_custom: bool,
    custom_base: CalculationMethod,
    custom_overrides: CustomOverrides,
}

impl PrayerTimeCalculator {
    pub fn new(
        method: CalculationMethod,
        juristic: JuristicMethod,
        time_format: TimeFormat,
    ) -> Self {
        Self::from_config(&CalculatorConfig {
            method,
            juristic,
            time_format,
            ..CalculatorConfig::default()
        })
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            method: config.method,
            juristic: config.juristic,
            time_format: config.time_format,
            high_latitude: config.high_latitude,
            dhuhr_minutes: config.dhuhr_minutes,
            iterations: config.iterations,
            switch_to_custom: config.switch_to_custom,
            custom_base: config.custom_base,
            custom_overrides: config.custom,
        }
    }

    pub fn config(&self) -> CalculatorConfig {
        CalculatorConfig {
            method: self.method,
            juristic: self.juristic,
            time_format: self.time_format,
            high_latitude: self.high_latitude,
            dhuhr_minutes: self.dhuhr_minutes,
            iterations: self.iterations,
            switch_to_custom: self.switch_to_custom,
            custom_base: self.custom_base,
            custom: self.custom_overrides,
        }
    }

    pub fn method(&self) -> CalculationMethod {
        self.method
    }

    pub fn juristic(&self) -> JuristicMethod {
        self.juristic
    }

    pub fn time_format(&self) -> TimeFormat {
        self.time_format
    }

    pub fn high_lat_adjustment(&self) -> HighLatitudeAdjustment {
        self.high_latitude
    }

    pub fn dhuhr_minutes(&self) -> i32 {
        self.dhuhr_minutes
    }

    pub fn custom_params(&self) -> MethodParams {
        self.custom_base.params().with_overrides(&self.custom_overrides)
    }

    pub fn active_params(&self) -> MethodParams {
        match self.method {
            CalculationMethod::Custom => self.custom_params(),
            preset => preset.params(),
        }
    }

    pub fn set_fajr_angle(&mut self, angle: f64) {
        self.override_custom(CustomOverrides {
            fajr_angle: Some(angle),
            ..CustomOverrides::default()
        });
    }

    pub fn set_maghrib_angle(&mut self, angle: f64) {
        self.override_custom(CustomOverrides {
            maghrib: Some(Twilight::Angle(angle)),
            ..CustomOverrides::default()
        });
    }

    pub fn set_isha_angle(&mut self, angle: f64) {
        self.override_custom(CustomOverrides {
            isha: Some(Twilight::Angle(angle)),
            ..CustomOverrides::default()
        });
    }

    pub fn set_maghrib_minutes(&mut self, minutes: f64) {
        self.override_custom(CustomOverrides {
            maghrib: Some(Twilight::Minutes(minutes)),
            ..CustomOverrides::default()
        });
    }

    pub fn set_isha_minutes(&mut self, minutes: f64) {
        self.override_custom(CustomOverrides {
            isha: Some(Twilight::Minutes(minutes)),
            ..CustomOverrides::default()
        });
    }

    pub fn set_custom_params(&mut self, base: CalculationMethod, overrides: CustomOverrides) {
        self.custom_base = base;
        self.custom_overrides = overrides;
        if self.switch_to_custom {
            self.method = CalculationMethod::Custom;
        }
    }

    pub fn set_dhuhr_minutes(&mut self, minutes: i32) {
        self.dhuhr_minutes = minutes;
    }

    pub fn set_high_lat_adjustment(&mut self, policy: HighLatitudeAdjustment) {
        self.high_latitude = policy;
    }

    pub fn set_iterations(&mut self, iterations: NonZeroU32) {
        self.iterations = iterations;
    }

    /// Off by default: the angle and minute setters only rewrite the `Custom`
    /// parameters and a preset method stays active. When on, they also switch
    /// the active method to `Custom`.
    pub fn set_switch_to_custom(&mut self, enabled: bool) {
        self.switch_to_custom = enabled;
    }

    // Each override is taken relative to the active method: a preset re-bases
    // Custom and drops earlier overrides, an active Custom accumulates them.
    fn override_custom(&mut self, overrides: CustomOverrides) {
        match self.method {
            CalculationMethod::Custom => {
                self.custom_overrides = self.custom_overrides.merge(overrides);
            }
            preset => {
                self.custom_base = preset;
                self.custom_overrides = overrides;
            }
        }
        if self.switch_to_custom {
            self.method = CalculationMethod::Custom;
        }
        debug!(
            method = ?self.method,
            custom = ?self.custom_params(),
            "custom parameters updated"
        );
    }

    pub fn compute_prayer_times(
        &self,
        year: i32,
        month: u32,
        day: u32,
        latitude: f64,
        longitude: f64,
        time_zone: f64,
    ) -> Result<[String; 7]> {
        let times = self.compute_times(year, month, day, latitude, longitude, time_zone)?;
        Ok(format_times(&times, self.time_format))
    }

    pub fn compute_for_date(
        &self,
        date: NaiveDate,
        latitude: f64,
        longitude: f64,
        time_zone: f64,
    ) -> Result<[String; 7]> {
        self.compute_prayer_times(
            date.year(),
            date.month(),
            date.day(),
            latitude,
            longitude,
            time_zone,
        )
    }

    /// Uses the date and UTC offset of `dt` as given; resolving the right offset
    /// (daylight saving) is up to whoever built `dt`.
    pub fn compute_for_datetime<Tz: TimeZone>(
        &self,
        dt: &DateTime<Tz>,
        latitude: f64,
        longitude: f64,
    ) -> Result<[String; 7]> {
        let offset_hours = dt.offset().fix().local_minus_utc() as f64 / 3600.0;
        self.compute_for_date(dt.date_naive(), latitude, longitude, offset_hours)
    }

    /// Times in hours of the caller's civil day, range-reduced to [0, 24).
    pub fn compute_times(
        &self,
        year: i32,
        month: u32,
        day: u32,
        latitude: f64,
        longitude: f64,
        time_zone: f64,
    ) -> Result<PrayerTimes> {
        validate_location(latitude, longitude, time_zone)?;
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(PrayerTimeError::InvalidDate { year, month, day });
        }

        let params = self.active_params();
        debug!(
            year,
            month,
            day,
            latitude,
            longitude,
            time_zone,
            method = ?self.method,
            juristic = ?self.juristic,
            "computing prayer times"
        );

        let solar = SolarDay {
            jd: julian_date(year, month, day) - longitude / (DEGREES_PER_HOUR * 24.0),
            latitude,
        };

        let mut estimate = DEFAULT_TIMES;
        let mut times = PrayerTimes::new([None; 7]);
        for i in 0..self.iterations.get() {
            times = self.solve(&solar, &params, estimate);
            for (slot, value) in estimate.iter_mut().zip(times.as_array()) {
                if let Some(v) = value {
                    *slot = v;
                }
            }
            trace!(iteration = i, ?times, "raw times");
        }

        self.adjust_times(&mut times, &params, longitude, time_zone);
        if self.high_latitude != HighLatitudeAdjustment::None {
            self.adjust_high_lat_times(&mut times, &params);
        }

        for prayer in Prayer::ALL {
            match times.get(prayer) {
                Some(v) => times.set(prayer, Some(fix_hour(v))),
                None => warn!(%prayer, latitude, year, month, day, "no solution for time"),
            }
        }
        Ok(times)
    }

    fn solve(&self, solar: &SolarDay, params: &MethodParams, estimate: [f64; 7]) -> PrayerTimes {
        let t = estimate.map(|h| h / 24.0);
        let twilight = |tw: Twilight, t: f64| match tw {
            Twilight::Angle(angle) => solar.time_for_angle(angle, t),
            Twilight::Minutes(_) => None,
        };

        PrayerTimes::new([
            solar.time_for_angle(180.0 - params.fajr_angle, t[0]),
            solar.time_for_angle(180.0 - SUNRISE_ANGLE, t[1]),
            Some(solar.mid_day(t[2])),
            solar.asr(self.juristic.shadow_factor(), t[3]),
            solar.time_for_angle(SUNRISE_ANGLE, t[4]),
            twilight(params.maghrib, t[5]),
            twilight(params.isha, t[6]),
        ])
    }

    fn adjust_times(
        &self,
        times: &mut PrayerTimes,
        params: &MethodParams,
        longitude: f64,
        time_zone: f64,
    ) {
        let shift = time_zone - longitude / DEGREES_PER_HOUR;
        for prayer in Prayer::ALL {
            times.set(prayer, times.get(prayer).map(|v| v + shift));
        }

        let dhuhr = times.get(Prayer::Dhuhr).map(|v| v + self.dhuhr_minutes as f64 / 60.0);
        times.set(Prayer::Dhuhr, dhuhr);

        if let Twilight::Minutes(m) = params.maghrib {
            let maghrib = times.get(Prayer::Sunset).map(|v| v + m / 60.0);
            times.set(Prayer::Maghrib, maghrib);
        }
        if let Twilight::Minutes(m) = params.isha {
            let isha = times.get(Prayer::Maghrib).map(|v| v + m / 60.0);
            times.set(Prayer::Isha, isha);
        }
    }

    fn adjust_high_lat_times(&self, times: &mut PrayerTimes, params: &MethodParams) {
        let (Some(sunrise), Some(sunset)) = (times.get(Prayer::Sunrise), times.get(Prayer::Sunset))
        else {
            debug!("sunrise or sunset undefined, high latitude adjustment skipped");
            return;
        };
        let night = time_difference(sunset, sunrise);
        let policy = self.high_latitude;

        let fajr_limit = policy.night_portion(params.fajr_angle) * night;
        bound_to_night(times, Prayer::Fajr, sunrise, fajr_limit, Side::BeforeAnchor);

        let isha_angle = params.isha.angle_or(FALLBACK_ISHA_ANGLE);
        let isha_limit = policy.night_portion(isha_angle) * night;
        bound_to_night(times, Prayer::Isha, sunset, isha_limit, Side::AfterAnchor);

        let maghrib_angle = params.maghrib.angle_or(FALLBACK_MAGHRIB_ANGLE);
        let maghrib_limit = policy.night_portion(maghrib_angle) * night;
        bound_to_night(times, Prayer::Maghrib, sunset, maghrib_limit, Side::AfterAnchor);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    BeforeAnchor,
    AfterAnchor,
}

/// Pulls `prayer` to `limit` hours from `anchor` when it lies further away than
/// that on the given side, or has no solution at all.
fn bound_to_night(times: &mut PrayerTimes, prayer: Prayer, anchor: f64, limit: f64, side: Side) {
    let exceeds = match (times.get(prayer), side) {
        (None, _) => true,
        (Some(t), Side::BeforeAnchor) => time_difference(t, anchor) > limit,
        (Some(t), Side::AfterAnchor) => time_difference(anchor, t) > limit,
    };
    if exceeds {
        let adjusted = match side {
            Side::BeforeAnchor => anchor - limit,
            Side::AfterAnchor => anchor + limit,
        };
        debug!(%prayer, from = ?times.get(prayer), to = adjusted, "clamped to night portion");
        times.set(prayer, Some(adjusted));
    }
}
