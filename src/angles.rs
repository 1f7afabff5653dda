use crate::types::SunPosition;

pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const J2000: f64 = 2451545.0;
/// Apparent solar radius plus standard atmospheric refraction at the horizon.
pub const SUNRISE_ANGLE: f64 = 0.833;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn fix_angle(angle: f64) -> f64 {
    wrap(angle, 360.0)
}

pub fn fix_hour(hour: f64) -> f64 {
    wrap(hour, 24.0)
}

// rem_euclid rounds tiny negatives up to the modulus itself
fn wrap(value: f64, modulus: f64) -> f64 {
    let r = value.rem_euclid(modulus);
    if r >= modulus {
        0.0
    } else {
        r
    }
}

pub fn dsin(d: f64) -> f64 {
    deg_to_rad(d).sin()
}

pub fn dcos(d: f64) -> f64 {
    deg_to_rad(d).cos()
}

pub fn dtan(d: f64) -> f64 {
    deg_to_rad(d).tan()
}

pub fn darcsin(x: f64) -> f64 {
    rad_to_deg(x.clamp(-1.0, 1.0).asin())
}

pub fn darccos(x: f64) -> f64 {
    rad_to_deg(x.clamp(-1.0, 1.0).acos())
}

pub fn darctan2(y: f64, x: f64) -> f64 {
    rad_to_deg(y.atan2(x))
}

pub fn darccot(x: f64) -> f64 {
    rad_to_deg((1.0 / x).atan())
}

/// Julian Date at 00:00 UT of a Gregorian calendar date (month is 1-based).
pub fn julian_date(year: i32, month: u32, day: u32) -> f64 {
    let (mut y, mut m) = (year as f64, month as f64);
    if month <= 2 {
        y -= 1.0;
        m += 12.0;
    }
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64 + b - 1524.5
}

/// Low-precision solar coordinates, good to about a minute of time for 1950-2050.
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000;
    let g = fix_angle(357.529 + 0.98560028 * d);
    let q = fix_angle(280.459 + 0.98564736 * d);
    let l = fix_angle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));
    let e = 23.439 - 0.00000036 * d;

    let declination = darcsin(dsin(e) * dsin(l));
    let ra = fix_hour(darctan2(dcos(e) * dsin(l), dcos(l)) / DEGREES_PER_HOUR);

    SunPosition {
        declination,
        equation_of_time: q / DEGREES_PER_HOUR - ra,
    }
}

pub fn time_difference(from: f64, to: f64) -> f64 {
    fix_hour(to - from)
}

/// Hours between solar noon and the moment the sun sits `angle` degrees below the
/// horizon (angles above 90 mirror the morning side). `None` when the sun never
/// reaches that depression on this day at this latitude.
pub fn hour_angle_for_altitude(angle: f64, declination: f64, latitude: f64) -> Option<f64> {
    let cos_h = (-dsin(angle) - dsin(declination) * dsin(latitude))
        / (dcos(declination) * dcos(latitude));
    if !(cos_h.abs() <= 1.0) {
        return None;
    }
    Some(darccos(cos_h) / DEGREES_PER_HOUR)
}

/// Depression angle at which an object's shadow reaches `shadow_factor` times its
/// length plus the noon shadow.
pub fn asr_angle(shadow_factor: f64, declination: f64, latitude: f64) -> f64 {
    -darccot(shadow_factor + dtan((latitude - declination).abs()))
}
