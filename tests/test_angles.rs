use prayer_times::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Degree conversions ──

#[test]
fn test_deg_rad_roundtrip() {
    for deg in [-270.0, -90.0, 0.0, 0.833, 45.0, 180.0, 359.9] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-9);
    }
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-12);
}

#[test]
fn test_degree_trig() {
    assert_approx!(dsin(30.0), 0.5, 1e-12);
    assert_approx!(dcos(60.0), 0.5, 1e-12);
    assert_approx!(dtan(45.0), 1.0, 1e-12);
    assert_approx!(darcsin(0.5), 30.0, 1e-9);
    assert_approx!(darccos(0.5), 60.0, 1e-9);
    assert_approx!(darctan2(1.0, 1.0), 45.0, 1e-9);
    assert_approx!(darctan2(-1.0, -1.0), -135.0, 1e-9);
    assert_approx!(darccot(1.0), 45.0, 1e-9);
}

#[test]
fn test_inverse_trig_clamps_domain() {
    assert_approx!(darcsin(1.0000001), 90.0, 1e-9);
    assert_approx!(darcsin(-3.0), -90.0, 1e-9);
    assert_approx!(darccos(1.5), 0.0, 1e-9);
    assert_approx!(darccos(-1.5), 180.0, 1e-9);
    assert!(!darccos(2.0).is_nan());
}

// ── FixAngle / FixHour ──

#[test]
fn test_fix_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (-180.0, 180.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(fix_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_fix_angle_several_cycles() {
    assert_approx!(fix_angle(810.0), 90.0, 1e-9);
    assert_approx!(fix_angle(-450.0), 270.0, 1e-9);
    assert_approx!(fix_angle(3600.5), 0.5, 1e-9);
}

#[test]
fn test_fix_hour() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (12.5, 12.5),
        (24.0, 0.0),
        (25.25, 1.25),
        (-0.5, 23.5),
        (-25.0, 23.0),
        (49.0, 1.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(fix_hour(input), expected, 1e-9);
    }
}

#[test]
fn test_fix_hour_tiny_negative_stays_in_range() {
    let h = fix_hour(-1e-17);
    assert!((0.0..24.0).contains(&h), "{}", h);
}

#[test]
fn test_time_difference_wraps() {
    assert_approx!(time_difference(19.0, 5.0), 10.0, 1e-12);
    assert_approx!(time_difference(5.0, 19.0), 14.0, 1e-12);
    assert_approx!(time_difference(7.0, 7.0), 0.0, 1e-12);
}

// ── Julian date ──

#[test]
fn test_julian_date_known_values() {
    assert_approx!(julian_date(2000, 1, 1), 2451544.5, 1e-9);
    assert_approx!(julian_date(2024, 1, 1), 2460310.5, 1e-9);
    assert_approx!(julian_date(2024, 6, 21), 2460482.5, 1e-9);
    assert_approx!(julian_date(1582, 10, 15), 2299160.5, 1e-9);
}

#[test]
fn test_julian_date_across_leap_day() {
    let feb29 = julian_date(2024, 2, 29);
    assert_approx!(julian_date(2024, 3, 1) - feb29, 1.0, 1e-9);
    assert_approx!(feb29 - julian_date(2024, 2, 28), 1.0, 1e-9);
}

#[test]
fn test_julian_date_consecutive_days_in_year() {
    let mut prev = julian_date(2022, 12, 31);
    for month in 1..=12u32 {
        let jd = julian_date(2023, month, 1);
        assert!(jd > prev, "month {}", month);
        prev = jd;
    }
}

// ── Sun position ──

#[test]
fn test_declination_at_solstices() {
    let june = sun_position(julian_date(2024, 6, 20) + 0.5);
    assert_approx!(june.declination, 23.44, 0.05);
    let december = sun_position(julian_date(2024, 12, 21) + 0.5);
    assert_approx!(december.declination, -23.44, 0.05);
}

#[test]
fn test_declination_near_equinox() {
    let pos = sun_position(julian_date(2024, 3, 20) + 0.5);
    assert_approx!(pos.declination, 0.0, 0.5);
}

#[test]
fn test_equation_of_time_extremes() {
    // in hours; roughly -14 minutes mid-February, +16 minutes early November
    let feb = sun_position(julian_date(2024, 2, 11) + 0.5);
    assert_approx!(feb.equation_of_time * 60.0, -14.2, 0.5);
    let nov = sun_position(julian_date(2024, 11, 3) + 0.5);
    assert_approx!(nov.equation_of_time * 60.0, 16.4, 0.5);
}

#[test]
fn test_declination_bounded_over_year() {
    let start = julian_date(2025, 1, 1);
    for day in 0..366 {
        let d = sun_position(start + day as f64).declination;
        assert!(d.abs() <= 23.45, "day {}: {}", day, d);
    }
}

// ── Hour angle solver ──

#[test]
fn test_hour_angle_equator_equinox_sunset() {
    // geometric horizon at the equator with the sun on the equator: 6 hours
    let v = hour_angle_for_altitude(0.0, 0.0, 0.0).unwrap();
    assert_approx!(v, 6.0, 1e-9);
}

#[test]
fn test_hour_angle_refraction_lengthens_day() {
    let v = hour_angle_for_altitude(SUNRISE_ANGLE, 0.0, 0.0).unwrap();
    assert_approx!(v, 90.833 / 15.0, 1e-9);
}

#[test]
fn test_hour_angle_morning_mirror_matches_evening() {
    let evening = hour_angle_for_altitude(18.0, 10.0, 40.0).unwrap();
    let morning = hour_angle_for_altitude(180.0 - 18.0, 10.0, 40.0).unwrap();
    assert_approx!(evening, morning, 1e-9);
}

#[test]
fn test_hour_angle_undefined_in_polar_summer() {
    // the sun never sinks 18 degrees below the horizon at 66.5N in June
    assert!(hour_angle_for_altitude(18.0, 23.44, 66.5).is_none());
    assert!(hour_angle_for_altitude(SUNRISE_ANGLE, 23.44, 80.0).is_none());
}

#[test]
fn test_hour_angle_at_pole_is_undefined_not_nan() {
    assert!(hour_angle_for_altitude(SUNRISE_ANGLE, 10.0, 90.0).is_none());
}

#[test]
fn test_asr_angle_shadow_factors() {
    // sun overhead: Shafii Asr when the shadow equals the object, at 45 degrees altitude
    assert_approx!(asr_angle(1.0, 21.0, 21.0), -45.0, 1e-9);
    let shafii = asr_angle(1.0, 10.0, 40.0);
    let hanafi = asr_angle(2.0, 10.0, 40.0);
    assert!(hanafi > shafii, "hanafi sun is lower: {} vs {}", hanafi, shafii);
}
