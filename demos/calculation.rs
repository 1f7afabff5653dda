use chrono::TimeZone;
use chrono_tz::Asia::Riyadh;
use tracing_subscriber::EnvFilter;

use prayer_times::calculator::PrayerTimeCalculator;
use prayer_times::types::{
    CalculationMethod, HighLatitudeAdjustment, JuristicMethod, Prayer, TimeFormat,
};

fn main() -> prayer_times::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let latitude = 21.4225;
    let longitude = 39.8262;

    let dt = Riyadh.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();

    let calc = PrayerTimeCalculator::new(
        CalculationMethod::Mwl,
        JuristicMethod::Shafii,
        TimeFormat::Time24,
    );
    let times = calc.compute_for_datetime(&dt, latitude, longitude)?;

    println!("=== Prayer Time Calculation Example ===");
    println!("Location: Mecca ({:.4}°N, {:.4}°E)", latitude, longitude);
    println!("Date: {}", dt.date_naive());
    println!("Method: {:?}, Asr: {:?}", calc.method(), calc.juristic());
    println!();
    for (prayer, time) in Prayer::ALL.iter().zip(&times) {
        println!("{:<8} {}", prayer, time);
    }
    println!();

    let mut north = PrayerTimeCalculator::new(
        CalculationMethod::Mwl,
        JuristicMethod::Shafii,
        TimeFormat::Time12,
    );
    println!("--- Rovaniemi (66.5°N), 2024-06-01 ---");
    for policy in [
        HighLatitudeAdjustment::None,
        HighLatitudeAdjustment::OneSeventh,
        HighLatitudeAdjustment::AngleBased,
    ] {
        north.set_high_lat_adjustment(policy);
        let times = north.compute_prayer_times(2024, 6, 1, 66.5, 25.0, 3.0)?;
        println!("{:<11} Fajr {:<9} Isha {}", format!("{:?}", policy), times[0], times[6]);
    }
    Ok(())
}
