//! Basic sunrise/sunset calculation example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solar_ephemeris::{AstronomicalEvent, GeoCoordinate, riseset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: a date carrying a fixed UTC offset
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: the same instant in UTC
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap(); // 19:00 UTC = 12:00 PDT
    let san_francisco = GeoCoordinate::new(37.7749, -122.4194)?;

    let times_fixed =
        riseset::rise_set_for_date(datetime_fixed, &san_francisco, AstronomicalEvent::SUNRISE_SUNSET)?;
    let times_utc =
        riseset::rise_set_for_date(datetime_utc, &san_francisco, AstronomicalEvent::SUNRISE_SUNSET)?;

    println!("Sunrise and sunset for San Francisco on June 21, 2023:");
    println!("Using FixedOffset timezone:");
    println!("  Sunrise:    {}", times_fixed.rise());
    println!("  Solar noon: {}", times_fixed.transit());
    println!("  Sunset:     {}", times_fixed.set());

    println!("\nUsing UTC timezone (same date):");
    println!("  Sunrise:    {}", times_utc.rise());
    println!("  Solar noon: {}", times_utc.transit());
    println!("  Sunset:     {}", times_utc.set());

    println!(
        "\nBoth calculations produce identical instants: {}",
        times_fixed.rise() == times_utc.rise() && times_fixed.set() == times_utc.set()
    );

    let daylight = riseset::diurnal_arc_hours_for_date(
        &datetime_utc,
        &san_francisco,
        AstronomicalEvent::SUNRISE_SUNSET,
    );
    println!("  Daylight: {daylight:.2} hours");

    Ok(())
}
