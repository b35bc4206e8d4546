//! Example demonstrating sunrise/sunset calculation without the chrono library.
//!
//! The numeric API takes plain year/month/day values and returns fractional UTC hours.

use solar_ephemeris::{AstronomicalEvent, Error, GeoCoordinate, riseset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // San Francisco on June 21, 2023
    let san_francisco = GeoCoordinate::new(37.7749, -122.4194)?;
    let times = riseset::rise_set(2023, 6, 21, &san_francisco, AstronomicalEvent::SUNRISE_SUNSET)?;

    println!("San Francisco, June 21, 2023 (UTC):");
    println!("  Sunrise:  {:.4} hours", times.rise().hours());
    println!("  Transit:  {:.4} hours", times.transit().hours());
    println!("  Sunset:   {:.4} hours", times.set().hours());
    println!();

    // Sunset is after midnight UTC, so it lands on the next day
    let (day_offset, hours) = times.set().day_and_hours();
    println!("Sunset breakdown:");
    println!("  Day offset: {day_offset}");
    println!("  Hours in day: {hours:.2}");

    // Polar results are errors, not sentinel times
    println!("\nTromsø, December 21, 2023:");
    let tromso = GeoCoordinate::new(69.65, 18.96)?;
    match riseset::rise_set(2023, 12, 21, &tromso, AstronomicalEvent::SUNRISE_SUNSET) {
        Ok(times) => println!("  Sunrise {:.2} h, sunset {:.2} h", times.rise().hours(), times.set().hours()),
        Err(Error::SunAlwaysBelowHorizon) => {
            let noon = riseset::solar_transit(2023, 12, 21, &tromso);
            println!("  Polar night - sun never rises (noon at {:.2} h UTC)", noon.hours());
        }
        Err(e) => return Err(e.into()),
    }

    // Custom target altitude, without the solar radius correction
    println!("\nWith custom target altitude (-1.0°):");
    let event = AstronomicalEvent::custom(-1.0, false)?;
    let custom = riseset::rise_set(2023, 6, 21, &san_francisco, event)?;
    println!("  Rise: {:.4} hours", custom.rise().hours());
    println!("  Set:  {:.4} hours", custom.set().hours());

    Ok(())
}
