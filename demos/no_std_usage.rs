//! Example demonstrating usage without std/chrono dependencies.
//!
//! Only the numeric API and the low-level building blocks are used here, the same calls
//! available to `no_std` builds with the `libm` feature.

use solar_ephemeris::{AstronomicalEvent, GeoCoordinate, riseset, sun, time};

fn main() {
    // Vienna: 48.21°N, 16.37°E on 2024-06-21
    let vienna = GeoCoordinate::new(48.21, 16.37).expect("Valid coordinates");

    println!("Solar ephemeris without std/chrono dependencies\n");

    // Day number relative to 2000 January 0.0 UT, shifted to local noon
    let d = time::epoch_offset(2024, 6, 21, vienna.longitude());
    println!("Epoch offset: {d:.4} days");

    let ecliptic = sun::ecliptic_position(d);
    let equatorial = sun::equatorial_position(d);
    println!("Ecliptic longitude: {:.4}°", ecliptic.longitude());
    println!("Distance: {:.6} AU", ecliptic.distance());
    println!("Right ascension: {:.4}°", equatorial.right_ascension());
    println!("Declination: {:.4}°", equatorial.declination());
    println!("Local sidereal time: {:.4}°\n", time::local_sidereal_time(d, vienna.longitude()));

    // Every standard event from a single solar position
    for (event, result) in riseset::rise_set_multiple(2024, 6, 21, &vienna, AstronomicalEvent::ALL) {
        match result {
            Ok(times) => println!(
                "  {:>8.3}°: {:6.3} h to {:6.3} h UTC",
                event.target_altitude(),
                times.rise().hours(),
                times.set().hours()
            ),
            Err(e) => println!("  {:>8.3}°: {e}", event.target_altitude()),
        }
    }

    // Coordinate sweep: hours of daylight from the equator to the Arctic Circle
    println!("\nDaylight on the solstice:");
    for latitude in [0.0, 20.0, 40.0, 60.0, 66.5] {
        let coordinate = GeoCoordinate::new(latitude, 0.0).expect("Valid coordinates");
        let hours = riseset::diurnal_arc_hours(
            2024,
            6,
            21,
            &coordinate,
            AstronomicalEvent::SUNRISE_SUNSET,
        );
        println!("  {latitude:>5.1}°N: {hours:5.2} h");
    }
}
