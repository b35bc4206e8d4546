//! Prints a week of sunrise, sunset and twilight times in local time.

use chrono::{Duration, TimeZone};
use chrono_tz::Europe::London;
use solar_ephemeris::{AstronomicalEvent, Error, GeoCoordinate, riseset};

fn label(event: AstronomicalEvent) -> &'static str {
    const NAMES: [&str; 4] = ["sunrise/sunset", "civil", "nautical", "astronomical"];
    AstronomicalEvent::ALL
        .iter()
        .position(|&standard| standard == event)
        .map_or("custom", |index| NAMES[index])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let holyhead = GeoCoordinate::new(53.248, -4.535)?;
    let start = London.with_ymd_and_hms(2024, 6, 17, 12, 0, 0).unwrap();

    println!("Holyhead, week of the June solstice (Europe/London)\n");
    for offset in 0..7 {
        let date = start + Duration::days(offset);
        println!("{}", date.format("%A %Y-%m-%d"));

        for event in AstronomicalEvent::ALL {
            match riseset::rise_set_for_date(date, &holyhead, event) {
                Ok(times) => println!(
                    "  {:<15} {} - {}  ({:.2} h)",
                    label(event),
                    times.rise().format("%H:%M"),
                    times.set().format("%H:%M"),
                    riseset::diurnal_arc_hours_for_date(&date, &holyhead, event)
                ),
                Err(Error::SunAlwaysAboveHorizon) => {
                    println!("  {:<15} lasts all night", label(event));
                }
                Err(Error::SunAlwaysBelowHorizon) => {
                    println!("  {:<15} never reached", label(event));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}
