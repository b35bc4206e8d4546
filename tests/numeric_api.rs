//! Tests for the numeric (non-chrono) rise/set API.

use solar_ephemeris::error::check_date;
use solar_ephemeris::{AstronomicalEvent, Error, GeoCoordinate, HoursUtc, riseset};

#[test]
fn test_rise_set_basic() {
    // San Francisco, June 21, 2023
    let san_francisco = GeoCoordinate::new(37.7749, -122.4194).unwrap();
    let times =
        riseset::rise_set(2023, 6, 21, &san_francisco, AstronomicalEvent::SUNRISE_SUNSET).unwrap();

    // Sunrise around 12:48 UTC (05:48 PDT)
    assert!((times.rise().hours() - 12.80).abs() < 0.01);
    // Transit around 20:11 UTC (13:11 PDT)
    assert!((times.transit().hours() - 20.19).abs() < 0.01);
    // Sunset around 03:35 UTC next day, reported past 24 on the calculation date
    assert!((times.set().hours() - 27.58).abs() < 0.01);
    assert_eq!(times.set().day_and_hours().0, 1);
}

#[test]
fn test_rise_set_for_all_events() {
    let san_francisco = GeoCoordinate::new(37.7749, -122.4194).unwrap();
    let mut previous: Option<(f64, f64)> = None;

    for event in AstronomicalEvent::ALL {
        let times = riseset::rise_set(2023, 6, 21, &san_francisco, event).unwrap();
        assert!((times.transit().hours() - 20.191_895).abs() < 1e-5);

        // lower altitudes widen the interval on both sides
        if let Some((rise, set)) = previous {
            assert!(times.rise().hours() < rise);
            assert!(times.set().hours() > set);
        }
        previous = Some((times.rise().hours(), times.set().hours()));
    }
}

#[test]
fn test_custom_event_altitude() {
    let san_francisco = GeoCoordinate::new(37.7749, -122.4194).unwrap();
    let event = AstronomicalEvent::custom(-1.0, false).unwrap();
    let times = riseset::rise_set(2023, 6, 21, &san_francisco, event).unwrap();

    assert!((times.rise().hours() - 12.785_184).abs() < 1e-5);
    assert!((times.set().hours() - 27.598_606).abs() < 1e-5);
}

#[test]
fn test_equator_at_equinox() {
    let null_island = GeoCoordinate::new(0.0, 0.0).unwrap();
    let times =
        riseset::rise_set(2024, 3, 20, &null_island, AstronomicalEvent::SUNRISE_SUNSET).unwrap();

    assert!((times.rise().hours() - 6.065).abs() < 0.001);
    assert!((times.transit().hours() - 12.122).abs() < 0.001);
    assert!((times.set().hours() - 18.179).abs() < 0.001);
    assert_eq!(
        times.range(),
        times.rise().hours()..=times.set().hours()
    );
}

#[test]
fn test_solar_transit_matches_rise_set() {
    let san_francisco = GeoCoordinate::new(37.7749, -122.4194).unwrap();
    let transit = riseset::solar_transit(2023, 6, 21, &san_francisco);
    let times =
        riseset::rise_set(2023, 6, 21, &san_francisco, AstronomicalEvent::SUNRISE_SUNSET).unwrap();
    assert_eq!(transit, *times.transit());

    // transit is defined even when the Sun never rises
    let tromso = GeoCoordinate::new(69.65, 18.96).unwrap();
    assert_eq!(
        riseset::rise_set(2023, 12, 21, &tromso, AstronomicalEvent::SUNRISE_SUNSET),
        Err(Error::SunAlwaysBelowHorizon)
    );
    let noon = riseset::solar_transit(2023, 12, 21, &tromso);
    assert!((10.5..11.5).contains(&noon.hours()));
}

#[test]
fn test_multiple_events_match_single_calls() {
    let tromso = GeoCoordinate::new(69.65, 18.96).unwrap();

    for (event, result) in
        riseset::rise_set_multiple(2024, 5, 10, &tromso, AstronomicalEvent::ALL)
    {
        assert_eq!(result, riseset::rise_set(2024, 5, 10, &tromso, event));
    }
    for (event, hours) in
        riseset::diurnal_arc_hours_multiple(2024, 5, 10, &tromso, AstronomicalEvent::ALL)
    {
        assert_eq!(hours, riseset::diurnal_arc_hours(2024, 5, 10, &tromso, event));
    }
}

#[test]
fn test_hours_utc_day_and_hours() {
    let (day, hours) = HoursUtc::from_hours(12.5).day_and_hours();
    assert_eq!(day, 0);
    assert!((hours - 12.5).abs() < 1e-10);

    let (day, hours) = HoursUtc::from_hours(25.5).day_and_hours();
    assert_eq!(day, 1);
    assert!((hours - 1.5).abs() < 1e-10);

    let (day, hours) = HoursUtc::from_hours(-0.5).day_and_hours();
    assert_eq!(day, -1);
    assert!((hours - 23.5).abs() < 1e-10);

    let (day, hours) = HoursUtc::from_hours(-50.5).day_and_hours();
    assert_eq!(day, -3);
    assert!((hours - 21.5).abs() < 1e-10);
}

#[test]
fn test_invalid_coordinates() {
    assert_eq!(
        GeoCoordinate::new(91.0, 0.0),
        Err(Error::InvalidLatitude { value: 91.0 })
    );
    assert_eq!(
        GeoCoordinate::new(0.0, -180.5),
        Err(Error::InvalidLongitude { value: -180.5 })
    );
    assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
    assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
    assert!(AstronomicalEvent::custom(95.0, false).is_err());
}

#[test]
fn test_date_validation() {
    assert!(check_date(1801, 1, 1).is_ok());
    assert!(check_date(2099, 12, 31).is_ok());
    assert!(check_date(2000, 2, 29).is_ok());
    assert!(check_date(1900, 2, 29).is_err());
    assert!(check_date(1800, 12, 31).is_err());
    assert!(check_date(2100, 1, 1).is_err());
    assert!(check_date(2024, 13, 1).is_err());
    assert!(check_date(2024, 4, 31).is_err());
    assert!(check_date(2024, 1, 0).is_err());
}
