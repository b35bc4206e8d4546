//! Sunrise, sunset and twilight times.
//!
//! Two views of the same geometry are offered:
//! - [`diurnal_arc_hours`]: how long the Sun stays above an event's altitude. Never fails;
//!   polar days and nights saturate to 24 and 0 hours.
//! - [`rise_set`]: when the Sun crosses the altitude, as fractional UTC hours. Fails with
//!   [`Error::SunAlwaysAboveHorizon`] or [`Error::SunAlwaysBelowHorizon`] when it does not.
//!
//! Both evaluate the Sun's position once, at local mean noon of the given date. Results are
//! hours since 0h UT of that date and are not wrapped into [0, 24): a value
//! outside that range means the event falls on the neighbouring UTC date.
//! [`HoursUtc::day_and_hours`] splits such values, and the `chrono` helpers do the rollover
//! through date arithmetic.

#![allow(clippy::suboptimal_flops)]

use log::{debug, trace};

use crate::math::{acos_deg, cos_deg, normalize_signed_180, sin_deg, sqrt};
use crate::sun::{ecliptic_position, equatorial_position, obliquity_of_ecliptic};
use crate::time::{DEGREES_PER_HOUR, epoch_offset, local_sidereal_time};
use crate::{AstronomicalEvent, Error, GeoCoordinate, HoursUtc, Result, RiseSet};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Utc};

/// Where the Sun's daily circle lies relative to an altitude threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Crossing {
    /// Sun stays below the altitude (cos t ≥ 1).
    Never,
    /// Sun stays above the altitude (cos t ≤ -1).
    Always,
    /// Semi-diurnal arc in degrees of hour angle.
    HourAngle(f64),
}

/// Declination terms of the Sun at local noon, shared by all events on one date.
#[derive(Debug, Clone, Copy)]
struct NoonDeclination {
    sin_decl: f64,
    cos_decl: f64,
    distance: f64,
}

impl NoonDeclination {
    /// Declination from ecliptic longitude and obliquity, without forming RA.
    fn from_ecliptic(d: f64) -> Self {
        let obl = obliquity_of_ecliptic(d);
        let position = ecliptic_position(d);
        let sin_decl = sin_deg(obl) * sin_deg(position.longitude());
        Self {
            sin_decl,
            cos_decl: sqrt(1.0 - sin_decl * sin_decl),
            distance: position.distance(),
        }
    }

    fn crossing(&self, latitude: f64, event: AstronomicalEvent) -> Crossing {
        let altitude = event.effective_altitude(self.distance);
        let cos_t = (sin_deg(altitude) - sin_deg(latitude) * self.sin_decl)
            / (cos_deg(latitude) * self.cos_decl);

        if cos_t >= 1.0 {
            Crossing::Never
        } else if cos_t <= -1.0 {
            Crossing::Always
        } else {
            Crossing::HourAngle(acos_deg(cos_t))
        }
    }
}

/// Meridian transit and declination of the Sun for one date and location.
#[derive(Debug, Clone, Copy)]
struct Meridian {
    transit: f64,
    declination: NoonDeclination,
}

impl Meridian {
    fn at(d: f64, longitude: f64) -> Self {
        let sidereal_time = local_sidereal_time(d, longitude);
        let position = equatorial_position(d);
        let transit = 12.0
            - normalize_signed_180(sidereal_time - position.right_ascension()) / DEGREES_PER_HOUR;
        let dec = position.declination();

        Self {
            transit,
            declination: NoonDeclination {
                sin_decl: sin_deg(dec),
                cos_decl: cos_deg(dec),
                distance: position.distance(),
            },
        }
    }

    fn rise_set(&self, latitude: f64, event: AstronomicalEvent) -> Result<RiseSet<HoursUtc>> {
        match self.declination.crossing(latitude, event) {
            Crossing::Never => {
                debug!(
                    "sun stays below {}° at latitude {latitude}°",
                    event.target_altitude()
                );
                Err(Error::SunAlwaysBelowHorizon)
            }
            Crossing::Always => {
                debug!(
                    "sun stays above {}° at latitude {latitude}°",
                    event.target_altitude()
                );
                Err(Error::SunAlwaysAboveHorizon)
            }
            Crossing::HourAngle(hour_angle) => {
                let t = hour_angle / DEGREES_PER_HOUR;
                trace!(
                    "transit {:.6} h UTC, semi-arc {t:.6} h for {}°",
                    self.transit,
                    event.target_altitude()
                );
                Ok(RiseSet::new(
                    HoursUtc::from_hours(self.transit - t),
                    HoursUtc::from_hours(self.transit),
                    HoursUtc::from_hours(self.transit + t),
                ))
            }
        }
    }
}

fn arc_hours(crossing: Crossing) -> f64 {
    match crossing {
        Crossing::Never => 0.0,
        Crossing::Always => 24.0,
        Crossing::HourAngle(hour_angle) => (2.0 / DEGREES_PER_HOUR) * hour_angle,
    }
}

/// Hours the Sun spends above the event's altitude on the given date.
///
/// Returns a value in [0, 24]. When the Sun never reaches the altitude the result is 0.0;
/// when it never drops below, 24.0. Dates are only meaningful for years 1801-2099.
///
/// # Arguments
/// * `year` - Year (1801-2099)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `coordinate` - Observer location
/// * `event` - Altitude threshold, e.g. [`AstronomicalEvent::CIVIL_TWILIGHT`]
///
/// # Example
/// ```
/// use solar_ephemeris::{riseset, AstronomicalEvent, GeoCoordinate};
///
/// let holyhead = GeoCoordinate::new(53.248, -4.535).unwrap();
/// let daylight = riseset::diurnal_arc_hours(2024, 2, 16, &holyhead, AstronomicalEvent::SUNRISE_SUNSET);
/// assert!((daylight - 9.9197).abs() < 1e-3);
/// ```
#[must_use]
pub fn diurnal_arc_hours(
    year: i32,
    month: u32,
    day: u32,
    coordinate: &GeoCoordinate,
    event: AstronomicalEvent,
) -> f64 {
    let d = epoch_offset(year, month, day, coordinate.longitude());
    let crossing = NoonDeclination::from_ecliptic(d).crossing(coordinate.latitude(), event);
    if !matches!(crossing, Crossing::HourAngle(_)) {
        debug!("diurnal arc saturated ({crossing:?}) on {year}-{month:02}-{day:02}");
    }
    arc_hours(crossing)
}

/// Rise, transit and set of the Sun across the event's altitude, in fractional UTC hours.
///
/// The hours count from 0h UT of the given date and are not wrapped, so a rise before
/// midnight UTC comes out negative and a set after the next midnight exceeds 24.
///
/// # Arguments
/// * `year` - Year (1801-2099)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `coordinate` - Observer location
/// * `event` - Altitude threshold, e.g. [`AstronomicalEvent::SUNRISE_SUNSET`]
///
/// # Errors
/// Returns `SunAlwaysBelowHorizon` when the Sun never reaches the altitude and
/// `SunAlwaysAboveHorizon` when it never drops below it.
///
/// # Example
/// ```
/// use solar_ephemeris::{riseset, AstronomicalEvent, GeoCoordinate};
///
/// let holyhead = GeoCoordinate::new(53.248, -4.535).unwrap();
/// let times = riseset::rise_set(2024, 2, 16, &holyhead, AstronomicalEvent::SUNRISE_SUNSET).unwrap();
///
/// println!("Sunrise: {:.4} h UTC", times.rise().hours());
/// println!("Sunset:  {:.4} h UTC", times.set().hours());
/// assert!(times.range().contains(&12.0));
/// ```
pub fn rise_set(
    year: i32,
    month: u32,
    day: u32,
    coordinate: &GeoCoordinate,
    event: AstronomicalEvent,
) -> Result<RiseSet<HoursUtc>> {
    let d = epoch_offset(year, month, day, coordinate.longitude());
    Meridian::at(d, coordinate.longitude()).rise_set(coordinate.latitude(), event)
}

/// Time of the Sun's meridian transit (local solar noon) in fractional UTC hours.
///
/// Defined on every date, including polar days and nights.
#[must_use]
pub fn solar_transit(year: i32, month: u32, day: u32, coordinate: &GeoCoordinate) -> HoursUtc {
    let d = epoch_offset(year, month, day, coordinate.longitude());
    HoursUtc::from_hours(Meridian::at(d, coordinate.longitude()).transit)
}

/// Diurnal arcs for several events on one date, computing the solar position once.
///
/// # Example
/// ```
/// use solar_ephemeris::{riseset, AstronomicalEvent, GeoCoordinate};
///
/// let quito = GeoCoordinate::new(-0.18, -78.47).unwrap();
/// for (event, hours) in
///     riseset::diurnal_arc_hours_multiple(2024, 6, 21, &quito, AstronomicalEvent::ALL)
/// {
///     println!("{:>6.2}°: {hours:.2} h", event.target_altitude());
/// }
/// ```
pub fn diurnal_arc_hours_multiple<I>(
    year: i32,
    month: u32,
    day: u32,
    coordinate: &GeoCoordinate,
    events: I,
) -> impl Iterator<Item = (AstronomicalEvent, f64)>
where
    I: IntoIterator<Item = AstronomicalEvent>,
{
    let d = epoch_offset(year, month, day, coordinate.longitude());
    let noon = NoonDeclination::from_ecliptic(d);
    let latitude = coordinate.latitude();

    events
        .into_iter()
        .map(move |event| (event, arc_hours(noon.crossing(latitude, event))))
}

/// Rise/set times for several events on one date, computing the solar position once.
///
/// Each item carries its own result, so a polar failure for one event does not hide the
/// others.
pub fn rise_set_multiple<I>(
    year: i32,
    month: u32,
    day: u32,
    coordinate: &GeoCoordinate,
    events: I,
) -> impl Iterator<Item = (AstronomicalEvent, Result<RiseSet<HoursUtc>>)>
where
    I: IntoIterator<Item = AstronomicalEvent>,
{
    let d = epoch_offset(year, month, day, coordinate.longitude());
    let meridian = Meridian::at(d, coordinate.longitude());
    let latitude = coordinate.latitude();

    events
        .into_iter()
        .map(move |event| (event, meridian.rise_set(latitude, event)))
}

/// Hours the Sun spends above the event's altitude on the calendar date of `date`.
///
/// The calendar fields are used as given; pass a UTC value to get the UTC date.
#[cfg(feature = "chrono")]
#[must_use]
pub fn diurnal_arc_hours_for_date<D: Datelike>(
    date: &D,
    coordinate: &GeoCoordinate,
    event: AstronomicalEvent,
) -> f64 {
    diurnal_arc_hours(date.year(), date.month(), date.day(), coordinate, event)
}

/// Rise, transit and set as date/times in the timezone of `date`.
///
/// The calculation runs for the UTC calendar date of `date`. Each instant is 0h UT of that
/// date plus the fractional hours from [`rise_set`], rounded to the millisecond, so events
/// falling on the neighbouring day carry the right date.
///
/// # Errors
/// Returns `SunAlwaysBelowHorizon` or `SunAlwaysAboveHorizon` when there is no crossing.
///
/// # Example
/// ```rust
/// use chrono::{DateTime, FixedOffset};
/// use solar_ephemeris::{riseset, AstronomicalEvent, GeoCoordinate};
///
/// let date = "2024-02-16T12:00:00+00:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let holyhead = GeoCoordinate::new(53.248, -4.535).unwrap();
/// let times = riseset::rise_set_for_date(date, &holyhead, AstronomicalEvent::SUNRISE_SUNSET).unwrap();
///
/// println!("Sunrise: {}", times.rise());
/// println!("Sunset:  {}", times.set());
/// ```
#[cfg(feature = "chrono")]
pub fn rise_set_for_date<Tz: TimeZone>(
    date: DateTime<Tz>,
    coordinate: &GeoCoordinate,
    event: AstronomicalEvent,
) -> Result<RiseSet<DateTime<Tz>>> {
    let tz = date.timezone();
    let utc_date = date.with_timezone(&Utc).date_naive();
    let midnight = utc_date.and_time(NaiveTime::MIN).and_utc();

    let hours = rise_set(
        utc_date.year(),
        utc_date.month(),
        utc_date.day(),
        coordinate,
        event,
    )?;

    Ok(hours.map(|h| add_hours(midnight, h).with_timezone(&tz)))
}

#[cfg(feature = "chrono")]
fn add_hours(midnight: DateTime<Utc>, hours: HoursUtc) -> DateTime<Utc> {
    const MS_PER_HOUR: f64 = 3_600_000.0;
    let millis = crate::math::floor(hours.hours() * MS_PER_HOUR + 0.5) as i64;
    midnight + chrono::Duration::milliseconds(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-7;

    fn holyhead() -> GeoCoordinate {
        GeoCoordinate::new(53.248, -4.535).unwrap()
    }

    #[test]
    fn test_diurnal_arc_reference_values() {
        let expected = [
            (AstronomicalEvent::SUNRISE_SUNSET, 9.919_669_388_923_417),
            (AstronomicalEvent::CIVIL_TWILIGHT, 11.115_092_511_313_79),
            (AstronomicalEvent::NAUTICAL_TWILIGHT, 12.468_837_603_539_171),
            (AstronomicalEvent::ASTRONOMICAL_TWILIGHT, 13.807_042_711_201_875),
        ];

        for (event, hours) in expected {
            let actual = diurnal_arc_hours(2024, 2, 16, &holyhead(), event);
            assert!(
                (actual - hours).abs() < EPSILON,
                "{event:?}: {actual} != {hours}"
            );
        }
    }

    #[test]
    fn test_rise_set_reference_values() {
        let result =
            rise_set(2024, 2, 16, &holyhead(), AstronomicalEvent::SUNRISE_SUNSET).unwrap();
        assert!((result.rise().hours() - 7.576_929_467_041_507_5).abs() < EPSILON);
        assert!((result.transit().hours() - 12.536_764_161_503_216).abs() < EPSILON);
        assert!((result.set().hours() - 17.496_598_855_964_926).abs() < EPSILON);
    }

    #[test]
    fn test_rise_set_symmetric_about_transit() {
        for event in AstronomicalEvent::ALL {
            let result = rise_set(2024, 2, 16, &holyhead(), event).unwrap();
            let before = result.transit().hours() - result.rise().hours();
            let after = result.set().hours() - result.transit().hours();
            assert!((before - after).abs() < 1e-12);
        }
    }

    #[test]
    fn test_twilights_nest_around_sunrise() {
        let mut upper: Option<RiseSet<HoursUtc>> = None;
        let mut count = 0;

        for (_, result) in rise_set_multiple(2024, 2, 16, &holyhead(), AstronomicalEvent::ALL) {
            let lower = result.unwrap();
            if let Some(upper) = upper {
                assert!(lower.rise().hours() < upper.rise().hours());
                assert!(lower.set().hours() > upper.set().hours());
            }
            upper = Some(lower);
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_multiple_matches_single_calls() {
        let coordinate = GeoCoordinate::new(-33.87, 151.21).unwrap();
        for (event, hours) in
            diurnal_arc_hours_multiple(2023, 12, 1, &coordinate, AstronomicalEvent::ALL)
        {
            assert_eq!(hours, diurnal_arc_hours(2023, 12, 1, &coordinate, event));
        }
        for (event, result) in
            rise_set_multiple(2023, 12, 1, &coordinate, AstronomicalEvent::ALL)
        {
            assert_eq!(result, rise_set(2023, 12, 1, &coordinate, event));
        }
    }

    #[test]
    fn test_polar_night_and_day() {
        let svalbard = GeoCoordinate::new(78.0, 15.0).unwrap();
        let sunrise = AstronomicalEvent::SUNRISE_SUNSET;

        assert_eq!(
            rise_set(2023, 12, 21, &svalbard, sunrise),
            Err(Error::SunAlwaysBelowHorizon)
        );
        assert_eq!(
            rise_set(2023, 6, 21, &svalbard, sunrise),
            Err(Error::SunAlwaysAboveHorizon)
        );

        assert_eq!(diurnal_arc_hours(2023, 12, 21, &svalbard, sunrise), 0.0);
        assert_eq!(diurnal_arc_hours(2023, 6, 21, &svalbard, sunrise), 24.0);
    }

    #[test]
    fn test_solar_transit_defined_in_polar_night() {
        let svalbard = GeoCoordinate::new(78.0, 15.0).unwrap();
        let transit = solar_transit(2023, 12, 21, &svalbard);
        // 15°E: local noon about an hour before 12h UT
        assert!((transit.hours() - 11.0).abs() < 0.1);
    }

    #[test]
    fn test_rise_set_may_leave_the_day() {
        // far west: sunset falls after 0h UT of the next day
        let honolulu = GeoCoordinate::new(21.31, -157.86).unwrap();
        let result =
            rise_set(2024, 6, 21, &honolulu, AstronomicalEvent::SUNRISE_SUNSET).unwrap();
        assert!(result.set().hours() > 24.0);
        let (day_offset, _) = result.set().day_and_hours();
        assert_eq!(day_offset, 1);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_matches_numeric_api() {
        use chrono::{Timelike, Utc};

        let date = Utc.with_ymd_and_hms(2024, 2, 16, 9, 30, 0).unwrap();
        let times =
            rise_set_for_date(date, &holyhead(), AstronomicalEvent::SUNRISE_SUNSET).unwrap();
        let numeric =
            rise_set(2024, 2, 16, &holyhead(), AstronomicalEvent::SUNRISE_SUNSET).unwrap();

        let rise = times.rise();
        let rise_hours = f64::from(rise.hour())
            + f64::from(rise.minute()) / 60.0
            + f64::from(rise.second()) / 3600.0
            + f64::from(rise.nanosecond()) / 3.6e12;
        assert!((rise_hours - numeric.rise().hours()).abs() < 1.0 / 3_600_000.0);
        assert_eq!(rise.date_naive(), date.date_naive());

        let daylight =
            diurnal_arc_hours_for_date(&date, &holyhead(), AstronomicalEvent::SUNRISE_SUNSET);
        assert!((daylight - 9.919_669_388_923_417).abs() < EPSILON);
    }
}
