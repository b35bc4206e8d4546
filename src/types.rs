//! Core data types for solar ephemeris calculations.

use core::ops::RangeInclusive;

use crate::Result;
use crate::error::{check_altitude, check_latitude, check_longitude};
use crate::math::floor;

/// Apparent angular radius of the Sun at a distance of 1 AU, in degrees.
pub const SUN_APPARENT_RADIUS_AT_1_AU: f64 = 0.2666;

/// Observer location on the Earth's surface.
///
/// Latitude is positive north, longitude is positive east. Latitude drives all altitude
/// geometry; longitude only shifts local time.
///
/// # Example
/// ```
/// # use solar_ephemeris::GeoCoordinate;
/// let holyhead = GeoCoordinate::new(53.248, -4.535).unwrap();
/// assert_eq!(holyhead.latitude(), 53.248);
/// assert!(GeoCoordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate from latitude and longitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_latitude(latitude)?;
        check_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees, positive north.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Altitude threshold defining a solar event such as sunrise or the end of twilight.
///
/// The four standard events are associated constants. Only sunrise/sunset uses the limb
/// correction: the event happens when the Sun's upper edge, not its centre, reaches the
/// target altitude, so the apparent solar radius is subtracted from the target.
///
/// # Example
/// ```
/// # use solar_ephemeris::AstronomicalEvent;
/// let civil = AstronomicalEvent::CIVIL_TWILIGHT;
/// assert_eq!(civil.target_altitude(), -6.0);
/// assert!(!civil.applies_limb_correction());
///
/// let golden_hour = AstronomicalEvent::custom(6.0, false).unwrap();
/// assert_eq!(golden_hour.target_altitude(), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstronomicalEvent {
    target_altitude: f64,
    apply_limb_correction: bool,
}

impl AstronomicalEvent {
    /// Sunrise and sunset: upper limb 35 arc minutes below the horizon (refraction included).
    pub const SUNRISE_SUNSET: Self = Self {
        target_altitude: -35.0 / 60.0,
        apply_limb_correction: true,
    };

    /// Civil twilight: Sun's centre 6° below the horizon.
    pub const CIVIL_TWILIGHT: Self = Self {
        target_altitude: -6.0,
        apply_limb_correction: false,
    };

    /// Nautical twilight: Sun's centre 12° below the horizon.
    pub const NAUTICAL_TWILIGHT: Self = Self {
        target_altitude: -12.0,
        apply_limb_correction: false,
    };

    /// Astronomical twilight: Sun's centre 18° below the horizon.
    pub const ASTRONOMICAL_TWILIGHT: Self = Self {
        target_altitude: -18.0,
        apply_limb_correction: false,
    };

    /// The four standard events, from the horizon downwards.
    pub const ALL: [Self; 4] = [
        Self::SUNRISE_SUNSET,
        Self::CIVIL_TWILIGHT,
        Self::NAUTICAL_TWILIGHT,
        Self::ASTRONOMICAL_TWILIGHT,
    ];

    /// Creates a custom event for the given altitude in degrees.
    ///
    /// # Errors
    /// Returns `InvalidAltitude` if the altitude is outside -90 to +90 degrees.
    pub fn custom(target_altitude: f64, apply_limb_correction: bool) -> Result<Self> {
        check_altitude(target_altitude)?;
        Ok(Self {
            target_altitude,
            apply_limb_correction,
        })
    }

    /// Target altitude in degrees. Negative values are below the horizon.
    #[must_use]
    pub const fn target_altitude(&self) -> f64 {
        self.target_altitude
    }

    /// Whether the apparent solar radius is subtracted from the target altitude.
    #[must_use]
    pub const fn applies_limb_correction(&self) -> bool {
        self.apply_limb_correction
    }

    /// Altitude the Sun's centre has to reach, given the Earth-Sun distance in AU.
    #[must_use]
    pub fn effective_altitude(&self, distance: f64) -> f64 {
        if self.apply_limb_correction {
            self.target_altitude - SUN_APPARENT_RADIUS_AT_1_AU / distance
        } else {
            self.target_altitude
        }
    }
}

impl Eq for AstronomicalEvent {}

impl core::hash::Hash for AstronomicalEvent {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // -0.0 and +0.0 compare equal, so they must hash equally
        let altitude = if self.target_altitude == 0.0 {
            0.0
        } else {
            self.target_altitude
        };
        altitude.to_bits().hash(state);
        self.apply_limb_correction.hash(state);
    }
}

/// Sun's position on the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEclipticPosition {
    longitude: f64,
    distance: f64,
}

impl SolarEclipticPosition {
    pub(crate) const fn new(longitude: f64, distance: f64) -> Self {
        Self {
            longitude,
            distance,
        }
    }

    /// True ecliptic longitude in degrees [0, 360).
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Earth-Sun distance in astronomical units.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// Sun's position in geocentric equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEquatorialPosition {
    right_ascension: f64,
    declination: f64,
    distance: f64,
}

impl SolarEquatorialPosition {
    pub(crate) const fn new(right_ascension: f64, declination: f64, distance: f64) -> Self {
        Self {
            right_ascension,
            declination,
            distance,
        }
    }

    /// Right ascension in degrees (-180, 180].
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination in degrees, bounded by the obliquity of the ecliptic.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Earth-Sun distance in astronomical units.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }
}

/// Hours since midnight UTC that can extend beyond a single day.
///
/// Values represent hours since 0h UT of the calculation date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use solar_ephemeris::HoursUtc;
/// let morning = HoursUtc::from_hours(6.5); // 06:30 current day
/// let after_midnight = HoursUtc::from_hours(24.5); // 00:30 next day
/// let before_midnight_prev = HoursUtc::from_hours(-0.5); // 23:30 previous day
/// assert_eq!(before_midnight_prev.day_and_hours(), (-1, 23.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value. Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::HoursUtc;
    /// let time = HoursUtc::from_hours(25.5);
    /// let (day_offset, hours) = time.day_and_hours();
    /// assert_eq!(day_offset, 1);
    /// assert!((hours - 1.5).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }
}

/// Rise, transit and set of the Sun across an event's altitude on one day.
///
/// `rise` and `set` are symmetric around `transit` (local solar noon).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "chrono",
    doc = "The chrono helpers return `RiseSet<chrono::DateTime<Tz>>`."
)]
pub struct RiseSet<T> {
    rise: T,
    transit: T,
    set: T,
}

impl<T> RiseSet<T> {
    /// Creates a result from its three instants.
    pub const fn new(rise: T, transit: T, set: T) -> Self {
        Self { rise, transit, set }
    }

    /// Time the Sun climbs through the target altitude.
    pub const fn rise(&self) -> &T {
        &self.rise
    }

    /// Time the Sun crosses the meridian (solar noon).
    pub const fn transit(&self) -> &T {
        &self.transit
    }

    /// Time the Sun sinks through the target altitude.
    pub const fn set(&self) -> &T {
        &self.set
    }

    /// Applies `f` to all three instants.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> RiseSet<U> {
        RiseSet {
            rise: f(self.rise),
            transit: f(self.transit),
            set: f(self.set),
        }
    }
}

impl RiseSet<HoursUtc> {
    /// The closed interval `rise..=set` in fractional UTC hours, not wrapped to a day.
    #[must_use]
    pub const fn range(&self) -> RangeInclusive<f64> {
        self.rise.0..=self.set.0
    }

    /// Hours between rise and set.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.set.0 - self.rise.0
    }
}
