//! Low-precision position of the Sun.
//!
//! Orbital elements are linear in the epoch offset `d` (days since 2000 Jan 0.0 UT) and
//! Kepler's equation is solved with a single approximation step. Rise/set times stay within
//! a few seconds for years 1801-2099.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::math::{
    atan2_deg, cos_deg, normalize_revolution, radians_to_degrees, sin_deg, sqrt,
};
use crate::time::{MEAN_ANOMALY_AT_EPOCH, MEAN_ANOMALY_RATE, PERIHELION_AT_EPOCH, PERIHELION_RATE};
use crate::types::{SolarEclipticPosition, SolarEquatorialPosition};

/// Mean anomaly of the Sun in degrees [0, 360).
#[must_use]
pub fn mean_anomaly(d: f64) -> f64 {
    normalize_revolution(MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * d)
}

/// Mean longitude of perihelion in degrees. Not reduced to a single revolution.
#[must_use]
pub fn argument_of_perihelion(d: f64) -> f64 {
    PERIHELION_AT_EPOCH + PERIHELION_RATE * d
}

/// Eccentricity of the Earth's orbit.
#[must_use]
pub fn eccentricity(d: f64) -> f64 {
    0.016709 - 1.151e-9 * d
}

/// Eccentric anomaly in degrees from one step of Kepler's equation.
///
/// `E = M + e·(180/π)·sin M·(1 + e·cos M)`
#[must_use]
pub fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    mean_anomaly
        + radians_to_degrees(eccentricity)
            * sin_deg(mean_anomaly)
            * (1.0 + eccentricity * cos_deg(mean_anomaly))
}

/// Obliquity of the ecliptic in degrees.
#[must_use]
pub fn obliquity_of_ecliptic(d: f64) -> f64 {
    23.4393 - 3.563e-7 * d
}

/// True ecliptic longitude and distance of the Sun at epoch offset `d`.
///
/// # Example
/// ```
/// # use solar_ephemeris::sun::ecliptic_position;
/// // early January: perihelion, the Sun is closest
/// let position = ecliptic_position(4.0);
/// assert!(position.distance() < 0.984);
/// assert!((0.0..360.0).contains(&position.longitude()));
/// ```
#[must_use]
pub fn ecliptic_position(d: f64) -> SolarEclipticPosition {
    let m = mean_anomaly(d);
    let w = argument_of_perihelion(d);
    let e = eccentricity(d);
    let ea = eccentric_anomaly(m, e);

    // position in the orbital plane, x towards perihelion
    let x = cos_deg(ea) - e;
    let y = sqrt(1.0 - e * e) * sin_deg(ea);

    let r = sqrt(x * x + y * y);
    let v = atan2_deg(y, x);

    SolarEclipticPosition::new(normalize_revolution(v + w), r)
}

/// Right ascension, declination and distance of the Sun at epoch offset `d`.
///
/// The Sun's ecliptic latitude is taken as zero, so the equatorial position follows from a
/// rotation of the ecliptic position about the x axis by the obliquity.
#[must_use]
pub fn equatorial_position(d: f64) -> SolarEquatorialPosition {
    let ecliptic = ecliptic_position(d);
    let lon = ecliptic.longitude();
    let r = ecliptic.distance();

    let x = r * cos_deg(lon);
    let y = r * sin_deg(lon);

    let obl = obliquity_of_ecliptic(d);
    let z = y * sin_deg(obl);
    let y = y * cos_deg(obl);

    let right_ascension = atan2_deg(y, x);
    let declination = atan2_deg(z, sqrt(x * x + y * y));

    SolarEquatorialPosition::new(right_ascension, declination, r)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_orbital_elements_at_epoch() {
        assert!((mean_anomaly(0.0) - 356.047).abs() < EPSILON);
        assert!((argument_of_perihelion(0.0) - 282.9404).abs() < EPSILON);
        assert!((eccentricity(0.0) - 0.016709).abs() < EPSILON);
        assert!((obliquity_of_ecliptic(0.0) - 23.4393).abs() < EPSILON);
    }

    #[test]
    fn test_argument_of_perihelion_is_not_reduced() {
        assert!(argument_of_perihelion(3.0e6) > 360.0);
    }

    #[test]
    fn test_eccentric_anomaly_single_step() {
        // zero eccentricity: circular orbit
        assert_eq!(eccentric_anomaly(123.0, 0.0), 123.0);
        // at perihelion and aphelion sin M vanishes
        assert!(eccentric_anomaly(0.0, 0.0167).abs() < EPSILON);
        assert!((eccentric_anomaly(180.0, 0.0167) - 180.0).abs() < 1e-6);
        // at quadrature the correction is e in degrees
        let e = 0.0167;
        assert!((eccentric_anomaly(90.0, e) - (90.0 + e.to_degrees())).abs() < 1e-9);
    }

    #[test]
    fn test_ecliptic_position_reference() {
        let position = ecliptic_position(0.0);
        assert!((position.longitude() - 278.852_616_040_843_8).abs() < 1e-9);
        assert!((position.distance() - 0.983_332_112_169_593_6).abs() < 1e-12);
    }

    #[test]
    fn test_equatorial_position_reference() {
        let position = equatorial_position(8813.5);
        assert!((position.right_ascension() - (-30.493_021_432_224_815)).abs() < 1e-9);
        assert!((position.declination() - (-12.405_580_331_675_289)).abs() < 1e-9);
        assert!((position.distance() - 0.987_845_206_096_056_6).abs() < 1e-12);
    }

    #[test]
    fn test_declination_bounded_by_obliquity() {
        for i in 0..=730 {
            let d = f64::from(i) * 0.5;
            let position = equatorial_position(d);
            assert!(position.declination().abs() <= obliquity_of_ecliptic(d) + 1e-9);
            assert!(position.right_ascension() > -180.0 && position.right_ascension() <= 180.0);
        }
    }

    #[test]
    fn test_solstices_and_equinoxes() {
        // 2024-06-20 is the June solstice; 2024-03-20 the March equinox
        let june = equatorial_position(8938.5);
        assert!(june.declination() > 23.4);
        let march = equatorial_position(8846.5);
        assert!(march.declination().abs() < 0.5);
    }
}
