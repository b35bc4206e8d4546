//! Time scales used by the solar ephemeris.
//!
//! All solar quantities are driven by a single time variable, the epoch offset `d`: the
//! number of days since 2000 Jan 0.0 UT (1999-12-31 00:00 UT). Dates before the anchor give
//! negative offsets.

#![allow(clippy::unreadable_literal)]

use crate::math::normalize_revolution;

/// Degrees of hour angle swept per hour of time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Mean anomaly of the Sun at the epoch, in degrees.
pub(crate) const MEAN_ANOMALY_AT_EPOCH: f64 = 356.0470;

/// Daily motion of the Sun's mean anomaly, in degrees per day.
pub(crate) const MEAN_ANOMALY_RATE: f64 = 0.9856002585;

/// Argument of perihelion of the Sun at the epoch, in degrees.
pub(crate) const PERIHELION_AT_EPOCH: f64 = 282.9404;

/// Daily drift of the argument of perihelion, in degrees per day.
pub(crate) const PERIHELION_RATE: f64 = 4.70935e-5;

/// Whole days from the epoch anchor to the start of the given calendar date.
///
/// This is the classical day-number formula with truncating integer division throughout.
/// It is only accurate for years 1801 to 2099; outside that range the Gregorian leap-year
/// rules are not followed and the result drifts. No range check is made here (see
/// [`check_date`](crate::error::check_date)).
///
/// # Example
/// ```
/// # use solar_ephemeris::time::days_since_epoch_anchor;
/// assert_eq!(days_since_epoch_anchor(2000, 1, 1), 1);
/// assert_eq!(days_since_epoch_anchor(1999, 12, 31), 0);
/// ```
#[must_use]
pub fn days_since_epoch_anchor(year: i32, month: u32, day: u32) -> i64 {
    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);
    367 * y - (7 * (y + (m + 9) / 12)) / 4 + 275 * m / 9 + d - 730530
}

/// Epoch offset at local mean noon of the given date for an observer at `longitude`.
///
/// `d = days_since_epoch_anchor + 0.5 - longitude / 360`. East longitudes reach local noon
/// earlier in UT, so they get a smaller offset.
#[must_use]
pub fn epoch_offset(year: i32, month: u32, day: u32, longitude: f64) -> f64 {
    days_since_epoch_anchor(year, month, day) as f64 + 0.5 - longitude / 360.0
}

/// Greenwich mean sidereal time at 0h UT, in degrees [0, 360).
///
/// The expression is linear in `d`, so it can be evaluated at any fractional day offset.
/// Sidereal time at an arbitrary UT instant is `gmst0(d) + ut_hours * 15`.
#[must_use]
pub fn gmst0(d: f64) -> f64 {
    normalize_revolution(
        (180.0 + MEAN_ANOMALY_AT_EPOCH + PERIHELION_AT_EPOCH)
            + (MEAN_ANOMALY_RATE + PERIHELION_RATE) * d,
    )
}

/// Local sidereal time at 12h UT, in degrees [0, 360).
///
/// `d` is expected to be the local-noon epoch offset from [`epoch_offset`].
#[must_use]
pub fn local_sidereal_time(d: f64, longitude: f64) -> f64 {
    normalize_revolution(gmst0(d) + 180.0 + longitude)
}
