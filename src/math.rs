//! Angle arithmetic for the solar ephemeris.
//!
//! Everything in this crate works in degrees. The raw trigonometric functions dispatch to
//! `std` or `libm` depending on the enabled features; the `*_deg` helpers wrap them with
//! the degree/radian conversions.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// Full revolution in degrees.
const REVOLUTION: f64 = 360.0;

/// Converts degrees to radians.
#[inline]
#[must_use]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Converts radians to degrees.
#[inline]
#[must_use]
pub const fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Reduces an angle to the range [0, 360) degrees.
///
/// Uses the floor of the quotient rather than truncation, so negative input wraps
/// correctly: `normalize_revolution(-10.0) == 350.0`.
///
/// # Example
/// ```
/// # use solar_ephemeris::math::normalize_revolution;
/// assert_eq!(normalize_revolution(-10.0), 350.0);
/// assert_eq!(normalize_revolution(725.0), 5.0);
/// ```
#[must_use]
pub fn normalize_revolution(degrees: f64) -> f64 {
    let reduced = degrees - REVOLUTION * floor(degrees / REVOLUTION);
    // tiny negative input rounds up to a full turn
    if reduced >= REVOLUTION { 0.0 } else { reduced }
}

/// Reduces an angle to the range (-180, 180] degrees.
///
/// # Example
/// ```
/// # use solar_ephemeris::math::normalize_signed_180;
/// assert_eq!(normalize_signed_180(190.0), -170.0);
/// assert_eq!(normalize_signed_180(-180.0), 180.0);
/// ```
#[must_use]
pub fn normalize_signed_180(degrees: f64) -> f64 {
    let reduced = degrees - REVOLUTION * ceil(degrees / REVOLUTION - 0.5);
    if reduced <= -180.0 {
        reduced + REVOLUTION
    } else {
        reduced
    }
}

/// Sine of an angle given in degrees.
#[inline]
#[must_use]
pub fn sin_deg(degrees: f64) -> f64 {
    sin(degrees_to_radians(degrees))
}

/// Cosine of an angle given in degrees.
#[inline]
#[must_use]
pub fn cos_deg(degrees: f64) -> f64 {
    cos(degrees_to_radians(degrees))
}

/// Tangent of an angle given in degrees.
#[inline]
#[must_use]
pub fn tan_deg(degrees: f64) -> f64 {
    tan(degrees_to_radians(degrees))
}

/// Arcsine in degrees. The argument must lie in [-1, 1].
#[inline]
#[must_use]
pub fn asin_deg(x: f64) -> f64 {
    radians_to_degrees(asin(x))
}

/// Arccosine in degrees. The argument must lie in [-1, 1].
#[inline]
#[must_use]
pub fn acos_deg(x: f64) -> f64 {
    radians_to_degrees(acos(x))
}

/// Arctangent in degrees.
#[inline]
#[must_use]
pub fn atan_deg(x: f64) -> f64 {
    radians_to_degrees(atan(x))
}

/// Four-quadrant arctangent of `y / x` in degrees, in the range (-180, 180].
#[inline]
#[must_use]
pub fn atan2_deg(y: f64, x: f64) -> f64 {
    radians_to_degrees(atan2(y, x))
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes atan2(y, x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

/// Computes sqrt(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

/// Computes ceil(x) using the appropriate function for the compilation target.
#[inline]
#[must_use]
pub fn ceil(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.ceil();

    #[cfg(not(feature = "std"))]
    return libm::ceil(x);
}
