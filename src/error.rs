//! Error types for the solar ephemeris library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// First calendar year covered by the day-number formula.
pub const MIN_YEAR: i32 = 1801;

/// Last calendar year covered by the day-number formula.
pub const MAX_YEAR: i32 = 2099;

/// Errors that can occur during solar ephemeris calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The Sun stays above the requested altitude for the whole day (polar day).
    ///
    /// There is no rise or set instant to report; this is not a midnight boundary.
    SunAlwaysAboveHorizon,
    /// The Sun never reaches the requested altitude on this day (polar night).
    SunAlwaysBelowHorizon,
    /// Invalid calendar date at the date-decomposition boundary.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid target altitude for a custom event (must be between -90 and +90 degrees).
    InvalidAltitude {
        /// The invalid altitude value provided.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SunAlwaysAboveHorizon => {
                write!(f, "sun stays above the target altitude all day")
            }
            Self::SunAlwaysBelowHorizon => {
                write!(f, "sun never reaches the target altitude")
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidAltitude { value } => {
                write!(
                    f,
                    "invalid target altitude {value}° (must be between -90° and +90°)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid altitude error.
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Returns true for the two "no crossing today" outcomes of a rise/set query.
    #[must_use]
    pub const fn is_polar(&self) -> bool {
        matches!(
            self,
            Self::SunAlwaysAboveHorizon | Self::SunAlwaysBelowHorizon
        )
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not finite.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees or not finite.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates a target altitude is within -90 to +90 degrees.
///
/// # Errors
/// Returns `InvalidAltitude` for out-of-range or non-finite values.
pub fn check_altitude(altitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&altitude) {
        return Err(Error::invalid_altitude(altitude));
    }
    Ok(())
}

/// Validates a calendar date for use with the numeric API.
///
/// The solver itself accepts any integers; this check is for callers that decompose dates
/// themselves and want to stay inside the range where the day-number formula is accurate.
///
/// # Errors
/// Returns `InvalidDate` if the year is outside 1801-2099, the month is outside 1-12, or
/// the day does not exist in that month.
///
/// # Example
/// ```
/// # use solar_ephemeris::error::check_date;
/// assert!(check_date(2024, 2, 29).is_ok());
/// assert!(check_date(2023, 2, 29).is_err());
/// assert!(check_date(1700, 1, 1).is_err());
/// ```
pub fn check_date(year: i32, month: u32, day: u32) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(Error::invalid_date("year must be between 1801 and 2099"));
    }
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(Error::invalid_date("day is out of range for month"));
    }
    Ok(())
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
