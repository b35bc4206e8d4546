//! # Solar Ephemeris Library
//!
//! Sunrise, sunset and twilight times from a compact, low-precision model of the Sun.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The Sun's position comes from linear orbital elements and a single-step solution of
//! Kepler's equation, which is accurate to a few seconds of rise/set time for calendar
//! years 1801 to 2099. From that position the library answers two questions for an observer
//! and a target altitude:
//! - How many hours is the Sun above the altitude today? ([`riseset::diurnal_arc_hours`])
//! - When does it cross the altitude, in UTC hours? ([`riseset::rise_set`])
//!
//! The standard altitudes (sunrise/sunset, civil, nautical and astronomical twilight) are
//! constants on [`AstronomicalEvent`].
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-ephemeris = "0.1"
//!
//! # Minimal std (no chrono)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Logging
//!
//! Calculations report through the [`log`] facade: `trace` for each computed crossing and
//! `debug` when the Sun stays above or below the target altitude all day. Nothing is
//! printed unless the application installs a logger.
//!
//! ## Quick Start
//!
//! ### Hours of daylight
//! ```rust
//! use solar_ephemeris::{riseset, AstronomicalEvent, GeoCoordinate};
//!
//! let holyhead = GeoCoordinate::new(53.248, -4.535).unwrap();
//! for event in AstronomicalEvent::ALL {
//!     let hours = riseset::diurnal_arc_hours(2024, 2, 16, &holyhead, event);
//!     println!("{:>7.3}°: {hours:.2} h", event.target_altitude());
//! }
//! ```
//!
//! ### Sunrise and sunset (numeric API, no chrono)
//! ```rust
//! use solar_ephemeris::{riseset, AstronomicalEvent, Error, GeoCoordinate};
//!
//! let tromso = GeoCoordinate::new(69.65, 18.96).unwrap();
//! match riseset::rise_set(2024, 12, 21, &tromso, AstronomicalEvent::SUNRISE_SUNSET) {
//!     Ok(times) => println!("{:.2}..{:.2} h UTC", times.rise().hours(), times.set().hours()),
//!     Err(Error::SunAlwaysBelowHorizon) => println!("Polar night"),
//!     Err(Error::SunAlwaysAboveHorizon) => println!("Midnight sun"),
//!     Err(e) => panic!("{e}"),
//! }
//! ```
//!
//! ### Sunrise and sunset (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_ephemeris::{riseset, AstronomicalEvent, GeoCoordinate};
//! use chrono::{DateTime, FixedOffset};
//!
//! let date = "2024-06-21T00:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let san_francisco = GeoCoordinate::new(37.7749, -122.4194).unwrap();
//! let times =
//!     riseset::rise_set_for_date(date, &san_francisco, AstronomicalEvent::SUNRISE_SUNSET)
//!         .unwrap();
//!
//! println!("Sunrise: {}", times.rise());
//! println!("Solar noon: {}", times.transit());
//! println!("Sunset: {}", times.set());
//! # }
//! ```
//!
//! ## Conventions
//!
//! - Angles are in degrees; latitude positive north, longitude positive east.
//! - Times are fractional hours since 0h UT of the calculation date. They are not wrapped,
//!   so they may be negative or exceed 24 (see [`HoursUtc::day_and_hours`]).
//! - Dates are plain year/month/day integers; the day-number formula is valid for years
//!   1801 to 2099 and is not range-checked (see [`error::check_date`]).

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of reference values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::types::{
    AstronomicalEvent, GeoCoordinate, HoursUtc, RiseSet, SolarEclipticPosition,
    SolarEquatorialPosition,
};

// Algorithm modules
pub mod riseset;
pub mod sun;

// Core modules
pub mod error;
pub mod math;
pub mod time;
pub mod types;
