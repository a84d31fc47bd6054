//! # NOAA Solar Calculator
//!
//! Sun position, sunrise, solar noon, sunset and day length from the NOAA solar calculator
//! equations.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! Given a latitude, a longitude, a fixed UTC offset and a local date and time, the library
//! computes:
//! - **Solar position**: azimuth, geometric elevation and refraction-corrected elevation
//! - **Solar time of day**: sunrise, solar noon, sunset and sunlight duration, with polar
//!   day and polar night reported explicitly
//!
//! The algorithm is the closed-form series used by the NOAA Global Monitoring Laboratory
//! spreadsheet calculator, accurate to about a minute for event times and a hundredth of a
//! degree for position between 1800 and 2100.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Validated inputs: coordinates, offsets and calendar fields are checked, never clamped
//! - Reusable orbital state for per-frame position updates within a day
//! - Thread-safe: Stateless, immutable data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable `DateTime<Tz>` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: Serialize results, and deserialize validated `Location` and `Instant` values
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! noaa-solar = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! noaa-solar = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! noaa-solar = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Reference
//!
//! - NOAA Global Monitoring Laboratory, Solar Calculation Details.
//!   <https://gml.noaa.gov/grad/solcalc/calcdetails.html>
//! - Meeus, J. (1991). Astronomical Algorithms. Willmann-Bell.
//!
//! ## Quick Start
//!
//! ### Solar Position
//! ```rust
//! use noaa_solar::{noaa, Instant, Location};
//!
//! // Boulder, Colorado on Mountain Standard Time
//! let boulder = Location::new(40.0, -105.0, -7.0).unwrap();
//! let instant = Instant::new(2010, 1, 1, 12, 0, 0).unwrap();
//!
//! let position = noaa::solar_position(&boulder, &instant);
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Elevation: {:.3}°", position.elevation_angle());
//! println!("Apparent elevation: {:.3}°", position.corrected_elevation_angle());
//! ```
//!
//! ### Sunrise and Sunset
//! ```rust
//! use noaa_solar::{noaa, Instant, Location, SolarTimeOfDay};
//!
//! let boulder = Location::new(40.0, -105.0, -7.0).unwrap();
//! let instant = Instant::new(2010, 1, 1, 12, 0, 0).unwrap();
//!
//! match noaa::solar_time_of_day(&boulder, &instant) {
//!     SolarTimeOfDay::RegularDay { sunrise, solar_noon, sunset, sunlight_duration_minutes } => {
//!         println!("Sunrise: {sunrise}");
//!         println!("Solar noon: {solar_noon}");
//!         println!("Sunset: {sunset}");
//!         println!("Daylight: {sunlight_duration_minutes:.1} min");
//!     }
//!     _ => println!("No sunrise/sunset (polar day/night)"),
//! }
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use noaa_solar::noaa;
//! use chrono::{DateTime, FixedOffset};
//!
//! let datetime = "2010-06-21T06:30:00-06:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let position = noaa::solar_position_at(datetime, 40.0, -105.0).unwrap();
//! assert!(position.is_sun_up());
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Times of day**: fractions of the local day at the location's UTC offset

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature is required for floating-point math");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::noaa::{OrbitalState, SunriseHourAngle};
pub use crate::time::Instant;
pub use crate::types::{DayFraction, Location, SolarPosition, SolarTimeOfDay};

// Algorithm module
pub mod noaa;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
