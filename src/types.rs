//! Core data types for the solar calculator.

use crate::error::{check_azimuth, check_coordinates, check_elevation_angle, check_utc_offset};
use crate::math::{floor, round};
#[cfg(feature = "serde")]
use crate::Error;
use crate::Result;
use core::fmt;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Observer location: geographic coordinates plus the fixed UTC offset of local clock time.
///
/// The offset is a plain number of hours; time zone rules and daylight saving time are the
/// caller's business.
///
/// # Example
/// ```
/// # use noaa_solar::Location;
/// // Boulder, Colorado on Mountain Standard Time
/// let boulder = Location::new(40.0, -105.0, -7.0).unwrap();
/// assert_eq!(boulder.utc_offset_hours(), -7.0);
///
/// assert!(Location::new(91.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLocation")
)]
pub struct Location {
    /// Latitude in degrees (-90 to +90, north positive)
    latitude: f64,
    /// Longitude in degrees (-180 to +180, east positive)
    longitude: f64,
    /// Offset of local clock time from UTC in hours (east positive)
    utc_offset_hours: f64,
}

impl Location {
    /// Creates a new location.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidUtcOffset` for out-of-range or
    /// non-finite values. Values are never clamped.
    pub fn new(latitude: f64, longitude: f64, utc_offset_hours: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_utc_offset(utc_offset_hours)?;
        Ok(Self {
            latitude,
            longitude,
            utc_offset_hours,
        })
    }

    /// Returns the same coordinates with a different UTC offset.
    ///
    /// # Errors
    /// Returns `InvalidUtcOffset` if the offset is out of range.
    pub fn with_utc_offset(self, utc_offset_hours: f64) -> Result<Self> {
        Self::new(self.latitude, self.longitude, utc_offset_hours)
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the UTC offset in hours.
    #[must_use]
    pub const fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
    utc_offset_hours: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLocation> for Location {
    type Error = Error;

    fn try_from(raw: RawLocation) -> Result<Self> {
        Self::new(raw.latitude, raw.longitude, raw.utc_offset_hours)
    }
}

/// Apparent position of the sun in the local horizontal system.
///
/// - Azimuth: 0° = North, measured clockwise to 360°
/// - Elevation: 90° = directly overhead, 0° = horizon, -90° = nadir
/// - Corrected elevation: elevation plus the approximate atmospheric refraction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolarPosition {
    /// Azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise)
    azimuth: f64,
    /// Geometric elevation angle in degrees (-90° to +90°)
    elevation: f64,
    /// Refraction-corrected elevation angle in degrees
    corrected_elevation: f64,
}

impl SolarPosition {
    /// Creates a new solar position.
    ///
    /// # Errors
    /// Returns `ComputationError` if a value is not finite or an elevation is outside
    /// -90° to +90°.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::SolarPosition;
    /// let position = SolarPosition::new(-90.0, 30.0, 30.03).unwrap();
    /// assert_eq!(position.azimuth(), 270.0);
    /// assert_eq!(position.zenith_angle(), 60.0);
    /// ```
    pub fn new(azimuth: f64, elevation: f64, corrected_elevation: f64) -> Result<Self> {
        let azimuth = check_azimuth(azimuth)?;
        let elevation = check_elevation_angle(elevation)?;
        let corrected_elevation = check_elevation_angle(corrected_elevation)?;
        Ok(Self {
            azimuth,
            elevation,
            corrected_elevation,
        })
    }

    /// Creates a position from values the engine already keeps in range.
    pub(crate) const fn from_parts(azimuth: f64, elevation: f64, corrected_elevation: f64) -> Self {
        Self {
            azimuth,
            elevation,
            corrected_elevation,
        }
    }

    /// Gets the azimuth angle in degrees (0° to 360°, 0° = North, increasing clockwise).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the geometric elevation angle in degrees, without refraction.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        self.elevation
    }

    /// Gets the elevation angle corrected for atmospheric refraction, in degrees.
    #[must_use]
    pub const fn corrected_elevation_angle(&self) -> f64 {
        self.corrected_elevation
    }

    /// Gets the geometric zenith angle in degrees (90° - elevation).
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation
    }

    /// Gets the refraction correction in degrees (corrected minus geometric elevation).
    #[must_use]
    pub fn refraction(&self) -> f64 {
        self.corrected_elevation - self.elevation
    }

    /// Checks if the sun appears above the horizon (corrected elevation > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.corrected_elevation > 0.0
    }

    /// Checks if the sun appears at or below the horizon (corrected elevation ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.corrected_elevation <= 0.0
    }
}

/// Time of day as a fraction of the local day.
///
/// Values outside 0.0 to < 1.0 belong to the previous or following day; this happens for
/// sunrise or sunset when the UTC offset is far from the longitude's natural one.
///
/// # Example
/// ```
/// # use noaa_solar::DayFraction;
/// let sunrise = DayFraction::from_fraction(0.306_909);
/// assert_eq!(sunrise.to_string(), "7:21:57");
///
/// let late = DayFraction::from_fraction(1.25);
/// assert_eq!(late.to_string(), "6:00:00 (+1 day)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct DayFraction(f64);

impl DayFraction {
    /// Creates a new `DayFraction`.
    #[must_use]
    pub const fn from_fraction(fraction: f64) -> Self {
        Self(fraction)
    }

    /// Gets the raw fraction of the day.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.0
    }

    /// Hours since local midnight.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.0 * 24.0
    }

    /// Minutes since local midnight.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.0 * 1440.0
    }

    /// Seconds since local midnight.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.0 * SECONDS_PER_DAY
    }

    /// Gets the day offset and whole seconds within that day, rounded to the nearest second.
    ///
    /// # Returns
    /// Tuple of (`day_offset`, `seconds_in_day`) where `seconds_in_day` is 0 to 86399 and
    /// `day_offset` is negative for the previous day and positive for following days.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::DayFraction;
    /// let time = DayFraction::from_fraction(-0.25);
    /// assert_eq!(time.day_and_seconds(), (-1, 64_800));
    /// ```
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn day_and_seconds(&self) -> (i32, u32) {
        let total = round(self.seconds());
        if !total.is_finite() {
            return (0, 0);
        }

        let day_offset_raw = floor(total / SECONDS_PER_DAY);
        let seconds = total - day_offset_raw * SECONDS_PER_DAY;

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, seconds as u32)
    }
}

impl fmt::Display for DayFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0.is_finite() {
            return f.write_str("--:--:--");
        }

        let (day_offset, seconds) = self.day_and_seconds();
        write!(
            f,
            "{}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )?;

        match day_offset {
            0 => Ok(()),
            d if d > 0 => write!(f, " (+{d} day)"),
            d => write!(f, " ({d} day)"),
        }
    }
}

/// Sunrise, solar noon, sunset and day length for one local date.
///
/// At high latitudes the sun may stay above or below the horizon all day; those cases are
/// reported explicitly instead of as NaN times.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolarTimeOfDay {
    /// Regular day with distinct sunrise, solar noon and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: DayFraction,
        /// Time of solar noon (sun crossing the local meridian)
        solar_noon: DayFraction,
        /// Time of sunset
        sunset: DayFraction,
        /// Time between sunrise and sunset, in minutes
        sunlight_duration_minutes: f64,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Time of solar noon
        solar_noon: DayFraction,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Time of solar noon (sun highest, though still below the horizon)
        solar_noon: DayFraction,
    },
}

impl SolarTimeOfDay {
    /// Gets the solar noon time for any result.
    #[must_use]
    pub const fn solar_noon(&self) -> DayFraction {
        match self {
            Self::RegularDay { solar_noon, .. }
            | Self::AllDay { solar_noon }
            | Self::AllNight { solar_noon } => *solar_noon,
        }
    }

    /// Gets sunrise time if this is a regular day.
    #[must_use]
    pub const fn sunrise(&self) -> Option<DayFraction> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(*sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    #[must_use]
    pub const fn sunset(&self) -> Option<DayFraction> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(*sunset)
        } else {
            None
        }
    }

    /// Gets the sunlight duration in minutes: 1440 for polar day, 0 for polar night.
    #[must_use]
    pub const fn sunlight_duration_minutes(&self) -> f64 {
        match self {
            Self::RegularDay {
                sunlight_duration_minutes,
                ..
            } => *sunlight_duration_minutes,
            Self::AllDay { .. } => 1440.0,
            Self::AllNight { .. } => 0.0,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    #[must_use]
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    #[must_use]
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    #[must_use]
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }
}

impl From<SolarTimeOfDay> for Option<(DayFraction, DayFraction)> {
    fn from(result: SolarTimeOfDay) -> Self {
        result.sunrise().zip(result.sunset())
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_location_creation() {
        let location = Location::new(40.0, -105.0, -7.0).unwrap();
        assert_eq!(location.latitude(), 40.0);
        assert_eq!(location.longitude(), -105.0);
        assert_eq!(location.utc_offset_hours(), -7.0);

        let summer = location.with_utc_offset(-6.0).unwrap();
        assert_eq!(summer.utc_offset_hours(), -6.0);
        assert_eq!(summer.latitude(), 40.0);

        assert_eq!(
            Location::new(-90.5, 0.0, 0.0),
            Err(Error::invalid_latitude(-90.5))
        );
        assert_eq!(
            Location::new(0.0, 180.5, 0.0),
            Err(Error::invalid_longitude(180.5))
        );
        assert_eq!(
            Location::new(0.0, 0.0, 19.0),
            Err(Error::invalid_utc_offset(19.0))
        );
        assert!(Location::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(location.with_utc_offset(f64::NAN).is_err());
    }

    #[test]
    fn test_solar_position_creation() {
        let pos = SolarPosition::new(180.0, 45.0, 45.02).unwrap();
        assert_eq!(pos.azimuth(), 180.0);
        assert_eq!(pos.elevation_angle(), 45.0);
        assert_eq!(pos.corrected_elevation_angle(), 45.02);
        assert_eq!(pos.zenith_angle(), 45.0);
        assert!((pos.refraction() - 0.02).abs() < 1e-12);

        // Test normalization
        let pos = SolarPosition::new(360.0, 0.0, 0.5).unwrap();
        assert_eq!(pos.azimuth(), 0.0);

        // Test validation
        assert!(SolarPosition::new(0.0, 91.0, 91.0).is_err());
        assert!(SolarPosition::new(0.0, -10.0, f64::NAN).is_err());
        assert!(SolarPosition::new(f64::INFINITY, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_solar_position_sun_state() {
        let above_horizon = SolarPosition::new(180.0, 30.0, 30.03).unwrap();
        assert!(above_horizon.is_sun_up());
        assert!(!above_horizon.is_sun_down());

        // Geometrically below the horizon but lifted into view by refraction
        let lifted = SolarPosition::new(90.0, -0.3, 0.2).unwrap();
        assert!(lifted.is_sun_up());

        let below_horizon = SolarPosition::new(0.0, -25.0, -24.99).unwrap();
        assert!(!below_horizon.is_sun_up());
        assert!(below_horizon.is_sun_down());
    }

    #[test]
    fn test_day_fraction_conversions() {
        let noon = DayFraction::from_fraction(0.5);
        assert_eq!(noon.hours(), 12.0);
        assert_eq!(noon.minutes(), 720.0);
        assert_eq!(noon.seconds(), 43_200.0);
        assert_eq!(noon.day_and_seconds(), (0, 43_200));

        let next_day = DayFraction::from_fraction(1.5);
        assert_eq!(next_day.day_and_seconds(), (1, 43_200));

        // Rounds to the nearest second, carrying into the next day
        let almost_midnight = DayFraction::from_fraction(0.999_999_9);
        assert_eq!(almost_midnight.day_and_seconds(), (1, 0));

        let nan = DayFraction::from_fraction(f64::NAN);
        assert_eq!(nan.day_and_seconds(), (0, 0));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_day_fraction_display() {
        assert_eq!(DayFraction::from_fraction(0.5).to_string(), "12:00:00");
        assert_eq!(
            DayFraction::from_fraction(16.0 / 24.0 + 45.0 / 1440.0 + 25.0 / 86_400.0).to_string(),
            "16:45:25"
        );
        assert_eq!(
            DayFraction::from_fraction(-0.125).to_string(),
            "21:00:00 (-1 day)"
        );
        assert_eq!(
            DayFraction::from_fraction(2.0).to_string(),
            "0:00:00 (+2 day)"
        );
        assert_eq!(
            DayFraction::from_fraction(f64::INFINITY).to_string(),
            "--:--:--"
        );
    }

    #[test]
    fn test_solar_time_of_day_regular_day() {
        let sunrise = DayFraction::from_fraction(0.3);
        let solar_noon = DayFraction::from_fraction(0.5);
        let sunset = DayFraction::from_fraction(0.7);

        let result = SolarTimeOfDay::RegularDay {
            sunrise,
            solar_noon,
            sunset,
            sunlight_duration_minutes: 576.0,
        };

        assert!(result.is_regular_day());
        assert!(!result.is_polar_day());
        assert!(!result.is_polar_night());
        assert_eq!(result.solar_noon(), solar_noon);
        assert_eq!(result.sunrise(), Some(sunrise));
        assert_eq!(result.sunset(), Some(sunset));
        assert_eq!(result.sunlight_duration_minutes(), 576.0);

        let window: Option<(DayFraction, DayFraction)> = result.into();
        assert_eq!(window, Some((sunrise, sunset)));
    }

    #[test]
    fn test_solar_time_of_day_polar() {
        let solar_noon = DayFraction::from_fraction(0.49);

        let polar_day = SolarTimeOfDay::AllDay { solar_noon };
        assert!(polar_day.is_polar_day());
        assert_eq!(polar_day.solar_noon(), solar_noon);
        assert_eq!(polar_day.sunrise(), None);
        assert_eq!(polar_day.sunset(), None);
        assert_eq!(polar_day.sunlight_duration_minutes(), 1440.0);

        let polar_night = SolarTimeOfDay::AllNight { solar_noon };
        assert!(polar_night.is_polar_night());
        assert_eq!(polar_night.sunlight_duration_minutes(), 0.0);

        let window: Option<(DayFraction, DayFraction)> = polar_night.into();
        assert_eq!(window, None);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_location_deserialization_validates() {
        let location: Location = serde_json::from_str(
            r#"{"latitude": 40.0, "longitude": -105.0, "utc_offset_hours": -7.0}"#,
        )
        .unwrap();
        assert_eq!(location, Location::new(40.0, -105.0, -7.0).unwrap());

        let invalid = serde_json::from_str::<Location>(
            r#"{"latitude": 95.0, "longitude": -105.0, "utc_offset_hours": -7.0}"#,
        );
        assert!(invalid.is_err());

        let from_toml: Location =
            toml::from_str("latitude = 40.72\nlongitude = 29.47\nutc_offset_hours = 3.0\n")
                .unwrap();
        assert_eq!(from_toml.utc_offset_hours(), 3.0);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_solar_time_of_day_serialization() {
        let result = SolarTimeOfDay::AllNight {
            solar_noon: DayFraction::from_fraction(0.5),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"AllNight":{"solar_noon":0.5}}"#);
    }
}
