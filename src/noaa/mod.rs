//! NOAA solar calculator.
//!
//! Sun position and daily solar events following the NOAA Global Monitoring Division solar
//! calculator, itself based on the low-precision formulas in Jean Meeus, "Astronomical
//! Algorithms" (1991). Accuracy is roughly ±1 minute for event times and ±0.01° for position
//! for dates between 1800 and 2100.
//!
//! The calculation runs in two steps. [`orbital_state`] turns a [`Location`] and an
//! [`Instant`] into every date-dependent quantity (Julian day through sunrise hour angle).
//! The state then feeds two independent branches: solar position for a time of day, and the
//! sunrise/solar noon/sunset events for the date.
//!
//! Reference: NOAA Global Monitoring Laboratory, Solar Calculation Details,
//! <https://gml.noaa.gov/grad/solcalc/calcdetails.html>

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

pub mod refraction;

use crate::math::{
    acos, asin, clamp_unit, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin, tan,
};
use crate::time::{JulianDate, MINUTES_PER_DAY};
use crate::{DayFraction, Instant, Location, SolarPosition, SolarTimeOfDay};
use log::{debug, trace};
use refraction::atmospheric_refraction;

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Offset, TimeZone};

/// Zenith angle of the sun's center at sunrise and sunset: 90° plus standard horizon
/// refraction and the solar disk radius.
const SUNRISE_SUNSET_ZENITH: f64 = 90.833;

/// Below this value of cos(latitude)·sin(zenith) the azimuth is undefined.
const AZIMUTH_SINGULARITY_THRESHOLD: f64 = 1e-12;

/// Longitude of the moon's ascending node in degrees, `125.04 − 1934.136·T`.
const NODE_LONGITUDE_COEFFS: [f64; 2] = [125.04, -1934.136];

/// Sunrise hour angle of a date, or the polar condition that replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SunriseHourAngle {
    /// Hour angle of sunrise in degrees (0° to 180°)
    Regular(f64),
    /// The sun stays above the horizon for the whole day
    AllDay,
    /// The sun stays below the horizon for the whole day
    AllNight,
}

impl SunriseHourAngle {
    /// Classifies the argument of the sunrise hour angle arccosine.
    ///
    /// An argument below -1 means the sun never reaches the horizon from above; above 1 means
    /// it never reaches it from below.
    fn from_cosine(cos_hour_angle: f64) -> Self {
        if cos_hour_angle < -1.0 {
            Self::AllDay
        } else if cos_hour_angle > 1.0 {
            Self::AllNight
        } else {
            Self::Regular(radians_to_degrees(acos(clamp_unit(cos_hour_angle))))
        }
    }

    /// Gets the hour angle in degrees for a regular day.
    #[must_use]
    pub const fn degrees(&self) -> Option<f64> {
        match self {
            Self::Regular(degrees) => Some(*degrees),
            Self::AllDay | Self::AllNight => None,
        }
    }
}

/// Date-dependent quantities of the NOAA calculation for one location and instant.
///
/// Built once by [`orbital_state`] and only read afterwards. Angles are in degrees unless
/// the accessor says otherwise.
///
/// Within one calendar day the state changes slowly, so a state built for one instant can
/// be reused for other times of that day through [`solar_position_with_orbital_state`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    location: Location,
    instant: Instant,
    julian_date: JulianDate,
    julian_century: f64,
    mean_longitude: f64,
    mean_anomaly: f64,
    eccentricity: f64,
    equation_of_center: f64,
    true_longitude: f64,
    apparent_longitude: f64,
    mean_obliquity: f64,
    corrected_obliquity: f64,
    declination_radians: f64,
    var_y: f64,
    equation_of_time: f64,
    sunrise_hour_angle: SunriseHourAngle,
}

impl OrbitalState {
    /// Location the state was computed for.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Instant the state was computed for.
    #[must_use]
    pub const fn instant(&self) -> &Instant {
        &self.instant
    }

    /// Julian date of the instant, on the UTC time scale.
    #[must_use]
    pub const fn julian_date(&self) -> JulianDate {
        self.julian_date
    }

    /// Julian centuries since J2000.0.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }

    /// Geometric mean longitude of the sun, reduced to [0, 360).
    #[must_use]
    pub const fn mean_longitude(&self) -> f64 {
        self.mean_longitude
    }

    /// Geometric mean anomaly of the sun (not reduced).
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Eccentricity of Earth's orbit.
    #[must_use]
    pub const fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Equation of center of the sun.
    #[must_use]
    pub const fn equation_of_center(&self) -> f64 {
        self.equation_of_center
    }

    /// True longitude of the sun.
    #[must_use]
    pub const fn true_longitude(&self) -> f64 {
        self.true_longitude
    }

    /// Apparent longitude of the sun (nutation and aberration applied).
    #[must_use]
    pub const fn apparent_longitude(&self) -> f64 {
        self.apparent_longitude
    }

    /// Mean obliquity of the ecliptic.
    #[must_use]
    pub const fn mean_obliquity(&self) -> f64 {
        self.mean_obliquity
    }

    /// Obliquity of the ecliptic corrected for nutation.
    #[must_use]
    pub const fn corrected_obliquity(&self) -> f64 {
        self.corrected_obliquity
    }

    /// Solar declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        radians_to_degrees(self.declination_radians)
    }

    /// Solar declination in radians.
    #[must_use]
    pub const fn declination_radians(&self) -> f64 {
        self.declination_radians
    }

    /// `tan²(ε/2)` for the corrected obliquity ε.
    #[must_use]
    pub const fn var_y(&self) -> f64 {
        self.var_y
    }

    /// Equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Sunrise hour angle, or the polar condition of the date.
    #[must_use]
    pub const fn sunrise_hour_angle(&self) -> SunriseHourAngle {
        self.sunrise_hour_angle
    }
}

/// Computes the date-dependent part of the calculation.
///
/// # Arguments
/// * `location` - Observer location and UTC offset
/// * `instant` - Local date and time at that offset
///
/// # Example
/// ```
/// use noaa_solar::{noaa, Instant, Location};
///
/// let location = Location::new(40.0, -105.0, -7.0).unwrap();
/// let instant = Instant::new(2010, 1, 1, 12, 0, 0).unwrap();
/// let state = noaa::orbital_state(&location, &instant);
///
/// assert!((state.declination() - (-22.9615)).abs() < 1e-3);
/// assert!((state.equation_of_time() - (-3.686)).abs() < 1e-3);
/// ```
#[must_use]
pub fn orbital_state(location: &Location, instant: &Instant) -> OrbitalState {
    let julian_date = JulianDate::from_local(instant, location.utc_offset_hours());
    let t = julian_date.julian_century();
    trace!(
        "orbital state for {instant}: JD {:.6}, T {t:.9}",
        julian_date.julian_date()
    );

    let mean_longitude =
        normalize_degrees_0_to_360(polynomial(&[280.46646, 36000.76983, 0.0003032], t));
    let mean_anomaly = polynomial(&[357.52911, 35999.05029, -0.0001537], t);
    let eccentricity = polynomial(&[0.016708634, -0.000042037, -0.0000001267], t);

    let m = degrees_to_radians(mean_anomaly);
    let equation_of_center = sin(m) * polynomial(&[1.914602, -0.004817, -0.000014], t)
        + sin(2.0 * m) * polynomial(&[0.019993, -0.000101], t)
        + sin(3.0 * m) * 0.000289;

    let node_longitude = degrees_to_radians(polynomial(&NODE_LONGITUDE_COEFFS, t));
    let true_longitude = mean_longitude + equation_of_center;
    let apparent_longitude = true_longitude - 0.00569 - 0.00478 * sin(node_longitude);

    let obliquity_seconds = polynomial(&[21.448, -46.815, -0.00059, 0.001813], t);
    let mean_obliquity = 23.0 + (26.0 + obliquity_seconds / 60.0) / 60.0;
    let corrected_obliquity = mean_obliquity + 0.00256 * cos(node_longitude);

    let epsilon = degrees_to_radians(corrected_obliquity);
    let declination_radians =
        asin(clamp_unit(sin(epsilon) * sin(degrees_to_radians(apparent_longitude))));

    let tan_half_epsilon = tan(epsilon / 2.0);
    let var_y = tan_half_epsilon * tan_half_epsilon;
    let equation_of_time = equation_of_time(var_y, eccentricity, mean_longitude, m);

    let latitude = degrees_to_radians(location.latitude());
    let cos_hour_angle = cos(degrees_to_radians(SUNRISE_SUNSET_ZENITH))
        / (cos(latitude) * cos(declination_radians))
        - tan(latitude) * tan(declination_radians);
    let sunrise_hour_angle = SunriseHourAngle::from_cosine(cos_hour_angle);
    if !matches!(sunrise_hour_angle, SunriseHourAngle::Regular(_)) {
        debug!(
            "{sunrise_hour_angle:?} on {instant} at latitude {} (hour angle cosine {cos_hour_angle:.6})",
            location.latitude()
        );
    }

    OrbitalState {
        location: *location,
        instant: *instant,
        julian_date,
        julian_century: t,
        mean_longitude,
        mean_anomaly,
        eccentricity,
        equation_of_center,
        true_longitude,
        apparent_longitude,
        mean_obliquity,
        corrected_obliquity,
        declination_radians,
        var_y,
        equation_of_time,
        sunrise_hour_angle,
    }
}

/// Equation of time in minutes (Smart's series as used by NOAA).
fn equation_of_time(var_y: f64, eccentricity: f64, mean_longitude: f64, mean_anomaly_rad: f64) -> f64 {
    let l0 = degrees_to_radians(mean_longitude);
    let m = mean_anomaly_rad;
    let e = eccentricity;
    let y = var_y;

    let radians = y * sin(2.0 * l0) - 2.0 * e * sin(m) + 4.0 * e * y * sin(m) * cos(2.0 * l0)
        - 0.5 * y * y * sin(4.0 * l0)
        - 1.25 * e * e * sin(2.0 * m);

    4.0 * radians_to_degrees(radians)
}

/// Calculates the apparent solar position for a location and local date-time.
///
/// # Arguments
/// * `location` - Observer location and UTC offset
/// * `instant` - Local date and time at that offset
///
/// # Returns
/// Azimuth, geometric elevation and refraction-corrected elevation
///
/// # Example
/// ```
/// use noaa_solar::{noaa, Instant, Location};
///
/// let boulder = Location::new(40.0, -105.0, -6.0).unwrap();
/// let morning = Instant::new(2010, 6, 21, 6, 30, 0).unwrap();
/// let position = noaa::solar_position(&boulder, &morning);
///
/// assert!((position.azimuth() - 66.975).abs() < 1e-3);
/// assert!((position.elevation_angle() - 9.124).abs() < 1e-3);
/// assert!((position.corrected_elevation_angle() - 9.220).abs() < 1e-3);
/// ```
#[must_use]
pub fn solar_position(location: &Location, instant: &Instant) -> SolarPosition {
    position_from_state(&orbital_state(location, instant), instant)
}

/// Calculates sunrise, solar noon, sunset and sunlight duration for a local date-time.
///
/// The times come from the orbital state at the given instant, so they shift by a few
/// seconds over the course of the day.
///
/// # Example
/// ```
/// use noaa_solar::{noaa, Instant, Location};
///
/// let boulder = Location::new(40.0, -105.0, -7.0).unwrap();
/// let instant = Instant::new(2010, 1, 1, 12, 0, 0).unwrap();
/// let times = noaa::solar_time_of_day(&boulder, &instant);
///
/// assert_eq!(times.sunrise().unwrap().to_string(), "7:21:57");
/// assert_eq!(times.solar_noon().to_string(), "12:03:41");
/// assert_eq!(times.sunset().unwrap().to_string(), "16:45:25");
/// ```
#[must_use]
pub fn solar_time_of_day(location: &Location, instant: &Instant) -> SolarTimeOfDay {
    solar_time_of_day_with_orbital_state(&orbital_state(location, instant))
}

/// Calculates both the solar position and the daily events from one orbital state.
#[must_use]
pub fn solar_position_and_time(
    location: &Location,
    instant: &Instant,
) -> (SolarPosition, SolarTimeOfDay) {
    let state = orbital_state(location, instant);
    (
        position_from_state(&state, instant),
        solar_time_of_day_with_orbital_state(&state),
    )
}

/// Calculates the solar position for a time of day using a precomputed orbital state.
///
/// Only the time of day of `instant` is used; the date-dependent quantities come from
/// `state`. For the instant the state was built from, the result equals
/// [`solar_position`]. For other times on the same date it differs by the orbital motion
/// between the two instants, well below the accuracy of the method for a few hours.
///
/// # Errors
/// Returns error if `instant` is not on the calendar date the state was built for.
///
/// # Example
/// ```
/// use noaa_solar::{noaa, Instant, Location};
///
/// let location = Location::new(48.21, 16.37, 1.0).unwrap();
/// let noon = Instant::new(2024, 3, 20, 12, 0, 0).unwrap();
/// let state = noaa::orbital_state(&location, &noon);
///
/// for hour in 6..=18 {
///     let instant = noon.with_time(hour, 0, 0).unwrap();
///     let position = noaa::solar_position_with_orbital_state(&state, &instant).unwrap();
///     assert!(position.azimuth() < 360.0);
/// }
///
/// let next_day = noon.next_day().unwrap();
/// assert!(noaa::solar_position_with_orbital_state(&state, &next_day).is_err());
/// ```
pub fn solar_position_with_orbital_state(
    state: &OrbitalState,
    instant: &Instant,
) -> Result<SolarPosition> {
    if !state.instant.same_date(instant) {
        debug!(
            "rejecting orbital state for {} at {instant} on a different date",
            state.instant
        );
        return Err(Error::invalid_datetime(
            "instant is not on the orbital state's date",
        ));
    }
    Ok(position_from_state(state, instant))
}

/// Branch B of the calculation: position for the time of day of `instant`.
fn position_from_state(state: &OrbitalState, instant: &Instant) -> SolarPosition {
    let location = &state.location;
    let latitude = degrees_to_radians(location.latitude());
    let declination = state.declination_radians;

    let true_solar_time = (instant.minutes_since_midnight()
        + state.equation_of_time
        + 4.0 * location.longitude()
        - 60.0 * location.utc_offset_hours())
        % MINUTES_PER_DAY;
    let hour_angle = if true_solar_time < 0.0 {
        true_solar_time / 4.0 + 180.0
    } else {
        true_solar_time / 4.0 - 180.0
    };

    let cos_zenith = sin(latitude) * sin(declination)
        + cos(latitude) * cos(declination) * cos(degrees_to_radians(hour_angle));
    let zenith = acos(clamp_unit(cos_zenith));
    let elevation = 90.0 - radians_to_degrees(zenith);
    let corrected_elevation = elevation + atmospheric_refraction(elevation);

    let azimuth = solar_azimuth(location.latitude(), declination, zenith, hour_angle);

    SolarPosition::from_parts(azimuth, elevation, corrected_elevation)
}

/// Azimuth in degrees clockwise from north.
fn solar_azimuth(latitude_degrees: f64, declination: f64, zenith: f64, hour_angle: f64) -> f64 {
    let latitude = degrees_to_radians(latitude_degrees);
    let denominator = cos(latitude) * sin(zenith);

    // At the poles, or with the sun at zenith or nadir, every direction is equivalent
    if denominator.abs() < AZIMUTH_SINGULARITY_THRESHOLD {
        let azimuth = if latitude_degrees >= 0.0 { 180.0 } else { 0.0 };
        debug!(
            "azimuth undefined at latitude {latitude_degrees}, zenith {:.9}°; using {azimuth}°",
            radians_to_degrees(zenith)
        );
        return azimuth;
    }

    let cos_azimuth = (sin(latitude) * cos(zenith) - sin(declination)) / denominator;
    let azimuth = radians_to_degrees(acos(clamp_unit(cos_azimuth)));

    if hour_angle > 0.0 {
        (azimuth + 180.0) % 360.0
    } else {
        (540.0 - azimuth) % 360.0
    }
}

/// Calculates the daily solar events from a precomputed orbital state.
///
/// # Example
/// ```
/// use noaa_solar::{noaa, Instant, Location};
///
/// // Tromsø in midsummer
/// let tromso = Location::new(69.65, 18.96, 2.0).unwrap();
/// let midsummer = Instant::new(2024, 6, 21, 12, 0, 0).unwrap();
/// let state = noaa::orbital_state(&tromso, &midsummer);
///
/// let times = noaa::solar_time_of_day_with_orbital_state(&state);
/// assert!(times.is_polar_day());
/// assert_eq!(times.sunlight_duration_minutes(), 1440.0);
/// ```
#[must_use]
pub fn solar_time_of_day_with_orbital_state(state: &OrbitalState) -> SolarTimeOfDay {
    let location = &state.location;
    let noon_minutes = 720.0 - 4.0 * location.longitude() - state.equation_of_time
        + location.utc_offset_hours() * 60.0;
    let solar_noon = DayFraction::from_fraction(noon_minutes / MINUTES_PER_DAY);

    match state.sunrise_hour_angle {
        SunriseHourAngle::Regular(hour_angle) => {
            let half_day = hour_angle * 4.0 / MINUTES_PER_DAY;
            SolarTimeOfDay::RegularDay {
                sunrise: DayFraction::from_fraction(solar_noon.fraction() - half_day),
                solar_noon,
                sunset: DayFraction::from_fraction(solar_noon.fraction() + half_day),
                sunlight_duration_minutes: hour_angle * 8.0,
            }
        }
        SunriseHourAngle::AllDay => SolarTimeOfDay::AllDay { solar_noon },
        SunriseHourAngle::AllNight => SolarTimeOfDay::AllNight { solar_noon },
    }
}

/// Calculates the daily solar events for consecutive calendar days.
///
/// Each day uses the time of day of `start`. The series ends early at 9999-12-31.
///
/// # Arguments
/// * `location` - Observer location and UTC offset
/// * `start` - First day of the series
/// * `days` - Number of days to compute
///
/// # Returns
/// Iterator over `(instant, result)` pairs
///
/// # Example
/// ```
/// use noaa_solar::{noaa, Instant, Location};
///
/// let location = Location::new(40.0, -105.0, -7.0).unwrap();
/// let start = Instant::from_date(2010, 12, 1).unwrap();
///
/// let shortest = noaa::solar_times_for_days(&location, start, 31)
///     .min_by(|(_, a), (_, b)| {
///         a.sunlight_duration_minutes()
///             .total_cmp(&b.sunlight_duration_minutes())
///     })
///     .unwrap();
/// assert_eq!(shortest.0.month(), 12);
/// assert!((19..=23).contains(&shortest.0.day()));
/// ```
pub fn solar_times_for_days(
    location: &Location,
    start: Instant,
    days: usize,
) -> impl Iterator<Item = (Instant, SolarTimeOfDay)> {
    let location = *location;
    core::iter::successors(Some(start), |instant| instant.next_day())
        .take(days)
        .map(move |instant| (instant, solar_time_of_day(&location, &instant)))
}

/// Calculates solar position from a chrono `DateTime`.
///
/// The UTC offset is taken from the datetime itself, so time zones with daylight saving
/// time (e.g. from `chrono-tz`) resolve to the offset in effect at that moment. Sub-second
/// precision is dropped.
///
/// # Errors
/// Returns error for invalid coordinates, an offset beyond ±18 hours, or a year outside
/// 1 to 9999.
///
/// # Example
/// ```rust
/// use noaa_solar::noaa;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2010-01-01T12:00:00-07:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let position = noaa::solar_position_at(datetime, 40.0, -105.0).unwrap();
///
/// assert!((position.azimuth() - 179.047).abs() < 1e-3);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_position_at<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SolarPosition> {
    let (location, instant) = location_and_instant(&datetime, latitude, longitude)?;
    Ok(solar_position(&location, &instant))
}

/// Calculates the daily solar events from a chrono `DateTime`.
///
/// # Errors
/// Returns error for invalid coordinates, an offset beyond ±18 hours, or a year outside
/// 1 to 9999.
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_time_of_day_at<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SolarTimeOfDay> {
    let (location, instant) = location_and_instant(&datetime, latitude, longitude)?;
    Ok(solar_time_of_day(&location, &instant))
}

#[cfg(feature = "chrono")]
fn location_and_instant<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<(Location, Instant)> {
    let offset_seconds = datetime.offset().fix().local_minus_utc();
    let location = Location::new(latitude, longitude, f64::from(offset_seconds) / 3600.0)?;
    let instant = Instant::from_naive_datetime(&datetime.naive_local())?;
    Ok((location, instant))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const POSITION_TOLERANCE_PERCENT: f64 = 0.001;
    const TIME_TOLERANCE_PERCENT: f64 = 0.003;

    fn relative_error_percent(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs() * 100.0
    }

    fn boulder(utc_offset_hours: f64) -> Location {
        Location::new(40.0, -105.0, utc_offset_hours).unwrap()
    }

    #[test]
    fn test_orbital_state_intermediates() {
        let instant = Instant::new(2010, 1, 1, 12, 0, 0).unwrap();
        let state = orbital_state(&boulder(-7.0), &instant);

        assert!((state.julian_date().julian_date() - 2_455_198.291_666_7).abs() < 1e-6);
        assert!((state.julian_century() - 0.100_021_674_652).abs() < 1e-11);
        assert!((state.mean_longitude() - 281.323_750_193).abs() < 1e-8);
        assert!((state.mean_anomaly() - 3_958.214_404_352).abs() < 1e-8);
        assert!((state.eccentricity() - 0.016_704_428_121).abs() < 1e-11);
        assert!((state.equation_of_center() - (-0.060_914_672)).abs() < 1e-8);
        assert!((state.apparent_longitude() - 281.261_590_329).abs() < 1e-8);
        assert!((state.mean_obliquity() - 23.437_990_411).abs() < 1e-8);
        assert!((state.corrected_obliquity() - 23.438_932_165).abs() < 1e-8);
        assert!((state.declination() - (-22.961_508_130)).abs() < 1e-8);
        assert!((state.var_y() - 0.043_033_173_742).abs() < 1e-11);
        assert!((state.equation_of_time() - (-3.685_964_577)).abs() < 1e-8);

        let hour_angle = state.sunrise_hour_angle().degrees().unwrap();
        assert!((hour_angle - 70.433_520_651).abs() < 1e-8);
        assert_eq!(state.location(), &boulder(-7.0));
        assert_eq!(state.instant(), &instant);
    }

    #[test]
    fn test_winter_reference_scenario() {
        let instant = Instant::new(2010, 1, 1, 12, 0, 0).unwrap();
        let (position, times) = solar_position_and_time(&boulder(-7.0), &instant);

        assert!(relative_error_percent(position.azimuth(), 179.047_450_7) <= POSITION_TOLERANCE_PERCENT);
        assert!(relative_error_percent(position.elevation_angle(), 27.032_624) <= POSITION_TOLERANCE_PERCENT);
        assert!(
            relative_error_percent(position.corrected_elevation_angle(), 27.064_108_13)
                <= POSITION_TOLERANCE_PERCENT
        );

        let noon_seconds = f64::from(12 * 3600 + 3 * 60 + 41);
        assert!(relative_error_percent(times.solar_noon().seconds(), noon_seconds) <= TIME_TOLERANCE_PERCENT);
        assert!(
            relative_error_percent(times.sunlight_duration_minutes(), 563.468_165_2)
                <= TIME_TOLERANCE_PERCENT
        );
        assert!(times.is_regular_day());
    }

    #[test]
    fn test_summer_morning_scenario() {
        let instant = Instant::new(2010, 6, 21, 6, 30, 0).unwrap();
        let position = solar_position(&boulder(-6.0), &instant);

        assert!(relative_error_percent(position.azimuth(), 66.975_121_51) <= POSITION_TOLERANCE_PERCENT);
        assert!(relative_error_percent(position.elevation_angle(), 9.124_360_432) <= POSITION_TOLERANCE_PERCENT);
        assert!(
            relative_error_percent(position.corrected_elevation_angle(), 9.220_375_537)
                <= POSITION_TOLERANCE_PERCENT
        );
        assert!(position.is_sun_up());
    }

    #[test]
    fn test_event_ordering_and_duration() {
        let instant = Instant::new(2010, 6, 6, 12, 0, 0).unwrap();
        let times = solar_time_of_day(&boulder(-7.0), &instant);

        let sunrise = times.sunrise().unwrap();
        let sunset = times.sunset().unwrap();
        assert!(sunrise < times.solar_noon());
        assert!(times.solar_noon() < sunset);
        assert!((sunset.minutes() - sunrise.minutes() - times.sunlight_duration_minutes()).abs() < 1e-9);
    }

    #[test]
    fn test_orbital_state_reuse_is_identical() {
        let location = boulder(-6.0);
        let instant = Instant::new(2010, 6, 21, 19, 0, 0).unwrap();
        let state = orbital_state(&location, &instant);

        assert_eq!(
            solar_position_with_orbital_state(&state, &instant).unwrap(),
            solar_position(&location, &instant)
        );
        assert_eq!(
            solar_time_of_day_with_orbital_state(&state),
            solar_time_of_day(&location, &instant)
        );
    }

    #[test]
    fn test_orbital_state_reuse_within_day() {
        let location = boulder(-6.0);
        let morning = Instant::new(2010, 6, 21, 6, 30, 0).unwrap();
        let state = orbital_state(&location, &morning);

        let evening = morning.with_time(19, 0, 0).unwrap();
        let reused = solar_position_with_orbital_state(&state, &evening).unwrap();
        let direct = solar_position(&location, &evening);

        assert!((reused.azimuth() - direct.azimuth()).abs() < 0.05);
        assert!((reused.elevation_angle() - direct.elevation_angle()).abs() < 0.05);
    }

    #[test]
    fn test_orbital_state_rejects_other_dates() {
        let location = boulder(-7.0);
        let midsummer = Instant::new(2010, 6, 21, 12, 0, 0).unwrap();
        let state = orbital_state(&location, &midsummer);

        let midwinter = Instant::new(2010, 12, 21, 12, 0, 0).unwrap();
        let result = solar_position_with_orbital_state(&state, &midwinter);
        assert!(matches!(result, Err(Error::InvalidDateTime { .. })));

        let tomorrow = midsummer.next_day().unwrap();
        assert!(solar_position_with_orbital_state(&state, &tomorrow).is_err());
        let late_evening = midsummer.with_time(23, 59, 59).unwrap();
        assert!(solar_position_with_orbital_state(&state, &late_evening).is_ok());
    }

    #[test]
    fn test_polar_day_and_night() {
        let location = Location::new(70.0, 20.0, 1.0).unwrap();

        let june = Instant::new(2023, 6, 21, 12, 0, 0).unwrap();
        let state = orbital_state(&location, &june);
        assert_eq!(state.sunrise_hour_angle(), SunriseHourAngle::AllDay);
        assert_eq!(state.sunrise_hour_angle().degrees(), None);
        let times = solar_time_of_day_with_orbital_state(&state);
        assert!(times.is_polar_day());
        assert_eq!(times.sunlight_duration_minutes(), 1440.0);
        assert!(times.solar_noon().fraction().is_finite());

        let december = Instant::new(2023, 12, 21, 12, 0, 0).unwrap();
        let times = solar_time_of_day(&location, &december);
        assert!(times.is_polar_night());
        assert_eq!(times.sunlight_duration_minutes(), 0.0);
        assert_eq!(times.sunrise(), None);
    }

    #[test]
    fn test_azimuth_fallback_at_poles() {
        let instant = Instant::new(2023, 6, 21, 9, 0, 0).unwrap();

        let north = solar_position(&Location::new(90.0, 0.0, 0.0).unwrap(), &instant);
        assert_eq!(north.azimuth(), 180.0);
        assert!(north.elevation_angle().is_finite());
        assert!(north.elevation_angle() > 20.0);

        let south = solar_position(&Location::new(-90.0, 0.0, 0.0).unwrap(), &instant);
        assert_eq!(south.azimuth(), 0.0);
        assert!(south.elevation_angle() < -20.0);
    }

    #[test]
    fn test_negative_true_solar_time() {
        // Just after midnight at 105°W with UTC-6 the true solar time is negative
        let instant = Instant::new(2010, 6, 21, 0, 6, 0).unwrap();
        let position = solar_position(&boulder(-6.0), &instant);

        assert!(relative_error_percent(position.azimuth(), 345.869_102_3) <= POSITION_TOLERANCE_PERCENT);
        assert!(
            relative_error_percent(position.elevation_angle(), -25.245_718_49)
                <= POSITION_TOLERANCE_PERCENT
        );
        assert!(position.is_sun_down());
    }

    #[test]
    fn test_solar_times_for_days() {
        let location = boulder(-7.0);
        let start = Instant::new(2010, 12, 30, 12, 0, 0).unwrap();

        assert_eq!(solar_times_for_days(&location, start, 4).count(), 4);
        assert_eq!(solar_times_for_days(&location, start, 4).next().map(|(day, _)| day), Some(start));
        assert_eq!(
            solar_times_for_days(&location, start, 4).nth(2).map(|(day, _)| day),
            Some(Instant::new(2011, 1, 1, 12, 0, 0).unwrap())
        );
        for (instant, times) in solar_times_for_days(&location, start, 4) {
            assert_eq!(times, solar_time_of_day(&location, &instant));
        }

        let end = Instant::new(9999, 12, 30, 0, 0, 0).unwrap();
        assert_eq!(solar_times_for_days(&location, end, 10).count(), 2);
        assert_eq!(solar_times_for_days(&location, start, 0).count(), 0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_adapters() {
        use chrono::{FixedOffset, Utc};

        let datetime = "2010-06-21T13:00:00-06:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let position = solar_position_at(datetime, 40.0, -105.0).unwrap();
        let expected = solar_position(
            &boulder(-6.0),
            &Instant::new(2010, 6, 21, 13, 0, 0).unwrap(),
        );
        assert_eq!(position, expected);

        let times = solar_time_of_day_at(datetime, 40.0, -105.0).unwrap();
        assert_eq!(times.solar_noon().to_string(), "13:01:49");

        // The same moment in UTC gives the same position
        let utc = datetime.with_timezone(&Utc);
        let from_utc = solar_position_at(utc, 40.0, -105.0).unwrap();
        assert!((from_utc.azimuth() - position.azimuth()).abs() < 1e-9);
        assert!((from_utc.elevation_angle() - position.elevation_angle()).abs() < 1e-9);

        assert!(solar_position_at(datetime, 95.0, -105.0).is_err());
        assert!(solar_time_of_day_at(datetime, 40.0, 200.0).is_err());
    }
}
