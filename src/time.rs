//! Calendar instants and Julian dates.
//!
//! The calculator works on local civil date-times paired with a fixed UTC offset. Days are
//! counted like OLE Automation dates (days since 1899-12-30 00:00, time of day as the
//! fractional part) and shifted onto the Julian day scale from there.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::{Error, Result};
use core::fmt;
#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minutes per day (1,440)
pub(crate) const MINUTES_PER_DAY: f64 = 1_440.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day of the OLE Automation epoch (1899-12-30 00:00:00)
const OLE_EPOCH_JDN: f64 = 2_415_018.5;

/// Earliest supported calendar year.
pub const MIN_YEAR: i32 = 1;

/// Latest supported calendar year.
pub const MAX_YEAR: i32 = 9999;

/// A local calendar date-time without time zone information.
///
/// The instant is interpreted as civil time at whatever UTC offset the caller pairs it with
/// (see [`crate::Location`]). Dates use the proleptic Gregorian calendar for years 1 to 9999.
///
/// # Example
/// ```
/// # use noaa_solar::Instant;
/// let instant = Instant::new(2010, 6, 21, 6, 30, 0).unwrap();
/// assert_eq!(instant.minutes_since_midnight(), 390.0);
/// assert!(Instant::new(2010, 2, 29, 0, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawInstant")
)]
pub struct Instant {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl Instant {
    /// Creates a new instant from calendar and clock fields.
    ///
    /// # Arguments
    /// * `year` - Year (1 to 9999)
    /// * `month` - Month (1-12)
    /// * `day` - Day of month, valid for the month and year
    /// * `hour` - Hour (0-23)
    /// * `minute` - Minute (0-59)
    /// * `second` - Second (0-59)
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if any field is outside its valid range.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::invalid_datetime("year must be between 1 and 9999"));
        }
        if day == 0 || day > days_in_month(year, month)? {
            return Err(Error::invalid_datetime("day is out of range for month"));
        }
        if hour > 23 {
            return Err(Error::invalid_datetime("hour must be between 0 and 23"));
        }
        if minute > 59 {
            return Err(Error::invalid_datetime("minute must be between 0 and 59"));
        }
        if second > 59 {
            return Err(Error::invalid_datetime("second must be between 0 and 59"));
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates an instant at local midnight of the given date.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` for an invalid date.
    pub fn from_date(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Returns the same date at a different time of day.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the clock fields are out of range.
    pub fn with_time(self, hour: u32, minute: u32, second: u32) -> Result<Self> {
        Self::new(self.year, self.month, self.day, hour, minute, second)
    }

    /// Returns the same time of day on the following calendar day.
    ///
    /// Returns `None` past 9999-12-31.
    #[must_use]
    pub fn next_day(self) -> Option<Self> {
        let last_day = days_in_month(self.year, self.month).ok()?;
        let (year, month, day) = if self.day < last_day {
            (self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            (self.year, self.month + 1, 1)
        } else {
            (self.year + 1, 1, 1)
        };
        Self::new(year, month, day, self.hour, self.minute, self.second).ok()
    }

    /// Creates an instant from a chrono `NaiveDateTime`, dropping sub-second precision.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the year is outside 1 to 9999.
    #[cfg(feature = "chrono")]
    pub fn from_naive_datetime(datetime: &NaiveDateTime) -> Result<Self> {
        Self::new(
            datetime.year(),
            datetime.month(),
            datetime.day(),
            datetime.hour(),
            datetime.minute(),
            datetime.second(),
        )
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the hour (0-23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Gets the minute (0-59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Gets the second (0-59).
    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Checks whether both instants fall on the same calendar date.
    #[must_use]
    pub const fn same_date(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }

    /// Seconds elapsed since local midnight.
    #[must_use]
    pub const fn seconds_since_midnight(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }

    /// Minutes elapsed since local midnight, including fractional seconds.
    #[must_use]
    pub fn minutes_since_midnight(&self) -> f64 {
        f64::from(self.seconds_since_midnight()) / 60.0
    }

    /// Elapsed fraction of the local day (0.0 to < 1.0).
    #[must_use]
    pub fn day_fraction(&self) -> f64 {
        f64::from(self.seconds_since_midnight()) / SECONDS_PER_DAY
    }

    /// Continuous days since 1899-12-30 00:00, with the time of day as fractional part.
    ///
    /// Equal to the OLE Automation date from the epoch onward. Before the epoch the count
    /// stays continuous (1899-12-29 18:00 is -0.25), where OLE would store -1.75.
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::Instant;
    /// let instant = Instant::new(2010, 1, 1, 12, 0, 0).unwrap();
    /// assert_eq!(instant.days_since_epoch(), 40179.5);
    /// ```
    #[must_use]
    pub fn days_since_epoch(&self) -> f64 {
        julian_day_at_midnight(self.year, self.month, self.day) - OLE_EPOCH_JDN
            + self.day_fraction()
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<NaiveDateTime> for Instant {
    type Error = Error;

    fn try_from(datetime: NaiveDateTime) -> Result<Self> {
        Self::from_naive_datetime(&datetime)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstant {
    year: i32,
    month: u32,
    day: u32,
    #[serde(default)]
    hour: u32,
    #[serde(default)]
    minute: u32,
    #[serde(default)]
    second: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstant> for Instant {
    type Error = Error;

    fn try_from(raw: RawInstant) -> Result<Self> {
        Self::new(
            raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second,
        )
    }
}

/// Julian date on the UTC time scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    jd: f64,
}

impl JulianDate {
    /// Creates a Julian date from a local instant and its UTC offset in hours.
    ///
    /// JD = days since 1899-12-30 + 2415018.5 - offset / 24
    ///
    /// # Example
    /// ```
    /// # use noaa_solar::{Instant, time::JulianDate};
    /// // 12:00 at UTC-7 is 19:00 UTC
    /// let instant = Instant::new(2010, 1, 1, 12, 0, 0).unwrap();
    /// let jd = JulianDate::from_local(&instant, -7.0);
    /// assert!((jd.julian_date() - 2_455_198.291_666_7).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn from_local(instant: &Instant, utc_offset_hours: f64) -> Self {
        Self {
            jd: instant.days_since_epoch() + OLE_EPOCH_JDN - utc_offset_hours / 24.0,
        }
    }

    /// Wraps a raw Julian date value.
    #[must_use]
    pub const fn from_julian_date(jd: f64) -> Self {
        Self { jd }
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Calculates the Julian Century (JC) from J2000.0.
    ///
    /// JC = (JD - 2451545.0) / 36525
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }
}

/// Julian Day at 00:00 of a proleptic Gregorian calendar date (Meeus, ch. 7).
fn julian_day_at_midnight(year: i32, month: u32, day: u32) -> f64 {
    // January and February count as months 13 and 14 of the previous year
    let (y, m) = if month < 3 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = floor(f64::from(y) / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (f64::from(y) + 4716.0)) + floor(30.6001 * f64::from(m + 1)) + f64::from(day)
        + b
        - 1524.5
}

/// Checks whether a year is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month.
///
/// # Errors
/// Returns `InvalidDateTime` if month is outside 1-12.
///
/// # Example
/// ```
/// # use noaa_solar::time::days_in_month;
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2100, 2).unwrap(), 28);
/// assert!(days_in_month(2024, 13).is_err());
/// ```
pub const fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => return Err(Error::invalid_datetime("month must be between 1 and 12")),
    };
    Ok(days)
}
