//! Time-related calculations for the lunisolar calendar.
//!
//! This module provides the [`JulianDay`] value type and the conversion
//! between Gregorian calendar dates and Julian Day numbers used by the
//! calendar engine.

#![allow(clippy::unreadable_literal)]

use crate::error::{check_day, check_month};
use crate::math::trunc;
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 TT)
pub(crate) const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
pub(crate) const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds of the JST offset from UTC (+9 hours)
#[cfg(feature = "chrono")]
const JST_OFFSET_SECONDS: i32 = 9 * 3600;

/// A Julian Day value on the calendar engine's time axis.
///
/// The integer part counts civil days in Japan Standard Time (UTC+9), the
/// convention of the traditional almanac formulas; the fractional part is the
/// time of day. Values produced by [`from_gregorian`](Self::from_gregorian)
/// are whole numbers denoting the day as such.
///
/// # Example
/// ```
/// use kyureki::JulianDay;
///
/// let jd = JulianDay::from_gregorian(2023, 6, 1).unwrap();
/// assert_eq!(jd.value(), 2_460_096.0);
/// assert_eq!(jd.to_gregorian(), (2023, 6, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDay {
    value: f64,
}

impl JulianDay {
    /// Creates a Julian Day from a raw floating-point value.
    #[must_use]
    pub const fn from_value(value: f64) -> Self {
        Self { value }
    }

    /// Gets the raw Julian Day value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Creates a Julian Day from a Gregorian calendar date.
    ///
    /// `year` is an astronomical year number (1 BC is `0`, 2 BC is `-1`).
    ///
    /// # Errors
    /// Returns an error if the month is outside 1-12 or the day outside 1-31.
    /// Calendar dates that do not exist (for example April 31) are not
    /// rejected and map onto the adjacent day the arithmetic produces.
    ///
    /// # Example
    /// ```
    /// use kyureki::JulianDay;
    ///
    /// let jd = JulianDay::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(jd.value(), 2_451_544.0);
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self> {
        check_month(month)?;
        check_day(day)?;
        Ok(Self::from_value(calculate_julian_day(year, month, day)))
    }

    /// Creates a Julian Day from a timezone-aware chrono `DateTime`.
    ///
    /// The instant is converted to its civil date in Japan Standard Time
    /// (UTC+9), the day-boundary convention of the calendar engine, and the
    /// resulting value is a whole day number.
    ///
    /// # Example
    /// ```
    /// use chrono::{DateTime, FixedOffset};
    /// use kyureki::JulianDay;
    ///
    /// let datetime = "2023-06-01T09:00:00+09:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// assert_eq!(JulianDay::from_datetime(&datetime).value(), 2_460_096.0);
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let jst = chrono::FixedOffset::east_opt(JST_OFFSET_SECONDS)
            .expect("9-hour offset is a valid fixed offset");
        let local = datetime.with_timezone(&jst);
        Self::from_value(calculate_julian_day(
            local.year(),
            local.month(),
            local.day(),
        ))
    }

    /// Represents the day containing this Julian Day value as a Gregorian
    /// calendar date, in `(year, month, day)` format.
    ///
    /// # Example
    /// ```
    /// use kyureki::JulianDay;
    ///
    /// let jd = JulianDay::from_value(2_460_096.0);
    /// assert_eq!(jd.to_gregorian(), (2023, 6, 1));
    /// ```
    #[must_use]
    pub fn to_gregorian(&self) -> (i32, u32, u32) {
        let jd = self.value;
        let x0 = trunc(jd + 68570.0);
        let x1 = trunc(x0 / 36524.25);
        let x2 = x0 - trunc(36524.25 * x1 + 0.75);
        let x3 = trunc((x2 + 1.0) / 365.2425);
        let x4 = x2 - trunc(365.25 * x3) + 31.0;
        let x5 = trunc(trunc(x4) / 30.59);
        let x6 = trunc(x5 / 11.0);

        let mut day = x4 - trunc(30.59 * x5);
        let month = x5 - 12.0 * x6 + 2.0;
        let year = 100.0 * (x1 - 49.0) + x3 + x6;

        // The inverse polynomial can produce a synthetic February 30
        if month == 2.0 && day > 28.0 {
            day = if is_leap_year(year as i32) { 29.0 } else { 28.0 };
        }

        (year as i32, month as u32, day as u32)
    }
}

/// Calculates the Julian Day number of a Gregorian calendar date.
///
/// January and February are treated as months 13 and 14 of the previous
/// year, the conventional March-based shift.
fn calculate_julian_day(year: i32, month: u32, day: u32) -> f64 {
    let mut y = year;
    let mut m = month as i32;

    if m < 3 {
        y -= 1;
        m += 12;
    }

    let mut jd = trunc(365.25 * f64::from(y));
    jd += trunc(f64::from(y) / 400.0);
    jd -= trunc(f64::from(y) / 100.0);
    jd += trunc(30.59 * (f64::from(m) - 2.0));
    jd += 1721088.0;
    jd += f64::from(day);
    jd
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
