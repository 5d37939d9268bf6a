//! Error types for the lunisolar calendar library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when constructing dates from civil components.
///
/// The numeric core of the library is total: once a [`crate::JulianDay`]
/// exists, every calculation on it succeeds. Errors arise only at the civil
/// calendar boundary, where month and day components have fixed ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid Gregorian date component.
    InvalidDate {
        /// Description of the range violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
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
}

/// Validates a month number is within 1 to 12.
///
/// # Errors
/// Returns `InvalidDate` if the month is outside 1 to 12.
pub fn check_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_date("month must be between 1 and 12"));
    }
    Ok(())
}

/// Validates a day-of-month number is within 1 to 31.
///
/// # Errors
/// Returns `InvalidDate` if the day is outside 1 to 31.
pub fn check_day(day: u32) -> Result<()> {
    if !(1..=31).contains(&day) {
        return Err(Error::invalid_date("day must be between 1 and 31"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_validation() {
        assert!(check_month(1).is_ok());
        assert!(check_month(12).is_ok());

        assert!(check_month(0).is_err());
        assert!(check_month(13).is_err());
    }

    #[test]
    fn test_day_validation() {
        assert!(check_day(1).is_ok());
        assert!(check_day(31).is_ok());

        assert!(check_day(0).is_err());
        assert!(check_day(32).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_date("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date: month must be between 1 and 12"
        );
    }
}
