//! # Kyureki
//!
//! Japanese traditional lunisolar calendar (kyūreki) and rokuyō calculation.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library converts Gregorian calendar dates into the traditional
//! Japanese lunisolar calendar: year, month, intercalary (leap) month flag,
//! and day, plus the six-day rokuyō label. The calendar is computed, not
//! tabulated: truncated series for the ecliptic longitudes of the Sun and
//! Moon drive iterative solvers that locate the solar terms and new moons
//! around the query date, from which the month table is assembled.
//!
//! The computation follows the traditional almanac approximation. Event
//! instants are good to roughly a minute, which is ample for day-level
//! classification, but this is a historical-calendar tool, not a precision
//! ephemeris. Day boundaries are civil days in Japan Standard Time (UTC+9).
//!
//! ## Features
//!
//! - `std` (default): use standard library math
//! - `chrono` (default): enable the `DateTime<Tz>` based convenience API
//! - `libm`: use pure Rust math for `no_std` environments
//!
//! ## Quick Start
//!
//! ### From a Gregorian date
//! ```rust
//! use kyureki::lunisolar;
//!
//! let date = lunisolar::from_gregorian(2023, 6, 1).unwrap();
//! assert_eq!(date.year(), 2023);
//! assert_eq!(date.month(), 4);
//! assert!(!date.is_leap_month());
//! assert_eq!(date.day(), 13);
//! assert_eq!(date.rokuyou().name(), "仏滅");
//! ```
//!
//! ### From a chrono `DateTime`
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use kyureki::lunisolar;
//!
//! let datetime = "2023-04-19T12:00:00+09:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let date = lunisolar::from_datetime(&datetime);
//!
//! // The intercalary second month of 2023
//! assert_eq!(date.month(), 2);
//! assert!(date.is_leap_month());
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use kyureki::{lunisolar, JulianDay};
//!
//! let jd = JulianDay::from_gregorian(2023, 6, 1).unwrap();
//! assert_eq!(jd.value(), 2_460_096.0);
//!
//! let date = lunisolar::from_julian_day(jd);
//! assert_eq!((date.month(), date.day()), (4, 13));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of pinned constants in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::time::JulianDay;
pub use crate::types::{KyurekiDate, Rokuyou};

// Algorithm modules
pub mod lunisolar;
pub mod rokuyou;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod ephemeris;
pub mod time;
