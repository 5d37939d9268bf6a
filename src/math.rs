//! Mathematical utilities for the lunisolar calendar calculations.

#[cfg(not(feature = "std"))]
use libm;

/// Converts degrees to radians.
#[inline]
pub const fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Normalizes an angle in degrees to the range [0, 360).
pub fn normalize_degrees_0_to_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Truncates x toward zero.
///
/// The calendar formulas convert intermediate floating-point values to whole
/// numbers by truncation, not by flooring. The two differ for negative
/// operands, and the inverse Julian-day polynomial relies on truncation.
#[inline]
pub fn trunc(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.trunc();

    #[cfg(not(feature = "std"))]
    return libm::trunc(x);
}

/// Truncates x toward zero and returns the result as an `i64`.
#[inline]
pub fn trunc_i64(x: f64) -> i64 {
    trunc(x) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degrees_to_radians() {
        assert!((degrees_to_radians(180.0) - core::f64::consts::PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - core::f64::consts::PI / 2.0).abs() < EPSILON);
        assert!(degrees_to_radians(0.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_degrees_0_to_360() {
        assert_eq!(normalize_degrees_0_to_360(0.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(90.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(360.0), 0.0);
        assert_eq!(normalize_degrees_0_to_360(450.0), 90.0);
        assert_eq!(normalize_degrees_0_to_360(-90.0), 270.0);
        assert_eq!(normalize_degrees_0_to_360(-360.0), 0.0);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for x in [-720.5, -1.0, 0.0, 1.5, 359.999, 360.0, 12_345.678] {
            let once = normalize_degrees_0_to_360(x);
            assert!((0.0..360.0).contains(&once));
            assert_eq!(once, normalize_degrees_0_to_360(once));
        }
    }

    #[test]
    fn test_trunc_toward_zero() {
        assert_eq!(trunc(2.9), 2.0);
        assert_eq!(trunc(-2.9), -2.0);
        assert_eq!(trunc(0.0), 0.0);
        assert_eq!(trunc_i64(-0.5), 0);
        assert_eq!(trunc_i64(2_460_096.75), 2_460_096);
        assert_eq!(trunc_i64(-3.999), -3);
    }
}
