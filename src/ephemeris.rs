//! Truncated series for the apparent ecliptic longitudes of the Sun and Moon.
//!
//! These are the classical low-precision series used by traditional almanac
//! computation: a handful of periodic cosine terms on top of a linear mean
//! longitude. Accuracy is on the order of a minute of time for the event
//! instants derived from them, which is what the historical calendar needs,
//! far short of a modern ephemeris.
//!
//! The independent variable `t` is Julian centuries of dynamical time since
//! the J2000.0 epoch.

#![allow(clippy::unreadable_literal)]

use crate::math::{cos, degrees_to_radians, normalize_degrees_0_to_360};

/// Periodic terms of the solar longitude series.
///
/// Each row is `[rate, phase, amplitude]`: the term contributes
/// `amplitude * cos(rate * t + phase)` degrees. The coefficients are fixed
/// empirical constants and are reproduced verbatim, in their traditional
/// order.
const SOLAR_PERIODIC_TERMS: [[f64; 3]; 15] = [
    [31557.0, 161.0, 0.0004],
    [29930.0, 48.0, 0.0004],
    [2281.0, 221.0, 0.0005],
    [155.0, 118.0, 0.0005],
    [33718.0, 316.0, 0.0006],
    [9038.0, 64.0, 0.0007],
    [3035.0, 110.0, 0.0007],
    [65929.0, 45.0, 0.0007],
    [22519.0, 352.0, 0.0013],
    [45038.0, 254.0, 0.0015],
    [445267.0, 208.0, 0.0018],
    [19.0, 159.0, 0.0018],
    [32964.0, 158.0, 0.0020],
    [71998.1, 265.1, 0.0200],
    [35999.05, 267.52, 1.9147],
];

/// Mean motion of the Sun in degrees per Julian century.
const SOLAR_MEAN_MOTION: f64 = 36000.7695;

/// Mean longitude of the Sun at the J2000.0 epoch, degrees.
const SOLAR_MEAN_LONGITUDE_AT_EPOCH: f64 = 280.4659;

/// Periodic terms of the lunar longitude series, same layout as
/// [`SOLAR_PERIODIC_TERMS`].
const LUNAR_PERIODIC_TERMS: [[f64; 3]; 6] = [
    [477198.868, 44.963, 6.2888],
    [413335.35, 10.74, 1.2740],
    [890534.22, 145.7, 0.6583],
    [954397.74, 179.93, 0.2136],
    [35999.05, 87.53, 0.1851],
    [966404.0, 276.5, 0.1144],
];

/// Mean motion of the Moon in degrees per Julian century.
const LUNAR_MEAN_MOTION: f64 = 481267.8809;

/// Mean longitude of the Moon at the J2000.0 epoch, degrees.
const LUNAR_MEAN_LONGITUDE_AT_EPOCH: f64 = 218.3162;

/// Calculates the apparent ecliptic longitude of the Sun in degrees [0, 360).
///
/// # Arguments
/// * `t` - Julian centuries of dynamical time since J2000.0
#[must_use]
pub fn solar_longitude(t: f64) -> f64 {
    evaluate_series(
        &SOLAR_PERIODIC_TERMS,
        SOLAR_MEAN_MOTION,
        SOLAR_MEAN_LONGITUDE_AT_EPOCH,
        t,
    )
}

/// Calculates the apparent ecliptic longitude of the Moon in degrees [0, 360).
///
/// # Arguments
/// * `t` - Julian centuries of dynamical time since J2000.0
#[must_use]
pub fn lunar_longitude(t: f64) -> f64 {
    evaluate_series(
        &LUNAR_PERIODIC_TERMS,
        LUNAR_MEAN_MOTION,
        LUNAR_MEAN_LONGITUDE_AT_EPOCH,
        t,
    )
}

/// Sums the periodic terms, adds the mean longitude, and normalizes.
fn evaluate_series(
    terms: &[[f64; 3]],
    mean_motion: f64,
    mean_longitude_at_epoch: f64,
    t: f64,
) -> f64 {
    let mut total = 0.0;
    for &[rate, phase, amplitude] in terms {
        let angle = normalize_degrees_0_to_360(rate * t + phase);
        total += amplitude * cos(degrees_to_radians(angle));
    }

    let mean = normalize_degrees_0_to_360(mean_motion * t);
    let mean = normalize_degrees_0_to_360(mean + mean_longitude_at_epoch);
    normalize_degrees_0_to_360(total + mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-8;

    #[test]
    fn test_solar_longitude_reference_values() {
        let cases = [
            (0.0, 280.37736249876195),
            (0.1, 280.4509140162597),
            (0.2345, 83.31087475357236),
            (-0.05, 280.34574153601494),
            (0.23456789, 85.6801441115222),
        ];
        for (t, expected) in cases {
            let longitude = solar_longitude(t);
            assert!(
                (longitude - expected).abs() < EPSILON,
                "solar_longitude({t}) = {longitude}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_lunar_longitude_reference_values() {
        let cases = [
            (0.0, 223.28111433415248),
            (0.1, 103.12331240132663),
            (0.2345, 40.96093130375026),
            (-0.05, 277.58722253289403),
            (0.23456789, 72.77857833495493),
        ];
        for (t, expected) in cases {
            let longitude = lunar_longitude(t);
            assert!(
                (longitude - expected).abs() < EPSILON,
                "lunar_longitude({t}) = {longitude}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_longitudes_stay_in_range() {
        let mut t = -1.0;
        while t < 1.0 {
            assert!((0.0..360.0).contains(&solar_longitude(t)));
            assert!((0.0..360.0).contains(&lunar_longitude(t)));
            t += 0.0173;
        }
    }
}
