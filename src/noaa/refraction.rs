//! Approximate atmospheric refraction used by the NOAA solar calculator.
//!
//! Piecewise fit in the observed geometric elevation, evaluated in arcseconds and returned
//! in degrees. The three regimes are the high-sun cotangent series, the near-horizon quartic
//! and the below-horizon term.

#![allow(clippy::unreadable_literal)]

use crate::math::{degrees_to_radians, polynomial, powi, tan};

/// Above this elevation refraction is treated as zero.
const NO_REFRACTION_ABOVE: f64 = 85.0;

/// Upper bound of the near-horizon quartic regime.
const HORIZON_FIT_ABOVE: f64 = 5.0;

/// Lower bound of the near-horizon quartic regime.
const HORIZON_FIT_LOWER_BOUND: f64 = -0.575;

/// Near-horizon quartic coefficients in arcseconds, ascending powers of elevation.
const HORIZON_FIT_COEFFS: [f64; 5] = [1735.0, -518.2, 103.4, -12.79, 0.711];

const ARCSECONDS_PER_DEGREE: f64 = 3600.0;

/// Refraction correction in degrees for a geometric solar elevation in degrees.
///
/// Add the result to the geometric elevation to get the apparent elevation. The correction
/// is zero above 85° and positive below it.
///
/// # Example
/// ```
/// use noaa_solar::noaa::refraction::atmospheric_refraction;
///
/// assert_eq!(atmospheric_refraction(89.0), 0.0);
/// // Close to 0.5° at the horizon
/// let at_horizon = atmospheric_refraction(0.0);
/// assert!((at_horizon - 1735.0 / 3600.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn atmospheric_refraction(elevation_degrees: f64) -> f64 {
    if elevation_degrees > NO_REFRACTION_ABOVE {
        return 0.0;
    }

    let te = tan(degrees_to_radians(elevation_degrees));
    let arcseconds = if elevation_degrees > HORIZON_FIT_ABOVE {
        58.1 / te - 0.07 / powi(te, 3) + 0.000086 / powi(te, 5)
    } else if elevation_degrees > HORIZON_FIT_LOWER_BOUND {
        polynomial(&HORIZON_FIT_COEFFS, elevation_degrees)
    } else {
        -20.772 / te
    };

    arcseconds / ARCSECONDS_PER_DEGREE
}
