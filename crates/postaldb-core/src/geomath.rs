// crates/postaldb-core/src/geomath.rs

//! # Geodetic Math
//!
//! Pure functions for arc-degree lengths on the WGS84 ellipsoid and
//! great-circle distance/bearing on a sphere. All inputs are in degrees.
//!
//! Distances come back as angles in radians: multiply by a radius in the
//! unit you want (see [`crate::model::DistanceUnit::earth_radius`]).

use crate::model::Place;
use std::f64::consts::PI;

/// WGS84 earth eccentricity.
pub const EARTH_ECCENTRICITY: f64 = 0.08181919084;

/// WGS84 arithmetic mean radius of the Earth, in metres.
pub const EARTH_MEAN_RADIUS: f64 = 6371008.7714;

/// Length of one degree of longitude at `latitude`.
///
/// `earth_radius` is the equatorial radius in whatever unit the result should
/// be in (6378.137 for kilometres, 3963.191 for miles).
///
/// Uses the east-west radius of curvature `a / sqrt(1 - e^2 sin^2(phi))`.
/// Tends to zero towards the poles.
#[inline]
pub fn lon_arc_degree_length(latitude: f64, earth_radius: f64) -> f64 {
    let lat = latitude.to_radians();
    let e2 = EARTH_ECCENTRICITY.powi(2);
    let roc = earth_radius / (1.0 - e2 * lat.sin().powi(2)).sqrt();
    (PI / 180.0) * lat.cos() * roc
}

/// Length of one degree of latitude at `latitude`.
///
/// Uses the north-south radius of curvature
/// `a (1 - e^2) / (1 - e^2 sin^2(phi))^1.5`.
#[inline]
pub fn lat_arc_degree_length(latitude: f64, earth_radius: f64) -> f64 {
    let lat = latitude.to_radians();
    let e2 = EARTH_ECCENTRICITY.powi(2);
    let roc = earth_radius * (1.0 - e2) / (1.0 - e2 * lat.sin().powi(2)).powf(1.5);
    (PI / 180.0) * roc
}

/// Great-circle distance between two coordinates, as an angle in radians.
///
/// Spherical law of cosines. Identical coordinates are exactly `0.0`; the
/// cosine term is clamped to `[-1, 1]` so that
/// near-identical points yield a real angle rather than `NaN`.
#[inline]
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    if lat1 == lat2 && lon1 == lon2 {
        return 0.0;
    }

    let lat0 = lat1.to_radians();
    let lat1 = lat2.to_radians();
    let lon0 = lon1.to_radians();
    let lon1 = lon2.to_radians();

    let cos_angle = lat0.cos() * lat1.cos() * (lon0 - lon1).cos() + lat0.sin() * lat1.sin();
    cos_angle.clamp(-1.0, 1.0).acos()
}

/// Initial great-circle bearing from `p0` to `p1`, in radians.
///
/// See [`great_circle_direction_coords`].
pub fn great_circle_direction(p0: &Place, p1: &Place) -> f64 {
    great_circle_direction_coords(p0.latitude(), p0.longitude(), p1.latitude(), p1.longitude())
}

/// Initial great-circle bearing between two coordinates, in radians.
///
/// `0` is due north, `pi/2` due east, `-pi/2` due west. The result lies in
/// `(-pi, pi]` except that a bearing of exactly due south (within one ULP of
/// `pi`) is reported as `0`. Identical points also give `0`.
pub fn great_circle_direction_coords(lat0: f64, lon0: f64, lat1: f64, lon1: f64) -> f64 {
    let distance = great_circle_distance(lat0, lon0, lat1, lon1);
    if distance == 0.0 {
        return 0.0;
    }

    let phi0 = lat0.to_radians();
    let phi1 = lat1.to_radians();
    let lambda0 = lon0.to_radians();
    let lambda1 = lon1.to_radians();

    // Rounding can push this just past +-1.
    let value = ((phi1.sin() - phi0.sin() * distance.cos()) / (phi0.cos() * distance.sin()))
        .clamp(-1.0, 1.0);

    let mut direction = value.acos();
    if (lambda1 - lambda0).sin() < 0.0 {
        direction = 2.0 * PI - direction;
    }

    if (direction - PI).abs() <= ulp(PI) {
        0.0
    } else {
        ieee_remainder(direction, 2.0 * PI)
    }
}

/// IEEE 754 remainder: `x - n * y` where `n` is `x / y` rounded half-to-even.
#[inline]
fn ieee_remainder(x: f64, y: f64) -> f64 {
    x - (x / y).round_ties_even() * y
}

/// Distance to the next representable `f64` above `|x|`.
#[inline]
fn ulp(x: f64) -> f64 {
    let x = x.abs();
    f64::from_bits(x.to_bits() + 1) - x
}
