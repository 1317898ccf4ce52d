//! Earth-Centered Earth-Fixed conversions.
//!
//! ECEF places the origin at the Earth's center of mass with the X axis
//! through the prime meridian at the equator, Y through 90°E, and Z through
//! the north pole. The forward conversion is closed-form; the inverse uses
//! Bowring's (1985) non-iterative approximation, which recovers latitude to
//! sub-millimeter accuracy for positions anywhere near the Earth's surface.

use std::fmt;

use crate::angle::{wrap_lat, wrap_lon};
use crate::ellipsoid::{Ellipsoid, WGS_84};
use crate::latlon::LatLonCoordinate;

/// A position in Earth-Centered Earth-Fixed Cartesian coordinates, in
/// meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EcefCoordinate {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EcefCoordinate {
    /// Create an ECEF coordinate from its components in meters.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for EcefCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_ecef(self))
    }
}

/// Render an ECEF coordinate as `"(x, y, z)"` with millimeter precision.
///
/// # Example
///
/// ```
/// use gridref::{format_ecef, EcefCoordinate};
///
/// let ecef = EcefCoordinate::new(1000.5, 2000.5, 3000.5);
/// assert_eq!(format_ecef(&ecef), "(1000.500, 2000.500, 3000.500)");
/// ```
pub fn format_ecef(ecef: &EcefCoordinate) -> String {
    format!("({:.3}, {:.3}, {:.3})", ecef.x, ecef.y, ecef.z)
}

/// Convert a geographic coordinate and ellipsoidal height to ECEF on the
/// WGS-84 ellipsoid.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees
/// * `lon` - Longitude in degrees
/// * `height` - Height above the ellipsoid in meters
pub fn latlon_to_ecef(lat: f64, lon: f64, height: f64) -> EcefCoordinate {
    latlon_to_ecef_with(lat, lon, height, &WGS_84)
}

/// Convert a geographic coordinate to ECEF on the given ellipsoid.
pub fn latlon_to_ecef_with(lat: f64, lon: f64, height: f64, ellipsoid: &Ellipsoid) -> EcefCoordinate {
    let phi = wrap_lat(lat).to_radians();
    let lambda = wrap_lon(lon).to_radians();

    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_lambda, cos_lambda) = lambda.sin_cos();

    let e2 = ellipsoid.eccentricity_squared();
    // Prime vertical radius of curvature
    let nu = ellipsoid.semi_major_axis / (1.0 - e2 * sin_phi * sin_phi).sqrt();

    EcefCoordinate::new(
        (nu + height) * cos_phi * cos_lambda,
        (nu + height) * cos_phi * sin_lambda,
        (nu * (1.0 - e2) + height) * sin_phi,
    )
}

/// Convert an ECEF position back to geographic coordinates and height on
/// the WGS-84 ellipsoid.
///
/// The returned coordinate always carries a height. Longitude is reported
/// as 0 on the polar axis, where it is undefined.
pub fn ecef_to_latlon(ecef: &EcefCoordinate) -> LatLonCoordinate {
    ecef_to_latlon_with(ecef, &WGS_84)
}

/// Convert an ECEF position back to geographic coordinates on the given
/// ellipsoid.
pub fn ecef_to_latlon_with(ecef: &EcefCoordinate, ellipsoid: &Ellipsoid) -> LatLonCoordinate {
    let a = ellipsoid.semi_major_axis;
    let b = ellipsoid.semi_minor_axis();
    let e2 = ellipsoid.eccentricity_squared();

    // Distance from the polar axis
    let p = (ecef.x * ecef.x + ecef.y * ecef.y).sqrt();

    // Bowring's parametric latitude seed and single correction step
    let e2_prime = (a * a - b * b) / (b * b);
    let theta = (ecef.z * a).atan2(p * b);
    let (sin_theta, cos_theta) = theta.sin_cos();
    let phi = (ecef.z + e2_prime * b * sin_theta.powi(3))
        .atan2(p - e2 * a * cos_theta.powi(3));

    let lambda = ecef.y.atan2(ecef.x);

    // Height from the surface point along the ellipsoid normal; this form
    // stays finite at the poles where the cos(phi) division would not
    let (sin_phi, cos_phi) = phi.sin_cos();
    let height = p * cos_phi + ecef.z * sin_phi - a * (1.0 - e2 * sin_phi * sin_phi).sqrt();

    LatLonCoordinate::with_height(phi.to_degrees(), lambda.to_degrees(), height)
}
