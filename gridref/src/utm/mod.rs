//! Universal Transverse Mercator conversions.
//!
//! Converts geographic coordinates to and from UTM easting/northing using
//! Karney's 6th-order Krüger series, accurate to well under a millimeter
//! over the UTM coverage area of [-80, 84] degrees latitude. The forward
//! conversion reproduces the two irregular zone assignments in real-world
//! use: the Norway exception (zone 32 widened over southwest Norway) and the
//! Svalbard exceptions (zones 31/33/35/37 covering 72-84°N east of
//! Greenwich).

mod karney;
mod parse;

pub use parse::{format_utm, parse_utm_string};

use crate::angle::{wrap_lat, wrap_lon};
use crate::ellipsoid::{Ellipsoid, WGS_84};
use crate::error::{GeodesyError, GeodesyResult};
use crate::latlon::LatLonCoordinate;
use karney::KrugerSeries;

use std::fmt;

/// Southern limit of UTM coverage in degrees latitude.
pub const UTM_MIN_LAT: f64 = -80.0;
/// Northern limit of UTM coverage in degrees latitude.
pub const UTM_MAX_LAT: f64 = 84.0;

/// Scale factor on the central meridian.
const K0: f64 = 0.9996;
/// False easting applied to every zone, in meters.
const FALSE_EASTING: f64 = 500_000.0;
/// False northing applied in the southern hemisphere, in meters.
const FALSE_NORTHING: f64 = 10_000_000.0;

/// Hemisphere of a UTM coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// True for the northern hemisphere.
    pub fn is_northern(&self) -> bool {
        matches!(self, Hemisphere::North)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hemisphere::North => write!(f, "N"),
            Hemisphere::South => write!(f, "S"),
        }
    }
}

impl TryFrom<char> for Hemisphere {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Hemisphere::North),
            'S' => Ok(Hemisphere::South),
            other => Err(other),
        }
    }
}

/// A UTM coordinate: easting/northing in meters within a numbered zone.
///
/// Easting carries the 500 000 m false origin; northing carries the
/// 10 000 000 m false origin in the southern hemisphere, so both are always
/// non-negative. The zone invariant (1-60) is enforced by the conversion and
/// parsing functions that produce values of this type, not by the
/// constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoordinate {
    /// Easting in meters, including the false easting.
    pub easting: f64,
    /// Northing in meters, including the false northing when southern.
    pub northing: f64,
    /// Zone number, 1-60.
    pub zone: u8,
    /// Hemisphere the coordinate lies in.
    pub hemisphere: Hemisphere,
}

impl UtmCoordinate {
    /// Create a UTM coordinate from its parts.
    pub fn new(easting: f64, northing: f64, zone: u8, hemisphere: Hemisphere) -> Self {
        Self {
            easting,
            northing,
            zone,
            hemisphere,
        }
    }
}

impl fmt::Display for UtmCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_utm(self))
    }
}

/// Compute the UTM zone number for a geographic coordinate.
///
/// Applies the regular 6-degree banding plus the two irregular cases:
/// southwest Norway (zone 32 widened to cover 3-12°E between 56°N and 64°N)
/// and Svalbard (zones 31/33/35/37 covering fixed longitude bands between
/// 72°N and 84°N). Inputs must already be wrapped to canonical ranges.
pub fn zone_number(lat: f64, lon: f64) -> u8 {
    if (56.0..64.0).contains(&lat) && (3.0..12.0).contains(&lon) {
        return 32;
    }

    if (72.0..=84.0).contains(&lat) && lon >= 0.0 {
        if lon < 9.0 {
            return 31;
        }
        if lon < 21.0 {
            return 33;
        }
        if lon < 33.0 {
            return 35;
        }
        if lon < 42.0 {
            return 37;
        }
    }

    // lon == 180 belongs to the easternmost zone rather than a phantom 61
    (((lon + 180.0) / 6.0).floor() as u8 + 1).min(60)
}

/// Central meridian of a UTM zone, in degrees.
pub fn central_meridian(zone: u8) -> f64 {
    (zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
}

/// Convert a geographic coordinate to UTM on the WGS-84 ellipsoid.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees; must fall in [-80, 84] after wrapping
/// * `lon` - Longitude in degrees; any value, normalized to [-180, 180]
///
/// # Returns
///
/// The UTM coordinate, or a range error when the latitude is outside UTM
/// coverage.
///
/// # Example
///
/// ```
/// use gridref::latlon_to_utm;
///
/// let utm = latlon_to_utm(0.0, 0.0).unwrap();
/// assert_eq!(utm.zone, 31);
/// assert!((utm.easting - 166_021.0).abs() < 1.0);
/// ```
pub fn latlon_to_utm(lat: f64, lon: f64) -> GeodesyResult<UtmCoordinate> {
    latlon_to_utm_with(lat, lon, &WGS_84)
}

/// Convert a geographic coordinate to UTM on the given ellipsoid.
pub fn latlon_to_utm_with(lat: f64, lon: f64, ellipsoid: &Ellipsoid) -> GeodesyResult<UtmCoordinate> {
    let lat = wrap_lat(lat);
    let lon = wrap_lon(lon);

    if !(UTM_MIN_LAT..=UTM_MAX_LAT).contains(&lat) {
        return Err(GeodesyError::LatitudeOutsideUtmCoverage(lat));
    }

    let zone = zone_number(lat, lon);

    let phi = lat.to_radians();
    // Longitude relative to the central meridian; wrapped so points on the
    // date line project against zone 60 rather than a 357-degree offset
    let lambda = wrap_lon(lon - central_meridian(zone)).to_radians();

    let series = KrugerSeries::new(ellipsoid);

    // Conformal latitude tangent (Karney Eqs. 7-9)
    let tau = phi.tan();
    let tau_prime = series.tau_to_tau_prime(tau);

    // Intermediate conformal coordinates (Karney Eq. 10)
    let (sin_lambda, cos_lambda) = lambda.sin_cos();
    let xi_prime = tau_prime.atan2(cos_lambda);
    let eta_prime =
        (sin_lambda / (tau_prime * tau_prime + cos_lambda * cos_lambda).sqrt()).asinh();

    let (xi, eta) = series.forward(xi_prime, eta_prime);

    // Easting and northing in the central-meridian-relative frame
    // (Karney Eq. 13)
    let scale = K0 * series.rectifying_radius;
    let easting = scale * eta + FALSE_EASTING;
    let mut northing = scale * xi;
    if northing < 0.0 {
        northing += FALSE_NORTHING;
    }

    let hemisphere = if lat >= 0.0 {
        Hemisphere::North
    } else {
        Hemisphere::South
    };

    Ok(UtmCoordinate::new(easting, northing, zone, hemisphere))
}

/// Convert a UTM coordinate back to geographic latitude/longitude on the
/// WGS-84 ellipsoid.
///
/// The returned coordinate carries no height. Fails only when the internal
/// latitude-recovery iteration does not converge, which cannot happen for
/// any coordinate produced by [`latlon_to_utm`].
pub fn utm_to_latlon(utm: &UtmCoordinate) -> GeodesyResult<LatLonCoordinate> {
    utm_to_latlon_with(utm, &WGS_84)
}

/// Convert a UTM coordinate back to geographic coordinates on the given
/// ellipsoid.
pub fn utm_to_latlon_with(
    utm: &UtmCoordinate,
    ellipsoid: &Ellipsoid,
) -> GeodesyResult<LatLonCoordinate> {
    let x = utm.easting - FALSE_EASTING;
    let y = if utm.hemisphere.is_northern() {
        utm.northing
    } else {
        utm.northing - FALSE_NORTHING
    };

    let series = KrugerSeries::new(ellipsoid);
    let scale = K0 * series.rectifying_radius;

    // (Karney Eq. 15)
    let xi = y / scale;
    let eta = x / scale;

    let (xi_prime, eta_prime) = series.inverse(xi, eta);

    // (Karney Eq. 18)
    let sinh_eta = eta_prime.sinh();
    let (sin_xi, cos_xi) = xi_prime.sin_cos();
    let tau_prime = sin_xi / (sinh_eta * sinh_eta + cos_xi * cos_xi).sqrt();
    let lambda = sinh_eta.atan2(cos_xi);

    // Recover the geodetic latitude (Karney Eqs. 19-22)
    let tau = series.tau_prime_to_tau(tau_prime)?;

    let lat = tau.atan().to_degrees();
    let lon = wrap_lon(central_meridian(utm.zone) + lambda.to_degrees());

    Ok(LatLonCoordinate::new(lat, lon))
}
