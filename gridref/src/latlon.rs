//! Geographic coordinate type.

/// A geographic coordinate: latitude/longitude in degrees with an optional
/// height in meters above the ellipsoid.
///
/// Inverse conversions return this type. Projections that carry no height
/// information (UTM, MGRS) leave `height` as `None`; the ECEF inverse always
/// fills it in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLonCoordinate {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
    /// Height in meters above the ellipsoid, if known.
    pub height: Option<f64>,
}

impl LatLonCoordinate {
    /// Create a coordinate with no height information.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            height: None,
        }
    }

    /// Create a coordinate with a height above the ellipsoid.
    pub fn with_height(lat: f64, lon: f64, height: f64) -> Self {
        Self {
            lat,
            lon,
            height: Some(height),
        }
    }
}
