//! Reference ellipsoid model.
//!
//! An ellipsoid is defined by its semi-major axis and flattening; everything
//! else the conversions need (semi-minor axis, eccentricity, third
//! flattening) is derived. A flattening of zero models a perfect sphere and
//! every conversion in this crate remains well-defined for it.

/// The WGS-84 reference ellipsoid, the default for all conversions.
pub const WGS_84: Ellipsoid = Ellipsoid {
    semi_major_axis: 6_378_137.0,
    flattening: 1.0 / 298.257_223_563,
};

/// A reference ellipsoid: an oblate spheroid modelling Earth's shape.
///
/// Inputs are not validated; a caller supplying a degenerate ellipsoid
/// (negative flattening, zero radius) gets the arithmetic it asked for.
///
/// # Example
///
/// ```
/// use gridref::Ellipsoid;
///
/// let grs80 = Ellipsoid::new(6_378_137.0, 1.0 / 298.257222101);
/// assert!((grs80.semi_minor_axis() - 6_356_752.314).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Equatorial radius in meters.
    pub semi_major_axis: f64,
    /// Flattening, in [0, 1). Zero models a perfect sphere.
    pub flattening: f64,
}

impl Ellipsoid {
    /// Create an ellipsoid from semi-major axis (meters) and flattening.
    pub const fn new(semi_major_axis: f64, flattening: f64) -> Self {
        Self {
            semi_major_axis,
            flattening,
        }
    }

    /// Polar radius in meters: `a * (1 - f)`.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.flattening)
    }

    /// First eccentricity squared: `e² = f * (2 - f)`.
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// First eccentricity: `e = sqrt(f * (2 - f))`.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }

    /// Third flattening: `n = f / (2 - f)`.
    pub fn third_flattening(&self) -> f64 {
        self.flattening / (2.0 - self.flattening)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS_84
    }
}
