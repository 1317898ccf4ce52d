//! Gridref - Geodetic coordinate conversions
//!
//! This library converts between four interchangeable representations of a
//! position on Earth:
//!
//! - Geographic latitude/longitude (degrees on a reference ellipsoid,
//!   optionally with height above the ellipsoid)
//! - UTM (Universal Transverse Mercator) easting/northing per zone
//! - MGRS (Military Grid Reference System) alphanumeric grid references
//! - ECEF (Earth-Centered, Earth-Fixed) Cartesian coordinates
//!
//! The UTM projection uses Karney's 6th-order Krüger series (Karney, 2011),
//! accurate to well below a millimeter over the UTM coverage area. MGRS is
//! layered on top of UTM; ECEF uses the closed-form forward conversion and
//! Bowring's non-iterative inverse.
//!
//! All conversions are pure functions over immutable value types. They hold
//! no shared state and may be called concurrently without synchronization.
//! Every conversion defaults to the WGS-84 ellipsoid; the `_with` variants
//! accept an alternate [`Ellipsoid`].

pub mod angle;
pub mod ecef;
pub mod ellipsoid;
pub mod error;
pub mod latlon;
pub mod mgrs;
pub mod utm;

pub use angle::{dd_to_dms, dms_to_dd, wrap_360, wrap_angle, wrap_lat, wrap_lon, Dms};
pub use ecef::{
    ecef_to_latlon, ecef_to_latlon_with, format_ecef, latlon_to_ecef, latlon_to_ecef_with,
    EcefCoordinate,
};
pub use ellipsoid::{Ellipsoid, WGS_84};
pub use latlon::LatLonCoordinate;
pub use error::{GeodesyError, GeodesyResult};
pub use mgrs::{
    format_mgrs, latlon_to_mgrs, latlon_to_mgrs_with, mgrs_to_latlon, mgrs_to_latlon_with,
    parse_mgrs_string, MgrsCoordinate,
};
pub use utm::{
    format_utm, latlon_to_utm, latlon_to_utm_with, parse_utm_string, utm_to_latlon,
    utm_to_latlon_with, Hemisphere, UtmCoordinate,
};
