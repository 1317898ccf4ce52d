//! Military Grid Reference System conversions.
//!
//! An MGRS reference is a UTM coordinate re-expressed as zone, latitude
//! band, 100 km grid square letters, and truncated easting/northing digits.
//! Conversion goes through UTM in both directions: encoding truncates the
//! UTM position into its grid square, and decoding reconstructs the full
//! northing by selecting the 2 000 000 m row-letter repeat that falls inside
//! the latitude band.

mod letters;
mod parse;

pub use parse::{format_mgrs, parse_mgrs_string};

use crate::angle::wrap_lat;
use crate::ellipsoid::{Ellipsoid, WGS_84};
use crate::error::GeodesyResult;
use crate::latlon::LatLonCoordinate;
use crate::utm::{
    central_meridian, latlon_to_utm_with, utm_to_latlon_with, Hemisphere, UtmCoordinate,
};
use letters::{
    band_bottom_latitude, band_for_latitude, band_index, band_is_northern, column_easting,
    column_letter, row_letter, row_northing,
};

use std::fmt;

/// Side length of an MGRS grid square, in meters.
const SQUARE_SIZE: f64 = 100_000.0;
/// Row letters repeat every 2 000 000 m of northing.
const ROW_CYCLE: f64 = 2_000_000.0;

/// An MGRS grid reference at 1-meter resolution.
///
/// `easting` and `northing` are offsets within the 100 km grid square, each
/// in [0, 99999]. Lower-precision references are a formatting concern; the
/// coordinate itself always stores full digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MgrsCoordinate {
    /// Zone number, 1-60.
    pub zone: u8,
    /// Latitude band letter, C-X excluding I and O.
    pub band: char,
    /// 100 km grid square column and row letters.
    pub square: [char; 2],
    /// Easting within the grid square, in meters.
    pub easting: u32,
    /// Northing within the grid square, in meters.
    pub northing: u32,
}

impl MgrsCoordinate {
    /// Create an MGRS coordinate from its parts.
    pub fn new(zone: u8, band: char, square: [char; 2], easting: u32, northing: u32) -> Self {
        Self {
            zone,
            band,
            square,
            easting,
            northing,
        }
    }

}

impl fmt::Display for MgrsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{:05}{:05}",
            self.zone, self.band, self.square[0], self.square[1], self.easting, self.northing
        )
    }
}

/// Convert a geographic coordinate to an MGRS reference on the WGS-84
/// ellipsoid.
///
/// MGRS truncates rather than rounds: the reference names the grid cell the
/// point falls in, so the decoded position is the cell's southwest corner.
///
/// # Example
///
/// ```
/// use gridref::latlon_to_mgrs;
///
/// let mgrs = latlon_to_mgrs(40.7128, -74.0060).unwrap();
/// assert_eq!(mgrs.zone, 18);
/// assert_eq!(mgrs.band, 'T');
/// ```
pub fn latlon_to_mgrs(lat: f64, lon: f64) -> GeodesyResult<MgrsCoordinate> {
    latlon_to_mgrs_with(lat, lon, &WGS_84)
}

/// Convert a geographic coordinate to an MGRS reference on the given
/// ellipsoid.
pub fn latlon_to_mgrs_with(
    lat: f64,
    lon: f64,
    ellipsoid: &Ellipsoid,
) -> GeodesyResult<MgrsCoordinate> {
    let utm = latlon_to_utm_with(lat, lon, ellipsoid)?;
    let band = band_for_latitude(wrap_lat(lat));

    let column = (utm.easting / SQUARE_SIZE).floor() as usize;
    let row = (utm.northing / SQUARE_SIZE).floor() as usize % 20;
    let square = [column_letter(utm.zone, column), row_letter(utm.zone, row)];

    let easting = utm.easting.rem_euclid(SQUARE_SIZE).floor() as u32;
    let northing = utm.northing.rem_euclid(SQUARE_SIZE).floor() as u32;

    Ok(MgrsCoordinate::new(utm.zone, band, square, easting, northing))
}

/// Convert an MGRS reference back to geographic coordinates on the WGS-84
/// ellipsoid.
///
/// Returns the southwest corner of the cell the reference names. Fails when
/// the band or grid square letters are invalid for the zone.
pub fn mgrs_to_latlon(mgrs: &MgrsCoordinate) -> GeodesyResult<LatLonCoordinate> {
    mgrs_to_latlon_with(mgrs, &WGS_84)
}

/// Convert an MGRS reference back to geographic coordinates on the given
/// ellipsoid.
pub fn mgrs_to_latlon_with(
    mgrs: &MgrsCoordinate,
    ellipsoid: &Ellipsoid,
) -> GeodesyResult<LatLonCoordinate> {
    band_index(mgrs.band)?;

    let easting = column_easting(mgrs.zone, mgrs.square[0])? + mgrs.easting as f64;
    let row_base = row_northing(mgrs.zone, mgrs.square[1])? + mgrs.northing as f64;

    // Northing of the band's southern edge, truncated down to a full grid
    // square so the bottommost row of squares stays inside the band
    let band_bottom = band_bottom_latitude(mgrs.band)?;
    let band_utm = latlon_to_utm_with(band_bottom, central_meridian(mgrs.zone), ellipsoid)?;
    let min_northing = (band_utm.northing / SQUARE_SIZE).floor() * SQUARE_SIZE;

    // Row letters repeat every 2 000 000 m; step north until the candidate
    // northing reaches the band
    let mut northing = row_base;
    while northing < min_northing {
        northing += ROW_CYCLE;
    }

    let hemisphere = if band_is_northern(mgrs.band) {
        Hemisphere::North
    } else {
        Hemisphere::South
    };

    let utm = UtmCoordinate::new(easting, northing, mgrs.zone, hemisphere);
    utm_to_latlon_with(&utm, ellipsoid)
}
