//! UTM string formatting and parsing.
//!
//! The canonical format is `"18N 583960E 4507523N"`: zone and hemisphere
//! fused, then easting and northing rounded to whole meters with axis
//! suffixes. Parsing is deliberately forgiving and accepts lowercase input,
//! repeated whitespace, a hemisphere letter separated from the zone digits,
//! and missing axis suffixes.

use std::str::FromStr;

use crate::error::{GeodesyError, GeodesyResult};

use super::{Hemisphere, UtmCoordinate};

/// Render a UTM coordinate in the canonical string format.
///
/// Easting and northing are rounded to the nearest meter.
///
/// # Example
///
/// ```
/// use gridref::{format_utm, Hemisphere, UtmCoordinate};
///
/// let utm = UtmCoordinate::new(583_960.38, 4_507_523.22, 18, Hemisphere::North);
/// assert_eq!(format_utm(&utm), "18N 583960E 4507523N");
/// ```
pub fn format_utm(utm: &UtmCoordinate) -> String {
    format!(
        "{}{} {:.0}E {:.0}N",
        utm.zone, utm.hemisphere, utm.easting, utm.northing
    )
}

/// Parse a UTM coordinate from a string.
///
/// Accepts the canonical format along with relaxed variants:
///
/// * lowercase letters: `"18n 583960e 4507523n"`
/// * missing axis suffixes: `"18N 583960 4507523"`
/// * hemisphere separated from the zone: `"18 N 583960 4507523"`
/// * axis suffixes separated from their numbers: `"18 N 583960 E 4507523 N"`
/// * surrounding and repeated whitespace
///
/// The hemisphere letter is required; easting must lie in (0, 1 000 000)
/// and northing in [0, 10 000 000].
pub fn parse_utm_string(input: &str) -> GeodesyResult<UtmCoordinate> {
    // Fold lone letter tokens (detached hemisphere or E/N suffixes) back
    // onto the preceding token, so "18 N 583960 E 4507523 N" tokenizes the
    // same as "18N 583960E 4507523N"
    let mut tokens: Vec<String> = Vec::new();
    for raw in input.split_whitespace() {
        let lone_letter = raw.len() == 1 && raw.chars().all(|c| c.is_ascii_alphabetic());
        match tokens.last_mut() {
            Some(prev) if lone_letter => prev.push_str(raw),
            _ => tokens.push(raw.to_string()),
        }
    }

    if tokens.len() != 3 {
        return Err(GeodesyError::InvalidUtmFormat(input.trim().to_string()));
    }

    let (zone, hemisphere) = parse_zone_token(&tokens[0], input)?;
    let easting = parse_axis_token(&tokens[1], 'E', &tokens[1], &tokens[2])?;
    let northing = parse_axis_token(&tokens[2], 'N', &tokens[1], &tokens[2])?;

    if easting <= 0.0 || easting >= 1_000_000.0 || !(0.0..=10_000_000.0).contains(&northing) {
        return Err(GeodesyError::EastingNorthingOutOfRange { easting, northing });
    }

    Ok(UtmCoordinate::new(easting, northing, zone, hemisphere))
}

fn parse_zone_token(token: &str, input: &str) -> GeodesyResult<(u8, Hemisphere)> {
    let last = token
        .chars()
        .last()
        .ok_or_else(|| GeodesyError::InvalidUtmFormat(input.trim().to_string()))?;

    let hemisphere = Hemisphere::try_from(last)
        .map_err(|_| GeodesyError::MissingHemisphere(token.to_string()))?;

    let digits = &token[..token.len() - last.len_utf8()];
    let zone: i64 = digits
        .parse()
        .map_err(|_| GeodesyError::InvalidZoneDigits(token.to_string()))?;

    if !(1..=60).contains(&zone) {
        return Err(GeodesyError::ZoneOutOfRange(zone));
    }

    Ok((zone as u8, hemisphere))
}

fn parse_axis_token(
    token: &str,
    suffix: char,
    easting_token: &str,
    northing_token: &str,
) -> GeodesyResult<f64> {
    let digits = token
        .strip_suffix(suffix)
        .or_else(|| token.strip_suffix(suffix.to_ascii_lowercase()))
        .unwrap_or(token);

    digits
        .parse()
        .map_err(|_| GeodesyError::InvalidCoordinateDigits {
            easting: easting_token.to_string(),
            northing: northing_token.to_string(),
        })
}

impl FromStr for UtmCoordinate {
    type Err = GeodesyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_utm_string(s)
    }
}
