//! MGRS string formatting and parsing.
//!
//! References are written without separators, e.g. `"18TWL8395907523"`, but
//! the parser also accepts internal whitespace (`"18T WL 83959 07523"`) and
//! lowercase letters. Precision is the digit count per axis: 5 digits is
//! 1 m, 1 digit is 10 km. Formatting at reduced precision truncates the
//! stored digits, matching the truncating nature of the grid itself.

use std::str::FromStr;

use crate::error::{GeodesyError, GeodesyResult};

use super::letters::band_index;
use super::MgrsCoordinate;

/// Render an MGRS reference at the given precision (digits per axis, 1-5).
///
/// # Example
///
/// ```
/// use gridref::{format_mgrs, MgrsCoordinate};
///
/// let mgrs = MgrsCoordinate::new(18, 'T', ['W', 'K'], 83_959, 7_523);
/// assert_eq!(format_mgrs(&mgrs, 5).unwrap(), "18TWK8395907523");
/// assert_eq!(format_mgrs(&mgrs, 2).unwrap(), "18TWK8307");
/// ```
pub fn format_mgrs(mgrs: &MgrsCoordinate, precision: u8) -> GeodesyResult<String> {
    if !(1..=5).contains(&precision) {
        return Err(GeodesyError::InvalidPrecision(precision));
    }

    let divisor = 10_u32.pow(5 - precision as u32);
    let width = precision as usize;
    Ok(format!(
        "{}{}{}{}{:0width$}{:0width$}",
        mgrs.zone,
        mgrs.band,
        mgrs.square[0],
        mgrs.square[1],
        mgrs.easting / divisor,
        mgrs.northing / divisor,
    ))
}

/// Parse an MGRS reference from a string.
///
/// Whitespace is ignored and letters may be lowercase. The numeric tail may
/// be empty (grid-square precision) or hold 1 to 5 digits per axis; shorter
/// digit groups are scaled up to meters, so `"18TWK89"` places the point at
/// easting 80 000 and northing 90 000 within the square.
pub fn parse_mgrs_string(input: &str) -> GeodesyResult<MgrsCoordinate> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let zone_digits: String = compact.chars().take_while(|c| c.is_ascii_digit()).collect();
    if zone_digits.is_empty() {
        return Err(GeodesyError::InvalidZoneDigits(compact));
    }
    let zone: i64 = zone_digits
        .parse()
        .map_err(|_| GeodesyError::InvalidZoneDigits(zone_digits.clone()))?;
    if !(1..=60).contains(&zone) {
        return Err(GeodesyError::ZoneOutOfRange(zone));
    }

    let rest = &compact[zone_digits.len()..];
    let mut letters = rest.chars();
    let band = letters.next();
    let col = letters.next();
    let row = letters.next();
    let (band, col, row) = match (band, col, row) {
        (Some(b), Some(c), Some(r)) => (b, c, r),
        _ => return Err(GeodesyError::MgrsTooShort(compact.clone())),
    };

    band_index(band)?;
    if !col.is_ascii_alphabetic() || !row.is_ascii_alphabetic() {
        return Err(GeodesyError::InvalidGridSquare {
            square: format!("{}{}", col, row),
            zone: zone as u8,
        });
    }

    let digits = &rest[3..];
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(GeodesyError::InvalidMgrsDigits(digits.to_string()));
    }
    if digits.len() % 2 != 0 {
        return Err(GeodesyError::UnevenMgrsDigits(digits.len()));
    }
    let precision = digits.len() / 2;
    if precision > 5 {
        return Err(GeodesyError::InvalidPrecision(precision as u8));
    }

    // Scale truncated digits up to meters within the 100 km square
    let scale = 10_u32.pow(5 - precision as u32);
    let (easting, northing) = if precision == 0 {
        (0, 0)
    } else {
        let easting: u32 = digits[..precision]
            .parse()
            .map_err(|_| GeodesyError::InvalidMgrsDigits(digits.to_string()))?;
        let northing: u32 = digits[precision..]
            .parse()
            .map_err(|_| GeodesyError::InvalidMgrsDigits(digits.to_string()))?;
        (easting * scale, northing * scale)
    };

    Ok(MgrsCoordinate::new(
        zone as u8,
        band,
        [col, row],
        easting,
        northing,
    ))
}

impl FromStr for MgrsCoordinate {
    type Err = GeodesyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mgrs_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MgrsCoordinate {
        MgrsCoordinate::new(18, 'T', ['W', 'K'], 83_959, 7_523)
    }

    #[test]
    fn test_format_full_precision() {
        assert_eq!(format_mgrs(&sample(), 5).unwrap(), "18TWK8395907523");
    }

    #[test]
    fn test_format_reduced_precision() {
        assert_eq!(format_mgrs(&sample(), 4).unwrap(), "18TWK83950752");
        assert_eq!(format_mgrs(&sample(), 3).unwrap(), "18TWK839075");
        assert_eq!(format_mgrs(&sample(), 2).unwrap(), "18TWK8307");
        assert_eq!(format_mgrs(&sample(), 1).unwrap(), "18TWK80");
    }

    #[test]
    fn test_format_zero_pads() {
        let mgrs = MgrsCoordinate::new(18, 'T', ['W', 'K'], 959, 23);
        assert_eq!(format_mgrs(&mgrs, 5).unwrap(), "18TWK0095900023");
    }

    #[test]
    fn test_format_precision_lengths() {
        for precision in 1..=5u8 {
            let s = format_mgrs(&sample(), precision).unwrap();
            // Each precision step adds one digit per axis
            assert_eq!(s.len(), 4 + 2 * precision as usize);
        }
    }

    #[test]
    fn test_format_invalid_precision() {
        assert!(matches!(
            format_mgrs(&sample(), 0),
            Err(GeodesyError::InvalidPrecision(0))
        ));
        assert!(matches!(
            format_mgrs(&sample(), 6),
            Err(GeodesyError::InvalidPrecision(6))
        ));
    }

    #[test]
    fn test_display_is_full_precision() {
        assert_eq!(sample().to_string(), "18TWK8395907523");
    }

    #[test]
    fn test_parse_compact() {
        let mgrs = parse_mgrs_string("18TWK8395907523").unwrap();
        assert_eq!(mgrs, sample());
    }

    #[test]
    fn test_parse_with_spaces() {
        let mgrs = parse_mgrs_string("18T WK 83959 07523").unwrap();
        assert_eq!(mgrs, sample());
    }

    #[test]
    fn test_parse_lowercase() {
        let mgrs = parse_mgrs_string("18twk8395907523").unwrap();
        assert_eq!(mgrs, sample());
    }

    #[test]
    fn test_parse_scales_low_precision() {
        let mgrs = parse_mgrs_string("18TWK89").unwrap();
        assert_eq!(mgrs.easting, 80_000);
        assert_eq!(mgrs.northing, 90_000);
    }

    #[test]
    fn test_parse_square_only() {
        let mgrs = parse_mgrs_string("18TWK").unwrap();
        assert_eq!(mgrs.easting, 0);
        assert_eq!(mgrs.northing, 0);
    }

    #[test]
    fn test_parse_single_digit_zone() {
        let mgrs = parse_mgrs_string("4QFJ1234").unwrap();
        assert_eq!(mgrs.zone, 4);
        assert_eq!(mgrs.band, 'Q');
        assert_eq!(mgrs.square, ['F', 'J']);
    }

    #[test]
    fn test_parse_format_roundtrip() {
        let s = format_mgrs(&sample(), 5).unwrap();
        assert_eq!(parse_mgrs_string(&s).unwrap(), sample());
    }

    #[test]
    fn test_parse_too_short() {
        let err = parse_mgrs_string("18T").unwrap_err();
        assert!(matches!(err, GeodesyError::MgrsTooShort(_)));
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn test_parse_zone_out_of_range() {
        let err = parse_mgrs_string("99TWK12345").unwrap_err();
        assert!(matches!(err, GeodesyError::ZoneOutOfRange(99)));
        assert!(err.to_string().contains("Zone must be"));
    }

    #[test]
    fn test_parse_zone_zero() {
        assert!(matches!(
            parse_mgrs_string("0TWK12345"),
            Err(GeodesyError::ZoneOutOfRange(0))
        ));
    }

    #[test]
    fn test_parse_missing_zone() {
        assert!(matches!(
            parse_mgrs_string("TWK12345"),
            Err(GeodesyError::InvalidZoneDigits(_))
        ));
    }

    #[test]
    fn test_parse_invalid_band() {
        let err = parse_mgrs_string("18AWK12345").unwrap_err();
        assert!(matches!(err, GeodesyError::InvalidLatitudeBand('A')));
        assert!(err.to_string().contains("Invalid latitude band"));
    }

    #[test]
    fn test_parse_odd_digit_count() {
        let err = parse_mgrs_string("18TWK123").unwrap_err();
        assert!(matches!(err, GeodesyError::UnevenMgrsDigits(3)));
        assert!(err.to_string().contains("equal length"));
    }

    #[test]
    fn test_parse_non_digit_tail() {
        assert!(matches!(
            parse_mgrs_string("18TWK12AB5"),
            Err(GeodesyError::InvalidMgrsDigits(_))
        ));
    }

    #[test]
    fn test_parse_too_many_digits() {
        assert!(matches!(
            parse_mgrs_string("18TWK123456123456"),
            Err(GeodesyError::InvalidPrecision(6))
        ));
    }

    #[test]
    fn test_from_str() {
        let mgrs: MgrsCoordinate = "18TWK8395907523".parse().unwrap();
        assert_eq!(mgrs, sample());
    }
}
