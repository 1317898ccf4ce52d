//! MGRS lettering tables.
//!
//! Latitude bands and 100 km grid square letters follow the AA scheme used
//! by NGA and most civilian tooling. The letters I and O never appear, and
//! the column/row alphabets rotate with the zone number so that adjacent
//! zones do not repeat square identifiers.

use crate::error::{GeodesyError, GeodesyResult};

/// Latitude band letters from 80°S northward in 8-degree steps.
///
/// The final X appears twice because band X is 12 degrees tall, covering
/// 72°N to 84°N.
const BAND_LETTERS: &str = "CDEFGHJKLMNPQRSTUVWXX";

/// Column letter alphabets, selected by `(zone - 1) % 3`.
const COLUMN_LETTERS: [&str; 3] = ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"];

/// Row letter alphabets, selected by `(zone - 1) % 2`.
///
/// Odd zones start rows at A on the equator; even zones start at F. Rows
/// repeat every 2 000 000 m of northing.
const ROW_LETTERS: [&str; 2] = ["ABCDEFGHJKLMNPQRSTUV", "FGHJKLMNPQRSTUVABCDE"];

/// Latitude band letter for a latitude in [-80, 84] degrees.
pub fn band_for_latitude(lat: f64) -> char {
    let index = (((lat + 80.0) / 8.0).floor() as usize).min(20);
    BAND_LETTERS.as_bytes()[index] as char
}

/// Index of a band letter within the C-X alphabet, or an error for letters
/// outside it.
pub fn band_index(band: char) -> GeodesyResult<usize> {
    // The duplicate X at index 20 must never win the search
    BAND_LETTERS[..20]
        .find(band.to_ascii_uppercase())
        .ok_or(GeodesyError::InvalidLatitudeBand(band))
}

/// Southern edge of a latitude band, in degrees.
pub fn band_bottom_latitude(band: char) -> GeodesyResult<f64> {
    let index = band_index(band)?;
    Ok((index as f64 - 10.0) * 8.0)
}

/// True when the band lies in the northern hemisphere (N through X).
pub fn band_is_northern(band: char) -> bool {
    band.to_ascii_uppercase() >= 'N'
}

/// Column letter for a 100 km grid square.
///
/// `column` is the easting divided by 100 000 m, which is 1 through 8
/// within a zone.
pub fn column_letter(zone: u8, column: usize) -> char {
    let alphabet = COLUMN_LETTERS[(zone as usize - 1) % 3];
    alphabet.as_bytes()[column - 1] as char
}

/// Easting of the west edge of a grid square column, in meters.
pub fn column_easting(zone: u8, letter: char) -> GeodesyResult<f64> {
    let alphabet = COLUMN_LETTERS[(zone as usize - 1) % 3];
    let index = alphabet
        .find(letter.to_ascii_uppercase())
        .ok_or_else(|| GeodesyError::InvalidGridSquare {
            square: letter.to_string(),
            zone,
        })?;
    Ok((index as f64 + 1.0) * 100_000.0)
}

/// Row letter for a 100 km grid square.
///
/// `row` is the northing divided by 100 000 m, reduced modulo the 20-row
/// cycle.
pub fn row_letter(zone: u8, row: usize) -> char {
    let alphabet = ROW_LETTERS[(zone as usize - 1) % 2];
    alphabet.as_bytes()[row % 20] as char
}

/// Northing of the south edge of a grid square row within one 2 000 000 m
/// cycle, in meters.
pub fn row_northing(zone: u8, letter: char) -> GeodesyResult<f64> {
    let alphabet = ROW_LETTERS[(zone as usize - 1) % 2];
    let index = alphabet
        .find(letter.to_ascii_uppercase())
        .ok_or_else(|| GeodesyError::InvalidGridSquare {
            square: letter.to_string(),
            zone,
        })?;
    Ok(index as f64 * 100_000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_for_latitude_table() {
        assert_eq!(band_for_latitude(-80.0), 'C');
        assert_eq!(band_for_latitude(-1.0), 'M');
        assert_eq!(band_for_latitude(0.0), 'N');
        assert_eq!(band_for_latitude(40.7128), 'T');
        assert_eq!(band_for_latitude(-33.8688), 'H');
        assert_eq!(band_for_latitude(63.9), 'V');
        assert_eq!(band_for_latitude(64.0), 'W');
    }

    #[test]
    fn test_band_x_covers_twelve_degrees() {
        assert_eq!(band_for_latitude(72.0), 'X');
        assert_eq!(band_for_latitude(78.2), 'X');
        assert_eq!(band_for_latitude(84.0), 'X');
    }

    #[test]
    fn test_band_skips_i_and_o() {
        assert!(!BAND_LETTERS.contains('I'));
        assert!(!BAND_LETTERS.contains('O'));
    }

    #[test]
    fn test_band_index_roundtrip() {
        for (i, band) in BAND_LETTERS[..20].chars().enumerate() {
            assert_eq!(band_index(band).unwrap(), i);
        }
    }

    #[test]
    fn test_band_index_rejects_invalid() {
        for bad in ['A', 'B', 'I', 'O', 'Y', 'Z'] {
            assert!(matches!(
                band_index(bad),
                Err(GeodesyError::InvalidLatitudeBand(_))
            ));
        }
    }

    #[test]
    fn test_band_bottom_latitude() {
        assert_eq!(band_bottom_latitude('C').unwrap(), -80.0);
        assert_eq!(band_bottom_latitude('M').unwrap(), -8.0);
        assert_eq!(band_bottom_latitude('N').unwrap(), 0.0);
        assert_eq!(band_bottom_latitude('T').unwrap(), 40.0);
        assert_eq!(band_bottom_latitude('X').unwrap(), 72.0);
    }

    #[test]
    fn test_band_hemisphere() {
        assert!(!band_is_northern('C'));
        assert!(!band_is_northern('M'));
        assert!(band_is_northern('N'));
        assert!(band_is_northern('X'));
        assert!(band_is_northern('t'));
    }

    #[test]
    fn test_column_letters_rotate_by_zone() {
        // Zone 1 uses A-H, zone 2 J-R, zone 3 S-Z, zone 4 wraps back to A-H
        assert_eq!(column_letter(1, 1), 'A');
        assert_eq!(column_letter(2, 1), 'J');
        assert_eq!(column_letter(3, 1), 'S');
        assert_eq!(column_letter(4, 1), 'A');
        // Zone 18 is (18-1) % 3 == 2, the S-Z set
        assert_eq!(column_letter(18, 1), 'S');
        assert_eq!(column_letter(18, 5), 'W');
    }

    #[test]
    fn test_column_easting_roundtrip() {
        for zone in [1u8, 2, 3, 18, 31, 56, 60] {
            for column in 1..=8 {
                let letter = column_letter(zone, column);
                assert_eq!(
                    column_easting(zone, letter).unwrap(),
                    column as f64 * 100_000.0
                );
            }
        }
    }

    #[test]
    fn test_column_easting_rejects_wrong_set() {
        // Zone 18 uses S-Z, so A is not a valid column there
        assert!(matches!(
            column_easting(18, 'A'),
            Err(GeodesyError::InvalidGridSquare { zone: 18, .. })
        ));
    }

    #[test]
    fn test_row_letters_alternate_by_zone() {
        assert_eq!(row_letter(1, 0), 'A');
        assert_eq!(row_letter(2, 0), 'F');
        assert_eq!(row_letter(3, 0), 'A');
        // Zone 18 is even, rows start at F
        assert_eq!(row_letter(18, 0), 'F');
    }

    #[test]
    fn test_row_cycle_wraps_at_twenty() {
        assert_eq!(row_letter(1, 20), row_letter(1, 0));
        assert_eq!(row_letter(18, 25), row_letter(18, 5));
    }

    #[test]
    fn test_row_northing_roundtrip() {
        for zone in [1u8, 2, 18, 56] {
            for row in 0..20 {
                let letter = row_letter(zone, row);
                assert_eq!(row_northing(zone, letter).unwrap(), row as f64 * 100_000.0);
            }
        }
    }

    #[test]
    fn test_row_northing_rejects_i_and_o() {
        for bad in ['I', 'O'] {
            assert!(row_northing(18, bad).is_err());
        }
    }
}
