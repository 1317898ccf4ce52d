//! Error types for coordinate conversion and parsing.
//!
//! Errors fall into three kinds: range errors (a numeric input outside the
//! domain a conversion supports), parse errors (a malformed UTM or MGRS
//! string), and internal-invariant violations (the bounded latitude
//! iteration failing to converge). Callers can match on the variant to tell
//! them apart; every message names the offending value and the constraint.

use thiserror::Error;

/// Result type for conversion and parsing operations.
pub type GeodesyResult<T> = Result<T, GeodesyError>;

/// Errors that can occur during coordinate conversion or parsing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeodesyError {
    /// Latitude is outside the UTM coverage area of [-80, 84] degrees.
    #[error("Latitude {0} is outside UTM coverage [-80, 84]")]
    LatitudeOutsideUtmCoverage(f64),

    /// Zone number is outside the valid range of 1 to 60.
    #[error("Zone must be 1-60, got {0}")]
    ZoneOutOfRange(i64),

    /// MGRS precision is outside the valid range of 1 to 5.
    #[error("Precision must be between 1 and 5, got {0}")]
    InvalidPrecision(u8),

    /// Easting or northing is outside the plausible UTM range.
    #[error(
        "Easting must be in [0, 1000000] and northing in [0, 10000000], \
         got easting {easting} and northing {northing}"
    )]
    EastingNorthingOutOfRange { easting: f64, northing: f64 },

    /// UTM string does not have the expected token structure.
    #[error("Invalid UTM string format: expected '<zone><hemisphere> <easting>E <northing>N', got '{0}'")]
    InvalidUtmFormat(String),

    /// UTM string has no hemisphere letter after the zone number.
    #[error("Invalid UTM string '{0}': missing hemisphere letter")]
    MissingHemisphere(String),

    /// Zone component of a UTM string is not a number.
    #[error("Invalid zone: '{0}' is not a number")]
    InvalidZoneDigits(String),

    /// Easting or northing component of a UTM string is not numeric.
    #[error("Invalid coordinates: easting '{easting}' and northing '{northing}' must be numeric")]
    InvalidCoordinateDigits { easting: String, northing: String },

    /// MGRS string is too short to contain zone, band and square letters.
    #[error("MGRS string '{0}' is too short")]
    MgrsTooShort(String),

    /// Latitude band letter is not in the MGRS band alphabet (C-X, no I/O).
    #[error("Invalid latitude band '{0}': must be one of C-X excluding I and O")]
    InvalidLatitudeBand(char),

    /// 100km grid square letters are not valid for the zone.
    #[error("Invalid grid square '{square}' for zone {zone}")]
    InvalidGridSquare { square: String, zone: u8 },

    /// MGRS digits cannot be split into easting/northing halves of equal length.
    #[error("MGRS easting and northing digits must have equal length, got {0} digits")]
    UnevenMgrsDigits(usize),

    /// MGRS numeric part contains non-digit characters.
    #[error("Invalid MGRS digits '{0}': must contain only 0-9")]
    InvalidMgrsDigits(String),

    /// The conformal-to-geographic latitude iteration did not converge.
    ///
    /// This indicates an internal-invariant violation rather than bad user
    /// input: the Newton iteration converges in a handful of steps for every
    /// valid UTM coordinate.
    #[error("Latitude recovery did not converge within {0} iterations")]
    ConvergenceFailure(usize),
}

impl GeodesyError {
    /// True if this error is a range error (valid syntax, out-of-domain value).
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            GeodesyError::LatitudeOutsideUtmCoverage(_)
                | GeodesyError::ZoneOutOfRange(_)
                | GeodesyError::InvalidPrecision(_)
                | GeodesyError::EastingNorthingOutOfRange { .. }
        )
    }

    /// True if this error was produced while parsing a coordinate string.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            GeodesyError::InvalidUtmFormat(_)
                | GeodesyError::MissingHemisphere(_)
                | GeodesyError::InvalidZoneDigits(_)
                | GeodesyError::InvalidCoordinateDigits { .. }
                | GeodesyError::MgrsTooShort(_)
                | GeodesyError::InvalidLatitudeBand(_)
                | GeodesyError::InvalidGridSquare { .. }
                | GeodesyError::UnevenMgrsDigits(_)
                | GeodesyError::InvalidMgrsDigits(_)
        )
    }
}
