//! Karney's 6th-order Krüger series for the transverse Mercator projection.
//!
//! Implements the series machinery from Karney (2011), "Transverse Mercator
//! with an accuracy of a few nanometers": the α/β trigonometric series
//! coefficients (polynomials in the third flattening n through n⁶), the
//! rectifying radius A, and the conformal-latitude tangent conversions,
//! including the Newton iteration that recovers the geodetic tangent τ from
//! the conformal tangent τ′ in the inverse projection.

use tracing::warn;

use crate::ellipsoid::Ellipsoid;
use crate::error::{GeodesyError, GeodesyResult};

/// Convergence tolerance for the τ′ → τ Newton iteration.
const NEWTON_TOLERANCE: f64 = 1e-12;

/// Iteration bound for the τ′ → τ Newton iteration.
///
/// The iteration converges in 2-3 steps for every latitude inside UTM
/// coverage; hitting this bound means an internal invariant was violated.
const NEWTON_MAX_ITERATIONS: usize = 10;

/// Precomputed series coefficients for one ellipsoid.
///
/// All fields depend only on the ellipsoid, so a single value serves both
/// projection directions.
#[derive(Debug, Clone)]
pub(crate) struct KrugerSeries {
    /// Rectifying radius A; 2πA is the circumference of a meridian
    /// (Karney Eq. 14).
    pub rectifying_radius: f64,
    /// Forward series coefficients α₁..α₆ (Karney Eq. 35).
    pub alpha: [f64; 6],
    /// Inverse series coefficients β₁..β₆ (Karney Eq. 36).
    pub beta: [f64; 6],
    /// First eccentricity of the ellipsoid.
    pub eccentricity: f64,
    /// First eccentricity squared.
    pub eccentricity_squared: f64,
}

impl KrugerSeries {
    /// Precompute the series for the given ellipsoid.
    pub fn new(ellipsoid: &Ellipsoid) -> Self {
        let n = ellipsoid.third_flattening();
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n3 * n;
        let n5 = n4 * n;
        let n6 = n5 * n;

        let rectifying_radius =
            ellipsoid.semi_major_axis / (1.0 + n) * (1.0 + n2 / 4.0 + n4 / 64.0 + n6 / 256.0);

        let alpha = [
            n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0 + 41.0 * n4 / 180.0 - 127.0 * n5 / 288.0
                + 7891.0 * n6 / 37800.0,
            13.0 * n2 / 48.0 - 3.0 * n3 / 5.0 + 557.0 * n4 / 1440.0 + 281.0 * n5 / 630.0
                - 1983433.0 * n6 / 1935360.0,
            61.0 * n3 / 240.0 - 103.0 * n4 / 140.0
                + 15061.0 * n5 / 26880.0
                + 167603.0 * n6 / 181440.0,
            49561.0 * n4 / 161280.0 - 179.0 * n5 / 168.0 + 6601661.0 * n6 / 7257600.0,
            34729.0 * n5 / 80640.0 - 3418889.0 * n6 / 1995840.0,
            212378941.0 * n6 / 319334400.0,
        ];

        let beta = [
            n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0 - n4 / 360.0 - 81.0 * n5 / 512.0
                + 96199.0 * n6 / 604800.0,
            n2 / 48.0 + n3 / 15.0 - 437.0 * n4 / 1440.0 + 46.0 * n5 / 105.0
                - 1118711.0 * n6 / 3870720.0,
            17.0 * n3 / 480.0 - 37.0 * n4 / 840.0 - 209.0 * n5 / 4480.0 + 5569.0 * n6 / 90720.0,
            4397.0 * n4 / 161280.0 - 11.0 * n5 / 504.0 - 830251.0 * n6 / 7257600.0,
            4583.0 * n5 / 161280.0 - 108847.0 * n6 / 3991680.0,
            20648693.0 * n6 / 638668800.0,
        ];

        Self {
            rectifying_radius,
            alpha,
            beta,
            eccentricity: ellipsoid.eccentricity(),
            eccentricity_squared: ellipsoid.eccentricity_squared(),
        }
    }

    /// Apply the forward α series: intermediate conformal coordinates
    /// (ξ′, η′) to projected (ξ, η) (Karney Eq. 11).
    pub fn forward(&self, xi_prime: f64, eta_prime: f64) -> (f64, f64) {
        let mut xi = xi_prime;
        let mut eta = eta_prime;
        for (j, &a) in self.alpha.iter().enumerate() {
            let k = 2.0 * (j as f64 + 1.0);
            xi += a * (k * xi_prime).sin() * (k * eta_prime).cosh();
            eta += a * (k * xi_prime).cos() * (k * eta_prime).sinh();
        }
        (xi, eta)
    }

    /// Apply the inverse β series: projected (ξ, η) back to intermediate
    /// conformal coordinates (ξ′, η′).
    pub fn inverse(&self, xi: f64, eta: f64) -> (f64, f64) {
        let mut xi_prime = xi;
        let mut eta_prime = eta;
        for (j, &b) in self.beta.iter().enumerate() {
            let k = 2.0 * (j as f64 + 1.0);
            xi_prime -= b * (k * xi).sin() * (k * eta).cosh();
            eta_prime -= b * (k * xi).cos() * (k * eta).sinh();
        }
        (xi_prime, eta_prime)
    }

    /// Convert the geodetic latitude tangent τ to the conformal tangent τ′
    /// (Karney Eqs. 7-9).
    pub fn tau_to_tau_prime(&self, tau: f64) -> f64 {
        let e = self.eccentricity;
        let sec = (1.0 + tau * tau).sqrt();
        let sigma = (e * (e * tau / sec).atanh()).sinh();
        tau * (1.0 + sigma * sigma).sqrt() - sigma * sec
    }

    /// Recover the geodetic tangent τ from the conformal tangent τ′ by
    /// Newton's method (Karney Eqs. 19-21).
    ///
    /// The iteration starts from τ = τ′ and terminates when the correction
    /// falls below 1e-12. It is bounded at 10 iterations; exceeding the
    /// bound is reported as [`GeodesyError::ConvergenceFailure`].
    pub fn tau_prime_to_tau(&self, tau_prime: f64) -> GeodesyResult<f64> {
        let e = self.eccentricity;
        let e2 = self.eccentricity_squared;

        let mut tau = tau_prime;
        for _ in 0..NEWTON_MAX_ITERATIONS {
            let sec = (1.0 + tau * tau).sqrt();
            let sigma = (e * (e * tau / sec).atanh()).sinh();
            let tau_prime_est = tau * (1.0 + sigma * sigma).sqrt() - sigma * sec;
            let delta = (tau_prime - tau_prime_est) / (1.0 + tau_prime_est * tau_prime_est).sqrt()
                * (1.0 + (1.0 - e2) * tau * tau)
                / ((1.0 - e2) * sec);
            tau += delta;
            if delta.abs() <= NEWTON_TOLERANCE {
                return Ok(tau);
            }
        }

        warn!(
            tau_prime,
            iterations = NEWTON_MAX_ITERATIONS,
            "latitude recovery did not converge"
        );
        Err(GeodesyError::ConvergenceFailure(NEWTON_MAX_ITERATIONS))
    }
}
