//! Special functions.
//!
//! All functions use generic type parameter `T: num_traits::Float` for f32/f64 support.

use num_traits::Float;

/// Lanczos series coefficients (γ = 5, six terms).
const LANCZOS_COEFFICIENTS: [f64; 6] = [
    76.18009172947146,
    -86.50532032941677,
    24.01409824083091,
    -1.231739572450155,
    0.1208650973866179e-2,
    -0.5395239384953e-5,
];

/// Leading constant of the Lanczos series.
const LANCZOS_BASE: f64 = 1.000000000190015;

/// sqrt(2π)
const SQRT_TWO_PI: f64 = 2.5066282746310005;

/// Natural logarithm of the gamma function, ln Γ(x), for x > 0.
///
/// # Mathematical Definition
/// ```text
/// tmp = x + 5.5 - (x + 0.5) ln(x + 5.5)
/// ser = c0 + Σ_{j=0..5} c_{j+1} / (x + 1 + j)
/// ln Γ(x) ≈ -tmp + ln(sqrt(2π) · ser / x)
/// ```
///
/// Absolute error is below 1e-9 for x up to a few thousand, which is the
/// range the Poisson rejection sampler evaluates it on.
///
/// # Arguments
/// * `x` - Argument; must be positive (non-positive input yields NaN or garbage)
///
/// # Examples
/// ```
/// use noise_core::math::special::log_gamma;
///
/// // Γ(5) = 4! = 24
/// let value = log_gamma(5.0_f64);
/// assert!((value - 24.0_f64.ln()).abs() < 1e-10);
/// ```
#[inline]
pub fn log_gamma<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let shift = T::from(5.5).unwrap();

    let mut tmp = x + shift;
    tmp = tmp - (x + half) * tmp.ln();

    let mut ser = T::from(LANCZOS_BASE).unwrap();
    let mut y = x;
    for &c in LANCZOS_COEFFICIENTS.iter() {
        y = y + T::one();
        ser = ser + T::from(c).unwrap() / y;
    }

    -tmp + (T::from(SQRT_TWO_PI).unwrap() * ser / x).ln()
}
