use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Sample from a Gaussian (normal) distribution using the Box-Muller transform.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `mean` - Mean of the distribution
/// * `std_dev` - Standard deviation
///
/// # Returns
/// A sample from the normal distribution N(mean, std_dev²)
pub fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Sample from a power-law distribution.
///
/// Samples from p(x) ∝ x^α between `x_min` and `x_max` using inverse
/// transform sampling. The α = -1 case degenerates to a log-uniform draw.
///
/// # Arguments
/// * `rng` - Random number generator
/// * `x_min` - Minimum value
/// * `x_max` - Maximum value
/// * `alpha` - Power-law exponent (e.g., -2.3 for a Salpeter mass function)
///
/// # Returns
/// A sample from the power-law distribution
pub fn sample_power_law(rng: &mut ChaChaRng, x_min: f64, x_max: f64, alpha: f64) -> f64 {
    let u: f64 = rng.random();
    let alpha1 = alpha + 1.0;
    if alpha1.abs() < 1e-12 {
        // p(x) ∝ 1/x
        return x_min * (x_max / x_min).powf(u);
    }
    (u * (x_max.powf(alpha1) - x_min.powf(alpha1)) + x_min.powf(alpha1)).powf(1.0 / alpha1)
}

/// Sample uniformly from the half-open range [min, max).
pub fn sample_uniform(rng: &mut ChaChaRng, min: f64, max: f64) -> f64 {
    min + rng.random::<f64>() * (max - min)
}
