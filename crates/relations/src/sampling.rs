use std::f64::consts::PI;

use rand::Rng;
use rand_chacha::ChaChaRng;

/// Box-Muller Gaussian draw used by the scatter terms of every relation.
pub(crate) fn sample_gaussian(rng: &mut ChaChaRng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}
