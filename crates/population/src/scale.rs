//! Calibration of simulated counts against the observed local luminosity
//! function.

use log::debug;
use rand_chacha::ChaChaRng;

use galaxy::sampling::sample_gaussian;
use relations::LocalLuminosityFunction;

/// Number of bootstrap realizations of the observed function.
pub const BOOTSTRAP_DRAWS: usize = 10_000;

// Observed densities are tabulated in units of 10⁻³ pc⁻³
const SCALE_UNIT: f64 = 1e-3;

/// Bootstrap summary of the normalization fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LfScale {
    /// Median scale factor across the bootstrap draws
    pub median: f64,
    /// Bootstrap standard deviation of the scale factor
    pub std_dev: f64,
    /// Total model counts times the median scale
    pub scaled_total: f64,
}

/// Fit the per-object scale factor that matches the simulated temperature
/// histogram to the observed luminosity function.
///
/// Each bootstrap draw perturbs every observed bin by its uncertainty and
/// solves the weighted least-squares normalization
/// `scale = Σ(obs·pred/σ²) / Σ(pred²/σ²)` in the function's density units.
/// NaN temperatures never enter the histogram; a model with no counts in
/// the binned range yields NaN throughout.
pub fn scale_to_local_lf(
    rng: &mut ChaChaRng,
    teffs: &[f64],
    lf: &LocalLuminosityFunction,
) -> LfScale {
    let pred = lf.histogram(teffs);

    let mut draws = Vec::with_capacity(BOOTSTRAP_DRAWS);
    for _ in 0..BOOTSTRAP_DRAWS {
        let mut num = 0.0;
        let mut den = 0.0;
        for i in 0..lf.n_bins() {
            let sigma2 = lf.uncertainties[i] * lf.uncertainties[i];
            let obs = sample_gaussian(rng, lf.values[i], lf.uncertainties[i]);
            num += obs * pred[i] / sigma2;
            den += pred[i] * pred[i] / sigma2;
        }
        draws.push(num / den * SCALE_UNIT);
    }

    draws.sort_by(f64::total_cmp);
    let mid = draws.len() / 2;
    let median = if draws.len() % 2 == 0 {
        (draws[mid - 1] + draws[mid]) / 2.0
    } else {
        draws[mid]
    };
    let mean: f64 = draws.iter().sum::<f64>() / draws.len() as f64;
    let variance: f64 =
        draws.iter().map(|d| (d - mean) * (d - mean)).sum::<f64>() / draws.len() as f64;
    let std_dev = variance.sqrt();
    let scaled_total = pred.iter().sum::<f64>() * median;

    debug!(
        "luminosity function scale: median {:.3e}, std {:.3e}, scaled total {:.3}",
        median, std_dev, scaled_total
    );

    LfScale {
        median,
        std_dev,
        scaled_total,
    }
}
