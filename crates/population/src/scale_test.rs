use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use relations::LocalLuminosityFunction;

use crate::scale::scale_to_local_lf;

/// Model temperatures whose histogram is exactly `factor` times the
/// observed densities.
fn proportional_teffs(lf: &LocalLuminosityFunction, factor: f64) -> Vec<f64> {
    let mut teffs = Vec::new();
    for (center, value) in lf.bin_centers.iter().zip(&lf.values) {
        let count = (value * factor).round() as usize;
        teffs.extend(std::iter::repeat(*center).take(count));
    }
    teffs
}

#[test]
fn proportional_model_recovers_the_proportionality_constant() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let lf = LocalLuminosityFunction::kirkpatrick2021();

    // Histogram = 100 × observed, so the fitted scale is 0.01 in the
    // function's 10⁻³ pc⁻³ units
    let teffs = proportional_teffs(&lf, 100.0);
    let scale = scale_to_local_lf(&mut rng, &teffs, &lf);

    assert_relative_eq!(scale.median, 1e-5, max_relative = 0.02);
    assert!(scale.std_dev > 0.0);
    assert!(scale.std_dev < 0.2 * scale.median);
}

#[test]
fn doubling_the_model_counts_halves_the_scale() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let lf = LocalLuminosityFunction::kirkpatrick2021();

    let single = scale_to_local_lf(&mut rng, &proportional_teffs(&lf, 100.0), &lf);
    let double = scale_to_local_lf(&mut rng, &proportional_teffs(&lf, 200.0), &lf);

    assert_relative_eq!(double.median, single.median / 2.0, max_relative = 0.05);
}

#[test]
fn scaled_total_is_model_counts_times_the_median() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let lf = LocalLuminosityFunction::kirkpatrick2021();

    let teffs = proportional_teffs(&lf, 50.0);
    let scale = scale_to_local_lf(&mut rng, &teffs, &lf);

    let total: f64 = lf.histogram(&teffs).iter().sum();
    assert_relative_eq!(scale.scaled_total, total * scale.median);
}

#[test]
fn a_model_with_no_binned_counts_yields_nan() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let lf = LocalLuminosityFunction::kirkpatrick2021();

    let scale = scale_to_local_lf(&mut rng, &[f64::NAN, 3000.0, 100.0], &lf);

    assert!(scale.median.is_nan());
    assert!(scale.scaled_total.is_nan());
}
