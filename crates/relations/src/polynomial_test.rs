use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::polynomial::{PiecewiseRelation, PolynomialRelation};

fn quadratic() -> PolynomialRelation {
    // y = 1 + 2t + 3t² with t = x - 10, valid over [10, 20]
    PolynomialRelation::new(vec![1.0, 2.0, 3.0], 10.0, 0.5, (10.0, 20.0))
}

#[test]
fn evaluate_applies_shift_and_horner() {
    let p = quadratic();

    assert_relative_eq!(p.evaluate(10.0), 1.0);
    assert_relative_eq!(p.evaluate(12.0), 1.0 + 4.0 + 12.0);
}

#[test]
fn evaluate_is_nan_outside_range() {
    let p = quadratic();

    assert!(p.evaluate(9.99).is_nan());
    assert!(p.evaluate(20.01).is_nan());
    assert!(!p.evaluate(20.0).is_nan());
}

#[test]
fn evaluate_raw_ignores_range() {
    let p = quadratic();

    assert_relative_eq!(p.evaluate_raw(9.0), 1.0 - 2.0 + 3.0);
}

#[test]
fn sample_scatters_around_the_fit() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let p = quadratic();

    let draws: Vec<f64> = (0..2000).map(|_| p.sample(&mut rng, 12.0)).collect();
    let mean: f64 = draws.iter().sum::<f64>() / draws.len() as f64;
    assert!(
        (mean - 17.0).abs() < 0.1,
        "mean {} should be near the fit value 17",
        mean
    );

    assert!(p.sample(&mut rng, 25.0).is_nan());
}

#[test]
fn piecewise_selects_matching_segment() {
    let pw = PiecewiseRelation::new(vec![
        PolynomialRelation::new(vec![1.0], 0.0, 0.1, (0.0, 5.0)),
        PolynomialRelation::new(vec![2.0], 0.0, 0.1, (5.0, 10.0)),
    ]);

    assert_relative_eq!(pw.evaluate(2.0), 1.0);
    assert_relative_eq!(pw.evaluate(7.0), 2.0);
    // Shared boundary: the first matching segment wins
    assert_relative_eq!(pw.evaluate(5.0), 1.0);
    assert!(pw.evaluate(11.0).is_nan());
}

#[test]
fn invert_on_grid_recovers_x_for_monotone_fit() {
    // y = 2x over [0, 10]
    let pw = PiecewiseRelation::new(vec![PolynomialRelation::new(
        vec![0.0, 2.0],
        0.0,
        0.0,
        (0.0, 10.0),
    )]);

    let x = pw.invert_on_grid(7.0, 5001);
    assert_relative_eq!(x, 3.5, max_relative = 1e-3);
}

#[test]
fn invert_on_grid_rejects_unreachable_values() {
    let pw = PiecewiseRelation::new(vec![PolynomialRelation::new(
        vec![0.0, 2.0],
        0.0,
        0.0,
        (0.0, 10.0),
    )]);

    assert!(pw.invert_on_grid(25.0, 1001).is_nan());
    assert!(pw.invert_on_grid(-1.0, 1001).is_nan());
    assert!(pw.invert_on_grid(f64::NAN, 1001).is_nan());
}
