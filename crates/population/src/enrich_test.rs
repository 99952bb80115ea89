use std::collections::BTreeMap;
use std::sync::OnceLock;

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use galaxy::{GalaxyError, Pointing, PointingConfig, PopulationKind, VelocitySample};
use relations::{
    GridEvolutionaryModel, LocalLuminosityFunction, MagnitudeRelations, PolynomialRelation,
};

use crate::config::PopulationConfig;
use crate::error::PopulationError;
use crate::synthesis::simulate;
use crate::table::PopulationTable;

// One pointing shared across tests so its distance distribution is built
// once per test run
static POINTING: OnceLock<Pointing> = OnceLock::new();

fn pointing() -> &'static Pointing {
    POINTING.get_or_init(|| Pointing::new(PointingConfig::toward(0.785, 0.3)))
}

fn toy_model() -> GridEvolutionaryModel {
    GridEvolutionaryModel::new(
        vec![0.01, 1.0],
        vec![0.01, 14.0],
        vec![424.0, 424.0, 2800.0, 2800.0],
        vec![-5.97, -5.97, -3.0, -3.0],
    )
    .unwrap()
}

fn table_of(n: usize, binary_fraction: f64, seed: u64) -> PopulationTable {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let config = PopulationConfig {
        n_sample: n,
        binary_fraction,
        ..PopulationConfig::default()
    };
    simulate(
        &mut rng,
        &config,
        &toy_model(),
        &LocalLuminosityFunction::kirkpatrick2021(),
    )
    .unwrap()
}

// Constant M = 10 over every simulated type, with zero scatter
fn flat_relation() -> MagnitudeRelations {
    let mut fits = BTreeMap::new();
    fits.insert(
        "j_test".to_string(),
        PolynomialRelation::new(vec![10.0], 0.0, 0.0, (0.0, 50.0)),
    );
    MagnitudeRelations::from_fits(fits)
}

#[test]
fn add_distances_populates_the_position_columns() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut table = table_of(200, 0.2, 1);

    table
        .add_distances(&mut rng, pointing(), 10.0, 500.0, 350.0, 2600.0)
        .unwrap();

    let distance = table.distance().unwrap();
    assert_eq!(distance.len(), table.len());
    assert!(distance.iter().all(|&d| (10.0..=500.0).contains(&d)));
    assert!(table.l().unwrap().iter().all(|&l| l == 0.785));
    assert!(table.b().unwrap().iter().all(|&b| b == 0.3));
    assert!(table.r().unwrap().iter().all(|&r| r.is_finite() && r > 0.0));
    assert!(table.z().unwrap().iter().all(|&z| z.is_finite()));
}

#[test]
fn add_distances_rejects_a_bad_window() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut table = table_of(10, 0.0, 2);

    let err = table
        .add_distances(&mut rng, pointing(), 0.0, 500.0, 350.0, 2600.0)
        .unwrap_err();
    assert_eq!(
        err,
        PopulationError::Galaxy(GalaxyError::NonPositiveDistance(0.0))
    );
}

#[test]
fn add_kinematics_draws_one_velocity_per_row() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut table = table_of(100, 0.2, 3);

    table
        .add_kinematics(&mut rng, PopulationKind::ThinDisk)
        .unwrap();

    match table.velocities().unwrap() {
        VelocitySample::Disk { u, v, w } => {
            assert_eq!(u.len(), table.len());
            assert_eq!(v.len(), table.len());
            assert_eq!(w.len(), table.len());
        }
        VelocitySample::Halo { .. } => panic!("thin disk should yield UVW draws"),
    }
}

#[test]
fn halo_kinematics_use_cylindrical_components() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut table = table_of(50, 0.0, 4);

    table.add_kinematics(&mut rng, PopulationKind::Halo).unwrap();

    assert!(matches!(
        table.velocities(),
        Some(VelocitySample::Halo { .. })
    ));
}

#[test]
fn magnitudes_without_distances_are_absolute_only() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    // Singles only, so every spectral type is finite
    let mut table = table_of(50, 0.0, 5);

    table.add_magnitudes(&mut rng, &flat_relation(), &["j_test", "unknown"]);

    let abs = &table.absolute_mags()["j_test"];
    assert_eq!(abs.len(), table.len());
    assert!(abs.iter().all(|&m| m == 10.0));
    assert!(table.absolute_mags()["unknown"].iter().all(|m| m.is_nan()));
    assert!(table.apparent_mags().is_empty());
}

#[test]
fn apparent_magnitudes_follow_the_distance_modulus() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut table = table_of(50, 0.0, 6);

    table
        .add_distances(&mut rng, pointing(), 10.0, 500.0, 350.0, 2600.0)
        .unwrap();
    table.add_magnitudes(&mut rng, &flat_relation(), &["j_test"]);

    let distance = table.distance().unwrap().to_vec();
    let app = &table.apparent_mags()["j_test"];
    assert_eq!(app.len(), table.len());
    for (m, d) in app.iter().zip(&distance) {
        assert_relative_eq!(*m, 10.0 + 5.0 * (d / 10.0).log10(), max_relative = 1e-12);
    }
}
