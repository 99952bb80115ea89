use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::error::GalaxyError;
use crate::kinematics::{
    draw_velocities, thin_disk_dispersions, PopulationKind, VelocitySample, ASYMMETRIC_DRIFT_K,
};

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

fn std_dev(xs: &[f64]) -> f64 {
    let m = mean(xs);
    (xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
}

#[test]
fn dispersions_grow_with_age() {
    let young = thin_disk_dispersions(1.0);
    let old = thin_disk_dispersions(10.0);

    assert!(young.0 < old.0);
    assert!(young.1 < old.1);
    assert!(young.2 < old.2);
}

#[test]
fn dispersions_reach_reference_values_at_ten_gyr() {
    // σ(10) = v10 by construction of the power law (τ ≪ 10)
    let (sigma_u, _, sigma_w) = thin_disk_dispersions(10.0);
    assert!((sigma_u - 41.899).abs() < 0.01);
    assert!((sigma_w - 23.381).abs() < 0.01);
}

#[test]
fn thin_disk_v_component_carries_asymmetric_drift() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let ages = vec![5.0; 20_000];

    let (_, sigma_v, _) = thin_disk_dispersions(5.0);
    let expected_drift = -(sigma_v * sigma_v) / ASYMMETRIC_DRIFT_K;

    match draw_velocities(&mut rng, &ages, PopulationKind::ThinDisk).unwrap() {
        VelocitySample::Disk { u, v, w } => {
            assert!(
                (mean(&v) - expected_drift).abs() < 1.0,
                "mean V {} should be near {}",
                mean(&v),
                expected_drift
            );
            assert!(mean(&u).abs() < 1.0);
            assert!(mean(&w).abs() < 1.0);
            assert!((std_dev(&v) - sigma_v).abs() < 1.0);
        }
        VelocitySample::Halo { .. } => panic!("thin disk should draw UVW"),
    }
}

#[test]
fn thick_disk_uses_fixed_dispersions() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let ages = vec![10.0; 20_000];

    match draw_velocities(&mut rng, &ages, PopulationKind::ThickDisk).unwrap() {
        VelocitySample::Disk { u, v, w } => {
            assert!((std_dev(&u) - 67.0).abs() < 2.0);
            assert!((std_dev(&v) - 38.0).abs() < 2.0);
            assert!((std_dev(&w) - 35.0).abs() < 2.0);
            assert!((mean(&v) + 46.0).abs() < 1.5, "thick disk lags by 46 km/s");
        }
        VelocitySample::Halo { .. } => panic!("thick disk should draw UVW"),
    }
}

#[test]
fn halo_draws_cylindrical_components() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let ages = vec![12.0; 20_000];

    match draw_velocities(&mut rng, &ages, PopulationKind::Halo).unwrap() {
        VelocitySample::Halo { v_r, v_phi, v_z } => {
            assert_eq!(v_r.len(), 20_000);
            assert!((std_dev(&v_r) - 150.0).abs() < 5.0);
            assert!((std_dev(&v_phi) - 95.0).abs() < 4.0);
            assert!((std_dev(&v_z) - 85.0).abs() < 4.0);
        }
        VelocitySample::Disk { .. } => panic!("halo should draw cylindrical components"),
    }
}

#[test]
fn halo_dispersions_ignore_age() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let young = draw_velocities(&mut rng, &vec![1.0; 10_000], PopulationKind::Halo).unwrap();
    let mut rng = ChaChaRng::seed_from_u64(2);
    let old = draw_velocities(&mut rng, &vec![13.0; 10_000], PopulationKind::Halo).unwrap();

    match (young, old) {
        (VelocitySample::Halo { v_r: a, .. }, VelocitySample::Halo { v_r: b, .. }) => {
            assert!((std_dev(&a) - std_dev(&b)).abs() < 6.0);
        }
        _ => panic!("halo should draw cylindrical components"),
    }
}

#[test]
fn empty_ages_are_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for kind in [
        PopulationKind::ThinDisk,
        PopulationKind::ThickDisk,
        PopulationKind::Halo,
    ] {
        let err = draw_velocities(&mut rng, &[], kind).unwrap_err();
        assert_eq!(err, GalaxyError::EmptyAges);
    }
}
