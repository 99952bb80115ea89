use approx::assert_relative_eq;

use crate::density::{
    exponential_density, galactic_density, profile_density, spheroid_density, DensityProfile,
};
use crate::params::GalacticModel;

#[test]
fn exponential_density_peaks_at_solar_position() {
    let model = GalacticModel::default();

    for (h, l) in [(250.0, 2600.0), (350.0, 2600.0), (900.0, 3600.0)] {
        let d = exponential_density(&model, model.r_sun, model.z_sun, h, l);
        assert_relative_eq!(d, 1.0);
    }
}

#[test]
fn exponential_density_decays_away_from_plane() {
    let model = GalacticModel::default();

    let at_plane = exponential_density(&model, model.r_sun, model.z_sun, 350.0, 2600.0);
    let above = exponential_density(&model, model.r_sun, model.z_sun + 350.0, 350.0, 2600.0);
    let below = exponential_density(&model, model.r_sun, model.z_sun - 350.0, 350.0, 2600.0);

    // One scale height in either direction drops density by e
    assert_relative_eq!(above / at_plane, (-1.0f64).exp(), max_relative = 1e-12);
    assert_relative_eq!(below / at_plane, (-1.0f64).exp(), max_relative = 1e-12);
}

#[test]
fn spheroid_density_is_unity_at_solar_point() {
    let model = GalacticModel::default();

    // At (R_sun, 0) the ellipsoidal radius equals R_sun
    let d = spheroid_density(&model, model.r_sun, 0.0);
    assert_relative_eq!(d, 1.0);
}

#[test]
fn spheroid_density_finite_on_axis() {
    let model = GalacticModel::default();

    // r = 0 with z != 0 must not divide by zero
    let d = spheroid_density(&model, 0.0, 500.0);
    assert!(d.is_finite());
    assert!(d > 0.0);
}

#[test]
fn galactic_density_applies_component_weights_at_solar_point() {
    let model = GalacticModel::default();

    // End-to-end reference point: r=8300, z=27 with Hthin=350, Hthick=900
    let d = galactic_density(&model, 8300.0, 27.0, 350.0, 900.0);
    assert_relative_eq!(d.thin, 1.0);
    assert_relative_eq!(d.thick, 0.12);
    // Spheroid at (R_sun, Z_sun) is not exactly 1 (z/q slightly inflates the
    // ellipsoidal radius), but within a fraction of a percent
    assert_relative_eq!(d.halo, 0.0051, max_relative = 1e-4);
}

#[test]
fn profile_density_both_adds_weighted_spheroid() {
    let model = GalacticModel::default();
    let (r, z) = (7000.0, 400.0);

    let exp = profile_density(&model, DensityProfile::Exponential, r, z, 350.0, 2600.0);
    let sph = profile_density(&model, DensityProfile::Spheroid, r, z, 350.0, 2600.0);
    let both = profile_density(&model, DensityProfile::Both, r, z, 350.0, 2600.0);

    assert_relative_eq!(both, exp + model.f_halo * sph, max_relative = 1e-12);
}

#[test]
fn densities_are_non_negative() {
    let model = GalacticModel::default();

    for r in [100.0, 4000.0, 8300.0, 20000.0] {
        for z in [-2000.0, -27.0, 27.0, 5000.0] {
            let d = galactic_density(&model, r, z, 350.0, 900.0);
            assert!(d.thin >= 0.0);
            assert!(d.thick >= 0.0);
            assert!(d.halo >= 0.0);
        }
    }
}
