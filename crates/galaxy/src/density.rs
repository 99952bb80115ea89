//! Analytic galactic density profiles.
//!
//! Thin and thick disks are double exponentials normalized to unity at the
//! solar position; the halo is a flattened power-law spheroid. The combined
//! density applies fixed relative weights on top of the raw profiles.

use serde::{Deserialize, Serialize};

use crate::params::GalacticModel;

/// Which density profile a line-of-sight integral should evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DensityProfile {
    /// Double-exponential disk only
    Exponential,
    /// Power-law spheroid only
    Spheroid,
    /// Exponential disk plus the halo-weighted spheroid
    Both,
}

/// Relative density of the three galactic components at one point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityComponents {
    pub thin: f64,
    pub thick: f64,
    pub halo: f64,
}

/// Double-exponential disk density, normalized to 1 at the solar position.
///
/// `scale_h` is the vertical scale height, `scale_l` the radial scale
/// length, both in pc.
pub fn exponential_density(
    model: &GalacticModel,
    r: f64,
    z: f64,
    scale_h: f64,
    scale_l: f64,
) -> f64 {
    let z_part = (-(z - model.z_sun).abs() / scale_h).exp();
    let r_part = (-(r - model.r_sun) / scale_l).exp();
    z_part * r_part
}

/// Flattened power-law spheroid density, normalized to 1 at the solar
/// position.
///
/// The origin `r = 0, z = 0` is a precondition violation: the profile
/// diverges there and the finite values just off the axis carry no meaning.
/// Callers must avoid it.
pub fn spheroid_density(model: &GalacticModel, r: f64, z: f64) -> f64 {
    debug_assert!(
        r != 0.0 || z != 0.0,
        "spheroid density is undefined at the galactic center"
    );
    let m = (r * r + (z / model.halo_axial_ratio).powi(2)).sqrt();
    (model.r_sun / m).powf(model.halo_power_index)
}

/// Combined three-component density with the fixed thick-disk and halo
/// weights applied.
///
/// The thin-disk scale height is the only parameter populations vary;
/// `h_thick` defaults to the model's fixed value in most call sites.
///
/// # Example
/// ```
/// use galaxy::{galactic_density, GalacticModel};
///
/// let model = GalacticModel::default();
/// let d = galactic_density(&model, model.r_sun, model.z_sun, 350.0, 900.0);
/// assert!((d.thin - 1.0).abs() < 1e-12);
/// assert!((d.thick - 0.12).abs() < 1e-12);
/// ```
pub fn galactic_density(
    model: &GalacticModel,
    r: f64,
    z: f64,
    h_thin: f64,
    h_thick: f64,
) -> DensityComponents {
    let thin = exponential_density(model, r, z, h_thin, model.thin_scale_length);
    let thick = exponential_density(model, r, z, h_thick, model.thick_scale_length);
    let halo = spheroid_density(model, r, z);
    DensityComponents {
        thin,
        thick: model.f_thick * thick,
        halo: model.f_halo * halo,
    }
}

/// Density of a single profile choice, as seen by the volume integrator.
///
/// For [`DensityProfile::Both`] the spheroid enters with the halo weight on
/// top of the raw exponential.
pub fn profile_density(
    model: &GalacticModel,
    profile: DensityProfile,
    r: f64,
    z: f64,
    scale_h: f64,
    scale_l: f64,
) -> f64 {
    match profile {
        DensityProfile::Exponential => exponential_density(model, r, z, scale_h, scale_l),
        DensityProfile::Spheroid => spheroid_density(model, r, z),
        DensityProfile::Both => {
            exponential_density(model, r, z, scale_h, scale_l)
                + model.f_halo * spheroid_density(model, r, z)
        }
    }
}
