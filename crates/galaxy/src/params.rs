use serde::{Deserialize, Serialize};

/// Structural parameters of the Galaxy used by every density and volume
/// computation. Distances are in parsecs.
///
/// Callers vary only the thin-disk scale height between populations; the
/// thick disk and halo shapes stay fixed, so their parameters live here
/// rather than in function signatures.
///
/// # Example
/// ```
/// use galaxy::GalacticModel;
///
/// let model = GalacticModel::default();
/// assert_eq!(model.r_sun, 8300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GalacticModel {
    /// Galactocentric radius of the Sun in pc
    pub r_sun: f64,
    /// Height of the Sun above the galactic midplane in pc
    pub z_sun: f64,
    /// Relative normalization of the thick disk against the thin disk
    pub f_thick: f64,
    /// Relative normalization of the halo against the thin disk
    pub f_halo: f64,
    /// Halo axial ratio
    pub halo_axial_ratio: f64,
    /// Halo power-law index
    pub halo_power_index: f64,
    /// Thin-disk radial scale length in pc
    pub thin_scale_length: f64,
    /// Thick-disk vertical scale height in pc
    pub thick_scale_height: f64,
    /// Thick-disk radial scale length in pc
    pub thick_scale_length: f64,
}

impl Default for GalacticModel {
    fn default() -> Self {
        Self {
            r_sun: 8300.0,
            z_sun: 27.0,
            f_thick: 0.12,
            f_halo: 0.0051,
            halo_axial_ratio: 0.64,
            halo_power_index: 2.77,
            thin_scale_length: 2600.0,
            thick_scale_height: 900.0,
            thick_scale_length: 3600.0,
        }
    }
}
