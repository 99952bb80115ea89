//! The columnar catalog emitted by a simulation run.

use std::collections::BTreeMap;

use galaxy::VelocitySample;
use serde::{Deserialize, Serialize};

/// Index-aligned columns describing one simulated population.
///
/// Every column has the same length; rows are immutable once emitted.
/// Single systems carry NaN in the per-component binary columns. The
/// enrichment columns (distance, position, velocities, magnitudes) are
/// absent until the corresponding `add_*` method has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationTable {
    pub(crate) mass: Vec<f64>,
    pub(crate) age: Vec<f64>,
    pub(crate) spt: Vec<f64>,
    pub(crate) temperature: Vec<f64>,
    pub(crate) luminosity: Vec<f64>,
    pub(crate) is_binary: Vec<bool>,
    pub(crate) primary_mass: Vec<f64>,
    pub(crate) secondary_mass: Vec<f64>,
    pub(crate) primary_spt: Vec<f64>,
    pub(crate) secondary_spt: Vec<f64>,
    pub(crate) primary_luminosity: Vec<f64>,
    pub(crate) secondary_luminosity: Vec<f64>,
    pub(crate) scale: Vec<f64>,
    pub(crate) scale_unc: Vec<f64>,
    pub(crate) scale_times_model: Vec<f64>,
    pub(crate) distance: Option<Vec<f64>>,
    pub(crate) l: Option<Vec<f64>>,
    pub(crate) b: Option<Vec<f64>>,
    pub(crate) r: Option<Vec<f64>>,
    pub(crate) z: Option<Vec<f64>>,
    pub(crate) velocities: Option<VelocitySample>,
    pub(crate) absolute_mags: BTreeMap<String, Vec<f64>>,
    pub(crate) apparent_mags: BTreeMap<String, Vec<f64>>,
}

impl PopulationTable {
    pub fn len(&self) -> usize {
        self.mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }

    /// System mass in solar masses (total mass for binaries).
    pub fn mass(&self) -> &[f64] {
        &self.mass
    }

    /// Age in Gyr.
    pub fn age(&self) -> &[f64] {
        &self.age
    }

    /// System spectral type on the numeric scale (10 = M0, 20 = L0,
    /// 30 = T0).
    pub fn spt(&self) -> &[f64] {
        &self.spt
    }

    /// Effective temperature in K.
    pub fn temperature(&self) -> &[f64] {
        &self.temperature
    }

    /// log10(L/L☉), flux-combined for binaries.
    pub fn luminosity(&self) -> &[f64] {
        &self.luminosity
    }

    pub fn is_binary(&self) -> &[bool] {
        &self.is_binary
    }

    pub fn primary_mass(&self) -> &[f64] {
        &self.primary_mass
    }

    pub fn secondary_mass(&self) -> &[f64] {
        &self.secondary_mass
    }

    pub fn primary_spt(&self) -> &[f64] {
        &self.primary_spt
    }

    pub fn secondary_spt(&self) -> &[f64] {
        &self.secondary_spt
    }

    pub fn primary_luminosity(&self) -> &[f64] {
        &self.primary_luminosity
    }

    pub fn secondary_luminosity(&self) -> &[f64] {
        &self.secondary_luminosity
    }

    /// Median luminosity-function scale factor, replicated across rows.
    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// Bootstrap standard deviation of the scale factor.
    pub fn scale_unc(&self) -> &[f64] {
        &self.scale_unc
    }

    /// Total model counts times the median scale.
    pub fn scale_times_model(&self) -> &[f64] {
        &self.scale_times_model
    }

    /// Heliocentric distance in pc, present after `add_distances`.
    pub fn distance(&self) -> Option<&[f64]> {
        self.distance.as_deref()
    }

    /// Galactic longitude in radians, present after `add_distances`.
    pub fn l(&self) -> Option<&[f64]> {
        self.l.as_deref()
    }

    /// Galactic latitude in radians, present after `add_distances`.
    pub fn b(&self) -> Option<&[f64]> {
        self.b.as_deref()
    }

    /// Galactocentric cylindrical radius in pc.
    pub fn r(&self) -> Option<&[f64]> {
        self.r.as_deref()
    }

    /// Height above the plane in pc.
    pub fn z(&self) -> Option<&[f64]> {
        self.z.as_deref()
    }

    /// Velocity draws, present after `add_kinematics`.
    pub fn velocities(&self) -> Option<&VelocitySample> {
        self.velocities.as_ref()
    }

    /// Absolute magnitudes per filter, present after `add_magnitudes`.
    pub fn absolute_mags(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.absolute_mags
    }

    /// Apparent magnitudes per filter; only filled when distances exist.
    pub fn apparent_mags(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.apparent_mags
    }

    pub(crate) fn assert_aligned(&self) {
        let n = self.mass.len();
        debug_assert_eq!(self.age.len(), n);
        debug_assert_eq!(self.spt.len(), n);
        debug_assert_eq!(self.temperature.len(), n);
        debug_assert_eq!(self.luminosity.len(), n);
        debug_assert_eq!(self.is_binary.len(), n);
        debug_assert_eq!(self.primary_mass.len(), n);
        debug_assert_eq!(self.secondary_mass.len(), n);
        debug_assert_eq!(self.primary_spt.len(), n);
        debug_assert_eq!(self.secondary_spt.len(), n);
        debug_assert_eq!(self.primary_luminosity.len(), n);
        debug_assert_eq!(self.secondary_luminosity.len(), n);
        debug_assert_eq!(self.scale.len(), n);
        debug_assert_eq!(self.scale_unc.len(), n);
        debug_assert_eq!(self.scale_times_model.len(), n);
    }
}
