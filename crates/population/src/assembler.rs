//! Assembly of the final catalog from the single and binary pools.

use std::collections::BTreeMap;

use rand::Rng;
use rand_chacha::ChaChaRng;

use galaxy::sampling::sample_gaussian;
use relations::{
    combined_binary_teff, system_spectral_type, LocalLuminosityFunction,
    SYSTEM_TYPE_PRIMARY_RANGE,
};

use crate::error::PopulationError;
use crate::scale::scale_to_local_lf;
use crate::synthesis::{Binaries, Singles};
use crate::table::PopulationTable;

/// Scatter of the combined spectral-type estimate, in subtypes.
const COMBINED_SPT_SCATTER: f64 = 0.3;

/// Flux-combined log-luminosity of a binary:
/// `log10(10^L_p + 10^L_s)`.
pub fn combined_luminosity(primary: f64, secondary: f64) -> f64 {
    (10f64.powf(primary) + 10f64.powf(secondary)).log10()
}

/// Combined spectral type of an unresolved pair.
///
/// Primaries outside the combiner's validity range keep their own type
/// unchanged; otherwise the blend estimate on integer-rounded component
/// types is perturbed by the empirical 0.3-subtype scatter.
fn combined_spectral_type(rng: &mut ChaChaRng, primary: f64, secondary: f64) -> f64 {
    let (lo, hi) = SYSTEM_TYPE_PRIMARY_RANGE;
    if primary < lo || primary > hi {
        return primary;
    }
    let estimate = system_spectral_type(primary.round(), secondary.round());
    sample_gaussian(rng, estimate, COMBINED_SPT_SCATTER)
}

/// Mix the binary pool into the singles at the requested binary fraction
/// and calibrate the result against the observed luminosity function.
///
/// With `b = binary_fraction` and `n` singles, the catalog gains
/// `round(n / (1 - b)) - n` binaries drawn from the pool uniformly with
/// replacement (duplicate systems are intended). Single rows carry NaN in
/// the per-component columns.
///
/// # Errors
/// `InvalidBinaryFraction` outside [0, 1); `EmptyBinaryPool` when binaries
/// are requested from an empty pool.
pub fn assemble(
    rng: &mut ChaChaRng,
    singles: &Singles,
    binaries: &Binaries,
    binary_fraction: f64,
    lf: &LocalLuminosityFunction,
) -> Result<PopulationTable, PopulationError> {
    if !(0.0..1.0).contains(&binary_fraction) {
        return Err(PopulationError::InvalidBinaryFraction(binary_fraction));
    }

    let n_singles = singles.len();
    let n_total = (n_singles as f64 / (1.0 - binary_fraction)).round() as usize;
    let n_draw = n_total - n_singles;
    if n_draw > 0 && binaries.is_empty() {
        return Err(PopulationError::EmptyBinaryPool(n_draw));
    }

    // Derived columns over the whole pool, before selection
    let pool = binaries.len();
    let mut total_mass = Vec::with_capacity(pool);
    let mut pool_luminosity = Vec::with_capacity(pool);
    let mut pool_spt = Vec::with_capacity(pool);
    let mut pool_teff = Vec::with_capacity(pool);
    for i in 0..pool {
        total_mass.push(binaries.primary_mass[i] + binaries.secondary_mass[i]);
        pool_luminosity.push(combined_luminosity(
            binaries.primary_luminosity[i],
            binaries.secondary_luminosity[i],
        ));
        let spt = combined_spectral_type(rng, binaries.primary_spt[i], binaries.secondary_spt[i]);
        pool_teff.push(combined_binary_teff(rng, spt));
        pool_spt.push(spt);
    }

    let picks: Vec<usize> = (0..n_draw).map(|_| rng.random_range(0..pool)).collect();

    let n = n_singles + n_draw;
    let nan_singles = vec![f64::NAN; n_singles];

    let mut mass = singles.mass.clone();
    let mut age = singles.age.clone();
    let mut spt = singles.spt.clone();
    let mut temperature = singles.temperature.clone();
    let mut luminosity = singles.luminosity.clone();
    let mut is_binary = vec![false; n_singles];
    let mut primary_mass = nan_singles.clone();
    let mut secondary_mass = nan_singles.clone();
    let mut primary_spt = nan_singles.clone();
    let mut secondary_spt = nan_singles.clone();
    let mut primary_luminosity = nan_singles.clone();
    let mut secondary_luminosity = nan_singles;

    for &i in &picks {
        mass.push(total_mass[i]);
        age.push(binaries.age[i]);
        spt.push(pool_spt[i]);
        temperature.push(pool_teff[i]);
        luminosity.push(pool_luminosity[i]);
        is_binary.push(true);
        primary_mass.push(binaries.primary_mass[i]);
        secondary_mass.push(binaries.secondary_mass[i]);
        primary_spt.push(binaries.primary_spt[i]);
        secondary_spt.push(binaries.secondary_spt[i]);
        primary_luminosity.push(binaries.primary_luminosity[i]);
        secondary_luminosity.push(binaries.secondary_luminosity[i]);
    }

    let lf_scale = scale_to_local_lf(rng, &temperature, lf);

    let table = PopulationTable {
        mass,
        age,
        spt,
        temperature,
        luminosity,
        is_binary,
        primary_mass,
        secondary_mass,
        primary_spt,
        secondary_spt,
        primary_luminosity,
        secondary_luminosity,
        scale: vec![lf_scale.median; n],
        scale_unc: vec![lf_scale.std_dev; n],
        scale_times_model: vec![lf_scale.scaled_total; n],
        distance: None,
        l: None,
        b: None,
        r: None,
        z: None,
        velocities: None,
        absolute_mags: BTreeMap::new(),
        apparent_mags: BTreeMap::new(),
    };
    table.assert_aligned();
    Ok(table)
}
