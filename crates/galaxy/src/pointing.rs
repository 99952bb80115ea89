//! Survey pointings: a sky direction plus its cached sampling state.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rand_chacha::ChaChaRng;

use crate::density::DensityProfile;
use crate::distance::{draw_from_cdf, CdfKey, DistanceCdf};
use crate::error::GalaxyError;
use crate::params::GalacticModel;

/// Spectral-type bins the distance-limit table is computed over.
pub const SPT_BIN_MIN: u8 = 10;
pub const SPT_BIN_MAX: u8 = 42;

/// Photometric distance from the distance modulus, in pc.
///
/// `10^(-(M - m)/5 + 1)` for absolute magnitude `M` and apparent magnitude
/// `m`.
pub fn distance_from_modulus(abs_mag: f64, apparent_mag: f64) -> f64 {
    10f64.powf(-(abs_mag - apparent_mag) / 5.0 + 1.0)
}

/// Construction parameters for a [`Pointing`]: sky direction, survey
/// metadata, and the density model its distance draws integrate.
#[derive(Debug, Clone)]
pub struct PointingConfig {
    /// Galactic longitude in radians
    pub l: f64,
    /// Galactic latitude in radians
    pub b: f64,
    /// Survey this pointing belongs to
    pub survey: Option<String>,
    /// Field name
    pub name: Option<String>,
    /// Angular area in square degrees
    pub area: Option<f64>,
    /// Density profile used for distance sampling
    pub profile: DensityProfile,
    /// Galactic structural parameters
    pub model: GalacticModel,
}

impl PointingConfig {
    /// A pointing toward `(l, b)` with the default galaxy and the combined
    /// disk + halo profile.
    pub fn toward(l: f64, b: f64) -> Self {
        Self {
            l,
            b,
            survey: None,
            name: None,
            area: None,
            profile: DensityProfile::Both,
            model: GalacticModel::default(),
        }
    }
}

/// A sky direction with survey magnitude limits and cached distance-sampling
/// state.
///
/// The cumulative distance distribution for each (scale height, scale
/// length) pair is built at most once and shared via `Arc`. The
/// check-build-insert step is serialized behind a mutex: building twice
/// would only waste CPU (the result is deterministic), but the lock makes
/// the compute-once guarantee explicit. Entries are immutable once inserted,
/// so readers never observe stale data.
#[derive(Debug)]
pub struct Pointing {
    l: f64,
    b: f64,
    survey: Option<String>,
    name: Option<String>,
    area: Option<f64>,
    profile: DensityProfile,
    model: GalacticModel,
    mag_limits: HashMap<String, [f64; 2]>,
    dist_limits: HashMap<String, BTreeMap<u8, [f64; 2]>>,
    cdf_cache: Mutex<HashMap<CdfKey, Arc<DistanceCdf>>>,
    cdf_builds: AtomicUsize,
}

impl Pointing {
    pub fn new(config: PointingConfig) -> Self {
        Self {
            l: config.l,
            b: config.b,
            survey: config.survey,
            name: config.name,
            area: config.area,
            profile: config.profile,
            model: config.model,
            mag_limits: HashMap::new(),
            dist_limits: HashMap::new(),
            cdf_cache: Mutex::new(HashMap::new()),
            cdf_builds: AtomicUsize::new(0),
        }
    }

    /// Galactic longitude in radians.
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Galactic latitude in radians.
    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn survey(&self) -> Option<&str> {
        self.survey.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Angular area in square degrees.
    pub fn area(&self) -> Option<f64> {
        self.area
    }

    pub fn profile(&self) -> DensityProfile {
        self.profile
    }

    pub fn model(&self) -> &GalacticModel {
        &self.model
    }

    /// Per-filter apparent magnitude limits, `[bright, faint]`.
    pub fn magnitude_limits(&self) -> &HashMap<String, [f64; 2]> {
        &self.mag_limits
    }

    /// Per-filter distance limits per spectral-type bin, `[d_min, d_max]`
    /// in pc.
    pub fn distance_limits(&self) -> &HashMap<String, BTreeMap<u8, [f64; 2]>> {
        &self.dist_limits
    }

    /// Set the survey magnitude limits and recompute the distance-limit
    /// table.
    ///
    /// This walks every spectral-type bin 10–42 for every filter, mapping
    /// the bin's absolute magnitude (from `abs_mag(filter, spt)`) through
    /// the distance modulus at both the bright and faint limits. The cost is
    /// O(filters × bins); it is a method rather than a field assignment for
    /// exactly that reason.
    pub fn set_magnitude_limits<F>(&mut self, limits: HashMap<String, [f64; 2]>, abs_mag: F)
    where
        F: Fn(&str, f64) -> f64,
    {
        for (filter, [bright, faint]) in &limits {
            let mut per_bin = BTreeMap::new();
            for spt in SPT_BIN_MIN..=SPT_BIN_MAX {
                let m = abs_mag(filter, spt as f64);
                let d_min = distance_from_modulus(m, *bright);
                let d_max = distance_from_modulus(m, *faint);
                per_bin.insert(spt, [d_min, d_max]);
            }
            self.dist_limits.insert(filter.clone(), per_bin);
        }
        self.mag_limits = limits;
    }

    /// The cached cumulative distance distribution for this direction and
    /// the given scale parameters, building it on first use.
    pub fn distance_cdf(
        &self,
        scale_h: f64,
        scale_l: f64,
    ) -> Result<Arc<DistanceCdf>, GalaxyError> {
        let key = CdfKey::new(self.l, self.b, scale_h, scale_l, self.profile);
        let mut cache = self.cdf_cache.lock().expect("cdf cache poisoned");
        if let Some(cdf) = cache.get(&key) {
            return Ok(Arc::clone(cdf));
        }
        let cdf = Arc::new(DistanceCdf::build(
            &self.model,
            self.l,
            self.b,
            scale_h,
            scale_l,
            self.profile,
        )?);
        self.cdf_builds.fetch_add(1, Ordering::Relaxed);
        cache.insert(key, Arc::clone(&cdf));
        Ok(cdf)
    }

    /// How many cumulative distributions have been built (not fetched) so
    /// far. Instrumentation for cache-reuse checks.
    pub fn cdf_builds(&self) -> usize {
        self.cdf_builds.load(Ordering::Relaxed)
    }

    /// Draw `n` heliocentric distances in `[d_min, d_max]` along this
    /// pointing by inverse-transform sampling of the cached cumulative
    /// distribution.
    ///
    /// A local logarithmic grid between the limits is evaluated against the
    /// cached distribution and renormalized by its local maximum, so the
    /// draw is conditional on the star lying inside the distance window.
    ///
    /// # Errors
    /// `NonPositiveDistance` / `InvalidDistanceRange` for a bad window,
    /// `NonPositiveScale` for non-physical scale parameters.
    pub fn draw_distances(
        &self,
        rng: &mut ChaChaRng,
        d_min: f64,
        d_max: f64,
        scale_h: f64,
        scale_l: f64,
        n: usize,
    ) -> Result<Vec<f64>, GalaxyError> {
        if d_min <= 0.0 {
            return Err(GalaxyError::NonPositiveDistance(d_min));
        }
        if d_min >= d_max {
            return Err(GalaxyError::InvalidDistanceRange { d_min, d_max });
        }

        let cdf = self.distance_cdf(scale_h, scale_l)?;

        let points = n.max(2);
        let log_min = d_min.log10();
        let log_step = (d_max.log10() - log_min) / (points - 1) as f64;
        let grid: Vec<f64> = (0..points)
            .map(|i| 10f64.powf(log_min + log_step * i as f64))
            .collect();
        let values: Vec<f64> = grid.iter().map(|&d| cdf.evaluate(d)).collect();

        let samples = draw_from_cdf(rng, &grid, &values, n);
        // The interpolation grid spans exactly [d_min, d_max]; clamp against
        // floating-point spill at the edges.
        Ok(samples
            .iter()
            .map(|&d| if d.is_nan() { d } else { d.clamp(d_min, d_max) })
            .collect())
    }
}
