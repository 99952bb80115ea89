//! Enrichment columns added to an assembled catalog: distances and
//! positions along a pointing, kinematics, photometry.

use rand::Rng;
use rand_chacha::ChaChaRng;

use galaxy::{draw_velocities, to_cylindrical, Pointing, PopulationKind};
use relations::MagnitudeRelations;

use crate::error::PopulationError;
use crate::table::PopulationTable;

// Distance pool oversize factor relative to the table length
const DISTANCE_POOL_FACTOR: f64 = 1.5;

impl PopulationTable {
    /// Assign heliocentric distances along `pointing` and derive the
    /// galactocentric position columns.
    ///
    /// An oversized distance pool is drawn once from the pointing's cached
    /// distance distribution over `[d_min, d_max]`, then each row picks
    /// from the pool with replacement. `scale_h` and `scale_l` are the
    /// disk scale height and length of the population being placed.
    pub fn add_distances(
        &mut self,
        rng: &mut ChaChaRng,
        pointing: &Pointing,
        d_min: f64,
        d_max: f64,
        scale_h: f64,
        scale_l: f64,
    ) -> Result<(), PopulationError> {
        let n = self.len();
        if n == 0 {
            self.distance = Some(Vec::new());
            self.l = Some(Vec::new());
            self.b = Some(Vec::new());
            self.r = Some(Vec::new());
            self.z = Some(Vec::new());
            return Ok(());
        }

        let pool_size = (n as f64 * DISTANCE_POOL_FACTOR).ceil() as usize;
        let pool = pointing.draw_distances(rng, d_min, d_max, scale_h, scale_l, pool_size)?;
        let distance: Vec<f64> = (0..n)
            .map(|_| pool[rng.random_range(0..pool.len())])
            .collect();

        let model = pointing.model();
        let mut r = Vec::with_capacity(n);
        let mut z = Vec::with_capacity(n);
        for &d in &distance {
            let p = to_cylindrical(model, pointing.l(), pointing.b(), d);
            r.push(p.r);
            z.push(p.z);
        }

        self.l = Some(vec![pointing.l(); n]);
        self.b = Some(vec![pointing.b(); n]);
        self.distance = Some(distance);
        self.r = Some(r);
        self.z = Some(z);
        Ok(())
    }

    /// Draw one velocity set per row from the population's dispersion
    /// relations.
    pub fn add_kinematics(
        &mut self,
        rng: &mut ChaChaRng,
        kind: PopulationKind,
    ) -> Result<(), PopulationError> {
        let sample = draw_velocities(rng, &self.age, kind)?;
        self.velocities = Some(sample);
        Ok(())
    }

    /// Sample absolute magnitudes per filter for every row, and apparent
    /// magnitudes when distances are present.
    ///
    /// Spectral types outside a fit's validity, and unknown filters, give
    /// NaN magnitudes.
    pub fn add_magnitudes(
        &mut self,
        rng: &mut ChaChaRng,
        relations: &MagnitudeRelations,
        filters: &[&str],
    ) {
        for &filter in filters {
            let abs: Vec<f64> = self
                .spt
                .iter()
                .map(|&s| relations.sample_magnitude(rng, filter, s))
                .collect();
            if let Some(distance) = &self.distance {
                let app: Vec<f64> = abs
                    .iter()
                    .zip(distance)
                    .map(|(&m, &d)| m + 5.0 * (d / 10.0).log10())
                    .collect();
                self.apparent_mags.insert(filter.to_string(), app);
            }
            self.absolute_mags.insert(filter.to_string(), abs);
        }
    }
}
