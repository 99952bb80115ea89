//! Galactic structure models and distance sampling.
//!
//! Provides the density/distance engine for population synthesis: analytic
//! thin disk / thick disk / halo density profiles, line-of-sight volume
//! integration, cached cumulative distance distributions with
//! inverse-transform sampling, and age-dependent kinematic draws.

pub mod coords;
pub mod density;
pub mod distance;
pub mod error;
pub mod kinematics;
pub mod params;
pub mod pointing;
pub mod sampling;
pub mod volume;

#[cfg(test)]
mod density_test;
#[cfg(test)]
mod kinematics_test;

// Re-export core types
pub use coords::{to_cylindrical, GalacticPoint};
pub use density::{
    exponential_density, galactic_density, profile_density, spheroid_density, DensityComponents,
    DensityProfile,
};
pub use distance::{draw_from_cdf, DistanceCdf};
pub use error::GalaxyError;
pub use kinematics::{draw_velocities, PopulationKind, VelocitySample};
pub use params::GalacticModel;
pub use pointing::{distance_from_modulus, Pointing, PointingConfig};
pub use volume::{volume, volume_with_resolution};
