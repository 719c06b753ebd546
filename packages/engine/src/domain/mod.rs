//! Domain types: particles, tunables and configuration errors.

pub mod errors;
pub mod options;
pub mod particle;

pub use errors::ConfigError;
pub use options::FluidOptions;
pub use particle::{CellIndex, Particle, ParticleId};
