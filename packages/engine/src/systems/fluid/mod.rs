//! Fluid pipeline stages (double-density relaxation)
//!
//! Run once per tick in this order; each stage relies on the state the
//! previous ones left behind:
//! 1. external forces      (`forces`)
//! 2. viscosity            (`viscosity`, previous tick's neighbors)
//! 3. position integration (`integrate`, rebuckets particles)
//! 4. neighbor lists       (`neighbors`)
//! 5. density relaxation   (`relaxation`)
//! 6. boundary collisions  (`collision`)
//! 7. velocity update      (`velocity`)

mod collision;
mod forces;
mod integrate;
mod neighbors;
mod relaxation;
mod types;
mod velocity;
mod viscosity;

pub use collision::resolve_collisions;
pub use forces::apply_external_forces;
pub use integrate::integrate_positions;
pub use neighbors::rebuild_neighbors;
pub use relaxation::relax_density;
pub use types::{NeighborMap, StepCounters};
pub use velocity::reconstruct_velocity;
pub use viscosity::apply_viscosity;
