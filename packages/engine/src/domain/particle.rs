use crate::core::math::Vec2;

pub type ParticleId = u32;

/// Index into the world's cell list.
pub type CellIndex = usize;

/// A single fluid particle.
///
/// `velocity` is rebuilt from `(position - prev_position) / dt` at the end
/// of every tick; forces only shape it through the position update.
#[derive(Clone, Debug)]
pub struct Particle {
    pub id: ParticleId,
    pub position: Vec2,
    /// Position before integration in the current tick
    pub prev_position: Vec2,
    pub velocity: Vec2,
    /// Current grid cell, `None` while outside the world
    pub cell: Option<CellIndex>,
}

impl Particle {
    /// Particle at rest at `position`, not yet bucketed.
    pub fn new(id: ParticleId, position: Vec2) -> Self {
        Self {
            id,
            position,
            prev_position: position,
            velocity: Vec2::zero(),
            cell: None,
        }
    }

    /// Index into the simulation's particle list (ids are dense).
    #[inline]
    pub fn index(&self) -> usize {
        self.id as usize
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.cell.is_some()
    }
}
