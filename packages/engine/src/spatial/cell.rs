use crate::core::math::{Bound, Vec2};
use crate::domain::CellIndex;

/// Square region of the world grid.
///
/// `neighbors` is resolved once when the grid is built; `planes` grows as
/// boundaries are added; `particles` is a per-tick bucket.
#[derive(Clone, Debug)]
pub struct Cell {
    index: CellIndex,
    position: Vec2,
    bound: Bound,
    pub(crate) neighbors: Vec<CellIndex>,
    pub(crate) planes: Vec<usize>,
    pub(crate) particles: Vec<usize>,
}

impl Cell {
    /// Cell with top-left corner at `position`.
    pub fn new(index: CellIndex, position: Vec2, cell_width: f32) -> Self {
        let max = Vec2::new(position.x + cell_width, position.y + cell_width);
        Self {
            index,
            position,
            bound: Bound::new(position, max),
            neighbors: Vec::with_capacity(8),
            planes: Vec::new(),
            particles: Vec::new(),
        }
    }

    pub fn index(&self) -> CellIndex { self.index }

    pub fn position(&self) -> Vec2 { self.position }

    pub fn bound(&self) -> &Bound { &self.bound }

    /// Adjacent cells (N row, own row, S row; west to east).
    pub fn neighbors(&self) -> &[CellIndex] { &self.neighbors }

    /// Indices of the planes whose bound overlaps this cell.
    pub fn planes(&self) -> &[usize] { &self.planes }

    /// Particles bucketed here this tick.
    pub fn particles(&self) -> &[usize] { &self.particles }

    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.bound.contains_point(p)
    }

    #[inline]
    pub fn overlaps(&self, bound: &Bound) -> bool {
        self.bound.intersects(bound)
    }

    pub(crate) fn remove_particle(&mut self, particle: usize) {
        if let Some(pos) = self.particles.iter().position(|&p| p == particle) {
            self.particles.swap_remove(pos);
        }
    }
}
