use super::*;

impl World {
    /// Empties every bucket. Runs at the start of each tick before any
    /// particle is rebucketed.
    pub fn clear_buckets(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.particles.clear();
        }
    }

    /// Moves `particle` into the bucket of the cell containing its current
    /// position, or marks it unassigned when it left the world.
    pub fn rebucket(&mut self, particle: &mut Particle) {
        let idx = particle.index();
        if let Some(prev) = particle.cell.take() {
            if let Some(cell) = self.cells.get_mut(prev) {
                cell.remove_particle(idx);
            }
        }

        particle.cell = self.locate(particle.position);
        if let Some(cell) = particle.cell {
            self.cells[cell].particles.push(idx);
        }
    }

    /// Number of non-empty buckets.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.particles.is_empty()).count()
    }
}
