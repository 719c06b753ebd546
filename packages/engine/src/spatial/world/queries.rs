use super::*;

impl World {
    /// Particles bucketed in the particle's own cell and its adjacent cells.
    ///
    /// Includes the particle itself; callers filter by exact distance.
    /// Empty for an unassigned particle.
    pub fn candidate_neighbors<'a>(&'a self, particle: &Particle) -> impl Iterator<Item = usize> + 'a {
        particle
            .cell
            .and_then(|index| self.cells.get(index))
            .into_iter()
            .flat_map(|cell| std::iter::once(cell.index()).chain(cell.neighbors.iter().copied()))
            .flat_map(move |index| self.cells[index].particles.iter().copied())
    }

    /// Closest plane registered with the particle's cell.
    pub fn nearest_boundary(&self, particle: &Particle) -> Option<&Plane> {
        let cell = self.cells.get(particle.cell?)?;

        cell.planes
            .iter()
            .map(|&i| &self.planes[i])
            .min_by(|a, b| {
                a.distance_to(particle.position)
                    .total_cmp(&b.distance_to(particle.position))
            })
    }
}
