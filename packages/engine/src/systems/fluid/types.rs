/// Per-tick neighbor lists keyed by particle index.
///
/// Rebuilt in full every tick; the viscosity stage deliberately reads the
/// lists left over from the previous tick before they are rebuilt.
#[derive(Clone, Debug, Default)]
pub struct NeighborMap {
    lists: Vec<Vec<usize>>,
}

impl NeighborMap {
    pub fn new(particle_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); particle_count],
        }
    }

    /// Neighbors of `particle`; empty for unknown indices.
    #[inline]
    pub fn get(&self, particle: usize) -> &[usize] {
        self.lists.get(particle).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Empties every list, keeping allocations, sized for `particle_count`.
    pub fn reset(&mut self, particle_count: usize) {
        self.lists.resize_with(particle_count, Vec::new);
        for list in self.lists.iter_mut() {
            list.clear();
        }
    }

    pub(crate) fn lists_mut(&mut self) -> &mut [Vec<usize>] {
        &mut self.lists
    }

    /// Sum of list lengths (each interacting pair counts twice).
    pub fn total_entries(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn max_len(&self) -> usize {
        self.lists.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Counters gathered while running the pipeline, read by perf stats.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepCounters {
    pub out_of_bounds: u32,
    pub neighbor_entries: u32,
    pub max_neighbors: u32,
    pub collisions_resolved: u32,
}
