use crate::domain::Particle;
use crate::spatial::World;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::types::NeighborMap;

/// Stage 4: exact neighbor lists from the grid's candidates.
///
/// A candidate counts when `dist² < radius²` (strict, so a particle exactly
/// one radius away is excluded). Out-of-bounds particles get empty lists.
/// Each list only reads positions and buckets, so with `parallel` the lists
/// are built concurrently; order matches the serial path.
pub fn rebuild_neighbors(particles: &[Particle], world: &World, radius: f32, map: &mut NeighborMap) {
    map.reset(particles.len());
    let radius_sq = radius * radius;

    #[cfg(feature = "parallel")]
    {
        map.lists_mut()
            .par_iter_mut()
            .enumerate()
            .for_each(|(i, list)| collect_neighbors(particles, world, i, radius_sq, list));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (i, list) in map.lists_mut().iter_mut().enumerate() {
            collect_neighbors(particles, world, i, radius_sq, list);
        }
    }
}

#[inline]
fn collect_neighbors(particles: &[Particle], world: &World, i: usize, radius_sq: f32, out: &mut Vec<usize>) {
    let p = fast!(particles, [i]);
    if world.is_out_of_bounds(p) {
        return;
    }

    for j in world.candidate_neighbors(p) {
        if j == i {
            continue;
        }
        let d = p.position - fast!(particles, [j]).position;
        if d.length_squared() < radius_sq {
            out.push(j);
        }
    }
}
