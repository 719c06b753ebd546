use crate::core::math::Vec2;
use crate::domain::{FluidOptions, Particle};

use super::types::NeighborMap;

/// Stage 5: double-density relaxation.
///
/// For each particle, density and near-density come from its neighbors that
/// are still within the radius. Each neighbor moves by `d` along the unit
/// direction from the neighbor to the particle, and the particle takes the
/// opposite of the summed displacement once the loop is done. Runs sequentially: later particles see the positions earlier ones
/// already corrected.
pub fn relax_density(particles: &mut [Particle], neighbors: &NeighborMap, options: &FluidOptions, dt: f32) {
    let radius = options.radius;
    let half_dt_sq = 0.5 * dt * dt;

    for i in 0..particles.len() {
        let list = neighbors.get(i);
        if list.is_empty() {
            continue;
        }
        let origin = fast!(particles, [i]).position;

        let mut density = 0.0f32;
        let mut near_density = 0.0f32;
        for &j in list {
            let len = (fast!(particles, [j]).position - origin).length();
            if len >= radius {
                continue;
            }
            let q = 1.0 - len / radius;
            density += q * q;
            near_density += q * q * q;
        }

        let pressure = options.stiffness * (density - options.rest_density);
        let near_pressure = options.near_stiffness * near_density;

        let mut accumulated = Vec2::ZERO;
        for &j in list {
            let n = fast!(mut particles, [j]);
            let toward = origin - n.position;
            let len = toward.length();
            if len >= radius {
                continue;
            }
            let q = 1.0 - len / radius;
            let d = half_dt_sq * (pressure * q + near_pressure * q * q);
            let displacement = toward.normalize() * d;

            n.position += displacement;
            accumulated -= displacement;
        }

        fast!(mut particles, [i]).position += accumulated;
    }
}
