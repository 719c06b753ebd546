use crate::domain::{FluidOptions, Particle};

use super::types::NeighborMap;

/// Stage 2: pairwise viscous impulses on approaching neighbors.
///
/// Uses the previous tick's neighbor lists, so a pair may have drifted past
/// the interaction radius since; such pairs (q >= 1) are skipped. Each visit
/// only changes the visiting particle: the partner gets its share when its
/// own list is processed.
pub fn apply_viscosity(particles: &mut [Particle], neighbors: &NeighborMap, options: &FluidOptions, dt: f32) {
    let radius = options.radius;
    let sigma = options.linear_viscosity;
    let beta = options.quadratic_viscosity;

    for i in 0..particles.len() {
        let list = neighbors.get(i);
        if list.is_empty() {
            continue;
        }

        for &j in list {
            let (n_pos, n_vel) = {
                let n = fast!(particles, [j]);
                (n.position, n.velocity)
            };
            let p = fast!(mut particles, [i]);

            let rp = n_pos - p.position;
            let mut rv = (p.velocity - n_vel).dot(rp);
            if rv <= 0.0 {
                continue;
            }

            let len = rp.length();
            let q = len / radius;
            if q >= 1.0 {
                continue;
            }
            rv /= len;
            let dir = rp.normalize();

            let impulse = 0.5 * dt * (1.0 - q) * (sigma * rv + beta * rv * rv);
            p.velocity -= dir * impulse;
        }
    }
}
