use crate::domain::{FluidOptions, Particle};
use crate::spatial::World;

/// Stage 6: push particles off the nearest boundary of their cell.
///
/// Within `collision_radius` the particle is moved back along the plane
/// normal by `softness * (distance + collision_radius)` and along the
/// tangent by a friction term from its direction of travel this tick.
/// Returns the number of contacts resolved.
pub fn resolve_collisions(particles: &mut [Particle], world: &World, options: &FluidOptions, dt: f32) -> u32 {
    let mut resolved = 0u32;

    for p in particles.iter_mut() {
        // Relaxation may have pushed it past the edge since it was bucketed
        if world.is_out_of_bounds(p) {
            continue;
        }
        let Some(plane) = world.nearest_boundary(p) else {
            continue;
        };

        let distance = plane.distance_to(p.position);
        if distance >= options.collision_radius {
            continue;
        }

        let travel = (p.position - p.prev_position).normalize();
        let tangent = plane.tangent_at(p.position);
        let normal = plane.normal_at(p.position);

        let friction = dt * plane.friction() * travel.dot(tangent);
        let correction = options.collision_softness * (distance + options.collision_radius);

        p.position -= tangent * friction;
        p.position -= normal * correction;
        resolved += 1;
    }
    resolved
}
