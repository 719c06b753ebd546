use crate::domain::Particle;
use crate::spatial::World;

/// Stage 3: snapshot `prev_position`, advance by `velocity * dt` and
/// rebucket. Buckets are cleared first so membership never accumulates.
///
/// Returns how many particles ended up outside the world.
pub fn integrate_positions(particles: &mut [Particle], world: &mut World, dt: f32) -> u32 {
    world.clear_buckets();

    let mut out_of_bounds = 0u32;
    for p in particles.iter_mut() {
        p.prev_position = p.position;
        p.position += p.velocity * dt;

        world.rebucket(p);
        if p.cell.is_none() {
            out_of_bounds += 1;
        }
    }
    out_of_bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;

    #[test]
    fn snapshots_then_moves_and_buckets() {
        let mut world = World::with_cell_width(100.0, 100.0, 20.0).expect("world");
        let mut particles = vec![
            Particle::new(0, Vec2::new(10.0, 10.0)),
            Particle::new(1, Vec2::new(95.0, 50.0)),
        ];
        particles[0].velocity = Vec2::new(60.0, 0.0);
        particles[1].velocity = Vec2::new(600.0, 0.0);

        let out = integrate_positions(&mut particles, &mut world, 0.5);

        assert_eq!(out, 1);
        assert_eq!(particles[0].prev_position, Vec2::new(10.0, 10.0));
        assert_eq!(particles[0].position, Vec2::new(40.0, 10.0));
        assert_eq!(particles[0].cell, world.locate(Vec2::new(40.0, 10.0)));
        assert_eq!(particles[1].cell, None);
        assert_eq!(world.occupied_cells(), 1);
    }
}
