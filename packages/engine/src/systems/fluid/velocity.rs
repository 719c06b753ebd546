use crate::domain::Particle;

/// Stage 7: velocity from the net displacement of this tick.
#[inline]
pub fn reconstruct_velocity(particles: &mut [Particle], dt: f32) {
    let inv_dt = 1.0 / dt;
    for p in particles.iter_mut() {
        p.velocity = (p.position - p.prev_position) * inv_dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;

    #[test]
    fn velocity_is_displacement_over_dt() {
        let mut p = Particle::new(0, Vec2::new(2.0, 1.0));
        p.prev_position = Vec2::new(1.0, 1.5);
        p.velocity = Vec2::new(100.0, 100.0);
        let mut particles = vec![p];

        reconstruct_velocity(&mut particles, 0.5);
        assert_eq!(particles[0].velocity, Vec2::new(2.0, -1.0));
    }
}
