use crate::core::math::Vec2;
use crate::domain::Particle;

/// Stage 1: `v += gravity * dt`
#[inline]
pub fn apply_external_forces(particles: &mut [Particle], gravity: Vec2, dt: f32) {
    let dv = gravity * dt;
    for p in particles.iter_mut() {
        p.velocity += dv;
    }
}
