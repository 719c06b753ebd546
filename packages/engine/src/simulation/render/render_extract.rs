use super::FluidSimulation;

pub(super) fn render(sim: &mut FluidSimulation) -> &[f32] {
    sim.render_buffer.clear();
    for p in sim.particles.iter() {
        sim.render_buffer.push(p.position.x);
        sim.render_buffer.push(p.position.y);
    }
    &sim.render_buffer
}
