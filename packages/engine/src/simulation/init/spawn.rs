use crate::core::math::Vec2;
use crate::domain::{FluidOptions, Particle};

/// Square block of `particle_number` particles centered on the spawn origin.
///
/// Columns = ceil(sqrt(n)); particles fill row by row at `spacing`.
pub(super) fn spawn_block(options: &FluidOptions) -> Vec<Particle> {
    let count = options.particle_number as usize;
    if count == 0 {
        return Vec::new();
    }

    let spacing = options.effective_spawn_spacing();
    let columns = (count as f32).sqrt().ceil() as usize;
    let rows = (count + columns - 1) / columns;

    let half_extent = Vec2::new(
        (columns - 1) as f32 * spacing * 0.5,
        (rows - 1) as f32 * spacing * 0.5,
    );
    let top_left = options.spawn_origin - half_extent;

    (0..count)
        .map(|k| {
            let col = k % columns;
            let row = k / columns;
            let offset = Vec2::new(col as f32 * spacing, row as f32 * spacing);
            Particle::new(k as u32, top_left + offset)
        })
        .collect()
}
