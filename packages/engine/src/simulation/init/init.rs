use crate::domain::{ConfigError, FluidOptions};
use crate::spatial::World;
use crate::systems::fluid::{NeighborMap, StepCounters};

use super::perf_stats::PerfStats;
use super::spawn::spawn_block;
use super::FluidSimulation;

pub(super) fn create_simulation(
    width: f32,
    height: f32,
    options: FluidOptions,
) -> Result<FluidSimulation, ConfigError> {
    let mut world = World::new(width, height)?;
    options.validate(world.cell_width())?;

    let mut particles = spawn_block(&options);
    for p in particles.iter_mut() {
        world.rebucket(p);
    }

    let count = particles.len();
    let (columns, rows) = world.dimensions();
    console_log!(
        "fluid: {} particles in a {}x{} world ({}x{} cells)",
        count, width, height, columns, rows
    );

    Ok(FluidSimulation {
        options,
        world,
        particles,
        neighbors: NeighborMap::new(count),
        frame: 0,
        counters: StepCounters::default(),
        render_buffer: Vec::with_capacity(count * 2),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
