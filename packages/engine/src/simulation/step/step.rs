use crate::systems::fluid::{
    apply_external_forces, apply_viscosity, integrate_positions, rebuild_neighbors, reconstruct_velocity,
    relax_density, resolve_collisions, StepCounters,
};

use super::{FluidSimulation, PerfTimer};

pub(super) fn tick(sim: &mut FluidSimulation, dt: f32) -> bool {
    if !(dt.is_finite() && dt > 0.0) {
        console_warn!("fluid: ignoring tick with dt = {}", dt);
        return false;
    }

    if sim.perf_enabled {
        step_timed(sim, dt);
    } else {
        step_untimed(sim, dt);
    }

    sim.frame += 1;
    true
}

fn step_untimed(sim: &mut FluidSimulation, dt: f32) {
    let mut counters = StepCounters::default();

    apply_external_forces(&mut sim.particles, sim.options.gravity, dt);
    apply_viscosity(&mut sim.particles, &sim.neighbors, &sim.options, dt);
    counters.out_of_bounds = integrate_positions(&mut sim.particles, &mut sim.world, dt);
    rebuild_neighbors(&sim.particles, &sim.world, sim.options.radius, &mut sim.neighbors);
    relax_density(&mut sim.particles, &sim.neighbors, &sim.options, dt);
    counters.collisions_resolved = resolve_collisions(&mut sim.particles, &sim.world, &sim.options, dt);
    reconstruct_velocity(&mut sim.particles, dt);

    counters.neighbor_entries = sim.neighbors.total_entries() as u32;
    counters.max_neighbors = sim.neighbors.max_len() as u32;
    sim.counters = counters;
}

fn step_timed(sim: &mut FluidSimulation, dt: f32) {
    sim.perf_stats.reset();
    let step_start = PerfTimer::start();
    let mut lap = PerfTimer::start();
    let mut counters = StepCounters::default();

    apply_external_forces(&mut sim.particles, sim.options.gravity, dt);
    sim.perf_stats.forces_ms = lap.lap_ms();

    apply_viscosity(&mut sim.particles, &sim.neighbors, &sim.options, dt);
    sim.perf_stats.viscosity_ms = lap.lap_ms();

    counters.out_of_bounds = integrate_positions(&mut sim.particles, &mut sim.world, dt);
    sim.perf_stats.integrate_ms = lap.lap_ms();

    rebuild_neighbors(&sim.particles, &sim.world, sim.options.radius, &mut sim.neighbors);
    sim.perf_stats.neighbors_ms = lap.lap_ms();

    relax_density(&mut sim.particles, &sim.neighbors, &sim.options, dt);
    sim.perf_stats.relaxation_ms = lap.lap_ms();

    counters.collisions_resolved = resolve_collisions(&mut sim.particles, &sim.world, &sim.options, dt);
    sim.perf_stats.collision_ms = lap.lap_ms();

    reconstruct_velocity(&mut sim.particles, dt);
    sim.perf_stats.velocity_ms = lap.lap_ms();

    counters.neighbor_entries = sim.neighbors.total_entries() as u32;
    counters.max_neighbors = sim.neighbors.max_len() as u32;
    sim.counters = counters;

    let stats = &mut sim.perf_stats;
    stats.step_ms = step_start.elapsed_ms();
    stats.particle_count = sim.particles.len() as u32;
    stats.out_of_bounds = counters.out_of_bounds;
    stats.neighbor_pairs = counters.neighbor_entries;
    stats.max_neighbors = counters.max_neighbors;
    stats.collisions_resolved = counters.collisions_resolved;
    stats.occupied_cells = sim.world.occupied_cells() as u32;
}
