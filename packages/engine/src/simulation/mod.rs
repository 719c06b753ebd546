//! FluidSimulation - owns the particles and runs the per-tick pipeline
//!
//! The simulation only orchestrates: geometry lives in `core::math`, the
//! broad-phase grid in `spatial`, and each pipeline stage in
//! `systems::fluid`. Everything mutable (particles, buckets, neighbor lists)
//! belongs to one instance, so independent simulations can coexist.

use crate::core::math::{Vec2, DEFAULT_FRICTION};
use crate::domain::{ConfigError, FluidOptions, Particle};
use crate::spatial::World;
use crate::systems::fluid::{NeighborMap, StepCounters};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/spawn.rs"]
mod spawn;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::{Fluid, RenderLayout};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Conventional fixed timestep (one display frame at 60 Hz)
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

pub struct FluidSimulation {
    options: FluidOptions,
    world: World,
    particles: Vec<Particle>,
    neighbors: NeighborMap,

    // State
    frame: u64,
    counters: StepCounters,
    render_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl FluidSimulation {
    /// Simulation with default options in a `width x height` world.
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        init::create_simulation(width, height, FluidOptions::default())
    }

    pub fn with_options(width: f32, height: f32, options: FluidOptions) -> Result<Self, ConfigError> {
        init::create_simulation(width, height, options)
    }

    /// Options given as camelCase JSON; missing keys keep their defaults.
    pub fn from_options_json(width: f32, height: f32, json: &str) -> Result<Self, ConfigError> {
        let options = FluidOptions::from_json(json)?;
        init::create_simulation(width, height, options)
    }

    pub fn options(&self) -> &FluidOptions { &self.options }

    pub fn world(&self) -> &World { &self.world }

    pub fn width(&self) -> f32 { self.world.width() }

    pub fn height(&self) -> f32 { self.world.height() }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    /// Neighbor lists computed by the last tick.
    pub fn neighbors(&self) -> &NeighborMap { &self.neighbors }

    pub fn frame(&self) -> u64 { self.frame }

    /// Current particle positions, in particle order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.particles.get(index).map(|p| p.position)
    }

    /// Counters from the last tick.
    pub fn counters(&self) -> StepCounters { self.counters }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick's perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn gravity(&self) -> Vec2 {
        self.options.gravity
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) -> Result<(), ConfigError> {
        settings::set_gravity(self, x, y)
    }

    /// Adds a static boundary segment; usable before or between ticks.
    pub fn add_boundary(&mut self, start: Vec2, end: Vec2, friction: f32) -> Result<usize, ConfigError> {
        commands::add_boundary(self, start, end, friction)
    }

    /// `add_boundary` with the default friction.
    pub fn add_boundary_default(&mut self, start: Vec2, end: Vec2) -> Result<usize, ConfigError> {
        commands::add_boundary(self, start, end, DEFAULT_FRICTION)
    }

    /// Advances the simulation by exactly one step of `dt` seconds.
    ///
    /// A non-positive or non-finite `dt` is logged and ignored (returns false).
    pub fn tick(&mut self, dt: f32) -> bool {
        step::tick(self, dt)
    }

    /// Copies positions into the interleaved `[x0, y0, x1, y1, ..]` buffer
    /// handed to the renderer. No physics.
    pub fn render(&mut self) -> &[f32] {
        render_extract::render(self)
    }

    pub fn render_buffer(&self) -> &[f32] {
        &self.render_buffer
    }

    pub fn render_buffer_ptr(&self) -> *const f32 {
        self.render_buffer.as_ptr()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
