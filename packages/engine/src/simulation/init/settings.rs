use crate::core::math::Vec2;
use crate::domain::ConfigError;

use super::perf_stats::PerfStats;
use super::FluidSimulation;

pub(super) fn enable_perf_metrics(sim: &mut FluidSimulation, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &FluidSimulation) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn set_gravity(sim: &mut FluidSimulation, x: f32, y: f32) -> Result<(), ConfigError> {
    let gravity = Vec2::new(x, y);
    if !gravity.is_finite() {
        return Err(ConfigError::InvalidOption {
            name: "gravity",
            value: if x.is_finite() { y } else { x },
            reason: "must be finite",
        });
    }
    sim.options.gravity = gravity;
    Ok(())
}
