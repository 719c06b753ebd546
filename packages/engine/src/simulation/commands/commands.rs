use crate::core::math::Vec2;
use crate::domain::ConfigError;

use super::FluidSimulation;

pub(super) fn add_boundary(
    sim: &mut FluidSimulation,
    start: Vec2,
    end: Vec2,
    friction: f32,
) -> Result<usize, ConfigError> {
    sim.world.add_boundary(start, end, friction).map_err(|err| {
        console_warn!("fluid: boundary rejected: {}", err);
        err
    })
}
