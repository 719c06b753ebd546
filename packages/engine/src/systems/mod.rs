//! Simulation systems run by `FluidSimulation::tick`.

pub mod fluid;
