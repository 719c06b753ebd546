//! Spatial partitioning: fixed-size cells bucketing particles each tick.

pub mod cell;
pub mod world;

pub use cell::Cell;
pub use world::{World, CELL_WIDTH, MAX_CELLS};
