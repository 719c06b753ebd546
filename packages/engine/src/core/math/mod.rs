//! Geometry primitives shared by the grid and the fluid pipeline.

mod bound;
mod plane;
mod vec2;

pub use bound::Bound;
pub use plane::{Plane, DEFAULT_FRICTION};
pub use vec2::Vec2;
