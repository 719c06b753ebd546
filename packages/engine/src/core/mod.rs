//! Core building blocks: geometry and utility macros.

#[macro_use]
pub mod utils;
pub mod math;
