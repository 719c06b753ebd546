//! Fluid Engine - double-density relaxation particle fluid in WASM
//!
//! Architecture:
//! - core/        - Geometry (Vec2, Bound, Plane) and utility macros
//! - domain/      - Particles, options, configuration errors
//! - spatial/     - Cell grid, particle buckets, boundary registration
//! - systems/     - The per-tick pipeline stages
//! - simulation/  - Orchestration and the JS facade

// Utils with logging/safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Fluid engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Friction used when a boundary is added without one.
#[wasm_bindgen]
pub fn default_friction() -> f32 {
    crate::core::math::DEFAULT_FRICTION
}

/// Width of a grid cell in world units (upper bound for `radius`).
#[wasm_bindgen]
pub fn cell_width() -> f32 {
    spatial::CELL_WIDTH
}

// Re-export main types
pub use crate::core::math::{Bound, Plane, Vec2};
pub use domain::{ConfigError, FluidOptions, Particle};
pub use simulation::{Fluid, FluidSimulation, PerfStats, RenderLayout, DEFAULT_DT};
pub use spatial::{Cell, World};
