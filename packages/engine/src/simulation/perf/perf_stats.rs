use wasm_bindgen::prelude::*;

/// Snapshot of the last tick. Stage times in milliseconds.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) viscosity_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) neighbors_ms: f64,
    pub(super) relaxation_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) velocity_ms: f64,

    pub(super) particle_count: u32,
    pub(super) out_of_bounds: u32,
    pub(super) neighbor_pairs: u32,
    pub(super) max_neighbors: u32,
    pub(super) collisions_resolved: u32,
    pub(super) occupied_cells: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn viscosity_ms(&self) -> f64 { self.viscosity_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn neighbors_ms(&self) -> f64 { self.neighbors_ms }
    #[wasm_bindgen(getter)]
    pub fn relaxation_ms(&self) -> f64 { self.relaxation_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn velocity_ms(&self) -> f64 { self.velocity_ms }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn out_of_bounds(&self) -> u32 { self.out_of_bounds }
    /// Directed neighbor entries (each close pair counts twice).
    #[wasm_bindgen(getter)]
    pub fn neighbor_pairs(&self) -> u32 { self.neighbor_pairs }
    #[wasm_bindgen(getter)]
    pub fn max_neighbors(&self) -> u32 { self.max_neighbors }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
}
