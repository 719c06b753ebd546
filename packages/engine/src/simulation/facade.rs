use wasm_bindgen::prelude::*;

use crate::core::math::{Vec2, DEFAULT_FRICTION};
use crate::domain::ConfigError;

use super::perf_stats::PerfStats;
use super::{FluidSimulation, DEFAULT_DT};

fn to_js(err: ConfigError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Where the interleaved position buffer lives in wasm memory.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct RenderLayout {
    positions_ptr: u32,
    positions_len_elements: u32,
    positions_len_bytes: u32,
    stride: u32,
}

#[wasm_bindgen]
impl RenderLayout {
    #[wasm_bindgen(getter)]
    pub fn positions_ptr(&self) -> u32 { self.positions_ptr }
    #[wasm_bindgen(getter)]
    pub fn positions_len_elements(&self) -> u32 { self.positions_len_elements }
    #[wasm_bindgen(getter)]
    pub fn positions_len_bytes(&self) -> u32 { self.positions_len_bytes }
    /// Floats per particle.
    #[wasm_bindgen(getter)]
    pub fn stride(&self) -> u32 { self.stride }
}

/// JS-facing handle: a simulation plus the animation loop's running flag.
#[wasm_bindgen]
pub struct Fluid {
    core: FluidSimulation,
    running: bool,
    dt: f32,
}

#[wasm_bindgen]
impl Fluid {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<Fluid, JsValue> {
        let core = FluidSimulation::new(width, height).map_err(to_js)?;
        Ok(Fluid::from_core(core))
    }

    /// Construct from a camelCase options object serialized as JSON.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(width: f32, height: f32, options_json: String) -> Result<Fluid, JsValue> {
        let core = FluidSimulation::from_options_json(width, height, &options_json).map_err(to_js)?;
        Ok(Fluid::from_core(core))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.dt }

    /// Resolved options (spawn spacing filled in) as JSON.
    #[wasm_bindgen(js_name = optionsJson)]
    pub fn options_json(&self) -> String {
        self.core.options().to_json()
    }

    /// Add a boundary from (sx, sy) to (ex, ey). Returns its index.
    #[wasm_bindgen(js_name = addBoundary)]
    pub fn add_boundary(&mut self, sx: f32, sy: f32, ex: f32, ey: f32, friction: Option<f32>) -> Result<u32, JsValue> {
        let index = self
            .core
            .add_boundary(Vec2::new(sx, sy), Vec2::new(ex, ey), friction.unwrap_or(DEFAULT_FRICTION))
            .map_err(to_js)?;
        Ok(index as u32)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.core.set_gravity(x, y).map_err(to_js)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    #[wasm_bindgen(getter)]
    pub fn is_running(&self) -> bool { self.running }

    /// One explicit step of `dt` seconds, regardless of the running flag.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.core.tick(dt)
    }

    /// Animation-frame entry: one fixed tick plus render while running.
    pub fn step(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let ticked = self.core.tick(self.dt);
        self.core.render();
        ticked
    }

    /// Refresh the position buffer; returns its length in floats.
    pub fn render(&mut self) -> u32 {
        self.core.render().len() as u32
    }

    /// Copy of the interleaved positions `[x0, y0, x1, y1, ..]`.
    pub fn positions(&self) -> Vec<f32> {
        self.core.positions().flat_map(|p| [p.x, p.y]).collect()
    }

    pub fn positions_ptr(&self) -> *const f32 {
        self.core.render_buffer_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.core.render_buffer().len()
    }

    pub fn render_layout(&self) -> RenderLayout {
        let len = self.core.render_buffer().len();
        RenderLayout {
            positions_ptr: self.core.render_buffer_ptr() as usize as u32,
            positions_len_elements: len as u32,
            positions_len_bytes: (len * std::mem::size_of::<f32>()) as u32,
            stride: 2,
        }
    }
}

impl Fluid {
    fn from_core(core: FluidSimulation) -> Self {
        Fluid { core, running: false, dt: DEFAULT_DT }
    }

    pub fn simulation(&self) -> &FluidSimulation {
        &self.core
    }
}
