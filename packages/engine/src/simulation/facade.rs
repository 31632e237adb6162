use wasm_bindgen::prelude::*;

use crate::core::{EngineError, Vec2};
use crate::domain::config::EngineConfig;

use super::perf_stats::PerfStats;
use super::render_extract;
use super::{InputEvent, Session};

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Browser-facing handle around a `Session`.
///
/// Render data is exposed twice: as a JSON snapshot, and as packed f64
/// buffers in wasm memory (`pack_bodies` / `bodies_ptr`, `pack_markers` /
/// `markers_ptr`) that JS can view without copying.
#[wasm_bindgen]
pub struct Engine {
    session: Session,
}

#[wasm_bindgen]
impl Engine {
    /// Engine with the default fixed-step configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Engine, JsValue> {
        Self::from_config(EngineConfig::default()).map_err(to_js)
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<Engine, JsValue> {
        Session::from_config_json(json)
            .map(|session| Engine { session })
            .map_err(to_js)
    }

    /// Engine driven by the frame delta, clamped at 1/5 s
    #[wasm_bindgen(js_name = variableStep)]
    pub fn variable_step() -> Result<Engine, JsValue> {
        Self::from_config(EngineConfig::variable_step()).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.session.frame()
    }

    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f64 {
        self.session.launcher().angle
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.session.world().len()
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.session.config().to_json().map_err(to_js)
    }

    // === INPUT ===

    pub fn subscribe_input(&mut self) {
        self.session.subscribe_input();
    }

    pub fn unsubscribe_input(&mut self) {
        self.session.unsubscribe_input();
    }

    /// Returns false when input is not subscribed
    pub fn pointer_moved(&mut self, x: f64, y: f64) -> bool {
        self.session.push_input(InputEvent::PointerMoved(Vec2::new(x, y)))
    }

    /// Returns false when input is not subscribed
    pub fn fire(&mut self) -> bool {
        self.session.push_input(InputEvent::Fire)
    }

    // === LEVEL ===

    /// Place a peg; returns its slot index
    pub fn add_peg(&mut self, x: f64, y: f64, tag: u8) -> u32 {
        self.session.add_peg(Vec2::new(x, y), tag).index
    }

    /// Remove every body and pending input
    pub fn reset(&mut self) {
        self.session.reset();
    }

    // === TICK ===

    /// Advance one frame; throws if a collision has no rule
    pub fn tick(&mut self, frame_dt: f64) -> Result<(), JsValue> {
        self.session.tick(frame_dt).map(|_| ()).map_err(to_js)
    }

    // === RENDER ===

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.session.snapshot_json().map_err(to_js)
    }

    /// Fill the packed body buffer; returns the number of bodies
    pub fn pack_bodies(&mut self) -> usize {
        render_extract::pack_bodies(&mut self.session)
    }

    /// Pointer to the packed body buffer (`BODY_STRIDE` f64 per body)
    pub fn bodies_ptr(&self) -> *const f64 {
        render_extract::bodies_ptr(&self.session)
    }

    /// Length of the packed body buffer in f64
    pub fn bodies_len(&self) -> usize {
        render_extract::bodies_len(&self.session)
    }

    pub fn body_stride(&self) -> usize {
        render_extract::BODY_STRIDE
    }

    /// Fill the packed marker buffer; returns the number of markers
    pub fn pack_markers(&mut self) -> usize {
        render_extract::pack_markers(&mut self.session)
    }

    /// Pointer to the packed marker buffer (`[x, y]` per marker)
    pub fn markers_ptr(&self) -> *const f64 {
        render_extract::markers_ptr(&self.session)
    }

    pub fn markers_len(&self) -> usize {
        render_extract::markers_len(&self.session)
    }

    // === PERF ===

    /// Enable or disable per-tick timings (adds timer overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.session.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.session.perf_stats()
    }
}

impl Engine {
    pub fn from_config(config: EngineConfig) -> crate::core::Result<Engine> {
        Session::new(config).map(|session| Engine { session })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }
}
