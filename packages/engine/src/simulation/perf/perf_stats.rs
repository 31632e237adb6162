use wasm_bindgen::prelude::*;

/// Timings and counters of the last tick (all zero while perf is off,
/// except the counters taken from the step report).
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) tick_ms: f64,
    pub(super) aim_ms: f64,
    pub(super) world_ms: f64,
    pub(super) preview_ms: f64,
    pub(super) contacts: u32,
    pub(super) expired: u32,
    pub(super) decay_started: u32,
    pub(super) pegs_destroyed: u32,
    pub(super) spawned: u32,
    pub(super) preview_points: u32,
    pub(super) markers: u32,
    pub(super) bodies: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn aim_ms(&self) -> f64 { self.aim_ms }
    #[wasm_bindgen(getter)]
    pub fn world_ms(&self) -> f64 { self.world_ms }
    #[wasm_bindgen(getter)]
    pub fn preview_ms(&self) -> f64 { self.preview_ms }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn expired(&self) -> u32 { self.expired }
    #[wasm_bindgen(getter)]
    pub fn decay_started(&self) -> u32 { self.decay_started }
    #[wasm_bindgen(getter)]
    pub fn pegs_destroyed(&self) -> u32 { self.pegs_destroyed }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn preview_points(&self) -> u32 { self.preview_points }
    #[wasm_bindgen(getter)]
    pub fn markers(&self) -> u32 { self.markers }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
}
