//! Pegfall Engine - peg-board physics with an aiming preview, in WASM
//!
//! Architecture:
//! - core/       - vector math and the error type
//! - domain/     - bodies, collision, peg decay, configuration
//! - systems/    - body arena, aim solver, trajectory preview
//! - simulation/ - session orchestration and the JS facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool for the parallel aim scan
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

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

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"Pegfall WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{EngineError, Vec2};
pub use domain::config::EngineConfig;
pub use simulation::{Engine, InputEvent, PerfStats, Session, TickReport};
pub use systems::world::{BodyHandle, World};

// Peg tag constants for JS
#[wasm_bindgen]
pub fn peg_orange() -> u8 { domain::peg::PEG_ORANGE }
#[wasm_bindgen]
pub fn peg_blue() -> u8 { domain::peg::PEG_BLUE }
#[wasm_bindgen]
pub fn peg_pink() -> u8 { domain::peg::PEG_PINK }
#[wasm_bindgen]
pub fn peg_green() -> u8 { domain::peg::PEG_GREEN }
