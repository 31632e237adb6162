//! Browser-side checks of the JS facade; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use pegfall_engine::{init, peg_green, version, Engine};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn init_and_version() {
    init();
    assert!(!version().is_empty());
}

#[wasm_bindgen_test]
fn bad_config_throws() {
    assert!(Engine::from_config_json("{ \"peg_radius\": -1 }").is_err());
    assert!(Engine::from_config_json("nope").is_err());
}

#[wasm_bindgen_test]
fn tick_and_snapshot() {
    let mut engine = Engine::new().unwrap();
    engine.add_peg(400.0, 300.0, peg_green());
    engine.subscribe_input();
    engine.pointer_moved(400.0, 500.0);
    engine.fire();
    engine.tick(1.0 / 60.0).unwrap();
    assert_eq!(engine.body_count(), 2);
    assert!(engine.snapshot_json().unwrap().contains("\"peg\""));
}
