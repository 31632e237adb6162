use pegfall_engine::simulation::BODY_STRIDE;
use pegfall_engine::{peg_orange, Engine, EngineConfig, InputEvent, Session, Vec2};

#[test]
fn engine_runs_a_shot_to_the_floor() {
    let mut engine = Engine::new().unwrap();
    engine.subscribe_input();
    assert!(engine.pointer_moved(400.0, 400.0));
    assert!(engine.fire());

    engine.tick(1.0 / 60.0).unwrap();
    assert_eq!(engine.body_count(), 1);
    assert!((engine.angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);

    // 200 px/s down from y = 160 leaves the field within a few seconds
    for _ in 0..300 {
        engine.tick(1.0 / 60.0).unwrap();
    }
    assert_eq!(engine.body_count(), 0);
    assert_eq!(engine.frame(), 301);
}

#[test]
fn engine_packs_render_buffers() {
    let mut engine = Engine::new().unwrap();
    engine.add_peg(120.0, 300.0, peg_orange());
    engine.add_peg(680.0, 300.0, peg_orange());
    engine.tick(1.0 / 60.0).unwrap();

    assert_eq!(engine.body_stride(), BODY_STRIDE);
    assert_eq!(engine.pack_bodies(), 2);
    assert!(!engine.bodies_ptr().is_null());
    assert_eq!(engine.bodies_len(), 2 * BODY_STRIDE);
    assert!(engine.pack_markers() > 0);

    let json: serde_json::Value = serde_json::from_str(&engine.snapshot_json().unwrap()).unwrap();
    assert_eq!(json["bodies"].as_array().map(Vec::len), Some(2));

    engine.reset();
    assert_eq!(engine.body_count(), 0);
    assert_eq!(engine.pack_bodies(), 0);
}

#[test]
fn engine_from_config_json() {
    let engine = Engine::from_config_json(r#"{ "gravity": 300.0, "time_step": { "mode": "variable", "max_dt": 0.1 } }"#)
        .unwrap();
    let config = EngineConfig::from_json(&engine.config_json().unwrap()).unwrap();
    assert_eq!(config.gravity, 300.0);
}

#[test]
fn session_peg_lifecycle() {
    let mut session = Session::new(EngineConfig::default()).unwrap();
    let peg = session.add_peg(Vec2::new(400.0, 250.0), peg_orange());
    session.subscribe_input();
    session.push_input(InputEvent::PointerMoved(Vec2::new(400.0, 400.0)));
    session.push_input(InputEvent::Fire);

    // hit after ~0.36 s, destroyed 1.5 s later
    let mut destroyed = 0;
    for _ in 0..150 {
        destroyed += session.tick(1.0 / 60.0).unwrap().step.pegs_destroyed;
    }
    assert_eq!(destroyed, 1);
    assert!(!session.world().contains(peg));
}
