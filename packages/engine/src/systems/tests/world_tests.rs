use super::*;
use crate::core::{EngineError, Vec2};
use crate::domain::body::{Shape, ShapeKind};
use crate::domain::peg::{DecayState, PEG_BLUE, PEG_ORANGE};

fn params(dt: f64, gravity: f64) -> StepParams {
    StepParams {
        dt,
        gravity,
        damping: 0.3,
        decay_duration: 1.0,
    }
}

#[test]
fn removed_handles_never_resolve_again() {
    let mut world = World::default();
    let first = world.insert(Body::peg(Vec2::new(10.0, 10.0), 10.0, PEG_BLUE));
    assert!(world.remove(first).is_some());
    assert!(world.remove(first).is_none());

    let second = world.insert(Body::peg(Vec2::new(20.0, 20.0), 10.0, PEG_BLUE));
    assert_eq!(second.index, first.index);
    assert_ne!(second.generation, first.generation);
    assert!(world.get(first).is_none());
    assert_eq!(world.get(second).unwrap().position, Vec2::new(20.0, 20.0));
    assert!(matches!(world.body(first), Err(EngineError::StaleHandle { .. })));
    assert_eq!(world.len(), 1);
}

#[test]
fn iteration_follows_slot_order() {
    let mut world = World::default();
    let a = world.insert(Body::peg(Vec2::new(1.0, 0.0), 1.0, 0));
    let b = world.insert(Body::peg(Vec2::new(2.0, 0.0), 1.0, 0));
    let c = world.insert(Body::peg(Vec2::new(3.0, 0.0), 1.0, 0));
    world.remove(b);
    let handles: Vec<_> = world.iter().map(|(h, _)| h).collect();
    assert_eq!(handles, vec![a, c]);
}

#[test]
fn projectile_bounces_off_peg() {
    let mut world = World::default();
    world.insert(Body::peg(Vec2::new(400.0, 400.0), 10.0, PEG_ORANGE));
    let ball = world.insert(Body::projectile(Vec2::new(400.0, 390.0), 6.0, Vec2::new(0.0, 100.0)));

    let report = world.step(&params(0.05, 0.0)).unwrap();
    assert_eq!(report.contacts, 1);

    let body = world.get(ball).unwrap();
    assert!(body.position.distance(Vec2::new(400.0, 400.0)) >= 16.0 - 1e-9);
    assert!(body.velocity.y < 0.0);
}

#[test]
fn gravity_accelerates_dynamic_bodies_only() {
    let mut world = World::default();
    let peg = world.insert(Body::peg(Vec2::new(100.0, 500.0), 10.0, 0));
    let ball = world.insert(Body::projectile(Vec2::new(400.0, 100.0), 6.0, Vec2::zero()));

    world.step(&params(0.5, 10.0)).unwrap();

    let body = world.get(ball).unwrap();
    assert_eq!(body.velocity, Vec2::new(0.0, 5.0));
    assert_eq!(body.position, Vec2::new(400.0, 102.5));
    assert_eq!(world.get(peg).unwrap().position, Vec2::new(100.0, 500.0));
    assert_eq!(world.get(peg).unwrap().velocity, Vec2::zero());
}

#[test]
fn leaving_the_play_field_removes_body_in_the_same_step() {
    let mut world = World::default();
    let ball = world.insert(Body::projectile(Vec2::new(400.0, 600.0), 6.0, Vec2::new(0.0, 100.0)));

    // 600 + 100 * 0.05 = 605, still within one radius
    let report = world.step(&params(0.05, 0.0)).unwrap();
    assert_eq!(report.expired, 0);
    assert!(world.contains(ball));

    // 610 > 606
    let report = world.step(&params(0.05, 0.0)).unwrap();
    assert_eq!(report.expired, 1);
    assert!(!world.contains(ball));
    assert!(world.is_empty());
}

#[test]
fn leaving_through_any_side_removes_body() {
    let exits = [
        (Vec2::new(0.0, 300.0), Vec2::new(-100.0, 0.0)),
        (Vec2::new(800.0, 300.0), Vec2::new(100.0, 0.0)),
        (Vec2::new(400.0, 0.0), Vec2::new(0.0, -100.0)),
        (Vec2::new(400.0, 600.0), Vec2::new(0.0, 100.0)),
    ];
    for (start, velocity) in exits {
        let mut world = World::default();
        let ball = world.insert(Body::projectile(start, 6.0, velocity));

        // 5 px past the edge, still within one radius
        let report = world.step(&params(0.05, 0.0)).unwrap();
        assert_eq!(report.expired, 0, "exit from {start:?}");
        assert!(world.contains(ball));

        // 10 px past the edge
        let report = world.step(&params(0.05, 0.0)).unwrap();
        assert_eq!(report.expired, 1, "exit from {start:?}");
        assert!(world.is_empty());
    }
}

#[test]
fn lone_body_never_collides_with_itself() {
    let mut world = World::default();
    let ball = world.insert(Body::projectile(Vec2::new(400.0, 300.0), 6.0, Vec2::new(30.0, 0.0)));
    let report = world.step(&params(0.1, 0.0)).unwrap();
    assert_eq!(report.contacts, 0);
    assert!(world.get(ball).unwrap().position.distance(Vec2::new(403.0, 300.0)) < 1e-9);
}

#[test]
fn static_bodies_ignore_bounds() {
    let mut world = World::default();
    let peg = world.insert(Body::peg(Vec2::new(-500.0, -500.0), 10.0, 0));
    world.step(&params(0.05, 220.0)).unwrap();
    assert!(world.contains(peg));
}

#[test]
fn peg_decays_after_first_hit_and_stays_solid_meanwhile() {
    let mut world = World::default();
    let peg = world.insert(Body::peg(Vec2::new(100.0, 100.0), 10.0, PEG_ORANGE));
    world.insert(Body::projectile(Vec2::new(100.0, 85.0), 6.0, Vec2::new(0.0, 40.0)));

    let report = world.step(&params(0.25, 0.0)).unwrap();
    assert_eq!(report.decay_started, 1);
    // peg ticked before the ball reached it
    assert_eq!(world.get(peg).unwrap().peg_state().unwrap().decay, DecayState::Decaying(1.0));

    let mut timers = Vec::new();
    for _ in 0..3 {
        let report = world.step(&params(0.25, 0.0)).unwrap();
        assert_eq!(report.pegs_destroyed, 0);
        timers.push(world.get(peg).unwrap().peg_state().unwrap().timer().unwrap());
    }
    assert_eq!(timers, vec![0.75, 0.5, 0.25]);

    let report = world.step(&params(0.25, 0.0)).unwrap();
    assert_eq!(report.pegs_destroyed, 1);
    assert!(!world.contains(peg));
}

#[test]
fn peg_after_ball_in_slot_order_starts_counting_same_step() {
    let mut world = World::default();
    world.insert(Body::projectile(Vec2::new(100.0, 85.0), 6.0, Vec2::new(0.0, 40.0)));
    let peg = world.insert(Body::peg(Vec2::new(100.0, 100.0), 10.0, PEG_ORANGE));

    world.step(&params(0.25, 0.0)).unwrap();
    assert_eq!(world.get(peg).unwrap().peg_state().unwrap().timer(), Some(0.75));
}

#[test]
fn contacts_resolve_sequentially_in_slot_order() {
    let mut world = World::default();
    world.insert(Body::peg(Vec2::new(90.0, 100.0), 10.0, 0));
    world.insert(Body::peg(Vec2::new(110.0, 100.0), 10.0, 0));
    let ball = world.insert(Body::projectile(Vec2::new(100.0, 90.0), 6.0, Vec2::zero()));

    let report = world.step(&params(0.0, 0.0)).unwrap();
    assert_eq!(report.contacts, 2);
    assert!(world.get(ball).unwrap().position.is_finite());
}

#[test]
fn unsupported_shapes_surface_as_errors_and_keep_the_body() {
    let mut world = World::default();
    world.insert(Body::new(
        BodyKind::Peg(crate::domain::peg::PegState::new(0)),
        Shape::Rect { half_extents: Vec2::new(10.0, 10.0) },
        Vec2::new(100.0, 100.0),
    ));
    let ball = world.insert(Body::projectile(Vec2::new(100.0, 100.0), 6.0, Vec2::zero()));

    let err = world.step(&params(0.1, 0.0)).unwrap_err();
    assert_eq!(err, EngineError::UnsupportedCollision { a: ShapeKind::Circle, b: ShapeKind::Rect });
    assert!(world.contains(ball));
}

#[test]
fn statics_returns_pegs_only() {
    let mut world = World::default();
    world.insert(Body::peg(Vec2::new(1.0, 1.0), 10.0, PEG_BLUE));
    world.insert(Body::projectile(Vec2::new(2.0, 2.0), 6.0, Vec2::zero()));
    world.insert(Body::peg(Vec2::new(3.0, 3.0), 10.0, PEG_ORANGE));

    let statics = world.statics();
    assert_eq!(statics.len(), 2);
    assert!(statics.iter().all(Body::is_static));
    assert_eq!(statics[1].position, Vec2::new(3.0, 3.0));
}

#[test]
fn clear_invalidates_every_handle() {
    let mut world = World::default();
    let a = world.insert(Body::peg(Vec2::new(1.0, 1.0), 10.0, 0));
    let b = world.insert(Body::projectile(Vec2::new(2.0, 2.0), 6.0, Vec2::zero()));
    world.clear();
    assert!(world.is_empty());
    assert!(!world.contains(a));
    assert!(!world.contains(b));
}
