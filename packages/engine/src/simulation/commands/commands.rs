use crate::core::Vec2;
use crate::domain::body::Body;
use crate::systems::world::BodyHandle;

use super::Session;

pub(super) fn add_peg(session: &mut Session, position: Vec2, tag: u8) -> BodyHandle {
    let radius = session.config.peg_radius;
    session.world.insert(Body::peg(position, radius, tag))
}

pub(super) fn remove_body(session: &mut Session, handle: BodyHandle) -> bool {
    session.world.remove(handle).is_some()
}

pub(super) fn reset(session: &mut Session) {
    session.world.clear();
    session.input.reset();
    session.markers.clear();
    session.render.bodies.clear();
    session.render.markers.clear();
    session.launcher.angle = session.config.aim.fallback_angle;
    session.frame = 0;
    session.perf_stats.reset();
}
