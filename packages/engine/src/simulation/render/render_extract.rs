use serde::Serialize;

use crate::core::{EngineError, Result, Vec2};
use crate::domain::body::{Body, BodyKind};

use super::Session;

/// f64 slots per body in the packed buffer:
/// `[kind, x, y, radius, decay (-1 when untouched or not a peg), tag (-1 when not a peg), slot index]`
pub const BODY_STRIDE: usize = 7;
/// f64 slots per marker: `[x, y]`
pub const MARKER_STRIDE: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Peg,
    Projectile,
    Shadow,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodyView {
    pub index: u32,
    pub generation: u32,
    pub kind: EntityKind,
    pub position: Vec2,
    pub radius: f64,
    /// Seconds left for a decaying peg
    pub decay: Option<f64>,
    /// Opaque peg category
    pub tag: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LauncherView {
    pub position: Vec2,
    pub orbit_radius: f64,
    pub angle: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub bodies: Vec<BodyView>,
    pub launcher: LauncherView,
    pub markers: Vec<Vec2>,
}

fn entity_kind(body: &Body) -> EntityKind {
    match body.kind {
        BodyKind::Peg(_) => EntityKind::Peg,
        BodyKind::Projectile => EntityKind::Projectile,
        BodyKind::Shadow => EntityKind::Shadow,
    }
}

pub(super) fn snapshot(session: &Session) -> FrameSnapshot {
    let bodies = session
        .world
        .iter()
        .map(|(handle, body)| BodyView {
            index: handle.index,
            generation: handle.generation,
            kind: entity_kind(body),
            position: body.position,
            radius: body.radius(),
            decay: body.peg_state().and_then(|peg| peg.timer()),
            tag: body.peg_state().map(|peg| peg.tag),
        })
        .collect();

    let launcher = session.launcher;
    FrameSnapshot {
        frame: session.frame,
        bodies,
        launcher: LauncherView {
            position: launcher.position,
            orbit_radius: launcher.orbit_radius,
            angle: launcher.angle,
        },
        markers: session.markers.clone(),
    }
}

pub(super) fn snapshot_json(session: &Session) -> Result<String> {
    serde_json::to_string(&snapshot(session)).map_err(|e| EngineError::Serialization(e.to_string()))
}

/// Refill the packed body buffer. Returns the number of bodies written.
pub(super) fn pack_bodies(session: &mut Session) -> usize {
    let buf = &mut session.render.bodies;
    buf.clear();
    for (handle, body) in session.world.iter() {
        let peg = body.peg_state();
        buf.extend_from_slice(&[
            body.kind.code() as f64,
            body.position.x,
            body.position.y,
            body.radius(),
            peg.and_then(|p| p.timer()).unwrap_or(-1.0),
            peg.map(|p| p.tag as f64).unwrap_or(-1.0),
            handle.index as f64,
        ]);
    }
    buf.len() / BODY_STRIDE
}

/// Refill the packed marker buffer. Returns the number of markers written.
pub(super) fn pack_markers(session: &mut Session) -> usize {
    let buf = &mut session.render.markers;
    buf.clear();
    for m in session.markers.iter() {
        buf.extend_from_slice(&[m.x, m.y]);
    }
    buf.len() / MARKER_STRIDE
}

pub(super) fn bodies_ptr(session: &Session) -> *const f64 {
    session.render.bodies.as_ptr()
}

pub(super) fn markers_ptr(session: &Session) -> *const f64 {
    session.render.markers.as_ptr()
}

pub(super) fn bodies_len(session: &Session) -> usize {
    session.render.bodies.len()
}

pub(super) fn markers_len(session: &Session) -> usize {
    session.render.markers.len()
}
