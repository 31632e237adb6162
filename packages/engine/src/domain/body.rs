//! Body - a physics entity that takes part in collision
//!
//! Bodies are a closed set of variants (`BodyKind`) carrying a `Shape`.
//! Collision is dispatched on the shape pair; only circle-vs-circle has a
//! rule today, every other pair reports `UnsupportedCollision`.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Result, Vec2};

use super::peg::PegState;

/// Geometric extent of a body, in local coordinates around its position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    /// Axis-aligned box. No collision rule exists for it yet.
    Rect { half_extents: Vec2 },
}

/// Shape discriminant, used in error reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rect,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle { .. } => ShapeKind::Circle,
            Shape::Rect { .. } => ShapeKind::Rect,
        }
    }

    /// Radius of the bounding circle (used for bounds culling and rendering).
    pub fn bounding_radius(&self) -> f64 {
        match *self {
            Shape::Circle { radius } => radius,
            Shape::Rect { half_extents } => half_extents.length(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BodyKind {
    /// Static target that starts decaying on its first hit
    Peg(PegState),
    /// Dynamic ball fired by the launcher
    Projectile,
    /// Dynamic stand-in used by the trajectory preview
    Shadow,
}

/// Render category codes, shared with the JS side.
pub const KIND_PEG: u8 = 0;
pub const KIND_PROJECTILE: u8 = 1;
pub const KIND_SHADOW: u8 = 2;

impl BodyKind {
    pub fn code(&self) -> u8 {
        match self {
            BodyKind::Peg(_) => KIND_PEG,
            BodyKind::Projectile => KIND_PROJECTILE,
            BodyKind::Shadow => KIND_SHADOW,
        }
    }
}

/// Result of a positive overlap test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Translation that separates the bodies; points from the obstruction to the body.
    pub push_out: Vec2,
    /// Unit contact normal, same direction as `push_out`.
    pub normal: Vec2,
    /// Overlap along the normal (sum of radii minus center distance).
    pub depth: f64,
}

/// Normal used when two centers coincide exactly: straight up, against gravity.
pub const COINCIDENT_NORMAL: Vec2 = Vec2::new(0.0, -1.0);

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub shape: Shape,
    pub kind: BodyKind,
}

impl Body {
    pub fn new(kind: BodyKind, shape: Shape, position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zero(),
            shape,
            kind,
        }
    }

    /// Static circular peg carrying an opaque render `tag`.
    pub fn peg(position: Vec2, radius: f64, tag: u8) -> Self {
        Self::new(BodyKind::Peg(PegState::new(tag)), Shape::Circle { radius }, position)
    }

    pub fn projectile(position: Vec2, radius: f64, velocity: Vec2) -> Self {
        Self {
            velocity,
            ..Self::new(BodyKind::Projectile, Shape::Circle { radius }, position)
        }
    }

    pub fn shadow(position: Vec2, radius: f64, velocity: Vec2) -> Self {
        Self {
            velocity,
            ..Self::new(BodyKind::Shadow, Shape::Circle { radius }, position)
        }
    }

    /// Static bodies never move and never leave the world through the bounds.
    pub fn is_static(&self) -> bool {
        matches!(self.kind, BodyKind::Peg(_))
    }

    pub fn radius(&self) -> f64 {
        self.shape.bounding_radius()
    }

    pub fn peg_state(&self) -> Option<&PegState> {
        match &self.kind {
            BodyKind::Peg(state) => Some(state),
            _ => None,
        }
    }

    pub fn peg_state_mut(&mut self) -> Option<&mut PegState> {
        match &mut self.kind {
            BodyKind::Peg(state) => Some(state),
            _ => None,
        }
    }

    /// Overlap test of `self` against `other`.
    ///
    /// The returned normal and push-out point from `other` towards `self`.
    /// Touching circles (distance equal to the sum of radii) count as contact
    /// with zero depth.
    pub fn collide(&self, other: &Body) -> Result<Option<Contact>> {
        match (self.shape, other.shape) {
            (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
                Ok(circle_contact(self.position, ra, other.position, rb))
            }
            (a, b) => Err(EngineError::UnsupportedCollision { a: a.kind(), b: b.kind() }),
        }
    }

    /// Static resolution followed by the two-stage velocity update:
    /// full specular reflection, then a separate damping pass that reads the
    /// already reflected velocity.
    pub fn resolve_contact(&mut self, contact: &Contact, damping: f64) {
        let n = contact.normal;
        self.position += contact.push_out;

        let dot = self.velocity.dot(n);
        self.velocity -= n * (2.0 * dot);

        let dot = self.velocity.dot(n);
        self.velocity -= n * (damping * dot);
    }
}

fn circle_contact(a: Vec2, ra: f64, b: Vec2, rb: f64) -> Option<Contact> {
    let offset = a - b;
    let dist = offset.length();
    let reach = ra + rb;
    // NaN distances fall through here as "no contact"
    if !(dist <= reach) {
        return None;
    }

    let normal = if dist > 0.0 {
        offset * (1.0 / dist)
    } else {
        COINCIDENT_NORMAL
    };
    let depth = reach - dist;
    Some(Contact {
        push_out: normal * depth,
        normal,
        depth,
    })
}

#[cfg(test)]
#[path = "tests/body_tests.rs"]
mod tests;
