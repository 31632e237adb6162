//! World - arena of bodies addressed by generational handles
//!
//! Removal frees the slot and bumps its generation, so a handle to a
//! removed body never resolves again even after the slot is reused.
//! Iteration and collision resolution follow slot order.

use crate::core::{EngineError, Result};
use crate::domain::body::{Body, BodyKind};
use crate::domain::config::Bounds;
use crate::domain::peg::DecayTick;

/// Stable reference to a body in a `World`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    pub index: u32,
    pub generation: u32,
}

struct Slot {
    generation: u32,
    body: Option<Body>,
}

/// Per-step physics parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    pub dt: f64,
    pub gravity: f64,
    pub damping: f64,
    pub decay_duration: f64,
}

/// What happened during one `World::step`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub contacts: u32,
    pub expired: u32,
    pub decay_started: u32,
    pub pegs_destroyed: u32,
}

pub struct World {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    bounds: Bounds,
}

impl World {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            bounds,
        }
    }

    /// World seeded with `bodies`, in order.
    pub fn with_bodies(bounds: Bounds, bodies: impl IntoIterator<Item = Body>) -> Self {
        let mut world = Self::new(bounds);
        for body in bodies {
            world.insert(body);
        }
        world
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn insert(&mut self, body: Body) -> BodyHandle {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            return BodyHandle { index, generation: slot.generation };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, body: Some(body) });
        BodyHandle { index, generation: 0 }
    }

    /// Detach a body. Returns `None` for stale handles.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let body = slot.body.take()?;
        self.release(handle.index);
        Some(body)
    }

    fn release(&mut self, index: u32) {
        let slot = &mut self.slots[index as usize];
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.live -= 1;
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_ref()
    }

    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.body.as_mut()
    }

    /// Like `get`, but a stale handle is an error.
    pub fn body(&self, handle: BodyHandle) -> Result<&Body> {
        self.get(handle).ok_or(EngineError::StaleHandle {
            index: handle.index,
            generation: handle.generation,
        })
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live bodies in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.body.as_ref().map(|body| {
                (BodyHandle { index: index as u32, generation: slot.generation }, body)
            })
        })
    }

    /// Clones of every static body, in slot order.
    pub fn statics(&self) -> Vec<Body> {
        self.iter()
            .filter(|(_, body)| body.is_static())
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            if self.slots[index].body.take().is_some() {
                self.release(index as u32);
            }
        }
    }

    /// Advance every body by one step, in slot order.
    ///
    /// Dynamic bodies get gravity, then `integrate_at`; decaying pegs count
    /// down and are removed once their timer reaches zero.
    pub fn step(&mut self, params: &StepParams) -> Result<StepReport> {
        let mut report = StepReport::default();

        for index in 0..self.slots.len() {
            let Some(body) = self.slots[index].body.as_mut() else {
                continue;
            };

            if body.is_static() {
                let expired = body
                    .peg_state_mut()
                    .map(|peg| peg.tick(params.dt) == DecayTick::Expired)
                    .unwrap_or(false);
                if expired {
                    tracing::debug!(index, "peg destroyed");
                    self.slots[index].body = None;
                    self.release(index as u32);
                    report.pegs_destroyed += 1;
                }
                continue;
            }

            body.velocity.y += params.gravity * params.dt;
            self.integrate_at(index as u32, params, &mut report)?;
        }

        Ok(report)
    }

    /// Integrate the dynamic body in slot `index`, then cull it if it left
    /// the play field. Returns false when the body was removed.
    fn integrate_at(&mut self, index: u32, params: &StepParams, report: &mut StepReport) -> Result<bool> {
        let idx = index as usize;
        let Some(mut body) = self.slots[idx].body.take() else {
            return Ok(false);
        };

        if let Err(err) = self.integrate_body(&mut body, params, report) {
            self.slots[idx].body = Some(body);
            return Err(err);
        }

        if self.bounds.is_outside(body.position, body.radius()) {
            tracing::debug!(index, x = body.position.x, y = body.position.y, "body left the play field");
            self.release(index);
            report.expired += 1;
            return Ok(false);
        }

        self.slots[idx].body = Some(body);
        Ok(true)
    }

    /// Move a detached dynamic `body` by its velocity and resolve its
    /// contacts against every live body, one at a time in slot order.
    /// Pegs it touches start decaying. Static bodies are left alone.
    ///
    /// `body` must not be stored in this world: a body still in its slot
    /// would collide with its own copy.
    pub(crate) fn integrate_body(&mut self, body: &mut Body, params: &StepParams, report: &mut StepReport) -> Result<()> {
        if body.is_static() {
            return Ok(());
        }

        body.position += body.velocity * params.dt;

        for (other_idx, slot) in self.slots.iter_mut().enumerate() {
            let Some(other) = slot.body.as_mut() else {
                continue;
            };
            let Some(contact) = body.collide(other)? else {
                continue;
            };

            body.resolve_contact(&contact, params.damping);
            report.contacts += 1;

            if let BodyKind::Peg(peg) = &mut other.kind {
                if peg.on_hit(params.decay_duration) {
                    tracing::trace!(peg = other_idx, "peg decay started");
                    report.decay_started += 1;
                }
            }
        }

        Ok(())
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}

#[cfg(test)]
#[path = "tests/world_tests.rs"]
mod tests;
