//! Peg decay: Untouched -> Decaying(t) -> Destroyed
//!
//! Destroyed is not a state here; the world drops the peg when `tick`
//! reports `Expired`. A decaying peg stays solid until then.

use serde::{Deserialize, Serialize};

/// Opaque peg categories understood by the bundled renderer.
/// The engine never looks at the tag; any `u8` is passed through.
pub const PEG_ORANGE: u8 = 0;
pub const PEG_BLUE: u8 = 1;
pub const PEG_PINK: u8 = 2;
pub const PEG_GREEN: u8 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum DecayState {
    #[default]
    Untouched,
    /// Seconds left before removal
    Decaying(f64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecayTick {
    Alive,
    Expired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PegState {
    pub tag: u8,
    pub decay: DecayState,
}

impl PegState {
    pub fn new(tag: u8) -> Self {
        Self { tag, decay: DecayState::Untouched }
    }

    /// Remaining decay time, `None` while untouched.
    pub fn timer(&self) -> Option<f64> {
        match self.decay {
            DecayState::Untouched => None,
            DecayState::Decaying(t) => Some(t),
        }
    }

    /// Register a hit by a dynamic body. Only the first hit starts the
    /// countdown; later hits leave a running timer alone.
    /// Returns true when this call started the decay.
    pub fn on_hit(&mut self, duration: f64) -> bool {
        match self.decay {
            DecayState::Untouched => {
                self.decay = DecayState::Decaying(duration);
                true
            }
            DecayState::Decaying(_) => false,
        }
    }

    pub fn tick(&mut self, dt: f64) -> DecayTick {
        match &mut self.decay {
            DecayState::Untouched => DecayTick::Alive,
            DecayState::Decaying(t) => {
                *t -= dt;
                if *t <= 0.0 {
                    DecayTick::Expired
                } else {
                    DecayTick::Alive
                }
            }
        }
    }
}
