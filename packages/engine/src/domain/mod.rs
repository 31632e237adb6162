//! Domain types: configuration, bodies and the peg lifecycle.

pub mod body;
pub mod config;
pub mod peg;

pub use body::{Body, BodyKind, Contact, Shape, ShapeKind};
pub use config::EngineConfig;
pub use peg::{DecayState, PegState};
