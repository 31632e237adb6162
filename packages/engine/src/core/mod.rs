//! Core building blocks shared by every other module.

pub mod error;
pub mod vec2;

pub use error::{EngineError, Result};
pub use vec2::Vec2;
