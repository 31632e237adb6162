//! Engine error taxonomy.
//!
//! Lifecycle transitions (out-of-bounds expiry, peg decay) are not errors;
//! they show up in step reports instead.

use thiserror::Error;

use crate::domain::body::ShapeKind;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A body with a shape that has no collision rule was put into contact.
    /// Signals a new shape added without a handler; never ignored.
    #[error("unsupported collision between {a:?} and {b:?}")]
    UnsupportedCollision { a: ShapeKind, b: ShapeKind },

    /// Configuration failed to parse or validate
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Snapshot or config could not be serialized
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Handle refers to a body that has already been removed
    #[error("body handle {index}:{generation} is stale")]
    StaleHandle { index: u32, generation: u32 },
}
