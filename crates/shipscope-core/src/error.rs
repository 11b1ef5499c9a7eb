//! Error types for the console engine API and configuration loading.
//!
//! Missing hardware, stale links and detached consoles are not errors; they
//! resolve to a "no signal" snapshot. These types cover caller mistakes only.

use thiserror::Error;

use crate::types::NetEntity;

/// Errors returned by engine entry points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConsoleError {
    /// The entity does not exist (never spawned or already despawned).
    #[error("Unknown entity {0}")]
    UnknownEntity(NetEntity),

    /// The entity exists but carries no radar console.
    #[error("Entity {0} is not a radar console")]
    NotAConsole(NetEntity),
}

/// Errors that can occur when loading configuration or prototypes.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed into the expected shape.
    #[error("Malformed config: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A field is outside its permitted range.
    #[error("Field `{field}` out of range: {value} (expected {expected})")]
    OutOfRange {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}
