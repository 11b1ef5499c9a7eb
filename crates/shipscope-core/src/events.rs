//! Notifications emitted by the console engine for the requesting operator.

use serde::{Deserialize, Serialize};

use crate::types::NetEntity;

/// Outcome of an operator request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NotificationKind {
    /// An emitter was linked. Carries its display name.
    LinkSucceeded { emitter: NetEntity, name: String },
    /// No eligible emitter was found, or the console is not on a platform.
    LinkFailed,
}

/// A message for a single operator, shown at the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub recipient: NetEntity,
    pub console: NetEntity,
    pub kind: NotificationKind,
    pub message: String,
    pub tick: u64,
}
