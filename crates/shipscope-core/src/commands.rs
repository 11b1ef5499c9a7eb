//! Operator commands sent from a console's observer interface.
//!
//! Commands are queued and processed at the next tick boundary, or applied
//! immediately through `ConsoleEngine::handle_command`.

use serde::{Deserialize, Serialize};

use crate::types::NetEntity;

/// All possible console actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConsoleCommand {
    /// Switch an advanced console between active and passive mode.
    ToggleActiveMode { console: NetEntity, active: bool },
    /// Link the nearest eligible emitter. `actor` receives the result notification.
    RequestLinkEmitter { console: NetEntity, actor: NetEntity },
    /// Override the console's own range ceiling.
    SetMaxRange { console: NetEntity, range: f32 },
}

impl ConsoleCommand {
    /// The console this command is addressed to.
    pub fn console(&self) -> NetEntity {
        match self {
            ConsoleCommand::ToggleActiveMode { console, .. }
            | ConsoleCommand::RequestLinkEmitter { console, .. }
            | ConsoleCommand::SetMaxRange { console, .. } => *console,
        }
    }
}
