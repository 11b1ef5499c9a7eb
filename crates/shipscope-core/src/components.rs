//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Console logic lives in systems, not components.
//!
//! Missing fields deserialize to the defaults in `constants`, so prototypes
//! only need to spell out what differs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::NetEntity;

/// A radar console an operator interacts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConsole {
    /// The console's own capability ceiling.
    pub max_range: f32,
    /// Center the radar on the console itself instead of its platform.
    pub follow_entity: bool,
    /// Refuse to provide a feed unless an emitter is within `required_emitter_range`.
    pub require_emitter: bool,
    /// Maximum console-to-emitter distance. Only used when `require_emitter` is set.
    pub required_emitter_range: f32,
    /// Operator-linked emitter. Sticky until it stops being a valid candidate.
    pub linked_emitter: Option<NetEntity>,
}

impl Default for RadarConsole {
    fn default() -> Self {
        Self {
            max_range: DEFAULT_CONSOLE_MAX_RANGE,
            follow_entity: false,
            require_emitter: false,
            required_emitter_range: 0.0,
            linked_emitter: None,
        }
    }
}

/// Active/passive operating profile for consoles with the advanced UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedRadarConsole {
    pub active: bool,
    /// Range multiplier while passive, in [0, 1].
    pub passive_range_modifier: f32,
    /// Bearing noise budget for the display while passive (degrees).
    pub passive_noise_degrees: f32,
    /// Distance noise budget for the display while passive (world units).
    pub passive_distance_noise: f32,
    /// Suggested refresh cadence while passive (seconds). Advisory only.
    pub passive_refresh_interval: f32,
}

impl Default for AdvancedRadarConsole {
    fn default() -> Self {
        Self {
            active: true,
            passive_range_modifier: DEFAULT_PASSIVE_RANGE_MODIFIER,
            passive_noise_degrees: DEFAULT_PASSIVE_NOISE_DEGREES,
            passive_distance_noise: DEFAULT_PASSIVE_DISTANCE_NOISE,
            passive_refresh_interval: DEFAULT_PASSIVE_REFRESH_INTERVAL,
        }
    }
}

/// Physical radar hardware mounted on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarEmitter {
    /// Hardware range ceiling in world units.
    pub max_range: f32,
    /// If false, consoles fall back to the basic UI even when they are advanced.
    pub advanced: bool,
    /// Online/offline. Owned by power and damage systems.
    pub enabled: bool,
}

impl Default for RadarEmitter {
    fn default() -> Self {
        Self {
            max_range: DEFAULT_EMITTER_MAX_RANGE,
            advanced: true,
            enabled: true,
        }
    }
}

/// Placement of an entity relative to its parent and its platform (grid).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Direct parent. Equal to `platform` when anchored straight onto the grid.
    pub parent: Option<NetEntity>,
    /// The platform this entity rides on, if any.
    pub platform: Option<NetEntity>,
    /// Position in the platform's local frame.
    pub local_position: Vec2,
    /// Rotation relative to the parent (radians).
    pub local_rotation: f32,
}

/// Marks an entity as a mobile platform (grid).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform;

/// Human-readable entity name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityName(pub String);

/// Marks a console whose observer interface is open. Only these publish snapshots.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConsoleUi;

/// A docking port. Reported to observers as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DockPort {
    pub name: Option<String>,
    /// The port this one is docked to.
    pub docked_to: Option<NetEntity>,
}
