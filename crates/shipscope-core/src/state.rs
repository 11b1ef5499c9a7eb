//! Navigation snapshot: the complete radar state pushed to a console's observers.
//!
//! Snapshots replace each other wholesale; there are no deltas.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::AdvancedRadarConsole;
use crate::constants::*;
use crate::types::{Coordinates, NetEntity};

/// State of one docking port, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockPortState {
    pub entity: NetEntity,
    pub name: Option<String>,
    /// Position in the owning platform's frame.
    pub position: Vec2,
    pub angle: f32,
    pub docked_to: Option<NetEntity>,
    pub connected: bool,
}

/// Docks grouped by the platform they are mounted on.
pub type DockMap = BTreeMap<NetEntity, Vec<DockPortState>>;

/// Passive-mode parameters forwarded to the display. Noise is never applied here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassiveParams {
    pub range_modifier: f32,
    pub noise_degrees: f32,
    pub distance_noise: f32,
    pub refresh_interval: f32,
}

impl PassiveParams {
    /// Identity values used whenever no advanced profile applies.
    pub fn neutral() -> Self {
        Self {
            range_modifier: NEUTRAL_PASSIVE_RANGE_MODIFIER,
            noise_degrees: NEUTRAL_PASSIVE_NOISE_DEGREES,
            distance_noise: NEUTRAL_PASSIVE_DISTANCE_NOISE,
            refresh_interval: NEUTRAL_PASSIVE_REFRESH_INTERVAL,
        }
    }
}

impl Default for PassiveParams {
    fn default() -> Self {
        Self::neutral()
    }
}

impl From<&AdvancedRadarConsole> for PassiveParams {
    fn from(profile: &AdvancedRadarConsole) -> Self {
        Self {
            range_modifier: profile.passive_range_modifier,
            noise_degrees: profile.passive_noise_degrees,
            distance_noise: profile.passive_distance_noise,
            refresh_interval: profile.passive_refresh_interval,
        }
    }
}

/// Complete radar state for one console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSnapshot {
    pub max_range: f32,
    /// Where the radar is centered. `None` means "no signal".
    pub coordinates: Option<Coordinates>,
    /// Display rotation (radians). Present exactly when `coordinates` is.
    pub angle: Option<f32>,
    pub docks: DockMap,
    pub rotate_with_entity: bool,
    pub is_advanced: bool,
    pub is_radar_active: bool,
    pub passive_range_modifier: f32,
    pub passive_noise_degrees: f32,
    pub passive_distance_noise: f32,
    pub passive_refresh_interval: f32,
}

impl NavSnapshot {
    /// The "no signal" snapshot: no frame, no range, nothing active.
    pub fn no_signal(docks: DockMap, rotate_with_entity: bool) -> Self {
        let passive = PassiveParams::neutral();
        Self {
            max_range: 0.0,
            coordinates: None,
            angle: None,
            docks,
            rotate_with_entity,
            is_advanced: false,
            is_radar_active: false,
            passive_range_modifier: passive.range_modifier,
            passive_noise_degrees: passive.noise_degrees,
            passive_distance_noise: passive.distance_noise,
            passive_refresh_interval: passive.refresh_interval,
        }
    }

    pub fn has_signal(&self) -> bool {
        self.coordinates.is_some()
    }

    pub fn passive(&self) -> PassiveParams {
        PassiveParams {
            range_modifier: self.passive_range_modifier,
            noise_degrees: self.passive_noise_degrees,
            distance_noise: self.passive_distance_noise,
            refresh_interval: self.passive_refresh_interval,
        }
    }
}

/// A snapshot published for one console during a tick or command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleUpdate {
    pub console: NetEntity,
    pub snapshot: NavSnapshot,
}
