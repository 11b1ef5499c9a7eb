//! Fundamental identity, geometric and timing types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Network-stable entity identity.
///
/// Wraps the raw bit pattern of an ECS entity handle so that snapshots,
/// commands and notifications can name entities without depending on the
/// ECS crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetEntity(pub u64);

impl NetEntity {
    pub fn new(bits: u64) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NetEntity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A point expressed in the local frame of some reference entity.
///
/// For platform-centered radar the reference is the platform (grid); for
/// self-centered radar it is the console itself with a zero offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub reference: NetEntity,
    pub position: Vec2,
}

impl Coordinates {
    pub fn new(reference: NetEntity, position: Vec2) -> Self {
        Self {
            reference,
            position,
        }
    }

    /// The origin of `reference`'s own frame.
    pub fn origin_of(reference: NetEntity) -> Self {
        Self::new(reference, Vec2::ZERO)
    }
}

/// Reference frame handed to the snapshot builder: where the radar is centered
/// and how it is rotated (radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFrame {
    pub coordinates: Coordinates,
    pub angle: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
