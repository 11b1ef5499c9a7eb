//! Spatial candidate scan.
//!
//! Finds the emitters a console could draw on: same platform, enabled, and
//! within the console's required emitter range when that constraint is on.
//! Distances stay squared throughout.
//!
//! The scan sits behind `CandidateSource` so the naive whole-world pass can be
//! swapped for a per-platform index without touching selection.

use std::collections::HashMap;

use glam::Vec2;
use hecs::{Entity, World};

use shipscope_core::components::{RadarConsole, RadarEmitter, Transform};
use shipscope_core::types::NetEntity;

/// What a console is looking for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanQuery {
    pub platform: NetEntity,
    /// Console position in the platform frame.
    pub origin: Vec2,
    /// Squared distance ceiling. `None` when the console is not range limited.
    pub range_limit_sq: Option<f32>,
}

impl ScanQuery {
    /// Build the query for a console. `None` when the console is detached.
    pub fn for_console(console: &RadarConsole, transform: &Transform) -> Option<Self> {
        let platform = transform.platform?;
        let range_limited = console.require_emitter && console.required_emitter_range > 0.0;
        let range_limit_sq = range_limited
            .then(|| console.required_emitter_range * console.required_emitter_range);

        Some(Self {
            platform,
            origin: transform.local_position,
            range_limit_sq,
        })
    }

    /// Squared distance to the emitter if it is a candidate for this query.
    pub fn admit(&self, emitter: &RadarEmitter, transform: &Transform) -> Option<f32> {
        if transform.platform != Some(self.platform) || !emitter.enabled {
            return None;
        }

        let distance_sq = transform.local_position.distance_squared(self.origin);
        match self.range_limit_sq {
            Some(limit_sq) if distance_sq.is_nan() || distance_sq > limit_sq => None,
            _ => Some(distance_sq),
        }
    }
}

/// An emitter as read during one scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterCandidate {
    pub entity: Entity,
    pub emitter: RadarEmitter,
    pub distance_sq: f32,
}

/// Produces the candidate emitters for a query, in a stable order.
pub trait CandidateSource {
    /// Called once before a batch of queries against `world`.
    fn refresh(&mut self, _world: &World) {}

    fn candidates(&self, world: &World, query: &ScanQuery) -> Vec<EmitterCandidate>;
}

/// Naive O(E) pass over every emitter in the world, per query.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldScan;

impl CandidateSource for WorldScan {
    fn candidates(&self, world: &World, query: &ScanQuery) -> Vec<EmitterCandidate> {
        let mut out = Vec::new();
        let mut emitters = world.query::<(&RadarEmitter, &Transform)>();
        for (entity, (emitter, transform)) in emitters.iter() {
            if let Some(distance_sq) = query.admit(emitter, transform) {
                out.push(EmitterCandidate {
                    entity,
                    emitter: *emitter,
                    distance_sq,
                });
            }
        }
        out
    }
}

/// Emitters bucketed by platform, rebuilt once per refresh.
///
/// Buckets can go stale between refreshes, so every hit is re-read from the
/// world and re-admitted. An emitter that moved away is dropped; one that
/// moved in is only seen after the next refresh.
#[derive(Debug, Clone, Default)]
pub struct PlatformIndex {
    by_platform: HashMap<NetEntity, Vec<Entity>>,
}

impl PlatformIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed emitters on `platform`.
    pub fn len_on(&self, platform: NetEntity) -> usize {
        self.by_platform.get(&platform).map_or(0, Vec::len)
    }
}

impl CandidateSource for PlatformIndex {
    fn refresh(&mut self, world: &World) {
        self.by_platform.clear();
        let mut emitters = world.query::<(&RadarEmitter, &Transform)>();
        for (entity, (_emitter, transform)) in emitters.iter() {
            if let Some(platform) = transform.platform {
                self.by_platform.entry(platform).or_default().push(entity);
            }
        }
    }

    fn candidates(&self, world: &World, query: &ScanQuery) -> Vec<EmitterCandidate> {
        let Some(bucket) = self.by_platform.get(&query.platform) else {
            return Vec::new();
        };

        bucket
            .iter()
            .filter_map(|&entity| {
                let emitter = *world.get::<&RadarEmitter>(entity).ok()?;
                let transform = *world.get::<&Transform>(entity).ok()?;
                let distance_sq = query.admit(&emitter, &transform)?;
                Some(EmitterCandidate {
                    entity,
                    emitter,
                    distance_sq,
                })
            })
            .collect()
    }
}
