//! Explicit emitter linking.
//!
//! Runs the nearest-candidate search for a console, ignoring any current link,
//! and persists the winner. Nothing is written when there is no winner.

use hecs::{Entity, World};
use log::info;

use shipscope_core::components::{EntityName, RadarConsole, Transform};
use shipscope_core::constants::UNNAMED_EMITTER;

use super::emitters::{selection, CandidateSource, ScanQuery, SelectionPolicy};
use crate::ids::net_id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked { emitter: Entity, name: String },
    /// Detached console, or no eligible emitter.
    NoCandidate,
}

/// Link the nearest eligible emitter to `console_entity`.
///
/// The caller has already checked that the entity carries a `RadarConsole`.
pub fn request_link(
    world: &mut World,
    source: &dyn CandidateSource,
    console_entity: Entity,
) -> LinkOutcome {
    let query = {
        let Ok(console) = world.get::<&RadarConsole>(console_entity) else {
            return LinkOutcome::NoCandidate;
        };
        let Ok(transform) = world.get::<&Transform>(console_entity) else {
            return LinkOutcome::NoCandidate;
        };
        ScanQuery::for_console(&console, &transform)
    };

    let Some(query) = query else {
        return LinkOutcome::NoCandidate;
    };

    let candidates = source.candidates(world, &query);
    let Some(winner) = selection::pick(SelectionPolicy::Nearest, &candidates) else {
        return LinkOutcome::NoCandidate;
    };

    if let Ok(mut console) = world.get::<&mut RadarConsole>(console_entity) {
        console.linked_emitter = Some(net_id(winner.entity));
    }

    let name = emitter_name(world, winner.entity);
    info!(
        "console {} linked to emitter {} ({name})",
        net_id(console_entity),
        net_id(winner.entity)
    );

    LinkOutcome::Linked {
        emitter: winner.entity,
        name,
    }
}

/// Display name of an emitter for operator notifications.
pub fn emitter_name(world: &World, emitter: Entity) -> String {
    world
        .get::<&EntityName>(emitter)
        .map(|name| name.0.clone())
        .unwrap_or_else(|_| UNNAMED_EMITTER.to_string())
}
