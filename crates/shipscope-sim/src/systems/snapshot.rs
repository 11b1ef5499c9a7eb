//! Snapshot system: turns a console's frame and sensing profile into the
//! `NavSnapshot` pushed to observers.
//!
//! This system is read-only. "No signal" always wins: without a signal the
//! snapshot carries no frame, no range and nothing active.

use shipscope_core::components::{RadarConsole, Transform};
use shipscope_core::state::{DockMap, NavSnapshot};
use shipscope_core::types::{Coordinates, NetEntity, ReferenceFrame};

use super::capability::SensingProfile;

/// Where the console's radar is centered.
///
/// Self-centered consoles use their own origin with no rotation. Otherwise the
/// frame exists only while the console is anchored directly to its platform.
pub fn reference_frame(
    console_id: NetEntity,
    console: &RadarConsole,
    transform: Option<&Transform>,
) -> Option<ReferenceFrame> {
    if console.follow_entity {
        return Some(ReferenceFrame {
            coordinates: Coordinates::origin_of(console_id),
            angle: 0.0,
        });
    }

    let transform = transform?;
    let platform = transform.platform?;
    if transform.parent != Some(platform) {
        return None;
    }

    Some(ReferenceFrame {
        coordinates: Coordinates::new(platform, transform.local_position),
        angle: transform.local_rotation,
    })
}

/// Build the snapshot for one console.
pub fn build_nav_snapshot(
    console: &RadarConsole,
    frame: Option<ReferenceFrame>,
    profile: &SensingProfile,
    docks: DockMap,
) -> NavSnapshot {
    let rotate_with_entity = !console.follow_entity;

    let frame = match frame {
        Some(frame) if profile.has_signal() => frame,
        _ => return NavSnapshot::no_signal(docks, rotate_with_entity),
    };

    NavSnapshot {
        max_range: profile.max_range,
        coordinates: Some(frame.coordinates),
        angle: Some(frame.angle),
        docks,
        rotate_with_entity,
        is_advanced: profile.is_advanced,
        is_radar_active: profile.is_radar_active,
        passive_range_modifier: profile.passive.range_modifier,
        passive_noise_degrees: profile.passive.noise_degrees,
        passive_distance_noise: profile.passive.distance_noise,
        passive_refresh_interval: profile.passive.refresh_interval,
    }
}
