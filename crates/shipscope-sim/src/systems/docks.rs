//! Dock metadata for snapshots.
//!
//! Read-only. Ports are grouped by platform and ordered by entity identity so
//! two snapshots of the same world serialize identically.

use hecs::World;

use shipscope_core::components::{DockPort, Transform};
use shipscope_core::state::{DockMap, DockPortState};

use crate::ids::{entity_of, net_id};

/// Every docking port in the world that sits on a platform.
pub fn collect_docks(world: &World) -> DockMap {
    let mut docks = DockMap::new();

    let mut ports = world.query::<(&DockPort, &Transform)>();
    for (entity, (port, transform)) in ports.iter() {
        let Some(platform) = transform.platform else {
            continue;
        };

        let docked_to = port.docked_to.filter(|other| {
            entity_of(*other).is_some_and(|e| world.contains(e))
        });

        docks.entry(platform).or_default().push(DockPortState {
            entity: net_id(entity),
            name: port.name.clone(),
            position: transform.local_position,
            angle: transform.local_rotation,
            docked_to,
            connected: docked_to.is_some(),
        });
    }

    for ports in docks.values_mut() {
        ports.sort_by_key(|p| p.entity);
    }
    docks
}
