//! Conversions between hecs entity handles and network identities.

use hecs::Entity;

use shipscope_core::types::NetEntity;

pub fn net_id(entity: Entity) -> NetEntity {
    NetEntity(entity.to_bits().get())
}

/// `None` for bit patterns that can never name an entity. A `Some` result may
/// still refer to a despawned entity; check it against the world.
pub fn entity_of(net: NetEntity) -> Option<Entity> {
    Entity::from_bits(net.0)
}
