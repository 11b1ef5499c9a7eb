//! Entity spawn factories for platforms, consoles, emitters and dock ports.
//!
//! Everything mounted on a platform is anchored directly to it
//! (`parent == platform`); use `reparent` to move hardware around.

use glam::Vec2;
use hecs::{Entity, EntityBuilder, World};
use rand::Rng;

use shipscope_core::components::*;
use shipscope_core::prototypes::{ConsolePrototype, EmitterPrototype};

use crate::ids::net_id;

/// Transform for an entity anchored to `platform` (or floating free).
pub fn anchored_transform(platform: Option<Entity>, position: Vec2, rotation: f32) -> Transform {
    let platform = platform.map(net_id);
    Transform {
        parent: platform,
        platform,
        local_position: position,
        local_rotation: rotation,
    }
}

/// Spawn an empty platform (grid).
pub fn spawn_platform(world: &mut World) -> Entity {
    world.spawn((Platform,))
}

/// Spawn a console from a prototype. Does not compute its first snapshot.
pub fn spawn_console(
    world: &mut World,
    platform: Option<Entity>,
    position: Vec2,
    rotation: f32,
    prototype: &ConsolePrototype,
) -> Entity {
    let mut builder = EntityBuilder::new();
    builder
        .add(prototype.console.clone())
        .add(anchored_transform(platform, position, rotation));
    if let Some(advanced) = &prototype.advanced {
        builder.add(advanced.clone());
    }
    if let Some(name) = &prototype.name {
        builder.add(EntityName(name.clone()));
    }
    if prototype.observed {
        builder.add(ConsoleUi);
    }
    world.spawn(builder.build())
}

/// Spawn emitter hardware from a prototype.
pub fn spawn_emitter(
    world: &mut World,
    platform: Option<Entity>,
    position: Vec2,
    prototype: &EmitterPrototype,
) -> Entity {
    let mut builder = EntityBuilder::new();
    builder
        .add(prototype.emitter)
        .add(anchored_transform(platform, position, 0.0));
    if let Some(name) = &prototype.name {
        builder.add(EntityName(name.clone()));
    }
    world.spawn(builder.build())
}

/// Spawn a docking port on a platform.
pub fn spawn_dock_port(
    world: &mut World,
    platform: Entity,
    position: Vec2,
    angle: f32,
    name: Option<&str>,
) -> Entity {
    world.spawn((
        DockPort {
            name: name.map(str::to_string),
            docked_to: None,
        },
        anchored_transform(Some(platform), position, angle),
    ))
}

/// Move an entity onto `platform` (or off any platform) at `position`.
/// Returns false if the entity has no transform.
pub fn reparent(
    world: &mut World,
    entity: Entity,
    platform: Option<Entity>,
    position: Vec2,
) -> bool {
    match world.get::<&mut Transform>(entity) {
        Ok(mut transform) => {
            let rotation = transform.local_rotation;
            *transform = anchored_transform(platform, position, rotation);
            true
        }
        Err(_) => false,
    }
}

/// Scatter `count` emitters with random placement and capability across a
/// square of half-width `extent` centered on the platform origin.
pub fn scatter_emitters(
    world: &mut World,
    rng: &mut impl Rng,
    platform: Entity,
    count: usize,
    extent: f32,
) -> Vec<Entity> {
    (0..count)
        .map(|_| {
            let position = Vec2::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            );
            let prototype = EmitterPrototype {
                name: None,
                emitter: RadarEmitter {
                    max_range: rng.gen_range(50.0..600.0),
                    advanced: rng.gen_bool(0.5),
                    enabled: rng.gen_bool(0.8),
                },
            };
            spawn_emitter(world, Some(platform), position, &prototype)
        })
        .collect()
}
