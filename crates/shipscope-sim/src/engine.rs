//! Console engine. Owns the ECS world and every radar console in it.
//!
//! `ConsoleEngine` processes operator commands, recomputes console snapshots
//! and publishes them for observers. Completely headless, so every behavior is
//! reachable from plain tests.
//!
//! One recomputation is indivisible: it revalidates the console's link, scans
//! candidates, combines capabilities and builds the snapshot in one call.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use shipscope_core::commands::ConsoleCommand;
use shipscope_core::components::{AdvancedRadarConsole, ConsoleUi, RadarConsole, Transform};
use shipscope_core::constants::LINK_FAILED_MESSAGE;
use shipscope_core::error::{ConfigError, ConsoleError};
use shipscope_core::events::{Notification, NotificationKind};
use shipscope_core::prototypes::{ConsolePrototype, EmitterPrototype};
use shipscope_core::state::{ConsoleUpdate, NavSnapshot};
use shipscope_core::types::{NetEntity, SimTime};

use crate::ids::{entity_of, net_id};
use crate::systems::emitters::{selection, CandidateSource, PlatformIndex, ScanQuery, WorldScan};
use crate::systems::link::{self, LinkOutcome};
use crate::systems::{capability, docks, snapshot};
use crate::world_setup;

/// How candidate emitters are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStrategy {
    /// Scan every emitter for every console.
    #[default]
    WorldScan,
    /// Bucket emitters by platform once per refresh.
    PlatformIndex,
}

/// Configuration for starting a new engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub scan_strategy: ScanStrategy,
    /// Recompute every console on each tick, not only on commands.
    pub refresh_on_tick: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            scan_strategy: ScanStrategy::default(),
            refresh_on_tick: true,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The console engine. Owns the ECS world and the outgoing queues.
pub struct ConsoleEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    source: Box<dyn CandidateSource>,
    command_queue: VecDeque<ConsoleCommand>,
    updates: Vec<ConsoleUpdate>,
    notifications: Vec<Notification>,
    changed: Vec<NetEntity>,
}

impl ConsoleEngine {
    /// Create an engine with the candidate source named by `config`.
    pub fn new(config: SimConfig) -> Self {
        let source: Box<dyn CandidateSource> = match config.scan_strategy {
            ScanStrategy::WorldScan => Box::new(WorldScan),
            ScanStrategy::PlatformIndex => Box::new(PlatformIndex::new()),
        };
        Self::with_source(config, source)
    }

    /// Create an engine with a custom candidate source.
    pub fn with_source(config: SimConfig, source: Box<dyn CandidateSource>) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            config,
            source,
            command_queue: VecDeque::new(),
            updates: Vec::new(),
            notifications: Vec::new(),
            changed: Vec::new(),
        }
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for the systems that own emitters (power, damage,
    /// movement). Changes are picked up by the next recomputation.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn spawn_platform(&mut self) -> Entity {
        world_setup::spawn_platform(&mut self.world)
    }

    /// Spawn a console and run its startup recomputation.
    pub fn spawn_console(
        &mut self,
        platform: Option<Entity>,
        position: Vec2,
        rotation: f32,
        prototype: &ConsolePrototype,
    ) -> Result<Entity, ConsoleError> {
        let entity =
            world_setup::spawn_console(&mut self.world, platform, position, rotation, prototype);
        self.recompute(entity)?;
        Ok(entity)
    }

    pub fn spawn_emitter(
        &mut self,
        platform: Option<Entity>,
        position: Vec2,
        prototype: &EmitterPrototype,
    ) -> Entity {
        world_setup::spawn_emitter(&mut self.world, platform, position, prototype)
    }

    /// Open the console's observer interface and push its current snapshot.
    pub fn open_ui(&mut self, console: Entity) -> Result<NavSnapshot, ConsoleError> {
        self.require_console(net_id(console))?;
        if self.world.get::<&ConsoleUi>(console).is_err() {
            self.world.insert_one(console, ConsoleUi).ok();
        }
        self.recompute(console)
    }

    /// Close the console's observer interface. The console stops publishing.
    pub fn close_ui(&mut self, console: Entity) -> Result<(), ConsoleError> {
        self.require_console(net_id(console))?;
        self.world.remove_one::<ConsoleUi>(console).ok();
        Ok(())
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ConsoleCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ConsoleCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process queued commands, refresh consoles and return everything
    /// published since the last drain.
    pub fn tick(&mut self) -> Vec<ConsoleUpdate> {
        self.process_commands();

        if self.config.refresh_on_tick {
            self.refresh_all();
        }

        self.time.advance();
        self.drain_updates()
    }

    /// Recompute every console in the world.
    pub fn refresh_all(&mut self) {
        self.source.refresh(&self.world);

        let consoles: Vec<Entity> = {
            let mut query = self.world.query::<&RadarConsole>();
            query.iter().map(|(entity, _)| entity).collect()
        };

        for console in consoles {
            if let Err(e) = self.recompute_console(console) {
                warn!("refresh skipped console {}: {e}", net_id(console));
            }
        }
    }

    /// Recompute one console on demand.
    pub fn recompute(&mut self, console: Entity) -> Result<NavSnapshot, ConsoleError> {
        self.source.refresh(&self.world);
        self.recompute_console(console)
    }

    /// Apply a command immediately.
    pub fn handle_command(&mut self, command: ConsoleCommand) -> Result<(), ConsoleError> {
        let console = self.require_console(command.console())?;

        match command {
            ConsoleCommand::ToggleActiveMode { active, .. } => {
                self.toggle_active_mode(console, active)
            }
            ConsoleCommand::RequestLinkEmitter { actor, .. } => {
                self.request_link_emitter(console, actor)
            }
            ConsoleCommand::SetMaxRange { range, .. } => self.set_max_range(console, range),
        }
    }

    /// Take all snapshots published since the last drain.
    pub fn drain_updates(&mut self) -> Vec<ConsoleUpdate> {
        std::mem::take(&mut self.updates)
    }

    /// Take all operator notifications since the last drain.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Take the consoles whose persisted state changed since the last drain.
    pub fn drain_changed(&mut self) -> Vec<NetEntity> {
        std::mem::take(&mut self.changed)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(e) = self.handle_command(command) {
                warn!("dropped command: {e}");
            }
        }
    }

    fn toggle_active_mode(&mut self, console: Entity, active: bool) -> Result<(), ConsoleError> {
        {
            let Ok(mut advanced) = self.world.get::<&mut AdvancedRadarConsole>(console) else {
                return Ok(());
            };
            if advanced.active == active {
                return Ok(());
            }
            advanced.active = active;
        }

        debug!("console {} active = {active}", net_id(console));
        self.mark_changed(net_id(console));
        self.recompute(console).map(|_| ())
    }

    fn request_link_emitter(
        &mut self,
        console: Entity,
        actor: NetEntity,
    ) -> Result<(), ConsoleError> {
        let actor_alive = entity_of(actor).is_some_and(|e| self.world.contains(e));
        if !actor_alive {
            debug!("link request for console {} from absent actor {actor}", net_id(console));
            return Ok(());
        }

        self.source.refresh(&self.world);
        let outcome = link::request_link(&mut self.world, self.source.as_ref(), console);

        match outcome {
            LinkOutcome::Linked { emitter, name } => {
                self.mark_changed(net_id(console));
                self.notify(
                    actor,
                    console,
                    NotificationKind::LinkSucceeded {
                        emitter: net_id(emitter),
                        name: name.clone(),
                    },
                    format!("Linked to {name}."),
                );
                self.recompute_console(console).map(|_| ())
            }
            LinkOutcome::NoCandidate => {
                self.notify(
                    actor,
                    console,
                    NotificationKind::LinkFailed,
                    LINK_FAILED_MESSAGE.to_string(),
                );
                Ok(())
            }
        }
    }

    fn set_max_range(&mut self, console: Entity, range: f32) -> Result<(), ConsoleError> {
        let range = range.max(0.0);
        {
            let mut radar = self
                .world
                .get::<&mut RadarConsole>(console)
                .map_err(|_| ConsoleError::NotAConsole(net_id(console)))?;
            if radar.max_range == range {
                return Ok(());
            }
            radar.max_range = range;
        }

        info!("console {} max range set to {range}", net_id(console));
        self.mark_changed(net_id(console));
        self.recompute(console).map(|_| ())
    }

    /// The full recomputation pipeline for one console. Assumes the candidate
    /// source has been refreshed for the current world.
    fn recompute_console(&mut self, entity: Entity) -> Result<NavSnapshot, ConsoleError> {
        let id = net_id(entity);
        self.require_console(id)?;

        let mut console: RadarConsole = {
            let stored = self
                .world
                .get::<&RadarConsole>(entity)
                .map_err(|_| ConsoleError::NotAConsole(id))?;
            (*stored).clone()
        };
        let transform = self.world.get::<&Transform>(entity).ok().map(|t| *t);
        let advanced: Option<AdvancedRadarConsole> = self
            .world
            .get::<&AdvancedRadarConsole>(entity)
            .ok()
            .map(|a| (*a).clone());

        let candidates = transform
            .as_ref()
            .and_then(|t| ScanQuery::for_console(&console, t))
            .map(|query| self.source.candidates(&self.world, &query))
            .unwrap_or_default();

        let resolution = selection::resolve(&mut console, &candidates);
        if resolution.link_cleared {
            debug!("console {id} dropped stale emitter link");
            if let Ok(mut stored) = self.world.get::<&mut RadarConsole>(entity) {
                stored.linked_emitter = None;
            }
            self.mark_changed(id);
        }

        let emitter = resolution.choice.candidate().map(|c| c.emitter);
        let profile = capability::combine(&console, advanced.as_ref(), emitter.as_ref());
        let frame = snapshot::reference_frame(id, &console, transform.as_ref());
        let docks = docks::collect_docks(&self.world);
        let snap = snapshot::build_nav_snapshot(&console, frame, &profile, docks);

        debug!(
            "console {id}: choice {:?}, range {}, signal {}",
            resolution.choice.candidate().map(|c| net_id(c.entity)),
            snap.max_range,
            snap.has_signal()
        );

        if self.world.get::<&ConsoleUi>(entity).is_ok() {
            self.updates.push(ConsoleUpdate {
                console: id,
                snapshot: snap.clone(),
            });
        }

        Ok(snap)
    }

    /// Resolve a network id to a live console entity.
    fn require_console(&self, id: NetEntity) -> Result<Entity, ConsoleError> {
        let entity = entity_of(id)
            .filter(|e| self.world.contains(*e))
            .ok_or(ConsoleError::UnknownEntity(id))?;
        if self.world.get::<&RadarConsole>(entity).is_err() {
            return Err(ConsoleError::NotAConsole(id));
        }
        Ok(entity)
    }

    fn mark_changed(&mut self, id: NetEntity) {
        if !self.changed.contains(&id) {
            self.changed.push(id);
        }
    }

    fn notify(
        &mut self,
        recipient: NetEntity,
        console: Entity,
        kind: NotificationKind,
        message: String,
    ) {
        self.notifications.push(Notification {
            recipient,
            console: net_id(console),
            kind,
            message,
            tick: self.time.tick,
        });
    }
}
