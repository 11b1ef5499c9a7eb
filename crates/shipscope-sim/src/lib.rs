//! Radar console engine for shipscope.
//!
//! Owns the hecs ECS world, recomputes console snapshots on startup, on
//! operator commands and on each tick, and hands them to observers.

pub mod engine;
pub mod ids;
pub mod systems;
pub mod world_setup;

pub use engine::{ConsoleEngine, ScanStrategy, SimConfig};
pub use shipscope_core as core;
