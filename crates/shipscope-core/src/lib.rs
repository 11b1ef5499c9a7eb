//! Core types and definitions for the shipscope radar console engine.
//!
//! This crate defines the vocabulary shared by the engine and its observers:
//! components, commands, snapshots, notifications, prototypes and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod error;
pub mod events;
pub mod prototypes;
pub mod state;
pub mod types;
