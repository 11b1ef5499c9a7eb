//! ECS systems that run during a console recomputation.
//!
//! Systems are plain functions over `&World` (or `&mut World` where a console
//! is written). They do not own state; all state lives in components.

pub mod capability;
pub mod docks;
pub mod emitters;
pub mod link;
pub mod snapshot;
