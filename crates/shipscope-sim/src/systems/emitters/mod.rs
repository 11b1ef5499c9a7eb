//! Emitter discovery and selection for radar consoles.

pub mod scan;
pub mod selection;

pub use scan::{CandidateSource, EmitterCandidate, PlatformIndex, ScanQuery, WorldScan};
pub use selection::{EmitterChoice, Resolution, SelectionPolicy};
