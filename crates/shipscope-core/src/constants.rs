//! Tuning parameters and component defaults.

/// Refresh tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Console defaults ---

/// Console capability ceiling when a prototype does not specify one.
pub const DEFAULT_CONSOLE_MAX_RANGE: f32 = 256.0;

// --- Emitter defaults ---

/// Hardware range ceiling when a prototype does not specify one.
pub const DEFAULT_EMITTER_MAX_RANGE: f32 = 512.0;

// --- Advanced (active/passive) profile defaults ---

pub const DEFAULT_PASSIVE_RANGE_MODIFIER: f32 = 0.4;
pub const DEFAULT_PASSIVE_NOISE_DEGREES: f32 = 12.0;
pub const DEFAULT_PASSIVE_DISTANCE_NOISE: f32 = 30.0;
pub const DEFAULT_PASSIVE_REFRESH_INTERVAL: f32 = 1.2;

// --- Neutral passive parameters (no advanced profile in effect) ---

pub const NEUTRAL_PASSIVE_RANGE_MODIFIER: f32 = 1.0;
pub const NEUTRAL_PASSIVE_NOISE_DEGREES: f32 = 0.0;
pub const NEUTRAL_PASSIVE_DISTANCE_NOISE: f32 = 0.0;
pub const NEUTRAL_PASSIVE_REFRESH_INTERVAL: f32 = 1.0;

// --- Notifications ---

/// Shown to the operator when no emitter could be linked.
pub const LINK_FAILED_MESSAGE: &str = "No radar emitter in range to link.";

/// Name used in notifications for emitters without an `EntityName`.
pub const UNNAMED_EMITTER: &str = "unnamed emitter";
