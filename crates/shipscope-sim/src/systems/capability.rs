//! Capability combination.
//!
//! Merges what the console allows, what the hardware provides and the
//! console's operating mode into one sensing profile. Working hardware is a
//! hard gate: without it the console contributes nothing.

use shipscope_core::components::{AdvancedRadarConsole, RadarConsole, RadarEmitter};
use shipscope_core::state::PassiveParams;

/// Effective sensing parameters for one recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensingProfile {
    pub max_range: f32,
    pub is_advanced: bool,
    pub is_radar_active: bool,
    pub passive: PassiveParams,
    /// An enabled emitter backs this profile.
    pub powered: bool,
}

impl SensingProfile {
    /// No hardware, or hardware offline.
    pub fn no_hardware() -> Self {
        Self {
            max_range: 0.0,
            is_advanced: false,
            is_radar_active: false,
            passive: PassiveParams::neutral(),
            powered: false,
        }
    }

    /// True when there is anything to show: powered, and not reduced to a
    /// passive basic radar with zero range.
    pub fn has_signal(&self) -> bool {
        self.powered && (self.max_range > 0.0 || self.is_radar_active || self.is_advanced)
    }
}

/// Combine console, hardware and operating mode.
pub fn combine(
    console: &RadarConsole,
    advanced: Option<&AdvancedRadarConsole>,
    emitter: Option<&RadarEmitter>,
) -> SensingProfile {
    let emitter = match emitter {
        Some(e) if e.enabled => e,
        _ => return SensingProfile::no_hardware(),
    };

    let mut max_range = console.max_range.min(emitter.max_range).max(0.0);

    match advanced {
        Some(profile) => {
            if !profile.active {
                max_range *= passive_scale(profile.passive_range_modifier);
            }
            SensingProfile {
                max_range,
                // Hardware gates the advanced UI even when the console has the profile.
                is_advanced: emitter.advanced,
                is_radar_active: profile.active,
                passive: PassiveParams::from(profile),
                powered: true,
            }
        }
        None => SensingProfile {
            max_range,
            is_advanced: false,
            is_radar_active: true,
            passive: PassiveParams::neutral(),
            powered: true,
        },
    }
}

/// Range multiplier for passive mode. Non-finite modifiers collapse to zero.
fn passive_scale(modifier: f32) -> f32 {
    if modifier.is_finite() {
        modifier.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
