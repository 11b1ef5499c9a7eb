//! Data-driven console and emitter definitions.
//!
//! Prototypes are JSON documents describing what to spawn. Every field is
//! optional and falls back to the component defaults.

use serde::{Deserialize, Serialize};

use crate::components::{AdvancedRadarConsole, RadarConsole, RadarEmitter};
use crate::error::ConfigError;

/// Everything needed to spawn a radar console.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsolePrototype {
    pub name: Option<String>,
    #[serde(flatten)]
    pub console: RadarConsole,
    /// Present for consoles with the active/passive UI.
    pub advanced: Option<AdvancedRadarConsole>,
    /// Spawn with an open observer interface.
    pub observed: bool,
}

impl ConsolePrototype {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let prototype: Self = serde_json::from_str(json)?;
        prototype.validate()?;
        Ok(prototype)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("max_range", self.console.max_range)?;
        non_negative(
            "required_emitter_range",
            self.console.required_emitter_range,
        )?;
        if let Some(advanced) = &self.advanced {
            let modifier = advanced.passive_range_modifier;
            if !(0.0..=1.0).contains(&modifier) {
                return Err(ConfigError::OutOfRange {
                    field: "passive_range_modifier",
                    value: modifier,
                    expected: "0.0..=1.0",
                });
            }
            non_negative("passive_noise_degrees", advanced.passive_noise_degrees)?;
            non_negative("passive_distance_noise", advanced.passive_distance_noise)?;
            non_negative(
                "passive_refresh_interval",
                advanced.passive_refresh_interval,
            )?;
        }
        Ok(())
    }
}

/// Everything needed to spawn an emitter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterPrototype {
    pub name: Option<String>,
    #[serde(flatten)]
    pub emitter: RadarEmitter,
}

impl EmitterPrototype {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let prototype: Self = serde_json::from_str(json)?;
        non_negative("max_range", prototype.emitter.max_range)?;
        Ok(prototype)
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this check too.
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            expected: ">= 0",
        })
    }
}
