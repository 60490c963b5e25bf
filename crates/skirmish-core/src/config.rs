//! Setup-time configuration: what the player hands to the simulator.
//!
//! Configs are validated once here so the simulation can treat them as
//! structurally sound.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_ACTIONS, MAX_ROSTER};
use crate::enums::{ActionKey, UnitType};
use crate::error::ConfigError;

/// One unit's archetype and its cyclic action sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitConfig {
    #[serde(rename = "type")]
    pub unit_type: UnitType,
    #[serde(default)]
    pub actions: Vec<ActionKey>,
}

impl UnitConfig {
    pub fn new(unit_type: UnitType, actions: impl Into<Vec<ActionKey>>) -> Self {
        Self {
            unit_type,
            actions: actions.into(),
        }
    }
}

/// The player's ordered roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterConfig {
    pub units: Vec<UnitConfig>,
}

impl Default for RosterConfig {
    /// Three gatlings with nothing to do, as the setup screen starts out.
    fn default() -> Self {
        Self {
            units: vec![UnitConfig::new(UnitType::Gatling, Vec::new()); MAX_ROSTER],
        }
    }
}

impl RosterConfig {
    pub fn new(units: Vec<UnitConfig>) -> Self {
        Self { units }
    }

    /// Check roster size and action list lengths.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.units.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if self.units.len() > MAX_ROSTER {
            return Err(ConfigError::RosterTooLarge {
                count: self.units.len(),
            });
        }
        for (slot, unit) in self.units.iter().enumerate() {
            if unit.actions.len() > MAX_ACTIONS {
                return Err(ConfigError::TooManyActions {
                    slot,
                    count: unit.actions.len(),
                });
            }
        }
        Ok(())
    }
}

/// Everything needed to start a battle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSettings {
    #[serde(default)]
    pub player: RosterConfig,
    /// Seed for the opponent draw. `None` lets the caller pick one.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl BattleSettings {
    /// Parse and validate settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: BattleSettings = serde_json::from_str(json)?;
        settings.player.validate()?;
        Ok(settings)
    }

    /// Read, parse, and validate a settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
