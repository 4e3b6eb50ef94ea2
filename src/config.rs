//! Game configuration, loaded once at startup and passed to the session.
//!
//! Settings live in a RON file, e.g.:
//!
//! ```ron
//! (
//!     audio_volume: 0.5,
//!     muted: false,
//!     online: false,
//!     battle: (player_damage: 10, enemy_damage: 5),
//!     wild_level_range: (5, 10),
//!     wild_encounter_chance: 0.1,
//! )
//! ```
//!
//! Any field left out falls back to its default.

use crate::errors::{ConfigError, ConfigResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// Fixed attack damage for each side of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleConfig {
    pub player_damage: u32,
    pub enemy_damage: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            player_damage: 10,
            enemy_damage: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub audio_volume: f32,
    pub muted: bool,
    pub online: bool,
    pub battle: BattleConfig,
    pub wild_level_range: (u32, u32),
    /// Chance per overworld step that a wild monster appears.
    pub wild_encounter_chance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            audio_volume: 0.5,
            muted: false,
            online: false,
            battle: BattleConfig::default(),
            wild_level_range: (5, 10),
            wild_encounter_chance: 0.1,
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(text: &str) -> ConfigResult<Self> {
        let config: GameConfig = ron::from_str(text).inspect_err(|e| warn!("Rejected config: {}", e))?;
        config.validate().inspect_err(|e| warn!("Rejected config: {}", e))?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    pub fn to_ron_string(&self) -> ConfigResult<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    pub fn wild_levels(&self) -> RangeInclusive<u32> {
        self.wild_level_range.0..=self.wild_level_range.1
    }

    /// Volume to apply to audio output, taking mute into account.
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.audio_volume
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.audio_volume) {
            return Err(ConfigError::Invalid(format!(
                "audio_volume {} is outside 0.0..=1.0",
                self.audio_volume
            )));
        }
        if !(0.0..=1.0).contains(&self.wild_encounter_chance) {
            return Err(ConfigError::Invalid(format!(
                "wild_encounter_chance {} is outside 0.0..=1.0",
                self.wild_encounter_chance
            )));
        }
        let (lo, hi) = self.wild_level_range;
        if lo == 0 || lo > hi {
            return Err(ConfigError::Invalid(format!(
                "wild_level_range ({}, {}) must satisfy 1 <= lo <= hi",
                lo, hi
            )));
        }
        Ok(())
    }
}
