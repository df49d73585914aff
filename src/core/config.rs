//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! max_floors = 500
//! reward_difficulty = 3
//!
//! [[rarity.entries]]
//! tier = "Common"
//! base_weight = 40.0
//! unlock_floor = 1
//! ```

use super::constants::{
    DEFAULT_MAX_FLOORS, DEFAULT_REWARD_DIFFICULTY, DIFFICULTY_SHIFT_THRESHOLD,
};
use super::error::ConfigError;
use crate::rarity::RarityTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest ladder `build_dungeon_ladder` will produce.
    pub max_floors: u32,
    /// Difficulty passed to the item generator for dungeon equipment drops.
    /// Must reach the difficulty-shift threshold.
    pub reward_difficulty: u32,
    /// Weights and unlock floors for every rarity tier.
    pub rarity: RarityTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_floors: DEFAULT_MAX_FLOORS,
            reward_difficulty: DEFAULT_REWARD_DIFFICULTY,
            rarity: RarityTable::default(),
        }
    }
}

impl EngineConfig {
    /// Load a TOML file and validate it
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a TOML string and validate it
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_floors == 0 {
            return Err(ConfigError::Validation(
                "max_floors must be at least 1".to_string(),
            ));
        }
        if self.reward_difficulty < DIFFICULTY_SHIFT_THRESHOLD {
            return Err(ConfigError::Validation(format!(
                "reward_difficulty must be at least {DIFFICULTY_SHIFT_THRESHOLD}"
            )));
        }
        self.rarity.validate()
    }
}
