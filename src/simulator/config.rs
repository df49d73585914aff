//! Simulation configuration.

use crate::core::config::EngineConfig;
use crate::rarity::RarityTier;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated ladder climbs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Floors climbed per run, starting at floor 1
    pub floors: u32,

    /// Player level passed to reward resolution
    pub player_level: u32,

    /// Chance to clear each floor
    pub win_chance: f64,

    /// Items below this rarity are salvaged at the end of a run
    pub keep_threshold: RarityTier,

    /// Engine balance data used for every run
    pub engine: EngineConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            floors: 100,
            player_level: 10,
            win_chance: 0.85,
            keep_threshold: RarityTier::Rare,
            engine: EngineConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a sanity check of early floors
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            floors: 30,
            ..Default::default()
        }
    }

    /// Long climbs to see zone-exclusive tiers unlock
    pub fn deep_dive(floors: u32) -> Self {
        Self {
            num_runs: 200,
            floors,
            win_chance: 0.95,
            ..Default::default()
        }
    }
}
