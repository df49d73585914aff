//! Loot balance simulator for Monte Carlo analysis.
//!
//! Run thousands of simulated ladder climbs to analyze:
//! - Rarity distribution of dungeon drops
//! - Cosmetic and shadow frequency
//! - Gold and attempts needed to max an item
//! - Salvage income
//!
//! Every run goes through `LootEngine`, so results match what callers see.

mod config;
mod loot_sim;
mod progression_sim;
mod report;
mod runner;

pub use config::SimConfig;
pub use loot_sim::LootStats;
pub use progression_sim::{upgrade_to_max, RunStats, UpgradeRun};
pub use report::SimReport;
pub use runner::run_simulation;
