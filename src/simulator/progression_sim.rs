//! Per-run progression: what a climb earned and what it cost to max an item.

use super::loot_sim::LootStats;
use crate::core::error::Result;
use crate::core::rng::RandomSource;
use crate::engine::{LootEngine, PersistenceHook};
use crate::items::Item;

/// Statistics from a single simulated climb.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub victories: u32,
    pub defeats: u32,
    pub highest_floor: u32,
    pub total_xp: u64,
    pub total_gold: u64,
    pub loot_stats: LootStats,
    /// Upgrade of the run's best item to its cap, if the run dropped any item.
    pub upgrade: Option<UpgradeRun>,
    pub salvaged_items: u32,
    pub salvage_gold: u64,
    /// Power score of the best item after upgrading.
    pub best_power: f64,
}

/// Cost of taking one item from its current level to max.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UpgradeRun {
    pub attempts: u32,
    pub failures: u32,
    pub gold_spent: u64,
    pub levels_gained: u32,
}

/// Keep requesting the remaining levels until the item is capped.
/// Every attempt has at least a 30% chance, so this terminates.
pub fn upgrade_to_max<S: RandomSource, H: PersistenceHook>(
    engine: &mut LootEngine<S, H>,
    item: &Item,
) -> Result<(Item, UpgradeRun)> {
    let mut current = item.clone();
    let mut run = UpgradeRun::default();

    while !current.is_max_level() {
        let remaining = current.max_level() - current.level;
        let outcome = engine.attempt_upgrade(&current, remaining)?;
        run.attempts += outcome.steps.len() as u32;
        run.failures += outcome.failures() as u32;
        run.gold_spent += outcome.total_cost;
        run.levels_gained += outcome.levels_gained;
        current = outcome.item;
    }

    Ok((current, run))
}
