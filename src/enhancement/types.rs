use crate::core::constants::{PITY_BONUS_PER_FAILURE, PITY_SUCCESS_CAP, UPGRADE_COST_PER_LEVEL};
use crate::items::Item;
use serde::{Deserialize, Serialize};

/// Base chance for the step that reaches `target_level` (= current + 1).
///
/// +1..=+5: 100%, +6..=+10: 80%, +11..=+14: 50%, +15 and up: 30%
pub fn success_rate(target_level: u32) -> f64 {
    match target_level {
        0 => 0.0,
        1..=5 => 1.0,
        6..=10 => 0.8,
        11..=14 => 0.5,
        _ => 0.3,
    }
}

/// Chance of the next step from `current_level` with `pity` consecutive
/// failures behind it. Guaranteed steps stay at 1.0; reduced steps gain
/// 0.15 per failure, capped at 0.95.
pub fn success_probability(current_level: u32, pity: u32) -> f64 {
    let base = success_rate(current_level + 1);
    if base >= 1.0 {
        return 1.0;
    }
    (base + pity as f64 * PITY_BONUS_PER_FAILURE).min(PITY_SUCCESS_CAP)
}

/// Gold to attempt raising `current_level` by one. Charged on failure too.
pub fn upgrade_cost(current_level: u32) -> u64 {
    UPGRADE_COST_PER_LEVEL * (u64::from(current_level) + 1)
}

/// One resolved single-level step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeStep {
    pub from_level: u32,
    pub probability: f64,
    pub cost: u64,
    pub success: bool,
    pub pity_after: u32,
}

/// Result of an upgrade request. `item` is an updated copy; the caller
/// persists it (pity included) before the next attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeOutcome {
    pub item: Item,
    pub steps: Vec<UpgradeStep>,
    pub total_cost: u64,
    pub levels_gained: u32,
    /// Final pity minus starting pity.
    pub pity_delta: i64,
}

impl UpgradeOutcome {
    pub fn successes(&self) -> usize {
        self.steps.iter().filter(|s| s.success).count()
    }

    pub fn failures(&self) -> usize {
        self.steps.len() - self.successes()
    }
}

/// What an upgrade request would attempt, before any roll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpgradeQuote {
    pub effective_levels: u32,
    /// Cost if every step succeeds; failures repeat a step at the same price.
    pub projected_cost: u64,
    pub first_step_probability: f64,
}
