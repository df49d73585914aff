//! The rarity table: one row per tier holding its base roll weight and the
//! floor that unlocks it, plus the weighted selection built on top.

use super::types::RarityTier;
use crate::core::constants::{
    DIFFICULTY_HIGH_TIER_THRESHOLD, DIFFICULTY_LEGENDARY_BONUS, DIFFICULTY_MYTHIC_BONUS,
    DIFFICULTY_SHIFT_PER_STEP, DIFFICULTY_SHIFT_THRESHOLD, EXCLUSIVE_FLOOR_WEIGHT,
    RARITY_WEIGHT_TOTAL,
};
use crate::core::error::ConfigError;
use crate::core::rng::RandomSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight of each tier, indexed by `RarityTier::index()`.
pub type TierWeights = [f64; RarityTier::COUNT];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityEntry {
    pub tier: RarityTier,
    /// Share of the 100-point base table. 0 for zone-exclusive tiers.
    pub base_weight: f64,
    /// First floor on which this tier can appear in a floor drop table.
    pub unlock_floor: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityTable {
    pub entries: Vec<RarityEntry>,
}

/// Base weights for the standard tiers. Sums to 100.
const STANDARD_WEIGHTS: [f64; RarityTier::STANDARD_COUNT] =
    [40.0, 25.0, 15.0, 10.0, 5.0, 3.0, 1.5, 0.5];

/// Unlock floors for the standard tiers.
const STANDARD_UNLOCK_FLOORS: [u32; RarityTier::STANDARD_COUNT] = [1, 1, 1, 1, 1, 10, 30, 50];

/// First zone-exclusive unlock floor, and the gap between successive ones.
const EXCLUSIVE_FIRST_UNLOCK: u32 = 60;
const EXCLUSIVE_UNLOCK_STEP: u32 = 20;

impl Default for RarityTable {
    fn default() -> Self {
        let entries = RarityTier::ALL
            .iter()
            .map(|&tier| {
                let i = tier.index();
                if tier.is_zone_exclusive() {
                    let k = (i - RarityTier::STANDARD_COUNT) as u32;
                    RarityEntry {
                        tier,
                        base_weight: 0.0,
                        unlock_floor: EXCLUSIVE_FIRST_UNLOCK + k * EXCLUSIVE_UNLOCK_STEP,
                    }
                } else {
                    RarityEntry {
                        tier,
                        base_weight: STANDARD_WEIGHTS[i],
                        unlock_floor: STANDARD_UNLOCK_FLOORS[i],
                    }
                }
            })
            .collect();
        Self { entries }
    }
}

impl RarityTable {
    fn entry(&self, tier: RarityTier) -> Option<&RarityEntry> {
        self.entries.iter().find(|e| e.tier == tier)
    }

    pub fn base_weight(&self, tier: RarityTier) -> f64 {
        self.entry(tier).map_or(0.0, |e| e.base_weight)
    }

    /// Unknown tiers never unlock.
    pub fn unlock_floor(&self, tier: RarityTier) -> u32 {
        self.entry(tier).map_or(u32::MAX, |e| e.unlock_floor)
    }

    /// Single source of truth for floor gating: drop tables, shop catalog
    /// filtering and salvage keep thresholds all ask this.
    pub fn is_unlocked(&self, tier: RarityTier, floor_reached: u32) -> bool {
        floor_reached >= self.unlock_floor(tier)
    }

    /// Tiers available to a player who has reached `floor_reached`.
    pub fn unlocked_tiers(&self, floor_reached: u32) -> Vec<RarityTier> {
        RarityTier::ALL
            .iter()
            .copied()
            .filter(|&t| self.is_unlocked(t, floor_reached))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for tier in RarityTier::ALL {
            let count = self.entries.iter().filter(|e| e.tier == tier).count();
            if count != 1 {
                return Err(ConfigError::Validation(format!(
                    "rarity tier {tier} must appear exactly once, found {count}"
                )));
            }
        }

        let mut standard_total = 0.0;
        for entry in &self.entries {
            if entry.unlock_floor == 0 {
                return Err(ConfigError::Validation(format!(
                    "{} unlock_floor must be at least 1",
                    entry.tier
                )));
            }
            if !entry.base_weight.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "{} base_weight must be a finite number",
                    entry.tier
                )));
            }
            if entry.tier.is_zone_exclusive() {
                if entry.base_weight != 0.0 {
                    return Err(ConfigError::Validation(format!(
                        "zone-exclusive tier {} must have base_weight 0",
                        entry.tier
                    )));
                }
            } else {
                if entry.base_weight < 0.0 {
                    return Err(ConfigError::Validation(format!(
                        "{} base_weight cannot be negative",
                        entry.tier
                    )));
                }
                standard_total += entry.base_weight;
            }
        }

        if (standard_total - RARITY_WEIGHT_TOTAL).abs() > 1e-6 {
            return Err(ConfigError::Validation(format!(
                "standard tier weights must sum to {RARITY_WEIGHT_TOTAL}, got {standard_total}"
            )));
        }
        Ok(())
    }

    pub fn base_weights(&self) -> TierWeights {
        let mut weights = [0.0; RarityTier::COUNT];
        for tier in RarityTier::ALL {
            weights[tier.index()] = self.base_weight(tier);
        }
        weights
    }

    /// Base weights adjusted for difficulty, normalized to sum to 100.
    ///
    /// From difficulty 3, `(difficulty - 1) * 5` points move out of Common and
    /// Uncommon (proportionally) into Rare and Epic (evenly). From difficulty
    /// 5, Legendary and Mythic get a further flat bonus.
    pub fn weights_for_difficulty(&self, difficulty: u32) -> TierWeights {
        let mut w = self.base_weights();
        let common = RarityTier::Common.index();
        let uncommon = RarityTier::Uncommon.index();

        if difficulty >= DIFFICULTY_SHIFT_THRESHOLD {
            let shift = (difficulty - 1) as f64 * DIFFICULTY_SHIFT_PER_STEP;
            let low_total = w[common] + w[uncommon];
            if low_total > 0.0 {
                let taken = shift.min(low_total);
                w[common] -= taken * w[common] / low_total;
                w[uncommon] -= taken * w[uncommon] / low_total;
                w[RarityTier::Rare.index()] += taken / 2.0;
                w[RarityTier::Epic.index()] += taken / 2.0;
            }
        }

        if difficulty >= DIFFICULTY_HIGH_TIER_THRESHOLD {
            w[RarityTier::Legendary.index()] += DIFFICULTY_LEGENDARY_BONUS;
            w[RarityTier::Mythic.index()] += DIFFICULTY_MYTHIC_BONUS;
        }

        normalize(&mut w, RARITY_WEIGHT_TOTAL);
        w
    }

    /// Roll a tier for the item generator at the given difficulty.
    pub fn roll_tier(&self, difficulty: u32, rng: &mut impl RandomSource) -> RarityTier {
        let weights = self.weights_for_difficulty(difficulty);
        select_tier(&weights, rng.next_f64())
    }

    /// Drop probabilities for a floor: standard tiers keep their base weight,
    /// unlocked zone-exclusive tiers contribute a small fixed weight, locked
    /// tiers are zero. Rates sum to 1.
    pub fn drop_rates_for_floor(&self, floor: u32) -> DropRateTable {
        let mut w = [0.0; RarityTier::COUNT];
        for tier in RarityTier::ALL {
            if !self.is_unlocked(tier, floor) {
                continue;
            }
            w[tier.index()] = if tier.is_zone_exclusive() {
                EXCLUSIVE_FLOOR_WEIGHT
            } else {
                self.base_weight(tier)
            };
        }
        normalize(&mut w, 1.0);
        DropRateTable {
            rates: RarityTier::ALL.iter().map(|&t| (t, w[t.index()])).collect(),
        }
    }
}

fn normalize(weights: &mut TierWeights, target: f64) {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return;
    }
    for w in weights.iter_mut() {
        *w = *w * target / total;
    }
}

/// Walk the cumulative weights and return the first tier whose running total
/// meets or exceeds `draw` scaled to the table's total. Tiers whose weight is
/// zero, negative or not finite are never selected.
pub fn select_tier(weights: &TierWeights, draw: f64) -> RarityTier {
    let total: f64 = weights
        .iter()
        .filter(|w| **w > 0.0 && w.is_finite())
        .sum();
    let target = draw * total;
    let mut cumulative = 0.0;
    let mut last_positive = RarityTier::Common;

    for tier in RarityTier::ALL {
        let w = weights[tier.index()];
        if !(w > 0.0 && w.is_finite()) {
            continue;
        }
        cumulative += w;
        last_positive = tier;
        if cumulative >= target {
            return tier;
        }
    }

    // Only reachable through float rounding at draw ~ 1.0
    last_positive
}

/// Per-floor probability of each rarity tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropRateTable {
    pub rates: BTreeMap<RarityTier, f64>,
}

impl DropRateTable {
    pub fn rate(&self, tier: RarityTier) -> f64 {
        self.rates.get(&tier).copied().unwrap_or(0.0)
    }

    /// Chance of a bonus rare drop on this floor.
    pub fn rare_drop_rate(&self) -> f64 {
        self.rate(RarityTier::Rare)
    }

    pub fn roll(&self, rng: &mut impl RandomSource) -> RarityTier {
        let mut weights = [0.0; RarityTier::COUNT];
        for (tier, rate) in &self.rates {
            weights[tier.index()] = *rate;
        }
        select_tier(&weights, rng.next_f64())
    }
}
