//! Loot tallies for one simulated run.

use crate::cosmetics::CosmeticCollection;
use crate::rarity::RarityTier;
use crate::rewards::RewardBundle;
use std::collections::BTreeMap;

/// Statistics about dungeon drops.
#[derive(Debug, Clone, Default)]
pub struct LootStats {
    pub total_items: u64,
    pub bonus_drops: u64,
    pub drops_by_rarity: BTreeMap<RarityTier, u64>,
    pub loose_rewards: u64,
    pub titles: u64,
    pub frames: u64,
    /// Cosmetics whose name the player did not already own.
    pub new_cosmetics: u64,
    pub shadows: u64,
}

impl LootStats {
    pub fn record_bundle(&mut self, bundle: &RewardBundle, collection: &mut CosmeticCollection) {
        self.total_items += bundle.equipment.len() as u64;
        if bundle.equipment.len() > 1 {
            self.bonus_drops += 1;
        }
        for item in &bundle.equipment {
            *self.drops_by_rarity.entry(item.rarity).or_insert(0) += 1;
        }
        self.loose_rewards += bundle.loose_rewards.len() as u64;

        if bundle.title.is_some() {
            self.titles += 1;
        }
        if bundle.frame.is_some() {
            self.frames += 1;
        }
        for drop in bundle.cosmetics() {
            if collection.acquire(drop.clone()) {
                self.new_cosmetics += 1;
            }
        }
        if bundle.shadow.is_some() {
            self.shadows += 1;
        }
    }

    pub fn zone_exclusive_drops(&self) -> u64 {
        self.drops_by_rarity
            .iter()
            .filter(|(tier, _)| tier.is_zone_exclusive())
            .map(|(_, n)| n)
            .sum()
    }
}
