//! Salvage: destroy an item for gold.
//!
//! value = floor(50 * 1.5^tier_index) * (10 + level) / 10

use crate::core::constants::{SALVAGE_BASE_VALUE, SALVAGE_TIER_GROWTH};
use crate::core::error::{EngineError, Result};
use crate::items::{Inventory, Item, ItemId};
use crate::rarity::{RarityTable, RarityTier};
use serde::{Deserialize, Serialize};

/// Gold a level-0 item of this tier salvages for.
pub fn tier_base_value(tier: RarityTier) -> u64 {
    (SALVAGE_BASE_VALUE * SALVAGE_TIER_GROWTH.powi(tier.index() as i32)).floor() as u64
}

/// Strictly increasing in rarity at equal level, non-decreasing in level.
pub fn salvage_value(item: &Item) -> u64 {
    tier_base_value(item.rarity) * (10 + u64::from(item.level)) / 10
}

/// A salvaged item and what it paid out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalvageReceipt {
    pub item: Item,
    pub value: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkSalvage {
    pub receipts: Vec<SalvageReceipt>,
    pub total_value: u64,
}

/// Remove one item from the inventory. The item is gone afterwards.
pub fn salvage(inventory: &mut Inventory, id: ItemId) -> Result<SalvageReceipt> {
    let item = inventory.remove(id).ok_or(EngineError::ItemNotFound(id))?;
    let value = salvage_value(&item);
    Ok(SalvageReceipt { item, value })
}

/// Salvage every item whose rarity is strictly below `keep_threshold`.
pub fn salvage_below(inventory: &mut Inventory, keep_threshold: RarityTier) -> BulkSalvage {
    let receipts: Vec<SalvageReceipt> = inventory
        .drain_where(|item| item.rarity < keep_threshold)
        .into_iter()
        .map(|item| {
            let value = salvage_value(&item);
            SalvageReceipt { item, value }
        })
        .collect();
    let total_value = receipts.iter().map(|r| r.value).sum();
    BulkSalvage {
        receipts,
        total_value,
    }
}

/// Keep-threshold choices offered to a player who has reached `floor_reached`.
/// Tiers not yet unlocked are hidden.
pub fn keep_threshold_options(table: &RarityTable, floor_reached: u32) -> Vec<RarityTier> {
    table.unlocked_tiers(floor_reached)
}
