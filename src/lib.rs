//! Lootforge - procedural loot and progression engine.
//!
//! Rarity rolls, item generation, the dungeon floor ladder, run rewards,
//! cosmetic drops, enhancement with pity, and salvage. Every roll goes
//! through an injected [`RandomSource`], so seeded runs replay exactly.

pub mod build_info;
pub mod core;
pub mod cosmetics;
pub mod dungeon;
pub mod engine;
pub mod enhancement;
pub mod items;
pub mod rarity;
pub mod rewards;
pub mod salvage;
pub mod scaling;
pub mod simulator;

pub use crate::core::{ConfigError, EngineConfig, EngineError, RandomSource, Result};
pub use cosmetics::{CosmeticCollection, CosmeticDrop, CosmeticKind};
pub use dungeon::FloorDefinition;
pub use engine::{LootEngine, NoopHook, PersistenceHook, PlayerSnapshot, RunRecord};
pub use enhancement::{UpgradeOutcome, UpgradeQuote, UpgradeStep};
pub use items::{EquipmentSlot, Inventory, Item, ItemId};
pub use rarity::{RarityTable, RarityTier};
pub use rewards::RewardBundle;
pub use salvage::{BulkSalvage, SalvageReceipt};
