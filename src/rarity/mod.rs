//! Rarity tiers and the weight/unlock table behind every rarity roll.

pub mod table;
pub mod types;

pub use table::{select_tier, DropRateTable, RarityEntry, RarityTable, TierWeights};
pub use types::RarityTier;
