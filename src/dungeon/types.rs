//! Dungeon ladder data structures.

use crate::items::StatKind;
use crate::rarity::DropRateTable;
use crate::scaling::FloorTier;
use serde::{Deserialize, Serialize};

/// Rank a captured shadow enters service at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShadowRank {
    Soldier,
    Elite,
    Knight,
    EliteKnight,
    Commander,
    Marshal,
    GrandMarshal,
}

impl ShadowRank {
    pub const ALL: [ShadowRank; 7] = [
        ShadowRank::Soldier,
        ShadowRank::Elite,
        ShadowRank::Knight,
        ShadowRank::EliteKnight,
        ShadowRank::Commander,
        ShadowRank::Marshal,
        ShadowRank::GrandMarshal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShadowRank::Soldier => "Soldier",
            ShadowRank::Elite => "Elite",
            ShadowRank::Knight => "Knight",
            ShadowRank::EliteKnight => "Elite Knight",
            ShadowRank::Commander => "Commander",
            ShadowRank::Marshal => "Marshal",
            ShadowRank::GrandMarshal => "Grand Marshal",
        }
    }
}

/// What a defeated boss leaves behind for the shadow reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowProfile {
    pub name: String,
    pub rank: ShadowRank,
    pub bonus_stat: StatKind,
    pub bonus_value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BossProfile {
    /// 1 for floor 10, 2 for floor 20, ...
    pub boss_index: u32,
    pub name: String,
    pub title: String,
    pub shadow: ShadowProfile,
}

/// One rung of the dungeon ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorDefinition {
    pub index: u32,
    pub name: String,
    pub tier: FloorTier,
    pub recommended_power: u64,
    pub base_xp: u64,
    pub base_gold: u64,
    pub is_boss: bool,
    /// Present exactly when `is_boss`.
    pub boss: Option<BossProfile>,
    /// Loose rewards that may be granted on victory.
    pub reward_items: Vec<String>,
    pub drop_rates: DropRateTable,
}

impl FloorDefinition {
    pub fn shadow(&self) -> Option<&ShadowProfile> {
        self.boss.as_ref().map(|b| &b.shadow)
    }
}
