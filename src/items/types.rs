use crate::core::constants::ENHANCEMENT_POWER_PER_LEVEL;
use crate::core::rng::{uuid_from_source, RandomSource};
use crate::rarity::RarityTier;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Gloves,
    Boots,
    Amulet,
    Ring,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 7] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Armor,
        EquipmentSlot::Helmet,
        EquipmentSlot::Gloves,
        EquipmentSlot::Boots,
        EquipmentSlot::Amulet,
        EquipmentSlot::Ring,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Helmet => "Helmet",
            EquipmentSlot::Gloves => "Gloves",
            EquipmentSlot::Boots => "Boots",
            EquipmentSlot::Amulet => "Amulet",
            EquipmentSlot::Ring => "Ring",
        }
    }
}

impl FromStr for EquipmentSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentSlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown equipment type '{s}'"))
    }
}

/// The stat vocabulary items roll from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Strength,
    Agility,
    Vitality,
    Intelligence,
    Perception,
    Sense,
    Defense,
    Luck,
}

impl StatKind {
    pub const ALL: [StatKind; 8] = [
        StatKind::Strength,
        StatKind::Agility,
        StatKind::Vitality,
        StatKind::Intelligence,
        StatKind::Perception,
        StatKind::Sense,
        StatKind::Defense,
        StatKind::Luck,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StatKind::Strength => "Strength",
            StatKind::Agility => "Agility",
            StatKind::Vitality => "Vitality",
            StatKind::Intelligence => "Intelligence",
            StatKind::Perception => "Perception",
            StatKind::Sense => "Sense",
            StatKind::Defense => "Defense",
            StatKind::Luck => "Luck",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRoll {
    pub stat: StatKind,
    pub value: u32,
}

/// Opaque item identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn from_source(rng: &mut impl RandomSource) -> Self {
        ItemId(uuid_from_source(rng))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub slot: EquipmentSlot,
    pub rarity: RarityTier,
    pub name: String,
    /// Player level the item was generated for.
    pub ilvl: u32,
    /// Enhancement level, 0..=rarity.max_level()
    pub level: u32,
    /// Ordered, no duplicate stat kinds.
    pub stats: Vec<StatRoll>,
    /// Consecutive failed upgrade attempts.
    pub pity: u32,
    /// Unix seconds
    pub created_at: i64,
}

impl Item {
    pub fn max_level(&self) -> u32 {
        self.rarity.max_level()
    }

    pub fn is_max_level(&self) -> bool {
        self.level >= self.max_level()
    }

    pub fn stat(&self, kind: StatKind) -> Option<u32> {
        self.stats.iter().find(|s| s.stat == kind).map(|s| s.value)
    }

    pub fn stat_total(&self) -> u32 {
        self.stats.iter().map(|s| s.value).sum()
    }

    /// Stat total scaled by enhancement: +10% per level.
    pub fn power_score(&self) -> f64 {
        self.stat_total() as f64 * (1.0 + self.level as f64 * ENHANCEMENT_POWER_PER_LEVEL)
    }

    /// Display name with enhancement prefix, e.g. "+5 Gleaming Sword".
    pub fn display_name(&self) -> String {
        if self.level == 0 {
            self.name.clone()
        } else {
            format!("+{} {}", self.level, self.name)
        }
    }
}
