//! Derives the floor ladder from the scaling formulas.
//!
//! Everything here is a pure function of the floor index and the rarity
//! table; no randomness is involved.

use super::bosses::{
    boss_entry, boss_incarnation, floor_material, floor_theme, BOSS_REWARD_ITEM,
    COMMON_REWARD_ITEMS,
};
use super::types::{BossProfile, FloorDefinition, ShadowProfile, ShadowRank};
use crate::core::constants::{BOSS_FLOOR_INTERVAL, FLOORS_PER_TIER};
use crate::core::error::{EngineError, Result};
use crate::items::StatKind;
use crate::rarity::RarityTable;
use crate::scaling::{gold_for_floor, power_for_floor, tier_for_floor, xp_for_floor};

/// Bosses per shadow rank step.
const BOSSES_PER_SHADOW_RANK: u32 = 5;

pub fn is_boss_floor(floor: u32) -> bool {
    floor > 0 && floor % BOSS_FLOOR_INTERVAL == 0
}

/// Build floors `1..=total_floors`.
pub fn build_ladder(table: &RarityTable, total_floors: u32) -> Vec<FloorDefinition> {
    (1..=total_floors).map(|i| define_floor(table, i)).collect()
}

/// A single floor. Floor 0 is invalid.
pub fn floor_definition(table: &RarityTable, floor: u32) -> Result<FloorDefinition> {
    if floor == 0 {
        return Err(EngineError::invalid("floor index must be at least 1"));
    }
    Ok(define_floor(table, floor))
}

fn define_floor(table: &RarityTable, floor: u32) -> FloorDefinition {
    let tier = tier_for_floor(floor);
    let is_boss = is_boss_floor(floor);
    let number_in_tier = floor - tier.index() as u32 * FLOORS_PER_TIER;

    let mut reward_items: Vec<String> = COMMON_REWARD_ITEMS.iter().map(|s| s.to_string()).collect();
    reward_items.push(floor_material(tier).to_string());
    if is_boss {
        reward_items.push(BOSS_REWARD_ITEM.to_string());
    }

    FloorDefinition {
        index: floor,
        name: format!("{} {}", floor_theme(tier), number_in_tier),
        tier,
        recommended_power: power_for_floor(floor),
        base_xp: xp_for_floor(floor),
        base_gold: gold_for_floor(floor),
        is_boss,
        boss: is_boss.then(|| boss_profile(floor / BOSS_FLOOR_INTERVAL)),
        reward_items,
        drop_rates: table.drop_rates_for_floor(floor),
    }
}

/// Boss identity and shadow payload, keyed only by boss index.
pub fn boss_profile(boss_index: u32) -> BossProfile {
    let entry = boss_entry(boss_index);
    let incarnation = boss_incarnation(boss_index);
    let name = if incarnation > 1 {
        format!("{} {}", entry.name, roman(incarnation))
    } else {
        entry.name.to_string()
    };

    BossProfile {
        boss_index,
        name,
        title: entry.title.to_string(),
        shadow: shadow_profile(boss_index, entry.shadow_name),
    }
}

fn shadow_profile(boss_index: u32, shadow_name: &str) -> ShadowProfile {
    let n = boss_index.max(1) - 1;
    let rank_idx = ((n / BOSSES_PER_SHADOW_RANK) as usize).min(ShadowRank::ALL.len() - 1);
    ShadowProfile {
        name: shadow_name.to_string(),
        rank: ShadowRank::ALL[rank_idx],
        bonus_stat: StatKind::ALL[n as usize % StatKind::ALL.len()],
        bonus_value: 5 + 2 * n,
    }
}

fn roman(mut n: u32) -> String {
    const NUMERALS: [(u32, &str); 9] = [
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}
