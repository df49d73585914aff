//! Floor scaling formulas: power, XP, gold and tier label by floor index.
//!
//! All functions expect `floor >= 1`; callers validate.

use crate::core::constants::{
    FLOORS_PER_TIER, FLOOR_GOLD_HUNDREDTHS_OF_POWER, FLOOR_POWER_BASE, FLOOR_POWER_LINEAR,
    FLOOR_POWER_QUADRATIC, FLOOR_XP_TENTHS_OF_POWER,
};
use serde::{Deserialize, Serialize};

/// Difficulty band of a floor, from E (entry) upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FloorTier {
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl FloorTier {
    pub const ALL: [FloorTier; 8] = [
        FloorTier::E,
        FloorTier::D,
        FloorTier::C,
        FloorTier::B,
        FloorTier::A,
        FloorTier::S,
        FloorTier::SS,
        FloorTier::SSS,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FloorTier::E => "E",
            FloorTier::D => "D",
            FloorTier::C => "C",
            FloorTier::B => "B",
            FloorTier::A => "A",
            FloorTier::S => "S",
            FloorTier::SS => "SS",
            FloorTier::SSS => "SSS",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// `base + linear*(i-1) + quadratic*(i-1)^2`. Strictly increasing until it
/// saturates at `u64::MAX`, far past any configurable ladder.
pub fn power_for_floor(floor: u32) -> u64 {
    let n = u64::from(floor.saturating_sub(1));
    FLOOR_POWER_BASE
        .saturating_add(FLOOR_POWER_LINEAR.saturating_mul(n))
        .saturating_add(FLOOR_POWER_QUADRATIC.saturating_mul(n).saturating_mul(n))
}

/// `floor(power * 0.3)`
pub fn xp_for_floor(floor: u32) -> u64 {
    scale_down(power_for_floor(floor), FLOOR_XP_TENTHS_OF_POWER, 10)
}

/// `floor(power * 0.05)`
pub fn gold_for_floor(floor: u32) -> u64 {
    scale_down(power_for_floor(floor), FLOOR_GOLD_HUNDREDTHS_OF_POWER, 100)
}

/// `floor(value * num / den)` for `num < den`, without overflowing.
fn scale_down(value: u64, num: u64, den: u64) -> u64 {
    value / den * num + value % den * num / den
}

/// Tier label by `(floor-1)/20`, clamped to the top tier.
pub fn tier_for_floor(floor: u32) -> FloorTier {
    let idx = (floor.saturating_sub(1) / FLOORS_PER_TIER) as usize;
    FloorTier::ALL[idx.min(FloorTier::ALL.len() - 1)]
}
