//! Shared balance constants used by the engine and the simulator.
//!
//! All core balance numbers should be defined here.
//! Change once, test everywhere.

// =============================================================================
// FLOOR SCALING - power = BASE + LINEAR*(i-1) + QUADRATIC*(i-1)^2
// =============================================================================

/// Recommended power on floor 1.
pub const FLOOR_POWER_BASE: u64 = 10_000;

/// Linear power growth per floor.
pub const FLOOR_POWER_LINEAR: u64 = 2_500;

/// Quadratic power growth per floor.
pub const FLOOR_POWER_QUADRATIC: u64 = 3;

/// Base XP for a floor, as tenths of the floor's power (3 = 30%).
pub const FLOOR_XP_TENTHS_OF_POWER: u64 = 3;

/// Base gold for a floor, as hundredths of the floor's power (5 = 5%).
pub const FLOOR_GOLD_HUNDREDTHS_OF_POWER: u64 = 5;

/// Floors per floor tier (E, D, C, ...).
pub const FLOORS_PER_TIER: u32 = 20;

/// Every Nth floor is a boss floor.
pub const BOSS_FLOOR_INTERVAL: u32 = 10;

/// Default upper bound on ladder length.
pub const DEFAULT_MAX_FLOORS: u32 = 1_000;

// =============================================================================
// RARITY ROLLS
// =============================================================================

/// Standard tier weights must sum to this.
pub const RARITY_WEIGHT_TOTAL: f64 = 100.0;

/// Difficulty at which weight starts shifting from the two lowest tiers.
pub const DIFFICULTY_SHIFT_THRESHOLD: u32 = 3;

/// Weight points shifted per difficulty step above 1.
pub const DIFFICULTY_SHIFT_PER_STEP: f64 = 5.0;

/// Difficulty at which the legendary/mythic bonus applies.
pub const DIFFICULTY_HIGH_TIER_THRESHOLD: u32 = 5;

/// Flat weight bonus added to Legendary at high difficulty.
pub const DIFFICULTY_LEGENDARY_BONUS: f64 = 2.0;

/// Flat weight bonus added to Mythic at high difficulty.
pub const DIFFICULTY_MYTHIC_BONUS: f64 = 1.0;

/// Weight a zone-exclusive tier contributes to a floor table once unlocked.
pub const EXCLUSIVE_FLOOR_WEIGHT: f64 = 0.5;

// =============================================================================
// REWARDS
// =============================================================================

/// Defeat pays this fraction of the floor's base XP (in tenths).
pub const DEFEAT_XP_TENTHS: u64 = 1;

/// Victory XP multiplier range.
pub const VICTORY_MULTIPLIER_MIN: f64 = 1.0;
pub const VICTORY_MULTIPLIER_MAX: f64 = 1.2;

/// Chance for each declared loose reward tag to be granted on victory.
pub const LOOSE_REWARD_CHANCE: f64 = 0.5;

/// Difficulty used for the guaranteed equipment drop.
pub const DEFAULT_REWARD_DIFFICULTY: u32 = 3;

pub const BOSS_TITLE_CHANCE: f64 = 0.10;
pub const BOSS_FRAME_CHANCE: f64 = 0.05;
pub const FLOOR_TITLE_CHANCE: f64 = 0.005;
pub const FLOOR_FRAME_CHANCE: f64 = 0.001;

/// Cosmetic bucket thresholds (floor strictly greater than).
pub const COSMETIC_TOP_BUCKET_FLOOR: u32 = 150;
pub const COSMETIC_UPPER_BUCKET_FLOOR: u32 = 100;

// =============================================================================
// ENHANCEMENT
// =============================================================================

/// Gold per level: cost of raising level L to L+1 is this * (L + 1).
pub const UPGRADE_COST_PER_LEVEL: u64 = 100;

/// Success chance added per consecutive failure.
pub const PITY_BONUS_PER_FAILURE: f64 = 0.15;

/// Pity never pushes a step above this.
pub const PITY_SUCCESS_CAP: f64 = 0.95;

/// Fractional power bonus per enhancement level, used for item scoring.
pub const ENHANCEMENT_POWER_PER_LEVEL: f64 = 0.1;

// =============================================================================
// SALVAGE - value = base(tier) * (10 + level) / 10
// =============================================================================

pub const SALVAGE_BASE_VALUE: f64 = 50.0;
pub const SALVAGE_TIER_GROWTH: f64 = 1.5;
