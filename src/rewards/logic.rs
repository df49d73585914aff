//! Turns a cleared (or failed) floor into a reward bundle.

use super::types::RewardBundle;
use crate::core::config::EngineConfig;
use crate::core::constants::*;
use crate::core::rng::RandomSource;
use crate::cosmetics::{generate_frame, generate_title};
use crate::dungeon::FloorDefinition;
use crate::items::{generate_item, ItemRequest};

/// Defeat pays 10% of the floor's base XP and nothing else.
pub fn defeat_xp(floor: &FloorDefinition) -> u64 {
    floor.base_xp * DEFEAT_XP_TENTHS / 10
}

/// (title chance, frame chance) for a floor.
pub fn cosmetic_chances(floor: &FloorDefinition) -> (f64, f64) {
    if floor.is_boss {
        (BOSS_TITLE_CHANCE, BOSS_FRAME_CHANCE)
    } else {
        (FLOOR_TITLE_CHANCE, FLOOR_FRAME_CHANCE)
    }
}

/// Resolve one dungeon run.
///
/// Defeat consumes no draws. Victory draw order: multiplier, one per loose
/// reward tag, the guaranteed item, the bonus check (plus its rarity and
/// item when it hits), title check (plus title), frame check (plus frame).
pub fn resolve_dungeon_run(
    config: &EngineConfig,
    floor: &FloorDefinition,
    victory: bool,
    player_level: u32,
    created_at: i64,
    rng: &mut impl RandomSource,
) -> RewardBundle {
    if !victory {
        return RewardBundle::defeat(floor.index, defeat_xp(floor));
    }

    let multiplier = rng.roll_f64(VICTORY_MULTIPLIER_MIN, VICTORY_MULTIPLIER_MAX);
    let xp = (floor.base_xp as f64 * multiplier).floor() as u64;
    let gold = (floor.base_gold as f64 * multiplier).floor() as u64;

    let loose_rewards: Vec<String> = floor
        .reward_items
        .iter()
        .filter(|_| rng.roll_chance(LOOSE_REWARD_CHANCE))
        .cloned()
        .collect();

    let request = ItemRequest::new(player_level, config.reward_difficulty);
    let mut equipment = vec![generate_item(&config.rarity, &request, created_at, rng)];

    if rng.roll_chance(floor.drop_rates.rare_drop_rate()) {
        // Bonus rarity comes from the floor table, the only path to
        // zone-exclusive tiers.
        let rarity = floor.drop_rates.roll(rng);
        let bonus = request.with_rarity(rarity);
        equipment.push(generate_item(&config.rarity, &bonus, created_at, rng));
    }

    let (title_chance, frame_chance) = cosmetic_chances(floor);
    let title = rng
        .roll_chance(title_chance)
        .then(|| generate_title(floor.index, rng));
    let frame = rng
        .roll_chance(frame_chance)
        .then(|| generate_frame(floor.index, rng));

    RewardBundle {
        floor: floor.index,
        victory: true,
        xp,
        gold,
        loose_rewards,
        equipment,
        title,
        frame,
        shadow: floor.shadow().cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedSource;
    use crate::dungeon::floor_definition;
    use crate::rarity::RarityTier;

    fn floor(index: u32) -> FloorDefinition {
        floor_definition(&EngineConfig::default().rarity, index).unwrap()
    }

    #[test]
    fn test_defeat_on_boss_floor() {
        let config = EngineConfig::default();
        let boss = floor(10);
        let mut rng = ScriptedSource::constant(0.0);

        let bundle = resolve_dungeon_run(&config, &boss, false, 5, 0, &mut rng);
        assert_eq!(bundle.xp, boss.base_xp / 10);
        assert_eq!(bundle.xp, 982);
        assert_eq!(bundle.gold, 0);
        assert!(bundle.equipment.is_empty());
        assert!(!bundle.has_cosmetic());
        assert!(bundle.shadow.is_none());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_lowest_draws_grant_everything() {
        let config = EngineConfig::default();
        let boss = floor(10);
        let bundle = resolve_dungeon_run(
            &config,
            &boss,
            true,
            5,
            0,
            &mut ScriptedSource::constant(0.0),
        );
        assert_eq!(bundle.xp, boss.base_xp);
        assert_eq!(bundle.gold, boss.base_gold);
        assert_eq!(bundle.loose_rewards, boss.reward_items);
        assert_eq!(bundle.equipment.len(), 2);
        assert!(bundle.title.is_some());
        assert!(bundle.frame.is_some());
        assert_eq!(bundle.cosmetics().count(), 2);
        assert_eq!(bundle.shadow.as_ref(), boss.shadow());
    }

    #[test]
    fn test_highest_draws_grant_minimum() {
        let config = EngineConfig::default();
        let boss = floor(10);
        let bundle = resolve_dungeon_run(
            &config,
            &boss,
            true,
            5,
            0,
            &mut ScriptedSource::constant(0.99),
        );
        let expected_xp = (boss.base_xp as f64 * 1.198).floor() as u64;
        assert!(bundle.xp.abs_diff(expected_xp) <= 1);
        assert!(bundle.xp >= boss.base_xp);
        assert!(bundle.loose_rewards.is_empty());
        assert_eq!(bundle.equipment.len(), 1);
        assert!(!bundle.has_cosmetic());
        // The shadow is not a roll
        assert!(bundle.shadow.is_some());
    }

    #[test]
    fn test_non_boss_victory_has_no_shadow() {
        let config = EngineConfig::default();
        let bundle = resolve_dungeon_run(
            &config,
            &floor(7),
            true,
            5,
            0,
            &mut ScriptedSource::constant(0.0),
        );
        assert!(bundle.shadow.is_none());
    }

    #[test]
    fn test_guaranteed_item_uses_reward_difficulty() {
        let config = EngineConfig::default();
        let bundle = resolve_dungeon_run(
            &config,
            &floor(3),
            true,
            12,
            42,
            &mut ScriptedSource::constant(0.99),
        );
        let item = &bundle.equipment[0];
        assert_eq!(item.ilvl, 12);
        assert_eq!(item.level, 0);
        assert_eq!(item.created_at, 42);
        // 0.99 sits in the tail of the difficulty-shifted table
        assert!(item.rarity >= RarityTier::Epic);
    }

    #[test]
    fn test_cosmetic_chances() {
        assert_eq!(cosmetic_chances(&floor(20)), (0.10, 0.05));
        assert_eq!(cosmetic_chances(&floor(21)), (0.005, 0.001));
    }
}
