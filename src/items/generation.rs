use super::names::generate_item_name;
use super::types::{EquipmentSlot, Item, ItemId, StatKind, StatRoll};
use crate::core::rng::RandomSource;
use crate::rarity::{RarityTable, RarityTier};

/// What the caller asks the generator for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRequest {
    /// Use this slot instead of rolling one.
    pub slot: Option<EquipmentSlot>,
    /// Use this rarity instead of a weighted roll.
    pub rarity: Option<RarityTier>,
    pub player_level: u32,
    /// 1 = base odds; from 3 upward the roll favours higher tiers.
    pub difficulty: u32,
}

impl ItemRequest {
    pub fn new(player_level: u32, difficulty: u32) -> Self {
        Self {
            slot: None,
            rarity: None,
            player_level,
            difficulty,
        }
    }

    pub fn with_slot(mut self, slot: EquipmentSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn with_rarity(mut self, rarity: RarityTier) -> Self {
        self.rarity = Some(rarity);
        self
    }
}

/// Roll a fresh item at level 0 with pity 0. Never fails.
///
/// Draw order: rarity (unless overridden), slot (unless hinted), two draws
/// per stat, adjective, noun, then two for the id.
pub fn generate_item(
    table: &RarityTable,
    request: &ItemRequest,
    created_at: i64,
    rng: &mut impl RandomSource,
) -> Item {
    let rarity = match request.rarity {
        Some(r) => r,
        None => table.roll_tier(request.difficulty, rng),
    };
    let slot = match request.slot {
        Some(s) => s,
        None => roll_random_slot(rng),
    };
    let stats = roll_stats(rarity, rng);
    let name = generate_item_name(rarity, slot, rng);
    let id = ItemId::from_source(rng);

    Item {
        id,
        slot,
        rarity,
        name,
        ilvl: request.player_level,
        level: 0,
        stats,
        pity: 0,
        created_at,
    }
}

pub fn roll_random_slot(rng: &mut impl RandomSource) -> EquipmentSlot {
    *rng.pick(&EquipmentSlot::ALL)
}

/// `rarity.stat_count()` distinct stats, each with a value in the rarity's range.
fn roll_stats(rarity: RarityTier, rng: &mut impl RandomSource) -> Vec<StatRoll> {
    let count = rarity.stat_count().min(StatKind::ALL.len());
    let (min, max) = rarity.stat_range();
    let mut pool: Vec<StatKind> = StatKind::ALL.to_vec();
    let mut stats = Vec::with_capacity(count);

    for _ in 0..count {
        let stat = pool.remove(rng.roll_index(pool.len()));
        let value = rng.roll_u32(min, max);
        stats.push(StatRoll { stat, value });
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedSource;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn table() -> RarityTable {
        RarityTable::default()
    }

    #[test]
    fn test_rarity_override_is_respected() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for tier in RarityTier::ALL {
            let req = ItemRequest::new(10, 1).with_rarity(tier);
            let item = generate_item(&table(), &req, 0, &mut rng);
            assert_eq!(item.rarity, tier);
        }
    }

    #[test]
    fn test_slot_hint_is_respected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for slot in EquipmentSlot::ALL {
            let req = ItemRequest::new(1, 1).with_slot(slot);
            assert_eq!(generate_item(&table(), &req, 0, &mut rng).slot, slot);
        }
    }

    #[test]
    fn test_new_item_starts_fresh() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let item = generate_item(&table(), &ItemRequest::new(42, 5), 1_700_000_000, &mut rng);
        assert_eq!(item.level, 0);
        assert_eq!(item.pity, 0);
        assert_eq!(item.ilvl, 42);
        assert_eq!(item.created_at, 1_700_000_000);
        assert!(!item.name.is_empty());
    }

    #[test]
    fn test_stat_count_and_range_match_rarity() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..500 {
            let item = generate_item(&table(), &ItemRequest::new(1, 5), 0, &mut rng);
            assert_eq!(item.stats.len(), item.rarity.stat_count());
            let (min, max) = item.rarity.stat_range();
            for roll in &item.stats {
                assert!(roll.value >= min && roll.value <= max);
            }
        }
    }

    #[test]
    fn test_stats_never_repeat_within_item() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let req = ItemRequest::new(1, 1).with_rarity(RarityTier::Omega);
            let item = generate_item(&table(), &req, 0, &mut rng);
            let unique: HashSet<_> = item.stats.iter().map(|s| s.stat).collect();
            assert_eq!(unique.len(), item.stats.len());
        }
    }

    #[test]
    fn test_scripted_draws_are_reproducible() {
        let draws = vec![0.5, 0.1, 0.3, 0.7, 0.9, 0.2, 0.4, 0.6];
        let req = ItemRequest::new(1, 1);
        let a = generate_item(&table(), &req, 0, &mut ScriptedSource::new(draws.clone()));
        let b = generate_item(&table(), &req, 0, &mut ScriptedSource::new(draws));
        assert_eq!(a, b);
    }

    #[test]
    fn test_low_draw_at_base_difficulty_is_common() {
        let mut rng = ScriptedSource::constant(0.0);
        let item = generate_item(&table(), &ItemRequest::new(1, 1), 0, &mut rng);
        assert_eq!(item.rarity, RarityTier::Common);
        assert_eq!(item.slot, EquipmentSlot::Weapon);
        assert_eq!(item.stats.len(), 1);
        assert_eq!(item.stats[0].stat, StatKind::Strength);
        assert_eq!(item.name, "Worn Sword");
    }

    #[test]
    fn test_weighted_roll_never_yields_zone_exclusive() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..5_000 {
            let item = generate_item(&table(), &ItemRequest::new(1, 10), 0, &mut rng);
            assert!(!item.rarity.is_zone_exclusive());
        }
    }

    #[test]
    fn test_all_slots_reachable() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(roll_random_slot(&mut rng));
        }
        assert_eq!(seen.len(), EquipmentSlot::ALL.len());
    }
}
