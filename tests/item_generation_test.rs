//! Integration test: rarity table -> weighted roll -> generated item.

use lootforge::core::{EvenSweep, ScriptedSource};
use lootforge::items::names::base_nouns;
use lootforge::items::{generate_item, EquipmentSlot, ItemRequest, StatKind};
use lootforge::rarity::{select_tier, RarityTable, RarityTier};
use lootforge::{EngineConfig, EngineError, LootEngine};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

// =========================================================================
// Weighted selection
// =========================================================================

#[test]
fn test_even_sweep_matches_base_weights_at_difficulty_one() {
    let table = RarityTable::default();
    let draws = 100_000;
    let mut sweep = EvenSweep::new(draws);
    let mut counts = [0u64; RarityTier::COUNT];
    for _ in 0..draws {
        counts[table.roll_tier(1, &mut sweep).index()] += 1;
    }

    for tier in RarityTier::ALL {
        let observed = counts[tier.index()] as f64 / draws as f64 * 100.0;
        let declared = table.base_weight(tier);
        assert!(
            (observed - declared).abs() <= 1.0,
            "{tier}: observed {observed:.2}% declared {declared}%"
        );
    }
}

#[test]
fn test_selection_is_stable_for_fixed_draw() {
    let weights = RarityTable::default().weights_for_difficulty(1);
    assert_eq!(select_tier(&weights, 0.0), RarityTier::Common);
    assert_eq!(select_tier(&weights, 0.39), RarityTier::Common);
    assert_eq!(select_tier(&weights, 0.41), RarityTier::Uncommon);
    assert_eq!(select_tier(&weights, 0.999), RarityTier::Divine);
    for _ in 0..3 {
        assert_eq!(select_tier(&weights, 0.77), select_tier(&weights, 0.77));
    }
}

#[test]
fn test_higher_difficulty_shifts_mass_upward() {
    let table = RarityTable::default();
    let base = table.weights_for_difficulty(1);
    let hard = table.weights_for_difficulty(5);

    let total: f64 = hard.iter().sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!(hard[RarityTier::Common.index()] < base[RarityTier::Common.index()]);
    assert!(hard[RarityTier::Epic.index()] > base[RarityTier::Epic.index()]);
    assert!(hard[RarityTier::Legendary.index()] > base[RarityTier::Legendary.index()]);
    assert_eq!(hard[RarityTier::Celestial.index()], 0.0);
}

#[test]
fn test_difficulty_two_matches_base_table() {
    let table = RarityTable::default();
    assert_eq!(table.weights_for_difficulty(2), table.weights_for_difficulty(1));
}

// =========================================================================
// Generated items
// =========================================================================

#[test]
fn test_rarity_override_is_exact_for_every_tier() {
    let table = RarityTable::default();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for tier in RarityTier::ALL {
        let req = ItemRequest::new(30, 5).with_rarity(tier);
        let item = generate_item(&table, &req, 0, &mut rng);
        assert_eq!(item.rarity, tier);
        assert_eq!(item.stats.len(), tier.stat_count());
    }
}

#[test]
fn test_stats_unique_and_in_range() {
    let table = RarityTable::default();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..2_000 {
        let item = generate_item(&table, &ItemRequest::new(1, 3), 0, &mut rng);
        let kinds: HashSet<StatKind> = item.stats.iter().map(|s| s.stat).collect();
        assert_eq!(kinds.len(), item.stats.len(), "duplicate stat on {}", item.name);

        let (min, max) = item.rarity.stat_range();
        for roll in &item.stats {
            assert!((min..=max).contains(&roll.value));
            assert!((1..=5).contains(&roll.value));
        }
        assert_eq!(item.level, 0);
        assert_eq!(item.pity, 0);
    }
}

#[test]
fn test_name_uses_rarity_adjective_and_slot_noun() {
    let table = RarityTable::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..500 {
        let item = generate_item(&table, &ItemRequest::new(1, 1), 0, &mut rng);
        let (adjective, noun) = item.name.split_once(' ').unwrap();
        assert!(item.rarity.adjectives().contains(&adjective), "{}", item.name);
        assert!(base_nouns(item.slot).contains(&noun), "{}", item.name);
    }
}

#[test]
fn test_slot_hint_respected() {
    let req = ItemRequest::new(1, 1).with_slot(EquipmentSlot::Boots);
    let item = generate_item(
        &RarityTable::default(),
        &req,
        0,
        &mut ScriptedSource::constant(0.6),
    );
    assert_eq!(item.slot, EquipmentSlot::Boots);
}

#[test]
fn test_every_slot_reachable() {
    let table = RarityTable::default();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let slots: HashSet<EquipmentSlot> = (0..500)
        .map(|_| generate_item(&table, &ItemRequest::new(1, 1), 0, &mut rng).slot)
        .collect();
    assert_eq!(slots.len(), EquipmentSlot::ALL.len());
}

#[test]
fn test_same_seed_replays_identical_items() {
    let table = RarityTable::default();
    let mut a = ChaCha8Rng::seed_from_u64(42);
    let mut b = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..100 {
        let x = generate_item(&table, &ItemRequest::new(5, 4), 7, &mut a);
        let y = generate_item(&table, &ItemRequest::new(5, 4), 7, &mut b);
        assert_eq!(x, y);
    }
}

#[test]
fn test_ids_unique_across_many_items() {
    let table = RarityTable::default();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let ids: HashSet<_> = (0..5_000)
        .map(|_| generate_item(&table, &ItemRequest::new(1, 1), 0, &mut rng).id)
        .collect();
    assert_eq!(ids.len(), 5_000);
}

// =========================================================================
// Facade
// =========================================================================

#[test]
fn test_type_hint_by_name() {
    let mut engine =
        LootEngine::new(EngineConfig::default(), ChaCha8Rng::seed_from_u64(6)).unwrap();

    let amulet = engine.generate_item_by_name(Some("AMULET"), None, 3, 1).unwrap();
    assert_eq!(amulet.slot, EquipmentSlot::Amulet);

    let err = engine.generate_item_by_name(Some("shield"), None, 3, 1).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(msg) if msg.contains("shield")));
}
