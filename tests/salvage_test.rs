//! Salvage flows through the engine: single, bulk, keep options, hooks.

use lootforge::items::{generate_item, ItemRequest};
use lootforge::salvage::tier_base_value;
use lootforge::{
    EngineConfig, EngineError, Inventory, Item, LootEngine, PersistenceHook, PlayerSnapshot,
    RarityTable, RarityTier, RunRecord, SalvageReceipt,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Default)]
struct Ledger {
    salvaged: Vec<u64>,
}

impl PersistenceHook for Ledger {
    fn on_item_salvaged(&mut self, receipt: &SalvageReceipt) {
        self.salvaged.push(receipt.value);
    }
}

fn engine() -> LootEngine<ChaCha8Rng, Ledger> {
    LootEngine::with_hook(
        EngineConfig::default(),
        ChaCha8Rng::seed_from_u64(7),
        Ledger::default(),
    )
    .unwrap()
}

fn item(rarity: RarityTier, level: u32) -> Item {
    let req = ItemRequest::new(1, 1).with_rarity(rarity);
    let mut rng = ChaCha8Rng::seed_from_u64(rarity.index() as u64 * 100 + u64::from(level));
    let mut item = generate_item(&RarityTable::default(), &req, 0, &mut rng);
    item.level = level;
    item
}

#[test]
fn test_salvage_pays_value_and_notifies_hook() {
    let mut engine = engine();
    let mut inventory = Inventory::new();
    let epic = item(RarityTier::Epic, 4);
    let id = epic.id;
    let expected = engine.salvage_value(&epic);
    inventory.add(epic);

    let receipt = engine.salvage(&mut inventory, id).unwrap();
    assert_eq!(receipt.value, expected);
    assert!(inventory.is_empty());
    assert_eq!(engine.hook().salvaged, vec![expected]);
}

#[test]
fn test_salvage_missing_item_leaves_hook_untouched() {
    let mut engine = engine();
    let mut inventory = Inventory::new();
    let stray = item(RarityTier::Rare, 0);

    let err = engine.salvage(&mut inventory, stray.id).unwrap_err();
    assert!(matches!(err, EngineError::ItemNotFound(id) if id == stray.id));
    assert!(engine.hook().salvaged.is_empty());
}

#[test]
fn test_bulk_salvage_below_threshold() {
    let mut engine = engine();
    let mut inventory = Inventory::new();
    for (rarity, level) in [
        (RarityTier::Common, 0),
        (RarityTier::Common, 5),
        (RarityTier::Uncommon, 1),
        (RarityTier::Rare, 0),
        (RarityTier::Mythic, 2),
    ] {
        inventory.add(item(rarity, level));
    }

    let bulk = engine.salvage_below(&mut inventory, RarityTier::Rare);
    assert_eq!(bulk.receipts.len(), 3);
    assert!(bulk.receipts.iter().all(|r| r.item.rarity < RarityTier::Rare));
    assert_eq!(bulk.total_value, 50 + 50 * 15 / 10 + 75 * 11 / 10);

    assert_eq!(inventory.len(), 2);
    assert!(inventory.iter().all(|i| i.rarity >= RarityTier::Rare));

    let hook = engine.into_hook();
    assert_eq!(hook.salvaged.len(), 3);
    assert_eq!(hook.salvaged.iter().sum::<u64>(), bulk.total_value);
}

#[test]
fn test_bulk_salvage_at_lowest_threshold_is_noop() {
    let mut engine = engine();
    let mut inventory = Inventory::new();
    inventory.add(item(RarityTier::Common, 0));

    let bulk = engine.salvage_below(&mut inventory, RarityTier::Common);
    assert!(bulk.receipts.is_empty());
    assert_eq!(bulk.total_value, 0);
    assert_eq!(inventory.len(), 1);
}

#[test]
fn test_value_strictly_increasing_in_rarity() {
    for pair in RarityTier::ALL.windows(2) {
        assert!(tier_base_value(pair[1]) > tier_base_value(pair[0]), "{}", pair[1]);
    }
    let engine = engine();
    let low = engine.salvage_value(&item(RarityTier::Legendary, 7));
    let high = engine.salvage_value(&item(RarityTier::Mythic, 7));
    assert!(high > low);
}

#[test]
fn test_keep_options_follow_deepest_floor() {
    let engine = engine();
    let mut player = PlayerSnapshot::new(30);

    let fresh = engine.keep_threshold_options(&player);
    assert_eq!(
        fresh,
        vec![
            RarityTier::Common,
            RarityTier::Uncommon,
            RarityTier::Rare,
            RarityTier::Epic,
            RarityTier::Legendary,
        ]
    );

    player.run_history.push(RunRecord {
        floor: 60,
        victory: false,
        finished_at: 0,
    });
    let deep = engine.keep_threshold_options(&player);
    assert_eq!(deep.len(), 9);
    assert_eq!(deep.last(), Some(&RarityTier::Celestial));
    assert!(!deep.contains(&RarityTier::Primordial));
    assert_eq!(engine.shop_catalog(&player), deep);
}
