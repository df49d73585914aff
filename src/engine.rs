//! The public facade: one engine value owning config, randomness and the
//! persistence callback.
//!
//! Every operation completes synchronously. The engine keeps no state between
//! calls other than its random source; callers persist returned items (pity
//! included) before the next upgrade.

use crate::core::config::EngineConfig;
use crate::core::error::{EngineError, Result};
use crate::core::rng::RandomSource;
use crate::cosmetics::{generate_cosmetic, CosmeticDrop, CosmeticKind};
use crate::dungeon::{build_ladder, floor_definition, FloorDefinition};
use crate::enhancement::{self, UpgradeOutcome, UpgradeQuote};
use crate::items::{generate_item, EquipmentSlot, Inventory, Item, ItemId, ItemRequest};
use crate::rarity::RarityTier;
use crate::rewards::{self, RewardBundle};
use crate::salvage::{self, BulkSalvage, SalvageReceipt};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Commit point for mutating operations. All methods default to no-ops.
pub trait PersistenceHook {
    fn on_item_upgraded(&mut self, _outcome: &UpgradeOutcome) {}
    fn on_item_salvaged(&mut self, _receipt: &SalvageReceipt) {}
    fn on_rewards_granted(&mut self, _bundle: &RewardBundle) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl PersistenceHook for NoopHook {}

/// One finished dungeon run in the player's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub floor: u32,
    pub victory: bool,
    /// Unix seconds
    pub finished_at: i64,
}

/// The slice of player state the engine reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub level: u32,
    pub inventory: Inventory,
    pub gold: u64,
    pub run_history: Vec<RunRecord>,
}

impl PlayerSnapshot {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Deepest floor in the run history. Every player stands on floor 1.
    pub fn highest_floor_reached(&self) -> u32 {
        self.run_history
            .iter()
            .map(|r| r.floor)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    /// Bank a reward bundle: gold, equipment and the run record.
    pub fn apply_rewards(&mut self, bundle: &RewardBundle, finished_at: i64) {
        self.gold += bundle.gold;
        self.inventory.extend(bundle.equipment.iter().cloned());
        self.run_history.push(RunRecord {
            floor: bundle.floor,
            victory: bundle.victory,
            finished_at,
        });
    }
}

pub struct LootEngine<S: RandomSource, H: PersistenceHook = NoopHook> {
    config: EngineConfig,
    rng: S,
    hook: H,
}

impl<S: RandomSource> LootEngine<S, NoopHook> {
    pub fn new(config: EngineConfig, rng: S) -> Result<Self> {
        Self::with_hook(config, rng, NoopHook)
    }
}

impl<S: RandomSource, H: PersistenceHook> LootEngine<S, H> {
    pub fn with_hook(config: EngineConfig, rng: S, hook: H) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng, hook })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The engine's random source, for callers that roll their own outcomes
    /// (the simulator decides victories with it).
    pub fn rng_mut(&mut self) -> &mut S {
        &mut self.rng
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn into_hook(self) -> H {
        self.hook
    }

    pub fn generate_item(
        &mut self,
        type_hint: Option<EquipmentSlot>,
        rarity_override: Option<RarityTier>,
        player_level: u32,
        difficulty: u32,
    ) -> Item {
        let request = ItemRequest {
            slot: type_hint,
            rarity: rarity_override,
            player_level,
            difficulty,
        };
        let item = generate_item(&self.config.rarity, &request, now(), &mut self.rng);
        debug!(id = %item.id, rarity = %item.rarity, slot = item.slot.name(), "item generated");
        item
    }

    /// Like [`generate_item`](Self::generate_item) with the type hint given by
    /// name. Unknown names are rejected.
    pub fn generate_item_by_name(
        &mut self,
        type_hint: Option<&str>,
        rarity_override: Option<RarityTier>,
        player_level: u32,
        difficulty: u32,
    ) -> Result<Item> {
        let slot = type_hint
            .map(|name| name.parse::<EquipmentSlot>().map_err(EngineError::InvalidInput))
            .transpose()?;
        Ok(self.generate_item(slot, rarity_override, player_level, difficulty))
    }

    pub fn build_dungeon_ladder(&self, total_floors: u32) -> Result<Vec<FloorDefinition>> {
        if total_floors > self.config.max_floors {
            return Err(EngineError::invalid(format!(
                "ladder of {} floors exceeds max_floors {}",
                total_floors, self.config.max_floors
            )));
        }
        let ladder = build_ladder(&self.config.rarity, total_floors);
        debug!(floors = ladder.len(), "ladder built");
        Ok(ladder)
    }

    /// A single floor. Floors past `max_floors` are rejected like floor 0.
    pub fn floor_definition(&self, floor: u32) -> Result<FloorDefinition> {
        self.check_floor(floor)?;
        floor_definition(&self.config.rarity, floor)
    }

    pub fn resolve_dungeon_run(
        &mut self,
        floor: u32,
        victory: bool,
        player_level: u32,
    ) -> Result<RewardBundle> {
        let definition = self.floor_definition(floor)?;
        let bundle = rewards::resolve_dungeon_run(
            &self.config,
            &definition,
            victory,
            player_level,
            now(),
            &mut self.rng,
        );
        debug!(
            floor,
            victory,
            xp = bundle.xp,
            gold = bundle.gold,
            items = bundle.equipment.len(),
            "run resolved"
        );
        self.hook.on_rewards_granted(&bundle);
        Ok(bundle)
    }

    pub fn quote_upgrade(&self, item: &Item, levels: u32) -> Result<UpgradeQuote> {
        enhancement::quote_upgrade(item, levels)
    }

    pub fn attempt_upgrade(&mut self, item: &Item, levels: u32) -> Result<UpgradeOutcome> {
        let outcome = match enhancement::attempt_upgrade(item, levels, &mut self.rng) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(
                    id = %item.id,
                    level = item.level,
                    requested = levels,
                    "upgrade rejected: {}",
                    e
                );
                return Err(e);
            }
        };
        debug!(
            id = %item.id,
            from = item.level,
            to = outcome.item.level,
            cost = outcome.total_cost,
            "upgrade resolved"
        );
        self.hook.on_item_upgraded(&outcome);
        Ok(outcome)
    }

    pub fn salvage_value(&self, item: &Item) -> u64 {
        salvage::salvage_value(item)
    }

    pub fn salvage(&mut self, inventory: &mut Inventory, id: ItemId) -> Result<SalvageReceipt> {
        let receipt = salvage::salvage(inventory, id)?;
        debug!(id = %id, value = receipt.value, "item salvaged");
        self.hook.on_item_salvaged(&receipt);
        Ok(receipt)
    }

    pub fn salvage_below(
        &mut self,
        inventory: &mut Inventory,
        keep_threshold: RarityTier,
    ) -> BulkSalvage {
        let bulk = salvage::salvage_below(inventory, keep_threshold);
        debug!(
            count = bulk.receipts.len(),
            total = bulk.total_value,
            threshold = %keep_threshold,
            "bulk salvage"
        );
        for receipt in &bulk.receipts {
            self.hook.on_item_salvaged(receipt);
        }
        bulk
    }

    /// Keep-threshold choices for the salvage screen.
    pub fn keep_threshold_options(&self, player: &PlayerSnapshot) -> Vec<RarityTier> {
        salvage::keep_threshold_options(&self.config.rarity, player.highest_floor_reached())
    }

    /// Rarity tiers the shop may list for this player.
    pub fn shop_catalog(&self, player: &PlayerSnapshot) -> Vec<RarityTier> {
        self.config.rarity.unlocked_tiers(player.highest_floor_reached())
    }

    pub fn generate_cosmetic_drop(
        &mut self,
        floor: u32,
        kind: CosmeticKind,
    ) -> Result<CosmeticDrop> {
        self.check_floor(floor)?;
        let drop = generate_cosmetic(kind, floor, &mut self.rng);
        debug!(floor, kind = ?kind, name = %drop.name, "cosmetic generated");
        Ok(drop)
    }

    fn check_floor(&self, floor: u32) -> Result<()> {
        if floor == 0 {
            return Err(EngineError::invalid("floor index must be at least 1"));
        }
        if floor > self.config.max_floors {
            return Err(EngineError::invalid(format!(
                "floor {} exceeds max_floors {}",
                floor, self.config.max_floors
            )));
        }
        Ok(())
    }
}

fn now() -> i64 {
    Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[derive(Default)]
    struct Recorder {
        upgrades: usize,
        salvages: usize,
        rewards: usize,
    }

    impl PersistenceHook for Recorder {
        fn on_item_upgraded(&mut self, _outcome: &UpgradeOutcome) {
            self.upgrades += 1;
        }
        fn on_item_salvaged(&mut self, _receipt: &SalvageReceipt) {
            self.salvages += 1;
        }
        fn on_rewards_granted(&mut self, _bundle: &RewardBundle) {
            self.rewards += 1;
        }
    }

    fn engine(seed: u64) -> LootEngine<ChaCha8Rng, Recorder> {
        LootEngine::with_hook(
            EngineConfig::default(),
            ChaCha8Rng::seed_from_u64(seed),
            Recorder::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = EngineConfig {
            max_floors: 0,
            ..EngineConfig::default()
        };
        let result = LootEngine::new(config, ChaCha8Rng::seed_from_u64(1));
        assert!(matches!(result, Err(EngineError::Config(_))));
    }

    #[test]
    fn test_ladder_capped_by_max_floors() {
        let e = engine(1);
        assert_eq!(e.build_dungeon_ladder(50).unwrap().len(), 50);
        let err = e.build_dungeon_ladder(1_001).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }

    #[test]
    fn test_floor_zero_rejected() {
        let mut e = engine(1);
        assert!(matches!(
            e.resolve_dungeon_run(0, true, 1),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            e.generate_cosmetic_drop(0, CosmeticKind::Title),
            Err(EngineError::InvalidInput(_))
        ));
        assert_eq!(e.hook().rewards, 0);
    }

    #[test]
    fn test_floor_past_max_floors_rejected() {
        let mut e = engine(1);
        assert!(e.floor_definition(1_000).is_ok());
        for floor in [1_001, 3_000_000_000, u32::MAX] {
            assert!(matches!(
                e.floor_definition(floor),
                Err(EngineError::InvalidInput(_))
            ));
            assert!(matches!(
                e.resolve_dungeon_run(floor, false, 1),
                Err(EngineError::InvalidInput(_))
            ));
            assert!(matches!(
                e.generate_cosmetic_drop(floor, CosmeticKind::Frame),
                Err(EngineError::InvalidInput(_))
            ));
        }
        assert_eq!(e.hook().rewards, 0);
    }

    #[test]
    fn test_unknown_type_hint_rejected() {
        let mut e = engine(1);
        let err = e.generate_item_by_name(Some("Cape"), None, 1, 1).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));

        let item = e
            .generate_item_by_name(Some("ring"), Some(RarityTier::Epic), 1, 1)
            .unwrap();
        assert_eq!(item.slot, EquipmentSlot::Ring);
        assert_eq!(item.rarity, RarityTier::Epic);
    }

    #[test]
    fn test_same_seed_same_items() {
        let mut a = engine(77);
        let mut b = engine(77);
        for _ in 0..20 {
            let x = a.generate_item(None, None, 10, 3);
            let y = b.generate_item(None, None, 10, 3);
            assert_eq!(x.id, y.id);
            assert_eq!(x.name, y.name);
            assert_eq!(x.stats, y.stats);
        }
    }

    #[test]
    fn test_hook_sees_every_mutation() {
        let mut e = engine(5);
        let mut player = PlayerSnapshot::new(5);

        let bundle = e.resolve_dungeon_run(10, true, 5).unwrap();
        player.apply_rewards(&bundle, 0);

        let item = e.generate_item(None, Some(RarityTier::Rare), 5, 1);
        let outcome = e.attempt_upgrade(&item, 3).unwrap();
        player.inventory.add(outcome.item);

        let id = player.inventory.iter().next().map(|i| i.id).unwrap();
        e.salvage(&mut player.inventory, id).unwrap();

        let hook = e.into_hook();
        assert_eq!(hook.rewards, 1);
        assert_eq!(hook.upgrades, 1);
        assert_eq!(hook.salvages, 1);
    }

    #[test]
    fn test_rejected_upgrade_not_persisted() {
        let mut e = engine(9);
        let mut item = e.generate_item(None, Some(RarityTier::Common), 1, 1);
        item.level = item.max_level();

        for _ in 0..3 {
            let err = e.attempt_upgrade(&item, 1).unwrap_err();
            assert!(matches!(err, EngineError::MaxLevelReached { level: 10, max_level: 10 }));
        }
        assert_eq!(e.hook().upgrades, 0);
    }

    #[test]
    fn test_highest_floor_reached() {
        let mut player = PlayerSnapshot::new(1);
        assert_eq!(player.highest_floor_reached(), 1);
        for (floor, victory) in [(3, true), (12, false), (8, true)] {
            player.run_history.push(RunRecord {
                floor,
                victory,
                finished_at: 0,
            });
        }
        assert_eq!(player.highest_floor_reached(), 12);
    }

    #[test]
    fn test_shop_catalog_grows_with_depth() {
        let e = engine(1);
        let mut player = PlayerSnapshot::new(1);
        let shallow = e.shop_catalog(&player);
        player.run_history.push(RunRecord {
            floor: 60,
            victory: true,
            finished_at: 0,
        });
        let deep = e.shop_catalog(&player);
        assert!(deep.len() > shallow.len());
        assert!(deep.contains(&RarityTier::ALL[RarityTier::STANDARD_COUNT]));
        assert_eq!(e.keep_threshold_options(&player), deep);
    }
}
