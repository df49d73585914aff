//! Main simulation runner driving the real engine facade.
//!
//! Each run climbs the ladder once, banks every reward, upgrades its best
//! item to the cap and salvages everything under the keep threshold.

use super::config::SimConfig;
use super::progression_sim::{upgrade_to_max, RunStats};
use super::report::SimReport;
use crate::core::error::{EngineError, Result};
use crate::core::rng::RandomSource;
use crate::cosmetics::CosmeticCollection;
use crate::engine::{LootEngine, PlayerSnapshot};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    if !(0.0..=1.0).contains(&config.win_chance) {
        return Err(EngineError::invalid("win_chance must be within 0..=1"));
    }
    if config.floors > config.engine.max_floors {
        return Err(EngineError::invalid(format!(
            "{} floors exceeds max_floors {}",
            config.floors, config.engine.max_floors
        )));
    }

    info!(
        runs = config.num_runs,
        floors = config.floors,
        seed = ?config.seed,
        "simulation started"
    );

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run = simulate_single_run(config, rng)?;
        if config.verbosity >= 2 {
            debug!(
                run = run_idx + 1,
                victories = run.victories,
                defeats = run.defeats,
                items = run.loot_stats.total_items,
                gold = run.total_gold,
                "run finished"
            );
        }
        all_runs.push(run);
    }

    let report = SimReport::from_runs(all_runs, config.floors);
    info!(
        runs = report.num_runs,
        avg_items = report.avg_items,
        "simulation finished"
    );
    Ok(report)
}

fn simulate_single_run(config: &SimConfig, rng: ChaCha8Rng) -> Result<RunStats> {
    let mut engine = LootEngine::new(config.engine.clone(), rng)?;
    let ladder = engine.build_dungeon_ladder(config.floors)?;
    let mut player = PlayerSnapshot::new(config.player_level);
    let mut collection = CosmeticCollection::new();
    let mut stats = RunStats::default();

    for floor in &ladder {
        let victory = engine.rng_mut().roll_chance(config.win_chance);
        let bundle = engine.resolve_dungeon_run(floor.index, victory, player.level)?;

        if victory {
            stats.victories += 1;
        } else {
            stats.defeats += 1;
        }
        stats.total_xp += bundle.xp;
        stats.total_gold += bundle.gold;
        stats.loot_stats.record_bundle(&bundle, &mut collection);
        player.apply_rewards(&bundle, 0);
    }
    stats.highest_floor = player.highest_floor_reached();

    let best = player
        .inventory
        .iter()
        .max_by_key(|item| (item.rarity, item.stat_total()))
        .cloned();
    if let Some(best) = best {
        let (maxed, upgrade) = upgrade_to_max(&mut engine, &best)?;
        stats.best_power = maxed.power_score();
        stats.upgrade = Some(upgrade);
        player.inventory.replace(maxed);
    }

    let bulk = engine.salvage_below(&mut player.inventory, config.keep_threshold);
    stats.salvaged_items = bulk.receipts.len() as u32;
    stats.salvage_gold = bulk.total_value;

    Ok(stats)
}
