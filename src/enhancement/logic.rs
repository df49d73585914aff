use super::types::*;
use crate::core::error::{EngineError, Result};
use crate::core::rng::RandomSource;
use crate::items::Item;
use tracing::debug;

/// Steps an upgrade request will actually attempt.
/// Rejects zero-level requests and items already at their cap.
pub fn effective_levels(item: &Item, requested_levels: u32) -> Result<u32> {
    if requested_levels == 0 {
        return Err(EngineError::invalid("requested levels must be at least 1"));
    }
    let max_level = item.max_level();
    if item.level >= max_level {
        return Err(EngineError::MaxLevelReached {
            level: item.level,
            max_level,
        });
    }
    Ok(requested_levels.min(max_level - item.level))
}

pub fn quote_upgrade(item: &Item, requested_levels: u32) -> Result<UpgradeQuote> {
    let effective = effective_levels(item, requested_levels)?;
    let projected_cost = (item.level..item.level + effective).map(upgrade_cost).sum();
    Ok(UpgradeQuote {
        effective_levels: effective,
        projected_cost,
        first_step_probability: success_probability(item.level, item.pity),
    })
}

/// Resolve an upgrade as independent single-level steps sharing one pity
/// trajectory. Success raises the level and clears pity; failure keeps the
/// level, bumps pity, and still costs gold.
///
/// The input item is left untouched; the outcome carries the updated copy.
pub fn attempt_upgrade(
    item: &Item,
    requested_levels: u32,
    rng: &mut impl RandomSource,
) -> Result<UpgradeOutcome> {
    let effective = effective_levels(item, requested_levels)?;

    let mut upgraded = item.clone();
    let mut steps = Vec::with_capacity(effective as usize);
    let mut total_cost = 0;

    for _ in 0..effective {
        let from_level = upgraded.level;
        let probability = success_probability(from_level, upgraded.pity);
        let cost = upgrade_cost(from_level);
        let success = rng.next_f64() < probability;

        if success {
            upgraded.level += 1;
            upgraded.pity = 0;
        } else {
            upgraded.pity += 1;
        }
        total_cost += cost;

        debug!(
            item = %upgraded.id,
            from_level,
            probability,
            success,
            pity = upgraded.pity,
            "upgrade step"
        );

        steps.push(UpgradeStep {
            from_level,
            probability,
            cost,
            success,
            pity_after: upgraded.pity,
        });
    }

    let levels_gained = upgraded.level - item.level;
    let pity_delta = i64::from(upgraded.pity) - i64::from(item.pity);

    Ok(UpgradeOutcome {
        item: upgraded,
        steps,
        total_cost,
        levels_gained,
        pity_delta,
    })
}
