//! Simulation report generation.

use super::progression_sim::{RunStats, UpgradeRun};
use crate::rarity::RarityTier;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub floors: u32,

    // Progression
    pub avg_victories: f64,
    pub avg_defeats: f64,
    pub avg_xp: f64,
    pub avg_gold: f64,

    // Loot analysis
    pub avg_items: f64,
    pub avg_bonus_drops: f64,
    /// Share of all dropped items per rarity name.
    pub rarity_distribution: BTreeMap<String, f64>,
    pub zone_exclusive_drops: u64,
    pub avg_titles: f64,
    pub avg_frames: f64,
    pub avg_new_cosmetics: f64,
    pub avg_shadows: f64,

    // Upgrades and salvage
    pub avg_upgrade_attempts_to_max: f64,
    pub avg_upgrade_failures: f64,
    pub avg_upgrade_gold: f64,
    pub avg_best_power: f64,
    pub avg_salvaged_items: f64,
    pub avg_salvage_gold: f64,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    runs.iter().map(f).sum::<f64>() / runs.len().max(1) as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, floors: u32) -> Self {
        let num_runs = runs.len() as u32;

        // Rarity distribution across every run
        let mut counts: BTreeMap<RarityTier, u64> = BTreeMap::new();
        for run in &runs {
            for (tier, n) in &run.loot_stats.drops_by_rarity {
                *counts.entry(*tier).or_insert(0) += n;
            }
        }
        let total_items: u64 = counts.values().sum();
        let rarity_distribution: BTreeMap<String, f64> = counts
            .iter()
            .map(|(tier, n)| {
                (
                    tier.name().to_string(),
                    *n as f64 / total_items.max(1) as f64,
                )
            })
            .collect();
        let zone_exclusive_drops: u64 = runs
            .iter()
            .map(|r| r.loot_stats.zone_exclusive_drops())
            .sum();

        let upgraded: Vec<RunStats> = runs
            .iter()
            .filter(|r| r.upgrade.is_some())
            .cloned()
            .collect();
        let upgrade_mean = |f: fn(&UpgradeRun) -> f64| {
            mean(&upgraded, |r| r.upgrade.as_ref().map(f).unwrap_or(0.0))
        };

        Self {
            num_runs,
            floors,
            avg_victories: mean(&runs, |r| r.victories as f64),
            avg_defeats: mean(&runs, |r| r.defeats as f64),
            avg_xp: mean(&runs, |r| r.total_xp as f64),
            avg_gold: mean(&runs, |r| r.total_gold as f64),
            avg_items: mean(&runs, |r| r.loot_stats.total_items as f64),
            avg_bonus_drops: mean(&runs, |r| r.loot_stats.bonus_drops as f64),
            rarity_distribution,
            zone_exclusive_drops,
            avg_titles: mean(&runs, |r| r.loot_stats.titles as f64),
            avg_frames: mean(&runs, |r| r.loot_stats.frames as f64),
            avg_new_cosmetics: mean(&runs, |r| r.loot_stats.new_cosmetics as f64),
            avg_shadows: mean(&runs, |r| r.loot_stats.shadows as f64),
            avg_upgrade_attempts_to_max: upgrade_mean(|u| u.attempts as f64),
            avg_upgrade_failures: upgrade_mean(|u| u.failures as f64),
            avg_upgrade_gold: upgrade_mean(|u| u.gold_spent as f64),
            avg_best_power: mean(&upgraded, |r| r.best_power),
            avg_salvaged_items: mean(&runs, |r| r.salvaged_items as f64),
            avg_salvage_gold: mean(&runs, |r| r.salvage_gold as f64),
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} floors each\n\n",
            self.num_runs, self.floors
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Victories:       {:.1}\n", self.avg_victories));
        report.push_str(&format!("  Avg Defeats:         {:.1}\n", self.avg_defeats));
        report.push_str(&format!("  Avg XP:              {:.0}\n", self.avg_xp));
        report.push_str(&format!("  Avg Gold:            {:.0}\n\n", self.avg_gold));

        report.push_str("── LOOT ─────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Items:           {:.1}\n", self.avg_items));
        report.push_str(&format!("  Avg Bonus Drops:     {:.1}\n", self.avg_bonus_drops));
        report.push_str(&format!(
            "  Zone-Exclusive:      {}\n",
            self.zone_exclusive_drops
        ));
        report.push_str(&format!("  Avg Titles:          {:.2}\n", self.avg_titles));
        report.push_str(&format!("  Avg Frames:          {:.2}\n", self.avg_frames));
        report.push_str(&format!(
            "  Avg New Cosmetics:   {:.2}\n",
            self.avg_new_cosmetics
        ));
        report.push_str(&format!("  Avg Shadows:         {:.1}\n\n", self.avg_shadows));

        report.push_str("── RARITY DISTRIBUTION ──────────────────────────────────────────\n");
        for tier in RarityTier::ALL {
            let Some(share) = self.rarity_distribution.get(tier.name()) else {
                continue;
            };
            let pct = share * 100.0;
            let bar: String = "█".repeat((pct / 2.0) as usize);
            report.push_str(&format!("  {:<12} {:>6.2}% {}\n", tier.name(), pct, bar));
        }
        report.push('\n');

        report.push_str("── UPGRADES & SALVAGE ───────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Attempts to Max:     {:.1} ({:.1} failed)\n",
            self.avg_upgrade_attempts_to_max, self.avg_upgrade_failures
        ));
        report.push_str(&format!(
            "  Upgrade Gold:        {:.0}\n",
            self.avg_upgrade_gold
        ));
        report.push_str(&format!("  Best Item Power:     {:.1}\n", self.avg_best_power));
        report.push_str(&format!(
            "  Salvaged Items:      {:.1} for {:.0} gold\n",
            self.avg_salvaged_items, self.avg_salvage_gold
        ));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
