//! Loot balance simulator CLI.
//!
//! Run Monte Carlo climbs over the dungeon ladder to analyze drop rates,
//! upgrade costs and salvage income.
//!
//! Examples:
//!   cargo run --bin simulate                        # Default: 1000 runs, 100 floors
//!   cargo run --bin simulate -- -n 100 -f 40        # 100 runs of 40 floors
//!   cargo run --bin simulate -- --seed 42 --json    # Reproducible, with JSON output
//!   cargo run --bin simulate -- --config balance.toml

use clap::Parser;
use lootforge::build_info::{BUILD_COMMIT, BUILD_DATE};
use lootforge::core::EngineConfig;
use lootforge::rarity::RarityTier;
use lootforge::simulator::{run_simulation, SimConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Lootforge balance simulator")]
struct Args {
    /// Number of simulation runs
    #[arg(short = 'n', long = "runs", default_value_t = 1000)]
    runs: u32,

    /// Floors climbed per run
    #[arg(short, long, default_value_t = 100)]
    floors: u32,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Player level used for reward resolution
    #[arg(short = 'l', long = "level", default_value_t = 10)]
    player_level: u32,

    /// Chance to clear each floor (0..=1)
    #[arg(short, long, default_value_t = 0.85)]
    win_chance: f64,

    /// Salvage items below this rarity at the end of each run
    #[arg(short, long, default_value = "Rare")]
    keep: RarityTier,

    /// Engine balance TOML (rarity table, max floors, reward difficulty)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quick check: 100 runs over 30 floors
    #[arg(long, conflicts_with = "deep")]
    quick: bool,

    /// Deep dive: 200 runs over the given number of floors
    #[arg(long, value_name = "FLOORS")]
    deep: Option<u32>,

    /// Write the report as JSON to this file
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "")]
    json: Option<PathBuf>,

    /// Per-run debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let engine = match &args.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let mut config = if args.quick {
        SimConfig::quick()
    } else if let Some(floors) = args.deep {
        SimConfig::deep_dive(floors)
    } else {
        SimConfig {
            num_runs: args.runs,
            floors: args.floors,
            win_chance: args.win_chance,
            ..SimConfig::default()
        }
    };
    config.seed = args.seed;
    config.player_level = args.player_level;
    config.keep_threshold = args.keep;
    config.engine = engine;
    config.verbosity = if args.verbose { 2 } else { 1 };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              LOOTFORGE BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!("  Build:          {} ({})", BUILD_COMMIT, BUILD_DATE);
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Floors:         {}", config.floors);
    println!("  Win Chance:     {:.0}%", config.win_chance * 100.0);
    println!("  Keep Threshold: {}", config.keep_threshold);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", report.to_text());

    if let Some(path) = args.json {
        let path = if path.as_os_str().is_empty() {
            PathBuf::from(format!(
                "sim_report_{}.json",
                chrono::Utc::now().format("%Y%m%d_%H%M%S")
            ))
        } else {
            path
        };
        if let Err(e) = std::fs::write(&path, report.to_json()) {
            error!("failed to write {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        println!("JSON report saved to: {}", path.display());
    }

    ExitCode::SUCCESS
}
