//! Shared engine plumbing: balance constants, randomness, errors, config.

pub mod config;
pub mod constants;
pub mod error;
pub mod rng;

pub use config::EngineConfig;
pub use error::{ConfigError, EngineError, Result};
pub use rng::{uuid_from_source, EvenSweep, RandomSource, ScriptedSource};
