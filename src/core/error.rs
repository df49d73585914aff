//! Engine error taxonomy.
//!
//! Random outcomes (a failed upgrade, an empty drop) are never errors; they
//! come back as ordinary values.

use crate::items::ItemId;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    Validation(String),
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Item already at max level ({level}/{max_level})")]
    MaxLevelReached { level: u32, max_level: u32 },
    #[error("Item {0} not found in inventory")]
    ItemNotFound(ItemId),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }
}
