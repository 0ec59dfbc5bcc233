use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the state snapshot lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot file path. Defaults to the platform data directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Optional HTTP feed used to seed or reload the item list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// URL returning a JSON array of items.
    #[serde(default)]
    pub url: Option<String>,
}

/// Event loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick cadence in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
