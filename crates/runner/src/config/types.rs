use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level market configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// How long a recorded trade counts towards prices, in seconds
    #[serde(default = "default_retention_secs")]
    pub retention_secs: u64,
    /// Writes allowed between two ledger pruning passes
    #[serde(default = "default_prune_threshold")]
    pub prune_threshold: usize,
    /// Instrument table; the embedded sample table when absent
    #[serde(default)]
    pub instruments_path: Option<PathBuf>,
}

fn default_retention_secs() -> u64 {
    300
}

fn default_prune_threshold() -> usize {
    gbce_market::DEFAULT_PRUNE_THRESHOLD
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            retention_secs: default_retention_secs(),
            prune_threshold: default_prune_threshold(),
            instruments_path: None,
        }
    }
}
