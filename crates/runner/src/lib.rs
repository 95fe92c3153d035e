//! GBCE Runner - wiring around the metrics engine
//!
//! Everything the engine needs handed to it, already constructed:
//!
//! - **Config**: retention window, prune threshold, instrument table location
//! - **Loader**: the delimited instrument table, validated at load time
//! - **Bootstrap**: one ledger and one engine per instrument, keyed by symbol
//!
//! ## Architecture
//!
//! ```text
//! market_config.json ──► MarketConfig ──┐
//!                                       ├──► MarketBootstrap ──► MarketIndex
//! instruments.csv ──► InstrumentLoader ─┘          │
//!                                                  └── TradeLedgerFactory ──► Clock
//! ```

pub mod bootstrap;
pub mod config;
pub mod loader;

// Re-export main types
pub use bootstrap::{BootstrapError, MarketBootstrap};
pub use config::{ConfigError, MarketConfig, load_config, load_config_from_str, load_default_config};
pub use loader::{
    LoadCause, LoadError, load_default_instruments, load_instruments, load_instruments_from_str,
};
