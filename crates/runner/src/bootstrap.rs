//! Bootstrap - market setup
//!
//! Turns a configuration into a ready [`MarketIndex`]:
//! - Loading the instrument table (configured file or the embedded sample)
//! - Creating one trade ledger per instrument from a shared factory
//! - Binding each instrument's dividend policy and data to its ledger

use gbce_clock::SystemClock;
use gbce_core::{InstrumentDefinition, Symbol};
use gbce_market::{
    BasicStockOperations, Clock, GeometricMean, MarketError, MarketIndex, StockOperations,
    TradeLedgerFactory,
};
use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{ConfigError, MarketConfig};
use crate::loader::{LoadError, load_default_instruments, load_instruments};

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Market wiring failed: {0}")]
    Market(#[from] MarketError),
}

/// A wired market plus the table it was built from
pub struct MarketBootstrap {
    pub market: MarketIndex,
    pub instruments: Vec<InstrumentDefinition>,
}

impl MarketBootstrap {
    /// Bootstrap with the default configuration and the embedded table
    pub fn new() -> Result<Self, BootstrapError> {
        Self::with_config(MarketConfig::default())
    }

    /// Bootstrap against the wall clock
    pub fn with_config(config: MarketConfig) -> Result<Self, BootstrapError> {
        Self::with_clock(config, Arc::new(SystemClock::new()))
    }

    /// Bootstrap with an explicit time source for every ledger
    pub fn with_clock(config: MarketConfig, clock: Arc<dyn Clock>) -> Result<Self, BootstrapError> {
        config.validate()?;
        let retention = config.retention()?;

        let instruments = match &config.instruments_path {
            Some(path) => load_instruments(path)?,
            None => load_default_instruments()?,
        };

        let clock_name = clock.name().to_string();
        let factory =
            TradeLedgerFactory::new(retention, clock).with_prune_threshold(config.prune_threshold);

        let mut operations: HashMap<Symbol, Box<dyn StockOperations>> = HashMap::new();
        for instrument in &instruments {
            let ops = BasicStockOperations::builder()
                .dividend_policy(instrument.policy)
                .instrument_data(instrument.data.clone())
                .trade_store(Box::new(factory.create()))
                .build()?;
            operations.insert(instrument.symbol.clone(), Box::new(ops));

            info!(
                "Registered {} ({}) with par value {}",
                instrument.symbol, instrument.policy, instrument.data.par_value
            );
        }

        info!(
            "Market ready: instruments={}, retention={}s, prune_threshold={}, clock={}",
            operations.len(),
            retention.num_seconds(),
            config.prune_threshold,
            clock_name
        );

        Ok(Self {
            market: MarketIndex::new(operations, Box::new(GeometricMean)),
            instruments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_registers_default_table() {
        let bootstrap = MarketBootstrap::new().unwrap();

        assert_eq!(bootstrap.instruments.len(), 5);
        assert_eq!(
            bootstrap.market.symbols(),
            vec!["ALE", "GIN", "JOE", "POP", "TEA"]
        );
    }

    #[test]
    fn test_bootstrap_rejects_invalid_config() {
        let config = MarketConfig {
            prune_threshold: 0,
            ..Default::default()
        };
        assert!(matches!(
            MarketBootstrap::with_config(config),
            Err(BootstrapError::Config(ConfigError::InvalidPruneThreshold))
        ));
    }

    #[test]
    fn test_bootstrap_reports_missing_table() {
        let config = MarketConfig {
            instruments_path: Some("/nonexistent/instruments.csv".into()),
            ..Default::default()
        };
        let err = MarketBootstrap::with_config(config).err().unwrap();
        assert!(err.to_string().starts_with("cannot load data from source"));
    }
}
