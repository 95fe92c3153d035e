//! GBCE Market
//!
//! The calculation engine behind the market facade:
//! - **Trade Ledger**: per-instrument, time-windowed trade store with amortized pruning
//! - **Stock Operations**: dividend yield, P/E ratio and volume weighted price
//! - **Market Index**: symbol dispatch, price validation and the GBCE aggregate
//!
//! ## Architecture
//!
//! ```text
//! Caller ──► MarketIndex ──► validate price / resolve symbol
//!                 │
//!                 ├──► BasicStockOperations (one per symbol)
//!                 │        ├── DividendPolicy + InstrumentData
//!                 │        └── TradeLedger ──► Clock
//!                 │
//!                 └──► calculate_gbce: VWSP per symbol ──► drop zeros ──► GeometricMean
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gbce_market::{BasicStockOperations, GeometricMean, MarketIndex, TradeLedgerFactory};
//!
//! let factory = TradeLedgerFactory::new(Duration::minutes(5), Arc::new(SystemClock::new()));
//! let pop = BasicStockOperations::new(
//!     DividendPolicy::Common,
//!     InstrumentData::common(dec!(8), dec!(100)),
//!     Box::new(factory.create()),
//! );
//!
//! let mut operations: HashMap<Symbol, Box<dyn StockOperations>> = HashMap::new();
//! operations.insert("POP".to_string(), Box::new(pop));
//! let market = MarketIndex::new(operations, Box::new(GeometricMean));
//!
//! let pe = market.calculate_pe_ratio("POP", dec!(10))?; // 12.5
//! ```

pub mod geometric_mean;
pub mod index;
pub mod ledger;
pub mod operations;
pub mod precision;

// Re-export main types
pub use geometric_mean::GeometricMean;
pub use index::MarketIndex;
pub use ledger::{DEFAULT_PRUNE_THRESHOLD, TradeLedger, TradeLedgerFactory};
pub use operations::{BasicStockOperations, StockOperationsBuilder};
pub use precision::{SCALE, div_half_up};

pub use gbce_ports::{
    Clock, MarketError, MarketResult, MeanEstimator, PriceError, StockOperations, TradeStore,
};
