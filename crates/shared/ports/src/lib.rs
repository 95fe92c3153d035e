//! GBCE Ports
//!
//! Port definitions (traits) for the GBCE metrics engine.
//! These define the boundaries between the calculation engine and the
//! collaborators wired into it (clocks, trade stores, estimators).

mod clock;
mod error;
mod market;

pub use clock::Clock;
pub use error::{MarketError, MarketResult, PriceError};
pub use market::{MeanEstimator, StockOperations, TradeStore};
