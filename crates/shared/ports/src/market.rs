use gbce_core::{TradeRecord, TradeReport};
use rust_decimal::Decimal;

use crate::error::MarketResult;

/// Port for a per-instrument trade store
///
/// Implementations own their mutable state behind interior locking so a
/// store can be shared by reference.
pub trait TradeStore: Send + Sync {
    /// Validate and append a trade
    fn record(&self, trade: TradeReport) -> MarketResult<()>;

    /// Trades still inside the retention window, in insertion order
    fn valid_trades(&self) -> Vec<TradeRecord>;
}

/// Port for the per-instrument calculation engine
pub trait StockOperations: Send + Sync {
    /// Dividend divided by price
    fn calculate_dividend_yield(&self, price: Decimal) -> MarketResult<Decimal>;

    /// Price divided by dividend yield (zero when the yield is zero)
    fn calculate_pe_ratio(&self, price: Decimal) -> MarketResult<Decimal>;

    /// Record a trade for this instrument
    fn record(&self, trade: TradeReport) -> MarketResult<()>;

    /// Quantity-weighted average price of the valid trades (zero when none)
    fn calculate_volume_weighted_stock_price(&self) -> MarketResult<Decimal>;
}

/// Port for reducing a set of positive values to a single mean
pub trait MeanEstimator: Send + Sync {
    fn estimate(&self, values: &[Decimal]) -> MarketResult<Decimal>;
}
