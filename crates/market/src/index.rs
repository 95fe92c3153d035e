//! Market Index
//!
//! Facade over the per-instrument engines. Resolves symbols against a
//! fixed mapping built once at startup, validates caller-supplied prices
//! and composes the market-wide GBCE aggregate.

use gbce_core::{Price, Symbol, TradeReport};
use gbce_ports::{MarketError, MarketResult, MeanEstimator, PriceError, StockOperations};
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

pub struct MarketIndex {
    /// Read-only after construction
    operations: HashMap<Symbol, Box<dyn StockOperations>>,
    estimator: Box<dyn MeanEstimator>,
}

impl MarketIndex {
    pub fn new(
        operations: HashMap<Symbol, Box<dyn StockOperations>>,
        estimator: Box<dyn MeanEstimator>,
    ) -> Self {
        Self {
            operations,
            estimator,
        }
    }

    /// Tracked symbols, sorted
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Resolve a symbol to its engine
    pub fn operations(&self, symbol: &str) -> MarketResult<&dyn StockOperations> {
        self.operations
            .get(symbol)
            .map(|ops| ops.as_ref())
            .ok_or_else(|| MarketError::UnrecognizedInstrument(symbol.to_string()))
    }

    /// The single validation gate for every price-taking operation
    pub fn require_valid_price(price: Option<Price>) -> MarketResult<Price> {
        let price = price.ok_or(PriceError::Missing)?;
        if price <= Decimal::ZERO {
            return Err(PriceError::NotPositive.into());
        }
        Ok(price)
    }

    pub fn calculate_dividend_yield(
        &self,
        symbol: &str,
        price: impl Into<Option<Price>>,
    ) -> MarketResult<Decimal> {
        let ops = self.operations(symbol)?;
        ops.calculate_dividend_yield(Self::require_valid_price(price.into())?)
    }

    pub fn calculate_pe_ratio(
        &self,
        symbol: &str,
        price: impl Into<Option<Price>>,
    ) -> MarketResult<Decimal> {
        let ops = self.operations(symbol)?;
        ops.calculate_pe_ratio(Self::require_valid_price(price.into())?)
    }

    /// Record a trade against the instrument named in the trade itself
    pub fn record(&self, trade: TradeReport) -> MarketResult<()> {
        self.operations(&trade.symbol)?.record(trade)
    }

    pub fn calculate_volume_weighted_stock_price(&self, symbol: &str) -> MarketResult<Decimal> {
        self.operations(symbol)?
            .calculate_volume_weighted_stock_price()
    }

    /// Geometric mean of the volume weighted prices of all instruments.
    ///
    /// Instruments without valid trades (zero price) are left out.
    pub fn calculate_gbce(&self) -> MarketResult<Decimal> {
        let mut prices = Vec::with_capacity(self.operations.len());
        for (symbol, ops) in &self.operations {
            let price = ops.calculate_volume_weighted_stock_price()?;
            if price.is_zero() {
                debug!("GBCE: {} has no valid trades, excluded", symbol);
                continue;
            }
            prices.push(price);
        }

        debug!(
            "GBCE: {} of {} instruments priced",
            prices.len(),
            self.operations.len()
        );
        self.estimator.estimate(&prices)
    }
}
