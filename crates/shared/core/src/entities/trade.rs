use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Side;
use crate::error::TradeError;
use crate::values::{Price, Quantity, Symbol, Timestamp};

/// Unique identifier for a recorded trade
pub type TradeId = Uuid;

/// A trade as reported by an upstream feed, before validation
///
/// Fields that a feed may omit are optional here; `validate` is the only
/// way to turn a report into a [`TradeRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeReport {
    pub symbol: Symbol,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
    #[serde(default)]
    pub quantity: Option<Quantity>,
    pub side: Side,
    #[serde(default)]
    pub price: Option<Price>,
}

impl TradeReport {
    /// Create a fully populated report
    pub fn new(
        symbol: impl Into<Symbol>,
        timestamp: Timestamp,
        quantity: Quantity,
        side: Side,
        price: Price,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            timestamp: Some(timestamp),
            quantity: Some(quantity),
            side,
            price: Some(price),
        }
    }

    /// Create a report stamped with the current system time
    pub fn now(symbol: impl Into<Symbol>, quantity: Quantity, side: Side, price: Price) -> Self {
        Self::new(symbol, Utc::now(), quantity, side, price)
    }

    /// Check every field and produce an immutable record.
    ///
    /// Checks run in a fixed order (price, quantity, timestamp) and the
    /// first violation wins.
    pub fn validate(&self) -> Result<TradeRecord, TradeError> {
        let price = self.price.ok_or(TradeError::MissingPrice)?;
        if price <= Decimal::ZERO {
            return Err(TradeError::NonPositivePrice);
        }
        let quantity = self.quantity.ok_or(TradeError::MissingQuantity)?;
        if quantity <= 0 {
            return Err(TradeError::NonPositiveQuantity);
        }
        let timestamp = self.timestamp.ok_or(TradeError::MissingTimestamp)?;

        Ok(TradeRecord {
            id: Uuid::new_v4(),
            symbol: self.symbol.clone(),
            timestamp,
            quantity,
            side: self.side,
            price,
        })
    }
}

/// One observed trade, immutable once recorded
///
/// Invariants: `price > 0`, `quantity > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    id: TradeId,
    symbol: Symbol,
    timestamp: Timestamp,
    quantity: Quantity,
    side: Side,
    price: Price,
}

impl TradeRecord {
    pub fn id(&self) -> TradeId {
        self.id
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Returns the notional value of the trade (price * quantity),
    /// or `None` if it does not fit in a Decimal
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}
