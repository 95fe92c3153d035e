//! Domain validation errors

use thiserror::Error;

/// Rejection reasons for a trade report, one per violated field
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeError {
    #[error("Trade price is not set")]
    MissingPrice,

    #[error("Trade price have to be > 0")]
    NonPositivePrice,

    #[error("Trade quantity is not set")]
    MissingQuantity,

    #[error("Trade quantity have to be > 0")]
    NonPositiveQuantity,

    #[error("Trade timestamp is not set")]
    MissingTimestamp,
}

/// A dividend formula consumed a field the instrument does not carry
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividendError {
    #[error("last dividend is not set")]
    MissingLastDividend,

    #[error("fixed dividend is not set")]
    MissingFixedDividend,

    #[error("dividend calculation overflowed")]
    Overflow,
}

/// Unknown instrument type name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown dividend policy type: {0}")]
pub struct PolicyParseError(pub String);
