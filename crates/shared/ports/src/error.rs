use gbce_core::{DividendError, Symbol, TradeError};
use thiserror::Error;

/// Rejection reasons for a caller-supplied price
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    #[error("price cannot be empty")]
    Missing,

    #[error("price have to be > 0")]
    NotPositive,
}

/// Errors raised by the metrics engine
///
/// Every variant is raised synchronously at the point of detection and
/// nothing is mutated before it is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("Unrecognized instrument: {0}")]
    UnrecognizedInstrument(Symbol),

    #[error(transparent)]
    InvalidPrice(#[from] PriceError),

    #[error(transparent)]
    InvalidTrade(#[from] TradeError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Dividend unavailable: {0}")]
    Dividend(#[from] DividendError),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    #[error("Domain error: {0}")]
    Domain(String),
}

pub type MarketResult<T> = std::result::Result<T, MarketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        assert_eq!(
            MarketError::from(PriceError::Missing).to_string(),
            "price cannot be empty"
        );
        assert_eq!(
            MarketError::from(PriceError::NotPositive).to_string(),
            "price have to be > 0"
        );
        assert_eq!(
            MarketError::from(TradeError::MissingTimestamp).to_string(),
            "Trade timestamp is not set"
        );
    }

    #[test]
    fn test_unrecognized_instrument_carries_symbol() {
        let err = MarketError::UnrecognizedInstrument("EEE".to_string());
        assert!(err.to_string().contains("EEE"));
    }
}
