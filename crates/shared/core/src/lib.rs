//! GBCE Core Domain
//!
//! Pure domain types for the GBCE trade ledger and metrics engine.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod instruments;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Side, TradeId, TradeRecord, TradeReport};
pub use error::{DividendError, PolicyParseError, TradeError};
pub use instruments::{DividendPolicy, InstrumentData, InstrumentDefinition};
pub use values::{Price, Quantity, Symbol, Timestamp};
