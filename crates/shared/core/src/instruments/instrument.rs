use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DividendPolicy;
use crate::values::Symbol;

/// Static per-instrument data, loaded once and never mutated
///
/// Absent dividends stay absent: a formula that needs one fails instead of
/// treating it as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentData {
    pub last_dividend: Option<Decimal>,
    pub fixed_dividend: Option<Decimal>,
    pub par_value: Decimal,
}

impl InstrumentData {
    pub fn new(
        last_dividend: Option<Decimal>,
        fixed_dividend: Option<Decimal>,
        par_value: Decimal,
    ) -> Self {
        Self {
            last_dividend,
            fixed_dividend,
            par_value,
        }
    }

    /// Common stock data (no fixed dividend)
    pub fn common(last_dividend: Decimal, par_value: Decimal) -> Self {
        Self::new(Some(last_dividend), None, par_value)
    }

    /// Preferred stock data
    pub fn preferred(last_dividend: Decimal, fixed_dividend: Decimal, par_value: Decimal) -> Self {
        Self::new(Some(last_dividend), Some(fixed_dividend), par_value)
    }
}

/// One row of the instrument table: symbol, formula and static data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentDefinition {
    pub symbol: Symbol,
    pub policy: DividendPolicy,
    pub data: InstrumentData,
}

impl InstrumentDefinition {
    pub fn new(symbol: impl Into<Symbol>, policy: DividendPolicy, data: InstrumentData) -> Self {
        Self {
            symbol: symbol.into(),
            policy,
            data,
        }
    }
}
