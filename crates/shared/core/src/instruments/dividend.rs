use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::InstrumentData;
use crate::error::{DividendError, PolicyParseError};

/// Per-period dividend formula, selected by instrument type
///
/// The set is closed: the instrument table only knows common and
/// preferred stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DividendPolicy {
    /// Dividend = last dividend
    Common,
    /// Dividend = fixed dividend * par value
    Preferred,
}

impl DividendPolicy {
    /// Dividend amount for one period
    pub fn dividend(&self, data: &InstrumentData) -> Result<Decimal, DividendError> {
        match self {
            DividendPolicy::Common => data.last_dividend.ok_or(DividendError::MissingLastDividend),
            DividendPolicy::Preferred => {
                let fixed = data
                    .fixed_dividend
                    .ok_or(DividendError::MissingFixedDividend)?;
                fixed
                    .checked_mul(data.par_value)
                    .ok_or(DividendError::Overflow)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DividendPolicy::Common => "Common",
            DividendPolicy::Preferred => "Preferred",
        }
    }
}

impl FromStr for DividendPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Common" => Ok(DividendPolicy::Common),
            "Preferred" => Ok(DividendPolicy::Preferred),
            other => Err(PolicyParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for DividendPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
