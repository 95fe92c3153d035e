//! Geometric mean with limited precision
//!
//! The product and the n-th root are computed in `f64`, not in decimal
//! arithmetic. Results are accurate to roughly 15 significant digits, which
//! is all the market index needs; callers comparing against exact values
//! should use a tolerance.

use gbce_ports::{MarketError, MarketResult, MeanEstimator};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// `(v1 * v2 * ... * vn)^(1/n)` over strictly positive values
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricMean;

impl MeanEstimator for GeometricMean {
    fn estimate(&self, values: &[Decimal]) -> MarketResult<Decimal> {
        if values.is_empty() {
            return Err(MarketError::Domain(
                "geometric mean of an empty set is undefined".to_string(),
            ));
        }

        let mut product = 1f64;
        for value in values {
            let value = value.to_f64().ok_or_else(|| {
                MarketError::Domain(format!("{} has no floating point representation", value))
            })?;
            product *= value;
        }

        let mean = product.powf(1f64 / values.len() as f64);
        if !mean.is_finite() {
            return Err(MarketError::Domain(format!(
                "geometric mean is not a number (product={})",
                product
            )));
        }

        Decimal::from_f64(mean).ok_or_else(|| {
            MarketError::Domain(format!("{} does not fit in a decimal", mean))
        })
    }
}
