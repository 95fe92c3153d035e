//! Stock Operations
//!
//! Per-instrument calculations with a fixed precision and rounding policy
//! (see [`crate::precision`]).
//!
//! ## Formulas
//!
//! ```text
//! dividend yield = dividend(policy, data) / price
//! P/E ratio      = price / dividend yield        (0 when the yield is 0)
//! VWSP           = Σ(price_i * qty_i) / Σ qty_i  (0 when no valid trades)
//! ```

use gbce_core::{DividendPolicy, InstrumentData, TradeReport};
use gbce_ports::{MarketError, MarketResult, StockOperations, TradeStore};
use rust_decimal::Decimal;

use crate::precision::div_half_up;

/// Calculation engine for one instrument
pub struct BasicStockOperations {
    policy: DividendPolicy,
    data: InstrumentData,
    ledger: Box<dyn TradeStore>,
}

impl BasicStockOperations {
    pub fn new(policy: DividendPolicy, data: InstrumentData, ledger: Box<dyn TradeStore>) -> Self {
        Self {
            policy,
            data,
            ledger,
        }
    }

    pub fn builder() -> StockOperationsBuilder {
        StockOperationsBuilder::default()
    }

    pub fn policy(&self) -> DividendPolicy {
        self.policy
    }

    pub fn data(&self) -> &InstrumentData {
        &self.data
    }
}

impl StockOperations for BasicStockOperations {
    fn calculate_dividend_yield(&self, price: Decimal) -> MarketResult<Decimal> {
        let dividend = self.policy.dividend(&self.data)?;
        div_half_up(dividend, price)
    }

    fn calculate_pe_ratio(&self, price: Decimal) -> MarketResult<Decimal> {
        let dividend_yield = self.calculate_dividend_yield(price)?;
        if dividend_yield.is_zero() {
            return Ok(Decimal::ZERO);
        }
        div_half_up(price, dividend_yield)
    }

    fn record(&self, trade: TradeReport) -> MarketResult<()> {
        self.ledger.record(trade)
    }

    fn calculate_volume_weighted_stock_price(&self) -> MarketResult<Decimal> {
        let trades = self.ledger.valid_trades();
        if trades.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let mut notional = Decimal::ZERO;
        let mut volume: i64 = 0;
        for trade in &trades {
            notional = trade
                .notional()
                .and_then(|n| notional.checked_add(n))
                .ok_or(MarketError::ArithmeticOverflow)?;
            volume = volume
                .checked_add(trade.quantity())
                .ok_or(MarketError::ArithmeticOverflow)?;
        }

        div_half_up(notional, Decimal::from(volume))
    }
}

/// Assembles a [`BasicStockOperations`] from separately wired parts
///
/// `build` reports the first missing part as a configuration error.
#[derive(Default)]
pub struct StockOperationsBuilder {
    policy: Option<DividendPolicy>,
    data: Option<InstrumentData>,
    ledger: Option<Box<dyn TradeStore>>,
}

impl StockOperationsBuilder {
    pub fn dividend_policy(mut self, policy: DividendPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn instrument_data(mut self, data: InstrumentData) -> Self {
        self.data = Some(data);
        self
    }

    pub fn trade_store(mut self, ledger: Box<dyn TradeStore>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    pub fn build(self) -> MarketResult<BasicStockOperations> {
        let policy = self.policy.ok_or_else(|| {
            MarketError::Configuration("dividend policy cannot be empty".to_string())
        })?;
        let data = self.data.ok_or_else(|| {
            MarketError::Configuration("instrument data cannot be empty".to_string())
        })?;
        let ledger = self.ledger.ok_or_else(|| {
            MarketError::Configuration("trade store cannot be empty".to_string())
        })?;
        Ok(BasicStockOperations::new(policy, data, ledger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbce_core::{DividendError, Side, TradeRecord};
    use parking_lot::Mutex;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    /// Store returning whatever trades were pushed, without any window
    #[derive(Default, Clone)]
    struct FakeStore {
        trades: Arc<Mutex<Vec<TradeRecord>>>,
    }

    impl TradeStore for FakeStore {
        fn record(&self, trade: TradeReport) -> MarketResult<()> {
            let trade = trade.validate()?;
            self.trades.lock().push(trade);
            Ok(())
        }

        fn valid_trades(&self) -> Vec<TradeRecord> {
            self.trades.lock().clone()
        }
    }

    fn operations(policy: DividendPolicy, data: InstrumentData) -> (BasicStockOperations, FakeStore) {
        let store = FakeStore::default();
        let ops = BasicStockOperations::new(policy, data, Box::new(store.clone()));
        (ops, store)
    }

    #[test]
    fn test_common_dividend_yield_and_pe() {
        let (ops, _) = operations(
            DividendPolicy::Common,
            InstrumentData::common(dec!(8), dec!(100)),
        );
        assert_eq!(ops.calculate_dividend_yield(dec!(10)).unwrap(), dec!(0.8));
        assert_eq!(ops.calculate_pe_ratio(dec!(10)).unwrap(), dec!(12.5));
    }

    #[test]
    fn test_preferred_dividend_yield_and_pe() {
        let (ops, _) = operations(
            DividendPolicy::Preferred,
            InstrumentData::preferred(dec!(8), dec!(0.02), dec!(100)),
        );
        assert_eq!(ops.calculate_dividend_yield(dec!(10)).unwrap(), dec!(0.2));
        assert_eq!(ops.calculate_pe_ratio(dec!(10)).unwrap(), dec!(50));
    }

    #[test]
    fn test_dividend_yield_rounds_half_up_at_sixteen_places() {
        let (ops, _) = operations(
            DividendPolicy::Common,
            InstrumentData::common(dec!(2), dec!(100)),
        );
        assert_eq!(
            ops.calculate_dividend_yield(dec!(3)).unwrap(),
            dec!(0.6666666666666667)
        );
    }

    #[test]
    fn test_yield_just_below_half_rounds_down() {
        let (ops, _) = operations(
            DividendPolicy::Common,
            InstrumentData::common(dec!(1.00000000000000015), dec!(100)),
        );
        assert_eq!(
            ops.calculate_dividend_yield(dec!(1.0000000000000001)).unwrap(),
            dec!(1.0000000000000000)
        );
    }

    #[test]
    fn test_pe_with_long_price() {
        let (ops, _) = operations(
            DividendPolicy::Common,
            InstrumentData::common(dec!(8), dec!(100)),
        );
        // yield 0.0800000008000000, then 1249.9999750000002499|999975...
        assert_eq!(
            ops.calculate_dividend_yield(dec!(99.999999)).unwrap(),
            dec!(0.0800000008)
        );
        assert_eq!(
            ops.calculate_pe_ratio(dec!(99.999999)).unwrap(),
            dec!(1249.99997500000025)
        );
    }

    #[test]
    fn test_zero_yield_gives_zero_pe() {
        let (ops, _) = operations(
            DividendPolicy::Common,
            InstrumentData::common(dec!(0), dec!(100)),
        );
        assert_eq!(ops.calculate_dividend_yield(dec!(10)).unwrap(), Decimal::ZERO);
        assert_eq!(ops.calculate_pe_ratio(dec!(10)).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_missing_dividend_is_an_error_not_zero() {
        let (ops, _) = operations(
            DividendPolicy::Preferred,
            InstrumentData::common(dec!(8), dec!(100)),
        );
        assert_eq!(
            ops.calculate_dividend_yield(dec!(10)),
            Err(MarketError::Dividend(DividendError::MissingFixedDividend))
        );
        assert_eq!(
            ops.calculate_pe_ratio(dec!(10)),
            Err(MarketError::Dividend(DividendError::MissingFixedDividend))
        );
    }

    #[test]
    fn test_vwsp_without_trades_is_zero() {
        let (ops, _) = operations(
            DividendPolicy::Common,
            InstrumentData::common(dec!(0), dec!(100)),
        );
        assert_eq!(
            ops.calculate_volume_weighted_stock_price().unwrap(),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_vwsp_weights_by_quantity() {
        let (ops, store) = operations(
            DividendPolicy::Common,
            InstrumentData::common(dec!(0), dec!(100)),
        );
        ops.record(TradeReport::now("TEA", 1, Side::Buy, dec!(20))).unwrap();
        ops.record(TradeReport::now("TEA", 4, Side::Sell, dec!(10))).unwrap();

        assert_eq!(store.valid_trades().len(), 2);
        assert_eq!(ops.calculate_volume_weighted_stock_price().unwrap(), dec!(12));
    }

    #[test]
    fn test_vwsp_repeating_quotient() {
        let (ops, _) = operations(
            DividendPolicy::Common,
            InstrumentData::common(dec!(0), dec!(100)),
        );
        ops.record(TradeReport::now("TEA", 1, Side::Buy, dec!(1))).unwrap();
        ops.record(TradeReport::now("TEA", 2, Side::Buy, dec!(2))).unwrap();

        // 5 / 3
        assert_eq!(
            ops.calculate_volume_weighted_stock_price().unwrap(),
            dec!(1.6666666666666667)
        );
    }

    #[test]
    fn test_builder_reports_first_missing_part() {
        let err = BasicStockOperations::builder()
            .instrument_data(InstrumentData::common(dec!(1), dec!(1)))
            .trade_store(Box::new(FakeStore::default()))
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err,
            MarketError::Configuration("dividend policy cannot be empty".to_string())
        );

        let err = BasicStockOperations::builder()
            .dividend_policy(DividendPolicy::Common)
            .trade_store(Box::new(FakeStore::default()))
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err,
            MarketError::Configuration("instrument data cannot be empty".to_string())
        );

        let err = BasicStockOperations::builder()
            .dividend_policy(DividendPolicy::Common)
            .instrument_data(InstrumentData::common(dec!(1), dec!(1)))
            .build()
            .err()
            .unwrap();
        assert_eq!(
            err,
            MarketError::Configuration("trade store cannot be empty".to_string())
        );
    }

    #[test]
    fn test_builder_with_all_parts() {
        let ops = BasicStockOperations::builder()
            .dividend_policy(DividendPolicy::Common)
            .instrument_data(InstrumentData::common(dec!(8), dec!(100)))
            .trade_store(Box::new(FakeStore::default()))
            .build()
            .unwrap();
        assert_eq!(ops.policy(), DividendPolicy::Common);
        assert_eq!(ops.data().par_value, dec!(100));
    }
}
