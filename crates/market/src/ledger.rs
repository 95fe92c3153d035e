//! Trade Ledger
//!
//! Per-instrument store of recorded trades with a retention window.
//!
//! ## Pruning
//!
//! Expired trades (older than `now - retention`) are evicted:
//! - on **every read**: `valid_trades` prunes before returning, so reads never
//!   see an expired trade
//! - on **writes**, only once more than `prune_threshold` operations have
//!   accumulated since the last pass, so a burst of writes stays O(1)
//!   amortized instead of O(n) each
//!
//! A trade stamped exactly at `now - retention` is still valid.

use chrono::Duration;
use gbce_core::{TradeRecord, TradeReport};
use gbce_ports::{Clock, MarketResult, TradeStore};
use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;

/// Write operations allowed between two pruning passes
pub const DEFAULT_PRUNE_THRESHOLD: usize = 5000;

#[derive(Debug, Default)]
struct LedgerState {
    /// Recorded trades in insertion order
    trades: Vec<TradeRecord>,
    /// Writes since the last pruning pass
    operations_since_prune: usize,
}

/// Time-windowed trade store for one instrument
///
/// All state sits behind one lock, held for the whole of each `record` and
/// `valid_trades` call, so "now" and the stored timestamps are always
/// compared on a consistent snapshot.
pub struct TradeLedger {
    retention: Duration,
    prune_threshold: usize,
    clock: Arc<dyn Clock>,
    state: Mutex<LedgerState>,
}

impl TradeLedger {
    /// Create an empty ledger with the default prune threshold
    pub fn new(retention: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            retention,
            prune_threshold: DEFAULT_PRUNE_THRESHOLD,
            clock,
            state: Mutex::new(LedgerState::default()),
        }
    }

    /// Override how many writes may pass between pruning passes
    pub fn with_prune_threshold(mut self, prune_threshold: usize) -> Self {
        self.prune_threshold = prune_threshold;
        self
    }

    pub fn retention(&self) -> Duration {
        self.retention
    }

    pub fn prune_threshold(&self) -> usize {
        self.prune_threshold
    }

    /// Number of stored trades, including expired ones not yet pruned
    pub fn len(&self) -> usize {
        self.state.lock().trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().trades.is_empty()
    }

    /// Writes recorded since the last pruning pass
    pub fn operations_since_prune(&self) -> usize {
        self.state.lock().operations_since_prune
    }

    /// Evict expired trades and reset the operation counter.
    /// Returns the number of trades evicted.
    fn prune(&self, state: &mut LedgerState) -> usize {
        let now = self.clock.now();
        let before = state.trades.len();

        // A window reaching past the representable range keeps everything
        if let Some(threshold) = now.checked_sub_signed(self.retention) {
            state.trades.retain(|trade| trade.timestamp() >= threshold);
        }
        state.operations_since_prune = 0;

        let evicted = before - state.trades.len();
        if evicted > 0 {
            debug!(
                "Pruned expired trades: evicted={}, remaining={}, clock={}",
                evicted,
                state.trades.len(),
                self.clock.name()
            );
        }
        evicted
    }
}

impl TradeStore for TradeLedger {
    fn record(&self, trade: TradeReport) -> MarketResult<()> {
        let trade = trade.validate()?;

        let mut state = self.state.lock();
        state.operations_since_prune += 1;
        if state.operations_since_prune > self.prune_threshold {
            self.prune(&mut state);
        }

        debug!(
            "Trade recorded: symbol={}, side={}, qty={}, price={}, timestamp={}",
            trade.symbol(),
            trade.side(),
            trade.quantity(),
            trade.price(),
            trade.timestamp()
        );
        state.trades.push(trade);
        Ok(())
    }

    fn valid_trades(&self) -> Vec<TradeRecord> {
        let mut state = self.state.lock();
        self.prune(&mut state);
        state.trades.clone()
    }
}

/// Produces a fresh ledger per instrument with shared settings
#[derive(Clone)]
pub struct TradeLedgerFactory {
    retention: Duration,
    prune_threshold: usize,
    clock: Arc<dyn Clock>,
}

impl TradeLedgerFactory {
    pub fn new(retention: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            retention,
            prune_threshold: DEFAULT_PRUNE_THRESHOLD,
            clock,
        }
    }

    pub fn with_prune_threshold(mut self, prune_threshold: usize) -> Self {
        self.prune_threshold = prune_threshold;
        self
    }

    pub fn create(&self) -> TradeLedger {
        TradeLedger::new(self.retention, Arc::clone(&self.clock))
            .with_prune_threshold(self.prune_threshold)
    }
}
