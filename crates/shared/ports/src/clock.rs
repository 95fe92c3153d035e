use gbce_core::Timestamp;

/// Time source for the trade retention window
///
/// Ledgers ask for "now" once per prune pass; trades older than
/// `now - retention` are dropped.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Shown in log lines that mention the clock
    fn name(&self) -> &str {
        "Clock"
    }
}
