use chrono::{Duration, Utc};
use gbce_core::Timestamp;
use gbce_ports::Clock;
use parking_lot::RwLock;
use std::sync::Arc;

/// Fixed clock that only advances when explicitly moved
///
/// Cloning shares the underlying time, so a test can keep a handle while
/// the ledger under test holds another.
#[derive(Clone)]
pub struct ManualClock {
    current_time: Arc<RwLock<Timestamp>>,
}

impl ManualClock {
    /// Create a clock frozen at `time`
    pub fn new(time: Timestamp) -> Self {
        Self {
            current_time: Arc::new(RwLock::new(time)),
        }
    }

    /// Create a clock frozen at the current wall time
    pub fn starting_now() -> Self {
        Self::new(Utc::now())
    }

    /// Move time forward (or backward, for a negative duration)
    pub fn advance(&self, duration: Duration) {
        let mut current = self.current_time.write();
        *current += duration;
    }

    /// Explicitly set the time
    pub fn set_time(&self, time: Timestamp) {
        *self.current_time.write() = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current_time.read()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_does_not_move_by_itself() {
        let clock = ManualClock::starting_now();
        let time1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(clock.now(), time1);
    }

    #[test]
    fn test_advance_and_set() {
        let clock = ManualClock::starting_now();
        let time1 = clock.now();

        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now() - time1, Duration::seconds(5));

        clock.set_time(time1);
        assert_eq!(clock.now(), time1);
    }

    #[test]
    fn test_clones_share_time() {
        let clock = ManualClock::starting_now();
        let handle = clock.clone();
        let time1 = clock.now();

        handle.advance(Duration::minutes(1));
        assert_eq!(clock.now() - time1, Duration::minutes(1));
    }
}
