use chrono::Utc;
use gbce_core::Timestamp;
use gbce_ports::Clock;

/// Wall clock; trade ledgers use it to place "now" for the retention window
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_reads_wall_time() {
        let clock = SystemClock::new();
        let before = Utc::now();
        let reading = clock.now();
        let after = Utc::now();

        assert!(before <= reading && reading <= after);
        assert!(after - before < Duration::seconds(1));
        assert_eq!(clock.name(), "SystemClock");
    }
}
