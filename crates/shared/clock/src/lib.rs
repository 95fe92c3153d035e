//! GBCE Clock Infrastructure
//!
//! Time sources for the trade ledger's retention window:
//!
//! - [`SystemClock`]: wall-clock time, used in production wiring
//! - [`ManualClock`]: frozen time that only moves when told to, used for
//!   deterministic retention-boundary tests
//!
//! ## Usage
//!
//! ```ignore
//! use gbce_clock::{Clock, ManualClock};
//! use chrono::Duration;
//!
//! let clock = ManualClock::starting_now();
//! let t0 = clock.now();
//! clock.advance(Duration::minutes(5));
//! assert_eq!(clock.now() - t0, Duration::minutes(5));
//! ```

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use gbce_ports::Clock;
