//! Source of "now" for the deposit workflow.
//!
//! Production code uses [`SystemClock`]; tests drive time explicitly with
//! `MockClock`.

use chrono::{DateTime, Utc};
use std::fmt::Debug;

/// Port for obtaining the current wall-clock time.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// System clock implementation using `Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub use mock::MockClock;


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn mock_clock_advances_for_every_clone() {
        let clock = MockClock::at_noon();
        let start = clock.now();
        let shared = clock.clone();

        shared.advance(TimeDelta::seconds(5));

        assert_eq!(clock.now(), start + TimeDelta::seconds(5));
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(clock.now() > t1);
    }
}
