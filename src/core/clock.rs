//! Time sources for bonus-time bookkeeping.
//!
//! Cards never read the wall clock themselves. The game reads its `Clock`
//! once per mutating call and hands the resulting `Timestamp` to the cards,
//! so every bonus calculation is a pure function of stored timestamps and
//! the moment of evaluation.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::core::{Clock, ManualClock};
//!
//! let clock = ManualClock::new();
//! let start = clock.now();
//! clock.advance(Duration::from_millis(1500));
//! assert_eq!(clock.now().saturating_duration_since(start), Duration::from_millis(1500));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// A point in time, stored as an offset from the clock's epoch.
///
/// `SystemClock` uses the Unix epoch, so timestamps survive snapshots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(Duration);

impl Timestamp {
    /// Create a timestamp from an offset since the epoch.
    #[must_use]
    pub const fn from_offset(offset: Duration) -> Self {
        Self(offset)
    }

    /// Offset since the epoch.
    #[must_use]
    pub const fn offset(self) -> Duration {
        self.0
    }

    /// Time elapsed from `earlier` to `self`, or zero if `earlier` is later.
    #[must_use]
    pub fn saturating_duration_since(self, earlier: Timestamp) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

/// Source of the current time.
pub trait Clock {
    /// Read the current time.
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by `SystemTime`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // A system clock set before 1970 reads as the epoch.
        Timestamp(SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default())
    }
}

/// Manually advanced clock for tests and replays.
///
/// Clones share the same underlying time, so a test can keep a handle
/// while the game owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock starting at the epoch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_add(nanos, Ordering::Relaxed);
    }

    /// Jump to an absolute time.
    pub fn set(&self, to: Timestamp) {
        let nanos = u64::try_from(to.offset().as_nanos()).unwrap_or(u64::MAX);
        self.nanos.store(nanos, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(Duration::from_nanos(self.nanos.load(Ordering::Relaxed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_advance() {
        let clock = ManualClock::new();
        assert_eq!(clock.now(), Timestamp::default());

        clock.advance(Duration::from_secs(2));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now().offset(), Duration::from_millis(2250));
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();

        handle.advance(Duration::from_secs(3));
        assert_eq!(clock.now().offset(), Duration::from_secs(3));

        clock.set(Timestamp::from_offset(Duration::from_secs(1)));
        assert_eq!(handle.now().offset(), Duration::from_secs(1));
    }

    #[test]
    fn test_saturating_duration_since() {
        let early = Timestamp::from_offset(Duration::from_secs(1));
        let late = Timestamp::from_offset(Duration::from_secs(4));

        assert_eq!(late.saturating_duration_since(early), Duration::from_secs(3));
        assert_eq!(early.saturating_duration_since(late), Duration::ZERO);
    }

    #[test]
    fn test_system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(a.offset() > Duration::ZERO);
        assert!(b.saturating_duration_since(a) < Duration::from_secs(60));
    }

    #[test]
    fn test_timestamp_serde() {
        let ts = Timestamp::from_offset(Duration::from_millis(1234));
        let json = serde_json::to_string(&ts).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
    }
}
