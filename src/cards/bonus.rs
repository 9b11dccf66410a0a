//! Per-card bonus time bookkeeping.
//!
//! A card earns a bonus when it is matched before its face-up time exceeds
//! the limit. Face-up time accumulates only while the timer runs:
//!
//! ```text
//! face_up_time(now) = past_face_up_time + (now - last_face_up_date)   if running
//!                   = past_face_up_time                               otherwise
//! ```
//!
//! All queries take `now` explicitly; the timer holds no clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::clock::Timestamp;
use crate::core::config::DEFAULT_BONUS_TIME_LIMIT;

/// Accumulated face-up time against a fixed limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTimer {
    limit: Duration,
    past_face_up_time: Duration,
    last_face_up_date: Option<Timestamp>,
}

impl Default for BonusTimer {
    fn default() -> Self {
        Self::new(DEFAULT_BONUS_TIME_LIMIT)
    }
}

impl BonusTimer {
    /// Create a stopped timer with nothing accumulated.
    #[must_use]
    pub const fn new(limit: Duration) -> Self {
        Self {
            limit,
            past_face_up_time: Duration::ZERO,
            last_face_up_date: None,
        }
    }

    /// The bonus window.
    #[must_use]
    pub const fn limit(&self) -> Duration {
        self.limit
    }

    /// Face-up time folded in by earlier stops.
    #[must_use]
    pub const fn past_face_up_time(&self) -> Duration {
        self.past_face_up_time
    }

    /// When the running interval started, if the timer is running.
    #[must_use]
    pub const fn last_face_up_date(&self) -> Option<Timestamp> {
        self.last_face_up_date
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.last_face_up_date.is_some()
    }

    /// Total face-up time as of `now`.
    #[must_use]
    pub fn face_up_time(&self, now: Timestamp) -> Duration {
        match self.last_face_up_date {
            Some(since) => self.past_face_up_time + now.saturating_duration_since(since),
            None => self.past_face_up_time,
        }
    }

    /// Bonus time left as of `now`, never negative.
    #[must_use]
    pub fn time_remaining(&self, now: Timestamp) -> Duration {
        self.limit.saturating_sub(self.face_up_time(now))
    }

    /// Fraction of the window left, in `[0, 1]`.
    ///
    /// Zero when the limit is zero or the window is used up.
    #[must_use]
    pub fn fraction_remaining(&self, now: Timestamp) -> f64 {
        let remaining = self.time_remaining(now);
        if self.limit.is_zero() || remaining.is_zero() {
            0.0
        } else {
            remaining.as_secs_f64() / self.limit.as_secs_f64()
        }
    }

    /// Start a running interval at `now`. No-op if already running.
    pub fn start(&mut self, now: Timestamp) {
        if self.last_face_up_date.is_none() {
            self.last_face_up_date = Some(now);
        }
    }

    /// Fold the running interval into the accumulator and stop.
    pub fn stop(&mut self, now: Timestamp) {
        self.past_face_up_time = self.face_up_time(now);
        self.last_face_up_date = None;
    }
}
