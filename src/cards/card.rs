//! Card values.
//!
//! A `Card` is a plain value: id, content, face-up and matched flags, and
//! its bonus timer. Only the engine flips or matches cards, and it always
//! passes the time of the flip so the timer can start or stop.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::bonus::BonusTimer;
use crate::core::clock::Timestamp;

/// Identifier for a card within one game.
///
/// Pair `p` is dealt as ids `2p` and `2p + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in a memory game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card<C> {
    id: CardId,
    content: C,
    is_face_up: bool,
    is_matched: bool,
    bonus: BonusTimer,
}

impl<C> Card<C> {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, content: C, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
            bonus: BonusTimer::new(bonus_time_limit),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// The card's bonus timer.
    #[must_use]
    pub fn bonus(&self) -> &BonusTimer {
        &self.bonus
    }

    /// Bonus window for this card.
    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus.limit()
    }

    /// Bonus time left as of `now`.
    #[must_use]
    pub fn bonus_time_remaining(&self, now: Timestamp) -> Duration {
        self.bonus.time_remaining(now)
    }

    /// Fraction of the bonus window left as of `now`, in `[0, 1]`.
    #[must_use]
    pub fn bonus_remaining(&self, now: Timestamp) -> f64 {
        self.bonus.fraction_remaining(now)
    }

    /// Matched while bonus time remained.
    #[must_use]
    pub fn has_earned_bonus(&self, now: Timestamp) -> bool {
        self.is_matched && !self.bonus.time_remaining(now).is_zero()
    }

    /// Face up, unmatched and still within the bonus window.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, now: Timestamp) -> bool {
        self.is_face_up && !self.is_matched && !self.bonus.time_remaining(now).is_zero()
    }

    /// Flip the card. Face up starts the bonus timer if the card is still
    /// eligible; face down stops it.
    pub(crate) fn set_face_up(&mut self, face_up: bool, now: Timestamp) {
        self.is_face_up = face_up;
        if face_up {
            if self.is_consuming_bonus_time(now) {
                self.bonus.start(now);
            }
        } else {
            self.bonus.stop(now);
        }
    }

    /// Mark the card matched, stopping its bonus timer.
    pub(crate) fn set_matched(&mut self, now: Timestamp) {
        self.is_matched = true;
        self.bonus.stop(now);
    }
}
