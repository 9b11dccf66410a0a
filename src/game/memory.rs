//! The matching engine.
//!
//! `MemoryGame` owns an arena of cards and applies one transition per
//! `choose` call. At most one unmatched card is face up at any time: the
//! sole face-up card, waiting for its partner.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::cards::{Card, CardId};
use crate::core::clock::{Clock, SystemClock, Timestamp};
use crate::core::config::DEFAULT_BONUS_TIME_LIMIT;
use crate::core::error::SnapshotError;
use crate::core::rng::{GameRng, GameRngState};

/// Largest number of pairs a game can hold; the last card gets id `u32::MAX`.
pub const MAX_PAIRS: u32 = 1 << 31;

/// Clamp a requested pair count to `MAX_PAIRS`.
fn clamp_pair_count(pair_count: usize) -> u32 {
    u32::try_from(pair_count).unwrap_or(u32::MAX).min(MAX_PAIRS)
}

/// Ids of the two cards of pair `pair_index` (below `MAX_PAIRS`).
fn pair_ids(pair_index: u32) -> (CardId, CardId) {
    (CardId::new(pair_index * 2), CardId::new(pair_index * 2 + 1))
}

/// A memory game over content type `C`, reading time from `K`.
#[derive(Clone, Debug)]
pub struct MemoryGame<C, K = SystemClock> {
    cards: Vec<Card<C>>,
    rng: GameRng,
    clock: K,
}

/// Serializable game state: cards in order plus the shuffle stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot<C> {
    pub cards: Vec<Card<C>>,
    pub rng: GameRngState,
}

impl<C: PartialEq> MemoryGame<C, SystemClock> {
    /// Deal `pair_count` pairs using the wall clock and an entropy-seeded RNG.
    ///
    /// ```
    /// use memory_match::MemoryGame;
    ///
    /// let game = MemoryGame::new(2, |p| ["A", "B"][p]);
    /// let contents: Vec<_> = game.cards().iter().map(|c| *c.content()).collect();
    /// assert_eq!(contents, ["A", "A", "B", "B"]);
    /// ```
    #[must_use]
    pub fn new(pair_count: usize, content_at: impl FnMut(usize) -> C) -> Self
    where
        C: Clone,
    {
        Self::with_clock(
            pair_count,
            content_at,
            SystemClock,
            GameRng::from_entropy(),
            DEFAULT_BONUS_TIME_LIMIT,
        )
    }
}

impl<C: PartialEq, K: Clock> MemoryGame<C, K> {
    /// Deal `pair_count` pairs in pair-sequential order.
    ///
    /// `content_at` is called once per pair index; both cards of pair `p`
    /// get ids `2p` and `2p + 1`. Pair counts above `MAX_PAIRS` are clamped.
    #[must_use]
    pub fn with_clock(
        pair_count: usize,
        mut content_at: impl FnMut(usize) -> C,
        clock: K,
        rng: GameRng,
        bonus_time_limit: Duration,
    ) -> Self
    where
        C: Clone,
    {
        let pairs = clamp_pair_count(pair_count);
        if pairs as usize != pair_count {
            warn!(requested = pair_count, dealt = pairs, "Clamped pair count");
        }

        let mut cards = Vec::with_capacity(pairs as usize * 2);
        for pair_index in 0..pairs {
            let content = content_at(pair_index as usize);
            let (first, second) = pair_ids(pair_index);
            cards.push(Card::new(first, content.clone(), bonus_time_limit));
            cards.push(Card::new(second, content, bonus_time_limit));
        }

        debug!(pair_count = pairs, seed = rng.seed(), "Dealt memory game");

        Self { cards, rng, clock }
    }

    /// Restore a game from a snapshot.
    ///
    /// Rejects snapshots whose cards could not have come from play: ids
    /// must be unique, every content value must sit on exactly two cards,
    /// and at most one unmatched card may be face up.
    pub fn from_snapshot(snapshot: GameSnapshot<C>, clock: K) -> Result<Self, SnapshotError> {
        validate_cards(&snapshot.cards)?;
        Ok(Self {
            cards: snapshot.cards,
            rng: GameRng::from_state(&snapshot.rng),
            clock,
        })
    }

    /// Capture cards and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<C>
    where
        C: Clone,
    {
        GameSnapshot {
            cards: self.cards.clone(),
            rng: self.rng.state(),
        }
    }

    // === Queries ===

    /// Cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card<C>> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Number of pairs already matched.
    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    /// Every card has been matched.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Current time according to the game's clock.
    ///
    /// Pass this to the card bonus queries.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// The clock this game reads on every flip.
    ///
    /// Sessions clone it when dealing a fresh game.
    #[must_use]
    pub fn clock(&self) -> &K {
        &self.clock
    }

    /// Index of the sole face-up card: face up and not yet matched.
    #[must_use]
    pub fn index_of_sole_face_up(&self) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.is_face_up() && !card.is_matched())
    }

    // === Transitions ===

    /// Make `index` the sole face-up card.
    ///
    /// Every other card is flipped face down (stopping its timer) and the
    /// card at `index` is flipped face up. Out-of-range indices flip
    /// everything down.
    pub fn set_sole_face_up(&mut self, index: usize) {
        let now = self.clock.now();
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.set_face_up(i == index, now);
        }
    }

    /// Choose a card.
    ///
    /// No-op if the id is unknown or the card is already face up or matched.
    /// If the sole face-up card has the same content, both become matched.
    /// Otherwise the chosen card becomes the sole face-up card.
    pub fn choose(&mut self, id: CardId) {
        let Some(chosen) = self.cards.iter().position(|card| card.id() == id) else {
            trace!(%id, "Ignoring unknown card");
            return;
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            trace!(%id, "Ignoring face-up or matched card");
            return;
        }

        let potential_match = self
            .index_of_sole_face_up()
            .filter(|&other| self.cards[other].content() == self.cards[chosen].content());

        match potential_match {
            Some(other) => {
                let now = self.clock.now();
                self.cards[chosen].set_matched(now);
                self.cards[other].set_matched(now);
                self.cards[chosen].set_face_up(true, now);
                trace!(%id, partner = %self.cards[other].id(), "Matched pair");
            }
            None => {
                self.set_sole_face_up(chosen);
                trace!(%id, "Flipped card face up");
            }
        }
    }

    /// Randomly reorder the cards. Card states are untouched.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
        debug!(cards = self.cards.len(), "Shuffled cards");
    }
}

fn validate_cards<C: PartialEq>(cards: &[Card<C>]) -> Result<(), SnapshotError> {
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].iter().any(|earlier| earlier.id() == card.id()) {
            return Err(SnapshotError::DuplicateId(card.id()));
        }
    }

    for card in cards {
        let count = cards.iter().filter(|other| other.content() == card.content()).count();
        if count != 2 {
            return Err(SnapshotError::UnpairedContent { id: card.id(), count });
        }
    }

    let face_up = cards.iter().filter(|card| card.is_face_up() && !card.is_matched()).count();
    if face_up > 1 {
        return Err(SnapshotError::MultipleFaceUp { count: face_up });
    }

    Ok(())
}
