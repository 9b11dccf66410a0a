//! Session trait for presentation layers.
//!
//! A session owns one `MemoryGame` and knows how to deal a fresh one. The
//! presentation layer only reads `cards` and forwards user intents:
//! - Choose a card
//! - Shuffle the table
//! - Restart with a new deal

use crate::cards::{Card, CardId};

/// Holder of a memory game.
///
/// ## Implementation Notes
///
/// - `choose`: Must never fail; invalid choices are no-ops
/// - `shuffle`: Must only reorder, never change card states
/// - `restart`: Replaces the game wholesale with a fresh deal
pub trait MemoryGameSession {
    /// Content shown on the cards.
    type Content: PartialEq;

    /// Cards in table order.
    fn cards(&self) -> &[Card<Self::Content>];

    /// Choose a card by id.
    fn choose(&mut self, id: CardId);

    /// Reorder the cards on the table.
    fn shuffle(&mut self);

    /// Discard the current game and deal a new one.
    fn restart(&mut self);

    // === Convenience Methods ===

    /// Every card has been matched.
    fn is_finished(&self) -> bool {
        self.cards().iter().all(Card::is_matched)
    }

    /// Choose a card by its current table position.
    ///
    /// Out-of-range positions are ignored.
    fn choose_at(&mut self, position: usize) {
        if let Some(id) = self.cards().get(position).map(Card::id) {
            self.choose(id);
        }
    }
}
