//! Error types for game setup and restore.
//!
//! Gameplay itself never fails: choosing an unknown, face-up or matched
//! card is a silent no-op. Only configuration and snapshots can be rejected.

use thiserror::Error;

use crate::cards::CardId;

/// Errors raised while configuring a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// More pairs were requested than the content source provides.
    #[error("requested {requested} pairs but only {available} content values are available")]
    NotEnoughContent {
        /// Pairs asked for.
        requested: usize,
        /// Distinct content values in the source.
        available: usize,
    },
}

/// Errors raised while restoring a game from a snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Two cards share an id.
    #[error("duplicate card id {0}")]
    DuplicateId(CardId),

    /// A content value does not appear on exactly two cards.
    #[error("content of {id} appears on {count} cards, expected 2")]
    UnpairedContent {
        /// First card carrying the content.
        id: CardId,
        /// Cards carrying the content.
        count: usize,
    },

    /// More than one unmatched card is face up.
    #[error("{count} unmatched cards are face up, at most 1 allowed")]
    MultipleFaceUp {
        /// Unmatched face-up cards.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigError::NotEnoughContent { requested: 20, available: 18 };
        assert_eq!(
            err.to_string(),
            "requested 20 pairs but only 18 content values are available"
        );

        let err = SnapshotError::UnpairedContent { id: CardId(3), count: 1 };
        assert_eq!(err.to_string(), "content of Card(3) appears on 1 cards, expected 2");
        assert_eq!(
            SnapshotError::MultipleFaceUp { count: 2 }.to_string(),
            "2 unmatched cards are face up, at most 1 allowed"
        );
    }
}
