//! Emoji memory game.
//!
//! The concrete game shipped with the engine:
//! - Content is a fixed list of 18 vehicle emoji
//! - Pair count defaults to the whole list; a fixed count takes a prefix
//! - Restart deals a fresh game with the same configuration

mod game;

pub use game::{EmojiGameBuilder, EmojiMemoryGame, EMOJIS};
