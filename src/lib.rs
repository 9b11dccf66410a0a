//! # memory-match
//!
//! A card-matching memory game engine.
//!
//! ## Design Principles
//!
//! 1. **Explicit Transitions**: `choose` is a transition over an indexed
//!    card arena. Making a card the sole face-up card is its own step,
//!    `set_sole_face_up`, testable in isolation.
//!
//! 2. **Pure Bonus Timing**: Cards store timestamps, never clocks. Bonus
//!    queries are pure functions of stored state and a supplied `now`.
//!
//! 3. **Configuration Over Convention**: Pair count, initial shuffle, bonus
//!    window and RNG seed come from `GameConfig`.
//!
//! 4. **No Failing Moves**: Choosing an unknown, face-up or matched card
//!    is a silent no-op. Only configuration and snapshots can be rejected.
//!
//! ## Modules
//!
//! - `core`: RNG, clocks, configuration, errors
//! - `cards`: Card values and bonus timers
//! - `game`: The matching engine
//! - `session`: Trait for game holders (choose, shuffle, restart)
//! - `games`: Concrete sessions (emoji)
//!
//! ## Example
//!
//! ```
//! use memory_match::{CardId, EmojiGameBuilder, MemoryGameSession};
//!
//! let mut game = EmojiGameBuilder::new().pair_count(6).seed(7).build()?;
//! game.choose(CardId::new(0));
//! game.choose(CardId::new(1));
//! assert_eq!(game.cards().iter().filter(|c| c.is_matched()).count(), 2);
//!
//! game.restart();
//! assert!(game.cards().iter().all(|c| !c.is_matched()));
//! # Ok::<(), memory_match::ConfigError>(())
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Clock, ConfigError, GameConfig, GameRng, GameRngState, ManualClock, PairCount, SnapshotError,
    SystemClock, Timestamp,
};

pub use crate::cards::{BonusTimer, Card, CardId};

pub use crate::game::{GameSnapshot, MemoryGame};

pub use crate::session::MemoryGameSession;

pub use crate::games::emoji::{EmojiGameBuilder, EmojiMemoryGame, EMOJIS};
