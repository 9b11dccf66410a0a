//! Card system: identifiers, card values and bonus timers.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identifier, unique within a game
//! - `Card`: Content plus face-up/matched flags
//! - `BonusTimer`: Accumulated face-up time against a limit

pub mod bonus;
pub mod card;

pub use bonus::BonusTimer;
pub use card::{Card, CardId};
