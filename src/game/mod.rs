//! The matching engine: card arena plus the choose/shuffle transitions.

pub mod memory;

pub use memory::{GameSnapshot, MemoryGame, MAX_PAIRS};
