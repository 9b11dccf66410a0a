//! Session trait implemented by concrete games.
//!
//! Sessions define where card content comes from and how to restart.
//! The engine itself never knows about restarts.

pub mod interface;

pub use interface::MemoryGameSession;
