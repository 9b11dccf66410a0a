//! Core engine types: RNG, clock, configuration, errors.
//!
//! These building blocks are content-agnostic. Sessions configure them via
//! `GameConfig` rather than modifying the engine.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::{GameConfig, PairCount, DEFAULT_BONUS_TIME_LIMIT};
pub use error::{ConfigError, SnapshotError};
pub use rng::{GameRng, GameRngState};
