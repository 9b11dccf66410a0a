//! Concrete game sessions built on the engine.

pub mod emoji;
