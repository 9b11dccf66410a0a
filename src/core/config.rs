//! Game configuration types.
//!
//! Sessions configure a game at startup by providing:
//! - `PairCount`: how many pairs to deal from the content source
//! - Whether to shuffle the initial deal
//! - The per-card bonus time limit
//! - An optional RNG seed for reproducible deals
//!
//! The engine never hardcodes a pair count or shuffle policy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default bonus window per card.
pub const DEFAULT_BONUS_TIME_LIMIT: Duration = Duration::from_secs(6);

/// How many pairs to deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairCount {
    /// One pair per available content value.
    #[default]
    All,
    /// A fixed number of pairs, taken from the front of the content list.
    Fixed(usize),
}

impl PairCount {
    /// Resolve against the number of available content values.
    ///
    /// ```
    /// use memory_match::core::PairCount;
    ///
    /// assert_eq!(PairCount::All.resolve(18), Ok(18));
    /// assert_eq!(PairCount::Fixed(6).resolve(18), Ok(6));
    /// assert!(PairCount::Fixed(20).resolve(18).is_err());
    /// ```
    pub fn resolve(self, available: usize) -> Result<usize, ConfigError> {
        match self {
            PairCount::All => Ok(available),
            PairCount::Fixed(requested) if requested <= available => Ok(requested),
            PairCount::Fixed(requested) => {
                Err(ConfigError::NotEnoughContent { requested, available })
            }
        }
    }
}

/// Complete configuration for dealing a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pairs to deal.
    #[serde(default)]
    pub pair_count: PairCount,

    /// Shuffle the cards right after dealing.
    #[serde(default)]
    pub shuffle_on_start: bool,

    /// Bonus window for each card.
    #[serde(default = "default_bonus_time_limit")]
    pub bonus_time_limit: Duration,

    /// RNG seed. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_bonus_time_limit() -> Duration {
    DEFAULT_BONUS_TIME_LIMIT
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: PairCount::All,
            shuffle_on_start: false,
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal a fixed number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        self.pair_count = PairCount::Fixed(pairs);
        self
    }

    /// Deal one pair per content value.
    #[must_use]
    pub fn with_all_pairs(mut self) -> Self {
        self.pair_count = PairCount::All;
        self
    }

    /// Shuffle the initial deal.
    #[must_use]
    pub fn shuffled(mut self) -> Self {
        self.shuffle_on_start = true;
        self
    }

    /// Set the bonus window.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    /// Seed the RNG for reproducible deals.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.pair_count, PairCount::All);
        assert!(!config.shuffle_on_start);
        assert_eq!(config.bonus_time_limit, Duration::from_secs(6));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_methods() {
        let config = GameConfig::new()
            .with_pair_count(6)
            .shuffled()
            .with_bonus_time_limit(Duration::from_secs(10))
            .with_seed(99);

        assert_eq!(config.pair_count, PairCount::Fixed(6));
        assert!(config.shuffle_on_start);
        assert_eq!(config.bonus_time_limit, Duration::from_secs(10));
        assert_eq!(config.seed, Some(99));

        assert_eq!(config.with_all_pairs().pair_count, PairCount::All);
    }

    #[test]
    fn test_resolve_pair_count() {
        assert_eq!(PairCount::All.resolve(0), Ok(0));
        assert_eq!(PairCount::Fixed(0).resolve(18), Ok(0));
        assert_eq!(PairCount::Fixed(18).resolve(18), Ok(18));
        assert_eq!(
            PairCount::Fixed(19).resolve(18),
            Err(ConfigError::NotEnoughContent { requested: 19, available: 18 })
        );
    }

    #[test]
    fn test_serde_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"pair_count":{"Fixed":6}}"#).unwrap();
        assert_eq!(config, GameConfig::new().with_pair_count(6));

        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
