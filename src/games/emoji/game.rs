//! Emoji memory game implementation.

use tracing::{debug, info};

use crate::cards::{Card, CardId};
use crate::core::{Clock, ConfigError, GameConfig, GameRng, SystemClock};
use crate::game::MemoryGame;
use crate::session::MemoryGameSession;

/// Vehicle emoji dealt as card content, one pair each.
pub const EMOJIS: [&str; 18] = [
    "🚎", "🛵", "🚁", "⛵️", "🚗", "🚌", //
    "🚓", "🚛", "🏍", "🛺", "🚀", "🛶", //
    "✈️", "🚂", "🚇", "🚢", "🚠", "🛰",
];

/// Emoji memory game session.
#[derive(Clone, Debug)]
pub struct EmojiMemoryGame<K = SystemClock> {
    config: GameConfig,
    pair_count: usize,
    /// Session stream; each deal forks its own shuffle stream from it.
    rng: GameRng,
    model: MemoryGame<&'static str, K>,
}

/// Builder for creating an EmojiMemoryGame.
#[derive(Clone, Debug, Default)]
pub struct EmojiGameBuilder {
    config: GameConfig,
}

impl EmojiGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pair_count(mut self, pairs: usize) -> Self {
        self.config = self.config.with_pair_count(pairs);
        self
    }

    /// Deal every emoji.
    pub fn all_pairs(mut self) -> Self {
        self.config = self.config.with_all_pairs();
        self
    }

    pub fn shuffle_on_start(mut self, shuffle: bool) -> Self {
        self.config.shuffle_on_start = shuffle;
        self
    }

    pub fn bonus_time_limit(mut self, limit: std::time::Duration) -> Self {
        self.config = self.config.with_bonus_time_limit(limit);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_seed(seed);
        self
    }

    /// Build a session on the wall clock.
    pub fn build(self) -> Result<EmojiMemoryGame<SystemClock>, ConfigError> {
        self.build_with_clock(SystemClock)
    }

    /// Build a session reading time from `clock`.
    pub fn build_with_clock<K: Clock + Clone>(
        self,
        clock: K,
    ) -> Result<EmojiMemoryGame<K>, ConfigError> {
        let pair_count = self.config.pair_count.resolve(EMOJIS.len())?;
        let mut rng = GameRng::from_seed(self.config.seed);
        let model = deal(&self.config, pair_count, &mut rng, clock);

        info!(
            pair_count,
            shuffle_on_start = self.config.shuffle_on_start,
            "Created emoji memory game"
        );

        Ok(EmojiMemoryGame {
            config: self.config,
            pair_count,
            rng,
            model,
        })
    }
}

fn deal<K: Clock>(
    config: &GameConfig,
    pair_count: usize,
    rng: &mut GameRng,
    clock: K,
) -> MemoryGame<&'static str, K> {
    let mut model = MemoryGame::with_clock(
        pair_count,
        |pair_index| EMOJIS[pair_index],
        clock,
        rng.fork(),
        config.bonus_time_limit,
    );
    if config.shuffle_on_start {
        model.shuffle();
    }
    model
}

impl<K: Clock + Clone> EmojiMemoryGame<K> {
    /// The configuration this session deals with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Pairs per deal, resolved against the emoji list.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// The current game.
    #[must_use]
    pub fn model(&self) -> &MemoryGame<&'static str, K> {
        &self.model
    }
}

impl<K: Clock + Clone> MemoryGameSession for EmojiMemoryGame<K> {
    type Content = &'static str;

    fn cards(&self) -> &[Card<&'static str>] {
        self.model.cards()
    }

    fn choose(&mut self, id: CardId) {
        self.model.choose(id);
    }

    fn shuffle(&mut self) {
        self.model.shuffle();
    }

    fn restart(&mut self) {
        let clock = self.model.clock().clone();
        self.model = deal(&self.config, self.pair_count, &mut self.rng, clock);
        debug!(pair_count = self.pair_count, "Restarted emoji memory game");
    }
}
