//! Game configuration.
//!
//! `GameConfig` holds every tunable of a game: seat count, seed, the turn
//! limits of the printed rules, the win condition, and the deck. Defaults are
//! the printed rules with the standard 106-card deck. Builder methods chain;
//! `validate` checks the result.
//!
//! The struct derives serde, so callers can load it from any format.
//! Missing fields take their defaults.
//!
//! ```
//! use monopoly_deal::core::GameConfig;
//!
//! let config = GameConfig::new(3).seed(7).hand_limit(8);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.draw_count, 2);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::CardCatalog;

/// Fewest seats the rules support.
pub const MIN_PLAYERS: usize = 2;
/// Most seats one deck supports.
pub const MAX_PLAYERS: usize = 5;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of players (2-5).
    pub player_count: usize,

    /// Seed for the deck shuffle and every later reshuffle.
    pub seed: u64,

    /// Cards dealt to each player before the first turn.
    pub starting_hand_size: usize,

    /// Cards drawn at the start of a turn.
    pub draw_count: usize,

    /// Cards drawn at the start of a turn begun with an empty hand.
    pub empty_hand_draw_count: usize,

    /// Cards that may be played from hand per turn.
    pub max_plays_per_turn: usize,

    /// Cards a player may hold at the end of their turn.
    pub hand_limit: usize,

    /// Complete sets of distinct colors needed to win.
    pub sets_to_win: usize,

    /// End the game without a winner once this many turns have passed.
    pub max_turns: Option<u32>,

    /// Shuffle the deck at setup. Unshuffled decks deal from the end of the
    /// catalog order, which tests use to stack the deck.
    pub shuffle: bool,

    /// Deck composition.
    pub catalog: CardCatalog,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            seed: 0,
            starting_hand_size: 5,
            draw_count: 2,
            empty_hand_draw_count: 5,
            max_plays_per_turn: 3,
            hand_limit: 7,
            sets_to_win: 3,
            max_turns: None,
            shuffle: true,
            catalog: CardCatalog::standard(),
        }
    }
}

impl GameConfig {
    /// Printed rules for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn draw_count(mut self, count: usize) -> Self {
        self.draw_count = count;
        self
    }

    #[must_use]
    pub fn empty_hand_draw_count(mut self, count: usize) -> Self {
        self.empty_hand_draw_count = count;
        self
    }

    #[must_use]
    pub fn max_plays_per_turn(mut self, plays: usize) -> Self {
        self.max_plays_per_turn = plays;
        self
    }

    #[must_use]
    pub fn hand_limit(mut self, limit: usize) -> Self {
        self.hand_limit = limit;
        self
    }

    #[must_use]
    pub fn sets_to_win(mut self, sets: usize) -> Self {
        self.sets_to_win = sets;
        self
    }

    #[must_use]
    pub fn max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }

    #[must_use]
    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Check that a game can be set up and played with this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount {
                count: self.player_count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.draw_count == 0 || self.empty_hand_draw_count == 0 {
            return Err(ConfigError::ZeroDrawCount);
        }
        if self.max_plays_per_turn == 0 {
            return Err(ConfigError::ZeroPlaysPerTurn);
        }
        if self.sets_to_win == 0 {
            return Err(ConfigError::ZeroSetsToWin);
        }
        let needed = self.player_count * self.starting_hand_size;
        let available = self.catalog.total_cards();
        if needed > available {
            return Err(ConfigError::DeckTooSmall { needed, available });
        }
        Ok(())
    }
}
