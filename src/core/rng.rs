//! Deterministic random number generation.
//!
//! The only randomness in Monopoly Deal is shuffling: the initial deck and
//! every time the discard pile is recycled into the draw pile. Random playout
//! policies draw from their own `GameRng`.
//!
//! - **Deterministic**: same seed, same shuffles, same game.
//! - **Serializable**: O(1) state capture via the ChaCha word position, so a
//!   snapshot resumes with exactly the shuffles the live game would have made.
//!
//! ```
//! use monopoly_deal::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic seeded RNG.
///
/// Serializes as its [`GameRngState`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(into = "GameRngState", from = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random usize in the given range.
    ///
    /// Panics if the range is empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl PartialEq for GameRng {
    fn eq(&self, other: &Self) -> bool {
        self.state() == other.state()
    }
}

impl Eq for GameRng {}

/// Serializable RNG state for snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        GameRng::from_state(&state)
    }
}
