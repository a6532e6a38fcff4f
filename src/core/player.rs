//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index of a player. Seat order is also turn order: after player `n`
//! comes player `n + 1`, wrapping to player 0.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexable by
//! `PlayerId`. The UI addresses players by raw `usize` index; use
//! `PlayerMap::player` to turn such an index into a checked `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat index of a player (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use monopoly_deal::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The player seated after this one.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// Every other player, in seat order starting to this player's left.
    ///
    /// ```
    /// use monopoly_deal::core::PlayerId;
    ///
    /// let others: Vec<_> = PlayerId::new(1).others(3).collect();
    /// assert_eq!(others, vec![PlayerId::new(2), PlayerId::new(0)]);
    /// ```
    pub fn others(self, player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..player_count).map(move |offset| PlayerId(((self.index() + offset) % player_count) as u8))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use monopoly_deal::core::{PlayerId, PlayerMap};
///
/// let mut plays: PlayerMap<u8> = PlayerMap::with_value(2, 0);
/// plays[PlayerId::new(1)] += 1;
/// assert_eq!(plays[PlayerId::new(1)], 1);
/// assert!(plays.player(2).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = PlayerId::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check a raw seat index, returning its `PlayerId` if it names a player.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<PlayerId> {
        (index < self.data.len()).then(|| PlayerId(index as u8))
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
