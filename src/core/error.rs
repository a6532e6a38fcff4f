//! Error types.
//!
//! Every operation that can be refused returns a typed error and leaves the
//! game untouched. The UI decides what to show.

use thiserror::Error;

use super::entity::InstanceId;
use super::phase::Phase;
use super::player::PlayerId;
use crate::cards::Color;

/// Errors from game operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid player index {index} (game has {player_count} players)")]
    InvalidPlayerIndex { index: usize, player_count: usize },

    #[error("invalid card index {index} (hand has {hand_size} cards)")]
    InvalidCardIndex { index: usize, hand_size: usize },

    #[error("draw pile and discard pile are both empty")]
    DeckExhausted,

    #[error("illegal play: {0}")]
    IllegalPlay(#[from] IllegalPlay),
}

/// Rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalPlay {
    #[error("the game is over")]
    GameOver,

    #[error("{player} cannot act now, waiting on {expected}")]
    NotYourTurn { player: PlayerId, expected: PlayerId },

    #[error("{action} is not allowed during the {phase} phase")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("all {limit} plays for this turn are used")]
    NoPlaysLeft { limit: usize },

    #[error("this play needs {needed} plays but only {left} are left")]
    NotEnoughPlays { needed: usize, left: usize },

    #[error("card {0} is not in the player's hand")]
    CardNotInHand(InstanceId),

    #[error("card {card} is not a {expected} card")]
    WrongCardKind { card: InstanceId, expected: &'static str },

    #[error("property card {0} cannot be banked")]
    CannotBankProperty(InstanceId),

    #[error("card {card} cannot be used as {color}")]
    ColorNotAllowed { card: InstanceId, color: Color },

    #[error("{player} has no {color} properties")]
    NoProperties { player: PlayerId, color: Color },

    #[error("a building cannot go on the {color} set")]
    BuildingNotAllowed { color: Color },

    #[error("{0} cannot be targeted")]
    InvalidTarget(PlayerId),

    #[error("two-color rent charges every opponent; any-color rent needs one target")]
    RentTargetMismatch,

    #[error("card {card} is not on {player}'s board")]
    NotOnBoard { player: PlayerId, card: InstanceId },

    #[error("card {0} is part of a complete set")]
    PropertyProtected(InstanceId),

    #[error("{player} has no complete {color} set")]
    SetNotComplete { player: PlayerId, color: Color },

    #[error("card {0} is not a wild property")]
    NotAWild(InstanceId),

    #[error("hand is within the limit of {limit} cards")]
    HandWithinLimit { limit: usize },

    #[error("card {0} is listed more than once")]
    DuplicateCard(InstanceId),

    #[error("card {0} cannot be used to pay")]
    NotPayable(InstanceId),

    #[error("paid {paid} of {owed} with assets left over")]
    Underpaid { paid: u32, owed: u32 },
}

/// Errors from `GameConfig::validate`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count {count} outside {min}..={max}")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("draw counts must be at least 1")]
    ZeroDrawCount,

    #[error("at least one play per turn is required")]
    ZeroPlaysPerTurn,

    #[error("at least one set is required to win")]
    ZeroSetsToWin,

    #[error("dealing needs {needed} cards but the deck has {available}")]
    DeckTooSmall { needed: usize, available: usize },
}

/// Errors from encoding or decoding a snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot codec error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("snapshot holds an invalid config: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, GameError>;
