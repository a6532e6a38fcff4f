//! # monopoly-deal
//!
//! A rules engine for the Monopoly Deal card game.
//!
//! ## Design Principles
//!
//! 1. **Explicit Configuration**: Seat count, seed, turn limits, win
//!    condition and deck all live in one `GameConfig`. There is no global
//!    state.
//!
//! 2. **N-Player First**: Every API takes a player id or seat index. Nothing
//!    assumes two players.
//!
//! 3. **Failed Actions Change Nothing**: Actions run on a copy of the state
//!    that is committed only on success. Every failure is a typed
//!    `GameError`.
//!
//! 4. **Deterministic**: The only randomness is shuffling, from a seeded
//!    `GameRng` whose position is part of the state.
//!
//! ## Architecture
//!
//! - **Per-instance identity**: Every physical card carries a unique
//!   `InstanceId`, so two $1M notes are still different cards.
//!
//! - **Log as data**: Accepted actions are appended to an action history and
//!   every state change to an event log, both `im` persistent vectors.
//!
//! ## Modules
//!
//! - `core`: Ids, players, configuration, errors, actions, events, phases,
//!   state, RNG
//! - `cards`: Colors, card kinds, the deck catalog
//! - `zones`: Hands, banks, property boards, draw and discard piles
//! - `rules`: `RulesEngine` trait
//! - `game`: The Monopoly Deal rules, the `Game` controller, playout policies,
//!   snapshots

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, Demand, GameConfig, GameError, GameEvent, GameRng, GameRngState, GameState,
    IllegalPlay, InstanceId, PendingAction, Phase, PlayerArea, PlayerId, PlayerMap, PublicState, Result,
    SnapshotError,
};

pub use crate::cards::{ActionKind, Card, CardCatalog, CardDefinition, CardKind, Color, ColorChoice};

pub use crate::zones::{Bank, DiscardPile, DrawPile, Hand, PropertyBoard, PropertySet};

pub use crate::rules::{GameResult, RulesEngine};

pub use crate::game::{canonical_payment, play_out, FirstLegalPolicy, Game, MonopolyDeal, Policy, RandomPolicy};
