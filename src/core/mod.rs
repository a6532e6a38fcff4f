//! Core types: ids, players, configuration, errors, actions, events, phases,
//! state, RNG.
//!
//! Everything here is plain data. The rules that move it live in `game`.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use entity::InstanceId;
pub use error::{ConfigError, GameError, IllegalPlay, Result, SnapshotError};
pub use event::GameEvent;
pub use phase::{Demand, PendingAction, Phase};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, PlayerArea, PublicState};
