//! Binary snapshots of a game in progress.
//!
//! A snapshot holds the configuration and the full state, RNG position
//! included, so a restored game makes the same shuffles the original would.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, SnapshotError};

#[derive(Serialize)]
struct SnapshotRef<'a> {
    config: &'a GameConfig,
    state: &'a GameState,
}

#[derive(Deserialize)]
struct Snapshot {
    config: GameConfig,
    state: GameState,
}

/// Encode `config` and `state` with bincode.
pub fn encode(config: &GameConfig, state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(&SnapshotRef { config, state })?)
}

/// Decode a snapshot, rejecting one whose config fails validation.
pub fn decode(bytes: &[u8]) -> Result<(GameConfig, GameState), SnapshotError> {
    let snapshot: Snapshot = bincode::deserialize(bytes)?;
    snapshot.config.validate()?;
    Ok((snapshot.config, snapshot.state))
}
