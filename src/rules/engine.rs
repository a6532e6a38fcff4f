//! Rules engine trait.
//!
//! A `RulesEngine` knows:
//! - Who must act next
//! - What actions are legal
//! - How actions modify state
//! - When the game is over

use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::event::GameEvent;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `acting_player`: `None` only once the game is over
/// - `legal_actions`: empty if the player cannot act
/// - `apply_action`: deterministic; on error the state is unchanged
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// The player whose decision the game is waiting on.
    fn acting_player(&self, state: &GameState) -> Option<PlayerId>;

    /// Actions `player` may take now.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Apply an action, returning the events it produced.
    fn apply_action(&self, state: &mut GameState, player: PlayerId, action: &Action) -> Result<Vec<GameEvent>>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check an action by applying it to a scratch copy of the state.
    fn is_legal(&self, state: &GameState, player: PlayerId, action: &Action) -> bool {
        let mut scratch = state.clone();
        self.apply_action(&mut scratch, player, action).is_ok()
    }
}
