//! Player actions.
//!
//! Every move in the game is an `Action` naming the cards it uses by
//! `InstanceId`, never by hand position, so an action stays meaningful while
//! other cards move around it. Actions are plain data: the rules decide
//! whether one is legal.
//!
//! ## Example
//!
//! ```
//! use monopoly_deal::cards::Color;
//! use monopoly_deal::core::{Action, InstanceId, PlayerId};
//!
//! let bank = Action::Bank { card: InstanceId(12) };
//! let sly = Action::SlyDeal {
//!     card: InstanceId(40),
//!     target: PlayerId::new(1),
//!     take: InstanceId(7),
//! };
//! let wild = Action::MoveWild { card: InstanceId(33), color: Color::Red };
//!
//! assert!(bank.uses_play());
//! assert!(sly.uses_play());
//! assert!(!wild.uses_play());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::InstanceId;
use super::player::PlayerId;
use crate::cards::Color;

/// A complete game action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Draw one card during the draw step.
    Draw,
    /// Put a non-property card into the bank for its value.
    Bank { card: InstanceId },
    /// Put a property (or wild) on the board under `color`.
    PlayProperty { card: InstanceId, color: Color },
    /// Put a house or hotel on the complete set of `color`.
    PlayBuilding { card: InstanceId, color: Color },
    /// Play Pass Go: draw two cards.
    PassGo { card: InstanceId },
    /// Charge one opponent 5.
    DebtCollector { card: InstanceId, target: PlayerId },
    /// Charge every opponent 2.
    Birthday { card: InstanceId },
    /// Charge rent for `color`. Two-color rent charges every opponent and
    /// takes no target; any-color rent needs one. Each card in `doubles` is a
    /// Double The Rent played along with it.
    PlayRent {
        card: InstanceId,
        color: Color,
        target: Option<PlayerId>,
        doubles: SmallVec<[InstanceId; 2]>,
    },
    /// Take `take` from `target`'s board.
    SlyDeal {
        card: InstanceId,
        target: PlayerId,
        take: InstanceId,
    },
    /// Swap own `give` for `target`'s `take`.
    ForcedDeal {
        card: InstanceId,
        target: PlayerId,
        give: InstanceId,
        take: InstanceId,
    },
    /// Take `target`'s complete set of `color`.
    DealBreaker {
        card: InstanceId,
        target: PlayerId,
        color: Color,
    },
    /// Move a wild already on the board to another of its colors.
    MoveWild { card: InstanceId, color: Color },
    /// Finish playing for this turn.
    EndTurn,
    /// Discard a card while over the hand limit.
    Discard { card: InstanceId },
    /// Let a pending action go through.
    Accept,
    /// Cancel a pending action (or a Just Say No against you).
    JustSayNo { card: InstanceId },
    /// Pay a pending charge with these bank and board cards.
    Pay { cards: SmallVec<[InstanceId; 4]> },
}

impl Action {
    /// Short name, used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Draw => "draw",
            Action::Bank { .. } => "bank",
            Action::PlayProperty { .. } => "play property",
            Action::PlayBuilding { .. } => "play building",
            Action::PassGo { .. } => "pass go",
            Action::DebtCollector { .. } => "debt collector",
            Action::Birthday { .. } => "birthday",
            Action::PlayRent { .. } => "rent",
            Action::SlyDeal { .. } => "sly deal",
            Action::ForcedDeal { .. } => "forced deal",
            Action::DealBreaker { .. } => "deal breaker",
            Action::MoveWild { .. } => "move wild",
            Action::EndTurn => "end turn",
            Action::Discard { .. } => "discard",
            Action::Accept => "accept",
            Action::JustSayNo { .. } => "just say no",
            Action::Pay { .. } => "pay",
        }
    }

    /// Plays from hand this action counts against the per-turn limit.
    #[must_use]
    pub fn plays_used(&self) -> usize {
        match self {
            Action::Bank { .. }
            | Action::PlayProperty { .. }
            | Action::PlayBuilding { .. }
            | Action::PassGo { .. }
            | Action::DebtCollector { .. }
            | Action::Birthday { .. }
            | Action::SlyDeal { .. }
            | Action::ForcedDeal { .. }
            | Action::DealBreaker { .. } => 1,
            Action::PlayRent { doubles, .. } => 1 + doubles.len(),
            Action::Draw
            | Action::MoveWild { .. }
            | Action::EndTurn
            | Action::Discard { .. }
            | Action::Accept
            | Action::JustSayNo { .. }
            | Action::Pay { .. } => 0,
        }
    }

    #[must_use]
    pub fn uses_play(&self) -> bool {
        self.plays_used() > 0
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Bank { card }
            | Action::PassGo { card }
            | Action::Birthday { card }
            | Action::Discard { card }
            | Action::JustSayNo { card } => write!(f, "{} {}", self.name(), card),
            Action::PlayProperty { card, color }
            | Action::PlayBuilding { card, color }
            | Action::MoveWild { card, color } => write!(f, "{} {} as {}", self.name(), card, color),
            Action::DebtCollector { card, target } => write!(f, "{} {} on {}", self.name(), card, target),
            Action::PlayRent { card, color, target, doubles } => {
                write!(f, "{} {} for {}", self.name(), card, color)?;
                if let Some(target) = target {
                    write!(f, " on {}", target)?;
                }
                if !doubles.is_empty() {
                    write!(f, " x{}", 1u32 << doubles.len())?;
                }
                Ok(())
            }
            Action::SlyDeal { card, target, take } => {
                write!(f, "{} {} taking {} from {}", self.name(), card, take, target)
            }
            Action::ForcedDeal { card, target, give, take } => {
                write!(f, "{} {} giving {} for {} from {}", self.name(), card, give, take, target)
            }
            Action::DealBreaker { card, target, color } => {
                write!(f, "{} {} taking {} from {}", self.name(), card, color, target)
            }
            Action::Pay { cards } => {
                write!(f, "pay with")?;
                for card in cards {
                    write!(f, " {}", card)?;
                }
                Ok(())
            }
            Action::Draw | Action::EndTurn | Action::Accept => f.write_str(self.name()),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
