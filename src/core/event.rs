//! Game events.
//!
//! Every state change the rules make is reported as a `GameEvent`. `apply`
//! returns the events one action produced, and the game keeps the full log.
//! A UI animates from events; a replay viewer reads the log.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::PlayerId;
use crate::cards::{ActionKind, Card, Color};

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnStarted { player: PlayerId, turn: u32 },
    CardDrawn { player: PlayerId, card: Card },
    /// The discard pile was shuffled to form a new draw pile.
    DrawPileRefilled { cards: usize },
    /// Both piles are empty; the draw step was skipped.
    SupplyExhausted { player: PlayerId },
    CardBanked { player: PlayerId, card: Card },
    PropertyPlayed { player: PlayerId, card: Card, color: Color },
    BuildingPlayed { player: PlayerId, card: Card, color: Color },
    WildMoved { player: PlayerId, card: InstanceId, from: Color, to: Color },
    /// An action card was played (and sits in the discard pile).
    ActionPlayed { player: PlayerId, card: Card, kind: ActionKind },
    /// A rent card was played for `color`.
    RentPlayed { player: PlayerId, card: Card, color: Color },
    /// A charge is now owed.
    Charged { from: PlayerId, to: PlayerId, amount: u32 },
    JustSayNo { player: PlayerId, card: Card },
    /// The pending action against `target` was cancelled.
    ActionCancelled { source: PlayerId, target: PlayerId },
    /// `cards` moved from `from` to `to`, worth `total`.
    PaymentMade { from: PlayerId, to: PlayerId, cards: Vec<Card>, total: u32 },
    PropertyStolen { from: PlayerId, to: PlayerId, card: Card },
    PropertiesSwapped { player: PlayerId, target: PlayerId, gave: Card, took: Card },
    SetStolen { from: PlayerId, to: PlayerId, color: Color, cards: Vec<Card> },
    /// Buildings knocked off an incomplete set, or left over after a set was
    /// stolen, moved to `player`'s bank.
    BuildingsBanked { player: PlayerId, cards: Vec<Card> },
    CardDiscarded { player: PlayerId, card: Card },
    TurnEnded { player: PlayerId },
    GameWon { player: PlayerId },
    /// The turn limit was reached without a winner.
    GameDrawn { turn: u32 },
}

impl GameEvent {
    /// The player this event is mainly about, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnStarted { player, .. }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::SupplyExhausted { player }
            | GameEvent::CardBanked { player, .. }
            | GameEvent::PropertyPlayed { player, .. }
            | GameEvent::BuildingPlayed { player, .. }
            | GameEvent::WildMoved { player, .. }
            | GameEvent::ActionPlayed { player, .. }
            | GameEvent::RentPlayed { player, .. }
            | GameEvent::JustSayNo { player, .. }
            | GameEvent::PropertiesSwapped { player, .. }
            | GameEvent::BuildingsBanked { player, .. }
            | GameEvent::CardDiscarded { player, .. }
            | GameEvent::TurnEnded { player }
            | GameEvent::GameWon { player } => Some(*player),
            GameEvent::Charged { from, .. }
            | GameEvent::PaymentMade { from, .. }
            | GameEvent::PropertyStolen { from, .. }
            | GameEvent::SetStolen { from, .. } => Some(*from),
            GameEvent::ActionCancelled { target, .. } => Some(*target),
            GameEvent::DrawPileRefilled { .. } | GameEvent::GameDrawn { .. } => None,
        }
    }
}
