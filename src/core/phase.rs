//! Turn phases and in-flight action cards.
//!
//! ## Phases
//!
//! ```text
//! Draw { remaining } --(draws done)--> Play --(EndTurn, hand <= limit)--> next Draw
//!                                        |  \
//!                                        |   (EndTurn, hand > limit) --> Discard --> next Draw
//!                                        |
//!                       (targeted action) --> Respond <--> Pay --> Play
//! ```
//!
//! `GameOver` is terminal and can be entered from any phase.
//!
//! ## Pending actions
//!
//! A targeted action card (rent, Debt Collector, Birthday, Sly Deal, Forced
//! Deal, Deal Breaker) resolves against its targets one at a time, in seat
//! order from the acting player's left. For each target the card goes through
//! a Just Say No exchange: the target may refuse, the acting player may refuse
//! the refusal, and so on. An even number of refusals means the action goes
//! through; for charges the target then pays.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::PlayerId;
use crate::cards::{Card, Color};

/// Where the game is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The active player still has `remaining` single draws to make.
    Draw { remaining: usize },
    /// The active player may play cards.
    Play,
    /// The active player ended the turn over the hand limit and must discard.
    Discard,
    /// A player must accept or refuse a pending action.
    Respond,
    /// A target must pay a pending charge.
    Pay,
    /// The game is over. `None` means it ended without a winner.
    GameOver { winner: Option<PlayerId> },
}

impl Phase {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Phase::GameOver { .. })
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Draw { remaining } => write!(f, "draw ({} left)", remaining),
            Phase::Play => f.write_str("play"),
            Phase::Discard => f.write_str("discard"),
            Phase::Respond => f.write_str("respond"),
            Phase::Pay => f.write_str("pay"),
            Phase::GameOver { .. } => f.write_str("game over"),
        }
    }
}

/// What a pending action does to each target that lets it through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Demand {
    /// The target pays this much to the acting player.
    Charge { amount: u32 },
    /// The acting player takes this property from the target.
    SlyDeal { take: InstanceId },
    /// The acting player swaps `give` for the target's `take`.
    ForcedDeal { give: InstanceId, take: InstanceId },
    /// The acting player takes the target's complete set of this color.
    DealBreaker { color: Color },
}

/// An action card that is resolving against its targets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAction {
    /// The player who played the card.
    pub source: PlayerId,
    /// The card played (already in the discard pile).
    pub card: Card,
    pub demand: Demand,
    /// The target currently being resolved.
    pub target: PlayerId,
    /// Targets still to come, in order.
    pub queue: VecDeque<PlayerId>,
    /// Who must act next in the Just Say No exchange.
    pub responder: PlayerId,
    /// Just Say No cards played so far against the current target.
    pub refusals: u32,
}

impl PendingAction {
    /// Start resolving `demand` against `targets`, first target first.
    ///
    /// Returns `None` if there are no targets.
    #[must_use]
    pub fn new(source: PlayerId, card: Card, demand: Demand, targets: Vec<PlayerId>) -> Option<Self> {
        let mut queue: VecDeque<PlayerId> = targets.into();
        let target = queue.pop_front()?;
        Some(Self {
            source,
            card,
            demand,
            target,
            queue,
            responder: target,
            refusals: 0,
        })
    }

    /// The action currently stands: no refusal, or every refusal refused.
    #[must_use]
    pub fn stands(&self) -> bool {
        self.refusals % 2 == 0
    }

    /// Record a Just Say No by the current responder and pass the turn to
    /// the other side of the exchange.
    pub fn refuse(&mut self) {
        self.refusals += 1;
        self.responder = if self.responder == self.target {
            self.source
        } else {
            self.target
        };
    }

    /// Move on to the next target. Returns `false` when none are left.
    pub fn advance(&mut self) -> bool {
        match self.queue.pop_front() {
            Some(next) => {
                self.target = next;
                self.responder = next;
                self.refusals = 0;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{ActionKind, CardKind};

    fn birthday() -> Card {
        Card::new(InstanceId(1), CardKind::Action(ActionKind::Birthday), 2)
    }

    #[test]
    fn test_new_requires_a_target() {
        let pending = PendingAction::new(PlayerId(0), birthday(), Demand::Charge { amount: 2 }, vec![]);
        assert!(pending.is_none());
    }

    #[test]
    fn test_refusal_exchange() {
        let mut pending = PendingAction::new(
            PlayerId(0),
            birthday(),
            Demand::Charge { amount: 2 },
            vec![PlayerId(1)],
        )
        .unwrap();

        assert_eq!(pending.responder, PlayerId(1));
        assert!(pending.stands());

        pending.refuse();
        assert_eq!(pending.responder, PlayerId(0));
        assert!(!pending.stands());

        pending.refuse();
        assert_eq!(pending.responder, PlayerId(1));
        assert!(pending.stands());
    }

    #[test]
    fn test_advance_resets_exchange() {
        let mut pending = PendingAction::new(
            PlayerId(0),
            birthday(),
            Demand::Charge { amount: 2 },
            vec![PlayerId(1), PlayerId(2)],
        )
        .unwrap();

        pending.refuse();
        assert!(pending.advance());
        assert_eq!(pending.target, PlayerId(2));
        assert_eq!(pending.responder, PlayerId(2));
        assert_eq!(pending.refusals, 0);
        assert!(!pending.advance());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Draw { remaining: 2 }.to_string(), "draw (2 left)");
        assert!(Phase::GameOver { winner: None }.is_over());
        assert!(!Phase::Play.is_over());
    }
}
