//! Answering a pending action: accepting it, refusing it with Just Say No,
//! and carrying out what it demands.

use super::play::bank_buildings;
use super::MonopolyDeal;
use crate::cards::ActionKind;
use crate::core::{Demand, GameEvent, GameState, IllegalPlay, InstanceId, Phase, PlayerId, Result};

fn no_pending(state: &GameState) -> IllegalPlay {
    IllegalPlay::WrongPhase {
        action: "respond",
        phase: state.public.phase,
    }
}

impl MonopolyDeal {
    /// The responder lets the current state of the exchange stand.
    ///
    /// If the action stands, it is carried out against the current target.
    /// Otherwise the last Just Say No wins and the action is cancelled for
    /// that target.
    pub(super) fn accept(&self, state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<()> {
        let pending = state.pending.clone().ok_or_else(|| no_pending(state))?;
        if pending.stands() {
            self.carry_out(state, events)
        } else {
            events.push(GameEvent::ActionCancelled {
                source: pending.source,
                target: pending.target,
            });
            self.next_target(state);
            Ok(())
        }
    }

    pub(super) fn just_say_no(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let taken = state
            .area_mut(player)
            .hand
            .remove(card)
            .ok_or(IllegalPlay::CardNotInHand(card))?;
        if !taken.is_action(ActionKind::JustSayNo) {
            return Err(IllegalPlay::WrongCardKind {
                card,
                expected: ActionKind::JustSayNo.name(),
            }
            .into());
        }
        let pending = state.pending.as_mut().ok_or(IllegalPlay::WrongPhase {
            action: "just say no",
            phase: Phase::Respond,
        })?;
        pending.refuse();
        state.discard.push(taken);
        events.push(GameEvent::JustSayNo { player, card: taken });
        Ok(())
    }

    /// Apply the pending demand to the current target.
    fn carry_out(&self, state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<()> {
        let pending = state.pending.clone().ok_or_else(|| no_pending(state))?;
        let (source, target) = (pending.source, pending.target);

        match pending.demand {
            Demand::Charge { amount } => {
                events.push(GameEvent::Charged {
                    from: target,
                    to: source,
                    amount,
                });
                if amount > 0 && state.area(target).assets() > 0 {
                    state.public.phase = Phase::Pay;
                    return Ok(());
                }
                events.push(GameEvent::PaymentMade {
                    from: target,
                    to: source,
                    cards: Vec::new(),
                    total: 0,
                });
            }
            Demand::SlyDeal { take } => {
                let (card, color) = state
                    .area_mut(target)
                    .board
                    .remove_property(take)
                    .ok_or(IllegalPlay::NotOnBoard { player: target, card: take })?;
                state.area_mut(source).board.place(card, color);
                events.push(GameEvent::PropertyStolen {
                    from: target,
                    to: source,
                    card,
                });
                let stripped = state.area_mut(target).board.settle();
                bank_buildings(state, target, stripped, events);
            }
            Demand::ForcedDeal { give, take } => {
                let (took, took_color) = state
                    .area_mut(target)
                    .board
                    .remove_property(take)
                    .ok_or(IllegalPlay::NotOnBoard { player: target, card: take })?;
                let (gave, gave_color) = state
                    .area_mut(source)
                    .board
                    .remove_property(give)
                    .ok_or(IllegalPlay::NotOnBoard { player: source, card: give })?;
                state.area_mut(source).board.place(took, took_color);
                state.area_mut(target).board.place(gave, gave_color);
                events.push(GameEvent::PropertiesSwapped {
                    player: source,
                    target,
                    gave,
                    took,
                });
                for owner in [source, target] {
                    let stripped = state.area_mut(owner).board.settle();
                    bank_buildings(state, owner, stripped, events);
                }
            }
            Demand::DealBreaker { color } => {
                let set = state
                    .area_mut(target)
                    .board
                    .take_set(color)
                    .ok_or(IllegalPlay::SetNotComplete { player: target, color })?;
                let cards = set.cards().copied().collect();
                let leftover = state.area_mut(source).board.absorb_set(set);
                events.push(GameEvent::SetStolen {
                    from: target,
                    to: source,
                    color,
                    cards,
                });
                bank_buildings(state, source, leftover, events);
            }
        }

        self.next_target(state);
        Ok(())
    }

    /// Move to the next target, or back to the play phase when none remain.
    pub(super) fn next_target(&self, state: &mut GameState) {
        let more = state.pending.as_mut().is_some_and(|pending| pending.advance());
        if more {
            state.public.phase = Phase::Respond;
        } else {
            state.pending = None;
            state.public.phase = Phase::Play;
        }
    }
}
