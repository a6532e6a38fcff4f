//! Paying a charge.
//!
//! The payer picks cards from their bank and board. No change is given, so
//! a payment may exceed the amount owed. A payment below the amount owed is
//! only accepted when it uses every card the payer could have paid with.
//! Zero-value cards (the any-color wilds) can never be used to pay.
//!
//! Money and buildings go to the receiver's bank. Properties go to the
//! receiver's board under the color they sat under. Sets the payer breaks
//! lose their buildings to the payer's bank.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::play::bank_buildings;
use super::MonopolyDeal;
use crate::cards::Card;
use crate::core::{Demand, GameEvent, GameState, IllegalPlay, InstanceId, PlayerArea, PlayerId, Result};

/// Where a payment card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    Bank,
    Property,
    Building,
}

fn locate(area: &PlayerArea, id: InstanceId) -> Option<(Card, Source)> {
    if let Some(card) = area.bank.find(id) {
        return Some((*card, Source::Bank));
    }
    if let Some((card, _)) = area.board.properties().find(|(c, _)| c.id == id) {
        return Some((*card, Source::Property));
    }
    area.board.find(id).map(|card| (*card, Source::Building))
}

/// Every card `area` could pay with, in canonical order: bank notes largest
/// first, then properties, then buildings.
fn payable(area: &PlayerArea) -> Vec<Card> {
    let mut bank: Vec<Card> = area.bank.iter().copied().collect();
    bank.sort_by(|a, b| b.value.cmp(&a.value).then(a.id.cmp(&b.id)));

    let properties = area.board.properties().map(|(c, _)| *c);
    let buildings = area
        .board
        .sets()
        .flat_map(|set| set.house().into_iter().chain(set.hotel()))
        .copied();

    bank.into_iter()
        .chain(properties)
        .chain(buildings)
        .filter(|c| c.value > 0)
        .collect()
}

/// The payment `legal_actions` offers for a charge of `owed`.
///
/// Takes cards in canonical order until the total reaches `owed`, or takes
/// every payable card if it never does.
#[must_use]
pub fn canonical_payment(area: &PlayerArea, owed: u32) -> SmallVec<[InstanceId; 4]> {
    let mut total = 0;
    let mut cards = SmallVec::new();
    for card in payable(area) {
        if total >= owed {
            break;
        }
        total += card.value;
        cards.push(card.id);
    }
    cards
}

impl MonopolyDeal {
    pub(super) fn pay(
        &self,
        state: &mut GameState,
        player: PlayerId,
        cards: &[InstanceId],
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let Some(pending) = state.pending.clone() else {
            return Err(IllegalPlay::WrongPhase {
                action: "pay",
                phase: state.public.phase,
            }
            .into());
        };
        let Demand::Charge { amount: owed } = pending.demand else {
            return Err(IllegalPlay::WrongPhase {
                action: "pay",
                phase: state.public.phase,
            }
            .into());
        };
        let receiver = pending.source;

        let mut seen = FxHashSet::default();
        let mut chosen = Vec::with_capacity(cards.len());
        for &id in cards {
            if !seen.insert(id) {
                return Err(IllegalPlay::DuplicateCard(id).into());
            }
            match locate(state.area(player), id) {
                Some((card, source)) if card.value > 0 => chosen.push((card, source)),
                _ => return Err(IllegalPlay::NotPayable(id).into()),
            }
        }

        let paid: u32 = chosen.iter().map(|(c, _)| c.value).sum();
        if paid < owed {
            let held_back = payable(state.area(player)).iter().any(|c| !seen.contains(&c.id));
            if held_back {
                return Err(IllegalPlay::Underpaid { paid, owed }.into());
            }
        }

        for &(card, source) in &chosen {
            match source {
                Source::Bank => {
                    state.area_mut(player).bank.withdraw(card.id);
                    state.area_mut(receiver).bank.deposit(card);
                }
                Source::Building => {
                    state.area_mut(player).board.remove_building(card.id);
                    state.area_mut(receiver).bank.deposit(card);
                }
                Source::Property => {
                    if let Some((card, color)) = state.area_mut(player).board.remove_property(card.id) {
                        state.area_mut(receiver).board.place(card, color);
                    }
                }
            }
        }
        events.push(GameEvent::PaymentMade {
            from: player,
            to: receiver,
            cards: chosen.iter().map(|(c, _)| *c).collect(),
            total: paid,
        });

        let stripped = state.area_mut(player).board.settle();
        bank_buildings(state, player, stripped, events);

        self.next_target(state);
        Ok(())
    }
}
