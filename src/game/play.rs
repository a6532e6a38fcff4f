//! Cards played from hand during the play phase, and wild moves.
//!
//! Banking, properties, buildings and Pass Go take effect at once. Cards that
//! target other players (rent, Debt Collector, Birthday, Sly Deal, Forced
//! Deal, Deal Breaker) go to the discard pile and open a `PendingAction`
//! that the targets answer in the respond phase.

use super::MonopolyDeal;
use crate::cards::{ActionKind, Card, CardKind, Color, ColorChoice};
use crate::core::{
    Demand, GameError, GameEvent, GameState, IllegalPlay, InstanceId, PendingAction, Phase, PlayerId, Result,
};

/// What Debt Collector charges.
pub const DEBT_COLLECTOR_AMOUNT: u32 = 5;
/// What It's My Birthday charges each opponent.
pub const BIRTHDAY_AMOUNT: u32 = 2;
/// Cards drawn by Pass Go.
pub const PASS_GO_DRAWS: usize = 2;

fn take_from_hand(state: &mut GameState, player: PlayerId, card: InstanceId) -> Result<Card> {
    state
        .area_mut(player)
        .hand
        .remove(card)
        .ok_or_else(|| IllegalPlay::CardNotInHand(card).into())
}

/// Take an action card of `kind` from hand and put it on the discard pile.
fn discard_action(
    state: &mut GameState,
    player: PlayerId,
    card: InstanceId,
    kind: ActionKind,
    events: &mut Vec<GameEvent>,
) -> Result<Card> {
    let taken = take_from_hand(state, player, card)?;
    if !taken.is_action(kind) {
        return Err(IllegalPlay::WrongCardKind {
            card,
            expected: kind.name(),
        }
        .into());
    }
    state.discard.push(taken);
    events.push(GameEvent::ActionPlayed {
        player,
        card: taken,
        kind,
    });
    Ok(taken)
}

/// A target must exist and must not be the acting player.
pub(super) fn check_target(state: &GameState, player: PlayerId, target: PlayerId) -> Result<()> {
    if target.index() >= state.player_count() {
        return Err(GameError::InvalidPlayerIndex {
            index: target.index(),
            player_count: state.player_count(),
        });
    }
    if target == player {
        return Err(IllegalPlay::InvalidTarget(target).into());
    }
    Ok(())
}

/// A property on `owner`'s board that a Sly or Forced Deal may take.
fn check_takeable(state: &GameState, owner: PlayerId, card: InstanceId) -> Result<()> {
    let board = &state.area(owner).board;
    if board.color_of(card).is_none() {
        return Err(IllegalPlay::NotOnBoard { player: owner, card }.into());
    }
    if board.is_protected(card) {
        return Err(IllegalPlay::PropertyProtected(card).into());
    }
    Ok(())
}

fn open_pending(state: &mut GameState, player: PlayerId, card: Card, demand: Demand, targets: Vec<PlayerId>) {
    if let Some(pending) = PendingAction::new(player, card, demand, targets) {
        state.pending = Some(pending);
        state.public.phase = Phase::Respond;
    }
}

impl MonopolyDeal {
    pub(super) fn bank(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let taken = take_from_hand(state, player, card)?;
        if taken.kind.is_property() {
            return Err(IllegalPlay::CannotBankProperty(card).into());
        }
        state.area_mut(player).bank.deposit(taken);
        events.push(GameEvent::CardBanked { player, card: taken });
        Ok(())
    }

    pub(super) fn play_property(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        color: Color,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let taken = take_from_hand(state, player, card)?;
        let allowed = match taken.kind {
            CardKind::Property(c) => c == color,
            CardKind::Wild(choice) => choice.allows(color),
            _ => {
                return Err(IllegalPlay::WrongCardKind {
                    card,
                    expected: "property",
                }
                .into())
            }
        };
        if !allowed {
            return Err(IllegalPlay::ColorNotAllowed { card, color }.into());
        }
        state.area_mut(player).board.place(taken, color);
        events.push(GameEvent::PropertyPlayed {
            player,
            card: taken,
            color,
        });
        Ok(())
    }

    pub(super) fn play_building(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        color: Color,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let taken = take_from_hand(state, player, card)?;
        if !taken.kind.action().is_some_and(ActionKind::is_building) {
            return Err(IllegalPlay::WrongCardKind {
                card,
                expected: "building",
            }
            .into());
        }
        if !color.allows_buildings() {
            return Err(IllegalPlay::BuildingNotAllowed { color }.into());
        }
        let board = &mut state.area_mut(player).board;
        match board.set(color) {
            None => return Err(IllegalPlay::NoProperties { player, color }.into()),
            Some(set) if !set.is_complete() => return Err(IllegalPlay::SetNotComplete { player, color }.into()),
            Some(_) => {}
        }
        board
            .add_building(taken, color)
            .map_err(|_| IllegalPlay::BuildingNotAllowed { color })?;
        events.push(GameEvent::BuildingPlayed {
            player,
            card: taken,
            color,
        });
        Ok(())
    }

    pub(super) fn pass_go(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        discard_action(state, player, card, ActionKind::PassGo, events)?;
        for _ in 0..PASS_GO_DRAWS {
            match state.draw_card(player, events) {
                Ok(_) => {}
                Err(GameError::DeckExhausted) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    pub(super) fn debt_collector(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        target: PlayerId,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        check_target(state, player, target)?;
        let played = discard_action(state, player, card, ActionKind::DebtCollector, events)?;
        let demand = Demand::Charge {
            amount: DEBT_COLLECTOR_AMOUNT,
        };
        open_pending(state, player, played, demand, vec![target]);
        Ok(())
    }

    pub(super) fn birthday(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let played = discard_action(state, player, card, ActionKind::Birthday, events)?;
        let targets = player.others(state.player_count()).collect();
        let demand = Demand::Charge {
            amount: BIRTHDAY_AMOUNT,
        };
        open_pending(state, player, played, demand, targets);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn play_rent(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        color: Color,
        target: Option<PlayerId>,
        doubles: &[InstanceId],
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let rent = take_from_hand(state, player, card)?;
        let CardKind::Rent(choice) = rent.kind else {
            return Err(IllegalPlay::WrongCardKind { card, expected: "rent" }.into());
        };
        if !choice.allows(color) {
            return Err(IllegalPlay::ColorNotAllowed { card, color }.into());
        }

        let targets: Vec<PlayerId> = match (choice, target) {
            (ColorChoice::Pair(..), None) => player.others(state.player_count()).collect(),
            (ColorChoice::Any, Some(target)) => {
                check_target(state, player, target)?;
                vec![target]
            }
            _ => return Err(IllegalPlay::RentTargetMismatch.into()),
        };

        let base = state.area(player).board.rent_for(color);
        if base == 0 {
            return Err(IllegalPlay::NoProperties { player, color }.into());
        }

        state.discard.push(rent);
        events.push(GameEvent::RentPlayed {
            player,
            card: rent,
            color,
        });

        let mut amount = base;
        for (i, double) in doubles.iter().enumerate() {
            if doubles[..i].contains(double) || *double == card {
                return Err(IllegalPlay::DuplicateCard(*double).into());
            }
            discard_action(state, player, *double, ActionKind::DoubleTheRent, events)?;
            amount = amount.saturating_mul(2);
        }

        open_pending(state, player, rent, Demand::Charge { amount }, targets);
        Ok(())
    }

    pub(super) fn sly_deal(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        target: PlayerId,
        take: InstanceId,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        check_target(state, player, target)?;
        check_takeable(state, target, take)?;
        let played = discard_action(state, player, card, ActionKind::SlyDeal, events)?;
        open_pending(state, player, played, Demand::SlyDeal { take }, vec![target]);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn forced_deal(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        target: PlayerId,
        give: InstanceId,
        take: InstanceId,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        check_target(state, player, target)?;
        if state.area(player).board.color_of(give).is_none() {
            return Err(IllegalPlay::NotOnBoard { player, card: give }.into());
        }
        check_takeable(state, target, take)?;
        let played = discard_action(state, player, card, ActionKind::ForcedDeal, events)?;
        open_pending(state, player, played, Demand::ForcedDeal { give, take }, vec![target]);
        Ok(())
    }

    pub(super) fn deal_breaker(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        target: PlayerId,
        color: Color,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        check_target(state, player, target)?;
        let complete = state
            .area(target)
            .board
            .set(color)
            .is_some_and(|set| set.is_complete());
        if !complete {
            return Err(IllegalPlay::SetNotComplete { player: target, color }.into());
        }
        let played = discard_action(state, player, card, ActionKind::DealBreaker, events)?;
        open_pending(state, player, played, Demand::DealBreaker { color }, vec![target]);
        Ok(())
    }

    /// Move a wild on the player's own board to another of its colors.
    ///
    /// Free: it does not count as a play. A set the wild leaves may stop
    /// being complete, which sends its buildings to the bank.
    pub(super) fn move_wild(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        color: Color,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let board = &mut state.area_mut(player).board;
        let (wild, from) = board
            .remove_property(card)
            .ok_or(IllegalPlay::NotOnBoard { player, card })?;
        let CardKind::Wild(choice) = wild.kind else {
            return Err(IllegalPlay::NotAWild(card).into());
        };
        if from == color || !choice.allows(color) {
            return Err(IllegalPlay::ColorNotAllowed { card, color }.into());
        }

        board.place(wild, color);
        let stripped = board.settle();
        events.push(GameEvent::WildMoved {
            player,
            card,
            from,
            to: color,
        });
        bank_buildings(state, player, stripped, events);
        Ok(())
    }
}

/// Move buildings knocked off a set into their owner's bank.
pub(super) fn bank_buildings(
    state: &mut GameState,
    player: PlayerId,
    buildings: Vec<Card>,
    events: &mut Vec<GameEvent>,
) {
    if buildings.is_empty() {
        return;
    }
    let bank = &mut state.area_mut(player).bank;
    for card in &buildings {
        bank.deposit(*card);
    }
    events.push(GameEvent::BuildingsBanked {
        player,
        cards: buildings,
    });
}
