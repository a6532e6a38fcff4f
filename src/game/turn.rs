//! Turn flow: the draw step, ending a turn, discarding down to the hand
//! limit, and the win and turn-limit checks.

use super::MonopolyDeal;
use crate::core::{GameEvent, GameState, IllegalPlay, InstanceId, Phase, PlayerId, Result};

impl MonopolyDeal {
    /// Put the active player into their draw step.
    ///
    /// A player who starts the turn with no cards draws
    /// `empty_hand_draw_count` instead of `draw_count`. With nothing left to
    /// draw the step is skipped.
    pub(super) fn start_turn(&self, state: &mut GameState, events: &mut Vec<GameEvent>) {
        let player = state.public.active_player;
        let remaining = if state.area(player).hand.is_empty() {
            self.config.empty_hand_draw_count
        } else {
            self.config.draw_count
        };

        events.push(GameEvent::TurnStarted {
            player,
            turn: state.public.turn_number,
        });
        state.public.phase = Phase::Draw { remaining };
        if state.supply_size() == 0 {
            events.push(GameEvent::SupplyExhausted { player });
            state.public.phase = Phase::Play;
        }
    }

    pub(super) fn draw(&self, state: &mut GameState, player: PlayerId, events: &mut Vec<GameEvent>) -> Result<()> {
        let Phase::Draw { remaining } = state.public.phase else {
            return Err(IllegalPlay::WrongPhase {
                action: "draw",
                phase: state.public.phase,
            }
            .into());
        };

        state.draw_card(player, events)?;
        let remaining = remaining.saturating_sub(1);
        state.public.phase = if remaining == 0 {
            Phase::Play
        } else if state.supply_size() == 0 {
            events.push(GameEvent::SupplyExhausted { player });
            Phase::Play
        } else {
            Phase::Draw { remaining }
        };
        Ok(())
    }

    pub(super) fn end_turn(&self, state: &mut GameState, events: &mut Vec<GameEvent>) {
        let player = state.public.active_player;
        if state.area(player).hand.len() > self.config.hand_limit {
            state.public.phase = Phase::Discard;
        } else {
            self.finish_turn(state, events);
        }
    }

    pub(super) fn discard(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card: InstanceId,
        events: &mut Vec<GameEvent>,
    ) -> Result<()> {
        let limit = self.config.hand_limit;
        if state.area(player).hand.len() <= limit {
            return Err(IllegalPlay::HandWithinLimit { limit }.into());
        }

        let card = state
            .area_mut(player)
            .hand
            .remove(card)
            .ok_or(IllegalPlay::CardNotInHand(card))?;
        state.discard.push(card);
        events.push(GameEvent::CardDiscarded { player, card });

        if state.area(player).hand.len() <= limit {
            self.finish_turn(state, events);
        }
        Ok(())
    }

    /// Hand the turn to the next seat, or end the game at the turn limit.
    fn finish_turn(&self, state: &mut GameState, events: &mut Vec<GameEvent>) {
        let player = state.public.active_player;
        events.push(GameEvent::TurnEnded { player });

        let turn = state.public.turn_number;
        if self.config.max_turns.is_some_and(|max| turn >= max) {
            state.public.phase = Phase::GameOver { winner: None };
            events.push(GameEvent::GameDrawn { turn });
            return;
        }

        let next = player.next(state.player_count());
        state.public.advance_turn(next);
        self.start_turn(state, events);
    }

    /// End the game if someone holds enough complete sets.
    pub(super) fn check_winner(&self, state: &mut GameState, events: &mut Vec<GameEvent>) {
        if state.public.phase.is_over() {
            return;
        }
        let active = state.public.active_player;
        let winner = std::iter::once(active)
            .chain(active.others(state.player_count()))
            .find(|&p| state.area(p).board.complete_sets() >= self.config.sets_to_win);

        if let Some(player) = winner {
            state.pending = None;
            state.public.phase = Phase::GameOver { winner: Some(player) };
            events.push(GameEvent::GameWon { player });
        }
    }
}
