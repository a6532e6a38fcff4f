//! Game state: public and private information.
//!
//! ## PublicState
//!
//! Observable information for all players:
//! - Phase, turn, active player, plays used this turn
//! - Action history and event log
//!
//! ## GameState
//!
//! Complete game state including:
//! - Public state
//! - Per-player hand, bank and property board
//! - Draw pile, discard pile, pending action
//! - RNG
//!
//! History and log are `im` vectors, so cloning a state for lookahead or a
//! transactional apply does not copy them.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::error::{GameError, Result};
use super::event::GameEvent;
use super::phase::{Phase, PendingAction};
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::Card;
use crate::zones::{Bank, DiscardPile, DrawPile, Hand, PropertyBoard};

/// Public game state - observable by all players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicState {
    player_count: usize,

    /// Current phase.
    pub phase: Phase,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Action sequence within turn.
    pub action_sequence: u32,

    /// Player whose turn it is.
    pub active_player: PlayerId,

    /// Cards played from hand this turn.
    pub plays_used: usize,

    /// Every accepted action, oldest first.
    pub action_history: Vector<ActionRecord>,

    /// Every event, oldest first.
    pub event_log: Vector<GameEvent>,
}

impl PublicState {
    /// Turn 1, player 0 to act. The rules set the phase when the turn starts.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            phase: Phase::Draw { remaining: 0 },
            turn_number: 1,
            action_sequence: 0,
            active_player: PlayerId::new(0),
            plays_used: 0,
            action_history: Vector::new(),
            event_log: Vector::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Pass the turn to `player`, resetting the per-turn counters.
    pub fn advance_turn(&mut self, player: PlayerId) {
        self.turn_number += 1;
        self.action_sequence = 0;
        self.plays_used = 0;
        self.active_player = player;
    }

    pub fn record_action(&mut self, record: ActionRecord) {
        self.action_history.push_back(record);
    }

    /// Get the next action sequence number and increment.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.action_sequence;
        self.action_sequence += 1;
        seq
    }

    pub fn log(&mut self, events: &[GameEvent]) {
        self.event_log.extend(events.iter().cloned());
    }
}

/// Everything one player owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerArea {
    pub hand: Hand,
    pub bank: Bank,
    pub board: PropertyBoard,
}

impl PlayerArea {
    /// Value of everything that can be used to pay.
    #[must_use]
    pub fn assets(&self) -> u32 {
        self.bank.total() + self.board.all_cards().map(|c| c.value).sum::<u32>()
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.bank.len() + self.board.card_count()
    }
}

/// Full game state including private information.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Public state (observable by all).
    pub public: PublicState,

    /// Per-player hand, bank and board.
    pub players: PlayerMap<PlayerArea>,

    pub draw_pile: DrawPile,

    pub discard: DiscardPile,

    /// Action card resolving against its targets, if any.
    pub pending: Option<PendingAction>,

    /// Deterministic RNG for reshuffles.
    pub rng: GameRng,
}

impl GameState {
    /// A game with empty hands and `deck` as the draw pile (top = end).
    #[must_use]
    pub fn new(player_count: usize, deck: Vec<Card>, rng: GameRng) -> Self {
        Self {
            public: PublicState::new(player_count),
            players: PlayerMap::with_default(player_count),
            draw_pile: DrawPile::new(deck),
            discard: DiscardPile::new(),
            pending: None,
            rng,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.public.player_count()
    }

    /// Turn a raw seat index into a `PlayerId`.
    pub fn player(&self, index: usize) -> Result<PlayerId> {
        self.players.player(index).ok_or(GameError::InvalidPlayerIndex {
            index,
            player_count: self.player_count(),
        })
    }

    #[must_use]
    pub fn area(&self, player: PlayerId) -> &PlayerArea {
        &self.players[player]
    }

    pub fn area_mut(&mut self, player: PlayerId) -> &mut PlayerArea {
        &mut self.players[player]
    }

    /// Cards left to draw, counting the discard pile that refills the draw pile.
    #[must_use]
    pub fn supply_size(&self) -> usize {
        self.draw_pile.len() + self.discard.len()
    }

    /// Draw the top card into `player`'s hand.
    ///
    /// An empty draw pile is first refilled by shuffling the discard pile.
    /// Fails with `DeckExhausted` when both are empty.
    pub fn draw_card(&mut self, player: PlayerId, events: &mut Vec<GameEvent>) -> Result<Card> {
        if self.draw_pile.is_empty() {
            if self.discard.is_empty() {
                return Err(GameError::DeckExhausted);
            }
            let cards = self.discard.take_all();
            events.push(GameEvent::DrawPileRefilled { cards: cards.len() });
            self.draw_pile.refill(cards, &mut self.rng);
        }

        let card = self.draw_pile.draw().ok_or(GameError::DeckExhausted)?;
        self.players[player].hand.add(card);
        events.push(GameEvent::CardDrawn { player, card });
        Ok(card)
    }

    /// Hand sizes of every player (public knowledge).
    #[must_use]
    pub fn hand_sizes(&self) -> Vec<usize> {
        self.players.values().map(|area| area.hand.len()).collect()
    }

    /// Cards in every location. Constant for the life of a game.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len()
            + self.discard.len()
            + self.players.values().map(PlayerArea::card_count).sum::<usize>()
    }
}
