//! Monopoly Deal rules.
//!
//! `MonopolyDeal` implements `RulesEngine`: it sets up a game from a
//! `GameConfig`, enumerates legal actions, and applies them. `Game` wraps the
//! rules and one `GameState` behind the API a UI calls.
//!
//! ## Applying an action
//!
//! 1. The player index must exist.
//! 2. The game must not be over, and the player must be the one the game is
//!    waiting on (the active player, or the responder/payer of a pending
//!    action).
//! 3. The action must fit the phase, and the turn must have plays left.
//! 4. The cards it names must be where the action needs them.
//!
//! The action runs on a copy of the state, which replaces the original only
//! if the action succeeds. A failed action changes nothing.
//!
//! After every accepted action the win condition is checked, active player
//! first, then the others in seat order.
//!
//! ```
//! use monopoly_deal::core::{Action, GameConfig, Phase, PlayerId};
//! use monopoly_deal::game::MonopolyDeal;
//! use monopoly_deal::rules::RulesEngine;
//!
//! let rules = MonopolyDeal::new(GameConfig::new(2).seed(3)).unwrap();
//! let mut state = rules.setup();
//! assert_eq!(state.public.phase, Phase::Draw { remaining: 2 });
//!
//! let p0 = PlayerId::new(0);
//! rules.apply_action(&mut state, p0, &Action::Draw).unwrap();
//! rules.apply_action(&mut state, p0, &Action::Draw).unwrap();
//! assert_eq!(state.public.phase, Phase::Play);
//! assert_eq!(state.area(p0).hand.len(), 7);
//! ```

mod legal;
mod payment;
mod play;
mod respond;
mod turn;

pub mod controller;
pub mod policy;
pub mod snapshot;

pub use controller::Game;
pub use payment::canonical_payment;
pub use play::{BIRTHDAY_AMOUNT, DEBT_COLLECTOR_AMOUNT, PASS_GO_DRAWS};
pub use policy::{play_out, FirstLegalPolicy, Policy, RandomPolicy};

use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameError, GameEvent, GameRng, GameState, IllegalPlay,
    Phase, PlayerId, Result,
};
use crate::rules::{GameResult, RulesEngine};

/// The Monopoly Deal rules for one configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonopolyDeal {
    config: GameConfig,
}

impl MonopolyDeal {
    /// Rules for a validated configuration.
    pub fn new(config: GameConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Shuffle the deck, deal the starting hands, and start player 0's turn.
    #[must_use]
    pub fn setup(&self) -> GameState {
        let mut rng = GameRng::new(self.config.seed);
        let mut deck = self.config.catalog.materialize(0);
        if self.config.shuffle {
            rng.shuffle(&mut deck);
        }

        let player_count = self.config.player_count;
        let mut state = GameState::new(player_count, deck, rng);
        let mut events = Vec::new();
        'deal: for _ in 0..self.config.starting_hand_size {
            for player in PlayerId::all(player_count) {
                if state.draw_card(player, &mut events).is_err() {
                    break 'deal;
                }
            }
        }

        self.start_turn(&mut state, &mut events);
        state.public.log(&events);
        state
    }

    /// Plays the active player has left this turn.
    #[must_use]
    pub fn plays_left(&self, state: &GameState) -> usize {
        self.config
            .max_plays_per_turn
            .saturating_sub(state.public.plays_used)
    }

    fn resolve(&self, state: &mut GameState, player: PlayerId, action: &Action) -> Result<Vec<GameEvent>> {
        if player.index() >= state.player_count() {
            return Err(GameError::InvalidPlayerIndex {
                index: player.index(),
                player_count: state.player_count(),
            });
        }
        let expected = self.acting_player(state).ok_or(IllegalPlay::GameOver)?;
        if player != expected {
            return Err(IllegalPlay::NotYourTurn { player, expected }.into());
        }
        if matches!(action, Action::Draw) && state.supply_size() == 0 {
            return Err(GameError::DeckExhausted);
        }
        let phase = state.public.phase;
        if !fits_phase(action, phase) {
            return Err(IllegalPlay::WrongPhase {
                action: action.name(),
                phase,
            }
            .into());
        }
        let needed = action.plays_used();
        if needed > 0 {
            let left = self.plays_left(state);
            if left == 0 {
                return Err(IllegalPlay::NoPlaysLeft {
                    limit: self.config.max_plays_per_turn,
                }
                .into());
            }
            if needed > left {
                return Err(IllegalPlay::NotEnoughPlays { needed, left }.into());
            }
        }

        let turn = state.public.turn_number;
        let sequence = state.public.next_sequence();
        let mut events = Vec::new();

        match action {
            Action::Draw => self.draw(state, player, &mut events)?,
            Action::Bank { card } => self.bank(state, player, *card, &mut events)?,
            Action::PlayProperty { card, color } => self.play_property(state, player, *card, *color, &mut events)?,
            Action::PlayBuilding { card, color } => self.play_building(state, player, *card, *color, &mut events)?,
            Action::PassGo { card } => self.pass_go(state, player, *card, &mut events)?,
            Action::DebtCollector { card, target } => {
                self.debt_collector(state, player, *card, *target, &mut events)?;
            }
            Action::Birthday { card } => self.birthday(state, player, *card, &mut events)?,
            Action::PlayRent {
                card,
                color,
                target,
                doubles,
            } => self.play_rent(state, player, *card, *color, *target, doubles, &mut events)?,
            Action::SlyDeal { card, target, take } => {
                self.sly_deal(state, player, *card, *target, *take, &mut events)?;
            }
            Action::ForcedDeal {
                card,
                target,
                give,
                take,
            } => self.forced_deal(state, player, *card, *target, *give, *take, &mut events)?,
            Action::DealBreaker { card, target, color } => {
                self.deal_breaker(state, player, *card, *target, *color, &mut events)?;
            }
            Action::MoveWild { card, color } => self.move_wild(state, player, *card, *color, &mut events)?,
            Action::EndTurn => self.end_turn(state, &mut events),
            Action::Discard { card } => self.discard(state, player, *card, &mut events)?,
            Action::Accept => self.accept(state, &mut events)?,
            Action::JustSayNo { card } => self.just_say_no(state, player, *card, &mut events)?,
            Action::Pay { cards } => self.pay(state, player, cards, &mut events)?,
        }

        state.public.plays_used += needed;
        state
            .public
            .record_action(ActionRecord::new(player, action.clone(), turn, sequence));
        self.check_winner(state, &mut events);
        state.public.log(&events);
        Ok(events)
    }
}

fn fits_phase(action: &Action, phase: Phase) -> bool {
    match action {
        Action::Draw => matches!(phase, Phase::Draw { .. }),
        Action::Discard { .. } => phase == Phase::Discard,
        Action::Accept | Action::JustSayNo { .. } => phase == Phase::Respond,
        Action::Pay { .. } => phase == Phase::Pay,
        _ => phase == Phase::Play,
    }
}

impl RulesEngine for MonopolyDeal {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn acting_player(&self, state: &GameState) -> Option<PlayerId> {
        match state.public.phase {
            Phase::GameOver { .. } => None,
            Phase::Respond => Some(
                state
                    .pending
                    .as_ref()
                    .map_or(state.public.active_player, |p| p.responder),
            ),
            Phase::Pay => Some(
                state
                    .pending
                    .as_ref()
                    .map_or(state.public.active_player, |p| p.target),
            ),
            Phase::Draw { .. } | Phase::Play | Phase::Discard => Some(state.public.active_player),
        }
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        self.enumerate(state, player)
    }

    fn apply_action(&self, state: &mut GameState, player: PlayerId, action: &Action) -> Result<Vec<GameEvent>> {
        let mut next = state.clone();
        let events = self.resolve(&mut next, player, action)?;
        *state = next;
        Ok(events)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match state.public.phase {
            Phase::GameOver { winner: Some(player) } => Some(GameResult::Winner(player)),
            Phase::GameOver { winner: None } => Some(GameResult::Draw),
            _ => None,
        }
    }
}
