//! The game controller a UI talks to.
//!
//! `Game` owns the rules and one `GameState`. Players are addressed by seat
//! index (`usize`) in the index-based calls and by `PlayerId` in the action
//! calls. Every mutation goes through `MonopolyDeal::apply_action`, so a
//! failed call leaves the game untouched.
//!
//! ```
//! use monopoly_deal::core::GameConfig;
//! use monopoly_deal::game::Game;
//!
//! let mut game = Game::new(GameConfig::new(2).starting_hand_size(2).draw_count(1)).unwrap();
//! game.draw_card(0).unwrap();
//! assert_eq!(game.player_hand(0).unwrap().len(), 3);
//!
//! game.play_card(0, 0).unwrap();
//! assert_eq!(game.player_hand(0).unwrap().len(), 2);
//!
//! assert!(game.play_card(0, 5).is_err());
//! assert_eq!(game.player_hand(0).unwrap().len(), 2);
//! ```

use im::Vector;

use super::{policy, snapshot, MonopolyDeal, Policy};
use crate::cards::{ActionKind, Card, CardKind};
use crate::core::{
    Action, ActionRecord, ConfigError, GameConfig, GameError, GameEvent, GameState, PendingAction, Phase, PlayerId,
    Result, SnapshotError,
};
use crate::rules::{GameResult, RulesEngine};
use crate::zones::{Bank, PropertyBoard};

/// One game of Monopoly Deal.
#[derive(Clone, Debug)]
pub struct Game {
    rules: MonopolyDeal,
    state: GameState,
}

impl Game {
    /// Set up a new game: shuffle, deal, and start player 0's turn.
    pub fn new(config: GameConfig) -> std::result::Result<Self, ConfigError> {
        let rules = MonopolyDeal::new(config)?;
        let state = rules.setup();
        Ok(Self { rules, state })
    }

    #[must_use]
    pub fn rules(&self) -> &MonopolyDeal {
        &self.rules
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.rules.config()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    // === Index-based API ===

    /// Draw one card for `player` as part of their draw step.
    pub fn draw_card(&mut self, player: usize) -> Result<Card> {
        let player = self.state.player(player)?;
        let events = self.apply(player, &Action::Draw)?;
        events
            .iter()
            .rev()
            .find_map(|event| match event {
                GameEvent::CardDrawn { player: p, card } if *p == player => Some(*card),
                _ => None,
            })
            .ok_or(GameError::DeckExhausted)
    }

    /// Play the card at `card_index` in `player`'s hand for its natural
    /// effect, using one of the turn's plays.
    ///
    /// Money, rent and action cards are banked. Properties go to the board,
    /// wilds under their first color. A house or hotel goes onto the first set
    /// that can take it, or to the bank if none can.
    pub fn play_card(&mut self, player: usize, card_index: usize) -> Result<Card> {
        let player = self.state.player(player)?;
        let hand = &self.state.area(player).hand;
        let card = *hand.get(card_index).ok_or(GameError::InvalidCardIndex {
            index: card_index,
            hand_size: hand.len(),
        })?;

        let action = self.natural_action(player, &card);
        self.apply(player, &action)?;
        Ok(card)
    }

    fn natural_action(&self, player: PlayerId, card: &Card) -> Action {
        let board = &self.state.area(player).board;
        match card.kind {
            CardKind::Property(color) => Action::PlayProperty { card: card.id, color },
            CardKind::Wild(choice) => Action::PlayProperty {
                card: card.id,
                color: choice.first(),
            },
            CardKind::Action(kind @ (ActionKind::House | ActionKind::Hotel)) => board
                .sets()
                .find(|set| {
                    if kind == ActionKind::House {
                        set.can_add_house()
                    } else {
                        set.can_add_hotel()
                    }
                })
                .map_or(Action::Bank { card: card.id }, |set| Action::PlayBuilding {
                    card: card.id,
                    color: set.color(),
                }),
            CardKind::Money | CardKind::Rent(_) | CardKind::Action(_) => Action::Bank { card: card.id },
        }
    }

    /// Copies of every hand, in seat order.
    #[must_use]
    pub fn player_hands(&self) -> Vec<Vec<Card>> {
        self.state
            .players
            .values()
            .map(|area| area.hand.cards().to_vec())
            .collect()
    }

    /// A copy of one player's hand.
    pub fn player_hand(&self, player: usize) -> Result<Vec<Card>> {
        let player = self.state.player(player)?;
        Ok(self.state.area(player).hand.cards().to_vec())
    }

    pub fn bank(&self, player: usize) -> Result<&Bank> {
        let player = self.state.player(player)?;
        Ok(&self.state.area(player).bank)
    }

    pub fn board(&self, player: usize) -> Result<&PropertyBoard> {
        let player = self.state.player(player)?;
        Ok(&self.state.area(player).board)
    }

    // === Action API ===

    /// Apply any action for `player`, returning the events it produced.
    pub fn apply(&mut self, player: PlayerId, action: &Action) -> Result<Vec<GameEvent>> {
        self.rules.apply_action(&mut self.state, player, action)
    }

    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        self.rules.legal_actions(&self.state, player)
    }

    /// The player the game is waiting on, `None` once it is over.
    #[must_use]
    pub fn acting_player(&self) -> Option<PlayerId> {
        self.rules.acting_player(&self.state)
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.public.phase
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.state.public.active_player
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.state.public.turn_number
    }

    #[must_use]
    pub fn plays_left(&self) -> usize {
        self.rules.plays_left(&self.state)
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingAction> {
        self.state.pending.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.public.phase.is_over()
    }

    /// Every event since setup, dealing included.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.state.public.event_log
    }

    /// Every accepted action.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.state.public.action_history
    }

    // === Snapshots and playouts ===

    pub fn snapshot(&self) -> std::result::Result<Vec<u8>, SnapshotError> {
        snapshot::encode(self.rules.config(), &self.state)
    }

    pub fn restore(bytes: &[u8]) -> std::result::Result<Self, SnapshotError> {
        let (config, state) = snapshot::decode(bytes)?;
        let rules = MonopolyDeal::new(config)?;
        Ok(Self { rules, state })
    }

    /// Let `policy` play every seat until the game ends or `max_steps`
    /// actions have been applied.
    pub fn play_out<P: Policy + ?Sized>(&mut self, policy: &mut P, max_steps: usize) -> Option<GameResult> {
        policy::play_out(&self.rules, &mut self.state, policy, max_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardCatalog, Color, ColorChoice};
    use crate::core::IllegalPlay;
    use crate::game::RandomPolicy;

    fn scenario() -> Game {
        Game::new(GameConfig::new(2).seed(4).starting_hand_size(2).draw_count(1)).unwrap()
    }

    #[test]
    fn test_draw_then_play_scenario() {
        let mut game = scenario();
        assert_eq!(game.player_hands().iter().map(Vec::len).collect::<Vec<_>>(), vec![2, 2]);

        let drawn = game.draw_card(0).unwrap();
        let hand = game.player_hand(0).unwrap();
        assert_eq!(hand.len(), 3);
        assert_eq!(hand.last(), Some(&drawn));

        let played = game.play_card(0, 0).unwrap();
        assert_eq!(played, hand[0]);
        assert_eq!(game.player_hand(0).unwrap().len(), 2);

        let err = game.play_card(0, 5).unwrap_err();
        assert_eq!(err, GameError::InvalidCardIndex { index: 5, hand_size: 2 });
        assert_eq!(game.player_hand(0).unwrap().len(), 2);
    }

    #[test]
    fn test_player_hands_is_a_snapshot() {
        let mut game = scenario();
        let before = game.player_hands();
        game.draw_card(0).unwrap();
        assert_eq!(before[0].len(), 2);
        assert_eq!(game.player_hands()[0].len(), 3);
    }

    #[test]
    fn test_invalid_player_index() {
        let mut game = scenario();
        let err = GameError::InvalidPlayerIndex { index: 2, player_count: 2 };
        assert_eq!(game.draw_card(2).unwrap_err(), err);
        assert_eq!(game.play_card(2, 0).unwrap_err(), err);
        assert_eq!(game.player_hand(2).unwrap_err(), err);
        assert!(game.bank(2).is_err());
    }

    #[test]
    fn test_draw_out_of_turn_fails() {
        let mut game = scenario();
        let err = game.draw_card(1).unwrap_err();
        assert!(matches!(err, GameError::IllegalPlay(IllegalPlay::NotYourTurn { .. })));
        assert_eq!(game.player_hand(1).unwrap().len(), 2);
    }

    #[test]
    fn test_draw_from_exhausted_deck() {
        let catalog = CardCatalog::new().with_card(CardKind::Money, 1, 4);
        let config = GameConfig::new(2).catalog(catalog).starting_hand_size(2);
        let mut game = Game::new(config).unwrap();
        assert_eq!(game.phase(), Phase::Play);

        assert_eq!(game.draw_card(0).unwrap_err(), GameError::DeckExhausted);
        assert_eq!(game.player_hand(0).unwrap().len(), 2);
        assert_eq!(game.phase(), Phase::Play);
    }

    #[test]
    fn test_natural_placement() {
        let catalog = CardCatalog::new()
            .with_card(CardKind::Money, 1, 10)
            .with_card(CardKind::Action(ActionKind::House), 3, 1)
            .with_card(CardKind::Wild(ColorChoice::Pair(Color::Green, Color::Railroad)), 4, 1);
        let config = GameConfig::new(2)
            .catalog(catalog)
            .shuffle(false)
            .starting_hand_size(0)
            .empty_hand_draw_count(2);
        let mut game = Game::new(config).unwrap();

        // Unshuffled, the wild is on top and the house under it.
        let wild = game.draw_card(0).unwrap();
        let house = game.draw_card(0).unwrap();
        assert!(wild.kind.is_property());

        game.play_card(0, 0).unwrap();
        assert_eq!(game.board(0).unwrap().color_of(wild.id), Some(Color::Green));

        // No complete set to build on.
        game.play_card(0, 0).unwrap();
        assert_eq!(game.bank(0).unwrap().find(house.id), Some(&house));
        assert_eq!(game.plays_left(), 1);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut game = scenario();
        game.draw_card(0).unwrap();
        let bytes = game.snapshot().unwrap();

        let mut restored = Game::restore(&bytes).unwrap();
        assert_eq!(restored.state(), game.state());

        let a = game.play_out(&mut RandomPolicy::new(1), 500);
        let b = restored.play_out(&mut RandomPolicy::new(1), 500);
        assert_eq!(a, b);
        assert_eq!(restored.state(), game.state());
    }

    #[test]
    fn test_game_is_send() {
        fn assert_send<T: Send + Clone>() {}
        assert_send::<Game>();
    }
}
