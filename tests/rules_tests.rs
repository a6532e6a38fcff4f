//! Rule tests through the `RulesEngine` API on hand-built tables.

use monopoly_deal::cards::{ActionKind, Card, CardKind, Color, ColorChoice};
use monopoly_deal::core::{
    Action, GameConfig, GameError, GameEvent, GameRng, GameState, IllegalPlay, InstanceId, Phase, PlayerId,
};
use monopoly_deal::game::MonopolyDeal;
use monopoly_deal::rules::{GameResult, RulesEngine};
use smallvec::smallvec;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);
const P2: PlayerId = PlayerId::new(2);

/// A table in player 0's play phase: empty hands, twenty $1M notes to draw.
struct Table {
    rules: MonopolyDeal,
    state: GameState,
    next_id: u32,
}

impl Table {
    fn new(players: usize) -> Self {
        Self::with_config(GameConfig::new(players).starting_hand_size(0))
    }

    fn with_config(config: GameConfig) -> Self {
        let players = config.player_count;
        let rules = MonopolyDeal::new(config).unwrap();
        let deck = (1..=20).map(|i| Card::new(InstanceId::new(i), CardKind::Money, 1)).collect();
        let mut state = GameState::new(players, deck, GameRng::new(0));
        state.public.phase = Phase::Play;
        Self {
            rules,
            state,
            next_id: 100,
        }
    }

    fn card(&mut self, kind: CardKind, value: u32) -> Card {
        self.next_id += 1;
        Card::new(InstanceId::new(self.next_id), kind, value)
    }

    fn hand(&mut self, player: PlayerId, kind: CardKind, value: u32) -> InstanceId {
        let card = self.card(kind, value);
        self.state.area_mut(player).hand.add(card);
        card.id
    }

    fn action(&mut self, player: PlayerId, kind: ActionKind) -> InstanceId {
        self.hand(player, CardKind::Action(kind), 3)
    }

    fn money(&mut self, player: PlayerId, value: u32) -> InstanceId {
        let card = self.card(CardKind::Money, value);
        self.state.area_mut(player).bank.deposit(card);
        card.id
    }

    fn property(&mut self, player: PlayerId, color: Color) -> InstanceId {
        let card = self.card(CardKind::Property(color), 2);
        self.state.area_mut(player).board.place(card, color);
        card.id
    }

    fn complete(&mut self, player: PlayerId, color: Color) -> Vec<InstanceId> {
        (0..color.set_size()).map(|_| self.property(player, color)).collect()
    }

    fn apply(&mut self, player: PlayerId, action: Action) -> Result<Vec<GameEvent>, GameError> {
        self.rules.apply_action(&mut self.state, player, &action)
    }

    fn illegal(&mut self, player: PlayerId, action: Action) -> IllegalPlay {
        let before = self.state.clone();
        let err = self.apply(player, action).unwrap_err();
        assert_eq!(self.state, before, "failed action changed the state");
        match err {
            GameError::IllegalPlay(reason) => reason,
            other => panic!("expected an illegal play, got {other}"),
        }
    }
}

// =============================================================================
// Banking and Properties
// =============================================================================

#[test]
fn test_properties_cannot_be_banked() {
    let mut t = Table::new(2);
    let red = t.hand(P0, CardKind::Property(Color::Red), 3);
    let wild = t.hand(P0, CardKind::Wild(ColorChoice::Any), 0);

    assert_eq!(t.illegal(P0, Action::Bank { card: red }), IllegalPlay::CannotBankProperty(red));
    assert_eq!(t.illegal(P0, Action::Bank { card: wild }), IllegalPlay::CannotBankProperty(wild));
}

#[test]
fn test_action_cards_bank_for_value() {
    let mut t = Table::new(2);
    let deal = t.action(P0, ActionKind::DealBreaker);
    t.apply(P0, Action::Bank { card: deal }).unwrap();
    assert_eq!(t.state.area(P0).bank.total(), 3);
    assert_eq!(t.state.public.plays_used, 1);
}

#[test]
fn test_wild_must_use_allowed_color() {
    let mut t = Table::new(2);
    let wild = t.hand(P0, CardKind::Wild(ColorChoice::Pair(Color::DarkBlue, Color::Green)), 4);

    assert_eq!(
        t.illegal(P0, Action::PlayProperty { card: wild, color: Color::Red }),
        IllegalPlay::ColorNotAllowed { card: wild, color: Color::Red }
    );
    t.apply(P0, Action::PlayProperty { card: wild, color: Color::Green }).unwrap();
    assert_eq!(t.state.area(P0).board.color_of(wild), Some(Color::Green));
}

#[test]
fn test_moving_a_wild_is_free() {
    let mut t = Table::new(2);
    let wild = t.card(CardKind::Wild(ColorChoice::Pair(Color::DarkBlue, Color::Green)), 4);
    t.state.area_mut(P0).board.place(wild, Color::Green);
    t.state.public.plays_used = 3;

    let events = t.apply(P0, Action::MoveWild { card: wild.id, color: Color::DarkBlue }).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::WildMoved {
            player: P0,
            card: wild.id,
            from: Color::Green,
            to: Color::DarkBlue,
        }]
    );
    assert_eq!(t.state.public.plays_used, 3);
}

// =============================================================================
// Buildings
// =============================================================================

#[test]
fn test_house_then_hotel_on_complete_set() {
    let mut t = Table::new(2);
    t.complete(P0, Color::DarkBlue);
    let house = t.action(P0, ActionKind::House);
    let hotel = t.action(P0, ActionKind::Hotel);

    assert_eq!(
        t.illegal(P0, Action::PlayBuilding { card: hotel, color: Color::DarkBlue }),
        IllegalPlay::BuildingNotAllowed { color: Color::DarkBlue }
    );
    t.apply(P0, Action::PlayBuilding { card: house, color: Color::DarkBlue }).unwrap();
    t.apply(P0, Action::PlayBuilding { card: hotel, color: Color::DarkBlue }).unwrap();
    assert_eq!(t.state.area(P0).board.rent_for(Color::DarkBlue), 8 + 3 + 4);
}

#[test]
fn test_no_buildings_on_railroads() {
    let mut t = Table::new(2);
    t.complete(P0, Color::Railroad);
    let house = t.action(P0, ActionKind::House);
    assert_eq!(
        t.illegal(P0, Action::PlayBuilding { card: house, color: Color::Railroad }),
        IllegalPlay::BuildingNotAllowed { color: Color::Railroad }
    );
}

#[test]
fn test_house_needs_complete_set() {
    let mut t = Table::new(2);
    t.property(P0, Color::Green);
    let house = t.action(P0, ActionKind::House);
    assert_eq!(
        t.illegal(P0, Action::PlayBuilding { card: house, color: Color::Green }),
        IllegalPlay::SetNotComplete { player: P0, color: Color::Green }
    );
}

// =============================================================================
// Charges and Rent
// =============================================================================

#[test]
fn test_birthday_charges_every_opponent_in_turn() {
    let mut t = Table::new(3);
    t.money(P1, 2);
    t.money(P2, 5);
    let card = t.action(P0, ActionKind::Birthday);
    t.apply(P0, Action::Birthday { card }).unwrap();

    assert_eq!(t.rules.acting_player(&t.state), Some(P1));
    t.apply(P1, Action::Accept).unwrap();
    let pay = t.rules.legal_actions(&t.state, P1);
    t.apply(P1, pay[0].clone()).unwrap();

    assert_eq!(t.rules.acting_player(&t.state), Some(P2));
    t.apply(P2, Action::Accept).unwrap();
    let pay = t.rules.legal_actions(&t.state, P2);
    t.apply(P2, pay[0].clone()).unwrap();

    assert_eq!(t.state.public.phase, Phase::Play);
    assert_eq!(t.state.area(P0).bank.total(), 7);
}

#[test]
fn test_two_color_rent_with_doubles() {
    let mut t = Table::new(2);
    t.property(P0, Color::Red);
    t.property(P0, Color::Red);
    t.money(P1, 10);
    t.money(P1, 5);
    let rent = t.hand(P0, CardKind::Rent(ColorChoice::Pair(Color::Red, Color::Yellow)), 1);
    let double = t.action(P0, ActionKind::DoubleTheRent);

    t.apply(
        P0,
        Action::PlayRent {
            card: rent,
            color: Color::Red,
            target: None,
            doubles: smallvec![double],
        },
    )
    .unwrap();
    assert_eq!(t.state.public.plays_used, 2);

    let events = t.apply(P1, Action::Accept).unwrap();
    assert_eq!(events, vec![GameEvent::Charged { from: P1, to: P0, amount: 6 }]);
}

#[test]
fn test_rent_needs_plays_for_doubles() {
    let mut t = Table::new(2);
    t.property(P0, Color::Red);
    let rent = t.hand(P0, CardKind::Rent(ColorChoice::Any), 3);
    let doubles = [t.action(P0, ActionKind::DoubleTheRent), t.action(P0, ActionKind::DoubleTheRent)];
    t.state.public.plays_used = 1;

    assert_eq!(
        t.illegal(
            P0,
            Action::PlayRent {
                card: rent,
                color: Color::Red,
                target: Some(P1),
                doubles: smallvec![doubles[0], doubles[1]],
            }
        ),
        IllegalPlay::NotEnoughPlays { needed: 3, left: 2 }
    );
}

#[test]
fn test_any_color_rent_needs_a_target() {
    let mut t = Table::new(2);
    t.property(P0, Color::Red);
    let rent = t.hand(P0, CardKind::Rent(ColorChoice::Any), 3);
    assert_eq!(
        t.illegal(
            P0,
            Action::PlayRent {
                card: rent,
                color: Color::Red,
                target: None,
                doubles: smallvec![],
            }
        ),
        IllegalPlay::RentTargetMismatch
    );
}

#[test]
fn test_rent_without_properties() {
    let mut t = Table::new(2);
    let rent = t.hand(P0, CardKind::Rent(ColorChoice::Pair(Color::Red, Color::Yellow)), 1);
    assert_eq!(
        t.illegal(
            P0,
            Action::PlayRent {
                card: rent,
                color: Color::Yellow,
                target: None,
                doubles: smallvec![],
            }
        ),
        IllegalPlay::NoProperties { player: P0, color: Color::Yellow }
    );
}

#[test]
fn test_debt_collector_takes_everything_from_short_player() {
    let mut t = Table::new(2);
    let two = t.money(P1, 2);
    let green = t.property(P1, Color::Green);
    let card = t.action(P0, ActionKind::DebtCollector);

    t.apply(P0, Action::DebtCollector { card, target: P1 }).unwrap();
    t.apply(P1, Action::Accept).unwrap();
    assert_eq!(
        t.illegal(P1, Action::Pay { cards: smallvec![two] }),
        IllegalPlay::Underpaid { paid: 2, owed: 5 }
    );
    t.apply(P1, Action::Pay { cards: smallvec![two, green] }).unwrap();

    assert_eq!(t.state.area(P1).assets(), 0);
    assert_eq!(t.state.area(P0).board.color_of(green), Some(Color::Green));
}

#[test]
fn test_cannot_target_self() {
    let mut t = Table::new(2);
    let card = t.action(P0, ActionKind::DebtCollector);
    assert_eq!(
        t.illegal(P0, Action::DebtCollector { card, target: P0 }),
        IllegalPlay::InvalidTarget(P0)
    );
}

// =============================================================================
// Steals
// =============================================================================

#[test]
fn test_sly_deal_cannot_break_complete_set() {
    let mut t = Table::new(2);
    let brown = t.complete(P1, Color::Brown);
    let card = t.action(P0, ActionKind::SlyDeal);
    assert_eq!(
        t.illegal(P0, Action::SlyDeal { card, target: P1, take: brown[0] }),
        IllegalPlay::PropertyProtected(brown[0])
    );
}

#[test]
fn test_sly_deal_steals_property() {
    let mut t = Table::new(2);
    let green = t.property(P1, Color::Green);
    let card = t.action(P0, ActionKind::SlyDeal);

    t.apply(P0, Action::SlyDeal { card, target: P1, take: green }).unwrap();
    t.apply(P1, Action::Accept).unwrap();

    assert_eq!(t.state.area(P0).board.color_of(green), Some(Color::Green));
    assert_eq!(t.state.area(P1).board.color_of(green), None);
    assert_eq!(t.state.public.phase, Phase::Play);
}

#[test]
fn test_forced_deal_swaps() {
    let mut t = Table::new(2);
    let mine = t.property(P0, Color::Brown);
    let theirs = t.property(P1, Color::Orange);
    let card = t.action(P0, ActionKind::ForcedDeal);

    t.apply(P0, Action::ForcedDeal { card, target: P1, give: mine, take: theirs }).unwrap();
    t.apply(P1, Action::Accept).unwrap();

    assert_eq!(t.state.area(P0).board.color_of(theirs), Some(Color::Orange));
    assert_eq!(t.state.area(P1).board.color_of(mine), Some(Color::Brown));
}

#[test]
fn test_deal_breaker_needs_complete_set() {
    let mut t = Table::new(2);
    t.property(P1, Color::Green);
    let card = t.action(P0, ActionKind::DealBreaker);
    assert_eq!(
        t.illegal(P0, Action::DealBreaker { card, target: P1, color: Color::Green }),
        IllegalPlay::SetNotComplete { player: P1, color: Color::Green }
    );
}

// =============================================================================
// Just Say No
// =============================================================================

#[test]
fn test_just_say_no_cancels() {
    let mut t = Table::new(2);
    let set = t.complete(P1, Color::DarkBlue);
    let card = t.action(P0, ActionKind::DealBreaker);
    let no = t.action(P1, ActionKind::JustSayNo);

    t.apply(P0, Action::DealBreaker { card, target: P1, color: Color::DarkBlue }).unwrap();
    t.apply(P1, Action::JustSayNo { card: no }).unwrap();
    assert_eq!(t.rules.acting_player(&t.state), Some(P0));

    let events = t.apply(P0, Action::Accept).unwrap();
    assert_eq!(events, vec![GameEvent::ActionCancelled { source: P0, target: P1 }]);
    assert_eq!(t.state.area(P1).board.color_of(set[0]), Some(Color::DarkBlue));
    assert_eq!(t.state.public.plays_used, 1);
}

#[test]
fn test_counter_just_say_no_restores_action() {
    let mut t = Table::new(2);
    let set = t.complete(P1, Color::DarkBlue);
    let card = t.action(P0, ActionKind::DealBreaker);
    let no = t.action(P1, ActionKind::JustSayNo);
    let counter = t.action(P0, ActionKind::JustSayNo);

    t.apply(P0, Action::DealBreaker { card, target: P1, color: Color::DarkBlue }).unwrap();
    t.apply(P1, Action::JustSayNo { card: no }).unwrap();
    t.apply(P0, Action::JustSayNo { card: counter }).unwrap();
    assert_eq!(t.rules.acting_player(&t.state), Some(P1));
    t.apply(P1, Action::Accept).unwrap();

    assert_eq!(t.state.area(P0).board.color_of(set[0]), Some(Color::DarkBlue));
    assert_eq!(t.state.public.plays_used, 1);
}

#[test]
fn test_just_say_no_only_answers_for_one_target() {
    let mut t = Table::new(3);
    t.money(P1, 2);
    t.money(P2, 2);
    let card = t.action(P0, ActionKind::Birthday);
    let no = t.action(P1, ActionKind::JustSayNo);

    t.apply(P0, Action::Birthday { card }).unwrap();
    t.apply(P1, Action::JustSayNo { card: no }).unwrap();
    t.apply(P0, Action::Accept).unwrap();

    assert_eq!(t.rules.acting_player(&t.state), Some(P2));
    assert_eq!(t.state.area(P1).bank.total(), 2);
}

// =============================================================================
// Turn Flow
// =============================================================================

#[test]
fn test_discard_down_to_hand_limit() {
    let mut t = Table::new(2);
    let cards: Vec<_> = (0..9).map(|_| t.hand(P0, CardKind::Money, 1)).collect();

    t.apply(P0, Action::EndTurn).unwrap();
    assert_eq!(t.state.public.phase, Phase::Discard);
    assert_eq!(t.illegal(P1, Action::Discard { card: cards[0] }), IllegalPlay::NotYourTurn { player: P1, expected: P0 });

    t.apply(P0, Action::Discard { card: cards[0] }).unwrap();
    assert_eq!(t.state.public.phase, Phase::Discard);
    t.apply(P0, Action::Discard { card: cards[1] }).unwrap();

    assert_eq!(t.state.area(P0).hand.len(), 7);
    assert_eq!(t.state.public.active_player, P1);
    assert_eq!(t.state.discard.len(), 2);
}

#[test]
fn test_win_ends_game() {
    let mut t = Table::new(2);
    t.complete(P0, Color::Brown);
    t.complete(P0, Color::DarkBlue);
    t.property(P0, Color::Utility);
    let last = t.hand(P0, CardKind::Property(Color::Utility), 2);

    let events = t.apply(P0, Action::PlayProperty { card: last, color: Color::Utility }).unwrap();

    assert_eq!(events.last(), Some(&GameEvent::GameWon { player: P0 }));
    assert_eq!(t.rules.is_terminal(&t.state), Some(GameResult::Winner(P0)));
    assert_eq!(t.rules.acting_player(&t.state), None);
    assert_eq!(t.illegal(P0, Action::EndTurn), IllegalPlay::GameOver);
}

#[test]
fn test_same_color_sets_count_once() {
    let mut t = Table::new(2);
    t.complete(P0, Color::Brown);
    t.complete(P0, Color::Brown);
    t.complete(P0, Color::DarkBlue);
    let money = t.hand(P0, CardKind::Money, 1);

    t.apply(P0, Action::Bank { card: money }).unwrap();
    assert_eq!(t.rules.is_terminal(&t.state), None);
}

#[test]
fn test_turn_limit_draws_game() {
    let mut t = Table::with_config(GameConfig::new(2).starting_hand_size(0).max_turns(1));
    let events = t.apply(P0, Action::EndTurn).unwrap();

    assert_eq!(events.last(), Some(&GameEvent::GameDrawn { turn: 1 }));
    assert_eq!(t.rules.is_terminal(&t.state), Some(GameResult::Draw));
}

#[test]
fn test_empty_supply_skips_draw_step() {
    let mut t = Table::new(2);
    t.state.draw_pile = Default::default();
    t.hand(P0, CardKind::Money, 1);

    let events = t.apply(P0, Action::EndTurn).unwrap();

    assert!(events.contains(&GameEvent::SupplyExhausted { player: P1 }));
    assert_eq!(t.state.public.phase, Phase::Play);
    assert_eq!(t.state.public.active_player, P1);
}

#[test]
fn test_discard_pile_refills_draw_pile() {
    let mut t = Table::new(2);
    t.state.draw_pile = Default::default();
    let old = t.card(CardKind::Money, 1);
    let older = t.card(CardKind::Money, 1);
    t.state.discard.push(old);
    t.state.discard.push(older);
    let pass_go = t.action(P0, ActionKind::PassGo);

    let events = t.apply(P0, Action::PassGo { card: pass_go }).unwrap();

    assert!(events.contains(&GameEvent::DrawPileRefilled { cards: 3 }));
    assert_eq!(t.state.area(P0).hand.len(), 2);
    assert_eq!(t.state.supply_size(), 1);
}
