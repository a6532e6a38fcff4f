//! Legal action enumeration.
//!
//! Every action listed here is accepted by `apply_action`. Payments are the
//! exception to completeness: many card combinations settle a charge, but
//! only the one from `canonical_payment` is listed.

use smallvec::SmallVec;

use super::payment::canonical_payment;
use super::MonopolyDeal;
use crate::cards::{ActionKind, Card, CardKind, ColorChoice};
use crate::core::{Action, Demand, GameState, InstanceId, Phase, PlayerId};
use crate::rules::RulesEngine;

impl MonopolyDeal {
    pub(super) fn enumerate(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if self.acting_player(state) != Some(player) {
            return Vec::new();
        }

        match state.public.phase {
            Phase::GameOver { .. } => Vec::new(),
            Phase::Draw { .. } => vec![Action::Draw],
            Phase::Discard => state
                .area(player)
                .hand
                .iter()
                .map(|card| Action::Discard { card: card.id })
                .collect(),
            Phase::Respond => {
                let mut actions = vec![Action::Accept];
                if let Some(card) = state.area(player).hand.action_cards(ActionKind::JustSayNo).first() {
                    actions.push(Action::JustSayNo { card: *card });
                }
                actions
            }
            Phase::Pay => match state.pending.as_ref().map(|p| p.demand) {
                Some(Demand::Charge { amount }) => vec![Action::Pay {
                    cards: canonical_payment(state.area(player), amount),
                }],
                _ => Vec::new(),
            },
            Phase::Play => self.play_actions(state, player),
        }
    }

    fn play_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        let mut actions = vec![Action::EndTurn];
        let area = state.area(player);

        for (card, from) in area.board.properties() {
            if let CardKind::Wild(choice) = card.kind {
                for color in choice.colors() {
                    if color != from {
                        actions.push(Action::MoveWild { card: card.id, color });
                    }
                }
            }
        }

        let plays_left = self.plays_left(state);
        if plays_left == 0 {
            return actions;
        }

        let opponents: Vec<PlayerId> = player.others(state.player_count()).collect();
        let doubles = area.hand.action_cards(ActionKind::DoubleTheRent);

        for card in area.hand.iter() {
            match card.kind {
                CardKind::Property(_) | CardKind::Wild(_) => {
                    for color in card.kind.property_colors() {
                        actions.push(Action::PlayProperty { card: card.id, color });
                    }
                }
                CardKind::Money => actions.push(Action::Bank { card: card.id }),
                CardKind::Rent(choice) => {
                    actions.push(Action::Bank { card: card.id });
                    self.rent_actions(state, player, card, choice, &opponents, &doubles, plays_left, &mut actions);
                }
                CardKind::Action(kind) => {
                    actions.push(Action::Bank { card: card.id });
                    self.action_card_actions(state, player, card, kind, &opponents, &mut actions);
                }
            }
        }
        actions
    }

    #[allow(clippy::too_many_arguments)]
    fn rent_actions(
        &self,
        state: &GameState,
        player: PlayerId,
        card: &Card,
        choice: ColorChoice,
        opponents: &[PlayerId],
        doubles: &[InstanceId],
        plays_left: usize,
        out: &mut Vec<Action>,
    ) {
        let board = &state.area(player).board;
        let max_doubles = doubles.len().min(plays_left - 1);

        for color in choice.colors() {
            if board.rent_for(color) == 0 {
                continue;
            }
            let targets: Vec<Option<PlayerId>> = match choice {
                ColorChoice::Pair(..) => vec![None],
                ColorChoice::Any => opponents.iter().copied().map(Some).collect(),
            };
            for target in targets {
                for n in 0..=max_doubles {
                    out.push(Action::PlayRent {
                        card: card.id,
                        color,
                        target,
                        doubles: SmallVec::from_slice(&doubles[..n]),
                    });
                }
            }
        }
    }

    fn action_card_actions(
        &self,
        state: &GameState,
        player: PlayerId,
        card: &Card,
        kind: ActionKind,
        opponents: &[PlayerId],
        out: &mut Vec<Action>,
    ) {
        let id = card.id;
        let own = &state.area(player).board;
        match kind {
            ActionKind::PassGo => out.push(Action::PassGo { card: id }),
            ActionKind::Birthday => out.push(Action::Birthday { card: id }),
            ActionKind::DebtCollector => {
                for &target in opponents {
                    out.push(Action::DebtCollector { card: id, target });
                }
            }
            ActionKind::House | ActionKind::Hotel => {
                for set in own.sets() {
                    let fits = if kind == ActionKind::House {
                        set.can_add_house()
                    } else {
                        set.can_add_hotel()
                    };
                    if fits {
                        out.push(Action::PlayBuilding {
                            card: id,
                            color: set.color(),
                        });
                    }
                }
            }
            ActionKind::SlyDeal => {
                for &target in opponents {
                    let board = &state.area(target).board;
                    for (take, _) in board.properties().filter(|(c, _)| !board.is_protected(c.id)) {
                        out.push(Action::SlyDeal {
                            card: id,
                            target,
                            take: take.id,
                        });
                    }
                }
            }
            ActionKind::ForcedDeal => {
                for &target in opponents {
                    let board = &state.area(target).board;
                    for (take, _) in board.properties().filter(|(c, _)| !board.is_protected(c.id)) {
                        for (give, _) in own.properties() {
                            out.push(Action::ForcedDeal {
                                card: id,
                                target,
                                give: give.id,
                                take: take.id,
                            });
                        }
                    }
                }
            }
            ActionKind::DealBreaker => {
                for &target in opponents {
                    for set in state.area(target).board.sets().filter(|s| s.is_complete()) {
                        out.push(Action::DealBreaker {
                            card: id,
                            target,
                            color: set.color(),
                        });
                    }
                }
            }
            ActionKind::JustSayNo | ActionKind::DoubleTheRent => {}
        }
    }
}
