//! Playout policies.
//!
//! A `Policy` picks one of the legal actions for whichever player the game is
//! waiting on. `play_out` drives any `RulesEngine` to the end with one.

use crate::core::{Action, GameRng, GameState, PlayerId};
use crate::rules::{GameResult, RulesEngine};

/// Chooses among legal actions.
pub trait Policy {
    /// Index into `actions` (never empty) of the action `player` takes.
    fn choose(&mut self, state: &GameState, player: PlayerId, actions: &[Action]) -> usize;
}

/// Uniformly random choices from a seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _state: &GameState, _player: PlayerId, actions: &[Action]) -> usize {
        self.rng.gen_range_usize(0..actions.len())
    }
}

/// Always the first legal action that uses a play, ending the turn when
/// there is none.
///
/// Deterministic and cheap; useful as a baseline opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalPolicy;

impl Policy for FirstLegalPolicy {
    fn choose(&mut self, _state: &GameState, _player: PlayerId, actions: &[Action]) -> usize {
        actions.iter().position(Action::uses_play).unwrap_or(0)
    }
}

/// Apply policy choices until the game ends or `max_steps` actions have been
/// applied.
///
/// Returns the result, or `None` if the step limit was hit first.
pub fn play_out<E, P>(engine: &E, state: &mut GameState, policy: &mut P, max_steps: usize) -> Option<GameResult>
where
    E: RulesEngine,
    P: Policy + ?Sized,
{
    for _ in 0..max_steps {
        if let Some(result) = engine.is_terminal(state) {
            return Some(result);
        }
        let player = engine.acting_player(state)?;
        let actions = engine.legal_actions(state, player);
        if actions.is_empty() {
            return None;
        }

        let choice = policy.choose(state, player, &actions).min(actions.len() - 1);
        if engine.apply_action(state, player, &actions[choice]).is_err() {
            return None;
        }
    }
    engine.is_terminal(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::game::MonopolyDeal;

    fn rules(players: usize, seed: u64) -> MonopolyDeal {
        MonopolyDeal::new(GameConfig::new(players).seed(seed).max_turns(200)).unwrap()
    }

    #[test]
    fn test_random_playout_terminates() {
        for seed in 0..5 {
            let rules = rules(3, seed);
            let mut state = rules.setup();
            let mut policy = RandomPolicy::new(seed);

            let result = play_out(&rules, &mut state, &mut policy, 100_000);

            assert!(result.is_some(), "seed {seed} did not finish");
            assert_eq!(rules.is_terminal(&state), result);
        }
    }

    #[test]
    fn test_first_legal_playout_is_deterministic() {
        let rules = rules(2, 9);
        let mut a = rules.setup();
        let mut b = rules.setup();

        let first = play_out(&rules, &mut a, &mut FirstLegalPolicy, 100_000);
        let second = play_out(&rules, &mut b, &mut FirstLegalPolicy, 100_000);

        assert_eq!(first, second);
        assert_eq!(a, b);
    }

    #[test]
    fn test_step_limit() {
        let rules = rules(2, 1);
        let mut state = rules.setup();
        assert_eq!(play_out(&rules, &mut state, &mut RandomPolicy::new(0), 1), None);
        assert_eq!(state.public.action_history.len(), 1);
    }
}
