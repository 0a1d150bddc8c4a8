use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::opponent::Opponent;

/// An opponent that selects uniformly at random from the legal columns.
///
/// Legal columns are filtered first and indexed uniformly, so selection
/// terminates even when most columns are full.
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    pub fn new() -> Self {
        RandomOpponent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomOpponent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn select_column(&mut self, state: &GameState) -> Option<usize> {
        let legal = state.legal_columns();
        if legal.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..legal.len());
        Some(legal[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_only_legal_columns() {
        let mut opponent = RandomOpponent::new();
        let mut state = GameState::new(7, 6);
        // Fill columns 0 and 6 completely
        for _ in 0..3 {
            for col in [0, 6] {
                state.apply_move(col).unwrap();
                state.apply_move(col).unwrap();
            }
        }
        assert!(state.board().is_column_full(0));
        assert!(state.board().is_column_full(6));

        for _ in 0..100 {
            let col = opponent.select_column(&state).unwrap();
            assert!((1..=5).contains(&col), "column {} is not legal", col);
        }
    }

    #[test]
    fn test_distribution_roughly_uniform() {
        let mut opponent = RandomOpponent::seeded(42);
        let state = GameState::new(3, 3);
        let mut counts = [0usize; 3];

        for _ in 0..300 {
            counts[opponent.select_column(&state).unwrap()] += 1;
        }

        // Expect ~100 per column; generous bounds keep the test stable
        for &count in &counts {
            assert!((50..=170).contains(&count), "skewed counts: {:?}", counts);
        }
    }

    #[test]
    fn test_no_column_on_terminal_state() {
        let mut opponent = RandomOpponent::seeded(7);
        let mut state = GameState::new(1, 1);
        state.apply_move(0).unwrap();
        assert!(state.is_terminal());
        assert_eq!(opponent.select_column(&state), None);
    }

    #[test]
    fn test_plays_full_game_to_completion() {
        let mut one = RandomOpponent::seeded(1);
        let mut two = RandomOpponent::seeded(2);
        let mut state = GameState::new(7, 6);

        let mut turn = 0;
        while !state.is_terminal() {
            let col = if turn % 2 == 0 {
                one.select_column(&state).unwrap()
            } else {
                two.select_column(&state).unwrap()
            };
            state.apply_move(col).unwrap();
            turn += 1;
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn test_opponent_name() {
        let opponent = RandomOpponent::new();
        assert_eq!(opponent.name(), "Random");
    }
}
