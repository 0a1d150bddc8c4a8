use std::time::{Duration, Instant};

use crate::ai::Opponent;
use crate::error::BoardSizeError;
use crate::game::{Board, GameOutcome, GameState, Player, PlayerColor, MAX_SIDE, MIN_SIDE};

use super::sounds::SoundEffects;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    Friend,
    /// Human in seat one, computer in seat two.
    Computer,
}

/// The color pair both players settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerColors {
    pub player1: PlayerColor,
    pub player2: PlayerColor,
}

impl PlayerColors {
    pub fn for_player(&self, player: Player) -> PlayerColor {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }
}

/// Configuration frozen at the moment the game phase begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub colors: PlayerColors,
    pub mode: GameMode,
}

/// Validate raw user-entered board dimensions against the allowed range.
pub fn validate_board_size(width: i32, height: i32) -> Result<(usize, usize), BoardSizeError> {
    let range = (MIN_SIDE as i32)..=(MAX_SIDE as i32);
    if range.contains(&width) && range.contains(&height) {
        Ok((width as usize, height as usize))
    } else {
        Err(BoardSizeError { width, height })
    }
}

/// A computer move waiting for its thinking delay to elapse. The epoch ties
/// it to the game instance that scheduled it; there is no cancellation, a
/// firing with a stale epoch is simply dropped.
#[derive(Debug, Clone, Copy)]
struct ScheduledMove {
    due: Instant,
    epoch: u64,
}

/// A running game: the frozen configuration, the engine state, and the
/// scheduling of the computer opponent's delayed move.
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    epoch: u64,
    pending: Option<ScheduledMove>,
    think_delay: Duration,
    opponent: Box<dyn Opponent>,
}

impl GameSession {
    pub fn new(config: GameConfig, think_delay: Duration, opponent: Box<dyn Opponent>) -> Self {
        GameSession {
            state: GameState::new(config.width, config.height),
            config,
            epoch: 0,
            pending: None,
            think_delay,
            opponent,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// True while a computer move is scheduled for the current game instance.
    /// Human move intents are ignored at the boundary while this holds.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some_and(|p| p.epoch == self.epoch)
    }

    /// Start over with an empty grid of the currently configured dimensions.
    /// A previously scheduled computer move is left in place; the epoch bump
    /// turns its eventual firing into a no-op.
    pub fn restart(&mut self) {
        self.epoch += 1;
        self.state = GameState::new(self.config.width, self.config.height);
    }

    /// A human dropped a piece in `column`. Ignored while the opponent is
    /// thinking, after the game ended, or when it is the computer's seat.
    /// Returns whether a move was applied.
    pub fn human_move(
        &mut self,
        column: usize,
        now: Instant,
        sounds: &mut dyn SoundEffects,
    ) -> bool {
        if self.is_thinking() || self.state.is_terminal() {
            return false;
        }
        if self.config.mode == GameMode::Computer && self.state.current_player() == Player::Two {
            return false;
        }

        if !self.apply(column, sounds) {
            return false;
        }

        if self.config.mode == GameMode::Computer
            && !self.state.is_terminal()
            && self.state.current_player() == Player::Two
        {
            self.pending = Some(ScheduledMove {
                due: now + self.think_delay,
                epoch: self.epoch,
            });
        }
        true
    }

    /// Fire the scheduled computer move once its delay has elapsed. The move
    /// re-validates that it still applies: same epoch, game in progress, and
    /// the computer's seat active. Returns whether a move was applied.
    pub fn poll_pending(&mut self, now: Instant, sounds: &mut dyn SoundEffects) -> bool {
        let Some(pending) = self.pending else {
            return false;
        };
        if now < pending.due {
            return false;
        }
        self.pending = None;

        if pending.epoch != self.epoch || self.state.is_terminal() {
            return false;
        }
        if self.config.mode != GameMode::Computer || self.state.current_player() != Player::Two {
            return false;
        }

        match self.opponent.select_column(&self.state) {
            Some(column) => self.apply(column, sounds),
            None => false,
        }
    }

    fn apply(&mut self, column: usize, sounds: &mut dyn SoundEffects) -> bool {
        match self.state.apply_move(column) {
            Ok(outcome) => {
                sounds.play_click();
                if matches!(outcome, Some(GameOutcome::Winner(_))) {
                    sounds.play_win();
                }
                true
            }
            // Full or invalid column: defensive no-op
            Err(_) => false,
        }
    }

    /// Status line while the game runs; empty once it ended.
    pub fn turn_message(&self) -> Option<String> {
        if self.state.is_terminal() {
            return None;
        }
        Some(match self.config.mode {
            GameMode::Computer => match self.state.current_player() {
                Player::One => "Your turn".to_string(),
                Player::Two => "Computer's turn".to_string(),
            },
            GameMode::Friend => {
                format!("Player {}'s turn", self.state.current_player().number())
            }
        })
    }

    /// Victory or draw announcement once the game ended.
    pub fn outcome_message(&self) -> Option<String> {
        Some(match self.state.outcome()? {
            GameOutcome::Winner(player) => match self.config.mode {
                GameMode::Friend => format!("Player {} wins!", player.number()),
                GameMode::Computer => {
                    if player == Player::One {
                        "You won!".to_string()
                    } else {
                        "The computer won.".to_string()
                    }
                }
            },
            GameOutcome::Draw => "The game is a draw.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomOpponent;
    use crate::session::sounds::CountingSounds;

    fn colors() -> PlayerColors {
        PlayerColors {
            player1: PlayerColor::Red,
            player2: PlayerColor::Blue,
        }
    }

    fn computer_session(width: usize, height: usize, delay: Duration) -> GameSession {
        GameSession::new(
            GameConfig {
                width,
                height,
                colors: colors(),
                mode: GameMode::Computer,
            },
            delay,
            Box::new(RandomOpponent::seeded(11)),
        )
    }

    fn friend_session(width: usize, height: usize) -> GameSession {
        GameSession::new(
            GameConfig {
                width,
                height,
                colors: colors(),
                mode: GameMode::Friend,
            },
            Duration::from_secs(3),
            Box::new(RandomOpponent::seeded(11)),
        )
    }

    #[test]
    fn test_validate_board_size_bounds() {
        for bad in [0, 11, -1] {
            assert!(validate_board_size(bad, 5).is_err());
            assert!(validate_board_size(5, bad).is_err());
        }
        for good in 1..=10 {
            let (w, h) = validate_board_size(good, good).unwrap();
            assert_eq!((w, h), (good as usize, good as usize));
        }
    }

    #[test]
    fn test_friend_mode_never_schedules() {
        let (mut sounds, clicks, _) = CountingSounds::new();
        let mut session = friend_session(7, 6);

        assert!(session.human_move(3, Instant::now(), &mut sounds));
        assert!(!session.is_thinking());
        assert_eq!(session.state().current_player(), Player::Two);
        // Seat two is a human in friend mode
        assert!(session.human_move(3, Instant::now(), &mut sounds));
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_computer_move_scheduled_and_fired() {
        let (mut sounds, clicks, _) = CountingSounds::new();
        let delay = Duration::from_millis(200);
        let mut session = computer_session(7, 6, delay);
        let t0 = Instant::now();

        assert!(session.human_move(3, t0, &mut sounds));
        assert!(session.is_thinking());

        // Before the delay elapses nothing fires and human input is ignored
        assert!(!session.poll_pending(t0 + Duration::from_millis(50), &mut sounds));
        assert!(!session.human_move(2, t0 + Duration::from_millis(50), &mut sounds));
        assert_eq!(clicks.get(), 1);

        assert!(session.poll_pending(t0 + delay, &mut sounds));
        assert!(!session.is_thinking());
        assert_eq!(session.state().current_player(), Player::One);
        assert_eq!(clicks.get(), 2);
    }

    #[test]
    fn test_stale_scheduled_move_is_noop_after_restart() {
        let (mut sounds, clicks, _) = CountingSounds::new();
        let delay = Duration::from_millis(200);
        let mut session = computer_session(7, 6, delay);
        let t0 = Instant::now();

        session.human_move(3, t0, &mut sounds);
        assert!(session.is_thinking());

        session.restart();
        assert!(!session.is_thinking());
        assert!(session.board().is_empty());

        // The pending move still fires, but re-validation drops it
        assert!(!session.poll_pending(t0 + delay, &mut sounds));
        assert!(session.board().is_empty());
        assert_eq!(session.state().current_player(), Player::One);
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_computer_plays_only_legal_column() {
        let (mut sounds, _, _) = CountingSounds::new();
        let delay = Duration::ZERO;
        // Width 1: the only legal column is 0
        let mut session = computer_session(1, 6, delay);
        let t0 = Instant::now();

        session.human_move(0, t0, &mut sounds);
        assert!(session.poll_pending(t0, &mut sounds));
        assert_eq!(session.board().get(4, 0), Player::Two.to_cell());
    }

    #[test]
    fn test_click_sound_once_per_move_win_sound_once() {
        let (mut sounds, clicks, wins) = CountingSounds::new();
        let mut session = friend_session(7, 6);
        let now = Instant::now();

        // One wins with a bottom-row line; Two stacks above
        for col in 0..4 {
            session.human_move(col, now, &mut sounds);
            if col < 3 {
                session.human_move(col, now, &mut sounds);
            }
        }

        assert_eq!(session.state().outcome(), Some(GameOutcome::Winner(Player::One)));
        assert_eq!(clicks.get(), 7);
        assert_eq!(wins.get(), 1);

        // Moves after the end neither apply nor click
        assert!(!session.human_move(5, now, &mut sounds));
        assert_eq!(clicks.get(), 7);
        assert_eq!(wins.get(), 1);
    }

    #[test]
    fn test_full_column_click_ignored_without_sound() {
        let (mut sounds, clicks, _) = CountingSounds::new();
        let mut session = friend_session(2, 2);
        let now = Instant::now();

        session.human_move(0, now, &mut sounds); // One
        session.human_move(0, now, &mut sounds); // Two
        assert!(!session.human_move(0, now, &mut sounds));
        assert_eq!(clicks.get(), 2);
        assert_eq!(session.state().current_player(), Player::One);
    }

    #[test]
    fn test_restart_keeps_configured_dimensions() {
        let (mut sounds, _, _) = CountingSounds::new();
        let mut session = friend_session(4, 9);
        session.human_move(1, Instant::now(), &mut sounds);

        session.restart();
        assert_eq!(session.board().width(), 4);
        assert_eq!(session.board().height(), 9);
        assert!(session.board().is_empty());
        assert!(!session.state().is_terminal());
    }

    #[test]
    fn test_turn_messages() {
        let (mut sounds, _, _) = CountingSounds::new();
        let mut session = computer_session(7, 6, Duration::from_secs(3));
        assert_eq!(session.turn_message().as_deref(), Some("Your turn"));

        session.human_move(0, Instant::now(), &mut sounds);
        assert_eq!(session.turn_message().as_deref(), Some("Computer's turn"));

        let mut friends = friend_session(7, 6);
        assert_eq!(friends.turn_message().as_deref(), Some("Player 1's turn"));
        friends.human_move(0, Instant::now(), &mut sounds);
        assert_eq!(friends.turn_message().as_deref(), Some("Player 2's turn"));
    }

    #[test]
    fn test_outcome_messages() {
        let (mut sounds, _, _) = CountingSounds::new();
        let now = Instant::now();

        let mut friends = friend_session(7, 6);
        for col in 0..4 {
            friends.human_move(col, now, &mut sounds);
            if col < 3 {
                friends.human_move(col, now, &mut sounds);
            }
        }
        assert_eq!(friends.outcome_message().as_deref(), Some("Player 1 wins!"));
        assert_eq!(friends.turn_message(), None);

        let mut draw = friend_session(1, 1);
        draw.human_move(0, now, &mut sounds);
        assert_eq!(draw.outcome_message().as_deref(), Some("The game is a draw."));
    }

    /// Test opponent that always answers with the same column.
    struct Scripted(usize);

    impl Opponent for Scripted {
        fn select_column(&mut self, _state: &crate::game::GameState) -> Option<usize> {
            Some(self.0)
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn test_computer_win_message() {
        let (mut sounds, _, wins) = CountingSounds::new();
        let mut session = GameSession::new(
            GameConfig {
                width: 7,
                height: 6,
                colors: colors(),
                mode: GameMode::Computer,
            },
            Duration::ZERO,
            Box::new(Scripted(6)),
        );
        let t0 = Instant::now();

        // The computer stacks column 6 while the human shuffles between 0 and 1
        for col in [0, 1, 0, 1] {
            assert!(session.human_move(col, t0, &mut sounds));
            session.poll_pending(t0, &mut sounds);
        }

        assert_eq!(session.state().outcome(), Some(GameOutcome::Winner(Player::Two)));
        assert_eq!(session.outcome_message().as_deref(), Some("The computer won."));
        assert_eq!(wins.get(), 1);
    }

    #[test]
    fn test_human_win_message_in_computer_mode() {
        let (mut sounds, _, _) = CountingSounds::new();
        let mut session = GameSession::new(
            GameConfig {
                width: 7,
                height: 6,
                colors: colors(),
                mode: GameMode::Computer,
            },
            Duration::ZERO,
            Box::new(Scripted(6)),
        );
        let t0 = Instant::now();

        // The human takes the bottom row before the computer's column fills
        for col in [0, 1, 2] {
            assert!(session.human_move(col, t0, &mut sounds));
            session.poll_pending(t0, &mut sounds);
        }
        assert!(session.human_move(3, t0, &mut sounds));

        assert_eq!(session.state().outcome(), Some(GameOutcome::Winner(Player::One)));
        assert_eq!(session.outcome_message().as_deref(), Some("You won!"));
        // No move is scheduled once the game ended
        assert!(!session.is_thinking());
    }
}
