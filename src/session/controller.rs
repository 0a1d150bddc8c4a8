use std::time::{Duration, Instant};

use crate::ai::RandomOpponent;
use crate::config::AppConfig;
use crate::error::BoardSizeError;
use crate::game::{Player, PlayerColor};

use super::game::{validate_board_size, GameConfig, GameMode, GameSession, PlayerColors};
use super::phase::{ColorDraft, Phase, Screen};
use super::sounds::SoundEffects;

/// Owns the top-level phase, the configuration chosen along the way, and the
/// menu overlay. All in-game logic is delegated to the [`GameSession`].
///
/// Every operation is a defensive no-op when called in a phase it does not
/// apply to; board-size validation is the only operation that surfaces an
/// error to the user.
pub struct SessionController {
    phase: Phase,
    previous: Option<Screen>,
    show_menu: bool,
    default_width: usize,
    default_height: usize,
    think_delay: Duration,
    sounds: Box<dyn SoundEffects>,
}

impl SessionController {
    pub fn new(config: &AppConfig, sounds: Box<dyn SoundEffects>) -> Self {
        SessionController {
            phase: Phase::Opening,
            previous: None,
            show_menu: false,
            default_width: config.board.default_width,
            default_height: config.board.default_height,
            think_delay: Duration::from_millis(config.computer.think_delay_ms),
            sounds,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn screen(&self) -> Screen {
        self.phase.screen()
    }

    pub fn menu_open(&self) -> bool {
        self.show_menu
    }

    pub fn previous_screen(&self) -> Option<Screen> {
        self.previous
    }

    /// Board dimensions offered as the starting input on the size screen.
    pub fn default_board_size(&self) -> (usize, usize) {
        (self.default_width, self.default_height)
    }

    pub fn session(&self) -> Option<&GameSession> {
        match &self.phase {
            Phase::Game(session) => Some(session),
            _ => None,
        }
    }

    /// Opening → color selection.
    pub fn start_game(&mut self) {
        if let Phase::Opening = self.phase {
            self.previous = Some(Screen::Opening);
            self.phase = Phase::ColorSelection(ColorDraft::default());
        }
    }

    /// Assign a palette color to a player. A color already held by the other
    /// player is rejected so the two can never match. Returns whether the
    /// assignment was applied.
    pub fn select_color(&mut self, player: Player, color: PlayerColor) -> bool {
        let Phase::ColorSelection(draft) = &mut self.phase else {
            return false;
        };
        if draft.chosen(player.other()) == Some(color) {
            return false;
        }
        match player {
            Player::One => draft.player1 = Some(color),
            Player::Two => draft.player2 = Some(color),
        }
        true
    }

    /// Color selection → board size selection, once both colors are set.
    pub fn confirm_colors(&mut self) -> bool {
        let Phase::ColorSelection(draft) = &self.phase else {
            return false;
        };
        let (Some(player1), Some(player2)) = (draft.player1, draft.player2) else {
            return false;
        };
        debug_assert_ne!(player1, player2);

        self.previous = Some(Screen::ColorSelection);
        self.phase = Phase::BoardSizeSelection {
            colors: PlayerColors { player1, player2 },
        };
        true
    }

    /// Validate the requested dimensions and move on to mode selection.
    /// Out-of-range input produces a blocking error and no transition.
    pub fn set_board_size(&mut self, width: i32, height: i32) -> Result<(), BoardSizeError> {
        let (width, height) = validate_board_size(width, height)?;
        if let Phase::BoardSizeSelection { colors } = &self.phase {
            let colors = *colors;
            self.previous = Some(Screen::BoardSizeSelection);
            self.phase = Phase::ModeSelection {
                colors,
                width,
                height,
            };
        }
        Ok(())
    }

    /// Mode selection → game, with the configuration frozen and a fresh
    /// game state.
    pub fn select_game_mode(&mut self, mode: GameMode) {
        if let Phase::ModeSelection {
            colors,
            width,
            height,
        } = &self.phase
        {
            let config = GameConfig {
                width: *width,
                height: *height,
                colors: *colors,
                mode,
            };
            self.previous = Some(Screen::ModeSelection);
            self.phase = Phase::Game(GameSession::new(
                config,
                self.think_delay,
                Box::new(RandomOpponent::new()),
            ));
        }
    }

    /// A board column was clicked. Delegated to the session, which ignores
    /// the intent while the opponent thinks or after the game ended.
    pub fn column_clicked(&mut self, column: usize, now: Instant) -> bool {
        match &mut self.phase {
            Phase::Game(session) => session.human_move(column, now, self.sounds.as_mut()),
            _ => false,
        }
    }

    /// Drive time-based behavior: fires the computer's scheduled move once
    /// its thinking delay has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Phase::Game(session) = &mut self.phase {
            session.poll_pending(now, self.sounds.as_mut());
        }
    }

    /// Start a new game with the currently configured dimensions.
    pub fn restart_game(&mut self) {
        if let Phase::Game(session) = &mut self.phase {
            session.restart();
        }
    }

    pub fn toggle_menu(&mut self) {
        if !matches!(self.phase, Phase::Opening) {
            self.show_menu = !self.show_menu;
        }
    }

    /// Close the menu without further effect.
    pub fn continue_game(&mut self) {
        self.show_menu = false;
    }

    /// Hard reset: back to the opening screen with configuration, game state,
    /// and navigation record cleared. The next game starts from the defaults.
    pub fn go_to_start(&mut self) {
        self.phase = Phase::Opening;
        self.previous = None;
        self.show_menu = false;
    }

    /// Navigate to the recorded previous screen. Leaving a game that has
    /// pieces on the board or has ended resets it first.
    pub fn return_to_previous_screen(&mut self) {
        let Some(target) = self.previous.take() else {
            return;
        };

        if let Phase::Game(session) = &mut self.phase {
            if session.state().is_terminal() || !session.board().is_empty() {
                session.restart();
            }
        }
        self.show_menu = false;

        self.phase = match (target, std::mem::replace(&mut self.phase, Phase::Opening)) {
            (Screen::Opening, _) => Phase::Opening,
            (Screen::ColorSelection, Phase::BoardSizeSelection { colors }) => {
                Phase::ColorSelection(ColorDraft {
                    player1: Some(colors.player1),
                    player2: Some(colors.player2),
                })
            }
            (Screen::BoardSizeSelection, Phase::ModeSelection { colors, .. }) => {
                Phase::BoardSizeSelection { colors }
            }
            (Screen::ModeSelection, Phase::Game(session)) => {
                let config = *session.config();
                Phase::ModeSelection {
                    colors: config.colors,
                    width: config.width,
                    height: config.height,
                }
            }
            // Recorded screen does not match the current phase; stay put
            (_, current) => current,
        };
    }

    pub fn is_thinking(&self) -> bool {
        self.session().is_some_and(GameSession::is_thinking)
    }
}
