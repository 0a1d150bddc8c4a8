use crate::game::{Player, PlayerColor};

use super::game::{GameSession, PlayerColors};

/// Identifies a screen without its data; used to record where "back" leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Opening,
    ColorSelection,
    BoardSizeSelection,
    ModeSelection,
    Game,
}

/// Partially chosen colors on the color-selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorDraft {
    pub player1: Option<PlayerColor>,
    pub player2: Option<PlayerColor>,
}

impl ColorDraft {
    pub fn chosen(&self, player: Player) -> Option<PlayerColor> {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Both players picked a color; the selection rules keep them distinct.
    pub fn complete(&self) -> bool {
        self.player1.is_some() && self.player2.is_some()
    }
}

/// Top-level phase machine. Each variant carries exactly the configuration
/// accumulated so far, so states like "in game without a grid" cannot be
/// represented.
pub enum Phase {
    Opening,
    ColorSelection(ColorDraft),
    BoardSizeSelection {
        colors: PlayerColors,
    },
    ModeSelection {
        colors: PlayerColors,
        width: usize,
        height: usize,
    },
    Game(GameSession),
}

impl Phase {
    pub fn screen(&self) -> Screen {
        match self {
            Phase::Opening => Screen::Opening,
            Phase::ColorSelection(_) => Screen::ColorSelection,
            Phase::BoardSizeSelection { .. } => Screen::BoardSizeSelection,
            Phase::ModeSelection { .. } => Screen::ModeSelection,
            Phase::Game(_) => Screen::Game,
        }
    }
}
