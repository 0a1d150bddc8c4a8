use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// The in-game engine state: grid, active player, and outcome.
///
/// `apply_move` is the sole mutating entry point; once the outcome is set the
/// grid is immutable until a fresh state replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state for a validated board size. Player One starts.
    pub fn new(width: usize, height: usize) -> Self {
        GameState {
            board: Board::new(width, height),
            current_player: Player::One,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move for the active player.
    ///
    /// The marker lands in the lowest empty cell of `column`; then, in order:
    /// win scan for the mover, board-full check, player toggle. The player
    /// does not switch when the move ends the game.
    pub fn apply_move(&mut self, column: usize) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_piece(column, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => MoveError::ColumnFull,
                super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        if self.board.has_line_of_four(self.current_player.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(self.outcome)
    }
}
