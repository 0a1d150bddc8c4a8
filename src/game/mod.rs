//! Core game logic: board representation, players and colors, and the game
//! state with move application and win/draw detection.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MAX_SIDE, MIN_SIDE};
pub use player::{Player, PlayerColor};
pub use state::{GameOutcome, GameState, MoveError};
