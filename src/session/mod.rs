//! Session controller: the phase state machine from opening screen to game,
//! the configuration accumulated along the way, the menu overlay, and the
//! scheduling of the computer opponent's delayed move.

mod controller;
mod game;
mod phase;
mod sounds;

pub use controller::SessionController;
pub use game::{validate_board_size, GameConfig, GameMode, GameSession, PlayerColors};
pub use phase::{ColorDraft, Phase, Screen};
pub use sounds::{Silent, SoundEffects, TerminalBell};
