use crate::game::GameState;

/// Strategy interface for the computer opponent.
pub trait Opponent {
    /// Pick a column among the legal (non-full) columns, or `None` when the
    /// board offers no open column.
    fn select_column(&mut self, state: &GameState) -> Option<usize>;

    /// Return the opponent's display name.
    fn name(&self) -> &str;
}
