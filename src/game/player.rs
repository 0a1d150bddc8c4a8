use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// Seat number for display (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// The fixed palette players pick their marker color from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    Yellow,
    Red,
    Blue,
    Green,
    Orange,
    Purple,
    Pink,
    Teal,
    Lime,
    Brown,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 10] = [
        PlayerColor::Yellow,
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Orange,
        PlayerColor::Purple,
        PlayerColor::Pink,
        PlayerColor::Teal,
        PlayerColor::Lime,
        PlayerColor::Brown,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::Yellow => "Yellow",
            PlayerColor::Red => "Red",
            PlayerColor::Blue => "Blue",
            PlayerColor::Green => "Green",
            PlayerColor::Orange => "Orange",
            PlayerColor::Purple => "Purple",
            PlayerColor::Pink => "Pink",
            PlayerColor::Teal => "Teal",
            PlayerColor::Lime => "Lime",
            PlayerColor::Brown => "Brown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_number() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::One.to_cell(), Cell::One);
        assert_eq!(Player::Two.to_cell(), Cell::Two);
    }

    #[test]
    fn test_palette_has_ten_distinct_colors() {
        assert_eq!(PlayerColor::ALL.len(), 10);
        for (i, a) in PlayerColor::ALL.iter().enumerate() {
            for b in &PlayerColor::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_color_name() {
        assert_eq!(PlayerColor::Teal.name(), "Teal");
        assert_eq!(PlayerColor::Yellow.name(), "Yellow");
    }
}
