use std::path::PathBuf;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// The board dimensions a user asked for are outside the allowed range.
///
/// This is the only user-visible validation error in the game flow; it blocks
/// the transition out of the board-size screen and mutates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("please enter values between 1 and 10 for both width and height")]
pub struct BoardSizeError {
    pub width: i32,
    pub height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.default_width must be between 1 and 10".into());
        assert_eq!(
            err.to_string(),
            "config validation error: board.default_width must be between 1 and 10"
        );
    }

    #[test]
    fn test_board_size_error_display() {
        let err = BoardSizeError { width: 0, height: 11 };
        assert_eq!(
            err.to_string(),
            "please enter values between 1 and 10 for both width and height"
        );
        assert_eq!(err.width, 0);
        assert_eq!(err.height, 11);
    }
}
