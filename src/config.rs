use std::path::Path;

use crate::error::ConfigError;
use crate::game::{MAX_SIDE, MIN_SIDE};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardDefaults,
    pub computer: ComputerConfig,
    pub sound: SoundConfig,
}

/// Board dimensions used for the first game and after a hard reset to the
/// opening screen. A restart mid-session keeps the configured dimensions.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardDefaults {
    pub default_width: usize,
    pub default_height: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Simulated thinking delay before the computer's move, in milliseconds.
    pub think_delay_ms: u64,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    pub enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: BoardDefaults::default(),
            computer: ComputerConfig::default(),
            sound: SoundConfig::default(),
        }
    }
}

impl Default for BoardDefaults {
    fn default() -> Self {
        BoardDefaults {
            default_width: 7,
            default_height: 6,
        }
    }
}

impl Default for ComputerConfig {
    fn default() -> Self {
        ComputerConfig { think_delay_ms: 3000 }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        SoundConfig { enabled: true }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_range = MIN_SIDE..=MAX_SIDE;
        if !side_range.contains(&self.board.default_width) {
            return Err(ConfigError::Validation(
                "board.default_width must be between 1 and 10".into(),
            ));
        }
        if !side_range.contains(&self.board.default_height) {
            return Err(ConfigError::Validation(
                "board.default_height must be between 1 and 10".into(),
            ));
        }
        if self.computer.think_delay_ms > 60_000 {
            return Err(ConfigError::Validation(
                "computer.think_delay_ms must be <= 60000".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
