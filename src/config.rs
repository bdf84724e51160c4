use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
}

/// Who moves first in a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Random,
    Human,
    Computer,
}

impl FirstPlayer {
    /// Resolve to a concrete player, flipping a coin for `Random`.
    pub fn resolve<R: rand::Rng>(self, rng: &mut R) -> Player {
        match self {
            FirstPlayer::Human => Player::HUMAN,
            FirstPlayer::Computer => Player::COMPUTER,
            FirstPlayer::Random => {
                if rng.random_bool(0.5) {
                    Player::HUMAN
                } else {
                    Player::COMPUTER
                }
            }
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause before the computer's reply, in milliseconds. Purely pacing.
    pub computer_delay_ms: u64,
    pub first_player: FirstPlayer,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            computer_delay_ms: 500,
            first_player: FirstPlayer::Random,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Period of the frame accent color cycle, in milliseconds.
    /// 0 disables the animation.
    pub color_cycle_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            color_cycle_ms: 3000,
        }
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
        if self.game.computer_delay_ms > 10_000 {
            return Err(ConfigError::Validation(
                "game.computer_delay_ms must be <= 10000".into(),
            ));
        }
        if self.ui.color_cycle_ms != 0 && self.ui.color_cycle_ms < 100 {
            return Err(ConfigError::Validation(
                "ui.color_cycle_ms must be 0 or >= 100".into(),
            ));
        }
        Ok(())
    }
}
