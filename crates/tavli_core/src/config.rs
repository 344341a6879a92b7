use std::path::Path;

use tracing::warn;

use crate::dice_source::RandomDice;
use crate::error::ConfigError;
use crate::variant::RuleVariant;

/// Game setup, loadable from TOML.
///
/// ```toml
/// variant = "plakoto"
/// seed = 42
/// preloaded_dice = [3, 1, 6, 6]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub variant: RuleVariant,
    /// Fixed dice seed for replays; drawn from entropy when absent.
    pub seed: Option<u64>,
    /// Values rolled before any random ones.
    pub preloaded_dice: Vec<u8>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            variant: RuleVariant::FacingCapture,
            seed: None,
            preloaded_dice: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(bad) = self.preloaded_dice.iter().find(|v| !(1..=6).contains(*v)) {
            return Err(ConfigError::Validation(format!(
                "preloaded_dice value {bad} must be in 1..=6"
            )));
        }
        Ok(())
    }

    /// Random dice source honouring `seed` and `preloaded_dice`.
    pub fn dice_source(&self) -> RandomDice {
        let mut source = match self.seed {
            Some(seed) => RandomDice::seeded(seed),
            None => RandomDice::new(),
        };
        source.load(&self.preloaded_dice);
        source
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
