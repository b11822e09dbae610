use std::path::Path;

use tracing::warn;

use crate::ai::{Difficulty, DEFAULT_DEPTH};
use crate::error::ConfigError;

/// Deepest search the config accepts; each extra ply multiplies the work by
/// up to seven.
pub const MAX_SEARCH_DEPTH: usize = 10;

/// How a new game's computer player behaves.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search_depth: usize,
    pub difficulty: Difficulty,
    /// Fixed seed for every random choice; fresh entropy when unset.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search_depth: DEFAULT_DEPTH,
            difficulty: Difficulty::Hard,
            seed: None,
        }
    }
}

/// Computer-vs-computer match settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub games: usize,
    pub player_one: Difficulty,
    pub player_two: Difficulty,
    /// Base seed; game `i` is seeded from it and `i`.
    pub seed: Option<u64>,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            games: 10,
            player_one: Difficulty::Hard,
            player_two: Difficulty::Easy,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub selfplay: SelfPlayConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.search_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "engine.search_depth must be <= {MAX_SEARCH_DEPTH}"
            )));
        }
        if self.selfplay.games == 0 {
            return Err(ConfigError::Validation(
                "selfplay.games must be > 0".into(),
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
