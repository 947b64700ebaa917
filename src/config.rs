//! Game configuration
//!
//! Settings come from an optional `config.toml` in the data directory (or a path
//! given with `--config`); command line flags override individual values.
//!
//! ```toml
//! words_dir = "/usr/share/hangman/words"
//! scores_path = "/home/me/hangman-scores.json"
//!
//! [rules.hard]
//! max_attempts = 5
//! starting_hints = 0
//! ```

use crate::core::Difficulty;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of wrong guesses allowed per level
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Attempts and starting hints for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRules {
    pub max_attempts: u32,
    pub starting_hints: u32,
}

impl DifficultyRules {
    #[must_use]
    pub const fn easy() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            starting_hints: 3,
        }
    }

    #[must_use]
    pub const fn hard() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            starting_hints: 1,
        }
    }

    #[must_use]
    pub const fn custom() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            starting_hints: 2,
        }
    }
}

/// Per-difficulty rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default = "DifficultyRules::easy")]
    pub easy: DifficultyRules,
    #[serde(default = "DifficultyRules::hard")]
    pub hard: DifficultyRules,
    #[serde(default = "DifficultyRules::custom")]
    pub custom: DifficultyRules,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            easy: DifficultyRules::easy(),
            hard: DifficultyRules::hard(),
            custom: DifficultyRules::custom(),
        }
    }
}

impl Rules {
    #[must_use]
    pub const fn for_difficulty(&self, difficulty: Difficulty) -> DifficultyRules {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Hard => self.hard,
            Difficulty::Custom => self.custom,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory holding `<category>.txt` word lists; built-in lists when unset
    pub words_dir: Option<PathBuf>,
    /// Leaderboard file; `scores.json` in the data directory when unset
    pub scores_path: Option<PathBuf>,
    pub rules: Rules,
}

impl GameConfig {
    /// Per-user data directory (`<data dir>/hangman`), or the working directory
    #[must_use]
    pub fn data_dir() -> PathBuf {
        dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join("hangman"))
    }

    /// Default config file path (`<data dir>/hangman/config.toml`)
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Log file path (`<data dir>/hangman/hangman.log`)
    #[must_use]
    pub fn log_path() -> PathBuf {
        Self::data_dir().join("hangman.log")
    }

    /// Leaderboard file in effect
    #[must_use]
    pub fn scores_path(&self) -> PathBuf {
        self.scores_path
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("scores.json"))
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or holds
    /// invalid rules.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or holds invalid rules.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the explicit config file, or the default one if it exists
    ///
    /// A missing default config yields the defaults; a missing explicit file is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded, or if an
    /// explicit path does not exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = Self::default_config_path();
        if path.exists() {
            tracing::info!(path = %path.display(), "loading config");
            Self::from_file(&path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        for (name, rules) in [
            ("easy", self.rules.easy),
            ("hard", self.rules.hard),
            ("custom", self.rules.custom),
        ] {
            if rules.max_attempts == 0 {
                bail!("rules.{name}.max_attempts must be at least 1");
            }
        }
        Ok(())
    }
}
