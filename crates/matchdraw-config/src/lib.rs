//! Configuration system for matchdraw.
//!
//! Describe the two sides of a draw, their exclusion tags and the run
//! parameters in a TOML or YAML file instead of code.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use matchdraw_config::DrawConfig;
//!
//! let config = DrawConfig::from_toml_str(r#"
//!     [side_a]
//!     items = [
//!         { name = "a0", tags = ["x"] },
//!         { name = "a1" },
//!     ]
//!
//!     [side_b]
//!     items = [
//!         { name = "b0", tags = ["x"] },
//!         { name = "b1" },
//!     ]
//!
//!     [run]
//!     trials = 1000
//!     random_seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.run.trials, Some(1000));
//! let problem = config.to_problem().unwrap();
//! assert_eq!(problem.size(), 2);
//! ```
//!
//! Fall back to the bundled preset when no file is given:
//!
//! ```
//! use matchdraw_config::DrawConfig;
//!
//! let config = DrawConfig::champions_league_2022().unwrap();
//! assert_eq!(config.side_a.items.len(), 8);
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use matchdraw_core::{DrawProblem, Item, MAX_ITEMS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CHAMPIONS_LEAGUE_2022: &str = include_str!("../presets/ucl-2022-r16.toml");

/// Largest supported display precision.
pub const MAX_PRECISION: u32 = 6;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main draw configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DrawConfig {
    /// Display name of the draw.
    #[serde(default)]
    pub name: Option<String>,

    /// Items drawn one at a time.
    pub side_a: SideConfig,

    /// Items chosen as partners.
    pub side_b: SideConfig,

    /// Trial loop configuration.
    #[serde(default)]
    pub run: RunConfig,

    /// Memoization cache persistence.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl DrawConfig {
    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or doesn't parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Returns the bundled Champions League 2022/23 round-of-16 draw.
    pub fn champions_league_2022() -> Result<Self, ConfigError> {
        Self::from_toml_str(CHAMPIONS_LEAGUE_2022)
    }

    /// Sets the number of trials.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.run.trials = Some(trials);
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.run.random_seed = Some(seed);
        self
    }

    /// Sets the cache file location.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache.path = path.into();
        self
    }

    /// Checks the configuration for errors serde cannot catch.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = self.side_a.items.len();
        if n == 0 || self.side_b.items.is_empty() {
            return Err(ConfigError::Invalid(
                "both sides need at least one item".to_string(),
            ));
        }
        if n != self.side_b.items.len() {
            return Err(ConfigError::Invalid(format!(
                "side_a has {} items but side_b has {}",
                n,
                self.side_b.items.len()
            )));
        }
        if n > MAX_ITEMS {
            return Err(ConfigError::Invalid(format!(
                "{n} items per side exceeds the limit of {MAX_ITEMS}"
            )));
        }
        self.side_a.check_unique_names("side_a")?;
        self.side_b.check_unique_names("side_b")?;
        self.run.validate()
    }

    /// Validates the configuration and builds the draw problem.
    pub fn to_problem(&self) -> Result<DrawProblem, ConfigError> {
        self.validate()?;
        let problem = DrawProblem::new(self.side_a.to_items(), self.side_b.to_items())
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(problem.with_labels(self.side_a.label(), self.side_b.label()))
    }

    /// Returns the display name, if configured.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("draw")
    }
}

/// One side of the draw.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SideConfig {
    /// Column or row header for this side.
    #[serde(default)]
    pub label: Option<String>,

    /// Items in draw order.
    pub items: Vec<ItemConfig>,
}

impl SideConfig {
    fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    fn to_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .map(|item| Item::new(item.name.clone(), item.tags.iter().cloned()))
            .collect()
    }

    fn check_unique_names(&self, side: &str) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "{side} lists '{}' more than once",
                    item.name
                )));
            }
        }
        Ok(())
    }
}

/// One item with its exclusion tags.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ItemConfig {
    pub name: String,

    /// Items sharing any tag are never paired.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Trial loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct RunConfig {
    /// Number of trials; asked interactively when absent.
    #[serde(default)]
    pub trials: Option<u64>,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Decimal places of the percentage table.
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Percentages of the trial count at which progress is reported.
    #[serde(default = "default_milestones")]
    pub milestones: Vec<u32>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trials: None,
            random_seed: None,
            precision: default_precision(),
            milestones: default_milestones(),
        }
    }
}

impl RunConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == Some(0) {
            return Err(ConfigError::Invalid(
                "trials must be a positive integer".to_string(),
            ));
        }
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "precision {} exceeds {}",
                self.precision, MAX_PRECISION
            )));
        }
        let mut previous = 0;
        for &milestone in &self.milestones {
            if milestone <= previous || milestone >= 100 {
                return Err(ConfigError::Invalid(format!(
                    "milestones must increase strictly within 1..=99, got {:?}",
                    self.milestones
                )));
            }
            previous = milestone;
        }
        Ok(())
    }
}

fn default_precision() -> u32 {
    2
}

fn default_milestones() -> Vec<u32> {
    vec![10, 25, 50, 75]
}

/// Memoization cache persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// File the cache is loaded from and saved to.
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,

    /// Load the cache at start; asked interactively when absent.
    #[serde(default)]
    pub load: Option<bool>,

    /// Save the cache at the end; asked interactively when absent.
    #[serde(default)]
    pub save: Option<bool>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
            load: None,
            save: None,
        }
    }
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("matchdraw-cache.bin")
}
