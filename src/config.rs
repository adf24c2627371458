//! # Configuration Module
//!
//! This module provides configuration support for copyright-bump, so that a
//! project can record its copyright owner, symbol, and exclusions once
//! instead of passing them on every run.
//!
//! Configuration can be specified in a `.copyright-bump.toml` file or via the
//! `COPYRIGHT_BUMP_CONFIG` environment variable.
//!
//! ```toml
//! owner = "Pete R. Jemian"
//! symbol = "(c)"
//! exclude-dirs = ["vendor", "docs/_build"]
//! ignore = ["*.min.js"]
//! accept-mime-types = ["application/toml"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::notice::TargetYear;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".copyright-bump.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "COPYRIGHT_BUMP_CONFIG";

/// Settings loaded from a configuration file. Every key is optional.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// Copyright symbol text, e.g. "(C)"
  #[serde(default)]
  pub symbol: Option<String>,

  /// Copyright owner text
  #[serde(default)]
  pub owner: Option<String>,

  /// Target year; defaults to the current year
  #[serde(default)]
  pub year: Option<String>,

  /// Directory names or trailing path fragments to skip, in addition to the
  /// built-in list
  #[serde(default)]
  pub exclude_dirs: Vec<String>,

  /// Glob patterns for files to skip
  #[serde(default)]
  pub ignore: Vec<String>,

  /// MIME types to treat as text in addition to `text/*`
  #[serde(default)]
  pub accept_mime_types: Vec<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value in the config file is not usable.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: &'static str, message: String },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - `symbol` and `owner`, when present, are non-empty
  /// - `year`, when present, is a 4-digit year
  /// - exclusion entries are non-empty
  fn validate(&self) -> Result<(), ConfigError> {
    for (key, value) in [("symbol", &self.symbol), ("owner", &self.owner)] {
      if value.as_deref().is_some_and(str::is_empty) {
        return Err(ConfigError::InvalidValue {
          key,
          message: "must not be empty".to_string(),
        });
      }
    }

    if let Some(ref year) = self.year {
      year.parse::<TargetYear>().map_err(|e| ConfigError::InvalidValue {
        key: "year",
        message: e.to_string(),
      })?;
    }

    if self.exclude_dirs.iter().any(|d| d.trim_matches('/').is_empty()) {
      return Err(ConfigError::InvalidValue {
        key: "exclude-dirs",
        message: "entries must name a directory".to_string(),
      });
    }

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `COPYRIGHT_BUMP_CONFIG` environment variable
/// 3. `.copyright-bump.toml` in the project root
pub fn discover_config_path(explicit_path: Option<&Path>, project_root: &Path) -> Option<PathBuf> {
  // 1. Explicit path from CLI takes highest priority
  if let Some(path) = explicit_path {
    if path.exists() {
      debug!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    debug!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  // 2. Check environment variable
  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      debug!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    debug!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  // 3. Check project root
  let project_config = project_root.join(DEFAULT_CONFIG_FILENAME);
  if project_config.is_file() {
    debug!("Using project config: {}", project_config.display());
    return Some(project_config);
  }

  debug!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `None` when discovery is disabled or no file is found.
pub fn load_config(explicit_path: Option<&Path>, project_root: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    debug!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, project_root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
