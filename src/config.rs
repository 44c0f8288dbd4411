//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/symcheck/symcheck.toml`
//! 3. Environment variables: `SYMCHECK_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, DEFAULT_HISTORY_LIMIT};
use crate::domain::ESTIMATED_TOTAL_QUESTIONS;
use crate::util::path::PathExt;

const APP_NAME: &str = "symcheck";
const ENV_PREFIX: &str = "SYMCHECK";

/// Unified configuration for symcheck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Denominator of the progress bar (approximate number of questions)
    pub estimated_total: usize,
    /// Where completed assessments are stored
    pub history_file: PathBuf,
    /// Number of assessments kept in history
    pub history_limit: usize,
    /// Record completed assessments automatically
    pub save_history: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            estimated_total: ESTIMATED_TOTAL_QUESTIONS,
            history_file: default_history_file(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            save_history: true,
        }
    }
}

/// Raw settings for intermediate parsing (None means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub estimated_total: Option<usize>,
    pub history_file: Option<PathBuf>,
    pub history_limit: Option<usize>,
    pub save_history: Option<bool>,
}

fn default_history_file() -> PathBuf {
    ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().join("history.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.symcheck/history.toml"))
}

/// Get the XDG config directory for symcheck.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("symcheck.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            estimated_total: overlay.estimated_total.unwrap_or(self.estimated_total),
            history_file: overlay
                .history_file
                .clone()
                .unwrap_or_else(|| self.history_file.clone()),
            history_limit: overlay.history_limit.unwrap_or(self.history_limit),
            save_history: overlay.save_history.unwrap_or(self.save_history),
        }
    }

    fn expand_paths(&mut self) {
        self.history_file = self.history_file.expanded();
    }

    /// Load settings from defaults, the global config file and `SYMCHECK_*`.
    pub fn load() -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_from(global.as_deref())
    }

    /// Like [`Settings::load`] but with an explicit config file.
    #[instrument(level = "debug")]
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        current = Self::apply_env_overrides(current, Environment::with_prefix(ENV_PREFIX))?;
        current.expand_paths();

        debug!(?current, "settings loaded");
        Ok(current)
    }

    /// Apply SYMCHECK_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        environment: Environment,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                environment
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_int("estimated_total") {
            settings.estimated_total = to_usize("estimated_total", val)?;
        }
        if let Ok(val) = config.get_string("history_file") {
            settings.history_file = PathBuf::from(val);
        }
        if let Ok(val) = config.get_int("history_limit") {
            settings.history_limit = to_usize("history_limit", val)?;
        }
        if let Ok(val) = config.get_bool("save_history") {
            settings.save_history = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# symcheck configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/symcheck/symcheck.toml
#   Env:    SYMCHECK_* environment variables (e.g. SYMCHECK_HISTORY_LIMIT=20)

# Denominator of the progress display. The reference tree's longest path is
# 7 questions; most assessments finish in 6 or fewer.
# estimated_total = 6

# Where completed assessments are stored
# history_file = "~/.local/share/symcheck/history.toml"

# Number of assessments kept (oldest dropped first)
# history_limit = 10

# Record completed assessments automatically
# save_history = true
"#
        .to_string()
    }
}

fn to_usize(key: &str, value: i64) -> Result<usize, ApplicationError> {
    usize::try_from(value).map_err(|_| ApplicationError::Config {
        message: format!("{key} must be a non-negative integer, got {value}"),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
