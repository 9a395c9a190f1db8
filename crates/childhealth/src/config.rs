//! Configuration management for childhealth.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults. The
//! defaults reproduce the stock console behavior, so running with no file and
//! no environment is always valid.

use std::collections::BTreeMap;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "childhealth";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "CHILDHEALTH_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CHILDHEALTH_`, sections split on `__`);
///    the `[vaccines]` section is file-only
/// 2. TOML config file at `~/.config/childhealth/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interactive shell behavior.
    pub shell: ShellConfig,
    /// Accounts created at startup.
    pub seed: SeedConfig,
    /// Additional vaccine knowledge base entries.
    pub vaccines: VaccinesConfig,
}

/// What the shell does when a menu choice or child ID is not a whole number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidNumberPolicy {
    /// End the session with an error.
    #[default]
    Fatal,
    /// Print a hint and ask again.
    Reprompt,
}

impl std::fmt::Display for InvalidNumberPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fatal => write!(f, "fatal"),
            Self::Reprompt => write!(f, "reprompt"),
        }
    }
}

/// Shell-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Handling of malformed numeric input.
    pub invalid_number: InvalidNumberPolicy,
    /// Print the welcome banner on startup.
    pub show_banner: bool,
}

/// Seed account configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Register the demo account at startup.
    pub demo_account: bool,
    /// Demo account username.
    pub demo_username: String,
    /// Demo account password.
    pub demo_password: String,
}

/// Vaccine knowledge base configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaccinesConfig {
    /// Disease name to description, merged over the built-in entries.
    pub extra: BTreeMap<String, String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            invalid_number: InvalidNumberPolicy::Fatal,
            show_banner: true,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_account: true,
            demo_username: "parentUsername".to_string(),
            demo_password: "parentPassword".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);
        tracing::debug!("Loading configuration from {}", config_file.display());

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .split("__")
                    // Env keys are case-folded; disease names are case-sensitive.
                    .filter(|key| !key.as_str().to_ascii_lowercase().starts_with("vaccines")),
            );

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.seed.demo_account && self.seed.demo_username.is_empty() {
            return Err(Error::config_validation(
                "seed.demo_username must not be empty when seed.demo_account is enabled",
            ));
        }

        for (disease, description) in &self.vaccines.extra {
            if disease.trim().is_empty() {
                return Err(Error::config_validation(
                    "vaccines.extra contains an empty disease name",
                ));
            }
            if description.trim().is_empty() {
                return Err(Error::config_validation(format!(
                    "vaccines.extra entry for {disease:?} has an empty description"
                )));
            }
        }

        Ok(())
    }
}
