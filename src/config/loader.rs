//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `.mcprofile.toml` in the working directory
//! 4. `~/.config/mcprofile/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub avatar: AvatarConfig,
}

/// Where requests go and how they are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Whole-request timeout. Unset keeps reqwest's default.
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            user_agent: constants::USER_AGENT.to_string(),
            timeout_secs: None,
        }
    }
}

/// Avatar defaults for the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Edge length in pixels.
    pub size: u32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            size: constants::DEFAULT_AVATAR_SIZE,
        }
    }
}

/// One config file as written: only the keys it sets are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub service: PartialService,
    pub avatar: PartialAvatar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialService {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialAvatar {
    pub size: Option<u32>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `local_dir` is searched for `.mcprofile.toml`; the binary passes the
    /// working directory.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_layers(global.as_deref(), local_dir, env)
    }

    /// Layering with an explicit global config path.
    pub fn load_layers(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = global_path {
            if path.exists() {
                tracing::trace!(path = %path.display(), "loading global config");
                config.merge(Self::load_partial(path)?);
            }
        }

        if let Some(dir) = local_dir {
            let path = dir.join(constants::CONFIG_FILENAME);
            if path.exists() {
                tracing::trace!(path = %path.display(), "loading local config");
                config.merge(Self::load_partial(&path)?);
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file, with defaults for unset keys.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.merge(Self::load_partial(path)?);
        Ok(config)
    }

    /// Load only the keys a file sets.
    pub fn load_partial(path: &Path) -> Result<PartialConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a higher layer into this one.
    ///
    /// Every key the layer sets overrides, even when it equals the built-in
    /// default. Unset keys leave the lower layer intact.
    fn merge(&mut self, other: PartialConfig) {
        if let Some(base_url) = other.service.base_url {
            self.service.base_url = base_url;
        }
        if let Some(user_agent) = other.service.user_agent {
            self.service.user_agent = user_agent;
        }
        if other.service.timeout_secs.is_some() {
            self.service.timeout_secs = other.service.timeout_secs;
        }
        if let Some(size) = other.avatar.size {
            self.avatar.size = size;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(constants::ENV_BASE_URL) {
            self.service.base_url = val;
        }
        if let Some(val) = env.get(constants::ENV_USER_AGENT) {
            self.service.user_agent = val;
        }
        if let Some(secs) = env.parse::<u64>(constants::ENV_TIMEOUT) {
            self.service.timeout_secs = Some(secs);
        }
        if let Some(size) = env.parse::<u32>(constants::ENV_AVATAR_SIZE) {
            self.avatar.size = size;
        }
    }
}
