//! Portal configuration
//!
//! Layered with figment, later layers winning:
//!
//! 1. built-in defaults
//! 2. optional TOML file
//! 3. `PORTAL_`-prefixed environment variables (`__` separates nested keys,
//!    e.g. `PORTAL_RETRY__MAX_ATTEMPTS=5`)

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_PREFIX: &str = "PORTAL_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    /// Root of the directory served by [`crate::FileDataSource`]
    pub data_dir: PathBuf,
    /// Default tracing filter; `RUST_LOG` takes precedence
    pub log_filter: String,
    pub retry: RetrySettings,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            log_filter: "info".to_string(),
            retry: RetrySettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 200,
            max_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("retry.max_attempts must be at least 1")]
    NoAttempts,

    #[error("retry.base_delay_ms ({base}) exceeds retry.max_delay_ms ({max})")]
    DelayOrder { base: u64, max: u64 },
}

impl PortalConfig {
    /// Figment with every layer; a missing TOML file is skipped.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(PortalConfig::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load and validate.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment(file))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: PortalConfig = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.retry.base_delay_ms > self.retry.max_delay_ms {
            return Err(ConfigError::DelayOrder {
                base: self.retry.base_delay_ms,
                max: self.retry.max_delay_ms,
            });
        }
        Ok(())
    }
}
