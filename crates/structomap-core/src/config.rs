//! Projector configuration
//!
//! A [`ProjectorConfig`] can be injected explicitly with
//! [`Projector::with_config`](crate::Projector::with_config), or installed as
//! the process-wide default picked up by [`Projector::new`](crate::Projector::new).
//! Changing the default only affects projectors constructed afterwards.

use crate::casing::KeyCase;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::sync::RwLock;

/// Environment variable read by [`ProjectorConfig::from_env`]
pub const KEY_CASE_ENV: &str = "STRUCTOMAP_KEY_CASE";

static DEFAULT_CONFIG: RwLock<ProjectorConfig> = RwLock::new(ProjectorConfig { key_case: None });

/// Construction-time settings for a projector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorConfig {
    /// Case applied to every output key; `None` leaves keys untouched
    pub key_case: Option<KeyCase>,
}

impl ProjectorConfig {
    /// Config with the given key case
    pub fn with_key_case(key_case: KeyCase) -> Self {
        Self {
            key_case: Some(key_case),
        }
    }

    /// Read configuration from the environment
    ///
    /// An unset or empty variable yields the default config; an unknown case
    /// name or a non-UTF-8 value is a configuration error.
    pub fn from_env() -> Result<Self> {
        match std::env::var(KEY_CASE_ENV) {
            Ok(value) if value.trim().is_empty() => Ok(Self::default()),
            Ok(value) => Ok(Self {
                key_case: Some(value.parse()?),
            }),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(Error::Configuration {
                message: format!("{} is not valid UTF-8: {:?}", KEY_CASE_ENV, raw),
            }),
        }
    }

    /// Merge another configuration into this one; set fields of `other` win
    pub fn merge(&mut self, other: ProjectorConfig) {
        if other.key_case.is_some() {
            self.key_case = other.key_case;
        }
    }
}

/// Snapshot of the process-wide default configuration
pub fn default_config() -> ProjectorConfig {
    match DEFAULT_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the process-wide default configuration
pub fn set_default_config(config: ProjectorConfig) {
    log::debug!("Setting default projector config: {:?}", config);
    match DEFAULT_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Replace only the default key case
pub fn set_default_key_case(key_case: Option<KeyCase>) {
    let mut config = default_config();
    config.key_case = key_case;
    set_default_config(config);
}
