// src/config/env.rs
//
// Runtime configuration: the NEIS credential and endpoint URLs.
// Read once at startup; `.env` in the working directory is honored.

use std::fmt;

use crate::error::ConfigError;
use super::consts::*;

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: Option<String>,
    pub school_info_url: String,
    pub meal_info_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            school_info_url: s!(SCHOOL_INFO_URL),
            meal_info_url: s!(MEAL_INFO_URL),
        }
    }
}

// Keep the key out of logs and panics.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("school_info_url", &self.school_info_url)
            .field("meal_info_url", &self.meal_info_url)
            .finish()
    }
}

impl Config {
    /// Load `.env` (if any), then read the process environment.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => logf!("Config: Loaded {}", path.display()),
            Err(e) if e.not_found() => logd!("Config: No .env file"),
            Err(e) => loge!("Config: .env unreadable: {}", e),
        }
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            api_key: non_blank(API_KEY_VAR).map(|k| s!(k.trim())),
            school_info_url: non_blank(SCHOOL_URL_VAR).unwrap_or(defaults.school_info_url),
            meal_info_url: non_blank(MEAL_URL_VAR).unwrap_or(defaults.meal_info_url),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key: String = key.into();
        self.api_key = if key.trim().is_empty() { None } else { Some(key) };
        self
    }

    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
