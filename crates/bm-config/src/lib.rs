//! # bm-config
//!
//! Layered configuration loading for boardmap using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BOARDMAP_*` prefix, `__` as separator)
//! 2. Project-level `./boardmap.toml`
//! 3. User-level `~/.config/boardmap/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BOARDMAP_API__USER_KEY` -> `api.user_key`,
//! `BOARDMAP_ENRICH__CONCURRENCY` -> `enrich.concurrency`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use bm_config::BoardmapConfig;
//!
//! let config = BoardmapConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("API: {}", config.api.base_url());
//! ```

mod api;
mod enrich;
mod error;
mod paging;
mod report;

pub use api::ApiConfig;
pub use enrich::EnrichConfig;
pub use error::ConfigError;
pub use paging::PagingConfig;
pub use report::{AggregateConfig, OnUnresolved, OutputConfig, ResolveConfig};

use bm_core::MAX_PAGE_SIZE;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the project-level config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "boardmap.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BoardmapConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub enrich: EnrichConfig,
    #[serde(default)]
    pub resolve: ResolveConfig,
    #[serde(default)]
    pub aggregate: AggregateConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl BoardmapConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// # Errors
    ///
    /// A missing `.env` is not an error; an unreadable or malformed one is
    /// [`ConfigError::Dotenv`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("BOARDMAP_").split("__"))
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NotConfigured`] without an API key, and
    /// [`ConfigError::InvalidValue`] for out-of-range limits or a delimiter
    /// that is not exactly one byte.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".to_string(),
            });
        }
        if self.paging.page_size == 0 || self.paging.page_size > MAX_PAGE_SIZE {
            return Err(invalid(
                "paging.page_size",
                format!("must be between 1 and {MAX_PAGE_SIZE}, got {}", self.paging.page_size),
            ));
        }
        if self.paging.max_pages == 0 {
            return Err(invalid("paging.max_pages", "must be at least 1".to_string()));
        }
        if self.enrich.max_attempts == 0 {
            return Err(invalid("enrich.max_attempts", "must be at least 1".to_string()));
        }
        if self.enrich.concurrency == 0 {
            return Err(invalid("enrich.concurrency", "must be at least 1".to_string()));
        }
        if self.output.delimiter_byte().is_none() {
            return Err(invalid(
                "output.delimiter",
                format!("must be a single byte, got {:?}", self.output.delimiter),
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("boardmap").join("config.toml"))
    }
}

fn invalid(field: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    }
}
