//! # qs-config
//!
//! Layered configuration loading for quiz-saver using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUIZSAVER_*` prefix, `__` as separator)
//! 2. Project-level `.quiz-saver/config.toml`
//! 3. User-level `~/.config/quiz-saver/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUIZSAVER_AUTH__TOKEN_COMMAND` -> `auth.token_command`,
//! `QUIZSAVER_DOCS__API_BASE_URL` -> `docs.api_base_url`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use qs_config::QsConfig;
//!
//! let config = QsConfig::load_with_dotenv().expect("config");
//! if !config.auth.is_configured() {
//!     eprintln!("no credential source configured");
//! }
//! ```

mod auth;
mod docs;
mod error;
mod storage;
mod watch;

pub use auth::AuthConfig;
pub use docs::DocsConfig;
pub use error::ConfigError;
pub use storage::StorageConfig;
pub use watch::{SelectorConfig, WatchConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QsConfig {
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

impl QsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".quiz-saver/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("QUIZSAVER_").split("__"))
    }

    /// Reject values that would make the pipeline unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.docs.base_url();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "docs.api_base_url".into(),
                reason: format!("expected an http(s) URL, got '{base}'"),
            });
        }
        if self.watch.notification_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "watch.notification_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quiz-saver").join("config.toml"))
    }

    /// Load `.env` from the workspace root, walking up from
    /// `CARGO_MANIFEST_DIR` when set. Silently does nothing if none is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
