//! # faq-config
//!
//! Layered configuration loading for the FAQ tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FAQ_*` prefix, `__` as separator)
//! 2. Project-level `.faq/config.toml`
//! 3. User-level `~/.config/faq/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FAQ_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`,
//! `FAQ_CATALOG__POPULAR_CATEGORIES` -> `catalog.popular_categories`, etc.
//! List values use figment's inline syntax: `FAQ_CATALOG__POPULAR_CATEGORIES='[paiement, avis]'`.
//!
//! # Usage
//!
//! ```no_run
//! use faq_config::FaqConfig;
//!
//! let config = FaqConfig::load_with_dotenv().expect("config");
//! println!("limit: {}", config.general.default_limit);
//! ```

mod catalog;
mod error;
mod general;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FaqConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl FaqConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`FaqConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`FaqConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`FaqConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".faq/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("FAQ_").split("__"))
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero result limit or a
    /// blank category slug in any list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let lists = [
            ("catalog.popular_categories", &self.catalog.popular_categories),
            (
                "catalog.client_frequent_categories",
                &self.catalog.client_frequent_categories,
            ),
            (
                "catalog.general_frequent_categories",
                &self.catalog.general_frequent_categories,
            ),
            ("catalog.general_priority", &self.catalog.general_priority),
            ("catalog.provider_priority", &self.catalog.provider_priority),
            ("catalog.client_priority", &self.catalog.client_priority),
        ];
        for (field, list) in lists {
            let blank = list
                .iter()
                .flatten()
                .any(|category| category.trim().is_empty());
            if blank {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "category slugs cannot be blank".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("faq").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if no `.env` is found.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FaqConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.catalog.is_customized());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config =
                FaqConfig::from_figment(&FaqConfig::figment()).expect("defaults should load");
            assert_eq!(config.general.default_limit, 20);
            assert!(config.general.default_audience.is_none());
            Ok(())
        });
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = FaqConfig::default();
        config.general.default_limit = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.default_limit"));
    }

    #[test]
    fn blank_category_is_rejected() {
        let mut config = FaqConfig::default();
        config.catalog.provider_priority = Some(vec!["inscription".to_string(), " ".to_string()]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("catalog.provider_priority"));
    }
}
