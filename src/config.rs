//! Server configuration.
//!
//! Read from `$RECIPE_FORGE_CONFIG`, or `<config dir>/recipe-forge/config.toml` when it
//! exists, otherwise defaults. `RECIPE_FORGE_SEED` and `RECIPE_FORGE_CATALOG`
//! override the file.

use crate::engine::EngineOptions;
use crate::error::ConfigError;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "recipe-forge";
const CONFIG_ENV: &str = "RECIPE_FORGE_CONFIG";
const SEED_ENV: &str = "RECIPE_FORGE_SEED";
const CATALOG_ENV: &str = "RECIPE_FORGE_CATALOG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog file (`.json` or `.toml`). The bundled catalog is used when unset.
    pub catalog: Option<PathBuf>,
    /// Saved-recipe file. Defaults to `<data dir>/recipe-forge/saved.json`.
    pub store: Option<PathBuf>,
    /// Keep saved recipes on disk. When false they live only for the process lifetime.
    pub persist: bool,
    /// Fixed RNG seed, for reproducible results.
    pub seed: Option<u64>,
    pub engine: EngineOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            store: None,
            persist: true,
            seed: None,
            engine: EngineOptions::default(),
        }
    }
}

impl Config {
    /// Load configuration from the usual locations and apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from).or_else(|| {
            dirs::config_dir()
                .map(|dir| dir.join(APP_DIR).join("config.toml"))
                .filter(|path| path.exists())
        });

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in production).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(SEED_ENV) {
            let seed = seed.trim().parse().map_err(|e| ConfigError::Invalid {
                key: SEED_ENV,
                reason: format!("{e}"),
            })?;
            self.seed = Some(seed);
        }

        if let Some(catalog) = lookup(CATALOG_ENV).filter(|value| !value.trim().is_empty()) {
            self.catalog = Some(PathBuf::from(catalog));
        }

        Ok(())
    }

    /// Reject option combinations the engine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let engine = &self.engine;
        if engine.result_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "engine.result_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        if engine.candidate_pool < engine.result_limit {
            return Err(ConfigError::Invalid {
                key: "engine.candidate_pool",
                reason: format!(
                    "must be at least result_limit ({}), got {}",
                    engine.result_limit, engine.candidate_pool
                ),
            });
        }
        if engine.min_cooking_time == 0 {
            return Err(ConfigError::Invalid {
                key: "engine.min_cooking_time",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Catalog path with `~` expanded.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_deref().map(expand_home)
    }

    /// Where saved recipes are persisted, or `None` for an in-memory store.
    pub fn store_path(&self) -> Option<PathBuf> {
        if !self.persist {
            return None;
        }
        match &self.store {
            Some(path) => Some(expand_home(path)),
            None => dirs::data_dir().map(|dir| dir.join(APP_DIR).join("saved.json")),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    PathBuf::from(expand_tilde(&path.to_string_lossy()).into_owned())
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
