//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for recipe-forge operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at startup and I/O boundaries.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when building or loading a recipe catalog fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A template breaks one of the catalog invariants.
    #[error("invalid recipe #{index} ('{title}'): {reason}")]
    InvalidTemplate {
        index: usize,
        title: String,
        reason: &'static str,
    },
    /// The catalog file could not be read.
    #[error("failed to read catalog at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog file extension is not `.json` or `.toml`.
    #[error("unsupported catalog format for {} (expected .json or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("malformed JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Error returned by the saved-recipe store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("recipe '{title}' is already saved")]
    AlreadySaved { title: String },
    #[error("saved recipe {0} not found")]
    NotFound(String),
    #[error("not authorized to modify saved recipe {0}")]
    NotAuthorized(String),
    #[error("failed to access store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed store file: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error returned when the configuration file or environment is unusable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use assert2::{check, let_assert};

    fn load_missing_catalog() -> Result<crate::Catalog> {
        let path = PathBuf::from("/nonexistent/recipes.json");
        crate::Catalog::load(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))
    }

    #[test]
    fn test_result_keeps_context_and_source() {
        let_assert!(Err(err) = load_missing_catalog());
        check!(err.to_string().starts_with("Failed to load catalog"));
        check!(let Some(CatalogError::Read { .. }) = err.downcast_ref::<CatalogError>());
    }
}
