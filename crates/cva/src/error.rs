//! Configuration loading errors.

use std::path::PathBuf;

/// Error returned when a [`VariantConfig`](crate::VariantConfig) can not be loaded.
///
/// Resolving classes never fails; only reading and parsing configuration
/// documents does.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document is malformed or has the wrong shape.
    #[error("invalid JSON variant config: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML document is malformed or has the wrong shape.
    #[error("invalid YAML variant config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The config file could not be read.
    #[error("failed to read variant config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of `.json`, `.yaml` or `.yml`.
    #[error("unsupported variant config format '{}' (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },
}
