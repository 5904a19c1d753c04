//! Loading variant configuration from JSON and YAML documents.

use std::path::Path;

use super::config::VariantConfig;
use crate::error::ConfigError;

impl VariantConfig {
    /// Parses a JSON document.
    ///
    /// The document uses the same shape as the JavaScript config object:
    /// `variants`, `defaultVariants` and `compoundVariants`, all optional.
    /// Unknown top-level keys are ignored.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a YAML document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cva::{cva, Props, VariantConfig};
    ///
    /// let config = VariantConfig::from_yaml(r#"
    /// variants:
    ///   margin: { 0: m-0, 4: m-4 }
    /// defaultVariants:
    ///   margin: 0
    /// compoundVariants:
    ///   - margin: 4
    ///     class: spaced
    /// "#).unwrap();
    ///
    /// let spacing = cva("box", config);
    /// assert_eq!(spacing.resolve(&Props::new()), "box m-0");
    /// assert_eq!(spacing.resolve(&Props::new().set("margin", 4)), "box m-4 spaced");
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads a `.json`, `.yaml` or `.yml` file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let read = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        match extension.as_deref() {
            Some("json") => Self::from_json(&read()?),
            Some("yaml" | "yml") => Self::from_yaml(&read()?),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}
