//! Site configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Configuration for a site build, read from an optional TOML file.
///
/// ```toml
/// data_dir = "data"
/// output_dir = "_site"
/// reader = "detective"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Root of the content tree (`book/`, `character/`, `skills.json`, ...).
    pub data_dir: PathBuf,

    /// Where the rendered pages are written.
    pub output_dir: PathBuf,

    /// Character identity used to pick interpretations on clue and journal
    /// pages. `None` renders every observation hidden.
    pub reader: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("_site"),
            reader: None,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration; missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the reader identity.
    pub fn with_reader(mut self, reader: impl Into<String>) -> Self {
        self.reader = Some(reader.into());
        self
    }
}
