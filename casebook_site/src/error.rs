//! Error types for loading, configuration and site builds.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading content. All of them are fatal for the load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("required content directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LoadError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = LoadError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize site index: {0}")]
    Index(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = LoadError::MissingDirectory(PathBuf::from("data/book"));
        assert_eq!(err.to_string(), "required content directory not found: data/book");

        let err = LoadError::io("data/skills.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.to_string().starts_with("failed to read data/skills.json"));
    }
}
