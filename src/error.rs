//! Error types for post listing

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while listing posts or resolving categories
#[derive(Error, Debug)]
pub enum Error {
    /// The requested category id is not in the registry
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// The content root or a metadata file could not be read
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A post's metadata header is missing or malformed
    #[error("Invalid metadata for post '{slug}': {message}")]
    Metadata { slug: String, message: String },

    /// Site configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn metadata(slug: &str, message: impl Into<String>) -> Self {
        Error::Metadata {
            slug: slug.to_string(),
            message: message.into(),
        }
    }

    /// Whether this error is a not-found condition at the page boundary
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::CategoryNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
