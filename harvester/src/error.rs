//! Harvester error types

use shared::{Category, FetchFailure, SharedError};
use thiserror::Error;

/// Result type for harvester operations
pub type HarvesterResult<T> = Result<T, HarvesterError>;

/// Harvester error types
#[derive(Error, Debug)]
pub enum HarvesterError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Upstream fetch failed for {category}/{id}: {reason}")]
    UpstreamFetchError {
        category: Category,
        id: u32,
        reason: FetchFailure,
    },

    #[error("Corrupt collection at {path}: {message}")]
    CorruptCollection { path: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl HarvesterError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError { message: message.into() }
    }

    pub fn upstream(category: Category, id: u32, reason: FetchFailure) -> Self {
        Self::UpstreamFetchError { category, id, reason }
    }

    pub fn corrupt(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptCollection {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for a 404 from the catalog
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UpstreamFetchError {
                reason: FetchFailure::NotFound,
                ..
            }
        )
    }
}
