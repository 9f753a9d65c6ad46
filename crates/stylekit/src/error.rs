//! Error types for the stylekit registry

use thiserror::Error;

/// Registry-specific errors
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Style not found: {0}")]
    StyleNotFound(String),

    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Highlight error: {0}")]
    Highlight(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RegistryError {
    /// Whether the page layer should render this as a missing item.
    ///
    /// File-read failures collapse into the not-found state at the page
    /// boundary; the distinguishing cause stays in the logs.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::ItemNotFound(_)
                | RegistryError::StyleNotFound(_)
                | RegistryError::FileRead { .. }
        )
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
