//! File sources backing item resolution

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{RegistryError, Result};

/// Abstraction over where declared item files are read from
#[async_trait]
pub trait FileSource: Send + Sync {
    /// Read the file at `path` (relative to the source root) as UTF-8
    async fn read_to_string(&self, path: &str) -> Result<String>;
}

/// Filesystem-backed source rooted at a project directory.
///
/// Declared paths are trusted build-time input and are joined under the root
/// as-is; there is no traversal guard.
#[cfg(feature = "fs")]
pub struct FsSource {
    root: std::path::PathBuf,
}

#[cfg(feature = "fs")]
impl FsSource {
    pub fn new(root: impl AsRef<std::path::Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

#[cfg(feature = "fs")]
#[async_trait]
impl FileSource for FsSource {
    async fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = self.root.join(path);
        tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| RegistryError::FileRead {
                path: path.to_string(),
                source,
            })
    }
}

/// In-memory source for tests and inlined registries
#[derive(Debug, Default)]
pub struct MemorySource {
    files: Mutex<HashMap<String, String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<String>, content: impl Into<String>) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.into(), content.into());
        }
    }

    pub fn len(&self) -> usize {
        self.files.lock().map(|files| files.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl FileSource for MemorySource {
    async fn read_to_string(&self, path: &str) -> Result<String> {
        let files = self
            .files
            .lock()
            .map_err(|_| RegistryError::Source("lock poisoned".into()))?;

        files
            .get(path)
            .cloned()
            .ok_or_else(|| RegistryError::FileRead {
                path: path.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such entry"),
            })
    }
}
