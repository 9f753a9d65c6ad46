//! Item resolution: index lookup plus file content population

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{RegistryError, Result};
use crate::index::RegistryIndex;
use crate::item::RegistryItem;
use crate::source::FileSource;
use crate::style::StyleName;

/// Resolves registry items against an index and a file source
pub struct Resolver<'a> {
    index: &'a RegistryIndex,
    source: &'a dyn FileSource,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a RegistryIndex, source: &'a dyn FileSource) -> Self {
        Self { index, source }
    }

    /// Resolve `name` under `style`, populating every declared file's
    /// content.
    ///
    /// A missing item is an expected outcome, not a fault. A failed read of
    /// a declared file fails the whole resolution; partial items are never
    /// returned. Files that already carry inline content are passed through
    /// untouched, so resolving twice yields structurally equal results.
    pub async fn resolve(&self, name: &str, style: Option<&StyleName>) -> Result<RegistryItem> {
        let Some(raw) = self.index.get(name, style) else {
            return Err(RegistryError::ItemNotFound(name.to_string()));
        };

        let mut item = raw.clone();
        for file in &mut item.files {
            if file.content.is_some() {
                continue;
            }
            match self.source.read_to_string(&file.path).await {
                Ok(content) => file.content = Some(content),
                Err(err) => {
                    tracing::warn!(
                        item = name,
                        path = %file.path,
                        error = %err,
                        "failed to read declared file"
                    );
                    return Err(err);
                }
            }
        }

        Ok(item)
    }
}

/// Request-scoped memoization over [`Resolver`].
///
/// Keyed by the exact `(style, name)` pair. Construct one per request and
/// drop it with the request; it exists to avoid duplicate reads within a
/// single page render, not as a persistent cache.
pub struct CachedResolver<'a> {
    resolver: Resolver<'a>,
    cache: Mutex<HashMap<(Option<StyleName>, String), RegistryItem>>,
}

impl<'a> CachedResolver<'a> {
    pub fn new(index: &'a RegistryIndex, source: &'a dyn FileSource) -> Self {
        Self {
            resolver: Resolver::new(index, source),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub async fn resolve(&self, name: &str, style: Option<&StyleName>) -> Result<RegistryItem> {
        let key = (style.cloned(), name.to_string());

        if let Some(hit) = self
            .cache
            .lock()
            .map_err(|_| RegistryError::Source("cache lock poisoned".into()))?
            .get(&key)
        {
            return Ok(hit.clone());
        }

        let item = self.resolver.resolve(name, style).await?;

        self.cache
            .lock()
            .map_err(|_| RegistryError::Source("cache lock poisoned".into()))?
            .insert(key, item.clone());

        Ok(item)
    }

    /// Check whether a pair has already been resolved in this request
    pub fn is_cached(&self, name: &str, style: Option<&StyleName>) -> bool {
        let key = (style.cloned(), name.to_string());
        self.cache
            .lock()
            .map(|cache| cache.contains_key(&key))
            .unwrap_or(false)
    }
}
