//! Build-once registry index with style-qualified and flat lookup

use std::collections::HashMap;

use crate::item::{ComponentRef, ItemType, RegistryItem};
use crate::style::StyleName;

/// One entry handed to the index builder.
///
/// `style: None` places the item in the flat partition used by
/// style-agnostic (single-theme) lookup paths.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub style: Option<StyleName>,
    pub item: RegistryItem,
}

impl RegistryEntry {
    pub fn flat(item: RegistryItem) -> Self {
        Self { style: None, item }
    }

    pub fn styled(style: impl Into<StyleName>, item: RegistryItem) -> Self {
        Self {
            style: Some(style.into()),
            item,
        }
    }
}

type Key = (Option<StyleName>, String);

/// Immutable registry index.
///
/// Built once at startup and passed by reference to resolvers. Nothing
/// mutates it after [`IndexBuilder::build`], so shared access needs no
/// locking.
#[derive(Debug, Default)]
pub struct RegistryIndex {
    // Merge order, preserved for enumeration and filtering.
    entries: Vec<RegistryEntry>,
    // (style, name) -> position in `entries`.
    by_key: HashMap<Key, usize>,
}

impl RegistryIndex {
    /// Create a new index builder
    pub fn builder() -> IndexBuilder {
        IndexBuilder::new()
    }

    /// Look up an item by name, optionally qualified by style.
    ///
    /// A qualified lookup that misses its style partition falls back to the
    /// flat partition; call sites running a single theme skip styles
    /// entirely and hit the flat partition directly.
    pub fn get(&self, name: &str, style: Option<&StyleName>) -> Option<&RegistryItem> {
        if let Some(style) = style {
            let key = (Some(style.clone()), name.to_string());
            if let Some(&pos) = self.by_key.get(&key) {
                return Some(&self.entries[pos].item);
            }
        }
        let key = (None, name.to_string());
        self.by_key.get(&key).map(|&pos| &self.entries[pos].item)
    }

    /// Borrow the renderable entry point of an item.
    ///
    /// `None` both when the item is unknown and when it is a placeholder
    /// without a component.
    pub fn component_ref(&self, name: &str, style: Option<&StyleName>) -> Option<&ComponentRef> {
        self.get(name, style).and_then(|item| item.component.as_ref())
    }

    /// Names of every item whose type is in `types`, in stable merge order
    /// (not sorted)
    pub fn filter_by_type(&self, types: &[ItemType]) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| types.contains(&entry.item.item_type))
            .map(|entry| entry.item.name.as_str())
            .collect()
    }

    /// Every `(style, item)` pair in merge order.
    ///
    /// This is the enumeration pass static-site generation runs ahead of
    /// time to collect all valid `(style, name)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (Option<&StyleName>, &RegistryItem)> {
        self.entries
            .iter()
            .map(|entry| (entry.style.as_ref(), &entry.item))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a [`RegistryIndex`] from source collections.
///
/// Collections are merged in the order they are given; when two collections
/// define the same `(style, name)` key the later one wins, keeping the
/// position of the first definition. Downstream items rely on overriding
/// earlier definitions this way, so the order callers pass collections in is
/// part of the contract.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: RegistryIndex,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one source collection
    pub fn collection(mut self, entries: impl IntoIterator<Item = RegistryEntry>) -> Self {
        for entry in entries {
            self.insert(entry);
        }
        self
    }

    fn insert(&mut self, entry: RegistryEntry) {
        let key = (entry.style.clone(), entry.item.name.clone());
        match self.index.by_key.get(&key) {
            Some(&pos) => self.index.entries[pos] = entry,
            None => {
                self.index.by_key.insert(key, self.index.entries.len());
                self.index.entries.push(entry);
            }
        }
    }

    pub fn build(self) -> RegistryIndex {
        self.index
    }
}
