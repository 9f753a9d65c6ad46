//! Core data structures for registry items

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Closed set of item type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Ui,
    Component,
    Example,
    Block,
    Internal,
}

impl ItemType {
    /// Every valid type tag, in declaration order
    pub const ALL: &'static [ItemType] = &[
        ItemType::Ui,
        ItemType::Component,
        ItemType::Example,
        ItemType::Block,
        ItemType::Internal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Ui => "ui",
            ItemType::Component => "component",
            ItemType::Example => "example",
            ItemType::Block => "block",
            ItemType::Internal => "internal",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ui" => Ok(ItemType::Ui),
            "component" => Ok(ItemType::Component),
            "example" => Ok(ItemType::Example),
            "block" => Ok(ItemType::Block),
            "internal" => Ok(ItemType::Internal),
            other => Err(RegistryError::UnknownItemType(other.to_string())),
        }
    }
}

/// One declared source file of a registry item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Path relative to the project root
    pub path: String,

    /// Inline content; populated by the resolver when absent
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<String>,

    #[serde(rename = "type")]
    pub kind: ItemType,
}

impl RegistryFile {
    pub fn new(path: impl Into<String>, kind: ItemType) -> Self {
        Self {
            path: path.into(),
            content: None,
            kind,
        }
    }

    /// Inline the file content up front, bypassing the resolver read
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Opaque handle to a renderable entry point.
///
/// The index owns the value; resolvers and pages only ever borrow it. What
/// the handle actually is (a render function, a route, an asset key) is the
/// embedding application's business, supplied once at index-build time.
#[derive(Clone)]
pub struct ComponentRef(Arc<dyn Any + Send + Sync>);

impl ComponentRef {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ComponentRef(..)")
    }
}

/// A named sub-region of a block, independently addressable for partial
/// rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub container_class: Option<String>,

    #[serde(skip, default)]
    pub component: Option<ComponentRef>,
}

impl Chunk {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            file: None,
            container_class: None,
            component: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_component(mut self, component: ComponentRef) -> Self {
        self.component = Some(component);
        self
    }
}

/// One catalog entry: a component, example, or block with its source files
/// and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryItem {
    /// Unique key within its style partition
    pub name: String,

    #[serde(rename = "type")]
    pub item_type: ItemType,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Ordered declared source files
    pub files: Vec<RegistryFile>,

    /// Free-form presentation hints (container class, iframe height, ...)
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub meta: BTreeMap<String, serde_json::Value>,

    /// Renderable entry point; absent for placeholder items
    #[serde(skip, default)]
    pub component: Option<ComponentRef>,

    /// Named sub-regions (blocks only)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub chunks: Vec<Chunk>,
}

impl RegistryItem {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            name: name.into(),
            item_type,
            description: None,
            files: Vec::new(),
            meta: BTreeMap::new(),
            component: None,
            chunks: Vec::new(),
        }
    }

    /// Create a new item builder
    pub fn builder(name: impl Into<String>, item_type: ItemType) -> ItemBuilder {
        ItemBuilder::new(name, item_type)
    }

    pub fn has_component(&self) -> bool {
        self.component.is_some()
    }
}

// Structural equality: two component refs are equal when both are absent or
// both point at the same value.
impl PartialEq for RegistryItem {
    fn eq(&self, other: &Self) -> bool {
        let component_eq = match (&self.component, &other.component) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        };
        component_eq
            && self.name == other.name
            && self.item_type == other.item_type
            && self.description == other.description
            && self.files == other.files
            && self.meta == other.meta
            && self.chunks.len() == other.chunks.len()
            && self
                .chunks
                .iter()
                .zip(&other.chunks)
                .all(|(a, b)| a.name == b.name && a.file == b.file)
    }
}

/// Builder for registry items with a fluent API
#[derive(Debug)]
pub struct ItemBuilder {
    item: RegistryItem,
}

impl ItemBuilder {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            item: RegistryItem::new(name, item_type),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.item.description = Some(description.into());
        self
    }

    pub fn file(mut self, file: RegistryFile) -> Self {
        self.item.files.push(file);
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.item.meta.insert(key.into(), value.into());
        self
    }

    pub fn component(mut self, component: ComponentRef) -> Self {
        self.item.component = Some(component);
        self
    }

    pub fn chunk(mut self, chunk: Chunk) -> Self {
        self.item.chunks.push(chunk);
        self
    }

    pub fn build(self) -> RegistryItem {
        self.item
    }
}
