//! Stylekit is a component-registry resolution library: it maps a component
//! name and optional style variant to its source files, metadata, and
//! renderable entry point.
//!
//! ## Core Concepts
//!
//! - **Registry items** are catalog entries (ui, component, example, block)
//!   with declared source files and presentation metadata
//! - **Styles** partition the same logical component set into visually
//!   distinct variants; style-qualified lookups fall back to the flat
//!   partition
//! - The **index** is built once from source collections merged in a fixed
//!   precedence order (later collections win) and is immutable afterwards
//! - The **resolver** populates declared file contents from a pluggable
//!   [`FileSource`], with optional request-scoped memoization and optional
//!   syntax-highlighting enrichment
//!
//! ## Example Usage
//!
//! ```rust
//! use stylekit::{IndexBuilder, ItemType, RegistryEntry, RegistryFile, RegistryItem};
//!
//! let index = IndexBuilder::new()
//!     .collection([RegistryEntry::styled(
//!         "default",
//!         RegistryItem::builder("accordion", ItemType::Ui)
//!             .file(RegistryFile::new("ui/accordion.tsx", ItemType::Ui))
//!             .build(),
//!     )])
//!     .build();
//!
//! let style = "default".into();
//! let item = index.get("accordion", Some(&style)).unwrap();
//! assert_eq!(item.item_type, ItemType::Ui);
//! ```

pub mod category;
pub mod error;
pub mod highlight;
pub mod index;
pub mod item;
pub mod resolve;
pub mod source;
pub mod style;
pub mod tree;

pub use category::{Category, categories, find_category, list_by_types_and_categories};
pub use error::{RegistryError, Result};
pub use highlight::{HighlightedFile, HighlightedItem, Highlighter, resolve_highlighted};
pub use index::{IndexBuilder, RegistryEntry, RegistryIndex};
pub use item::{Chunk, ComponentRef, ItemType, RegistryFile, RegistryItem};
pub use resolve::{CachedResolver, Resolver};
pub use source::{FileSource, MemorySource};
pub use style::{Style, StyleName, find_style, styles};
pub use tree::{FileTreeNode, build_tree, leaf_paths};

#[cfg(feature = "fs")]
pub use source::FsSource;

#[cfg(feature = "highlight")]
pub use highlight::{SyntectHighlighter, shared_highlighter};
