//! Optional syntax-highlighting enrichment
//!
//! Highlighting is presentation, layered on top of a raw resolve. It is
//! never baked into the index, and a failing highlighter degrades to the
//! plain content instead of failing the resolution.

use async_trait::async_trait;

use crate::error::Result;
use crate::item::RegistryItem;
use crate::resolve::Resolver;
use crate::style::StyleName;

/// A resolved file together with its highlighted rendering, when available
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedFile {
    pub path: String,

    /// Plain resolved content, always present
    pub content: String,

    /// `None` when the highlighter failed or declined this file
    pub highlighted: Option<String>,
}

/// One resolved item plus per-file highlighted output
#[derive(Debug, Clone)]
pub struct HighlightedItem {
    pub item: RegistryItem,
    pub files: Vec<HighlightedFile>,
}

/// Renders file content to highlighted markup
#[async_trait]
pub trait Highlighter: Send + Sync {
    /// Highlight `content`; `path` is used for language detection
    async fn highlight(&self, path: &str, content: &str) -> Result<String>;
}

/// Resolve an item and enrich its files in one step.
///
/// Highlighter failures are isolated per file: the plain content is kept,
/// the cause is logged, and the resolution itself still succeeds.
pub async fn resolve_highlighted(
    resolver: &Resolver<'_>,
    highlighter: &dyn Highlighter,
    name: &str,
    style: Option<&StyleName>,
) -> Result<HighlightedItem> {
    let item = resolver.resolve(name, style).await?;

    let mut files = Vec::with_capacity(item.files.len());
    for file in &item.files {
        let content = file.content.clone().unwrap_or_default();
        let highlighted = match highlighter.highlight(&file.path, &content).await {
            Ok(markup) => Some(markup),
            Err(err) => {
                tracing::debug!(
                    path = %file.path,
                    error = %err,
                    "highlighting failed, keeping plain content"
                );
                None
            }
        };
        files.push(HighlightedFile {
            path: file.path.clone(),
            content,
            highlighted,
        });
    }

    Ok(HighlightedItem { item, files })
}

#[cfg(feature = "highlight")]
pub use syntect_backend::{SyntectHighlighter, shared_highlighter};

#[cfg(feature = "highlight")]
mod syntect_backend {
    use std::path::Path;

    use async_trait::async_trait;
    use syntect::highlighting::{Theme, ThemeSet};
    use syntect::html::highlighted_html_for_string;
    use syntect::parsing::SyntaxSet;
    use tokio::sync::OnceCell;

    use super::Highlighter;
    use crate::error::{RegistryError, Result};

    const DEFAULT_THEME: &str = "base16-ocean.dark";

    /// Syntect-backed highlighter producing inline-styled HTML
    pub struct SyntectHighlighter {
        syntaxes: SyntaxSet,
        theme: Theme,
    }

    impl SyntectHighlighter {
        /// Load the default syntax and theme sets.
        ///
        /// Expensive; prefer [`shared_highlighter`] outside of tests.
        pub fn new() -> Result<Self> {
            let syntaxes = SyntaxSet::load_defaults_newlines();
            let mut themes = ThemeSet::load_defaults();
            let theme = themes
                .themes
                .remove(DEFAULT_THEME)
                .ok_or_else(|| RegistryError::Highlight("default theme missing".into()))?;
            Ok(Self { syntaxes, theme })
        }
    }

    #[async_trait]
    impl Highlighter for SyntectHighlighter {
        async fn highlight(&self, path: &str, content: &str) -> Result<String> {
            let extension = Path::new(path)
                .extension()
                .and_then(|ext| ext.to_str())
                .unwrap_or("");
            let syntax = self
                .syntaxes
                .find_syntax_by_extension(extension)
                .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

            highlighted_html_for_string(content, &self.syntaxes, syntax, &self.theme)
                .map_err(|err| RegistryError::Highlight(err.to_string()))
        }
    }

    static SHARED: OnceCell<SyntectHighlighter> = OnceCell::const_new();

    /// Process-wide shared highlighter.
    ///
    /// Loading the syntax and theme sets is the expensive part; concurrent
    /// first callers share a single in-flight initialization instead of
    /// each loading their own copy.
    pub async fn shared_highlighter() -> Result<&'static SyntectHighlighter> {
        SHARED
            .get_or_try_init(|| async { SyntectHighlighter::new() })
            .await
    }
}
