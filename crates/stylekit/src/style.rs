//! Style catalog: the fixed set of visual variants items can ship in

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named style variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Style {
    /// Unique key, used as a partition key everywhere else
    pub name: &'static str,

    /// Human-readable label
    pub label: &'static str,
}

/// Owned style partition key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleName(pub String);

impl From<String> for StyleName {
    fn from(s: String) -> Self {
        StyleName(s)
    }
}

impl From<&str> for StyleName {
    fn from(s: &str) -> Self {
        StyleName(s.to_string())
    }
}

impl AsRef<str> for StyleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Catalog order is presentation order.
const STYLES: &[Style] = &[
    Style {
        name: "default",
        label: "Default",
    },
    Style {
        name: "new-york",
        label: "New York",
    },
];

/// The full ordered style catalog
pub fn styles() -> &'static [Style] {
    STYLES
}

/// Look up a style by name.
///
/// A miss is a caller bug, not a runtime fault, so this returns `None`
/// rather than an error.
pub fn find_style(name: &str) -> Option<&'static Style> {
    STYLES.iter().find(|style| style.name == name)
}
