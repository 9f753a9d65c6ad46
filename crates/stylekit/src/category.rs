//! Category catalog and gallery enumeration

use serde::Serialize;

use crate::index::RegistryIndex;
use crate::item::ItemType;

/// A gallery category
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    /// Unique slug, also the primary name prefix for membership
    pub slug: &'static str,

    /// Human-readable label
    pub name: &'static str,

    /// Extra name prefixes that also count as membership
    pub tags: &'static [&'static str],
}

impl Category {
    /// Membership is a slug or tag prefix match on the item name: the name
    /// equals the prefix or continues it with a dash (`login` matches
    /// `login-03` but not `loginx-03`)
    pub fn matches(&self, item_name: &str) -> bool {
        matches_prefix(item_name, self.slug)
            || self.tags.iter().any(|tag| matches_prefix(item_name, tag))
    }
}

fn matches_prefix(name: &str, prefix: &str) -> bool {
    name == prefix
        || name
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('-'))
}

// Catalog order is presentation order.
const CATEGORIES: &[Category] = &[
    Category {
        slug: "sidebar",
        name: "Sidebar",
        tags: &[],
    },
    Category {
        slug: "dashboard",
        name: "Dashboard",
        tags: &[],
    },
    Category {
        slug: "login",
        name: "Login",
        tags: &["signup", "otp"],
    },
    Category {
        slug: "calendar",
        name: "Calendar",
        tags: &[],
    },
    Category {
        slug: "charts",
        name: "Charts",
        tags: &["chart"],
    },
    Category {
        slug: "forms",
        name: "Forms",
        tags: &["form"],
    },
];

/// The full ordered category catalog
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Look up a category by slug
pub fn find_category(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.slug == slug)
}

/// Names of every indexed item matching one of `types`, optionally narrowed
/// to items belonging to at least one of `categories` (OR semantics).
///
/// An empty category list means no category filter at all. There is no
/// failure mode; unmatched filters yield an empty vec.
pub fn list_by_types_and_categories<'a>(
    index: &'a RegistryIndex,
    types: &[ItemType],
    categories: &[&str],
) -> Vec<&'a str> {
    index
        .entries()
        .filter(|(_, item)| types.contains(&item.item_type))
        .filter(|(_, item)| {
            categories.is_empty()
                || categories.iter().any(|slug| {
                    find_category(slug).is_some_and(|category| category.matches(&item.name))
                })
        })
        .map(|(_, item)| item.name.as_str())
        .collect()
}
