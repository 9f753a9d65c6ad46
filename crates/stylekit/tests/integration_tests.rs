//! Integration tests for stylekit

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use stylekit::{
    CachedResolver, ComponentRef, FileSource, FsSource, IndexBuilder, ItemType, MemorySource,
    RegistryEntry, RegistryError, RegistryFile, RegistryIndex, RegistryItem, Resolver, Result,
    StyleName, build_tree, leaf_paths, list_by_types_and_categories,
};
use tempfile::tempdir;

/// Builds an index the way an application would: source collections merged
/// in precedence order (base ui, extended, examples, blocks last).
fn fixture_index() -> RegistryIndex {
    let base_ui = ["accordion", "button", "card"].map(|name| {
        RegistryEntry::styled(
            "default",
            RegistryItem::builder(name, ItemType::Ui)
                .file(RegistryFile::new(format!("ui/{name}.tsx"), ItemType::Ui))
                .component(ComponentRef::new(format!("render:{name}")))
                .build(),
        )
    });

    let new_york_ui = ["accordion", "button"].map(|name| {
        RegistryEntry::styled(
            "new-york",
            RegistryItem::builder(name, ItemType::Ui)
                .file(RegistryFile::new(
                    format!("registry/new-york/ui/{name}.tsx"),
                    ItemType::Ui,
                ))
                .build(),
        )
    });

    let examples = [RegistryEntry::flat(
        RegistryItem::builder("accordion-demo", ItemType::Example)
            .file(RegistryFile::new(
                "examples/accordion-demo.tsx",
                ItemType::Example,
            ))
            .build(),
    )];

    // "login-03" is first declared as a plain component, then superseded by
    // the blocks collection; merge order makes the block definition win.
    let extended = [RegistryEntry::flat(
        RegistryItem::builder("login-03", ItemType::Component)
            .description("stale definition")
            .build(),
    )];

    let blocks = [
        RegistryEntry::flat(
            RegistryItem::builder("login-03", ItemType::Block)
                .description("A login page with a muted background")
                .file(RegistryFile::new("blocks/login-03/page.tsx", ItemType::Block))
                .file(RegistryFile::new(
                    "blocks/login-03/components/login-form.tsx",
                    ItemType::Component,
                ))
                .meta("iframe_height", "870px")
                .component(ComponentRef::new("render:login-03"))
                .build(),
        ),
        RegistryEntry::flat(
            RegistryItem::builder("login-04", ItemType::Block)
                .file(RegistryFile::new("blocks/login-04/page.tsx", ItemType::Block))
                .build(),
        ),
        RegistryEntry::flat(
            RegistryItem::builder("dashboard-01", ItemType::Block)
                .file(RegistryFile::new(
                    "blocks/dashboard-01/page.tsx",
                    ItemType::Block,
                ))
                .build(),
        ),
        // Placeholder block, no component yet.
        RegistryEntry::flat(RegistryItem::new("sidebar-16", ItemType::Block)),
    ];

    IndexBuilder::new()
        .collection(base_ui)
        .collection(new_york_ui)
        .collection(extended)
        .collection(examples)
        .collection(blocks)
        .build()
}

fn memory_source_for(index: &RegistryIndex) -> MemorySource {
    let source = MemorySource::new();
    for (_, item) in index.entries() {
        for file in &item.files {
            source.insert(file.path.clone(), format!("// {}\n", file.path));
        }
    }
    source
}

#[tokio::test]
async fn end_to_end_resolution_from_filesystem() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    std::fs::create_dir_all(root.join("blocks/login-03/components")).unwrap();
    std::fs::write(
        root.join("blocks/login-03/page.tsx"),
        "export default function Page() {}",
    )
    .unwrap();
    std::fs::write(
        root.join("blocks/login-03/components/login-form.tsx"),
        "export function LoginForm() {}",
    )
    .unwrap();

    let index = fixture_index();
    let source = FsSource::new(root);
    let resolver = Resolver::new(&index, &source);

    let item = resolver.resolve("login-03", None).await.unwrap();
    assert_eq!(item.item_type, ItemType::Block);
    assert_eq!(
        item.files[0].content.as_deref(),
        Some("export default function Page() {}")
    );
    assert_eq!(
        item.files[1].content.as_deref(),
        Some("export function LoginForm() {}")
    );
}

#[tokio::test]
async fn resolving_unknown_item_is_not_found_not_a_panic() {
    let index = fixture_index();
    let source = MemorySource::new();
    let resolver = Resolver::new(&index, &source);

    let err = resolver
        .resolve("nonexistent-item-xyz", None)
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::ItemNotFound(_)));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn unreadable_declared_file_renders_as_not_found() {
    let temp_dir = tempdir().unwrap();
    let index = fixture_index();
    // Empty project root: every declared file is missing.
    let source = FsSource::new(temp_dir.path());
    let resolver = Resolver::new(&index, &source);

    let err = resolver.resolve("login-04", None).await.unwrap_err();
    assert!(matches!(err, RegistryError::FileRead { .. }));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn resolution_is_idempotent() {
    let index = fixture_index();
    let source = memory_source_for(&index);
    let resolver = Resolver::new(&index, &source);

    let style = StyleName::from("new-york");
    let first = resolver.resolve("accordion", Some(&style)).await.unwrap();
    let second = resolver.resolve("accordion", Some(&style)).await.unwrap();
    assert_eq!(first, second);
}

#[test]
fn merge_precedence_later_collection_wins() {
    let index = fixture_index();

    let item = index.get("login-03", None).unwrap();
    assert_eq!(item.item_type, ItemType::Block);
    assert_eq!(
        item.description.as_deref(),
        Some("A login page with a muted background")
    );
}

#[test]
fn block_enumeration_is_complete() {
    let index = fixture_index();

    // login-03 (block override), login-04, dashboard-01, sidebar-16: the
    // superseded component definition must not inflate the count.
    let blocks = index.filter_by_type(&[ItemType::Block]);
    assert_eq!(blocks.len(), 4);
    assert_eq!(blocks, vec!["login-03", "login-04", "dashboard-01", "sidebar-16"]);
}

#[test]
fn block_listing_by_category() {
    let index = fixture_index();

    let names = list_by_types_and_categories(&index, &[ItemType::Block], &["login"]);
    assert!(names.contains(&"login-03"));
    assert!(names.contains(&"login-04"));
    assert!(!names.contains(&"dashboard-01"));
    assert!(!names.contains(&"sidebar-16"));
}

#[test]
fn every_indexed_item_has_a_closed_set_type() {
    let index = fixture_index();
    for (_, item) in index.entries() {
        assert!(ItemType::ALL.contains(&item.item_type));
    }
}

#[test]
fn component_refs_are_borrowed_from_the_index() {
    let index = fixture_index();
    let style = StyleName::from("default");

    let reference = index.component_ref("button", Some(&style)).unwrap();
    assert_eq!(
        reference.downcast_ref::<String>().map(String::as_str),
        Some("render:button")
    );

    // Placeholder blocks have no renderable entry point.
    assert!(index.component_ref("sidebar-16", None).is_none());
}

#[test]
fn static_generation_enumeration_covers_all_pairs() {
    let index = fixture_index();

    let styled = index
        .entries()
        .filter(|(style, _)| style.is_some())
        .count();
    let flat = index.entries().filter(|(style, _)| style.is_none()).count();

    assert_eq!(styled, 5);
    assert_eq!(flat, 5);
    assert_eq!(styled + flat, index.len());
}

#[test]
fn resolved_file_list_round_trips_through_the_tree() {
    let index = fixture_index();
    let item = index.get("login-03", None).unwrap();

    let forest = build_tree(&item.files);
    let paths: Vec<&str> = item.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(leaf_paths(&forest), paths);
}

/// Source wrapper counting underlying reads, for the memoization contract.
struct CountingSource {
    inner: MemorySource,
    reads: AtomicUsize,
}

impl CountingSource {
    fn new(inner: MemorySource) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileSource for CountingSource {
    async fn read_to_string(&self, path: &str) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_to_string(path).await
    }
}

#[tokio::test]
async fn cached_resolver_reads_each_pair_once() {
    let index = fixture_index();
    let source = CountingSource::new(memory_source_for(&index));
    let resolver = CachedResolver::new(&index, &source);

    // Same render resolves the same pair twice: once for metadata, once for
    // the preview.
    let first = resolver.resolve("login-03", None).await.unwrap();
    let second = resolver.resolve("login-03", None).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(source.reads(), first.files.len());
}
