//! File tree reconstruction for display

use serde::Serialize;

use crate::item::RegistryFile;

/// One node in the displayed file tree.
///
/// Directory nodes are synthesized purely from shared path prefixes and
/// carry no identity of their own; leaf nodes point back at the declared
/// file they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTreeNode {
    pub name: String,

    /// Full path of this node; for leaves this is exactly the declared
    /// file path
    pub path: String,

    pub children: Vec<FileTreeNode>,

    /// Index into the original file list, `None` for directories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_index: Option<usize>,
}

impl FileTreeNode {
    fn directory(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            children: Vec::new(),
            file_index: None,
        }
    }

    fn leaf(name: &str, path: &str, file_index: usize) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            children: Vec::new(),
            file_index: Some(file_index),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.file_index.is_none()
    }
}

/// Build a display forest from a flat file list.
///
/// Sibling order is the first-seen order of each path prefix. Single-child
/// directory chains are kept as-is so the tree mirrors the literal path
/// structure. Re-adding an already-present path leaves the forest
/// structurally unchanged.
pub fn build_tree(files: &[RegistryFile]) -> Vec<FileTreeNode> {
    let mut forest = Vec::new();
    for (file_index, file) in files.iter().enumerate() {
        insert_path(&mut forest, &file.path, file_index);
    }
    forest
}

fn insert_path(forest: &mut Vec<FileTreeNode>, path: &str, file_index: usize) {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let mut children = forest;
    let mut prefix = String::new();

    for (depth, segment) in segments.iter().enumerate() {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);
        let is_last = depth + 1 == segments.len();

        let pos = match children.iter().position(|node| node.path == prefix) {
            Some(pos) => pos,
            None => {
                let node = if is_last {
                    FileTreeNode::leaf(segment, &prefix, file_index)
                } else {
                    FileTreeNode::directory(segment, &prefix)
                };
                children.push(node);
                children.len() - 1
            }
        };

        children = &mut children[pos].children;
    }
}

/// Depth-first leaf paths, in tree order.
///
/// Round-trips [`build_tree`]: for a duplicate-free file list grouped by
/// directory this is exactly the input path sequence.
pub fn leaf_paths(forest: &[FileTreeNode]) -> Vec<&str> {
    let mut paths = Vec::new();
    collect_leaves(forest, &mut paths);
    paths
}

fn collect_leaves<'a>(nodes: &'a [FileTreeNode], out: &mut Vec<&'a str>) {
    for node in nodes {
        if node.is_directory() {
            collect_leaves(&node.children, out);
        } else {
            out.push(node.path.as_str());
        }
    }
}
