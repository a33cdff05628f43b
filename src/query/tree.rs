//! Folder-tree construction for the knowledge base.
//!
//! Folders arrive as a flat list with parent references. The tree
//! groups them by parent, sorts siblings by name, and flattens
//! depth-first for row-oriented rendering.

use crate::data::Folder;
use std::collections::HashMap;

/// Parent-indexed adjacency over a flat folder list.
#[derive(Debug)]
pub struct FolderTree<'a> {
    by_parent: HashMap<Option<&'a str>, Vec<&'a Folder>>,
}

/// One row of the flattened tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeRow<'a> {
    /// The folder at this row.
    pub folder: &'a Folder,
    /// Nesting depth; top-level folders are 0.
    pub depth: u16,
}

impl<'a> FolderTree<'a> {
    /// Build the tree from a flat folder list.
    ///
    /// Siblings are sorted by name. Folders whose parent id is absent
    /// from the list are unreachable and simply never rendered.
    pub fn build(folders: &'a [Folder]) -> Self {
        let mut by_parent: HashMap<Option<&'a str>, Vec<&'a Folder>> = HashMap::new();
        for folder in folders {
            by_parent
                .entry(folder.parent_id.as_deref())
                .or_default()
                .push(folder);
        }
        for siblings in by_parent.values_mut() {
            siblings.sort_by(|a, b| a.name.cmp(&b.name));
        }
        Self { by_parent }
    }

    /// Children of a parent id (`None` for top level), name-sorted.
    pub fn children(&self, parent: Option<&'a str>) -> &[&'a Folder] {
        self.by_parent.get(&parent).map_or(&[], Vec::as_slice)
    }
}

/// Flatten the tree depth-first into indent-annotated rows.
pub fn flatten_tree<'a>(tree: &FolderTree<'a>) -> Vec<TreeRow<'a>> {
    let mut rows = Vec::new();
    push_branch(tree, None, 0, &mut rows);
    rows
}

fn push_branch<'a>(
    tree: &FolderTree<'a>,
    parent: Option<&'a str>,
    depth: u16,
    rows: &mut Vec<TreeRow<'a>>,
) {
    for folder in tree.children(parent) {
        rows.push(TreeRow { folder, depth });
        push_branch(tree, Some(&folder.id), depth + 1, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, name: &str, parent: Option<&str>) -> Folder {
        Folder {
            id: id.into(),
            name: name.into(),
            parent_id: parent.map(Into::into),
        }
    }

    fn fixture() -> Vec<Folder> {
        vec![
            folder("f2", "Zebra", None),
            folder("f1", "Guides", None),
            folder("f3", "Setup", Some("f1")),
            folder("f4", "Advanced", Some("f1")),
            folder("f5", "Deep", Some("f4")),
        ]
    }

    #[test]
    fn test_siblings_sorted_by_name() {
        let folders = fixture();
        let tree = FolderTree::build(&folders);
        let top: Vec<&str> = tree.children(None).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(top, vec!["Guides", "Zebra"]);
        let nested: Vec<&str> = tree
            .children(Some("f1"))
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(nested, vec!["Advanced", "Setup"]);
    }

    #[test]
    fn test_flatten_depth_first_with_depths() {
        let folders = fixture();
        let tree = FolderTree::build(&folders);
        let rows = flatten_tree(&tree);
        let flat: Vec<(&str, u16)> = rows
            .iter()
            .map(|row| (row.folder.name.as_str(), row.depth))
            .collect();
        assert_eq!(
            flat,
            vec![
                ("Guides", 0),
                ("Advanced", 1),
                ("Deep", 2),
                ("Setup", 1),
                ("Zebra", 0),
            ]
        );
    }

    #[test]
    fn test_orphan_parent_never_rendered() {
        let folders = vec![folder("f1", "A", Some("missing"))];
        let tree = FolderTree::build(&folders);
        assert!(flatten_tree(&tree).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let tree = FolderTree::build(&[]);
        assert!(flatten_tree(&tree).is_empty());
    }
}
