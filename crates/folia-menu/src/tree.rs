//! Ephemeral menu tree values.
//!
//! [`TreeNode`] is the derived, per-request representation of a menu entry:
//! a category carrying its merged subtree, a page leaf, or a hand-built
//! custom entry. Nodes are tagged with [`NodeKind`] at construction; nothing
//! downstream has to infer what a node is from where it came from.

use serde::Serialize;

/// What a tree node represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A category; may carry children.
    Category,
    /// A page leaf.
    Page,
    /// A hand-built menu entry not backed by a repository row.
    Custom,
}

/// One entry in a built menu tree.
///
/// `path` is absolute (leading separator, no trailing separator) and already
/// resolved for the language the tree was built in. `level` is the depth
/// relative to the starting point of the build, 0 for immediate children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    /// Display title.
    pub title: String,
    /// Own url segment.
    pub slug: String,
    /// Resolved absolute path.
    pub path: String,
    /// Depth relative to the build's starting point.
    pub level: u32,
    /// Node tag.
    pub kind: NodeKind,
    /// Backing category row, for category nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Backing page group, for page nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_id: Option<i64>,
    /// Child entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Build a custom menu entry pointing at an arbitrary path.
    ///
    /// Unlike repository-backed nodes, the `path` here is whatever the
    /// caller wants to link to; the slug is derived from its last segment.
    /// Pass children to get a sub-menu.
    #[must_use]
    pub fn custom(
        title: impl Into<String>,
        level: u32,
        path: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        let path = path.into();
        let slug = path
            .rsplit('/')
            .find(|s| !s.is_empty())
            .unwrap_or_default()
            .to_owned();
        Self {
            title: title.into(),
            slug,
            path,
            level,
            kind: NodeKind::Custom,
            category_id: None,
            page_id: None,
            children,
        }
    }
}
