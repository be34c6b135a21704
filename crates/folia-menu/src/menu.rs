//! Menu facade: path resolution and tree building.
//!
//! [`Menu`] combines the category tree and the pages attached to it into
//! per-language menu trees:
//!
//! - [`Menu::resolve_path`] walks a category's ancestors into an absolute
//!   url path
//! - [`Menu::build_tree`] assembles categories and pages into a nested
//!   [`TreeNode`] sequence, merging pages level by level
//! - [`Menu::resolve_route`] matches an incoming url path against the tree
//!
//! # Example
//!
//! A tree three levels deep:
//!
//! ```text
//! fruits
//!     apple
//!         yellow
//!         black
//!     pear
//! animals
//!     about_animals   <- a page, not a category
//!     cat
//!         hungry
//!         purring
//!     salmon
//! ```
//!
//! `build_tree(Some(animals), 0, lang)` returns `cat`, `salmon`,
//! `about_animals`. With depth 1 the category subtrees come along and each
//! first-level category brings its own pages.
//!
//! Trees are built fresh per call from repository data; nothing is mutated
//! in place and nothing is cached.

use std::collections::HashSet;
use std::sync::Arc;

use folia_repo::{Category, CategoryTranslation, PageRecord, RepoError, Repository};

use crate::tree::{NodeKind, TreeNode};

/// Error returned by menu operations.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Category id does not exist.
    #[error("Category not found: {0}")]
    CategoryNotFound(i64),
    /// Parent links loop instead of forming a tree.
    #[error("Category parent chain loops at {0}")]
    ParentCycle(i64),
    /// No translation usable for the requested language under the active
    /// fallback policy.
    #[error("Category {category} has no translation usable for {language}")]
    MissingTranslation {
        /// The untranslated category.
        category: i64,
        /// The requested language.
        language: String,
    },
    /// Repository failure.
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// What to do when a category lacks a translation for the requested
/// language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TranslationFallback {
    /// Use the default language's segment, then any recorded translation.
    #[default]
    DefaultLanguage,
    /// Leave the category out of built trees; path resolution through it
    /// fails.
    Skip,
}

/// Menu behavior options.
#[derive(Clone, Debug)]
pub struct MenuOptions {
    /// Language whose segments stand in for missing translations.
    pub default_language: String,
    /// Missing-translation policy.
    pub fallback: TranslationFallback,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            default_language: "en_GB".to_owned(),
            fallback: TranslationFallback::default(),
        }
    }
}

/// Path resolution and menu tree building over a [`Repository`].
pub struct Menu {
    repo: Arc<dyn Repository>,
    options: MenuOptions,
}

impl Menu {
    /// Create a menu over a repository.
    #[must_use]
    pub fn new(repo: Arc<dyn Repository>, options: MenuOptions) -> Self {
        Self { repo, options }
    }

    /// Resolve the absolute url path of a category, trailing separator
    /// included so a leaf segment can be appended directly.
    ///
    /// `None` is the root sentinel and resolves to `"/"`. A category
    /// resolves to one segment per ancestor, root to leaf, its own segment
    /// included: `"/fruits/apple/"`.
    ///
    /// # Errors
    ///
    /// [`MenuError::CategoryNotFound`] for an unknown id,
    /// [`MenuError::MissingTranslation`] when an ancestor has no usable
    /// segment under the fallback policy, [`MenuError::ParentCycle`] if the
    /// parent chain loops.
    pub fn resolve_path(
        &self,
        category_id: Option<i64>,
        language: &str,
    ) -> Result<String, MenuError> {
        let Some(start) = category_id else {
            return Ok("/".to_owned());
        };

        let mut segments = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(start);
        while let Some(id) = current {
            if !visited.insert(id) {
                return Err(MenuError::ParentCycle(id));
            }
            let category = self
                .repo
                .category(id)?
                .ok_or(MenuError::CategoryNotFound(id))?;
            let translation =
                self.localized(&category, language)
                    .ok_or_else(|| MenuError::MissingTranslation {
                        category: id,
                        language: language.to_owned(),
                    })?;
            segments.push(translation.url_title.clone());
            current = category.parent_id;
        }

        let mut path = String::from("/");
        for segment in segments.iter().rev() {
            path.push_str(segment);
            path.push('/');
        }
        Ok(path)
    }

    /// Resolve the absolute url path of a page: its ancestor path plus its
    /// own url segment, in the page's own language.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Menu::resolve_path`].
    pub fn page_path(&self, page: &PageRecord) -> Result<String, MenuError> {
        let base = self.resolve_path(page.category_id, &page.language)?;
        Ok(format!("{base}{}", page.url_title))
    }

    /// Build the menu tree below `parent` (`None` for the root), `depth`
    /// levels of page merging deep.
    ///
    /// The returned sequence is the child categories (each carrying its own
    /// merged subtree) followed by the pages directly attached to `parent`,
    /// both in repository order. A category at relative level L gets its
    /// subtree and pages merged in only while `L < depth`; pages whose url
    /// segment collides with a sibling category's are dropped, the category
    /// wins.
    ///
    /// An unknown `parent` id yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError`] on repository failure or when the starting
    /// category's own path cannot be resolved.
    pub fn build_tree(
        &self,
        parent: Option<i64>,
        depth: u32,
        language: &str,
    ) -> Result<Vec<TreeNode>, MenuError> {
        let base = match parent {
            None => "/".to_owned(),
            Some(id) => {
                if self.repo.category(id)?.is_none() {
                    return Ok(Vec::new());
                }
                self.resolve_path(Some(id), language)?
            }
        };
        self.build_level(parent, &base, 0, depth, language)
    }

    /// Match a url path, segment by segment, against the category tree.
    ///
    /// Returns one annotated category node per segment, root to leaf, or an
    /// empty sequence unless the entire path exists.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Repo`] on repository failure.
    pub fn resolve_route(
        &self,
        segments: &[&str],
        language: &str,
    ) -> Result<Vec<TreeNode>, MenuError> {
        let mut nodes: Vec<TreeNode> = Vec::new();
        let mut parent = None;
        let mut base = String::from("/");

        for segment in segments {
            let mut matched = None;
            for category in self.repo.children(parent)? {
                let Some(translation) = self.localized(&category, language) else {
                    continue;
                };
                if translation.url_title == *segment {
                    matched = Some((
                        translation.title.clone(),
                        translation.url_title.clone(),
                        category.id,
                    ));
                    break;
                }
            }
            let Some((title, slug, id)) = matched else {
                return Ok(Vec::new());
            };

            let path = format!("{base}{slug}");
            base = format!("{path}/");
            let level = u32::try_from(nodes.len()).unwrap_or(u32::MAX);
            nodes.push(TreeNode {
                title,
                slug,
                path,
                level,
                kind: NodeKind::Category,
                category_id: Some(id),
                page_id: None,
                children: Vec::new(),
            });
            parent = Some(id);
        }

        Ok(nodes)
    }

    /// Collect every node sitting at the given tree depth, breadth first
    /// across all subtrees: the categories at `level` plus the pages whose
    /// parent category sits one level above (root pages for level 0).
    ///
    /// # Errors
    ///
    /// Returns [`MenuError`] on repository failure.
    pub fn nodes_at_level(&self, level: u32, language: &str) -> Result<Vec<TreeNode>, MenuError> {
        // A tree built with depth == level reaches exactly the categories
        // and merged pages at that level; collect that frontier.
        let tree = self.build_tree(None, level, language)?;

        let mut frontier = tree;
        let mut collected = Vec::new();
        while let Some(node) = frontier.pop() {
            if node.level == level {
                collected.push(node);
            } else {
                frontier.extend(node.children);
            }
        }
        collected.reverse();
        Ok(collected)
    }

    /// Merge one level: child categories first, then the pages directly
    /// attached to `parent`, minus pages shadowed by a sibling category.
    fn build_level(
        &self,
        parent: Option<i64>,
        base: &str,
        level: u32,
        depth: u32,
        language: &str,
    ) -> Result<Vec<TreeNode>, MenuError> {
        let categories = self.repo.children(parent)?;

        let mut nodes = Vec::new();
        let mut category_slugs = Vec::new();
        for category in &categories {
            let Some(translation) = self.localized(category, language) else {
                tracing::debug!(
                    category = category.id,
                    language,
                    "untranslated category omitted from tree"
                );
                continue;
            };
            let slug = translation.url_title.clone();
            let title = translation.title.clone();
            let path = format!("{base}{slug}");

            let children = if level < depth {
                self.build_level(
                    Some(category.id),
                    &format!("{path}/"),
                    level + 1,
                    depth,
                    language,
                )?
            } else {
                Vec::new()
            };

            category_slugs.push(slug.clone());
            nodes.push(TreeNode {
                title,
                slug,
                path,
                level,
                kind: NodeKind::Category,
                category_id: Some(category.id),
                page_id: None,
                children,
            });
        }

        for page in self.repo.pages_for_category(parent, Some(language))? {
            // A page sharing a sibling category's segment would be
            // unroutable; the category wins.
            if category_slugs.iter().any(|slug| *slug == page.url_title) {
                tracing::debug!(
                    page = page.id,
                    url_title = %page.url_title,
                    "page shadowed by sibling category, dropped"
                );
                continue;
            }
            nodes.push(TreeNode {
                title: page.title.clone(),
                slug: page.url_title.clone(),
                path: format!("{base}{}", page.url_title),
                level,
                kind: NodeKind::Page,
                category_id: None,
                page_id: Some(page.page_id),
                children: Vec::new(),
            });
        }

        Ok(nodes)
    }

    /// Pick the translation to present a category in `language`, applying
    /// the configured fallback policy.
    fn localized<'a>(
        &self,
        category: &'a Category,
        language: &str,
    ) -> Option<&'a CategoryTranslation> {
        if let Some(translation) = category.translation(language) {
            return Some(translation);
        }
        match self.options.fallback {
            TranslationFallback::Skip => None,
            TranslationFallback::DefaultLanguage => {
                let fallback = category
                    .translation(&self.options.default_language)
                    .or_else(|| category.translations.first());
                if let Some(translation) = fallback {
                    tracing::warn!(
                        category = category.id,
                        language,
                        fallback = %translation.language,
                        "missing category translation, using fallback segment"
                    );
                }
                fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // Menu is shared behind Arc by request handlers
    static_assertions::assert_impl_all!(super::Menu: Send, Sync);

    use folia_repo::MemoryRepository;
    use pretty_assertions::assert_eq;

    use super::*;

    /// The docblock tree: fruits > {apple > {yellow, black}, pear},
    /// animals > {cat > {hungry, purring}, salmon}, plus the
    /// `about_animals` page attached to `animals` and a `home` page at the
    /// root.
    fn fixture() -> MemoryRepository {
        MemoryRepository::new()
            .with_language("en_GB", "British English")
            .with_language("sv_SE", "Svenska")
            .with_category(
                1,
                None,
                &[("en_GB", "fruits", "Fruits"), ("sv_SE", "frukter", "Frukter")],
            )
            .with_category(
                11,
                Some(1),
                &[("en_GB", "apple", "Apple"), ("sv_SE", "apple", "Äpple")],
            )
            .with_category(111, Some(11), &[("en_GB", "yellow", "Yellow")])
            .with_category(112, Some(11), &[("en_GB", "black", "Black")])
            .with_category(12, Some(1), &[("en_GB", "pear", "Pear")])
            .with_category(2, None, &[("en_GB", "animals", "Animals")])
            .with_category(21, Some(2), &[("en_GB", "cat", "Cat")])
            .with_category(22, Some(2), &[("en_GB", "salmon", "Salmon")])
            .with_page(1, Some(2), "about_animals", "en_GB")
            .with_page(2, Some(21), "feeding", "en_GB")
            .with_page(3, None, "home", "en_GB")
    }

    fn menu(repo: MemoryRepository) -> Menu {
        Menu::new(Arc::new(repo), MenuOptions::default())
    }

    // resolve_path

    #[test]
    fn test_resolve_path_root_sentinel() {
        let menu = menu(fixture());

        assert_eq!(menu.resolve_path(None, "en_GB").unwrap(), "/");
    }

    #[test]
    fn test_resolve_path_root_category() {
        let menu = menu(fixture());

        assert_eq!(menu.resolve_path(Some(1), "en_GB").unwrap(), "/fruits/");
    }

    #[test]
    fn test_resolve_path_nested_category() {
        let menu = menu(fixture());

        assert_eq!(
            menu.resolve_path(Some(111), "en_GB").unwrap(),
            "/fruits/apple/yellow/"
        );
    }

    #[test]
    fn test_resolve_path_per_language() {
        let menu = menu(fixture());

        assert_eq!(
            menu.resolve_path(Some(11), "sv_SE").unwrap(),
            "/frukter/apple/"
        );
    }

    #[test]
    fn test_resolve_path_unknown_category() {
        let menu = menu(fixture());

        let err = menu.resolve_path(Some(999), "en_GB").unwrap_err();
        assert!(matches!(err, MenuError::CategoryNotFound(999)));
    }

    #[test]
    fn test_resolve_path_falls_back_to_default_language() {
        // "pear" has no sv_SE translation; the en_GB default fills in.
        let menu = menu(fixture());

        assert_eq!(
            menu.resolve_path(Some(12), "sv_SE").unwrap(),
            "/frukter/pear/"
        );
    }

    #[test]
    fn test_resolve_path_skip_policy_fails_on_missing_translation() {
        let options = MenuOptions {
            fallback: TranslationFallback::Skip,
            ..MenuOptions::default()
        };
        let menu = Menu::new(Arc::new(fixture()), options);

        let err = menu.resolve_path(Some(12), "sv_SE").unwrap_err();
        assert!(matches!(
            err,
            MenuError::MissingTranslation { category: 12, .. }
        ));
    }

    #[test]
    fn test_resolve_path_detects_parent_cycle() {
        // 5 -> 6 -> 5: impossible through the admin surface, but a broken
        // backend must not hang the resolver.
        let repo = MemoryRepository::new()
            .with_category(5, Some(6), &[("en_GB", "five", "Five")])
            .with_category(6, Some(5), &[("en_GB", "six", "Six")]);
        let menu = menu(repo);

        let err = menu.resolve_path(Some(5), "en_GB").unwrap_err();
        assert!(matches!(err, MenuError::ParentCycle(_)));
    }

    #[test]
    fn test_page_path_appends_url_title() {
        let menu = menu(fixture());
        let repo = fixture();
        let page = repo.page(Some(21), "feeding", "en_GB").unwrap().unwrap();

        assert_eq!(menu.page_path(&page).unwrap(), "/animals/cat/feeding");
    }

    #[test]
    fn test_page_path_root_page() {
        let menu = menu(fixture());
        let repo = fixture();
        let page = repo.page(None, "home", "en_GB").unwrap().unwrap();

        assert_eq!(menu.page_path(&page).unwrap(), "/home");
    }

    // build_tree

    #[test]
    fn test_build_tree_depth_zero_immediate_children_only() {
        let menu = menu(fixture());

        let tree = menu.build_tree(Some(2), 0, "en_GB").unwrap();

        let labels: Vec<_> = tree.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(labels, vec!["cat", "salmon", "about_animals"]);
        // No page merging below the immediate level.
        assert!(tree.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_build_tree_depth_zero_has_no_grandchild_pages() {
        let menu = menu(fixture());

        let tree = menu.build_tree(Some(2), 0, "en_GB").unwrap();

        let cat = tree.iter().find(|n| n.slug == "cat").unwrap();
        assert!(cat.children.is_empty());
    }

    #[test]
    fn test_build_tree_depth_one_expands_subtree_with_pages() {
        let menu = menu(fixture());

        let tree = menu.build_tree(Some(2), 1, "en_GB").unwrap();

        let cat = tree.iter().find(|n| n.slug == "cat").unwrap();
        let cat_children: Vec<_> = cat.children.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(cat_children, vec!["feeding"]);
        assert_eq!(cat.children[0].kind, NodeKind::Page);
        assert_eq!(cat.children[0].path, "/animals/cat/feeding");
    }

    #[test]
    fn test_build_tree_merges_pages_only_below_depth() {
        // feeding hangs off cat (level 1 from the root): merged at depth 2,
        // absent at depth 1.
        let menu = menu(fixture());

        let shallow = menu.build_tree(None, 1, "en_GB").unwrap();
        let animals = shallow.iter().find(|n| n.slug == "animals").unwrap();
        let cat = animals.children.iter().find(|n| n.slug == "cat").unwrap();
        assert!(cat.children.is_empty());

        let deep = menu.build_tree(None, 2, "en_GB").unwrap();
        let animals = deep.iter().find(|n| n.slug == "animals").unwrap();
        let cat = animals.children.iter().find(|n| n.slug == "cat").unwrap();
        assert_eq!(cat.children.len(), 1);
        assert_eq!(cat.children[0].slug, "feeding");
    }

    #[test]
    fn test_build_tree_root_includes_root_pages() {
        let menu = menu(fixture());

        let tree = menu.build_tree(None, 0, "en_GB").unwrap();

        let labels: Vec<_> = tree.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(labels, vec!["fruits", "animals", "home"]);
        let home = &tree[2];
        assert_eq!(home.kind, NodeKind::Page);
        assert_eq!(home.path, "/home");
    }

    #[test]
    fn test_build_tree_categories_before_pages_in_repo_order() {
        let menu = menu(fixture());

        let tree = menu.build_tree(Some(2), 0, "en_GB").unwrap();

        assert_eq!(tree[0].kind, NodeKind::Category);
        assert_eq!(tree[1].kind, NodeKind::Category);
        assert_eq!(tree[2].kind, NodeKind::Page);
    }

    #[test]
    fn test_build_tree_levels_relative_to_start() {
        let menu = menu(fixture());

        let tree = menu.build_tree(Some(1), 1, "en_GB").unwrap();

        let apple = tree.iter().find(|n| n.slug == "apple").unwrap();
        assert_eq!(apple.level, 0);
        assert!(apple.children.iter().all(|n| n.level == 1));
    }

    #[test]
    fn test_build_tree_paths_are_absolute() {
        let menu = menu(fixture());

        let tree = menu.build_tree(None, 1, "en_GB").unwrap();

        let fruits = tree.iter().find(|n| n.slug == "fruits").unwrap();
        assert_eq!(fruits.path, "/fruits");
        let apple = fruits.children.iter().find(|n| n.slug == "apple").unwrap();
        assert_eq!(apple.path, "/fruits/apple");
    }

    #[test]
    fn test_build_tree_unknown_parent_is_empty() {
        let menu = menu(fixture());

        assert!(menu.build_tree(Some(999), 3, "en_GB").unwrap().is_empty());
    }

    #[test]
    fn test_build_tree_category_wins_name_collision() {
        // Category "apple" under fruits and a page with url segment
        // "apple" attached to fruits: the page is dropped.
        let repo = fixture()
            .with_page(10, Some(1), "apple", "en_GB")
            .with_page(11, Some(1), "apple_pie", "en_GB");
        let menu = menu(repo);

        let tree = menu.build_tree(Some(1), 0, "en_GB").unwrap();

        let labels: Vec<_> = tree.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(labels, vec!["apple", "pear", "apple_pie"]);
        let apple = tree.iter().find(|n| n.slug == "apple").unwrap();
        assert_eq!(apple.kind, NodeKind::Category);
    }

    #[test]
    fn test_build_tree_collision_applies_at_nested_levels() {
        let repo = fixture().with_page(10, Some(11), "yellow", "en_GB");
        let menu = menu(repo);

        let tree = menu.build_tree(Some(1), 1, "en_GB").unwrap();

        let apple = tree.iter().find(|n| n.slug == "apple").unwrap();
        let yellow_nodes: Vec<_> = apple
            .children
            .iter()
            .filter(|n| n.slug == "yellow")
            .collect();
        assert_eq!(yellow_nodes.len(), 1);
        assert_eq!(yellow_nodes[0].kind, NodeKind::Category);
    }

    #[test]
    fn test_build_tree_no_sibling_shares_slug() {
        let repo = fixture()
            .with_page(10, Some(1), "apple", "en_GB")
            .with_page(11, Some(1), "pear", "en_GB");
        let menu = menu(repo);

        let tree = menu.build_tree(Some(1), 0, "en_GB").unwrap();

        let mut seen = HashSet::new();
        assert!(tree.iter().all(|n| seen.insert(n.slug.clone())));
    }

    #[test]
    fn test_build_tree_skip_policy_omits_untranslated() {
        let options = MenuOptions {
            fallback: TranslationFallback::Skip,
            ..MenuOptions::default()
        };
        let menu = Menu::new(Arc::new(fixture()), options);

        let tree = menu.build_tree(Some(1), 0, "sv_SE").unwrap();

        // "pear" has no sv_SE translation and is skipped; "apple" has one.
        let labels: Vec<_> = tree.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(labels, vec!["apple"]);
    }

    #[test]
    fn test_build_tree_filters_pages_by_language() {
        let repo = fixture().with_page(20, Some(2), "om_djur", "sv_SE");
        let menu = menu(repo);

        let tree = menu.build_tree(Some(2), 0, "en_GB").unwrap();

        assert!(tree.iter().all(|n| n.slug != "om_djur"));
    }

    #[test]
    fn test_build_tree_empty_repository() {
        let menu = menu(MemoryRepository::new());

        assert!(menu.build_tree(None, 2, "en_GB").unwrap().is_empty());
    }

    // resolve_route

    #[test]
    fn test_resolve_route_full_path() {
        let menu = menu(fixture());

        let route = menu
            .resolve_route(&["fruits", "apple", "yellow"], "en_GB")
            .unwrap();

        assert_eq!(route.len(), 3);
        assert_eq!(route[0].path, "/fruits");
        assert_eq!(route[1].path, "/fruits/apple");
        assert_eq!(route[2].path, "/fruits/apple/yellow");
        assert_eq!(route[2].category_id, Some(111));
    }

    #[test]
    fn test_resolve_route_partial_miss_is_empty() {
        let menu = menu(fixture());

        let route = menu
            .resolve_route(&["fruits", "banana", "yellow"], "en_GB")
            .unwrap();

        assert!(route.is_empty());
    }

    #[test]
    fn test_resolve_route_matches_language_segments() {
        let menu = menu(fixture());

        let route = menu.resolve_route(&["frukter"], "sv_SE").unwrap();

        assert_eq!(route.len(), 1);
        assert_eq!(route[0].title, "Frukter");
        assert_eq!(route[0].category_id, Some(1));
    }

    #[test]
    fn test_resolve_route_empty_input() {
        let menu = menu(fixture());

        assert!(menu.resolve_route(&[], "en_GB").unwrap().is_empty());
    }

    // nodes_at_level

    #[test]
    fn test_nodes_at_level_zero_is_roots_and_root_pages() {
        let menu = menu(fixture());

        let nodes = menu.nodes_at_level(0, "en_GB").unwrap();

        let labels: Vec<_> = nodes.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(labels, vec!["fruits", "animals", "home"]);
    }

    #[test]
    fn test_nodes_at_level_collects_across_subtrees() {
        let menu = menu(fixture());

        let nodes = menu.nodes_at_level(1, "en_GB").unwrap();

        let labels: Vec<_> = nodes.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(
            labels,
            vec!["apple", "pear", "cat", "salmon", "about_animals"]
        );
    }

    #[test]
    fn test_nodes_at_level_two() {
        let menu = menu(fixture());

        let nodes = menu.nodes_at_level(2, "en_GB").unwrap();

        let labels: Vec<_> = nodes.iter().map(|n| n.slug.as_str()).collect();
        assert_eq!(labels, vec!["yellow", "black", "feeding"]);
        assert!(nodes.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_nodes_at_level_beyond_tree_is_empty() {
        let menu = menu(fixture());

        assert!(menu.nodes_at_level(7, "en_GB").unwrap().is_empty());
    }
}
