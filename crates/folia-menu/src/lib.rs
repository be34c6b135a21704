//! Menu tree building and page lookup for folia.
//!
//! This crate provides:
//! - [`Menu`]: per-language path resolution and menu tree building
//! - [`PageLocator`]: page lookup by `(category, url segment, language)`
//!   with create-on-first-visit
//! - [`Translations`]: which languages exist, which a page group has, which
//!   are missing
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), folia_menu::MenuError> {
//! use std::sync::Arc;
//! use folia_menu::{Menu, MenuOptions};
//! use folia_repo::MemoryRepository;
//!
//! let repo = Arc::new(
//!     MemoryRepository::new()
//!         .with_category(1, None, &[("en_GB", "fruits", "Fruits")])
//!         .with_page(1, Some(1), "apple_pie", "en_GB"),
//! );
//! let menu = Menu::new(repo, MenuOptions::default());
//!
//! // Root menu, one level of pages merged in
//! let tree = menu.build_tree(None, 1, "en_GB")?;
//!
//! // Url path of a category
//! let path = menu.resolve_path(Some(1), "en_GB")?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod locator;
pub(crate) mod menu;
pub(crate) mod translations;
pub(crate) mod tree;

pub use locator::{FindOptions, PageLocator};
pub use menu::{Menu, MenuError, MenuOptions, TranslationFallback};
pub use translations::Translations;
pub use tree::{NodeKind, TreeNode};
