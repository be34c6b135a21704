//! Persistent content model.
//!
//! Categories form the tree, pages hang off categories (or off the root when
//! `category_id` is `None`), and translations of the same page share a
//! `page_id` group key.
//!
//! # Identity
//!
//! A page is addressed by the triple `(category_id, url_title, language)`.
//! The same `url_title` may exist under different categories, and the same
//! page may carry a different `url_title` per language. Two composite keys
//! are unique per backend contract:
//!
//! - `(category_id, url_title, language)`
//! - `(category_id, page_id, language)`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-language name and url segment of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTranslation {
    /// Language code (e.g. "`en_GB`").
    pub language: String,
    /// Url segment identifying the category within its parent.
    pub url_title: String,
    /// Display name.
    pub title: String,
}

/// Category tree node as persisted.
///
/// `parent_id` references an existing category or is `None` for roots.
/// The backend guarantees the parent links form a tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Row id.
    pub id: i64,
    /// Parent category, `None` for root categories.
    pub parent_id: Option<i64>,
    /// Translations ("cat lang" entries), at least one per category.
    pub translations: Vec<CategoryTranslation>,
}

impl Category {
    /// Translation for an exact language code, if present.
    #[must_use]
    pub fn translation(&self, language: &str) -> Option<&CategoryTranslation> {
        self.translations.iter().find(|t| t.language == language)
    }
}

/// A content page ("rich text element") in one language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Row id.
    pub id: i64,
    /// Cross-language group key: translations of the same page share it.
    pub page_id: i64,
    /// Owning category, `None` when attached to the root.
    pub category_id: Option<i64>,
    /// Url segment identifying the page within its category, per language.
    pub url_title: String,
    /// Display title.
    pub title: String,
    /// Language code (e.g. "`sv_SE`").
    pub language: String,
    /// Content body.
    pub content: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last modification timestamp.
    pub modified: DateTime<Utc>,
}

/// Registered site language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language code (e.g. "`en_GB`").
    pub code: String,
    /// Human-readable name (e.g. "British English").
    pub long_name: String,
}

/// Input for creating a page.
///
/// `page_id: None` asks the backend to allocate a fresh page group id
/// (one past the highest in use, starting at 1). Supply a `page_id` when
/// creating a translation of an existing page group.
#[derive(Clone, Debug)]
pub struct NewPage {
    /// Owning category, `None` for root attachment.
    pub category_id: Option<i64>,
    /// Url segment.
    pub url_title: String,
    /// Display title.
    pub title: String,
    /// Language code.
    pub language: String,
    /// Content body.
    pub content: String,
    /// Page group key, `None` to allocate.
    pub page_id: Option<i64>,
}
