//! In-memory repository backend.
//!
//! [`MemoryRepository`] is the reference [`Repository`] implementation: it
//! backs tests and small deployments, and it documents the consistency
//! contract a database-backed implementation has to meet (both unique page
//! keys enforced on insert, page group ids allocated atomically with the
//! insert).

use std::sync::RwLock;

use chrono::Utc;

use crate::model::{Category, CategoryTranslation, Language, NewPage, PageRecord};
use crate::repo::{RepoError, RepoErrorKind, Repository};

const BACKEND: &str = "Memory";

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    pages: Vec<PageRecord>,
    languages: Vec<Language>,
    next_row_id: i64,
}

/// In-memory repository guarded by a single `RwLock`.
///
/// Use the builder methods to seed fixtures:
///
/// ```ignore
/// use folia_repo::MemoryRepository;
///
/// let repo = MemoryRepository::new()
///     .with_language("en_GB", "British English")
///     .with_category(1, None, &[("en_GB", "fruits", "Fruits")])
///     .with_page(1, Some(1), "apple_pie", "en_GB");
/// ```
#[derive(Debug)]
pub struct MemoryRepository {
    inner: RwLock<Tables>,
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self {
            inner: RwLock::new(Tables {
                next_row_id: 1,
                ..Tables::default()
            }),
        }
    }
}

impl MemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_language(self, code: impl Into<String>, long_name: impl Into<String>) -> Self {
        self.inner.write().unwrap().languages.push(Language {
            code: code.into(),
            long_name: long_name.into(),
        });
        self
    }

    /// Add a category with `(language, url_title, title)` translations.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_category(
        self,
        id: i64,
        parent_id: Option<i64>,
        translations: &[(&str, &str, &str)],
    ) -> Self {
        self.inner.write().unwrap().categories.push(Category {
            id,
            parent_id,
            translations: translations
                .iter()
                .map(|&(language, url_title, title)| CategoryTranslation {
                    language: language.to_owned(),
                    url_title: url_title.to_owned(),
                    title: title.to_owned(),
                })
                .collect(),
        });
        self
    }

    /// Add a page with empty content; the title defaults to the url segment.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(
        self,
        page_id: i64,
        category_id: Option<i64>,
        url_title: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        let url_title = url_title.into();
        let now = Utc::now();
        {
            let mut tables = self.inner.write().unwrap();
            let id = tables.next_row_id;
            tables.next_row_id += 1;
            tables.pages.push(PageRecord {
                id,
                page_id,
                category_id,
                url_title: url_title.clone(),
                title: url_title,
                language: language.into(),
                content: String::new(),
                created: now,
                modified: now,
            });
        }
        self
    }
}

impl Repository for MemoryRepository {
    fn category(&self, id: i64) -> Result<Option<Category>, RepoError> {
        let tables = self.inner.read().unwrap();
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    fn children(&self, parent: Option<i64>) -> Result<Vec<Category>, RepoError> {
        let tables = self.inner.read().unwrap();
        Ok(tables
            .categories
            .iter()
            .filter(|c| c.parent_id == parent)
            .cloned()
            .collect())
    }

    fn page(
        &self,
        category: Option<i64>,
        url_title: &str,
        language: &str,
    ) -> Result<Option<PageRecord>, RepoError> {
        let tables = self.inner.read().unwrap();
        Ok(tables
            .pages
            .iter()
            .find(|p| {
                p.category_id == category && p.url_title == url_title && p.language == language
            })
            .cloned())
    }

    fn pages_for_category(
        &self,
        category: Option<i64>,
        language: Option<&str>,
    ) -> Result<Vec<PageRecord>, RepoError> {
        let tables = self.inner.read().unwrap();
        Ok(tables
            .pages
            .iter()
            .filter(|p| {
                p.category_id == category && language.is_none_or(|l| p.language == l)
            })
            .cloned()
            .collect())
    }

    fn pages_in_group(&self, page_id: i64) -> Result<Vec<PageRecord>, RepoError> {
        let tables = self.inner.read().unwrap();
        Ok(tables
            .pages
            .iter()
            .filter(|p| p.page_id == page_id)
            .cloned()
            .collect())
    }

    fn pages_for_language(&self, language: &str) -> Result<Vec<PageRecord>, RepoError> {
        let tables = self.inner.read().unwrap();
        let mut pages: Vec<PageRecord> = tables
            .pages
            .iter()
            .filter(|p| p.language == language)
            .cloned()
            .collect();
        pages.sort_by(|a, b| a.url_title.cmp(&b.url_title));
        Ok(pages)
    }

    fn page_languages(&self) -> Result<Vec<String>, RepoError> {
        let tables = self.inner.read().unwrap();
        let codes: std::collections::BTreeSet<String> =
            tables.pages.iter().map(|p| p.language.clone()).collect();
        Ok(codes.into_iter().collect())
    }

    fn create_page(&self, new: NewPage) -> Result<i64, RepoError> {
        if new.url_title.is_empty() {
            return Err(RepoError::new(RepoErrorKind::InvalidInput)
                .with_backend(BACKEND)
                .with_key("empty url_title"));
        }

        // The write lock makes the duplicate checks and the group id
        // allocation atomic with the insert.
        let mut tables = self.inner.write().unwrap();

        if tables.pages.iter().any(|p| {
            p.category_id == new.category_id
                && p.url_title == new.url_title
                && p.language == new.language
        }) {
            return Err(RepoError::conflict(format!(
                "({:?}, {}, {})",
                new.category_id, new.url_title, new.language
            ))
            .with_backend(BACKEND));
        }

        let page_id = match new.page_id {
            Some(page_id) => {
                if tables.pages.iter().any(|p| {
                    p.category_id == new.category_id
                        && p.page_id == page_id
                        && p.language == new.language
                }) {
                    return Err(RepoError::conflict(format!(
                        "({:?}, group {}, {})",
                        new.category_id, page_id, new.language
                    ))
                    .with_backend(BACKEND));
                }
                page_id
            }
            None => tables.pages.iter().map(|p| p.page_id).max().unwrap_or(0) + 1,
        };

        let id = tables.next_row_id;
        tables.next_row_id += 1;
        let now = Utc::now();
        tables.pages.push(PageRecord {
            id,
            page_id,
            category_id: new.category_id,
            url_title: new.url_title,
            title: new.title,
            language: new.language,
            content: new.content,
            created: now,
            modified: now,
        });

        tracing::debug!(id, page_id, "created page");

        Ok(id)
    }

    fn max_page_id(&self) -> Result<Option<i64>, RepoError> {
        let tables = self.inner.read().unwrap();
        Ok(tables.pages.iter().map(|p| p.page_id).max())
    }

    fn languages(&self) -> Result<Vec<Language>, RepoError> {
        let tables = self.inner.read().unwrap();
        Ok(tables.languages.clone())
    }
}
