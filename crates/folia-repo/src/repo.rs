//! Repository trait and error types.
//!
//! Provides the [`Repository`] trait for abstracting category and page
//! persistence, along with [`RepoError`] for unified error handling across
//! backends.
//!
//! # Miss vs. failure
//!
//! Lookups that are expected to sometimes miss (a category id from a stale
//! link, a page on its first visit) return `Ok(None)` or an empty `Vec`.
//! `RepoError` is reserved for backend failures and constraint violations.

use crate::model::{Category, Language, NewPage, PageRecord};

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RepoErrorKind {
    /// Referenced row does not exist (for writes that require it).
    NotFound,
    /// A unique key would be violated.
    Conflict,
    /// Malformed input (empty url segment, unknown sentinel).
    InvalidInput,
    /// Backend is temporarily unavailable.
    Unavailable,
    /// Operation timed out.
    Timeout,
    /// Other/unknown error category.
    Other,
}

/// Retry guidance.
#[derive(Debug, PartialEq, Eq, Default)]
pub enum ErrorStatus {
    /// Don't retry (constraint violation, bad input).
    #[default]
    Permanent,
    /// Retry immediately (timeout, connection reset).
    Temporary,
    /// Retry with backoff (backend unavailable).
    Persistent,
}

/// Repository error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct RepoError {
    /// Semantic error category.
    pub kind: RepoErrorKind,
    /// Retry guidance.
    pub status: ErrorStatus,
    /// Key or row context (if applicable).
    pub key: Option<String>,
    /// Backend identifier (e.g. "Memory").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RepoError {
    /// Create a new repository error.
    #[must_use]
    pub fn new(kind: RepoErrorKind) -> Self {
        Self {
            kind,
            status: ErrorStatus::Permanent,
            key: None,
            backend: None,
            source: None,
        }
    }

    /// Attach key context (e.g. the composite key of the offending row).
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set retry status.
    #[must_use]
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a conflict error with key context.
    #[must_use]
    pub fn conflict(key: impl Into<String>) -> Self {
        Self::new(RepoErrorKind::Conflict).with_key(key)
    }

    /// Create a not found error with key context.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::new(RepoErrorKind::NotFound).with_key(key)
    }
}

impl std::fmt::Display for RepoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (key: ...)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            RepoErrorKind::NotFound => "Not found",
            RepoErrorKind::Conflict => "Conflict",
            RepoErrorKind::InvalidInput => "Invalid input",
            RepoErrorKind::Unavailable => "Unavailable",
            RepoErrorKind::Timeout => "Timeout",
            RepoErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(key) = &self.key {
            write!(f, " (key: {key})")?;
        }

        Ok(())
    }
}

impl std::error::Error for RepoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Category and page persistence.
///
/// The menu layer consumes this trait through `Arc<dyn Repository>`; the
/// backend owns whatever consistency discipline it needs. Category ordering
/// in [`children`](Repository::children) and page ordering in
/// [`pages_for_category`](Repository::pages_for_category) is the backend's
/// return order and is preserved by consumers.
pub trait Repository: Send + Sync {
    /// Look up a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] on backend failure. A missing id is `Ok(None)`.
    fn category(&self, id: i64) -> Result<Option<Category>, RepoError>;

    /// Immediate child categories of `parent`, `None` for root categories.
    ///
    /// An unknown `parent` id yields an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] on backend failure.
    fn children(&self, parent: Option<i64>) -> Result<Vec<Category>, RepoError>;

    /// Look up a page by its `(category, url_title, language)` triple.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] on backend failure. A miss is `Ok(None)`.
    fn page(
        &self,
        category: Option<i64>,
        url_title: &str,
        language: &str,
    ) -> Result<Option<PageRecord>, RepoError>;

    /// Pages directly attached to `category`, optionally restricted to one
    /// language. `None` category means pages attached to the root.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] on backend failure.
    fn pages_for_category(
        &self,
        category: Option<i64>,
        language: Option<&str>,
    ) -> Result<Vec<PageRecord>, RepoError>;

    /// All translations of a page group.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] on backend failure.
    fn pages_in_group(&self, page_id: i64) -> Result<Vec<PageRecord>, RepoError>;

    /// All pages in a language regardless of category, url-title order.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] on backend failure.
    fn pages_for_language(&self, language: &str) -> Result<Vec<PageRecord>, RepoError>;

    /// Distinct language codes present in the page table, sorted.
    ///
    /// This is the grouped view behind "which languages does the site have
    /// content in"; codes appear whether or not the language registry knows
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] on backend failure.
    fn page_languages(&self) -> Result<Vec<String>, RepoError>;

    /// Persist a new page and return its row id.
    ///
    /// When `new.page_id` is `None` the backend allocates the next unused
    /// page group id atomically with the insert, so two concurrent
    /// first-visit creations cannot mint the same group id.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] with kind [`RepoErrorKind::Conflict`] when
    /// either unique key — `(category, url_title, language)` or
    /// `(category, page_id, language)` — would be violated.
    fn create_page(&self, new: NewPage) -> Result<i64, RepoError>;

    /// Highest page group id in use, `None` when no pages exist.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] on backend failure.
    fn max_page_id(&self) -> Result<Option<i64>, RepoError>;

    /// The language registry.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError`] on backend failure.
    fn languages(&self) -> Result<Vec<Language>, RepoError>;
}
