//! Translation bookkeeping over page groups.
//!
//! Answers the administrator's questions on a multi-language site: which
//! languages exist at all, which ones a given page is translated into, and
//! which are still missing. Maps are keyed by language code and ordered, the
//! way the listings are presented.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use folia_repo::{PageRecord, Repository};

use crate::menu::MenuError;

/// Per-language bookkeeping over the page table and language registry.
pub struct Translations {
    repo: Arc<dyn Repository>,
}

impl Translations {
    /// Create translation helpers over a repository.
    #[must_use]
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    /// All languages present on the site: code to display name for every
    /// language that has at least one page.
    ///
    /// Pages in a language the registry does not know are tolerated; their
    /// code stands in as the display name.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Repo`] on repository failure.
    pub fn available_languages(&self) -> Result<BTreeMap<String, String>, MenuError> {
        let registry = self.registry()?;

        Ok(self
            .repo
            .page_languages()?
            .into_iter()
            .map(|code| {
                let long_name = registry.get(&code).cloned().unwrap_or_else(|| code.clone());
                (code, long_name)
            })
            .collect())
    }

    /// Languages a page group is translated into, code to display name.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Repo`] on repository failure.
    pub fn languages_for(&self, page_id: i64) -> Result<BTreeMap<String, String>, MenuError> {
        let registry = self.registry()?;

        Ok(self
            .repo
            .pages_in_group(page_id)?
            .into_iter()
            .map(|page| {
                let long_name = registry
                    .get(&page.language)
                    .cloned()
                    .unwrap_or_else(|| page.language.clone());
                (page.language, long_name)
            })
            .collect())
    }

    /// Url segment per language for every existing translation of a page
    /// group. Missing translations are simply absent; the caller falls back
    /// to whatever segment it already has.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Repo`] on repository failure.
    pub fn url_titles_for(&self, page_id: i64) -> Result<BTreeMap<String, String>, MenuError> {
        Ok(self
            .repo
            .pages_in_group(page_id)?
            .into_iter()
            .map(|page| (page.language, page.url_title))
            .collect())
    }

    /// Language codes the page group is not yet translated into: the key
    /// set of [`available_languages`](Self::available_languages) minus the
    /// key set of [`languages_for`](Self::languages_for).
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Repo`] on repository failure.
    pub fn missing_languages(&self, page_id: i64) -> Result<BTreeSet<String>, MenuError> {
        let available = self.available_languages()?;
        let present = self.languages_for(page_id)?;

        Ok(available
            .into_keys()
            .filter(|code| !present.contains_key(code))
            .collect())
    }

    /// Every page in a language regardless of category, url-title order.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Repo`] on repository failure.
    pub fn pages_for_language(&self, language: &str) -> Result<Vec<PageRecord>, MenuError> {
        Ok(self.repo.pages_for_language(language)?)
    }

    /// The language registry as a code-keyed map.
    fn registry(&self) -> Result<BTreeMap<String, String>, MenuError> {
        Ok(self
            .repo
            .languages()?
            .into_iter()
            .map(|l| (l.code, l.long_name))
            .collect())
    }
}
