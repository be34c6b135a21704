//! Page lookup by url triple.
//!
//! A page is addressed by `(category, url segment, language)`: the routing
//! layer turns `a/path/to/thisuniquepage?lang=sv_SE` into a lookup of
//! `("to"'s category, "thisuniquepage", "sv_SE")`. The same segment can
//! exist in several languages and on several paths.
//!
//! On a first visit the locator can create an empty page in place, so an
//! editor lands on something saveable rather than a 404.

use std::sync::Arc;

use folia_repo::{NewPage, PageRecord, Repository};

use crate::menu::MenuError;

/// Options for [`PageLocator::find`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FindOptions {
    /// Create an empty page when the lookup misses.
    pub create_if_missing: bool,
    /// Page group to attach a created page to; `None` lets the backend
    /// allocate a fresh group id. Set this when creating a translation of
    /// an existing page.
    pub page_group: Option<i64>,
}

/// Finds pages by their `(category, url segment, language)` triple,
/// optionally creating an empty page on first visit.
pub struct PageLocator {
    repo: Arc<dyn Repository>,
}

impl PageLocator {
    /// Create a locator over a repository.
    #[must_use]
    pub fn new(repo: Arc<dyn Repository>) -> Self {
        Self { repo }
    }

    /// Look up a page, creating it first when asked to.
    ///
    /// A created page has the url segment as its title and empty content.
    /// After a create the page is read back from the repository rather than
    /// trusting the in-memory value, so the caller sees exactly what was
    /// persisted.
    ///
    /// # Errors
    ///
    /// A plain miss is `Ok(None)`. Creation failures (uniqueness violation
    /// lost to a concurrent writer, backend failure) surface as
    /// [`MenuError::Repo`]; the locator does not retry.
    pub fn find(
        &self,
        url_title: &str,
        category_id: Option<i64>,
        language: &str,
        options: FindOptions,
    ) -> Result<Option<PageRecord>, MenuError> {
        if let Some(page) = self.repo.page(category_id, url_title, language)? {
            return Ok(Some(page));
        }

        if !options.create_if_missing {
            return Ok(None);
        }

        tracing::info!(url_title, ?category_id, language, "creating page on first visit");
        self.repo.create_page(NewPage {
            category_id,
            url_title: url_title.to_owned(),
            title: url_title.to_owned(),
            language: language.to_owned(),
            content: String::new(),
            page_id: options.page_group,
        })?;

        Ok(self.repo.page(category_id, url_title, language)?)
    }
}

#[cfg(test)]
mod tests {
    use folia_repo::{MemoryRepository, RepoErrorKind};
    use pretty_assertions::assert_eq;

    use super::*;

    fn locator(repo: MemoryRepository) -> PageLocator {
        PageLocator::new(Arc::new(repo))
    }

    const CREATE: FindOptions = FindOptions {
        create_if_missing: true,
        page_group: None,
    };

    #[test]
    fn test_find_existing_page() {
        let locator = locator(MemoryRepository::new().with_page(3, Some(1), "wheels", "en_GB"));

        let page = locator
            .find("wheels", Some(1), "en_GB", FindOptions::default())
            .unwrap()
            .unwrap();

        assert_eq!(page.page_id, 3);
        assert_eq!(page.url_title, "wheels");
    }

    #[test]
    fn test_find_miss_without_create_returns_none() {
        let locator = locator(MemoryRepository::new());

        let page = locator
            .find("wheels", Some(1), "en_GB", FindOptions::default())
            .unwrap();

        assert!(page.is_none());
    }

    #[test]
    fn test_find_creates_empty_page_on_miss() {
        let locator = locator(MemoryRepository::new());

        let page = locator
            .find("wheels", Some(1), "en_GB", CREATE)
            .unwrap()
            .unwrap();

        assert_eq!(page.page_id, 1);
        assert_eq!(page.title, "wheels");
        assert_eq!(page.content, "");
        assert_eq!(page.category_id, Some(1));
    }

    #[test]
    fn test_find_created_page_is_found_again() {
        let locator = locator(MemoryRepository::new());

        let created = locator
            .find("wheels", Some(1), "en_GB", CREATE)
            .unwrap()
            .unwrap();
        let found = locator
            .find("wheels", Some(1), "en_GB", FindOptions::default())
            .unwrap()
            .unwrap();

        assert_eq!(created, found);
    }

    #[test]
    fn test_find_allocates_next_group_id() {
        let locator = locator(MemoryRepository::new().with_page(41, None, "home", "en_GB"));

        let page = locator
            .find("about", None, "en_GB", CREATE)
            .unwrap()
            .unwrap();

        assert_eq!(page.page_id, 42);
    }

    #[test]
    fn test_find_create_translation_keeps_group() {
        let locator = locator(MemoryRepository::new().with_page(7, Some(1), "wheels", "en_GB"));

        let options = FindOptions {
            create_if_missing: true,
            page_group: Some(7),
        };
        let page = locator
            .find("hjul", Some(1), "sv_SE", options)
            .unwrap()
            .unwrap();

        assert_eq!(page.page_id, 7);
        assert_eq!(page.language, "sv_SE");
    }

    #[test]
    fn test_find_create_conflict_surfaces_as_error() {
        // The group already has an en_GB entry in this category; forcing
        // the same group key again must fail, not half-create.
        let locator = locator(MemoryRepository::new().with_page(7, Some(1), "wheels", "en_GB"));

        let options = FindOptions {
            create_if_missing: true,
            page_group: Some(7),
        };
        let err = locator
            .find("other_segment", Some(1), "en_GB", options)
            .unwrap_err();

        match err {
            MenuError::Repo(repo_err) => assert_eq!(repo_err.kind, RepoErrorKind::Conflict),
            other => panic!("expected repo conflict, got {other}"),
        }
    }

    #[test]
    fn test_find_root_sentinel_category() {
        let locator = locator(MemoryRepository::new());

        let page = locator.find("home", None, "en_GB", CREATE).unwrap().unwrap();

        assert_eq!(page.category_id, None);
        assert_eq!(page.page_id, 1);
    }
}
