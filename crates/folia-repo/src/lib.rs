//! Content repository abstraction for folia.
//!
//! This crate provides the [`Repository`] trait for abstracting category and
//! page persistence from the tree-building and lookup logic. This enables:
//!
//! - **Unit testing** without a database
//! - **Backend flexibility** (in-memory, SQL, whatever honors the contract)
//! - **Clean separation** between menu logic and persistence
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Repository`] trait with category, page, and language operations
//! - [`MemoryRepository`], the in-memory reference backend
//! - The persisted model: [`Category`], [`PageRecord`], [`Language`]
//!
//! # Example
//!
//! ```ignore
//! use folia_repo::{MemoryRepository, Repository};
//!
//! let repo = MemoryRepository::new()
//!     .with_category(1, None, &[("en_GB", "fruits", "Fruits")])
//!     .with_page(1, Some(1), "apple_pie", "en_GB");
//!
//! let roots = repo.children(None)?;
//! # Ok::<(), folia_repo::RepoError>(())
//! ```

mod memory;
mod model;
mod repo;

pub use memory::MemoryRepository;
pub use model::{Category, CategoryTranslation, Language, NewPage, PageRecord};
pub use repo::{ErrorStatus, RepoError, RepoErrorKind, Repository};
