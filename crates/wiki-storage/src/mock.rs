//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::page::Page;
use crate::storage::{Storage, StorageError, StorageErrorKind};
use crate::title::Title;

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores pages in memory and records every title that reaches it, so tests
/// can assert that rejected requests never touched storage.
///
/// # Example
///
/// ```ignore
/// use wiki_storage::{MockStorage, Storage, Title};
///
/// let storage = MockStorage::new().with_page("Home", "Welcome");
/// let page = storage.load(&Title::parse("Home")?)?;
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    pages: RwLock<HashMap<Title, Vec<u8>>>,
    accessed: RwLock<Vec<Title>>,
    save_failure: RwLock<Option<StorageErrorKind>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stored page.
    ///
    /// # Panics
    ///
    /// Panics if `title` is not a valid title or the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, title: &str, body: impl Into<Vec<u8>>) -> Self {
        let title = Title::parse(title).expect("invalid title in test fixture");
        self.pages.write().unwrap().insert(title, body.into());
        self
    }

    /// Make every subsequent save fail with the given error kind.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn fail_saves(self, kind: StorageErrorKind) -> Self {
        *self.save_failure.write().unwrap() = Some(kind);
        self
    }

    /// Titles passed to `load` or `save`, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn accessed(&self) -> Vec<Title> {
        self.accessed.read().unwrap().clone()
    }

    /// Current body stored for `title`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn body(&self, title: &str) -> Option<Vec<u8>> {
        let title = Title::parse(title).ok()?;
        self.pages.read().unwrap().get(&title).cloned()
    }

    fn record(&self, title: &Title) {
        self.accessed.write().unwrap().push(title.clone());
    }
}

impl Storage for MockStorage {
    fn load(&self, title: &Title) -> Result<Page, StorageError> {
        self.record(title);
        self.pages
            .read()
            .unwrap()
            .get(title)
            .map(|body| Page::new(title.clone(), body.clone()))
            .ok_or_else(|| StorageError::not_found(title.file_name()).with_backend(BACKEND))
    }

    fn save(&self, page: &Page) -> Result<(), StorageError> {
        self.record(&page.title);
        if let Some(kind) = *self.save_failure.read().unwrap() {
            return Err(StorageError::new(kind)
                .with_backend(BACKEND)
                .with_path(page.title.file_name()));
        }
        self.pages
            .write()
            .unwrap()
            .insert(page.title.clone(), page.body.clone());
        Ok(())
    }
}
