//! The page entity.

use std::borrow::Cow;

use crate::title::Title;

/// A wiki page: a title and an uninterpreted byte body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page title, also the storage key.
    pub title: Title,
    /// Raw page content.
    pub body: Vec<u8>,
}

impl Page {
    /// Create a page with the given body.
    #[must_use]
    pub fn new(title: Title, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title,
            body: body.into(),
        }
    }

    /// Create a page with an empty body, used for pages not yet stored.
    #[must_use]
    pub fn empty(title: Title) -> Self {
        Self {
            title,
            body: Vec::new(),
        }
    }

    /// Body as text for rendering. Invalid UTF-8 is replaced, not rejected.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
