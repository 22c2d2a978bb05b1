//! Route grammar.
//!
//! Every page URL has the form `/<action>/<title>`, where the action is one of
//! `view`, `edit` or `save` and the title matches `[a-zA-Z0-9]+`. This module
//! is the single place that decides whether a request path names a page, so
//! nothing outside the grammar can reach storage.

use std::fmt;
use std::str::FromStr;

use wiki_storage::Title;

/// Page action encoded in the first path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Show a page.
    View,
    /// Show the edit form for a page.
    Edit,
    /// Store a submitted page body.
    Save,
}

impl Action {
    /// Path segment for this action.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Save => "save",
        }
    }

    /// URL path of this action for `title` (e.g. `/edit/Home`).
    #[must_use]
    pub fn path_for(self, title: &Title) -> String {
        format!("/{}/{title}", self.as_str())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown action segment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0:?}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "save" => Ok(Self::Save),
            other => Err(UnknownAction(other.to_owned())),
        }
    }
}

/// A request path that names a page action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Requested action.
    pub action: Action,
    /// Validated page title.
    pub title: Title,
}

impl Route {
    /// Parse a raw (not percent-decoded) request path.
    ///
    /// Returns `None` unless the whole path matches
    /// `^/(edit|save|view)/([a-zA-Z0-9]+)$`.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let rest = path.strip_prefix('/')?;
        let (action, title) = rest.split_once('/')?;
        let action = action.parse().ok()?;
        let title = Title::parse(title).ok()?;
        Some(Self { action, title })
    }

    /// URL path of this route.
    #[must_use]
    pub fn path(&self) -> String {
        self.action.path_for(&self.title)
    }
}
