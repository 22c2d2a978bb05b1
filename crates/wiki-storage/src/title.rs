//! Page titles.
//!
//! A [`Title`] is the URL-safe identifier of a page and doubles as its storage
//! key. Titles are non-empty and consist of ASCII letters and digits only.

use std::fmt;

/// Error returned when a string is not a valid page title.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid page title: {0:?}")]
pub struct InvalidTitle(pub String);

/// Validated page title matching `[a-zA-Z0-9]+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Title(String);

impl Title {
    /// Parse a title, rejecting anything outside `[a-zA-Z0-9]+`.
    ///
    /// The input is never truncated: `"Foo/Bar"` is an error, not `"Foo"`.
    pub fn parse(value: &str) -> Result<Self, InvalidTitle> {
        if is_valid(value) {
            Ok(Self(value.to_owned()))
        } else {
            Err(InvalidTitle(value.to_owned()))
        }
    }

    /// Title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the file holding this page (`<title>.txt`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.0)
    }
}

fn is_valid(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Title {
    type Err = InvalidTitle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alphanumeric() {
        for value in ["FrontPage", "a", "Z", "123", "Test2Page", "abcXYZ0189"] {
            let title = Title::parse(value).unwrap();
            assert_eq!(title.as_str(), value);
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Title::parse(""), Err(InvalidTitle(String::new())));
    }

    #[test]
    fn test_parse_rejects_separators_and_dots() {
        for value in [
            "Test/Page",
            "/etc",
            "..",
            "../secret",
            "page.txt",
            "a\\b",
            "with space",
            "tab\t",
            "new\nline",
            "dash-ed",
            "under_score",
            "%2e%2e",
            "Caf\u{e9}",
            "\u{ff21}",
            "nul\0",
        ] {
            assert!(Title::parse(value).is_err(), "accepted {value:?}");
        }
    }

    #[test]
    fn test_file_name() {
        let title = Title::parse("TestPage").unwrap();

        assert_eq!(title.file_name(), "TestPage.txt");
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let lower = Title::parse("page").unwrap();
        let upper = Title::parse("Page").unwrap();

        assert_ne!(lower, upper);
        assert_ne!(lower.file_name(), upper.file_name());
    }

    #[test]
    fn test_from_str_and_display() {
        let title: Title = "Home".parse().unwrap();

        assert_eq!(title.to_string(), "Home");
        assert!("Ho me".parse::<Title>().is_err());
    }

    #[test]
    fn test_invalid_title_display() {
        let err = Title::parse("a/b").unwrap_err();

        assert_eq!(err.to_string(), "invalid page title: \"a/b\"");
    }
}
