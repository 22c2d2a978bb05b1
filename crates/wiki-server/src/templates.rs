//! HTML template rendering.
//!
//! The `view` and `edit` templates are compiled once at startup into an
//! immutable [`Templates`] instance that is shared by all request handlers.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;
use wiki_storage::Page;

/// Template used for a page response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateName {
    /// Read-only page view.
    View,
    /// Edit form.
    Edit,
}

impl TemplateName {
    /// All templates that must exist at startup.
    pub const ALL: [Self; 2] = [Self::View, Self::Edit];

    /// Template file name, also its name inside the environment.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Self::View => "view.html",
            Self::Edit => "edit.html",
        }
    }
}

/// Template loading or rendering error.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Template file could not be read.
    #[error("Failed to read template {}: {source}", path.display())]
    Read {
        /// Template file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Template failed to compile or render.
    #[error("{0}")]
    Engine(#[from] minijinja::Error),
}

/// Values exposed to templates.
#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    body: Cow<'a, str>,
}

impl<'a> From<&'a Page> for PageContext<'a> {
    fn from(page: &'a Page) -> Self {
        Self {
            title: page.title.as_str(),
            body: page.body_text(),
        }
    }
}

/// Compiled page templates.
///
/// Output of `.html` templates is HTML-escaped. Referencing a variable the
/// page does not provide is a rendering error rather than an empty string.
#[derive(Debug)]
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Read and compile `view.html` and `edit.html` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if either file is missing or malformed.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let mut env = new_environment();
        for name in TemplateName::ALL {
            let path = dir.join(name.file_name());
            let source =
                fs::read_to_string(&path).map_err(|source| TemplateError::Read { path, source })?;
            env.add_template_owned(name.file_name(), source)?;
        }
        tracing::debug!(dir = %dir.display(), "Loaded templates");
        Ok(Self { env })
    }

    /// Compile templates from in-memory sources.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if either source is malformed.
    pub fn from_sources(view: &str, edit: &str) -> Result<Self, TemplateError> {
        let mut env = new_environment();
        env.add_template_owned(TemplateName::View.file_name(), view.to_owned())?;
        env.add_template_owned(TemplateName::Edit.file_name(), edit.to_owned())?;
        Ok(Self { env })
    }

    /// Render `name` with the page's title and body.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if rendering fails.
    pub fn render(&self, name: TemplateName, page: &Page) -> Result<String, TemplateError> {
        let template = self.env.get_template(name.file_name())?;
        Ok(template.render(PageContext::from(page))?)
    }
}

fn new_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wiki_storage::Title;

    use super::*;

    const VIEW: &str = "<h1>{{ title }}</h1><div>{{ body }}</div>";
    const EDIT: &str = "<form action=\"/save/{{ title }}\"><textarea name=\"body\">{{ body }}</textarea></form>";

    fn page(title: &str, body: &str) -> Page {
        Page::new(Title::parse(title).unwrap(), body)
    }

    #[test]
    fn test_render_view() {
        let templates = Templates::from_sources(VIEW, EDIT).unwrap();

        let html = templates
            .render(TemplateName::View, &page("Home", "Hello World"))
            .unwrap();

        assert_eq!(html, "<h1>Home</h1><div>Hello World</div>");
    }

    #[test]
    fn test_render_edit_empty_page() {
        let templates = Templates::from_sources(VIEW, EDIT).unwrap();

        let html = templates
            .render(
                TemplateName::Edit,
                &Page::empty(Title::parse("New").unwrap()),
            )
            .unwrap();

        assert_eq!(
            html,
            "<form action=\"/save/New\"><textarea name=\"body\"></textarea></form>"
        );
    }

    #[test]
    fn test_render_escapes_body() {
        let templates = Templates::from_sources(VIEW, EDIT).unwrap();

        let html = templates
            .render(TemplateName::View, &page("Home", "<script>alert(1)</script>"))
            .unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_unknown_variable_fails() {
        let templates = Templates::from_sources("{{ author }}", EDIT).unwrap();

        let result = templates.render(TemplateName::View, &page("Home", "x"));

        assert!(matches!(result, Err(TemplateError::Engine(_))));
    }

    #[test]
    fn test_from_sources_rejects_malformed() {
        let result = Templates::from_sources("{% if %}", EDIT);

        assert!(matches!(result, Err(TemplateError::Engine(_))));
    }

    #[test]
    fn test_load_from_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("view.html"), VIEW).unwrap();
        fs::write(temp_dir.path().join("edit.html"), EDIT).unwrap();

        let templates = Templates::load(temp_dir.path()).unwrap();

        let html = templates
            .render(TemplateName::View, &page("Home", "hi"))
            .unwrap();
        assert_eq!(html, "<h1>Home</h1><div>hi</div>");
    }

    #[test]
    fn test_load_missing_template() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("view.html"), VIEW).unwrap();

        let err = Templates::load(temp_dir.path()).unwrap_err();

        assert!(
            matches!(err, TemplateError::Read { ref path, .. } if path.ends_with("edit.html")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_load_malformed_template() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("view.html"), "{{ title ").unwrap();
        fs::write(temp_dir.path().join("edit.html"), EDIT).unwrap();

        let err = Templates::load(temp_dir.path()).unwrap_err();

        assert!(matches!(err, TemplateError::Engine(_)));
    }

    #[test]
    fn test_shipped_templates_compile() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates");

        let templates = Templates::load(&dir).unwrap();

        let html = templates
            .render(TemplateName::Edit, &page("TestPage", "Hello World"))
            .unwrap();
        assert!(html.contains("/save/TestPage"));
        assert!(html.contains("Hello World"));
    }
}
