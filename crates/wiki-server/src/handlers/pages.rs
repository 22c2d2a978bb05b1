//! Page endpoints.
//!
//! - `GET /view/{title}` renders a stored page, or redirects to the editor
//!   when the page doesn't exist yet.
//! - `GET /edit/{title}` renders the edit form, blank for new pages.
//! - `POST /save/{title}` stores the submitted `body` field and redirects
//!   back to the view.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::response::Response;
use wiki_storage::Page;

use crate::error::ServerError;
use crate::extract::{EditAction, SaveAction, ValidTitle, ViewAction};
use crate::form;
use crate::handlers::{found, render};
use crate::route::Action;
use crate::state::AppState;
use crate::templates::TemplateName;

/// Form field holding the page content.
const BODY_FIELD: &str = "body";

/// Handle GET /view/{title}.
pub(crate) async fn view_page(
    State(state): State<Arc<AppState>>,
    ValidTitle { title, .. }: ValidTitle<ViewAction>,
) -> Result<Response, ServerError> {
    match state.storage.load(&title) {
        Ok(page) => render(&state, TemplateName::View, &page),
        Err(err) => {
            tracing::debug!(title = %title, error = %err, "Page not loaded, redirecting to editor");
            Ok(found(Action::Edit.path_for(&title)))
        }
    }
}

/// Handle GET /edit/{title}.
pub(crate) async fn edit_page(
    State(state): State<Arc<AppState>>,
    ValidTitle { title, .. }: ValidTitle<EditAction>,
) -> Result<Response, ServerError> {
    let page = state.storage.load(&title).unwrap_or_else(|err| {
        if !err.is_not_found() {
            tracing::warn!(title = %title, error = %err, "Failed to load page, editing blank");
        }
        Page::empty(title.clone())
    });
    render(&state, TemplateName::Edit, &page)
}

/// Handle POST /save/{title}.
pub(crate) async fn save_page(
    State(state): State<Arc<AppState>>,
    ValidTitle { title, .. }: ValidTitle<SaveAction>,
    body: Bytes,
) -> Result<Response, ServerError> {
    // A missing field saves an empty page.
    let content = form::field_value(&body, BODY_FIELD).unwrap_or_default();
    let page = Page::new(title, content);
    state.storage.save(&page)?;
    tracing::info!(title = %page.title, bytes = page.body.len(), "Saved page");
    Ok(found(Action::View.path_for(&page.title)))
}
