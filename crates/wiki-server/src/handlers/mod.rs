//! HTTP request handlers.

pub(crate) mod pages;

use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use wiki_storage::Page;

use crate::error::ServerError;
use crate::extract::{RouteAction, ValidTitle};
use crate::state::AppState;
use crate::templates::TemplateName;

/// `302 Found` redirect to `location`.
pub(crate) fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Method fallback for a page route.
///
/// The path is validated first, so an invalid title is still a 404 whatever
/// the method. Only a well-formed path with the wrong method gets 405.
pub(crate) async fn wrong_method<A: RouteAction>(_title: ValidTitle<A>) -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// Render `name` with `page` into an HTML response.
pub(crate) fn render(
    state: &AppState,
    name: TemplateName,
    page: &Page,
) -> Result<Response, ServerError> {
    let html = state.templates.render(name, page)?;
    Ok(Html(html).into_response())
}
