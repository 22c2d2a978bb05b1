//! Route validation extractor.
//!
//! [`ValidTitle`] runs the raw request path through [`Route::parse`] before a
//! handler body executes. A path that doesn't match the grammar, or names a
//! different action, is answered with 404 and the handler never runs.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use wiki_storage::Title;

use crate::error::ServerError;
use crate::route::{Action, Route};

/// Marker for the action a handler serves.
pub(crate) trait RouteAction {
    const ACTION: Action;
}

pub(crate) enum ViewAction {}
pub(crate) enum EditAction {}
pub(crate) enum SaveAction {}

impl RouteAction for ViewAction {
    const ACTION: Action = Action::View;
}

impl RouteAction for EditAction {
    const ACTION: Action = Action::Edit;
}

impl RouteAction for SaveAction {
    const ACTION: Action = Action::Save;
}

/// Title extracted from a request path matching `/<A>/<title>`.
pub(crate) struct ValidTitle<A> {
    pub(crate) title: Title,
    action: PhantomData<fn() -> A>,
}

impl<S, A> FromRequestParts<S> for ValidTitle<A>
where
    S: Send + Sync,
    A: RouteAction,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Match on the raw path so percent-encoded separators never decode into a title.
        match Route::parse(parts.uri.path()) {
            Some(route) if route.action == A::ACTION => Ok(Self {
                title: route.title,
                action: PhantomData,
            }),
            _ => {
                tracing::debug!(path = parts.uri.path(), "Rejected request path");
                Err(ServerError::NotFound)
            }
        }
    }
}
