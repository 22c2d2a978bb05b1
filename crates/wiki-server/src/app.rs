//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error;
use crate::extract::{EditAction, SaveAction, ViewAction};
use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/view/{title}",
            get(handlers::pages::view_page).fallback(handlers::wrong_method::<ViewAction>),
        )
        .route(
            "/edit/{title}",
            get(handlers::pages::edit_page).fallback(handlers::wrong_method::<EditAction>),
        )
        .route(
            "/save/{title}",
            post(handlers::pages::save_page).fallback(handlers::wrong_method::<SaveAction>),
        )
        .fallback(error::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}
