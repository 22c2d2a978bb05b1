//! HTTP server for the wiki.
//!
//! This crate provides a native Rust HTTP server using axum, serving three
//! page actions:
//! - `GET /view/{title}` - render a page (redirects to the editor if absent)
//! - `GET /edit/{title}` - render the edit form
//! - `POST /save/{title}` - store the submitted `body` form field
//!
//! Any other path answers 404.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use wiki_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 8080,
//!         pages_dir: PathBuf::from("."),
//!         templates_dir: PathBuf::from("templates"),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (wiki-server)
//!                        │
//!                        ├─► ValidTitle extractor ──► Route::parse (404 on mismatch)
//!                        │
//!                        ├─► page handlers
//!                        │       │
//!                        │       ├─► Storage (wiki-storage, <title>.txt files)
//!                        │       └─► Templates (minijinja, view.html / edit.html)
//!                        │
//!                        └─► fallback 404
//! ```

mod app;
mod error;
mod extract;
mod form;
mod handlers;
mod middleware;
pub mod route;
mod state;
mod templates;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use wiki_storage::{FsStorage, Storage};

pub use error::ServerError;
pub use templates::{TemplateError, TemplateName, Templates};

use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory holding `<title>.txt` page files.
    pub pages_dir: PathBuf,
    /// Directory holding `view.html` and `edit.html`.
    pub templates_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            pages_dir: PathBuf::from("."),
            templates_dir: PathBuf::from("templates"),
        }
    }
}

/// Build the router from an explicit storage backend and compiled templates.
pub fn router(storage: Arc<dyn Storage>, templates: Templates) -> Router {
    app::create_router(Arc::new(AppState { storage, templates }))
}

/// Build the router for `config`, compiling templates and opening storage.
///
/// # Errors
///
/// Returns an error if the templates are missing or malformed.
pub fn build_app(config: &ServerConfig) -> Result<Router, ServerError> {
    let templates = Templates::load(&config.templates_dir)?;
    let storage: Arc<dyn Storage> = Arc::new(FsStorage::new(config.pages_dir.clone()));
    Ok(router(storage, templates))
}

/// Run the server.
///
/// Serves until the listener fails; there is no shutdown hook.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if templates can't be loaded or the address can't be bound.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let app = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create server configuration from wiki config.
#[must_use]
pub fn server_config_from_wiki_config(config: &wiki_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        pages_dir: config.pages_dir.clone(),
        templates_dir: config.templates_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_app_fails_without_templates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = ServerConfig {
            pages_dir: temp_dir.path().to_path_buf(),
            templates_dir: temp_dir.path().join("missing"),
            ..ServerConfig::default()
        };

        let result = build_app(&config);

        assert!(matches!(
            result,
            Err(ServerError::Template(TemplateError::Read { .. }))
        ));
    }

    #[test]
    fn test_build_app_with_templates() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("view.html"), "{{ body }}").unwrap();
        std::fs::write(temp_dir.path().join("edit.html"), "{{ body }}").unwrap();
        let config = ServerConfig {
            pages_dir: temp_dir.path().to_path_buf(),
            templates_dir: temp_dir.path().to_path_buf(),
            ..ServerConfig::default()
        };

        assert!(build_app(&config).is_ok());
    }

    #[tokio::test]
    async fn test_run_server_fails_when_port_is_taken() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("view.html"), "{{ body }}").unwrap();
        std::fs::write(temp_dir.path().join("edit.html"), "{{ body }}").unwrap();
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let config = ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: taken.local_addr().unwrap().port(),
            pages_dir: temp_dir.path().to_path_buf(),
            templates_dir: temp_dir.path().to_path_buf(),
        };

        let result = run_server(config).await;

        assert!(matches!(result, Err(ServerError::Io(_))));
    }

    #[test]
    fn test_server_config_from_wiki_config() {
        let config = wiki_config::Config::default();

        let server_config = server_config_from_wiki_config(&config);

        assert_eq!(server_config.host, config.server.host);
        assert_eq!(server_config.port, config.server.port);
        assert_eq!(server_config.pages_dir, config.pages_dir);
        assert_eq!(server_config.templates_dir, config.templates_dir);
    }
}
