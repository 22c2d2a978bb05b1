//! `wiki serve` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use wiki_config::{CliSettings, Config};
use wiki_server::{run_server, server_config_from_wiki_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover wiki.toml).
    #[arg(short, long, env = "WIKI_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding page files (overrides config).
    #[arg(short = 'd', long)]
    pages_dir: Option<PathBuf>,

    /// Directory holding view.html and edit.html (overrides config).
    #[arg(short, long)]
    templates_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and page logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            pages_dir: self.pages_dir,
            templates_dir: self.templates_dir,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        ensure_pages_dir(&config.pages_dir)?;

        output.highlight(&format!(
            "Starting wiki on http://{}:{}/view/FrontPage",
            config.server.host, config.server.port
        ));
        output.info(&format!("Pages directory: {}", config.pages_dir.display()));
        output.info(&format!(
            "Templates directory: {}",
            config.templates_dir.display()
        ));
        if let Some(path) = &config.config_path {
            output.info(&format!("Config file: {}", path.display()));
        }

        run_server(server_config_from_wiki_config(&config)).await?;

        Ok(())
    }
}

/// Ensure the page storage directory exists.
fn ensure_pages_dir(pages_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(pages_dir)?;
    Ok(())
}
