//! SALEAF Admin CLI
//!
//! Run with: cargo run -- <command>
//!
//! # Configuration
//!
//! Environment variables:
//! - `SALEAF_API_URL`: API base URL
//! - `SALEAF_TOKEN`: Bearer token (takes precedence over the stored token)
//! - `SALEAF_REQUEST_TIMEOUT`: Request timeout in seconds (default: 30)
//! - `SALEAF_LOG_LEVEL`, `SALEAF_LOG_FORMAT`: Logging (default: info, pretty)
//! - `RUST_LOG`: Log filter, overrides the level above

use anyhow::Context as _;
use clap::Parser;

use saleaf_admin::api::ApiClient;
use saleaf_admin::auth::{FileTokenStore, Session};
use saleaf_admin::cli::{self, Cli, Context};
use saleaf_admin::config::Config;
use saleaf_admin::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    if let Err(e) = logging::init(&config.logging) {
        eprintln!("{}", e);
    }

    tracing::debug!("SALEAF Admin v{}", env!("CARGO_PKG_VERSION"));

    let store = FileTokenStore::new(config.token_file());
    let session = match config.auth.token.as_deref() {
        Some(token) => Session::with_token(token),
        None => Session::init(&store).context("Failed to restore session")?,
    };

    let api = ApiClient::new(&config.api, session.clone())?;

    let outcome = cli::run(
        cli.command,
        Context {
            api: &api,
            session: &session,
            store: &store,
            listing: &config.listing,
            format: cli.format,
        },
    )
    .await
    .with_context(|| format!("Request to {} failed", config.api.base_url))?;

    if outcome.success {
        print!("{}", outcome.text);
        if !outcome.text.ends_with('\n') {
            println!();
        }
        Ok(())
    } else {
        eprintln!("{}", outcome.text);
        std::process::exit(1);
    }
}
