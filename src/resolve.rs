//! `crossroads resolve`: run a query through the engine from the shell.
//!
//! Useful for checking catalog edits without a browser, and as a shell
//! launcher: `xdg-open "$(crossroads resolve gh tokio)"`.

use anyhow::{Context, Result};
use crossroads_core::Resolution;
use tracing::debug;

use crate::config::Config;
use crate::store::{CatalogStore, FileCatalogStore};

/// Resolve `query` against the configured catalog.
pub async fn resolve_query(config: &Config, query: &str) -> Result<Resolution> {
    let store = FileCatalogStore::new(&config.catalog.path);
    let document = store
        .load()
        .await
        .with_context(|| format!("Failed to load catalog: {}", config.catalog.path.display()))?;
    let resolution = crossroads_core::resolve_document(&document, query);
    debug!(query, ?resolution, "resolved query");
    Ok(resolution)
}

pub async fn run_resolve(config: &Config, query: &str, json: bool) -> Result<()> {
    let resolution = resolve_query(config, query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    match resolution.url() {
        Some(url) => println!("{}", url),
        None => println!("No resolution."),
    }
    Ok(())
}
