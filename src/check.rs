//! `crossroads check`: validate the catalog and report what the engine sees.

use anyhow::{Context, Result};
use crossroads_core::keyword::collisions;

use crate::config::Config;
use crate::store::{CatalogStore, FileCatalogStore};

pub async fn run_check(config: &Config) -> Result<()> {
    let store = FileCatalogStore::new(&config.catalog.path);
    let document = store
        .load()
        .await
        .with_context(|| format!("Invalid catalog: {}", config.catalog.path.display()))?;

    let sections = document
        .get("sections")
        .and_then(|s| s.as_array())
        .map_or(0, |s| s.len());
    let items = crossroads_core::flatten(&document);
    let keyworded = items.iter().filter(|i| !i.keywords.is_empty()).count();
    let templated = items.iter().filter(|i| i.search_url.is_some()).count();
    let unlinked = items.iter().filter(|i| i.url.is_empty()).count();

    println!("catalog: {}", config.catalog.path.display());
    println!("  sections: {}", sections);
    println!("  items: {}", items.len());
    println!("  with keywords: {}", keyworded);
    println!("  with search templates: {}", templated);
    println!("  without url: {}", unlinked);

    let shared = collisions(&items);
    if shared.is_empty() {
        println!("ok");
    } else {
        println!("shared keywords (never resolved directly):");
        for (keyword, titles) in &shared {
            println!("  {:<12} {}", keyword, titles.join(", "));
        }
    }

    Ok(())
}
