use anyhow::{Context, Result};

use crate::config::Config;
use crate::store::{CatalogStore, FileCatalogStore};

pub async fn list_items(config: &Config) -> Result<()> {
    let store = FileCatalogStore::new(&config.catalog.path);
    let document = store
        .load()
        .await
        .with_context(|| format!("Invalid catalog: {}", config.catalog.path.display()))?;
    let items = crossroads_core::flatten(&document);

    if items.is_empty() {
        println!("No items.");
        return Ok(());
    }

    println!("{:<16} {:<24} {:<16} URL", "SECTION", "TITLE", "KEYWORDS");
    for item in &items {
        let section = item.section.as_deref().unwrap_or("Untitled");
        let title = if item.title.is_empty() {
            "(untitled)"
        } else {
            item.title.as_str()
        };
        let url = if item.url.is_empty() { "-" } else { item.url.as_str() };
        println!(
            "{:<16} {:<24} {:<16} {}",
            section,
            title,
            item.keywords.join(","),
            url
        );
    }

    Ok(())
}
