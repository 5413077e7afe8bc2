//! TOML settings for the Crossroads server and CLI.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8000"
//!
//! [catalog]
//! path = "./catalog.yaml"
//!
//! [assets]
//! dir = "./static"
//! ```
//!
//! Relative paths are resolved against the directory holding the settings
//! file, so the server can be started from anywhere.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

/// Location of the user-editable catalog document.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

/// Directory holding `index.html` and the rest of the dashboard bundle.
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("static")
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let mut config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate server
    let bind = &config.server.bind;
    bind.parse::<SocketAddr>()
        .with_context(|| format!("server.bind is not a socket address: '{}'", bind))?;

    // Validate catalog
    if config.catalog.path.as_os_str().is_empty() {
        anyhow::bail!("catalog.path must not be empty");
    }

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    config.catalog.path = resolve_relative(base, &config.catalog.path);
    config.assets.dir = resolve_relative(base, &config.assets.dir);

    Ok(config)
}

fn resolve_relative(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
