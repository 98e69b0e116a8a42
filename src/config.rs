// src/config.rs
//! Environment-driven configuration, resolved once at startup

use crate::analysis::KeywordCatalog;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
    pub output_path: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let env = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string());
        info!("Loading configuration for environment: {}", env);

        let base_dir = if env == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        let port = match std::env::var("RESCORE_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .context("RESCORE_PORT must be a valid port number")?,
            Err(_) => 8000,
        };

        let catalog_path = std::env::var("RESCORE_KEYWORDS").ok().map(PathBuf::from);

        let output_path = std::env::var("RESCORE_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| base_dir.join("out"));

        Ok(Self {
            port,
            catalog_path,
            output_path,
        })
    }

    /// Built-in keyword catalog, or the TOML override when one is configured
    pub async fn load_catalog(&self) -> Result<KeywordCatalog> {
        match &self.catalog_path {
            Some(path) => KeywordCatalog::from_toml_file(path).await,
            None => {
                let catalog = KeywordCatalog::builtin();
                info!("Using built-in keyword catalog ({} entries)", catalog.len());
                Ok(catalog)
            }
        }
    }
}
