// src/config.rs
use std::{
    env,
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    catalog_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/tools.json")
}

impl AppConfig {
    /// Build configuration from environment variables. The catalog location
    /// is optional and falls back to the fixed default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let catalog_path = match env::var("CATALOG_PATH") {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::Invalid(
                    "CATALOG_PATH must not be empty".into(),
                ));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => default_catalog_path(),
        };

        Ok(Self { catalog_path })
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }
}
