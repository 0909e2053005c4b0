// src/infrastructure/store.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::catalog::{Catalog, CatalogStore};
use crate::domain::errors::{DomainError, DomainResult};

/// Catalog persistence as a single pretty-printed JSON document on disk.
/// `save` rewrites the whole document; the caller transforms fully in
/// memory first.
pub struct JsonCatalogStore {
    path: PathBuf,
}

impl JsonCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for JsonCatalogStore {
    fn load(&self) -> DomainResult<Catalog> {
        let raw = fs::read_to_string(&self.path).map_err(|err| {
            DomainError::Persistence(format!("read {}: {err}", self.path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|err| {
            DomainError::Persistence(format!("parse {}: {err}", self.path.display()))
        })
    }

    fn save(&self, catalog: &Catalog) -> DomainResult<()> {
        let rendered = serde_json::to_string_pretty(catalog)
            .map_err(|err| DomainError::Persistence(format!("serialize catalog: {err}")))?;
        fs::write(&self.path, rendered).map_err(|err| {
            DomainError::Persistence(format!("write {}: {err}", self.path.display()))
        })
    }
}
