// src/domain/catalog/repository.rs
use crate::domain::catalog::entity::Catalog;
use crate::domain::errors::DomainResult;

/// Whole-document access to the catalog. The batch step reads the document
/// once, transforms it fully in memory, and writes the replacement in a
/// single step; readers treat the catalog as immutable.
pub trait CatalogStore: Send + Sync {
    fn load(&self) -> DomainResult<Catalog>;
    fn save(&self, catalog: &Catalog) -> DomainResult<()>;
}
