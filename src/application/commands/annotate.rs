// src/application/commands/annotate.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::domain::catalog::CatalogStore;
use crate::domain::catalog::services::{self, SlugReport};

/// One-shot batch command: load the catalog, annotate every record with a
/// catalog-unique slug, write the document back in full, return the report.
pub struct SlugAnnotationService {
    store: Arc<dyn CatalogStore>,
}

impl SlugAnnotationService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// All transformation happens in memory; the write-back is a single step
    /// at the end, so a failure leaves no partial mutation observable.
    pub fn run(&self) -> ApplicationResult<SlugReport> {
        let mut catalog = self.store.load()?;
        let report = services::annotate_catalog(&mut catalog)?;
        self.store.save(&catalog)?;

        tracing::info!(
            total = report.total_records,
            unique = report.unique_slugs,
            suffixed = report.suffixed_records,
            "catalog slug annotation complete"
        );
        Ok(report)
    }
}
