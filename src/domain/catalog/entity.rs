// src/domain/catalog/entity.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The whole catalog document: an ordered list of categories under the
/// top-level `tools` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub tools: Vec<Category>,
}

impl Catalog {
    pub fn record_count(&self) -> usize {
        self.tools.iter().map(|category| category.content.len()).sum()
    }
}

/// One named group of tool records. Within-category order is significant:
/// it fixes the slug-assignment traversal order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "category")]
    pub name: String,
    pub content: Vec<ToolRecord>,
}

/// A single catalog entry. `slug` is absent until the batch annotation step
/// runs and is treated as immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolRecord {
    pub title: String,
    pub url: String,
    pub body: String,
    pub tag: String,
    #[serde(rename = "date-added")]
    pub date_added: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
