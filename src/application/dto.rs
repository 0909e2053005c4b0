// src/application/dto.rs
use crate::domain::catalog::ToolRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Exactly the field set the card renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub url: String,
    pub body: String,
    pub tag: String,
    pub date_added: NaiveDate,
}

impl From<&ToolRecord> for CardView {
    fn from(record: &ToolRecord) -> Self {
        Self {
            title: record.title.clone(),
            url: record.url.clone(),
            body: record.body.clone(),
            tag: record.tag.clone(),
            date_added: record.date_added,
        }
    }
}
