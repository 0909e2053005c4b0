// src/domain/catalog/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Catalog-unique identifier assigned to a record by the batch annotation
/// step. Empty only when the source title normalizes to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(DomainError::Validation(format!(
                "malformed slug: {value:?}"
            )));
        }
        Ok(Self(value))
    }

    /// Empty, or word-character segments joined by single hyphens. Word
    /// characters are ASCII lowercase letters, digits, and underscore.
    pub fn is_valid(value: &str) -> bool {
        if value.is_empty() {
            return true;
        }
        value.split('-').all(|segment| {
            !segment.is_empty() && segment.chars().all(is_word_char)
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_'
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Filter token for the list view: the `"all"` sentinel or an exact
/// category name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub const ALL_TOKEN: &'static str = "all";

    pub fn parse(token: &str) -> Self {
        if token == Self::ALL_TOKEN {
            Self::All
        } else {
            Self::Category(token.to_string())
        }
    }

    pub fn matches(&self, category_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => name == category_name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_TOKEN),
            Self::Category(name) => f.write_str(name),
        }
    }
}
