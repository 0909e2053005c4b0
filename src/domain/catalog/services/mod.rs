// src/domain/catalog/services/mod.rs
use std::collections::HashMap;
use std::fmt;

use crate::domain::catalog::entity::Catalog;
use crate::domain::catalog::value_objects::Slug;
use crate::domain::errors::DomainResult;

/// Canonical kebab-case form of a title, before deduplication.
///
/// Lowercase, trim, `&` becomes `and`, every character that is not a word
/// character / whitespace / hyphen is dropped, whitespace runs collapse to a
/// single hyphen, hyphen runs collapse, and surrounding hyphens are
/// stripped. Total and pure: identical input, identical output.
pub fn base_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let replaced = lowered.trim().replace('&', "and");

    let mut kept = String::with_capacity(replaced.len());
    for ch in replaced.chars() {
        if ch == '-' || is_word_char(ch) {
            kept.push(ch);
        } else if ch.is_whitespace() {
            kept.push('-');
        }
    }

    let mut collapsed = String::with_capacity(kept.len());
    for ch in kept.chars() {
        if ch == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed.trim_matches('-').to_string()
}

// Matches the `\w` class the canonicalizer has always used: ASCII
// alphanumerics plus underscore.
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Batch-scoped map from assigned slug to the owning record's identity.
/// Built and discarded within one annotation pass; never shared across runs.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    by_slug: HashMap<String, RecordRef>,
}

/// Identity of the record that owns a slug, for diagnostics.
#[derive(Debug, Clone)]
pub struct RecordRef {
    pub title: String,
    pub category: String,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    pub fn insert(&mut self, slug: &str, title: &str, category: &str) {
        self.by_slug.insert(
            slug.to_string(),
            RecordRef {
                title: title.to_string(),
                category: category.to_string(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }
}

/// One slug as finally assigned to a record, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugAssignment {
    pub slug: String,
    pub title: String,
}

/// Assignments sharing a report bucket, keyed by the slug with any trailing
/// `-<integer>` stripped.
#[derive(Debug, Clone)]
pub struct SlugGroup {
    pub base: String,
    pub members: Vec<SlugAssignment>,
}

/// Summary of one annotation pass.
#[derive(Debug, Clone)]
pub struct SlugReport {
    pub total_records: usize,
    pub unique_slugs: usize,
    pub suffixed_records: usize,
    pub groups: Vec<SlugGroup>,
}

impl SlugReport {
    fn new(
        total_records: usize,
        unique_slugs: usize,
        suffixed_records: usize,
        assignments: Vec<SlugAssignment>,
    ) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<SlugGroup> = Vec::new();
        for assignment in assignments {
            let base = strip_numeric_suffix(&assignment.slug).to_string();
            let slot = *index.entry(base.clone()).or_insert_with(|| {
                groups.push(SlugGroup {
                    base,
                    members: Vec::new(),
                });
                groups.len() - 1
            });
            groups[slot].members.push(assignment);
        }
        Self {
            total_records,
            unique_slugs,
            suffixed_records,
            groups,
        }
    }

    /// Buckets that collected more than one slug. Note that a slug whose
    /// natural form ends in `-<digits>` lands in the same bucket as
    /// collision-suffixed variants of an unrelated base.
    pub fn duplicate_groups(&self) -> impl Iterator<Item = &SlugGroup> {
        self.groups.iter().filter(|group| group.members.len() > 1)
    }
}

impl fmt::Display for SlugReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Slug generation complete!")?;
        writeln!(f, "  Total tools processed: {}", self.total_records)?;
        writeln!(f, "  Unique slugs created: {}", self.unique_slugs)?;
        write!(
            f,
            "  Duplicate base slugs handled: {}",
            self.suffixed_records
        )?;
        let mut header_written = false;
        for group in self.duplicate_groups() {
            if !header_written {
                write!(f, "\n\n  Duplicate base slugs with variants:")?;
                header_written = true;
            }
            write!(f, "\n  - {}:", group.base)?;
            for member in &group.members {
                write!(f, "\n    * {} (\"{}\")", member.slug, member.title)?;
            }
        }
        Ok(())
    }
}

/// Strips one trailing `-<integer>` run for report bucketing.
pub fn strip_numeric_suffix(slug: &str) -> &str {
    match slug.rsplit_once('-') {
        Some((head, tail))
            if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) =>
        {
            head
        }
        _ => slug,
    }
}

/// Single deduplicating pass over the catalog in its natural order: category
/// order, then within-category order. Each record gets its base slug if
/// free, otherwise the first free `base-2`, `base-3`, … candidate. A literal
/// title that independently canonicalizes to a suffixed form can take a
/// suffix before a colliding base reaches it; that order dependence is part
/// of the contract.
///
/// Re-running on an unchanged catalog reproduces identical slugs.
pub fn annotate_catalog(catalog: &mut Catalog) -> DomainResult<SlugReport> {
    let mut registry = SlugRegistry::new();
    let mut assignments = Vec::with_capacity(catalog.record_count());
    let mut total_records = 0usize;
    let mut suffixed_records = 0usize;

    for category in &mut catalog.tools {
        let category_name = category.name.clone();
        for record in &mut category.content {
            total_records += 1;
            let base = base_slug(&record.title);

            let candidate = if registry.contains(&base) {
                let mut counter = 2u64;
                while registry.contains(&format!("{base}-{counter}")) {
                    counter += 1;
                }
                suffixed_records += 1;
                format!("{base}-{counter}")
            } else {
                base
            };

            let slug = Slug::new(candidate)?;
            registry.insert(slug.as_str(), &record.title, &category_name);
            assignments.push(SlugAssignment {
                slug: slug.as_str().to_string(),
                title: record.title.clone(),
            });
            record.slug = Some(slug.into());
        }
    }

    Ok(SlugReport::new(
        total_records,
        registry.len(),
        suffixed_records,
        assignments,
    ))
}
