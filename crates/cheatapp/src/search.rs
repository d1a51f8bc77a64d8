//! # Search/Filter Engine
//!
//! Narrows a catalog to the sections that mention a free-text query.
//!
//! ## Matching Rules
//!
//! A section is kept when the query is a case-insensitive substring of any of:
//!
//! 1. the section title
//! 2. the section description
//! 3. the title, description or code of any of its examples
//!
//! Matching is plain substring containment. The only normalization is case-folding:
//! no word boundaries, no accent folding, no whitespace collapsing. Characters like
//! `(`, `*` or `\` are literal.
//!
//! Case-folding is `str::to_lowercase` on both sides. That is symmetric for ASCII but not
//! for every Unicode mapping: `"SS"` does not match `"ß"`, and `"İ"` lowercases to two
//! chars.
//!
//! A query that is empty after trimming is the identity filter. Otherwise the query is
//! matched as given, surrounding whitespace included.
//!
//! ## Granularity
//!
//! Filtering is all-or-nothing per section: a kept section carries its full example list,
//! including siblings that did not match. [`matching_examples`] exists so a UI can
//! highlight the examples that caused the match, but it never prunes anything.
//!
//! Results keep catalog order. There is no ranking.

use crate::model::{Catalog, Example, Section};

/// A prepared query. `needle` is `None` for the identity filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    needle: Option<String>,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        let needle = if raw.trim().is_empty() {
            None
        } else {
            Some(raw.to_lowercase())
        };
        Self { needle }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    fn hit(&self, haystack: &str) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => haystack.to_lowercase().contains(needle.as_str()),
        }
    }

    pub fn matches_example(&self, example: &Example) -> bool {
        self.hit(&example.title) || self.hit(&example.description) || self.hit(&example.code)
    }

    pub fn matches_section(&self, section: &Section) -> bool {
        self.is_empty()
            || self.hit(&section.title)
            || self.hit(&section.description)
            || section.examples.iter().any(|e| self.matches_example(e))
    }
}

/// Sections of `catalog` matching `query`, in catalog order.
pub fn filter<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Section> {
    let query = Query::new(query);
    catalog
        .sections
        .iter()
        .filter(|s| query.matches_section(s))
        .collect()
}

/// Examples of `section` that match on their own. Empty for the identity filter.
pub fn matching_examples<'a>(section: &'a Section, query: &str) -> Vec<&'a Example> {
    let query = Query::new(query);
    if query.is_empty() {
        return Vec::new();
    }
    section
        .examples
        .iter()
        .filter(|e| query.matches_example(e))
        .collect()
}
