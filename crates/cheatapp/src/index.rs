//! # Display Indexes
//!
//! Bookmark identities are long (`python / basics / Reading files`), which is tedious to
//! type. Listings therefore number bookmarks `1, 2, 3…` and commands accept those numbers
//! wherever a bookmark is expected.
//!
//! The index of a bookmark is its 1-based position in
//! [`BookmarkStore::list`](crate::store::bookmark_store::BookmarkStore::list), i.e. insertion
//! order. Grouped listings keep these numbers, so `4` means the same bookmark whether the
//! output is grouped by catalog or not. Indexes shift when earlier bookmarks are removed.

use crate::model::{Bookmark, BookmarkKey};
use serde::Serialize;
use std::collections::HashSet;
use std::str::FromStr;

/// A user input selecting bookmarks, either by display index or by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkSelector {
    Index(usize),
    Key(BookmarkKey),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayBookmark {
    pub index: usize,
    pub bookmark: Bookmark,
}

pub fn index_bookmarks(bookmarks: &[Bookmark]) -> Vec<DisplayBookmark> {
    bookmarks
        .iter()
        .enumerate()
        .map(|(i, bm)| DisplayBookmark {
            index: i + 1,
            bookmark: bm.clone(),
        })
        .collect()
}

/// A parsed index argument: a single number or an inclusive range like `2-4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    pub fn expand(&self) -> impl Iterator<Item = usize> {
        self.start..=self.end
    }
}

impl FromStr for IndexRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_one = |part: &str| -> Result<usize, String> {
            match part.trim().parse::<usize>() {
                Ok(0) | Err(_) => Err(format!("Invalid index format: {}", s)),
                Ok(n) => Ok(n),
            }
        };

        match s.split_once('-') {
            Some((a, b)) => {
                let start = parse_one(a)?;
                let end = parse_one(b)?;
                if start > end {
                    return Err(format!("Invalid range {}: start is after end", s));
                }
                Ok(IndexRange { start, end })
            }
            None => {
                let n = parse_one(s)?;
                Ok(IndexRange { start: n, end: n })
            }
        }
    }
}

/// Parses user arguments into selectors for a list of `len` bookmarks.
///
/// If every argument is an index or range, the result is the expanded list of indexes
/// (duplicates removed, first occurrence wins). An index past `len` is an error, and ranges
/// are checked before they are expanded. Otherwise the arguments must describe a single
/// identity: `<catalog> <section> <title words...>`, with the title words joined by spaces.
pub fn parse_selectors<I: AsRef<str>>(
    inputs: &[I],
    len: usize,
) -> Result<Vec<BookmarkSelector>, String> {
    if inputs.is_empty() {
        return Err("No bookmarks given".to_string());
    }

    let ranges: Result<Vec<IndexRange>, String> = inputs
        .iter()
        .map(|s| IndexRange::from_str(s.as_ref()))
        .collect();

    if let Ok(ranges) = ranges {
        if let Some(r) = ranges.iter().find(|r| r.end > len) {
            return Err(format!("Bookmark {} not found", r.end));
        }
        let mut seen = HashSet::new();
        let mut indexes: Vec<usize> = Vec::new();
        for n in ranges.iter().flat_map(|r| r.expand()) {
            if seen.insert(n) {
                indexes.push(n);
            }
        }
        return Ok(indexes.into_iter().map(BookmarkSelector::Index).collect());
    }

    if inputs.len() < 3 {
        return Err(format!(
            "Expected bookmark indexes or <catalog> <section> <title>, got: {}",
            inputs
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(" ")
        ));
    }

    let title = inputs[2..]
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(vec![BookmarkSelector::Key(BookmarkKey::new(
        inputs[0].as_ref(),
        inputs[1].as_ref(),
        title,
    ))])
}
