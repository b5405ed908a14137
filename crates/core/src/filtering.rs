//! Narrowing the pattern list by free text or by a single facet value.
//!
//! Global search is a case-insensitive substring match across the text fields
//! and any category or tag. Facet filters work in two steps: [`facet_values`]
//! lists the distinct values of a facet, and [`filter`] then keeps the records
//! whose facet contains the chosen value exactly (ignoring case).

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::pattern_definitions::PatternRecord;

/// What a filter query is matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterMode {
    GlobalSearch,
    ByTag,
    ByCategory,
    ByDirectory,
}

impl FilterMode {
    /// Every mode, in the order offered by the filter menu.
    pub const ALL: [FilterMode; 4] = [
        FilterMode::GlobalSearch,
        FilterMode::ByTag,
        FilterMode::ByCategory,
        FilterMode::ByDirectory,
    ];

    /// Facet modes pick a value from a list instead of taking free text.
    #[must_use]
    pub fn is_facet(self) -> bool {
        !matches!(self, FilterMode::GlobalSearch)
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            FilterMode::GlobalSearch => "Search across all fields",
            FilterMode::ByTag => "Filter by tags",
            FilterMode::ByCategory => "Filter by categories",
            FilterMode::ByDirectory => "Filter by directory names",
        }
    }
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::GlobalSearch => f.write_str("Global Search"),
            FilterMode::ByTag => f.write_str("Tags"),
            FilterMode::ByCategory => f.write_str("Categories"),
            FilterMode::ByDirectory => f.write_str("Directories"),
        }
    }
}

fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn contains_ignore_case(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

/// Global search predicate. An empty query matches every record.
#[must_use]
pub fn matches_query(pattern: &PatternRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    contains_ignore_case(&pattern.friendly_name, &needle)
        || contains_ignore_case(&pattern.directory_name, &needle)
        || contains_ignore_case(&pattern.short_description, &needle)
        || pattern
            .categories
            .iter()
            .chain(pattern.tags.iter())
            .any(|value| contains_ignore_case(value, &needle))
}

/// Facet predicate: exact, case-insensitive membership.
///
/// For [`FilterMode::GlobalSearch`] this falls back to [`matches_query`].
#[must_use]
pub fn matches_facet(pattern: &PatternRecord, mode: FilterMode, value: &str) -> bool {
    match mode {
        FilterMode::GlobalSearch => matches_query(pattern, value),
        FilterMode::ByTag => pattern.tags.iter().any(|tag| equals_ignore_case(tag, value)),
        FilterMode::ByCategory => pattern
            .categories
            .iter()
            .any(|category| equals_ignore_case(category, value)),
        FilterMode::ByDirectory => equals_ignore_case(&pattern.directory_name, value),
    }
}

/// Distinct facet values across `patterns`, sorted lexicographically.
///
/// Global search has no facet values.
pub fn facet_values<'a, I>(patterns: I, mode: FilterMode) -> Vec<String>
where
    I: IntoIterator<Item = &'a PatternRecord>,
{
    let patterns = patterns.into_iter();

    let values: Vec<&str> = match mode {
        FilterMode::GlobalSearch => Vec::new(),
        FilterMode::ByTag => patterns
            .flat_map(|p| p.tags.iter().map(String::as_str))
            .collect(),
        FilterMode::ByCategory => patterns
            .flat_map(|p| p.categories.iter().map(String::as_str))
            .collect(),
        FilterMode::ByDirectory => patterns.map(|p| p.directory_name.as_str()).collect(),
    };

    values
        .into_iter()
        .sorted()
        .dedup()
        .map(ToString::to_string)
        .collect()
}

/// Keeps the records matching `query` under `mode`, preserving input order.
pub fn filter<'a, I>(patterns: I, mode: FilterMode, query: &str) -> Vec<&'a PatternRecord>
where
    I: IntoIterator<Item = &'a PatternRecord>,
{
    patterns
        .into_iter()
        .filter(|pattern| matches_facet(pattern, mode, query))
        .collect()
}

/// Same as [`filter`] but yields positions into `patterns`.
#[must_use]
pub fn filter_indices(patterns: &[PatternRecord], mode: FilterMode, query: &str) -> Vec<usize> {
    patterns
        .iter()
        .enumerate()
        .filter(|(_, pattern)| matches_facet(pattern, mode, query))
        .map(|(i, _)| i)
        .collect()
}
