//! Ordering of the pattern list.

use std::fmt::{Display, Formatter};

use crate::pattern_definitions::PatternRecord;

/// Key used to order the pattern list at session start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortMode {
    ByFriendlyName,
    ByDirectoryName,
    /// Keep the order of the metadata file.
    #[default]
    None,
}

impl SortMode {
    /// Resolves the sort mode from the two configuration flags.
    ///
    /// `sort_by_dir_name` wins when both are set.
    #[must_use]
    pub fn from_flags(alpha_sort: bool, sort_by_dir_name: bool) -> Self {
        match (alpha_sort, sort_by_dir_name) {
            (_, true) => SortMode::ByDirectoryName,
            (true, false) => SortMode::ByFriendlyName,
            (false, false) => SortMode::None,
        }
    }
}

impl Display for SortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::ByFriendlyName => f.write_str("friendly name"),
            SortMode::ByDirectoryName => f.write_str("directory name"),
            SortMode::None => f.write_str("file order"),
        }
    }
}

/// Sorts `patterns` in place. The sort is stable, so records with equal keys
/// keep their relative order.
pub fn sort_patterns(patterns: &mut [PatternRecord], mode: SortMode) {
    match mode {
        SortMode::ByFriendlyName => patterns.sort_by(|a, b| a.friendly_name.cmp(&b.friendly_name)),
        SortMode::ByDirectoryName => {
            patterns.sort_by(|a, b| a.directory_name.cmp(&b.directory_name));
        }
        SortMode::None => {}
    }
}
