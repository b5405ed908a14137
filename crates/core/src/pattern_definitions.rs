use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A single entry of the pattern catalog.
///
/// Only the first five fields drive browsing, filtering and command building.
/// The remaining ones exist in richer metadata files and are carried along for
/// display purposes.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternRecord {
    #[serde(rename = "dir_name", default)]
    pub directory_name: String,
    #[serde(default)]
    pub friendly_name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_patterns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_token_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_example: Option<String>,
}

impl PatternRecord {
    /// Minimal constructor for the fields the browser works with.
    pub fn new(
        directory_name: &str,
        friendly_name: &str,
        short_description: &str,
        categories: &[&str],
        tags: &[&str],
    ) -> Self {
        Self {
            directory_name: directory_name.to_string(),
            friendly_name: friendly_name.to_string(),
            short_description: short_description.to_string(),
            categories: categories.iter().map(ToString::to_string).collect(),
            tags: tags.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Title line shown in list views.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} (dir: \"{}\")", self.friendly_name, self.directory_name)
    }
}

impl Display for PatternRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (
            self.friendly_name.is_empty(),
            self.short_description.is_empty(),
        ) {
            (false, false) => write!(
                formatter,
                "{} ({})",
                self.friendly_name, self.short_description
            ),
            (false, true) => formatter.write_str(&self.friendly_name),
            // Nameless records fall back to the directory name
            (true, _) => formatter.write_str(&self.directory_name),
        }
    }
}

/// Top-level shape of the metadata file: `{"patterns": [...]}`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct PatternCatalog {
    pub patterns: Vec<PatternRecord>,
}
