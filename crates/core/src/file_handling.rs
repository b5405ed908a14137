//! Loading of the pattern metadata file.
//!
//! The metadata file is read once per session and the resulting records are
//! never modified afterwards. Apart from the structural JSON parse no
//! validation is performed: duplicate or empty directory names are reported
//! through the log but the records are still returned.

use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::pattern_definitions::{PatternCatalog, PatternRecord};

const METADATA_FILE_DESCRIPTION: &str = "pattern metadata";

fn read_bytes(file_description: &str, path: &str) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn report_directory_name_defects(patterns: &[PatternRecord], source: &str) {
    let mut seen = HashSet::new();

    for pattern in patterns {
        if pattern.directory_name.is_empty() {
            warn!(
                "Pattern `{}` in `{}` has an empty directory name",
                pattern.friendly_name, source
            );
        } else if !seen.insert(pattern.directory_name.as_str()) {
            warn!(
                "Duplicate directory name `{}` in `{}`; filtering by directory may be ambiguous",
                pattern.directory_name, source
            );
        }
    }
}

/// Parses a pattern catalog from any reader.
///
/// `source` only names the origin of the data in errors and log output.
///
/// # Errors
///
/// Returns [`Error::Io`] if the reader fails and [`Error::Json`] if the
/// content is not a well-formed catalog.
pub fn read_pattern_definitions<R: Read>(reader: R, source: &str) -> Result<Vec<PatternRecord>> {
    let catalog: PatternCatalog = serde_json::from_reader(reader).map_err(|e| {
        let file_description = METADATA_FILE_DESCRIPTION.to_string();
        if e.is_io() {
            Error::io_error(file_description, source.to_string(), io::Error::from(e))
        } else {
            Error::json_error(file_description, source.to_string(), e)
        }
    })?;

    if catalog.patterns.is_empty() {
        warn!("No patterns were found in `{source}`");
    }

    report_directory_name_defects(&catalog.patterns, source);
    debug!("Loaded {} patterns from `{}`", catalog.patterns.len(), source);

    Ok(catalog.patterns)
}

/// Loads the pattern records from the metadata file at `metadata_path`.
///
/// Record order is the order of the file.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read, including when the path is a directory ([`Error::Io`])
/// - The content is not a `{"patterns": [...]}` document ([`Error::Json`])
///
/// # Examples
///
/// ```no_run
/// use pattern_picker_core::file_handling::get_pattern_definitions;
///
/// let patterns = get_pattern_definitions("patterns_metadata.json")?;
/// println!("Loaded {} patterns", patterns.len());
/// # Ok::<(), pattern_picker_core::error::Error>(())
/// ```
pub fn get_pattern_definitions(metadata_path: &str) -> Result<Vec<PatternRecord>> {
    let bytes = read_bytes(METADATA_FILE_DESCRIPTION, metadata_path)?;

    read_pattern_definitions(bytes.as_slice(), metadata_path)
}
