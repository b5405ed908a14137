//! Session configuration.
//!
//! The configuration is built once by the host (from flags, environment and a
//! dotenv file) and handed to the session by value. Nothing mutates it after
//! the session starts.

use crate::sorting::SortMode;

/// Default title shown in the header bar
pub const DEFAULT_TITLE: &str = "Patterns";
/// Default placeholder of the search input
pub const DEFAULT_PLACEHOLDER: &str = "Type to search...";
/// Default directory for generated output files
pub const DEFAULT_OUTPUT_DIR: &str = ".";
/// Default command that prints the clipboard
pub const DEFAULT_CLIPBOARD_COMMAND: &str = "pbpaste";
/// Default executable that applies a pattern
pub const DEFAULT_PROCESSOR_COMMAND: &str = "fabric";

/// Default shell to use for command execution
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Layout and text settings for the interactive list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Requested width in columns; 0 follows the terminal.
    pub width: u16,
    /// Requested height in rows; 0 follows the terminal.
    pub height: u16,
    pub title: String,
    pub placeholder: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            title: DEFAULT_TITLE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Settings that shape the generated command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandSettings {
    pub output_dir: String,
    pub stream_results: bool,
    pub output_results: bool,
    pub clipboard_command: String,
    pub processor_command: String,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            stream_results: false,
            output_results: false,
            clipboard_command: DEFAULT_CLIPBOARD_COMMAND.to_string(),
            processor_command: DEFAULT_PROCESSOR_COMMAND.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub display: DisplaySettings,
    pub sort_mode: SortMode,
    pub command: CommandSettings,
}

/// Expands shell variables like `~` in a path.
///
/// # Examples
///
/// ```
/// use pattern_picker_core::config::expand_path;
///
/// let expanded = expand_path("~/patterns/metadata.json");
/// assert!(!expanded.starts_with('~'));
///
/// assert_eq!(expand_path("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).to_string()
}
