//! Command-line argument parsing and validation.
//!
//! Every setting is available as a flag and falls back to an environment
//! variable, so the tool can be configured entirely from a `.env` file. The
//! dotenv file is loaded by [`load_env_file`] before the final parse.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use log::{debug, warn};
use pattern_picker_core::config::{
    expand_path, CommandSettings, DisplaySettings, SessionConfig, DEFAULT_CLIPBOARD_COMMAND,
    DEFAULT_OUTPUT_DIR, DEFAULT_PLACEHOLDER, DEFAULT_PROCESSOR_COMMAND, DEFAULT_TITLE,
};
use pattern_picker_core::error::{Error, Result};
use pattern_picker_core::sorting::SortMode;

const METADATA_PATH_VARIABLE: &str = "MERGED_PATTERNS_METADATA_PATH";

/// Command-line arguments for the pattern-picker CLI tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use pattern_picker_cli::cli_args::Args;
///
/// let args = Args::parse_from(["pp", "--metadata-path", "patterns.json", "--alpha-sort"]);
/// assert!(args.alpha_sort);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the merged pattern metadata JSON file.
    ///
    /// Mandatory; may be given through the environment instead.
    #[arg(long, short = 'm', env = METADATA_PATH_VARIABLE)]
    pub metadata_path: Option<String>,

    /// Width of the list in columns. 0 follows the terminal.
    #[arg(long, env = "CLI_WIDTH", default_value_t = 0)]
    pub width: u16,

    /// Height of the list in rows. 0 follows the terminal.
    #[arg(long, env = "CLI_HEIGHT", default_value_t = 0)]
    pub height: u16,

    /// Title shown in the header bar.
    #[arg(long, env = "CLI_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Placeholder of the search input.
    #[arg(long, env = "CLI_PLACEHOLDER", default_value = DEFAULT_PLACEHOLDER)]
    pub placeholder: String,

    /// Sort patterns by friendly name.
    #[arg(
        long,
        env = "ALPHA_SORT",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub alpha_sort: bool,

    /// Sort patterns by directory name. Takes precedence over `--alpha-sort`.
    #[arg(
        long,
        env = "SORT_BY_DIR_NAME",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub sort_by_dir_name: bool,

    /// Directory that receives generated output files.
    #[arg(long, short = 'o', env = "OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Stream the processor output while it is written to a file.
    #[arg(
        long,
        env = "STREAM_RESULTS",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub stream_results: bool,

    /// Write the processor output to a file in the output directory.
    #[arg(
        long,
        env = "OUTPUT_RESULTS",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub output_results: bool,

    /// Command that prints the clipboard contents.
    #[arg(long, env = "CLIPBOARD_COMMAND", default_value = DEFAULT_CLIPBOARD_COMMAND)]
    pub clipboard_command: String,

    /// Executable that applies a pattern to its input.
    #[arg(long, env = "PATTERN_PROCESSOR", default_value = DEFAULT_PROCESSOR_COMMAND)]
    pub processor_command: String,

    /// Perform a dry run, which just prints out the command but does not execute it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Dotenv file to load settings from. Defaults to `.env` in the working
    /// directory or one of its parents.
    #[arg(long)]
    pub env_file: Option<String>,
}

impl Args {
    /// The `~`-expanded metadata path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSetting`] when neither the flag nor the
    /// environment variable is set.
    pub fn metadata_path(&self) -> Result<String> {
        match self.metadata_path.as_deref() {
            Some(path) if !path.is_empty() => Ok(expand_path(path)),
            _ => Err(Error::missing_setting("--metadata-path", METADATA_PATH_VARIABLE)),
        }
    }

    #[must_use]
    pub fn sort_mode(&self) -> SortMode {
        SortMode::from_flags(self.alpha_sort, self.sort_by_dir_name)
    }

    /// Resolves the settings handed to the session.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            display: DisplaySettings {
                width: self.width,
                height: self.height,
                title: self.title.clone(),
                placeholder: self.placeholder.clone(),
            },
            sort_mode: self.sort_mode(),
            command: CommandSettings {
                output_dir: expand_path(&self.output_dir),
                stream_results: self.stream_results,
                output_results: self.output_results,
                clipboard_command: self.clipboard_command.clone(),
                processor_command: self.processor_command.clone(),
            },
        }
    }
}

/// Loads a dotenv file into the process environment.
///
/// Variables that are already set are left alone. A missing file is not an
/// error; any other problem is logged and otherwise ignored.
pub fn load_env_file(env_file: Option<&str>) {
    let result = match env_file {
        Some(path) => {
            let path = PathBuf::from(expand_path(path));
            dotenvy::from_path(&path).map(|()| path)
        }
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(path) => debug!("Loaded environment from `{}`", path.display()),
        Err(e) if e.not_found() => debug!("No dotenv file found"),
        Err(e) => warn!("Could not load dotenv file: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["pp", "-m", "/data/patterns.json", "-o", "/tmp/out", "-d"]);

        assert_eq!(args.metadata_path, Some("/data/patterns.json".to_string()));
        assert_eq!(args.output_dir, "/tmp/out");
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from([
            "pp",
            "--metadata-path",
            "/data/patterns.json",
            "--width",
            "100",
            "--height",
            "30",
            "--title",
            "Fabric",
            "--placeholder",
            "find...",
            "--alpha-sort",
            "--sort-by-dir-name",
            "--stream-results",
            "--output-results",
            "--clipboard-command",
            "xclip -o",
            "--processor-command",
            "/opt/fabric",
            "--dry-run",
            "--env-file",
            "custom.env",
        ]);

        assert_eq!(args.width, 100);
        assert_eq!(args.height, 30);
        assert_eq!(args.title, "Fabric");
        assert_eq!(args.placeholder, "find...");
        assert!(args.alpha_sort);
        assert!(args.sort_by_dir_name);
        assert!(args.stream_results);
        assert!(args.output_results);
        assert_eq!(args.clipboard_command, "xclip -o");
        assert_eq!(args.processor_command, "/opt/fabric");
        assert!(args.dry_run);
        assert_eq!(args.env_file, Some("custom.env".to_string()));
    }

    #[test]
    fn test_session_config_from_args() {
        let args = Args::parse_from([
            "pp",
            "--metadata-path",
            "/data/patterns.json",
            "--title",
            "Fabric",
            "--alpha-sort",
            "--output-dir",
            "/tmp/out",
            "--output-results",
        ]);
        let config = args.session_config();

        assert_eq!(config.display.title, "Fabric");
        assert_eq!(config.sort_mode, SortMode::ByFriendlyName);
        assert_eq!(config.command.output_dir, "/tmp/out");
        assert!(config.command.output_results);
        assert!(!config.command.stream_results);
    }

    #[test]
    fn test_sort_by_dir_name_wins() {
        let args = Args::parse_from(["pp", "--alpha-sort", "--sort-by-dir-name"]);
        assert_eq!(args.sort_mode(), SortMode::ByDirectoryName);
    }

    #[test]
    fn test_metadata_path_is_expanded() {
        let args = Args::parse_from(["pp", "--metadata-path", "~/patterns.json"]);
        let path = args.metadata_path().unwrap();
        assert!(!path.starts_with('~'));
        assert!(path.ends_with("patterns.json"));
    }

    #[test]
    fn test_empty_metadata_path_is_missing() {
        let args = Args::parse_from(["pp", "--metadata-path", ""]);
        assert!(matches!(
            args.metadata_path(),
            Err(Error::MissingSetting { .. })
        ));
    }

    #[test]
    fn test_explicit_env_file_missing_is_not_fatal() {
        load_env_file(Some("/definitely/not/here/.env"));
    }
}
