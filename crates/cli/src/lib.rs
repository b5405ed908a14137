//! Pattern Picker CLI Library
//!
//! This crate provides the command-line interface for pattern-picker. It
//! resolves the configuration, runs the interactive browser on top of the
//! core session, and hands the confirmed command to the shell.
//!
//! # Architecture
//!
//! - [`cli_args`]: Flags, environment fallbacks and dotenv loading
//! - [`browser`]: Terminal input mapping, viewport handling and rendering
//!
//! # Examples
//!
//! The CLI binary (`pp`) can be used in several ways:
//!
//! ```bash
//! # Metadata path from the environment or a .env file
//! MERGED_PATTERNS_METADATA_PATH=~/patterns/metadata.json pp
//!
//! # Sorted by directory name, writing results into ~/results
//! pp -m metadata.json --sort-by-dir-name --output-results -o ~/results
//!
//! # Dry run (don't execute, just show what would run)
//! pp -m metadata.json --dry-run
//! ```

pub mod browser;
pub mod cli_args;
