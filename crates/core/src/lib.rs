//! Pattern Picker Core Library
//!
//! This crate provides the core functionality for pattern-picker, a terminal
//! browser for a catalog of text-processing patterns. The user narrows the
//! catalog, picks a pattern, confirms the generated shell command, and the host
//! runs it.
//!
//! # Key Features
//!
//! - **Pattern Definitions**: Load and validate the JSON pattern catalog
//! - **Sorting**: Order the catalog by friendly name or directory name
//! - **Filtering**: Free-text search and exact tag, category or directory facets
//! - **Session**: A terminal-independent state machine driven by input events
//! - **Command Building**: Render the clipboard-to-processor shell pipeline
//! - **Execution**: Run the confirmed command through a shell
//! - **Error Handling**: One error type for every failure mode
//!
//! # Examples
//!
//! Driving a session without a terminal:
//!
//! ```
//! use pattern_picker_core::config::SessionConfig;
//! use pattern_picker_core::pattern_definitions::PatternRecord;
//! use pattern_picker_core::session::{Effect, Event, Session};
//!
//! let patterns = vec![
//!     PatternRecord::new("summarize", "Summarize", "Condense text", &["writing"], &[]),
//!     PatternRecord::new("extract_wisdom", "Extract Wisdom", "Insights", &["analysis"], &[]),
//! ];
//! let mut session = Session::new(patterns, SessionConfig::default());
//!
//! session.handle(Event::Confirm);
//! let effect = session.handle(Event::Confirm);
//! assert_eq!(effect, Effect::Execute("pbpaste | fabric --pattern summarize".to_string()));
//! ```

pub mod command_builder;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod filtering;
pub mod pattern_definitions;
pub mod session;
pub mod sorting;
