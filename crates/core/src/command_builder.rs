//! Rendering of the shell command for a chosen pattern.
//!
//! The command always reads the clipboard and pipes it into the pattern
//! processor. Where the result goes depends on the output settings:
//!
//! | `output_results` | `stream_results` | result                               |
//! |------------------|------------------|--------------------------------------|
//! | true             | true             | streamed, and `tee`d into a file     |
//! | true             | false            | redirected into a file               |
//! | false            | any              | printed to the terminal              |
//!
//! Directory names are inserted verbatim; they come from the metadata file and
//! are trusted identifiers.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, FixedOffset, Local};
use leon::Template;
use log::debug;

use crate::config::CommandSettings;
use crate::error::Result;
use crate::pattern_definitions::PatternRecord;

const STREAM_TO_FILE_TEMPLATE: &str =
    "{clipboard} | {processor} --stream --pattern {pattern} | tee {output_path}";
const WRITE_TO_FILE_TEMPLATE: &str =
    "{clipboard} | {processor} --pattern {pattern} > {output_path}";
const TERMINAL_TEMPLATE: &str = "{clipboard} | {processor} --pattern {pattern}";

/// Second precision with a numeric UTC offset, e.g. `2024-05-01T09:30:00+02:00`
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Where the processor output ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputRouting {
    Terminal,
    File,
    StreamToFile,
}

impl OutputRouting {
    #[must_use]
    pub fn from_settings(settings: &CommandSettings) -> Self {
        match (settings.output_results, settings.stream_results) {
            (true, true) => OutputRouting::StreamToFile,
            (true, false) => OutputRouting::File,
            (false, _) => OutputRouting::Terminal,
        }
    }

    fn template(self) -> &'static str {
        match self {
            OutputRouting::Terminal => TERMINAL_TEMPLATE,
            OutputRouting::File => WRITE_TO_FILE_TEMPLATE,
            OutputRouting::StreamToFile => STREAM_TO_FILE_TEMPLATE,
        }
    }

    #[must_use]
    pub fn writes_file(self) -> bool {
        !matches!(self, OutputRouting::Terminal)
    }
}

/// Name of the file the result is written to:
/// `<directory_name>_<timestamp>_output.md`.
#[must_use]
pub fn output_file_name(directory_name: &str, timestamp: &DateTime<FixedOffset>) -> String {
    format!(
        "{}_{}_output.md",
        directory_name,
        timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Builds the command for `pattern` with the timestamp fixed to `timestamp`.
///
/// # Errors
///
/// Returns an error if the command template cannot be parsed or rendered.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use pattern_picker_core::command_builder::build_command;
/// use pattern_picker_core::config::CommandSettings;
/// use pattern_picker_core::pattern_definitions::PatternRecord;
///
/// let pattern = PatternRecord::new("summarize", "Summarize", "", &[], &[]);
/// let timestamp = DateTime::parse_from_rfc3339("2024-05-01T09:30:00+02:00").unwrap();
///
/// let command = build_command(&pattern, &CommandSettings::default(), &timestamp)?;
/// assert_eq!(command, "pbpaste | fabric --pattern summarize");
/// # Ok::<(), pattern_picker_core::error::Error>(())
/// ```
pub fn build_command(
    pattern: &PatternRecord,
    settings: &CommandSettings,
    timestamp: &DateTime<FixedOffset>,
) -> Result<String> {
    let routing = OutputRouting::from_settings(settings);
    let template = Template::parse(routing.template())?;

    let mut context: HashMap<String, String> = HashMap::new();
    context.insert("clipboard".to_string(), settings.clipboard_command.clone());
    context.insert("processor".to_string(), settings.processor_command.clone());
    context.insert("pattern".to_string(), pattern.directory_name.clone());

    if routing.writes_file() {
        let output_path = Path::new(&settings.output_dir)
            .join(output_file_name(&pattern.directory_name, timestamp));
        context.insert("output_path".to_string(), output_path.display().to_string());
    }

    let command = template.render(&context)?;
    debug!("Built {:?} command for `{}`", routing, pattern.directory_name);

    Ok(command)
}

/// The current local time with its UTC offset.
#[must_use]
pub fn local_now() -> DateTime<FixedOffset> {
    let now = Local::now();
    now.with_timezone(now.offset())
}
