use leon::{ParseError, RenderError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The sub process exited with non-success code: {}", .0.map_or("none".to_string(), |code| code.to_string()))]
    SubProcessExit(Option<i32>),

    #[error("Error with sub process: {}", .0)]
    SubProcess(std::io::Error),

    #[error("Terminal error: {}", .0)]
    Terminal(#[from] std::io::Error),

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error parsing {} file at `{}`: {}", .file_description, .path, .original)]
    Json {
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("Error parsing command template: {}", .0)]
    Template(#[from] ParseError),

    #[error("Error rendering command template: {}", .0)]
    Render(#[from] RenderError),

    #[error(
        "Missing setting `{}`: set the flag or the `{}` environment variable",
        .flag,
        .variable
    )]
    MissingSetting { flag: String, variable: String },
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn json_error(file_description: String, path: String, original: serde_json::Error) -> Self {
        Self::Json {
            file_description,
            path,
            original,
        }
    }

    pub fn missing_setting(flag: &str, variable: &str) -> Self {
        Self::MissingSetting {
            flag: flag.to_string(),
            variable: variable.to_string(),
        }
    }

    /// Whether this error came from reading or parsing the metadata source.
    #[must_use]
    pub fn is_metadata_error(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Json { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_file_and_path() {
        let original = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = Error::io_error("metadata".to_string(), "/tmp/x.json".to_string(), original);

        let message = error.to_string();
        assert!(message.contains("metadata"));
        assert!(message.contains("/tmp/x.json"));
        assert!(error.is_metadata_error());
    }

    #[test]
    fn test_sub_process_exit_message() {
        assert!(Error::SubProcessExit(Some(2)).to_string().ends_with(": 2"));
        assert!(Error::SubProcessExit(None).to_string().ends_with(": none"));
        assert!(!Error::SubProcessExit(None).is_metadata_error());
    }

    #[test]
    fn test_missing_setting_message() {
        let error = Error::missing_setting("--metadata-path", "MERGED_PATTERNS_METADATA_PATH");
        assert_eq!(
            error.to_string(),
            "Missing setting `--metadata-path`: set the flag or the `MERGED_PATTERNS_METADATA_PATH` environment variable"
        );
    }
}
