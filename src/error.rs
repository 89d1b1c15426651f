use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

use crate::status::Status;

#[derive(Error, Debug)]
pub enum CharsetGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open {path}")]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {input}")]
    InputRead {
        input: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Memory allocation failed while reading {input}")]
    Allocation {
        input: String,
        #[source]
        source: TryReserveError,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to walk directory")]
    Walk(#[from] walkdir::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CharsetGuardError {
    /// Short label used as the heading of error messages.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::ConfigRead { .. }
            | Self::InvalidPattern { .. }
            | Self::TomlParse(_) => "Config",
            Self::InputOpen { .. }
            | Self::InputRead { .. }
            | Self::InputNotFound(_)
            | Self::Walk(_) => "Input",
            Self::Allocation { .. } => "Memory",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }

    /// Status (and therefore exit code) this error ends the run with.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Config(_)
            | Self::ConfigRead { .. }
            | Self::InvalidPattern { .. }
            | Self::TomlParse(_) => Status::InvalidConfiguration,
            Self::InputOpen { .. }
            | Self::InputRead { .. }
            | Self::InputNotFound(_)
            | Self::Walk(_) => Status::InputUnavailable,
            Self::Allocation { .. } | Self::Io(_) | Self::JsonSerialize(_) => {
                Status::UnspecificFailure
            }
        }
    }

    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format and the command line options")
            }
            Self::InvalidPattern { .. } => {
                Some("Exclude patterns use glob syntax, e.g. \"vendor/**\" or \"*.gen.c\"")
            }
            Self::ConfigRead { .. } => Some("Check that the config file exists and is readable"),
            Self::InputNotFound(_) => Some("Check that the file path exists"),
            Self::InputOpen { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
                _ => None,
            },
            Self::Allocation { .. } => Some("The input is too large to be held in memory"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CharsetGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
