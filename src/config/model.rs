use serde::{Deserialize, Serialize};

use crate::eol::EolStyle;

/// Top-level configuration, as read from `.charset-guard.toml`.
///
/// Command line flags are applied on top of this after loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Expected end-of-line style; `NA` detects it per input.
    #[serde(default)]
    pub eol: EolStyle,

    #[serde(default)]
    pub charset: CharsetConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// Overrides of the basic source character set.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct CharsetConfig {
    /// Permit form feed (0x0C).
    #[serde(default)]
    pub allow_form_feed: bool,

    /// Permit vertical tab (0x0B).
    #[serde(default)]
    pub allow_vertical_tab: bool,

    /// Permit `$`, `@` and `` ` ``.
    #[serde(default)]
    pub allow_all_printable_ascii: bool,

    /// Reject horizontal tab (0x09).
    #[serde(default)]
    pub forbid_horizontal_tab: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// List every violation grouped by line.
    #[serde(default)]
    pub verbose: bool,

    /// Close each listed line with a line break when its terminator is crossed.
    #[serde(default = "default_true")]
    pub line_separator: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            line_separator: true,
        }
    }
}

/// Directory traversal settings. Explicitly named files are always checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Extensions of files picked up when walking directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns of files and directories to skip while walking.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

const fn default_true() -> bool {
    true
}

#[must_use]
pub fn default_extensions() -> Vec<String> {
    ["c", "h", "cc", "cpp", "cxx", "hh", "hpp", "hxx"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
