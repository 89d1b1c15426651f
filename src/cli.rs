use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::eol::EolStyle;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "charset-guard")]
#[command(author, version, about = "Character set validator for C/C++ source code")]
#[command(long_about = "Validates that source files use only the basic source character set \
    and one consistent end-of-line style.\n\n\
    With no FILE, read standard input.\n\n\
    Exit codes:\n  \
    0 - Valid\n  \
    1 - Character set violations found\n  \
    2 - End-of-line indicator mismatch\n  \
    3 - Unspecific error\n  \
    4 - Input error, e.g. file could not be read\n  \
    5 - Invalid parameter or configuration")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Files or directories to check (`-` for standard input)
    pub paths: Vec<PathBuf>,

    /// Specify a file (may be repeated)
    #[arg(short, long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// End-of-line indicator [LF, CRLF, CR, NA] (default: NA, detect)
    #[arg(short, long, value_name = "LF/CRLF/CR/NA")]
    pub eol: Option<EolStyle>,

    /// Permit form feed character
    #[arg(long)]
    pub ff: bool,

    /// Permit vertical tab character
    #[arg(long)]
    pub vt: bool,

    /// Permit all printable ASCII characters
    #[arg(long)]
    pub apa: bool,

    /// Forbid horizontal tab character
    #[arg(long)]
    pub noht: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not end listed lines with a line break at each end-of-line
    #[arg(long)]
    pub no_line_separator: bool,

    /// Output format [possible values: text, json]
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,
}

impl Cli {
    /// Positional paths followed by `--file` values.
    #[must_use]
    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.paths.iter().chain(&self.files).cloned().collect()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
