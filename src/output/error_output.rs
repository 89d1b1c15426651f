//! Fatal error output on stderr.
//!
//! Format: `✖ Error Type: message` followed by an optional `help:` line.

use std::error::Error;
use std::io::{IsTerminal, Write};

use crate::error::CharsetGuardError;

use super::ansi;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: Self::stderr_supports_color(),
        }
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org/
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    pub fn print_error(&self, error: &CharsetGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Writes the error, its source chain and a suggestion to `w`.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &CharsetGuardError) {
        // Write errors are dropped: there is nowhere left to report them.
        let error_type = error.error_type();
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {error}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {error}");
        }

        let mut source = error.source();
        while let Some(cause) = source {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {cause}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {cause}");
            }
            source = cause.source();
        }

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {suggestion}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {suggestion}");
            }
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Convenience function: prints an error using auto-detected color mode.
pub fn print_error(error: &CharsetGuardError) {
    ErrorOutput::stderr().print_error(error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
