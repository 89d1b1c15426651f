use std::fmt::Write;

use crate::error::Result;
use crate::validator::{InputReport, Outcome};

use super::{ColorMode, OutputFormatter, ansi};

/// Plain text output.
///
/// For each input: an optional `file: <path>` header and listing (verbose),
/// then the error count. With several inputs the count is prefixed by the
/// input name. EOL mismatches produce no stdout line; see
/// [`eol_mismatch_message`].
pub struct TextFormatter {
    use_colors: bool,
    verbose: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(),
            verbose: false,
        }
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn format_report(&self, report: &InputReport, prefix_name: bool, output: &mut String) {
        if self.verbose
            && let Some(path) = report.source.path()
        {
            let _ = writeln!(output, "file: {}", path.display());
        }

        match &report.outcome {
            Outcome::Empty => {
                if self.verbose {
                    output.push_str("Empty input/file.\n");
                }
            }
            Outcome::EolMismatch { .. } => {}
            Outcome::Checked { report: diagnostics, .. } => {
                if let Some(listing) = &report.listing {
                    output.push_str(listing);
                }
                let count = self.colorize_count(diagnostics.total_errors());
                if prefix_name {
                    let _ = writeln!(output, "{}: {count}", report.source.display_name());
                } else {
                    let _ = writeln!(output, "{count}");
                }
            }
        }
    }

    fn colorize_count(&self, count: usize) -> String {
        if !self.use_colors {
            return count.to_string();
        }
        let color = if count == 0 { ansi::GREEN } else { ansi::RED };
        format!("{color}{count}{}", ansi::RESET)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[InputReport]) -> Result<String> {
        let mut output = String::new();
        let prefix_name = reports.len() > 1;

        for report in reports {
            self.format_report(report, prefix_name, &mut output);
        }

        Ok(output)
    }
}

/// Message for an input whose terminators are inconsistent, if it has one.
#[must_use]
pub fn eol_mismatch_message(report: &InputReport, prefix_name: bool) -> Option<String> {
    let Outcome::EolMismatch { line, .. } = &report.outcome else {
        return None;
    };
    let message = format!("Unexpected end-of-line indicator in line {line}!");
    if prefix_name {
        Some(format!("{}: {message}", report.source.display_name()))
    } else {
        Some(message)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
