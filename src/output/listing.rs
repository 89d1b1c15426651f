use std::fmt::Write;

use crate::charset::{ScanObserver, Violation};

use super::ansi;

/// Renders the verbose per-line violation listing while a scan runs.
///
/// Output looks like `line 3: 0x40 (@) 0x24 ($)`. With line separators on,
/// a line group is closed by a line break when the scan crosses that line's
/// terminator; without them, groups run together until the end.
#[derive(Debug, Default)]
pub struct ViolationListing {
    out: String,
    last_line: Option<usize>,
    open: bool,
    separate_lines: bool,
    use_colors: bool,
}

impl ViolationListing {
    #[must_use]
    pub const fn new(separate_lines: bool, use_colors: bool) -> Self {
        Self {
            out: String::new(),
            last_line: None,
            open: false,
            separate_lines,
            use_colors,
        }
    }

    /// Returns the listing, terminating a group still open at end of input.
    #[must_use]
    pub fn finish(mut self) -> String {
        if self.open {
            self.out.push('\n');
        }
        self.out
    }
}

impl ScanObserver for ViolationListing {
    fn on_violation(&mut self, violation: &Violation) {
        if self.last_line != Some(violation.line) {
            let _ = write!(self.out, "line {}:", violation.line);
            self.last_line = Some(violation.line);
            self.open = true;
        }

        let hex = violation.hex();
        let shown = violation.display_char();
        if self.use_colors {
            let _ = write!(self.out, " {}{hex}{} ({shown})", ansi::RED, ansi::RESET);
        } else {
            let _ = write!(self.out, " {hex} ({shown})");
        }
    }

    fn on_line_end(&mut self, _line: usize, line_had_violations: bool) {
        if self.separate_lines && line_had_violations {
            self.out.push('\n');
            self.open = false;
        }
    }
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
