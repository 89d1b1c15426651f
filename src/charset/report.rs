use std::fmt::Write;

use serde::Serialize;

/// A byte rejected by the character policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 1-based line number.
    pub line: usize,
    pub byte: u8,
}

impl Violation {
    #[must_use]
    pub const fn new(line: usize, byte: u8) -> Self {
        Self { line, byte }
    }

    /// Printable form of the byte; control and non-ASCII bytes are escaped.
    #[must_use]
    pub fn display_char(&self) -> String {
        if self.byte.is_ascii_graphic() || self.byte == b' ' {
            return char::from(self.byte).to_string();
        }
        let mut out = String::new();
        for c in std::ascii::escape_default(self.byte) {
            out.push(char::from(c));
        }
        out
    }

    /// `0x<HH>` form used in listings.
    #[must_use]
    pub fn hex(&self) -> String {
        let mut out = String::with_capacity(4);
        let _ = write!(out, "0x{:02X}", self.byte);
        out
    }
}

/// Violations of one scan pass, in buffer order, plus their count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiagnosticReport {
    violations: Vec<Violation>,
    total_errors: usize,
}

impl DiagnosticReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
            total_errors: 0,
        }
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        debug_assert!(
            self.violations
                .last()
                .is_none_or(|last| last.line <= violation.line)
        );
        self.violations.push(violation);
        self.total_errors += 1;
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub const fn total_errors(&self) -> usize {
        self.total_errors
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.total_errors == 0
    }

    /// Violations grouped by line, in line order.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &[Violation])> {
        self.violations
            .chunk_by(|a, b| a.line == b.line)
            .map(|group| (group[0].line, group))
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
