use crate::eol::EolStyle;

use super::{CharacterPolicy, DiagnosticReport, Violation};

/// Receives scan events as they happen.
///
/// Presentation concerns (listings, separators) hook in here so the scanner
/// itself only produces the report.
pub trait ScanObserver {
    fn on_violation(&mut self, _violation: &Violation) {}

    /// Called when the terminator ending `line` is crossed.
    fn on_line_end(&mut self, _line: usize, _line_had_violations: bool) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Single-pass classifier of every non-terminator byte against a policy.
#[derive(Debug, Clone, Default)]
pub struct CharsetScanner {
    policy: CharacterPolicy,
}

impl CharsetScanner {
    #[must_use]
    pub const fn new(policy: CharacterPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn scan(&self, buf: &[u8], style: EolStyle) -> DiagnosticReport {
        self.scan_with(buf, style, &mut NoopObserver)
    }

    /// Scans `buf`, reporting events to `observer` along the way.
    ///
    /// Terminators of `style` advance the line counter and are never
    /// classified against the policy.
    pub fn scan_with<O: ScanObserver + ?Sized>(
        &self,
        buf: &[u8],
        style: EolStyle,
        observer: &mut O,
    ) -> DiagnosticReport {
        let mut report = DiagnosticReport::new();
        let mut line = 1;
        let mut last_reported: Option<usize> = None;
        let mut pos = 0;

        while let Some(&byte) = buf.get(pos) {
            if let Some(len) = style.terminator_len_at(buf, pos) {
                observer.on_line_end(line, last_reported == Some(line));
                line += 1;
                pos += len;
                continue;
            }

            if !self.policy.is_allowed(byte) {
                let violation = Violation::new(line, byte);
                observer.on_violation(&violation);
                report.push(violation);
                last_reported = Some(line);
            }
            pos += 1;
        }

        report
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
