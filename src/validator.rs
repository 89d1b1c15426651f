//! The validation pipeline: EOL detection, EOL consistency, charset scan.

use tracing::{debug, trace};

use crate::charset::{CharacterPolicy, CharsetScanner, DiagnosticReport, NoopObserver, ScanObserver};
use crate::config::Config;
use crate::eol::{self, EolStyle};
use crate::input::InputSource;
use crate::status::Status;

/// Result of validating one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Zero-length input; nothing was checked.
    Empty,
    /// A terminator did not match `style`; the charset scan did not run.
    EolMismatch { style: EolStyle, line: usize },
    /// The charset scan ran with the effective `style`.
    Checked {
        style: EolStyle,
        report: DiagnosticReport,
    },
}

impl Outcome {
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Empty => Status::Valid,
            Self::EolMismatch { .. } => Status::EolMismatch,
            Self::Checked { report, .. } => {
                if report.is_valid() {
                    Status::Valid
                } else {
                    Status::Invalid
                }
            }
        }
    }

    /// Effective EOL style, if the input was non-empty.
    #[must_use]
    pub const fn style(&self) -> Option<EolStyle> {
        match self {
            Self::Empty => None,
            Self::EolMismatch { style, .. } | Self::Checked { style, .. } => Some(*style),
        }
    }

    #[must_use]
    pub const fn report(&self) -> Option<&DiagnosticReport> {
        match self {
            Self::Checked { report, .. } => Some(report),
            _ => None,
        }
    }

    #[must_use]
    pub const fn total_errors(&self) -> usize {
        match self {
            Self::Checked { report, .. } => report.total_errors(),
            _ => 0,
        }
    }
}

/// Outcome of one input, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputReport {
    pub source: InputSource,
    pub outcome: Outcome,
    /// Verbose listing rendered during the scan, when requested.
    pub listing: Option<String>,
}

impl InputReport {
    #[must_use]
    pub const fn new(source: InputSource, outcome: Outcome) -> Self {
        Self {
            source,
            outcome,
            listing: None,
        }
    }

    #[must_use]
    pub fn with_listing(mut self, listing: String) -> Self {
        self.listing = Some(listing);
        self
    }
}

/// Runs the three passes over complete, immutable buffers.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    eol_style: EolStyle,
    scanner: CharsetScanner,
}

impl Validator {
    /// `eol_style` of `Unspecified` means the style is detected per buffer.
    #[must_use]
    pub const fn new(eol_style: EolStyle, policy: CharacterPolicy) -> Self {
        Self {
            eol_style,
            scanner: CharsetScanner::new(policy),
        }
    }

    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.eol, CharacterPolicy::from_config(&config.charset))
    }

    #[must_use]
    pub fn validate(&self, buf: &[u8]) -> Outcome {
        self.validate_with(buf, &mut NoopObserver)
    }

    pub fn validate_with<O: ScanObserver + ?Sized>(&self, buf: &[u8], observer: &mut O) -> Outcome {
        if buf.is_empty() {
            return Outcome::Empty;
        }

        let style = self.effective_style(buf);

        if let Some(line) = eol::validate(buf, style) {
            debug!(%style, line, "end-of-line mismatch");
            return Outcome::EolMismatch { style, line };
        }

        let report = self.scanner.scan_with(buf, style, observer);
        trace!(%style, total_errors = report.total_errors(), "charset scan finished");
        Outcome::Checked { style, report }
    }

    fn effective_style(&self, buf: &[u8]) -> EolStyle {
        if self.eol_style != EolStyle::Unspecified {
            return self.eol_style;
        }
        let detected = eol::detect(buf);
        debug!(%detected, "detected end-of-line style");
        detected
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
