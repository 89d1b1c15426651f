use serde::Serialize;

use crate::charset::Violation;
use crate::eol::EolStyle;
use crate::error::Result;
use crate::status::Status;
use crate::validator::{InputReport, Outcome};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: Summary,
    results: Vec<InputResult>,
}

#[derive(Serialize, Default)]
struct Summary {
    inputs: usize,
    valid: usize,
    invalid: usize,
    eol_mismatch: usize,
    empty: usize,
    total_errors: usize,
}

#[derive(Serialize)]
struct InputResult {
    input: String,
    status: Status,
    empty: bool,
    eol: Option<EolStyle>,
    eol_mismatch_line: Option<usize>,
    total_errors: usize,
    violations: Vec<JsonViolation>,
}

#[derive(Serialize)]
struct JsonViolation {
    line: usize,
    byte: u8,
    hex: String,
    char: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[InputReport]) -> Result<String> {
        let mut summary = Summary {
            inputs: reports.len(),
            ..Summary::default()
        };
        for report in reports {
            match report.outcome.status() {
                Status::Valid => summary.valid += 1,
                Status::Invalid => summary.invalid += 1,
                Status::EolMismatch => summary.eol_mismatch += 1,
                _ => {}
            }
            if report.outcome == Outcome::Empty {
                summary.empty += 1;
            }
            summary.total_errors += report.outcome.total_errors();
        }

        let output = JsonOutput {
            summary,
            results: reports.iter().map(convert_report).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_report(report: &InputReport) -> InputResult {
    let eol_mismatch_line = match report.outcome {
        Outcome::EolMismatch { line, .. } => Some(line),
        _ => None,
    };
    let violations = report
        .outcome
        .report()
        .map(|r| r.violations().iter().map(convert_violation).collect())
        .unwrap_or_default();

    InputResult {
        input: report.source.display_name(),
        status: report.outcome.status(),
        empty: report.outcome == Outcome::Empty,
        eol: report.outcome.style(),
        eol_mismatch_line,
        total_errors: report.outcome.total_errors(),
        violations,
    }
}

fn convert_violation(violation: &Violation) -> JsonViolation {
    JsonViolation {
        line: violation.line,
        byte: violation.byte,
        hex: violation.hex(),
        char: violation.display_char(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
