use super::*;

#[derive(Default)]
struct RecordingObserver {
    violations: Vec<Violation>,
    line_ends: Vec<(usize, bool)>,
}

impl ScanObserver for RecordingObserver {
    fn on_violation(&mut self, violation: &Violation) {
        self.violations.push(*violation);
    }

    fn on_line_end(&mut self, line: usize, line_had_violations: bool) {
        self.line_ends.push((line, line_had_violations));
    }
}

#[test]
fn clean_input_has_no_errors() {
    let scanner = CharsetScanner::default();
    let report = scanner.scan(b"hello\nworld\n", EolStyle::Lf);
    assert!(report.is_valid());
    assert_eq!(report.total_errors(), 0);
}

#[test]
fn reports_line_and_byte() {
    let scanner = CharsetScanner::default();
    let report = scanner.scan(b"int a;\nint b;\nchar *s = \"@\";\n", EolStyle::Lf);
    assert_eq!(report.total_errors(), 1);
    assert_eq!(report.violations(), &[Violation::new(3, 0x40)]);
}

#[test]
fn dollar_needs_all_printable_ascii() {
    let strict = CharsetScanner::default();
    assert_eq!(strict.scan(b"a$b", EolStyle::Unspecified).total_errors(), 1);

    let relaxed = CharsetScanner::new(CharacterPolicy::basic().with_all_printable_ascii(true));
    assert_eq!(relaxed.scan(b"a$b", EolStyle::Unspecified).total_errors(), 0);
}

#[test]
fn horizontal_tab_only_flagged_when_forbidden() {
    let buf = b"\tint x;\n";
    assert!(CharsetScanner::default().scan(buf, EolStyle::Lf).is_valid());

    let no_tabs = CharsetScanner::new(CharacterPolicy::basic().with_horizontal_tab(false));
    let report = no_tabs.scan(buf, EolStyle::Lf);
    assert_eq!(report.violations(), &[Violation::new(1, 0x09)]);
}

#[test]
fn crlf_terminators_count_one_line() {
    let scanner = CharsetScanner::default();
    let report = scanner.scan(b"a\r\nb\r\n@\r\n", EolStyle::CrLf);
    assert_eq!(report.violations(), &[Violation::new(3, b'@')]);
}

#[test]
fn cr_terminators_count_lines() {
    let scanner = CharsetScanner::default();
    let report = scanner.scan(b"a\r`\r", EolStyle::Cr);
    assert_eq!(report.violations(), &[Violation::new(2, b'`')]);
}

#[test]
fn unspecified_style_stays_on_line_one() {
    let scanner = CharsetScanner::default();
    let report = scanner.scan(b"x@\r", EolStyle::Unspecified);
    assert_eq!(report.violations(), &[Violation::new(1, b'@')]);
}

#[test]
fn non_ascii_bytes_are_violations() {
    let scanner = CharsetScanner::default();
    let report = scanner.scan("caf\u{e9}\n".as_bytes(), EolStyle::Lf);
    assert_eq!(
        report.violations(),
        &[Violation::new(1, 0xC3), Violation::new(1, 0xA9)]
    );
}

#[test]
fn nul_and_delete_are_violations() {
    let scanner = CharsetScanner::default();
    let report = scanner.scan(b"a\x00b\x7f", EolStyle::Lf);
    assert_eq!(report.total_errors(), 2);
}

#[test]
fn scan_is_idempotent() {
    let scanner = CharsetScanner::default();
    let buf = b"$1\n@2\n\x0c3\n";
    assert_eq!(scanner.scan(buf, EolStyle::Lf), scanner.scan(buf, EolStyle::Lf));
}

#[test]
fn observer_sees_violations_and_line_ends() {
    let scanner = CharsetScanner::default();
    let mut observer = RecordingObserver::default();
    let report = scanner.scan_with(b"@@\nok\n$\n", EolStyle::Lf, &mut observer);

    assert_eq!(observer.violations, report.violations());
    assert_eq!(observer.line_ends, vec![(1, true), (2, false), (3, true)]);
}

#[test]
fn observer_does_not_change_report() {
    let scanner = CharsetScanner::default();
    let buf = b"a@\nb$\n";
    let mut observer = RecordingObserver::default();
    assert_eq!(
        scanner.scan_with(buf, EolStyle::Lf, &mut observer),
        scanner.scan(buf, EolStyle::Lf)
    );
}
