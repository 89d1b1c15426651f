use super::*;
use crate::charset::Violation;

#[test]
fn empty_input_short_circuits() {
    let validator = Validator::default();
    let outcome = validator.validate(b"");
    assert_eq!(outcome, Outcome::Empty);
    assert_eq!(outcome.status(), Status::Valid);
    assert_eq!(outcome.style(), None);
}

#[test]
fn clean_lf_file_is_valid() {
    let validator = Validator::default();
    let outcome = validator.validate(b"hello\nworld\n");
    let Outcome::Checked { style, report } = &outcome else {
        panic!("Expected Checked, got {outcome:?}");
    };
    assert_eq!(*style, EolStyle::Lf);
    assert_eq!(report.total_errors(), 0);
    assert_eq!(outcome.status(), Status::Valid);
}

#[test]
fn explicit_crlf_rejects_bare_lf() {
    let validator = Validator::new(EolStyle::CrLf, CharacterPolicy::basic());
    let outcome = validator.validate(b"a\r\nb\nc\r\n");
    assert_eq!(
        outcome,
        Outcome::EolMismatch {
            style: EolStyle::CrLf,
            line: 2
        }
    );
    assert_eq!(outcome.status(), Status::EolMismatch);
    assert!(outcome.report().is_none());
}

#[test]
fn detected_style_is_enforced_for_the_rest_of_the_file() {
    let validator = Validator::default();
    let outcome = validator.validate(b"a\nb\nc\r\n");
    assert_eq!(
        outcome,
        Outcome::EolMismatch {
            style: EolStyle::Lf,
            line: 3
        }
    );
}

#[test]
fn at_sign_on_line_three() {
    let validator = Validator::default();
    let outcome = validator.validate(b"int a;\nint b;\nint @c;\n");
    let report = outcome.report().unwrap();
    assert_eq!(report.violations(), &[Violation::new(3, 0x40)]);
    assert_eq!(report.total_errors(), 1);
    assert_eq!(outcome.status(), Status::Invalid);
}

#[test]
fn single_line_without_terminator() {
    let validator = Validator::default();
    let outcome = validator.validate(b"int main(void) { return 0; }");
    assert_eq!(outcome.style(), Some(EolStyle::Unspecified));
    assert_eq!(outcome.status(), Status::Valid);
}

#[test]
fn explicit_style_skips_detection() {
    let validator = Validator::new(EolStyle::Cr, CharacterPolicy::basic());
    let outcome = validator.validate(b"a\rb\r");
    assert_eq!(outcome.style(), Some(EolStyle::Cr));
    assert_eq!(outcome.status(), Status::Valid);
}

#[test]
fn from_config_uses_policy_overrides() {
    let mut config = Config::default();
    config.charset.allow_all_printable_ascii = true;
    let validator = Validator::from_config(&config);
    assert_eq!(validator.validate(b"$x@y`\n").status(), Status::Valid);
}

#[test]
fn total_errors_independent_of_observer() {
    struct Counting(usize);
    impl ScanObserver for Counting {
        fn on_violation(&mut self, _violation: &crate::charset::Violation) {
            self.0 += 1;
        }
    }

    let validator = Validator::default();
    let buf = b"$\n@@\n`\n";
    let mut observer = Counting(0);
    let observed = validator.validate_with(buf, &mut observer);
    let plain = validator.validate(buf);
    assert_eq!(observed.total_errors(), plain.total_errors());
    assert_eq!(observer.0, 4);
}
