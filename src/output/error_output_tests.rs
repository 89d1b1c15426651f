use std::path::PathBuf;

use super::*;
use crate::config::Config;

fn render(output: &ErrorOutput, error: &CharsetGuardError) -> String {
    let mut buf = Vec::new();
    output.write_error(&mut buf, error);
    String::from_utf8(buf).unwrap()
}

#[test]
fn plain_error_with_suggestion() {
    let error = CharsetGuardError::InputOpen {
        path: PathBuf::from("missing.c"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
    };
    let text = render(&ErrorOutput::with_colors(false), &error);
    assert_eq!(
        text,
        "✖ Input: Failed to open missing.c\n  × No such file\n  help: Check that the file path exists\n"
    );
}

#[test]
fn plain_error_without_source() {
    let error = CharsetGuardError::Config("bad".to_string());
    let text = render(&ErrorOutput::with_colors(false), &error);
    assert!(text.starts_with("✖ Config: Configuration error: bad\n"));
    assert!(!text.contains('×'));
}

#[test]
fn colored_error() {
    let error = CharsetGuardError::Config("bad".to_string());
    let text = render(&ErrorOutput::with_colors(true), &error);
    assert!(text.contains("\x1b[31m"));
    assert!(text.contains("\x1b[36mhelp:"));
}

#[test]
fn wrapped_parse_error_detail_is_printed_once() {
    let parse_error = toml::from_str::<Config>("eol = \"sideways\"").unwrap_err();
    let error = CharsetGuardError::from(parse_error);
    let text = render(&ErrorOutput::with_colors(false), &error);
    assert!(text.starts_with("✖ Config: TOML parse error\n  × "));
    assert_eq!(text.matches("'sideways' not supported").count(), 1);
}

#[test]
fn wrapped_io_error_detail_is_printed_once() {
    let error = CharsetGuardError::from(std::io::Error::other("disk full"));
    let text = render(&ErrorOutput::with_colors(false), &error);
    assert_eq!(text, "✖ IO: IO error\n  × disk full\n");
}
