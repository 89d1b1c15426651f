use super::*;

#[test]
fn basic_allows_printable_ascii() {
    let policy = CharacterPolicy::basic();
    for byte in b'a'..=b'z' {
        assert!(policy.is_allowed(byte));
    }
    for byte in b"{}[]()#%^&*~|\\/\"'<>?!;:,. _-+=0123456789" {
        assert!(policy.is_allowed(*byte), "byte 0x{byte:02X}");
    }
}

#[test]
fn basic_rejects_reserved_punctuation() {
    let policy = CharacterPolicy::basic();
    assert!(!policy.is_allowed(b'$'));
    assert!(!policy.is_allowed(b'@'));
    assert!(!policy.is_allowed(b'`'));
}

#[test]
fn all_printable_ascii_unlocks_reserved_punctuation() {
    let policy = CharacterPolicy::basic().with_all_printable_ascii(true);
    assert!(policy.is_allowed(b'$'));
    assert!(policy.is_allowed(b'@'));
    assert!(policy.is_allowed(b'`'));
}

#[test]
fn basic_control_characters() {
    let policy = CharacterPolicy::basic();
    assert!(policy.is_allowed(HT));
    assert!(!policy.is_allowed(VT));
    assert!(!policy.is_allowed(FF));
    assert!(!policy.is_allowed(0x00));
    assert!(!policy.is_allowed(0x1B));
    assert!(!policy.is_allowed(0x1F));
}

#[test]
fn form_feed_and_vertical_tab_overrides() {
    let policy = CharacterPolicy::basic()
        .with_form_feed(true)
        .with_vertical_tab(true);
    assert!(policy.is_allowed(FF));
    assert!(policy.is_allowed(VT));
}

#[test]
fn horizontal_tab_can_be_forbidden() {
    let policy = CharacterPolicy::basic().with_horizontal_tab(false);
    assert!(!policy.is_allowed(HT));
}

#[test]
fn lf_and_cr_are_always_structural() {
    let policy = CharacterPolicy::basic()
        .with_horizontal_tab(false)
        .with_form_feed(false)
        .with_vertical_tab(false);
    assert!(policy.is_allowed(LF));
    assert!(policy.is_allowed(CR));
}

#[test]
fn delete_and_high_bytes_always_rejected() {
    let policy = CharacterPolicy::basic().with_all_printable_ascii(true);
    assert!(!policy.is_allowed(0x7F));
    assert!(!policy.is_allowed(0x80));
    assert!(!policy.is_allowed(0xC3));
    assert!(!policy.is_allowed(0xFF));
}

#[test]
fn from_config_applies_every_override() {
    let config = CharsetConfig {
        allow_form_feed: true,
        allow_vertical_tab: true,
        allow_all_printable_ascii: true,
        forbid_horizontal_tab: true,
    };
    let policy = CharacterPolicy::from_config(&config);
    assert!(policy.is_allowed(FF));
    assert!(policy.is_allowed(VT));
    assert!(policy.is_allowed(b'@'));
    assert!(!policy.is_allowed(HT));
}

#[test]
fn default_config_matches_basic() {
    assert_eq!(
        CharacterPolicy::from_config(&CharsetConfig::default()),
        CharacterPolicy::default()
    );
}
