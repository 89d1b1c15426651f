use crate::config::CharsetConfig;

/// Highest byte value a policy can permit; everything above is rejected.
pub const MAX_VALID_BYTE: u8 = 126;

const TABLE_SIZE: usize = MAX_VALID_BYTE as usize + 1;

const HT: u8 = 0x09;
const LF: u8 = 0x0A;
const VT: u8 = 0x0B;
const FF: u8 = 0x0C;
const CR: u8 = 0x0D;

/// Printable ASCII outside the basic source character set.
const RESERVED_PUNCTUATION: [u8; 3] = [b'$', b'@', b'`'];

/// Immutable permission table over byte values `0..=126`.
///
/// LF and CR are always permitted: they are structural and their use is
/// checked by the EOL consistency pass, not by the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPolicy {
    allowed: [bool; TABLE_SIZE],
}

impl CharacterPolicy {
    /// Basic source character set: printable ASCII minus `$`, `@`, `` ` ``,
    /// plus HT, LF and CR.
    #[must_use]
    pub const fn basic() -> Self {
        let mut allowed = [false; TABLE_SIZE];
        let mut byte = 0x20;
        while byte < TABLE_SIZE {
            allowed[byte] = true;
            byte += 1;
        }
        let mut i = 0;
        while i < RESERVED_PUNCTUATION.len() {
            allowed[RESERVED_PUNCTUATION[i] as usize] = false;
            i += 1;
        }
        allowed[HT as usize] = true;
        allowed[LF as usize] = true;
        allowed[CR as usize] = true;
        Self { allowed }
    }

    #[must_use]
    pub const fn with_form_feed(mut self, allow: bool) -> Self {
        self.allowed[FF as usize] = allow;
        self
    }

    #[must_use]
    pub const fn with_vertical_tab(mut self, allow: bool) -> Self {
        self.allowed[VT as usize] = allow;
        self
    }

    /// Unlocks `$`, `@` and `` ` ``.
    #[must_use]
    pub const fn with_all_printable_ascii(mut self, allow: bool) -> Self {
        let mut i = 0;
        while i < RESERVED_PUNCTUATION.len() {
            self.allowed[RESERVED_PUNCTUATION[i] as usize] = allow;
            i += 1;
        }
        self
    }

    #[must_use]
    pub const fn with_horizontal_tab(mut self, allow: bool) -> Self {
        self.allowed[HT as usize] = allow;
        self
    }

    #[must_use]
    pub const fn from_config(config: &CharsetConfig) -> Self {
        Self::basic()
            .with_form_feed(config.allow_form_feed)
            .with_vertical_tab(config.allow_vertical_tab)
            .with_all_printable_ascii(config.allow_all_printable_ascii)
            .with_horizontal_tab(!config.forbid_horizontal_tab)
    }

    #[must_use]
    pub const fn is_allowed(&self, byte: u8) -> bool {
        if byte == LF || byte == CR {
            return true;
        }
        byte <= MAX_VALID_BYTE && self.allowed[byte as usize]
    }
}

impl Default for CharacterPolicy {
    fn default() -> Self {
        Self::basic()
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
