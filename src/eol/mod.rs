//! End-of-line styles, detection and consistency checking.

mod consistency;
mod detect;

pub use consistency::validate;
pub use detect::detect;

use serde::{Deserialize, Serialize};

pub const CR: u8 = b'\r';
pub const LF: u8 = b'\n';

/// End-of-line convention of a buffer.
///
/// `Unspecified` is only meaningful as configuration input ("detect it");
/// detection yields it solely when the buffer holds no resolvable terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum EolStyle {
    #[default]
    #[serde(rename = "NA")]
    Unspecified,
    #[serde(rename = "CR")]
    Cr,
    #[serde(rename = "LF")]
    Lf,
    #[serde(rename = "CRLF")]
    CrLf,
}

impl EolStyle {
    /// Terminator bytes for this style, `None` for `Unspecified`.
    #[must_use]
    pub const fn sequence(self) -> Option<&'static [u8]> {
        match self {
            Self::Unspecified => None,
            Self::Cr => Some(&[CR]),
            Self::Lf => Some(&[LF]),
            Self::CrLf => Some(&[CR, LF]),
        }
    }

    /// Length of the terminator starting at `pos`, if one starts there.
    ///
    /// CRLF only matches when both bytes are present.
    #[must_use]
    pub fn terminator_len_at(self, buf: &[u8], pos: usize) -> Option<usize> {
        let seq = self.sequence()?;
        buf.get(pos..)
            .filter(|rest| rest.starts_with(seq))
            .map(|_| seq.len())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspecified => "NA",
            Self::Cr => "CR",
            Self::Lf => "LF",
            Self::CrLf => "CRLF",
        }
    }
}

impl std::fmt::Display for EolStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EolStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LF" => Ok(Self::Lf),
            "CRLF" => Ok(Self::CrLf),
            "CR" => Ok(Self::Cr),
            "NA" | "AUTO" => Ok(Self::Unspecified),
            _ => Err(format!("EOL '{s}' not supported (expected LF, CRLF, CR or NA)")),
        }
    }
}

impl TryFrom<String> for EolStyle {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
