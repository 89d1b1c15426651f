use super::{CR, EolStyle, LF};

/// Infers the EOL style from the first terminator in `buf`.
///
/// A CR is held pending until a later non-CR byte decides between CR and CRLF.
/// Returns `Unspecified` when the buffer ends before anything is resolved,
/// including a lone trailing CR.
#[must_use]
pub fn detect(buf: &[u8]) -> EolStyle {
    let mut pending_cr = false;

    for &byte in buf {
        match byte {
            LF if pending_cr => return EolStyle::CrLf,
            LF => return EolStyle::Lf,
            CR => pending_cr = true,
            _ if pending_cr => return EolStyle::Cr,
            _ => {}
        }
    }

    EolStyle::Unspecified
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
