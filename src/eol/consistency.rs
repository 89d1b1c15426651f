use super::{CR, EolStyle, LF};

/// Checks that every terminator in `buf` matches `style`.
///
/// Returns the 1-based line of the first foreign or partial terminator, or
/// `None` when the buffer is consistent. `Unspecified` is always consistent.
#[must_use]
pub fn validate(buf: &[u8], style: EolStyle) -> Option<usize> {
    if style == EolStyle::Unspecified {
        return None;
    }
    let mut line = 1;
    let mut pos = 0;

    while let Some(&byte) = buf.get(pos) {
        if let Some(len) = style.terminator_len_at(buf, pos) {
            line += 1;
            pos += len;
        } else if byte == CR || byte == LF {
            return Some(line);
        } else {
            pos += 1;
        }
    }

    None
}

#[cfg(test)]
#[path = "consistency_tests.rs"]
mod tests;
