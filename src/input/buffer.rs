use std::fs::File;
use std::io::{ErrorKind, Read};

use crate::error::{CharsetGuardError, Result};

use super::InputSource;

/// Size of each read from the underlying stream.
pub const CHUNK_SIZE: usize = 16 * 1024;

/// Complete input held in memory, owned by a single validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    bytes: Vec<u8>,
}

impl InputBuffer {
    /// Reads `source` to the end.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or read, or if the
    /// buffer cannot grow.
    pub fn load(source: &InputSource) -> Result<Self> {
        match source {
            InputSource::Stdin => Self::read_from(std::io::stdin().lock(), &source.display_name()),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| CharsetGuardError::InputOpen {
                    path: path.clone(),
                    source,
                })?;
                Self::read_from(file, &source.display_name())
            }
        }
    }

    /// Accumulates `reader` chunk by chunk; `name` is used in errors.
    ///
    /// # Errors
    /// Returns an error if reading fails or the buffer cannot grow.
    pub fn read_from<R: Read>(mut reader: R, name: &str) -> Result<Self> {
        let mut bytes = Vec::new();
        let mut chunk = vec![0u8; CHUNK_SIZE];

        loop {
            let read = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(CharsetGuardError::InputRead {
                        input: name.to_string(),
                        source,
                    });
                }
            };
            bytes
                .try_reserve(read)
                .map_err(|source| CharsetGuardError::Allocation {
                    input: name.to_string(),
                    source,
                })?;
            bytes.extend_from_slice(&chunk[..read]);
        }

        Ok(Self { bytes })
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
