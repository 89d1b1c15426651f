//! Where input bytes come from and how they are materialized.

mod buffer;
mod discovery;

pub use buffer::{CHUNK_SIZE, InputBuffer};
pub use discovery::discover_inputs;

use std::path::{Path, PathBuf};

/// Display name used for standard input.
pub const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(path) => Some(path),
        }
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => STDIN_NAME.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}
