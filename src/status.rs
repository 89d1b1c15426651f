//! Semantic result codes of a run and their process exit codes.

use serde::Serialize;

use crate::{
    EXIT_EOL_MISMATCH, EXIT_INPUT_ERROR, EXIT_INVALID, EXIT_PARAMETER_ERROR, EXIT_UNSPECIFIC_ERROR,
    EXIT_VALID,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Valid,
    Invalid,
    EolMismatch,
    UnspecificFailure,
    InputUnavailable,
    InvalidConfiguration,
}

impl Status {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Valid => EXIT_VALID,
            Self::Invalid => EXIT_INVALID,
            Self::EolMismatch => EXIT_EOL_MISMATCH,
            Self::UnspecificFailure => EXIT_UNSPECIFIC_ERROR,
            Self::InputUnavailable => EXIT_INPUT_ERROR,
            Self::InvalidConfiguration => EXIT_PARAMETER_ERROR,
        }
    }

    /// Combines the statuses of two inputs into the status of the whole run.
    #[must_use]
    pub const fn worst(self, other: Self) -> Self {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }

    const fn severity(self) -> u8 {
        match self {
            Self::Valid => 0,
            Self::Invalid => 1,
            Self::EolMismatch => 2,
            Self::UnspecificFailure => 3,
            Self::InputUnavailable => 4,
            Self::InvalidConfiguration => 5,
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
