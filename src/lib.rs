//! Validates that source code uses only the basic source character set and
//! one consistent end-of-line style.
//!
//! The engine works on complete in-memory buffers: [`eol::detect`] infers the
//! EOL style when none is configured, [`eol::validate`] rejects inputs whose
//! terminators disagree, and [`charset::CharsetScanner`] reports every byte
//! outside the [`charset::CharacterPolicy`]. [`validator::Validator`] runs the
//! three passes in order.

pub mod charset;
pub mod cli;
pub mod commands;
pub mod config;
pub mod eol;
pub mod error;
pub mod input;
pub mod output;
pub mod status;
pub mod validator;

pub use error::{CharsetGuardError, Result};
pub use status::Status;
pub use validator::{Outcome, Validator};

pub const EXIT_VALID: i32 = 0;
pub const EXIT_INVALID: i32 = 1;
pub const EXIT_EOL_MISMATCH: i32 = 2;
pub const EXIT_UNSPECIFIC_ERROR: i32 = 3;
pub const EXIT_INPUT_ERROR: i32 = 4;
pub const EXIT_PARAMETER_ERROR: i32 = 5;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
