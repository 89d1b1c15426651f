//! Character-set policy, the byte scanner and its diagnostics.

mod policy;
mod report;
mod scanner;

pub use policy::{CharacterPolicy, MAX_VALID_BYTE};
pub use report::{DiagnosticReport, Violation};
pub use scanner::{CharsetScanner, NoopObserver, ScanObserver};
