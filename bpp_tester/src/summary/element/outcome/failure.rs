//!
//! The tester summary element failure reason.
//!

use std::path::PathBuf;

///
/// The tester summary element failure reason.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// The output differs from the reference.
    Mismatch,
    /// The binary did not produce the output file.
    MissingOutput(PathBuf),
    /// The reference file does not exist.
    MissingReference(PathBuf),
    /// The binary could not be started.
    Spawn(String),
    /// The output left by a previous run could not be removed.
    StaleOutput(PathBuf, String),
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mismatch => write!(f, "output differs from reference"),
            Self::MissingOutput(path) => write!(f, "output {} not found", path.display()),
            Self::MissingReference(path) => write!(f, "reference {} not found", path.display()),
            Self::Spawn(error) => write!(f, "{error}"),
            Self::StaleOutput(path, error) => {
                write!(f, "stale output {} removing error: {}", path.display(), error)
            }
        }
    }
}
