//!
//! The tester summary element outcome.
//!

pub mod failure;

use crate::bpp::Status;
use crate::comparison::Comparison;

use self::failure::Failure;

///
/// The tester summary element outcome.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The `passed` outcome. The output matches the reference.
    Passed {
        /// How the binary exited.
        status: Status,
    },
    /// The `failed` outcome.
    Failed {
        /// Why the test failed.
        failure: Failure,
        /// How the binary exited.
        status: Status,
    },
}

impl Outcome {
    ///
    /// Decides the outcome from the output comparison.
    ///
    /// The exit status does not affect the verdict unless the binary could not
    /// be started at all.
    ///
    pub fn new(comparison: Comparison, status: Status) -> Self {
        if let Status::SpawnFailed(ref error) = status {
            return Self::failed(Failure::Spawn(error.to_owned()), status);
        }

        match comparison {
            Comparison::Identical => Self::Passed { status },
            Comparison::Different => Self::failed(Failure::Mismatch, status),
            Comparison::MissingOutput(path) => Self::failed(Failure::MissingOutput(path), status),
            Comparison::MissingReference(path) => {
                Self::failed(Failure::MissingReference(path), status)
            }
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn failed(failure: Failure, status: Status) -> Self {
        Self::Failed { failure, status }
    }

    ///
    /// Whether the test passed.
    ///
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::bpp::Status;
    use crate::comparison::Comparison;

    use super::failure::Failure;
    use super::Outcome;

    #[test]
    fn exit_code_does_not_affect_the_verdict() {
        let outcome = Outcome::new(Comparison::Identical, Status::Exited(Some(1)));
        assert!(outcome.is_passed());

        let outcome = Outcome::new(Comparison::Different, Status::Exited(Some(0)));
        assert_eq!(
            outcome,
            Outcome::failed(Failure::Mismatch, Status::Exited(Some(0)))
        );
    }

    #[test]
    fn spawn_failure_wins_over_a_leftover_output() {
        let status = Status::SpawnFailed("no such file".to_owned());
        let outcome = Outcome::new(Comparison::Identical, status.clone());

        assert_eq!(
            outcome,
            Outcome::failed(Failure::Spawn("no such file".to_owned()), status)
        );
    }

    #[test]
    fn missing_files() {
        let path = PathBuf::from("t/out/mcmc.txt");
        let outcome = Outcome::new(
            Comparison::MissingOutput(path.clone()),
            Status::Exited(None),
        );

        assert_eq!(
            outcome,
            Outcome::failed(Failure::MissingOutput(path), Status::Exited(None))
        );
    }
}
