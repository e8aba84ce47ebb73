//!
//! The tester filters.
//!

use std::collections::HashSet;

use crate::architecture::Architecture;
use crate::test::TestCase;

///
/// The tester filters.
///
#[derive(Debug, Default)]
pub struct Filters {
    /// The path filters.
    path_filters: HashSet<String>,
    /// The architecture filters.
    architecture_filters: HashSet<Architecture>,
}

impl Filters {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path_filters: Vec<String>, architecture_filters: Vec<Architecture>) -> Self {
        Self {
            path_filters: path_filters.into_iter().collect(),
            architecture_filters: architecture_filters.into_iter().collect(),
        }
    }

    ///
    /// Check if the test case is compatible with the filters.
    ///
    /// Matches both the test path and its description.
    ///
    pub fn check_case(&self, case: &TestCase) -> bool {
        if self.path_filters.is_empty() {
            return true;
        }

        let path = case.path.to_string_lossy();
        self.path_filters.iter().any(|filter| {
            path.contains(filter.as_str()) || case.description.contains(filter.as_str())
        })
    }

    ///
    /// Check if the architecture is compatible with the filters.
    ///
    pub fn check_architecture(&self, architecture: Architecture) -> bool {
        self.architecture_filters.is_empty() || self.architecture_filters.contains(&architecture)
    }
}
