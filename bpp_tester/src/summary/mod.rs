//!
//! The tester summary.
//!

pub mod element;

use colored::Colorize;

use crate::architecture::Architecture;

use self::element::Element;

///
/// The tester summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The summary elements.
    elements: Vec<Element>,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The passed tests counter.
    passed: usize,
    /// The failed tests counter.
    failed: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(quiet: bool) -> Self {
        Self {
            elements: Vec::new(),
            quiet,
            passed: 0,
            failed: 0,
        }
    }

    ///
    /// Whether the test run has been successful.
    ///
    pub fn is_successful(&self) -> bool {
        self.failed == 0
    }

    ///
    /// The passed tests counter.
    ///
    pub fn passed(&self) -> usize {
        self.passed
    }

    ///
    /// The failed tests counter.
    ///
    pub fn failed(&self) -> usize {
        self.failed
    }

    ///
    /// The recorded elements, in run order.
    ///
    pub fn elements(&self) -> &[Element] {
        self.elements.as_slice()
    }

    ///
    /// The failed elements run on the specified architecture.
    ///
    pub fn failures(&self, architecture: Architecture) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(move |element| {
            element.architecture == architecture && !element.outcome.is_passed()
        })
    }

    ///
    /// Pushes an element to the summary.
    ///
    pub fn push_element(&mut self, element: Element) {
        if element.outcome.is_passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.elements.push(element);
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔═══════════════════════╡ BPP TESTING ╞════════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "PASSED".green(),
            self.passed.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "FAILED".bright_red(),
            self.failed.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "║               {:10} TESTS RUN                           ║",
            self.passed + self.failed,
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::architecture::Architecture;
    use crate::bpp::Status;
    use crate::test::TestCase;

    use super::element::outcome::failure::Failure;
    use super::element::outcome::Outcome;
    use super::element::Element;
    use super::Summary;

    fn element(architecture: Architecture, index: usize, outcome: Outcome) -> Element {
        Element::new(
            architecture,
            TestCase::new(format!("t/{index}"), format!("t-{index}")),
            (index, 2),
            chrono::Local::now(),
            Duration::from_millis(10),
            outcome,
        )
    }

    #[test]
    fn counts_and_failures() {
        let mut summary = Summary::new(false);
        let passed = Outcome::Passed {
            status: Status::Exited(Some(0)),
        };
        let failed = Outcome::failed(Failure::Mismatch, Status::Exited(Some(0)));

        summary.push_element(element(Architecture::CPU, 1, passed.clone()));
        summary.push_element(element(Architecture::CPU, 2, failed.clone()));
        summary.push_element(element(Architecture::AVX, 1, passed));
        summary.push_element(element(Architecture::AVX, 2, failed));

        assert_eq!(summary.passed(), 2);
        assert_eq!(summary.failed(), 2);
        assert!(!summary.is_successful());
        assert_eq!(summary.elements().len(), 4);
        let failures: Vec<_> = summary
            .failures(Architecture::AVX)
            .map(|element| element.case.description.as_str())
            .collect();
        assert_eq!(failures, vec!["t-2"]);
    }

    #[test]
    fn empty_run_is_successful() {
        assert!(Summary::new(false).is_successful());
    }

    #[test]
    fn quiet_prints_nothing() {
        let mut summary = Summary::new(true);
        summary.push_element(element(
            Architecture::CPU,
            1,
            Outcome::Passed {
                status: Status::Exited(Some(0)),
            },
        ));

        assert!(summary.to_string().is_empty());
    }
}
