//!
//! The tester summary element.
//!

pub mod outcome;

use std::time::Duration;

use colored::Colorize;

use crate::architecture::Architecture;
use crate::color;
use crate::test::TestCase;

use self::outcome::Outcome;

///
/// The tester summary element.
///
#[derive(Debug, Clone)]
pub struct Element {
    /// The architecture the test was run on.
    pub architecture: Architecture,
    /// The test case.
    pub case: TestCase,
    /// The position in the architecture block, starting from 1.
    pub index: usize,
    /// The number of tests in the architecture block.
    pub total: usize,
    /// The local time the invocation started at.
    pub start: chrono::DateTime<chrono::Local>,
    /// The wall-clock duration of the invocation.
    pub elapsed: Duration,
    /// The test outcome.
    pub outcome: Outcome,
}

impl Element {
    /// The description column width.
    pub const DESCRIPTION_WIDTH: usize = 39;
    /// The elapsed time column width.
    pub const ELAPSED_WIDTH: usize = 14;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        architecture: Architecture,
        case: TestCase,
        (index, total): (usize, usize),
        start: chrono::DateTime<chrono::Local>,
        elapsed: Duration,
        outcome: Outcome,
    ) -> Self {
        Self {
            architecture,
            case,
            index,
            total,
            start,
            elapsed,
            outcome,
        }
    }

    ///
    /// The elapsed time in seconds with two decimals.
    ///
    pub fn elapsed_seconds(&self) -> String {
        format!("{:.2}", self.elapsed.as_secs_f64())
    }

    ///
    /// Prints the element as a report line.
    ///
    /// Columns are padded before coloring, so escape sequences do not shift them.
    ///
    pub fn print(&self, colorize: bool, verbosity: bool) -> String {
        let counter = format!(
            "{:>3}/{:<3}   {}",
            self.index,
            self.total,
            self.start.format("%H:%M:%S")
        );
        let description = format!(
            " {:<width$} ",
            self.case.description,
            width = Self::DESCRIPTION_WIDTH
        );
        let elapsed = format!(
            "{:<width$} ",
            self.elapsed_seconds(),
            width = Self::ELAPSED_WIDTH
        );

        let result = match self.outcome {
            Outcome::Passed { .. } => color::paint("OK", colorize, |text| text.green().bold()),
            Outcome::Failed { .. } => color::paint("Fail", colorize, |text| text.red().bold()),
        };

        let mut line = format!(
            "{}{}{}{}",
            counter,
            color::paint(description.as_str(), colorize, |text| text.cyan().bold()),
            color::paint(elapsed.as_str(), colorize, |text| text.cyan().bold()),
            result,
        );

        if verbosity {
            if let Outcome::Failed {
                ref failure,
                ref status,
            } = self.outcome
            {
                let details = format!("  ({failure}, {status})");
                line.push_str(
                    color::paint(details.as_str(), colorize, |text| text.bright_black()).as_str(),
                );
            }
        }

        line
    }
}
