//!
//! The bpp tester library.
//!

pub(crate) mod architecture;
pub(crate) mod bpp;
pub(crate) mod color;
pub(crate) mod comparison;
pub(crate) mod config;
pub(crate) mod filters;
pub(crate) mod reporter;
pub(crate) mod summary;
pub(crate) mod test;

pub use self::architecture::Architecture;
pub use self::bpp::Bpp;
pub use self::bpp::Status;
pub use self::color::ColorChoice;
pub use self::comparison::Comparison;
pub use self::config::Config;
pub use self::filters::Filters;
pub use self::reporter::Reporter;
pub use self::summary::element::outcome::failure::Failure;
pub use self::summary::element::outcome::Outcome;
pub use self::summary::element::Element;
pub use self::summary::Summary;
pub use self::test::suite::TestSuite;
pub use self::test::TestCase;

use std::io::Write;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

///
/// The bpp tester.
///
/// Runs every selected test case on every selected architecture, one invocation
/// at a time, in configuration order.
///
#[derive(Debug)]
pub struct BppTester {
    /// The configuration.
    config: Config,
    /// The filters.
    filters: Filters,
    /// The tested executable.
    bpp: Bpp,
}

impl BppTester {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config, filters: Filters) -> Self {
        let bpp = Bpp::new(
            config.binary_path(),
            config.stdout.clone(),
            config.stderr.clone(),
        );
        Self {
            config,
            filters,
            bpp,
        }
    }

    ///
    /// Returns the tested executable.
    ///
    pub fn bpp(&self) -> &Bpp {
        &self.bpp
    }

    ///
    /// Returns the test cases surviving the filters, in suite order.
    ///
    pub fn tests(&self) -> Vec<&TestCase> {
        self.config
            .suites
            .iter()
            .flat_map(|suite| suite.cases.iter())
            .filter(|case| self.filters.check_case(case))
            .collect()
    }

    ///
    /// Returns the architectures surviving the filters, in configuration order.
    ///
    pub fn architectures(&self) -> Vec<Architecture> {
        self.config
            .architectures
            .iter()
            .copied()
            .filter(|architecture| self.filters.check_architecture(*architecture))
            .collect()
    }

    ///
    /// Runs all tests, reporting every result as soon as it is known.
    ///
    pub fn run<W>(&self, summary: &mut Summary, reporter: &mut Reporter<W>) -> anyhow::Result<()>
    where
        W: Write,
    {
        let tests = self.tests();
        let architectures = self.architectures();
        if architectures.is_empty() {
            anyhow::bail!("No architectures left to test after filtering");
        }

        reporter.overview(tests.len(), architectures.len())?;

        for architecture in architectures.into_iter() {
            reporter.banner(architecture)?;
            for (index, case) in tests.iter().enumerate() {
                let element = self.run_case(architecture, case, (index + 1, tests.len()))?;
                reporter.element(&element)?;
                summary.push_element(element);
            }
        }

        Ok(())
    }

    ///
    /// Runs a single test case and compares its output.
    ///
    fn run_case(
        &self,
        architecture: Architecture,
        case: &TestCase,
        position: (usize, usize),
    ) -> anyhow::Result<Element> {
        let output = case.output_mcmc();
        for stale in [output.as_path(), case.output_out().as_path()] {
            match std::fs::remove_file(stale) {
                Ok(()) => {}
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
                Err(error) => {
                    return Ok(Element::new(
                        architecture,
                        case.to_owned(),
                        position,
                        chrono::Local::now(),
                        std::time::Duration::ZERO,
                        Outcome::failed(
                            Failure::StaleOutput(stale.to_owned(), error.to_string()),
                            Status::NotStarted,
                        ),
                    ));
                }
            }
        }

        let control_file = case.control_file(self.config.control_file.as_str());
        let start = chrono::Local::now();
        let invocation = self.bpp.run(control_file.as_path(), architecture)?;

        let comparison = Comparison::files(output.as_path(), case.reference_mcmc().as_path());
        let outcome = Outcome::new(comparison, invocation.status);

        Ok(Element::new(
            architecture,
            case.to_owned(),
            position,
            start,
            invocation.elapsed,
            outcome,
        ))
    }
}
