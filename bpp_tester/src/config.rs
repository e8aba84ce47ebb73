//!
//! The tester configuration.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::architecture::Architecture;
use crate::test::suite::TestSuite;

///
/// The tester configuration.
///
/// Loaded from a YAML file, or built from the defaults matching the bpp source
/// tree layout.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// The path to the tested binary. `$HOME` is expanded.
    #[serde(default = "Config::default_binary")]
    pub binary: String,
    /// The control file name inside each test's `data/` directory.
    #[serde(default = "Config::default_control_file")]
    pub control_file: String,
    /// The file the binary's standard output is redirected to.
    #[serde(default = "Config::default_stdout")]
    pub stdout: PathBuf,
    /// The file the binary's standard error is redirected to.
    #[serde(default = "Config::default_stderr")]
    pub stderr: PathBuf,
    /// The architectures to run every test on, in order.
    #[serde(default = "Architecture::defaults")]
    pub architectures: Vec<Architecture>,
    /// The test suites, in order.
    #[serde(default = "Config::default_suites")]
    pub suites: Vec<TestSuite>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary: Self::default_binary(),
            control_file: Self::default_control_file(),
            stdout: Self::default_stdout(),
            stderr: Self::default_stderr(),
            architectures: Architecture::defaults(),
            suites: Self::default_suites(),
        }
    }
}

impl Config {
    ///
    /// Reads the configuration from a YAML file.
    ///
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path).map_err(|error| {
            anyhow::anyhow!("Tester config {:?} opening error: {}", path, error)
        })?;
        let reader = std::io::BufReader::new(file);
        let config: Self = serde_yaml::from_reader(reader).map_err(|error| {
            anyhow::anyhow!("Tester config {:?} parsing error: {}", path, error)
        })?;
        config.validate()
    }

    ///
    /// Checks the invariants the YAML schema cannot express.
    ///
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.architectures.is_empty() {
            anyhow::bail!("At least one architecture must be specified");
        }
        if self.binary.trim().is_empty() {
            anyhow::bail!("The tested binary path must not be empty");
        }
        if self.control_file.trim().is_empty() {
            anyhow::bail!("The control file name must not be empty");
        }
        if let Some(suite) = self.suites.iter().find(|suite| suite.is_empty()) {
            anyhow::bail!("Test suite `{}` has no test cases", suite.description);
        }
        Ok(self)
    }

    ///
    /// Returns the binary path with `$HOME` and `${HOME}` expanded.
    ///
    pub fn binary_path(&self) -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_default();
        PathBuf::from(
            self.binary
                .replace("${HOME}", home.as_str())
                .replace("$HOME", home.as_str()),
        )
    }

    fn default_binary() -> String {
        "$HOME/GIT/bpp/src/bpp".to_owned()
    }

    fn default_control_file() -> String {
        "bpp.ctl".to_owned()
    }

    fn default_stdout() -> PathBuf {
        PathBuf::from("tmp")
    }

    fn default_stderr() -> PathBuf {
        PathBuf::from("tmperr")
    }

    fn default_suites() -> Vec<TestSuite> {
        vec![TestSuite::small()]
    }
}
