//!
//! The bpp test case.
//!


use std::path::PathBuf;

///
/// The bpp test case.
///
/// A test case is a directory holding the control file under `data/`, the
/// output written by the binary under `out/`, and the expected output under `ref/`.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct TestCase {
    /// The test root directory.
    pub path: PathBuf,
    /// The human-readable label.
    pub description: String,
}

impl TestCase {
    /// The control files directory.
    pub const DIRECTORY_DATA: &'static str = "data";
    /// The directory the binary writes its output to.
    pub const DIRECTORY_OUTPUT: &'static str = "out";
    /// The expected output directory.
    pub const DIRECTORY_REFERENCE: &'static str = "ref";

    /// The MCMC sample file, which is compared against the reference.
    pub const FILE_MCMC: &'static str = "mcmc.txt";
    /// The main output file.
    pub const FILE_OUT: &'static str = "out.txt";

    ///
    /// A shortcut constructor.
    ///
    pub fn new<P>(path: P, description: String) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            description,
        }
    }

    ///
    /// Returns the control file path.
    ///
    pub fn control_file(&self, name: &str) -> PathBuf {
        self.path.join(Self::DIRECTORY_DATA).join(name)
    }

    ///
    /// Returns the path of the MCMC file produced by the binary.
    ///
    pub fn output_mcmc(&self) -> PathBuf {
        self.path.join(Self::DIRECTORY_OUTPUT).join(Self::FILE_MCMC)
    }

    ///
    /// Returns the path of the main output file produced by the binary.
    ///
    pub fn output_out(&self) -> PathBuf {
        self.path.join(Self::DIRECTORY_OUTPUT).join(Self::FILE_OUT)
    }

    ///
    /// Returns the path of the reference MCMC file.
    ///
    pub fn reference_mcmc(&self) -> PathBuf {
        self.path.join(Self::DIRECTORY_REFERENCE).join(Self::FILE_MCMC)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::TestCase;

    #[test]
    fn derived_paths() {
        let case = TestCase::new("testbed/small/7", "small-A00-7".to_owned());

        assert_eq!(
            case.control_file("bpp.ctl"),
            PathBuf::from("testbed/small/7/data/bpp.ctl")
        );
        assert_eq!(
            case.output_mcmc(),
            PathBuf::from("testbed/small/7/out/mcmc.txt")
        );
        assert_eq!(case.output_out(), PathBuf::from("testbed/small/7/out/out.txt"));
        assert_eq!(
            case.reference_mcmc(),
            PathBuf::from("testbed/small/7/ref/mcmc.txt")
        );
    }
}
