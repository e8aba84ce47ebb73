//!
//! The bpp tester arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The bpp tester arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Prints the failure reason after every failed test.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the final summary.
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to the YAML tester configuration.
    /// The built-in bpp testbed registry is used by default.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the `bpp` executable.
    /// Overrides the path from the configuration.
    #[arg(short, long)]
    pub binary: Option<PathBuf>,

    /// Runs only tests whose path or description contains any string from the specified ones.
    #[arg(short, long)]
    pub path: Vec<String>,

    /// Runs tests only on the specified architectures.
    /// Available arguments: `CPU`, `SSE`, `AVX`, `AVX2`, `AVX512`.
    #[arg(short, long)]
    pub arch: Vec<bpp_tester::Architecture>,

    /// Output coloring: `auto`, `always`, or `never`.
    #[arg(long, default_value_t = bpp_tester::ColorChoice::Auto)]
    pub color: bpp_tester::ColorChoice,
}

impl Arguments {
    ///
    /// Validate the arguments passed from user, checking invariants that are not
    /// expressed in the type system.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.verbose && arguments.quiet {
            anyhow::bail!("Verbose and quiet modes cannot be enabled simultaneously");
        }

        Ok(arguments)
    }
}
