//!
//! The bpp tester executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => bpp_tester::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            bpp_tester::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = Arguments::validate(arguments)?;

    let colorize = arguments.color.resolve();
    colored::control::set_override(colorize);

    let mut config = match arguments.config {
        Some(ref path) => bpp_tester::Config::from_path(path.as_path())?,
        None => bpp_tester::Config::default(),
    };
    if let Some(binary) = arguments.binary {
        config.binary = binary.to_string_lossy().to_string();
    }

    let filters = bpp_tester::Filters::new(arguments.path, arguments.arch);
    let tester = bpp_tester::BppTester::new(config, filters);

    let mut reporter = bpp_tester::Reporter::new(std::io::stdout(), colorize, arguments.verbose);
    reporter.logo()?;

    println!(
        "    {} {} v{} ({})",
        "Starting".bright_green().bold(),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        tester.bpp().executable.display(),
    );
    if !tester.bpp().is_available() {
        println!(
            "     {} the `{}` executable not found, all tests will fail",
            "Warning".bright_yellow().bold(),
            tester.bpp().executable.display(),
        );
    }
    if arguments.verbose {
        println!(
            "     {} binary diagnostics to {}",
            "Writing".bright_green().bold(),
            tester.bpp().stderr_path().display(),
        );
    }

    let mut summary = bpp_tester::Summary::new(arguments.quiet);

    let run_time_start = Instant::now();
    tester.run(&mut summary, &mut reporter)?;

    if !arguments.quiet {
        reporter.failures(&summary, tester.architectures().as_slice())?;
    }
    print!("{summary}");
    println!(
        "    {} running tests in {}m{:02}s",
        "Finished".bright_green().bold(),
        run_time_start.elapsed().as_secs() / 60,
        run_time_start.elapsed().as_secs() % 60,
    );

    if !summary.is_successful() {
        anyhow::bail!("{} of {} tests failed", summary.failed(), summary.passed() + summary.failed());
    }

    Ok(())
}
