//!
//! The console reporter.
//!

use std::io::Write;

use colored::Colorize;

use crate::architecture::Architecture;
use crate::color;
use crate::summary::element::Element;
use crate::summary::Summary;

///
/// The console reporter.
///
/// Writes the run header, one banner per architecture block, and one line per test.
///
#[derive(Debug)]
pub struct Reporter<W>
where
    W: Write,
{
    /// The output stream.
    output: W,
    /// Whether the output is colorized.
    colorize: bool,
    /// Whether failure details are printed.
    verbosity: bool,
}

impl<W> Reporter<W>
where
    W: Write,
{
    /// The banner width.
    pub const BANNER_WIDTH: usize = 80;

    /// The bpp logo.
    const LOGO: &'static str = concat!(
        " _                   _  _   \n",
        "| |                 | || |  \n",
        "| |__  _ __  _ __   | || |_ \n",
        "| '_ \\| '_ \\| '_ \\  |__   _|\n",
        "| |_) | |_) | |_) |    | |  \n",
        "|_.__/| .__/| .__/     |_|  \n",
        "      | |   | |             \n",
        "      |_|   |_|             \n",
        "\n",
        "bpp 4 testing framework\n\n",
    );

    ///
    /// A shortcut constructor.
    ///
    pub fn new(output: W, colorize: bool, verbosity: bool) -> Self {
        Self {
            output,
            colorize,
            verbosity,
        }
    }

    ///
    /// Prints the logo.
    ///
    pub fn logo(&mut self) -> anyhow::Result<()> {
        write!(self.output, "{}", Self::LOGO)?;
        Ok(())
    }

    ///
    /// Prints the number of tests and architecture sets.
    ///
    pub fn overview(&mut self, tests: usize, architectures: usize) -> anyhow::Result<()> {
        writeln!(self.output, " {tests} tests found")?;
        writeln!(self.output, " {architectures} arch sets")?;
        Ok(())
    }

    ///
    /// Prints the architecture banner and the column header.
    ///
    pub fn banner(&mut self, architecture: Architecture) -> anyhow::Result<()> {
        let tag = architecture.to_string();
        let centered = format!(
            "{:>width$}",
            tag,
            width = Self::BANNER_WIDTH / 2 + tag.len() / 2
        );
        let banner = format!("{:<width$}", centered, width = Self::BANNER_WIDTH);
        let header = format!(
            "{:<7}   {:<8} {:<width_description$} {:<width_elapsed$} Result",
            " ",
            "Start",
            "Test",
            "Time [s]",
            width_description = Element::DESCRIPTION_WIDTH,
            width_elapsed = Element::ELAPSED_WIDTH,
        );

        writeln!(
            self.output,
            "{}",
            color::paint(banner.as_str(), self.colorize, |text| text
                .bright_white()
                .on_blue()
                .bold())
        )?;
        writeln!(
            self.output,
            "{}",
            color::paint(header.as_str(), self.colorize, |text| text
                .black()
                .on_yellow())
        )?;
        Ok(())
    }

    ///
    /// Prints a test line.
    ///
    pub fn element(&mut self, element: &Element) -> anyhow::Result<()> {
        writeln!(
            self.output,
            "{}",
            element.print(self.colorize, self.verbosity)
        )?;
        self.output.flush()?;
        Ok(())
    }

    ///
    /// Lists the failed tests of every architecture block.
    ///
    pub fn failures(
        &mut self,
        summary: &Summary,
        architectures: &[Architecture],
    ) -> anyhow::Result<()> {
        for architecture in architectures.iter().copied() {
            let failures: Vec<&str> = summary
                .failures(architecture)
                .map(|element| element.case.description.as_str())
                .collect();
            if failures.is_empty() {
                continue;
            }
            writeln!(
                self.output,
                "{} on {}: {}",
                color::paint("Failed", self.colorize, |text| text.bright_red().bold()),
                architecture,
                failures.join(", ")
            )?;
        }
        Ok(())
    }

    ///
    /// Returns the output stream.
    ///
    pub fn into_inner(self) -> W {
        self.output
    }
}
