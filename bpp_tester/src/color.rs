//!
//! The console color support.
//!

use std::io::IsTerminal;
use std::process::Command;
use std::process::Stdio;

use colored::ColoredString;

///
/// The console color mode.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Colorize only when stdout is a color-capable terminal.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl ColorChoice {
    ///
    /// Decides whether the output is colorized.
    ///
    pub fn resolve(self) -> bool {
        match self {
            Self::Auto => has_colors(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl std::str::FromStr for ColorChoice {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            string => anyhow::bail!(
                "Unknown color mode `{string}`. Supported modes: auto, always, never"
            ),
        }
    }
}

impl std::fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

///
/// Whether stdout is a terminal reporting more than two colors.
///
/// Any failure to query the terminal means no colors.
///
pub fn has_colors() -> bool {
    if !std::io::stdout().is_terminal() {
        return false;
    }

    let output = match Command::new("tput")
        .arg("colors")
        .stdin(Stdio::inherit())
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) if output.status.success() => output,
        _ => return false,
    };
    supports_colors(String::from_utf8_lossy(output.stdout.as_slice()).as_ref())
}

///
/// Parses the `tput colors` output.
///
pub fn supports_colors(colors: &str) -> bool {
    colors
        .trim()
        .parse::<i64>()
        .map(|colors| colors > 2)
        .unwrap_or(false)
}

///
/// Applies the style if colorizing, otherwise returns the text unchanged.
///
/// Colorizing forces the `colored` override on, whatever the process stdout is.
///
pub fn paint<F>(text: &str, colorize: bool, style: F) -> String
where
    F: FnOnce(&str) -> ColoredString,
{
    if colorize {
        colored::control::set_override(true);
        style(text).to_string()
    } else {
        text.to_owned()
    }
}
