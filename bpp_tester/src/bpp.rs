//!
//! The tested bpp executable.
//!

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;
use std::time::Instant;

use crate::architecture::Architecture;

///
/// The tested bpp executable.
///
#[derive(Debug, Clone)]
pub struct Bpp {
    /// The executable path.
    pub executable: PathBuf,
    /// The file standard output is redirected to.
    stdout: PathBuf,
    /// The file standard error is redirected to.
    stderr: PathBuf,
}

///
/// The result of a single invocation.
///
#[derive(Debug, Clone)]
pub struct Invocation {
    /// The wall-clock time from spawning to exit.
    pub elapsed: Duration,
    /// How the process ended.
    pub status: Status,
}

///
/// How a single invocation ended.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The process exited. `None` if it was killed by a signal.
    Exited(Option<i32>),
    /// The process could not be started.
    SpawnFailed(String),
    /// The process was not started, because the test could not be prepared.
    NotStarted,
}

impl Bpp {
    /// The control file argument.
    pub const ARGUMENT_CONTROL_FILE: &'static str = "--cfile";
    /// The architecture argument.
    pub const ARGUMENT_ARCHITECTURE: &'static str = "--arch";

    ///
    /// A shortcut constructor.
    ///
    /// A bare executable name is resolved through `${PATH}`. Unresolvable names are
    /// kept as is, so the failure surfaces on every invocation.
    ///
    pub fn new(executable: PathBuf, stdout: PathBuf, stderr: PathBuf) -> Self {
        let executable = if executable.components().count() == 1 {
            which::which(executable.as_path()).unwrap_or(executable)
        } else {
            executable
        };
        Self {
            executable,
            stdout,
            stderr,
        }
    }

    ///
    /// Whether the executable exists.
    ///
    pub fn is_available(&self) -> bool {
        self.executable.is_file()
    }

    ///
    /// Returns the stderr capture file path.
    ///
    pub fn stderr_path(&self) -> &Path {
        self.stderr.as_path()
    }

    ///
    /// Builds the command line without redirections.
    ///
    pub fn command(&self, control_file: &Path, architecture: Architecture) -> Command {
        let mut command = Command::new(self.executable.as_path());
        command.arg(Self::ARGUMENT_CONTROL_FILE);
        command.arg(control_file);
        command.arg(Self::ARGUMENT_ARCHITECTURE);
        command.arg(architecture.to_string());
        command.stdin(Stdio::null());
        command
    }

    ///
    /// Runs the executable and blocks until it exits.
    ///
    /// Only failing to create the capture files is an error. A process that cannot
    /// be spawned is reported in the returned status.
    ///
    pub fn run(&self, control_file: &Path, architecture: Architecture) -> anyhow::Result<Invocation> {
        let stdout = File::create(self.stdout.as_path()).map_err(|error| {
            anyhow::anyhow!("Stdout capture file {:?} creating error: {}", self.stdout, error)
        })?;
        let stderr = File::create(self.stderr.as_path()).map_err(|error| {
            anyhow::anyhow!("Stderr capture file {:?} creating error: {}", self.stderr, error)
        })?;

        let mut command = self.command(control_file, architecture);
        command.stdout(Stdio::from(stdout));
        command.stderr(Stdio::from(stderr));

        let start = Instant::now();
        let status = match command.status() {
            Ok(status) => Status::Exited(status.code()),
            Err(error) => Status::SpawnFailed(format!(
                "{} subprocess spawning error: {}",
                self.executable.display(),
                error
            )),
        };

        Ok(Invocation {
            elapsed: start.elapsed(),
            status,
        })
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exited(Some(code)) => write!(f, "exit code {code}"),
            Self::Exited(None) => write!(f, "terminated by signal"),
            Self::SpawnFailed(error) => write!(f, "{error}"),
            Self::NotStarted => write!(f, "not started"),
        }
    }
}
